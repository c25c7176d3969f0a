//! Product entity as served by the remote catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned product identity.
///
/// The backend may emit ids as JSON numbers or strings; both are kept as text
/// since the client only ever puts them back into a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawScalar", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<RawScalar> for ProductId {
    fn from(raw: RawScalar) -> Self {
        Self(raw.into_text())
    }
}

/// A product record from the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
}

impl Product {
    /// Editable fields of this product, as staged by the edit modal
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
        }
    }
}

/// Request body for create and update: all three fields, always together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Either a JSON string or a JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Number(serde_json::Number),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Number(n) => n.to_string(),
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RawScalar::deserialize(deserializer).map(RawScalar::into_text)
}
