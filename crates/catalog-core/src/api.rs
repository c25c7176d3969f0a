//! Contract for the remote products resource

use async_trait::async_trait;

use crate::error::Result;
use crate::product::{Product, ProductDraft, ProductId};

/// The four operations the UI performs against the catalog backend.
///
/// Futures are `?Send`: the browser implementation runs on the single
/// wasm event loop.
#[async_trait(?Send)]
pub trait ProductApi {
    /// Full collection, in server order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Create a product; the server assigns its id
    async fn create(&self, draft: &ProductDraft) -> Result<Product>;

    /// Replace all three editable fields of `id`
    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<()>;

    async fn delete(&self, id: &ProductId) -> Result<()>;
}

/// URL layout of the products resource under an API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(api_base: &str) -> Self {
        Self {
            base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/products/`
    pub fn collection(&self) -> String {
        format!("{}/products/", self.base)
    }

    /// `{base}/products/{id}/`
    pub fn item(&self, id: &ProductId) -> String {
        format!("{}/products/{}/", self.base, id)
    }
}
