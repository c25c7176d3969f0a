//! Error types for the catalog client
//!
//! Every failure the UI can hit ends up as one of these variants, and every
//! variant renders to a single display string through [`Error::display_message`].
//! Nothing outside this module knows the server's error body layout.

use serde::Deserialize;
use thiserror::Error;

/// Shown when the server gave us nothing structured to report.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// Main error type for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No response at all (network down, CORS, DNS...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server rejected the payload with a field -> messages map
    #[error("Validation failed: {}", format_details(.0))]
    Validation(Vec<(String, Vec<String>)>),

    /// Server failed without a `details` map
    #[error("Server returned HTTP {0}")]
    Server(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Price could not be parsed as a number at submission time
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    details: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        Error::Encode(msg.into())
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// A body of the form `{"details": {"field": ["msg", ...]}}` becomes
    /// [`Error::Validation`] with field order kept as sent. Anything else,
    /// including an unparseable body, becomes [`Error::Server`].
    pub fn from_response(status: u16, body: &str) -> Self {
        let details = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.details)
            .filter(|d| !d.is_empty());

        match details {
            Some(map) => Error::Validation(
                map.into_iter()
                    .map(|(field, messages)| (field, messages_of(messages)))
                    .collect(),
            ),
            None => Error::Server(status),
        }
    }

    /// The one string shown to the user for this error.
    pub fn display_message(&self) -> String {
        match self {
            Error::Validation(details) => format!("Error: {}", format_details(details)),
            Error::InvalidPrice(_) => "Error: price: A valid number is required.".to_string(),
            _ => format!("Error: {}", FALLBACK_MESSAGE),
        }
    }
}

fn messages_of(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        serde_json::Value::String(s) => vec![s],
        other => vec![other.to_string()],
    }
}

/// `field: m1, m2, field2: m3`
fn format_details(details: &[(String, Vec<String>)]) -> String {
    details
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_are_flattened_in_server_order() {
        let body = r#"{"details": {"price": ["A valid number is required.", "Too big."], "name": ["This field may not be blank."]}}"#;
        let err = Error::from_response(400, body);

        assert_eq!(
            err.display_message(),
            "Error: price: A valid number is required., Too big., name: This field may not be blank."
        );
    }

    #[test]
    fn test_missing_details_uses_fallback() {
        let err = Error::from_response(500, r#"{"detail": "boom"}"#);
        assert_eq!(err, Error::Server(500));
        assert_eq!(err.display_message(), "Error: An unexpected error occurred.");

        let err = Error::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err, Error::Server(502));
    }

    #[test]
    fn test_empty_details_uses_fallback() {
        let err = Error::from_response(400, r#"{"details": {}}"#);
        assert_eq!(err, Error::Server(400));
    }

    #[test]
    fn test_single_string_message_is_accepted() {
        let err = Error::from_response(400, r#"{"details": {"name": "Required"}}"#);
        assert_eq!(err.display_message(), "Error: name: Required");
    }

    #[test]
    fn test_transport_and_decode_use_fallback() {
        assert_eq!(
            Error::transport("connection refused").display_message(),
            "Error: An unexpected error occurred."
        );
        assert_eq!(
            Error::decode("expected value").display_message(),
            "Error: An unexpected error occurred."
        );
    }

    #[test]
    fn test_invalid_price_message() {
        let err = Error::InvalidPrice(".".into());
        assert_eq!(err.display_message(), "Error: price: A valid number is required.");
    }
}
