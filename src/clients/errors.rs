//! Error types for building and dispatching Omise requests.
//!
//! A dispatch call fails with exactly one [`OmiseError`] class:
//!
//! - [`OmiseError::Config`]: no usable credential for the request
//! - [`OmiseError::Build`]: the operation could not be encoded; nothing was sent
//! - [`OmiseError::Transport`]: the exchange failed, or a received body could
//!   not be decoded (the raw bytes are kept)
//! - [`OmiseError::Provider`]: the API answered with a non-200 status
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::OmiseError;
//!
//! match client.execute_json::<ScheduleList, _>(&ListSchedules::default()).await {
//!     Ok(list) => println!("{} schedules", list.total),
//!     Err(OmiseError::Provider(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(OmiseError::Transport(e)) => println!("raw body: {:?}", e.body()),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::error::ConfigError;
use crate::operations::ContentType;

/// Error returned by the API on a non-200 response.
///
/// The status code comes from the HTTP layer; the remaining fields are
/// decoded from the response body.
#[derive(Clone, Debug, Error, PartialEq, Eq, Deserialize)]
#[error("({status_code}/{code}) {message}")]
pub struct ProviderError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub status_code: u16,
    /// Object type reported by the API, normally `error`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub object: String,
    /// Documentation link for the error code.
    #[serde(default)]
    pub location: Option<String>,
    /// Machine-readable error code, e.g. `invalid_card`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    /// Human-readable explanation.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl ProviderError {
    /// Decodes an error response body received with `status_code`.
    ///
    /// The body must be a JSON object; `null` string fields decode as empty.
    ///
    /// # Errors
    ///
    /// Returns the decoding failure if the body is not a JSON object or a
    /// field has the wrong type.
    pub fn from_body(status_code: u16, body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
        let mut error: Self = serde_json::from_value(serde_json::Value::Object(fields))?;
        error.status_code = status_code;
        Ok(error)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Failure to encode a form body.
#[derive(Debug, Error)]
pub enum FormError {
    /// The operation serialized to something other than a struct or map.
    #[error("Form body must be a struct or map, got {kind}.")]
    NotAnObject {
        /// JSON kind the operation serialized to.
        kind: &'static str,
    },

    /// The operation could not be serialized.
    #[error("Failed to serialize form fields: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Local failure while constructing a request body.
///
/// Build errors are raised before any network I/O.
#[derive(Debug, Error)]
pub enum BuildError {
    /// JSON serialization of the operation failed.
    #[error("Failed to serialize operation as JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// Form encoding of the operation failed.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The multipart body could not be assembled.
    #[error("Failed to build multipart body: {0}")]
    Multipart(#[source] reqwest::Error),

    /// The operation declares an encoding the chosen entry point cannot send.
    #[error("Operation declares content type {content_type:?}, which this entry point cannot send.")]
    UnsupportedEncoding {
        /// The declared content type.
        content_type: ContentType,
    },
}

/// Failure of the exchange itself, or of decoding a received body.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout, URL or body-read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response was received but its body could not be decoded.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
        /// The raw response body.
        body: Vec<u8>,
    },
}

impl TransportError {
    /// Returns the raw response bytes available at the point of failure.
    ///
    /// Empty for network failures, where no body was read.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        match self {
            Self::Network(_) => &[],
            Self::Decode { body, .. } => body,
        }
    }
}

/// Unified error type for every client operation.
#[derive(Debug, Error)]
pub enum OmiseError {
    /// Credential selection failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The exchange failed or the response could not be decoded.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API returned an error response.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_decodes_body_fields() {
        let body = r#"{"object":"error","location":"https://www.omise.co/api-errors#invalid-card","code":"invalid_card","message":"bad"}"#;
        let mut error: ProviderError = serde_json::from_str(body).unwrap();
        error.status_code = 402;

        assert_eq!(error.object, "error");
        assert_eq!(error.code, "invalid_card");
        assert_eq!(error.message, "bad");
        assert_eq!(error.to_string(), "(402/invalid_card) bad");
    }

    #[test]
    fn test_provider_error_tolerates_missing_fields() {
        let error = ProviderError::from_body(500, b"{}").unwrap();
        assert_eq!(error.status_code, 500);
        assert!(error.code.is_empty());
        assert!(error.location.is_none());
    }

    #[test]
    fn test_provider_error_reads_null_strings_as_empty() {
        let body = br#"{"object":null,"code":null,"message":"gone","location":null}"#;
        let error = ProviderError::from_body(404, body).unwrap();

        assert!(error.object.is_empty());
        assert!(error.code.is_empty());
        assert_eq!(error.message, "gone");
        assert_eq!(error.to_string(), "(404/) gone");
    }

    #[test]
    fn test_provider_error_rejects_non_object_bodies() {
        assert!(ProviderError::from_body(500, b"[]").is_err());
        assert!(ProviderError::from_body(500, b"\"oops\"").is_err());
        assert!(ProviderError::from_body(500, b"null").is_err());
        assert!(ProviderError::from_body(500, br#"{"code":42}"#).is_err());
    }

    #[test]
    fn test_decode_error_keeps_raw_body() {
        let source = serde_json::from_slice::<serde_json::Value>(b"<html>").unwrap_err();
        let error = TransportError::Decode {
            status: 200,
            source,
            body: b"<html>".to_vec(),
        };

        assert_eq!(error.body(), b"<html>");
        assert!(error.to_string().contains("status 200"));
    }

    #[test]
    fn test_unsupported_encoding_names_content_type() {
        let error = BuildError::UnsupportedEncoding {
            content_type: ContentType::Multipart,
        };
        assert!(error.to_string().contains("Multipart"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let provider: &dyn std::error::Error = &ProviderError {
            status_code: 404,
            object: "error".to_string(),
            location: None,
            code: "not_found".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(provider.to_string(), "(404/not_found) missing");

        let unified: &dyn std::error::Error = &OmiseError::Config(ConfigError::NoSecretCredential);
        assert!(unified.source().is_none());
    }
}
