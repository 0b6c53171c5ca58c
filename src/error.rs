//! Error types for the Omise API client.
//!
//! This module contains [`ConfigError`], returned when a client is configured
//! with invalid or missing credentials, or when a request cannot be matched
//! with a credential at dispatch time.
//!
//! # Example
//!
//! ```rust
//! use omise_api::{ConfigError, PublicKey};
//!
//! let result = PublicKey::new("skey_test_123");
//! assert!(matches!(result, Err(ConfigError::InvalidPublicKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or selecting a
/// credential for a request.
///
/// Construction-time variants fail fast, before any request is built.
/// [`ConfigError::NoSecretCredential`] and
/// [`ConfigError::UnrecognizedEndpoint`] are raised per request, before any
/// network I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Public key does not carry the `pkey_` prefix.
    #[error("Invalid public key. Omise public keys start with 'pkey_'.")]
    InvalidPublicKey,

    /// Secret key does not carry the `skey_` prefix.
    #[error("Invalid secret key. Omise secret keys start with 'skey_'.")]
    InvalidSecretKey,

    /// Chain key does not carry the `ckey_` prefix.
    #[error("Invalid chain key. Omise chain keys start with 'ckey_'.")]
    InvalidChainKey,

    /// No credential at all was supplied.
    #[error("Missing credentials: at least one of public key, secret key or chain key must be set.")]
    MissingCredentials,

    /// A secret-kind request was issued by a client holding neither a secret
    /// key nor a chain key.
    #[error("Neither secret key nor chain key is configured for a request that requires one.")]
    NoSecretCredential,

    /// The operation targets an endpoint with no known key kind.
    #[error("Unrecognized endpoint '{endpoint}': no key kind is registered for it.")]
    UnrecognizedEndpoint {
        /// The endpoint identifier that could not be classified.
        endpoint: String,
    },

    /// API version was set to an empty string.
    #[error("API version cannot be empty. Omit it to use the account default.")]
    EmptyApiVersion,
}
