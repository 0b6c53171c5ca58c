//! Per-request credential selection.
//!
//! The credential is chosen from the key kind of the operation's endpoint
//! every time a request is built, since a client may hold only one of the
//! two secret-class keys.

use crate::config::{ClientConfig, KeyKind};
use crate::error::ConfigError;
use crate::operations::Description;

/// Picks the credential that authorizes a request described by `description`.
///
/// - public endpoints use the public key; an absent key yields an empty
///   credential and the server rejects the request
/// - secret endpoints use the secret key, falling back to the chain key
/// - endpoints with no key kind are rejected
///
/// # Errors
///
/// Returns [`ConfigError::NoSecretCredential`] when a secret endpoint is
/// targeted without a secret or chain key, and
/// [`ConfigError::UnrecognizedEndpoint`] when the endpoint has no key kind.
pub fn select_credential<'a>(
    description: &Description,
    config: &'a ClientConfig,
) -> Result<&'a str, ConfigError> {
    match description.key_kind() {
        Some(KeyKind::Public) => Ok(config.public_key().map_or("", AsRef::as_ref)),
        Some(KeyKind::Secret) => config
            .secret_key()
            .map(AsRef::as_ref)
            .or_else(|| config.chain_key().map(AsRef::as_ref))
            .ok_or(ConfigError::NoSecretCredential),
        None => Err(ConfigError::UnrecognizedEndpoint {
            endpoint: description.endpoint.to_string(),
        }),
    }
}
