//! Validated newtype wrappers for client credentials and settings.
//!
//! Omise keys are recognised by their prefix. Each wrapper rejects values
//! without the right prefix so a secret key can never be configured where a
//! public key is expected.

use crate::error::ConfigError;
use std::fmt;

/// A validated Omise public key (`pkey_...`).
///
/// Public keys authorize requests against the tokenization endpoint.
///
/// # Example
///
/// ```rust
/// use omise_api::PublicKey;
///
/// let key = PublicKey::new("pkey_test_5xyz").unwrap();
/// assert_eq!(key.as_ref(), "pkey_test_5xyz");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    const PREFIX: &'static str = "pkey_";

    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPublicKey`] if the key does not start
    /// with `pkey_`.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if !key.starts_with(Self::PREFIX) {
            return Err(ConfigError::InvalidPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Omise secret key (`skey_...`).
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `SecretKey(*****)`.
///
/// ```rust
/// use omise_api::SecretKey;
///
/// let key = SecretKey::new("skey_test_5xyz").unwrap();
/// assert_eq!(format!("{:?}", key), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    const PREFIX: &'static str = "skey_";

    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSecretKey`] if the key does not start
    /// with `skey_`.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if !key.starts_with(Self::PREFIX) {
            return Err(ConfigError::InvalidSecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated Omise chain key (`ckey_...`).
///
/// Chain keys let a platform act on behalf of a sub-merchant and stand in
/// for the secret key on secret-kind requests. `Debug` output is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct ChainKey(String);

impl ChainKey {
    const PREFIX: &'static str = "ckey_";

    /// Creates a new validated chain key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidChainKey`] if the key does not start
    /// with `ckey_`.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if !key.starts_with(Self::PREFIX) {
            return Err(ConfigError::InvalidChainKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ChainKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChainKey(*****)")
    }
}

/// The Omise API version sent in the `Omise-Version` header.
///
/// Versions are date strings such as `2019-05-29`. The value is not checked
/// beyond being non-empty; the server rejects unknown versions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiVersion`] if the version is empty.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ConfigError::EmptyApiVersion);
        }
        Ok(Self(version))
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
