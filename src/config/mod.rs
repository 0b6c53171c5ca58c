//! Configuration types for the Omise API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: credentials, endpoint overrides and request metadata
//! - [`ClientConfigBuilder`]: builder for [`ClientConfig`]
//! - [`PublicKey`], [`SecretKey`], [`ChainKey`]: prefix-validated credentials
//! - [`ApiVersion`]: value of the `Omise-Version` header
//! - [`Endpoint`], [`EndpointRegistry`], [`KeyKind`]: endpoint identifiers,
//!   base-URL resolution and the credential class each endpoint requires
//!
//! # Example
//!
//! ```rust
//! use omise_api::{ClientConfig, Endpoint, PublicKey, SecretKey};
//!
//! let config = ClientConfig::builder()
//!     .public_key(PublicKey::new("pkey_test_123").unwrap())
//!     .secret_key(SecretKey::new("skey_test_123").unwrap())
//!     .endpoint(Endpoint::API, "https://api.staging-omise.co")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoints().resolve(&Endpoint::API), "https://api.staging-omise.co");
//! ```

mod endpoint;
mod newtypes;

pub use endpoint::{Endpoint, EndpointRegistry, KeyKind};
pub use newtypes::{ApiVersion, ChainKey, PublicKey, SecretKey};

use crate::error::ConfigError;

/// Configuration for an Omise [`Client`](crate::Client).
///
/// Built once and never mutated afterwards, so a client holding it can be
/// shared freely across tasks.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    public_key: Option<PublicKey>,
    secret_key: Option<SecretKey>,
    chain_key: Option<ChainKey>,
    endpoints: EndpointRegistry,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    debug: bool,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the public key, if configured.
    #[must_use]
    pub const fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Returns the secret key, if configured.
    #[must_use]
    pub const fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }

    /// Returns the chain key, if configured.
    #[must_use]
    pub const fn chain_key(&self) -> Option<&ChainKey> {
        self.chain_key.as_ref()
    }

    /// Returns the endpoint registry with any overrides.
    #[must_use]
    pub const fn endpoints(&self) -> &EndpointRegistry {
        &self.endpoints
    }

    /// Returns the API version, if configured.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether response bodies are logged.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// At least one credential is required. Everything else is optional:
///
/// - `endpoint`: no overrides, every endpoint resolves to its literal
/// - `api_version`: `None`, the account default applies
/// - `user_agent_prefix`: `None`
/// - `debug`: `false`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    public_key: Option<PublicKey>,
    secret_key: Option<SecretKey>,
    chain_key: Option<ChainKey>,
    endpoints: EndpointRegistry,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    debug: bool,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public key.
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the secret key.
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the chain key, used for secret-kind requests when no secret key
    /// is configured.
    #[must_use]
    pub fn chain_key(mut self, key: ChainKey) -> Self {
        self.chain_key = Some(key);
        self
    }

    /// Overrides the base URL of `endpoint`.
    ///
    /// ```rust
    /// use omise_api::{ClientConfig, Endpoint, SecretKey};
    ///
    /// let config = ClientConfig::builder()
    ///     .secret_key(SecretKey::new("skey_test_123").unwrap())
    ///     .endpoint(Endpoint::VAULT, "http://localhost:9000")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.endpoints().resolve(&Endpoint::VAULT), "http://localhost:9000");
    /// assert_eq!(config.endpoints().resolve(&Endpoint::API), "https://api.omise.co");
    /// ```
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint, url: impl Into<String>) -> Self {
        self.endpoints.insert(endpoint, url);
        self
    }

    /// Sets the API version sent as `Omise-Version`.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Enables logging of raw response bodies at debug level.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if no public, secret or
    /// chain key was set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if self.public_key.is_none() && self.secret_key.is_none() && self.chain_key.is_none() {
            return Err(ConfigError::MissingCredentials);
        }

        Ok(ClientConfig {
            public_key: self.public_key,
            secret_key: self.secret_key,
            chain_key: self.chain_key,
            endpoints: self.endpoints,
            api_version: self.api_version,
            user_agent_prefix: self.user_agent_prefix,
            debug: self.debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_a_credential() {
        let result = ClientConfigBuilder::new().debug(true).build();
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_builder_accepts_chain_key_alone() {
        let config = ClientConfig::builder()
            .chain_key(ChainKey::new("ckey_test_1").unwrap())
            .build()
            .unwrap();

        assert!(config.public_key().is_none());
        assert!(config.secret_key().is_none());
        assert!(config.chain_key().is_some());
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClientConfig::builder()
            .secret_key(SecretKey::new("skey_test_1").unwrap())
            .build()
            .unwrap();

        assert!(config.api_version().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.endpoints().is_empty());
        assert!(!config.debug());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ClientConfig::builder()
            .public_key(PublicKey::new("pkey_test_1").unwrap())
            .secret_key(SecretKey::new("skey_test_1").unwrap())
            .api_version(ApiVersion::new("2019-05-29").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .endpoint(Endpoint::API, "http://localhost:1234")
            .debug(true)
            .build()
            .unwrap();

        assert_eq!(config.api_version().unwrap().to_string(), "2019-05-29");
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.0"));
        assert_eq!(
            config.endpoints().resolve(&Endpoint::API),
            "http://localhost:1234"
        );
        assert!(config.debug());
    }

    #[test]
    fn test_config_debug_output_masks_secrets() {
        let config = ClientConfig::builder()
            .secret_key(SecretKey::new("skey_test_topsecret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ClientConfig"));
        assert!(!debug_str.contains("topsecret"));
    }
}
