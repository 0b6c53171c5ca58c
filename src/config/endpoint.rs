//! Logical endpoint identifiers and their base-URL resolution.
//!
//! An [`Endpoint`] names one of the Omise API hosts. Its value doubles as the
//! production base URL, so resolution falls back to the identifier itself
//! when no override is registered in the client's [`EndpointRegistry`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// The credential class that authorizes a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Publishable key, used by the tokenization endpoint.
    Public,
    /// Secret key (or chain key standing in for it).
    Secret,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Secret => write!(f, "secret"),
        }
    }
}

/// A logical API endpoint.
///
/// # Example
///
/// ```rust
/// use omise_api::{Endpoint, KeyKind};
///
/// assert_eq!(Endpoint::API.as_str(), "https://api.omise.co");
/// assert_eq!(Endpoint::VAULT.key_kind(), Some(KeyKind::Public));
/// assert_eq!(Endpoint::custom("https://other.test").key_kind(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// Production REST API.
    pub const API: Self = Self(Cow::Borrowed("https://api.omise.co"));
    /// Staging REST API.
    pub const API_STAGING: Self = Self(Cow::Borrowed("https://api.staging-omise.co"));
    /// Card tokenization vault.
    pub const VAULT: Self = Self(Cow::Borrowed("https://vault.omise.co"));

    /// Key kinds per known endpoint. Identifiers absent from this table
    /// cannot be authorized.
    const KEY_KINDS: &'static [(&'static str, KeyKind)] = &[
        ("https://api.omise.co", KeyKind::Secret),
        ("https://api.staging-omise.co", KeyKind::Secret),
        ("https://vault.omise.co", KeyKind::Public),
    ];

    /// Creates an identifier outside the built-in set.
    ///
    /// Custom endpoints have no key kind; requests against them fail with
    /// [`ConfigError::UnrecognizedEndpoint`](crate::ConfigError::UnrecognizedEndpoint).
    #[must_use]
    pub fn custom(identifier: impl Into<String>) -> Self {
        Self(Cow::Owned(identifier.into()))
    }

    /// Returns the identifier, which is also its default base URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the credential class this endpoint requires, if known.
    #[must_use]
    pub fn key_kind(&self) -> Option<KeyKind> {
        Self::KEY_KINDS
            .iter()
            .find(|(identifier, _)| *identifier == self.as_str())
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps endpoint identifiers to base URLs, with per-client overrides.
///
/// Override URLs are not validated here; a malformed value surfaces as a
/// transport error when a request is sent.
#[derive(Clone, Debug, Default)]
pub struct EndpointRegistry {
    overrides: HashMap<Endpoint, String>,
}

impl EndpointRegistry {
    /// Creates a registry with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the base URL used for `endpoint`.
    pub fn insert(&mut self, endpoint: Endpoint, url: impl Into<String>) {
        self.overrides.insert(endpoint, url.into());
    }

    /// Resolves an endpoint to its base URL.
    #[must_use]
    pub fn resolve<'a>(&'a self, endpoint: &'a Endpoint) -> &'a str {
        self.overrides
            .get(endpoint)
            .map_or_else(|| endpoint.as_str(), String::as_str)
    }

    /// Returns `true` if no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
