//! The Omise API client and response dispatcher.
//!
//! [`Client`] composes the endpoint registry, credential selection and
//! request construction with a dispatcher that performs one round trip per
//! call and decodes the response.

use serde::de::DeserializeOwned;

use crate::clients::errors::{BuildError, OmiseError, ProviderError, TransportError};
use crate::clients::http_request::{Encoding, RequestBuilder};
use crate::config::{ChainKey, ClientConfig, PublicKey, SecretKey};
use crate::error::ConfigError;
use crate::operations::{Operation, Upload};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The only status treated as success.
const SUCCESS_STATUS: u16 = 200;

/// Client for the Omise REST API.
///
/// The client is configured once and never mutated afterwards. It holds no
/// per-request state, so a single instance can serve concurrent calls.
/// Every `execute_*` call performs exactly one round trip with no retry;
/// timeouts belong on the injected [`reqwest::Client`].
///
/// # Example
///
/// ```rust,ignore
/// use omise_api::{Client, ListSchedules, ScheduleList};
///
/// let client = Client::new("pkey_test_...", "skey_test_...")?;
/// let schedules: ScheduleList = client.execute_json(&ListSchedules::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    transport: reqwest::Client,
    config: ClientConfig,
    user_agent: String,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from a public key and a secret key.
    ///
    /// Either key may be empty, but not both. Non-empty keys must carry
    /// their `pkey_` / `skey_` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if both keys are empty,
    /// or the matching `Invalid*Key` variant for a malformed key.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created (TLS
    /// initialization failure).
    pub fn new(public_key: &str, secret_key: &str) -> Result<Self, ConfigError> {
        let mut builder = ClientConfig::builder();
        if !public_key.is_empty() {
            builder = builder.public_key(PublicKey::new(public_key)?);
        }
        if !secret_key.is_empty() {
            builder = builder.secret_key(SecretKey::new(secret_key)?);
        }
        Ok(Self::from_config(builder.build()?))
    }

    /// Creates a client authorized by a chain key only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidChainKey`] if the key is empty or lacks
    /// the `ckey_` prefix.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    pub fn with_chain_key(chain_key: &str) -> Result<Self, ConfigError> {
        let config = ClientConfig::builder()
            .chain_key(ChainKey::new(chain_key)?)
            .build()?;
        Ok(Self::from_config(config))
    }

    /// Creates a client with a default rustls transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self::with_transport(config, transport)
    }

    /// Creates a client over a caller-supplied transport, e.g. one with
    /// timeouts or a proxy configured.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: reqwest::Client) -> Self {
        let user_agent = Self::user_agent(&config);
        Self {
            transport,
            config,
            user_agent,
        }
    }

    fn user_agent(config: &ClientConfig) -> String {
        let prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        if rust_version.is_empty() {
            format!("{prefix}OmiseRust/{SDK_VERSION}")
        } else {
            format!("{prefix}OmiseRust/{SDK_VERSION} Rust/{rust_version}")
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the `User-Agent` sent with every request.
    ///
    /// The `Rust/` tag is the crate's declared minimum Rust version, not the
    /// compiler it was built with.
    #[must_use]
    pub fn user_agent_string(&self) -> &str {
        &self.user_agent
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.transport, &self.config, &self.user_agent)
    }

    /// Builds, without sending, a JSON request for `operation`.
    ///
    /// # Errors
    ///
    /// See [`RequestBuilder::json`].
    pub fn json_request<O: Operation>(&self, operation: &O) -> Result<reqwest::Request, OmiseError> {
        self.builder().json(operation)
    }

    /// Builds, without sending, a form-encoded request for `operation`.
    ///
    /// # Errors
    ///
    /// See [`RequestBuilder::form`].
    pub fn form_request<O: Operation>(&self, operation: &O) -> Result<reqwest::Request, OmiseError> {
        self.builder().form(operation)
    }

    /// Builds, without sending, a multipart upload request for `operation`.
    ///
    /// # Errors
    ///
    /// See [`RequestBuilder::multipart`].
    pub fn upload_request<U: Upload>(&self, operation: &U) -> Result<reqwest::Request, OmiseError> {
        self.builder().multipart(operation)
    }

    /// Sends `operation` as JSON and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns exactly one of the [`OmiseError`] classes; see [`Self::execute`].
    pub async fn execute_json<T, O>(&self, operation: &O) -> Result<T, OmiseError>
    where
        T: DeserializeOwned,
        O: Operation,
    {
        let request = self.json_request(operation)?;
        self.execute(request).await
    }

    /// Sends `operation` form-encoded and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns exactly one of the [`OmiseError`] classes; see [`Self::execute`].
    pub async fn execute_form<T, O>(&self, operation: &O) -> Result<T, OmiseError>
    where
        T: DeserializeOwned,
        O: Operation,
    {
        let request = self.form_request(operation)?;
        self.execute(request).await
    }

    /// Uploads `operation` as multipart and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns exactly one of the [`OmiseError`] classes; see [`Self::execute`].
    pub async fn execute_upload<T, U>(&self, operation: &U) -> Result<T, OmiseError>
    where
        T: DeserializeOwned,
        U: Upload,
    {
        let request = self.upload_request(operation)?;
        self.execute(request).await
    }

    /// Sends `operation` in the encoding its description declares.
    ///
    /// JSON and undeclared content types go out as JSON, form content types
    /// as form fields. Multipart operations must use
    /// [`Self::execute_upload`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedEncoding`] for multipart operations,
    /// otherwise as [`Self::execute`].
    pub async fn send<T, O>(&self, operation: &O) -> Result<T, OmiseError>
    where
        T: DeserializeOwned,
        O: Operation,
    {
        let content_type = operation.describe().content_type;
        match Encoding::for_content_type(content_type) {
            Encoding::Json => self.execute_json(operation).await,
            Encoding::Form => self.execute_form(operation).await,
            Encoding::Multipart => Err(BuildError::UnsupportedEncoding { content_type }.into()),
        }
    }

    /// Sends a built request and decodes a 200 response into `T`.
    ///
    /// # Errors
    ///
    /// - [`OmiseError::Provider`] for any non-200 status with a decodable
    ///   error body
    /// - [`TransportError::Network`] if the exchange fails
    /// - [`TransportError::Decode`] if either the error body or the success
    ///   body cannot be decoded; the raw bytes are attached
    pub async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, OmiseError> {
        let body = self.dispatch(request).await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(error = %source, "Failed to decode Omise response");
            TransportError::Decode {
                status: SUCCESS_STATUS,
                source,
                body,
            }
            .into()
        })
    }

    /// Sends a built request, checks the status and drops a 200 body
    /// without decoding it.
    ///
    /// # Errors
    ///
    /// As [`Self::execute`], minus success-body decoding.
    pub async fn execute_discard(&self, request: reqwest::Request) -> Result<(), OmiseError> {
        self.dispatch(request).await.map(drop)
    }

    /// Performs one round trip and returns the body of a 200 response.
    async fn dispatch(&self, request: reqwest::Request) -> Result<Vec<u8>, OmiseError> {
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(TransportError::Network)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(TransportError::Network)?
            .to_vec();

        if self.config.debug() {
            tracing::debug!(
                status,
                body = %String::from_utf8_lossy(&body),
                "Omise response"
            );
        }

        if status == SUCCESS_STATUS {
            return Ok(body);
        }

        match ProviderError::from_body(status, &body) {
            Ok(error) => {
                tracing::warn!(
                    %method,
                    path = %path,
                    status,
                    code = %error.code,
                    "Omise API returned an error"
                );
                Err(error.into())
            }
            Err(source) => {
                tracing::warn!(
                    %method,
                    path = %path,
                    status,
                    error = %source,
                    "Failed to decode Omise error response"
                );
                Err(TransportError::Decode {
                    status,
                    source,
                    body,
                }
                .into())
            }
        }
    }
}
