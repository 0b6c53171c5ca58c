//! # Omise API Rust client
//!
//! A client for the Omise payment REST API. Typed operation values describe
//! themselves (endpoint, method, path, content type) and the client turns
//! them into authenticated HTTP requests, then decodes either the typed
//! response or a structured error.
//!
//! ## Overview
//!
//! - [`Operation`]: the contract every request payload implements
//! - [`ClientConfig`] and [`ClientConfigBuilder`]: credentials, endpoint
//!   overrides, API version, debug logging
//! - [`Client`]: JSON, form and multipart entry points
//! - [`OmiseError`]: configuration, build, transport or provider failure
//!
//! ## Quick Start
//!
//! ```rust
//! use omise_api::{Client, ClientConfig, Endpoint, PublicKey, SecretKey};
//!
//! let config = ClientConfig::builder()
//!     .public_key(PublicKey::new("pkey_test_123").unwrap())
//!     .secret_key(SecretKey::new("skey_test_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::from_config(config);
//! assert_eq!(client.config().endpoints().resolve(&Endpoint::API), "https://api.omise.co");
//! ```
//!
//! ## Sending operations
//!
//! ```rust,ignore
//! use omise_api::{Client, ListSchedules, ScheduleList, OmiseError};
//!
//! let client = Client::new("pkey_test_...", "skey_test_...")?;
//!
//! match client.execute_json::<ScheduleList, _>(&ListSchedules::default()).await {
//!     Ok(list) => println!("{} schedules", list.total),
//!     Err(OmiseError::Provider(e)) => println!("{}: {}", e.code, e.message),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Credentials
//!
//! Each endpoint declares the key kind it needs. The vault (card
//! tokenization) uses the public key; the API endpoints use the secret key,
//! or the chain key when no secret key is configured.
//!
//! ## Design Principles
//!
//! - **No global state**: transport and encoder are owned by the client
//! - **Fail-fast validation**: credentials are checked on construction
//! - **Thread-safe**: `Client` is `Send + Sync` and immutable after creation
//! - **No hidden retries**: one call, one round trip

pub mod clients;
pub mod config;
pub mod error;
pub mod operations;

pub use config::{
    ApiVersion, ChainKey, ClientConfig, ClientConfigBuilder, Endpoint, EndpointRegistry, KeyKind,
    PublicKey, SecretKey,
};
pub use error::ConfigError;

pub use clients::{
    encode_form, BuildError, Client, Encoding, FormError, HttpMethod, OmiseError, ProviderError,
    RequestBuilder, TransportError,
};

pub use operations::{
    ContentType, CreateOnboard, CreateToken, Description, Document, ListSchedules, Operation,
    ScheduleList, Token, Upload, UploadDocument, UploadParts,
};
