//! Request construction and dispatch for the Omise API.
//!
//! # Overview
//!
//! - [`Client`]: façade with one entry point per encoding
//! - [`RequestBuilder`]: turns an [`Operation`](crate::Operation) into a
//!   [`reqwest::Request`] (JSON, form or multipart)
//! - [`select_credential`]: per-request credential choice by key kind
//! - [`encode_form`]: bracketed URL-encoded form encoding
//! - [`OmiseError`]: unified failure type with [`BuildError`],
//!   [`TransportError`] and [`ProviderError`] classes
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::{Client, CreateToken, Token};
//!
//! let client = Client::new("pkey_test_...", "skey_test_...")?;
//!
//! // Inspect the request without sending it
//! let request = client.form_request(&create_token)?;
//! println!("{} {}", request.method(), request.url());
//!
//! // Or send it and decode the response
//! let token: Token = client.execute_form(&create_token).await?;
//! ```
//!
//! # Success and failure
//!
//! Only status 200 is success. Every other status is decoded as a
//! [`ProviderError`]. Nothing is retried.

mod credentials;
mod errors;
mod form;
mod http_client;
mod http_request;

pub use credentials::select_credential;
pub use errors::{BuildError, FormError, OmiseError, ProviderError, TransportError};
pub use form::{encode_form, form_pairs};
pub use http_client::{Client, SDK_VERSION};
pub use http_request::{
    Encoding, HttpMethod, RequestBuilder, OMISE_VERSION_HEADER, UPLOAD_FILE_FIELD,
    UPLOAD_KIND_FIELD,
};
