//! The operation contract and the operation catalog.
//!
//! Every request payload implements [`Operation`]: it is a serializable value
//! that can [`describe`](Operation::describe) how it is transmitted. The
//! client only ever sees the [`Description`] and the serialized fields, never
//! concrete payload types.
//!
//! # Wire names
//!
//! Field wire names come from serde attributes on the operation struct.
//! In form mode nested structs become bracketed groups and sequences are
//! repeated with a `[]` suffix:
//!
//! ```rust
//! use omise_api::{encode_form, ContentType, Description, Endpoint, HttpMethod, Operation};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct SearchCharges {
//!     #[serde(rename = "filters")]
//!     filter: Filter,
//!     #[serde(rename = "ids")]
//!     charge_ids: Vec<String>,
//! }
//!
//! #[derive(Serialize)]
//! struct Filter {
//!     captured: bool,
//! }
//!
//! impl Operation for SearchCharges {
//!     fn describe(&self) -> Description {
//!         Description::new(Endpoint::API, HttpMethod::Post, "/search")
//!             .with_content_type(ContentType::Form)
//!     }
//! }
//!
//! let search = SearchCharges {
//!     filter: Filter { captured: true },
//!     charge_ids: vec!["chrg_1".to_string(), "chrg_2".to_string()],
//! };
//! assert_eq!(search.describe().content_type, ContentType::Form);
//! assert_eq!(
//!     encode_form(&search).unwrap(),
//!     "filters%5Bcaptured%5D=true&ids%5B%5D=chrg_1&ids%5B%5D=chrg_2"
//! );
//! ```

mod document;
mod onboard;
mod schedule;
mod token;

pub use document::{Document, UploadDocument};
pub use onboard::{
    AccountDetails, BusinessDetails, CreateOnboard, Onboard, PolicyAcceptanceDetails,
    StatementDetails, TransferDetails,
};
pub use schedule::{ListSchedules, Schedule, ScheduleList};
pub use token::{Card, CreateToken, Token, TokenCard};

use serde::Serialize;

pub use crate::clients::HttpMethod;
use crate::config::{Endpoint, KeyKind};

/// A request payload that knows how it is transmitted.
///
/// Implementations must return the same [`Description`] every time
/// `describe` is called on the same value.
pub trait Operation: Serialize {
    /// Returns the transmission metadata for this operation.
    fn describe(&self) -> Description;
}

/// An operation sent as a multipart file upload.
///
/// Upload operations expose exactly three parts; any other field on the
/// implementing type is ignored by the multipart encoder.
pub trait Upload: Operation {
    /// Returns the file content, filename and classification tag.
    fn upload_parts(&self) -> UploadParts<'_>;
}

/// Borrowed view of the three fields a multipart upload transmits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadParts<'a> {
    /// Binary file content.
    pub file: &'a [u8],
    /// Filename reported in the file part.
    pub filename: &'a str,
    /// Classification tag sent as the `kind` text field.
    pub kind: &'a str,
}

/// The body encoding an operation declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentType {
    /// No declared encoding; dispatched as JSON.
    #[default]
    Unspecified,
    /// `application/json`.
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
    /// `multipart/form-data`; only valid for [`Upload`] operations.
    Multipart,
}

impl ContentType {
    /// Returns the MIME type string, if one is declared.
    #[must_use]
    pub const fn as_mime(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Json => Some("application/json"),
            Self::Form => Some("application/x-www-form-urlencoded"),
            Self::Multipart => Some("multipart/form-data"),
        }
    }
}

/// Transmission metadata for an [`Operation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    /// Logical endpoint the request targets.
    pub endpoint: Endpoint,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path appended to the resolved endpoint URL, starting with `/`.
    pub path: String,
    /// Declared body encoding.
    pub content_type: ContentType,
}

impl Description {
    /// Creates a description with no declared content type.
    #[must_use]
    pub fn new(endpoint: Endpoint, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            endpoint,
            method,
            path: path.into(),
            content_type: ContentType::Unspecified,
        }
    }

    /// Sets the declared content type.
    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Returns the credential class required by the target endpoint.
    ///
    /// `None` means the endpoint is not registered with a key kind.
    #[must_use]
    pub fn key_kind(&self) -> Option<KeyKind> {
        self.endpoint.key_kind()
    }
}
