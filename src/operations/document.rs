//! Document upload for merchant onboarding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentType, Description, Operation, Upload, UploadParts};
use crate::clients::HttpMethod;
use crate::config::Endpoint;

/// Uploads a supporting document, such as an identity card scan.
///
/// Sent with [`Client::execute_upload`](crate::Client::execute_upload).
///
/// ```rust,ignore
/// let upload = UploadDocument {
///     file: std::fs::read("id_card.pdf")?,
///     filename: "id_card.pdf".to_string(),
///     kind: "identity_card".to_string(),
/// };
/// let document: Document = client.execute_upload(&upload).await?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDocument {
    /// File content.
    pub file: Vec<u8>,
    /// Filename reported to the server.
    pub filename: String,
    /// Document classification, e.g. `identity_card`.
    pub kind: String,
}

impl Operation for UploadDocument {
    fn describe(&self) -> Description {
        Description::new(Endpoint::API_STAGING, HttpMethod::Post, "/documents")
            .with_content_type(ContentType::Multipart)
    }
}

impl Upload for UploadDocument {
    fn upload_parts(&self) -> UploadParts<'_> {
        UploadParts {
            file: &self.file,
            filename: &self.filename,
            kind: &self.kind,
        }
    }
}

/// An uploaded document as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Always `document`.
    pub object: String,
    /// Document identifier (`docu_...`).
    pub id: String,
    /// API path of this document.
    #[serde(default)]
    pub location: Option<String>,
    /// Classification tag given at upload.
    pub kind: String,
    /// Stored filename.
    pub filename: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
