//! Request construction for the Omise API.
//!
//! [`RequestBuilder`] turns an [`Operation`] into a ready-to-send
//! [`reqwest::Request`] using one of three [`Encoding`]s. All three share
//! the same shape: resolve the endpoint, append the path, encode the body,
//! attach the standard headers and the selected credential.
//!
//! Encoding failures are reported as [`BuildError`] before any network I/O.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::{Form, Part};

use crate::clients::credentials::select_credential;
use crate::clients::errors::{BuildError, OmiseError, TransportError};
use crate::clients::form::encode_form;
use crate::config::ClientConfig;
use crate::operations::{ContentType, Description, Operation, Upload};

/// Header carrying the configured API version.
pub const OMISE_VERSION_HEADER: &str = "Omise-Version";

/// Form field name of the uploaded file part.
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Form field name of the upload classification tag.
pub const UPLOAD_KIND_FIELD: &str = "kind";

/// HTTP methods used by Omise operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Wire encoding of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// The whole operation as a JSON object.
    Json,
    /// Flat bracketed `application/x-www-form-urlencoded` pairs.
    Form,
    /// `multipart/form-data` with a `kind` field and a `file` part.
    Multipart,
}

impl Encoding {
    /// Picks the encoding an operation declares through its content type.
    ///
    /// Undeclared content types default to JSON.
    #[must_use]
    pub const fn for_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Unspecified | ContentType::Json => Self::Json,
            ContentType::Form => Self::Form,
            ContentType::Multipart => Self::Multipart,
        }
    }

    /// Returns the `Content-Type` value set by the builder.
    ///
    /// `None` for multipart, whose boundary-bearing value is produced with
    /// the body.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json => ContentType::Json.as_mime(),
            Self::Form => ContentType::Form.as_mime(),
            Self::Multipart => None,
        }
    }
}

enum Body {
    Bytes(Vec<u8>),
    Multipart(Form),
}

/// Builds authenticated requests for a client's configuration.
///
/// Borrowed from the owning [`Client`](crate::Client) for the duration of a
/// single build; it holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    transport: &'a reqwest::Client,
    config: &'a ClientConfig,
    user_agent: &'a str,
}

impl<'a> RequestBuilder<'a> {
    /// Creates a builder over the given transport and configuration.
    #[must_use]
    pub const fn new(
        transport: &'a reqwest::Client,
        config: &'a ClientConfig,
        user_agent: &'a str,
    ) -> Self {
        Self {
            transport,
            config,
            user_agent,
        }
    }

    /// Builds a request whose body is the operation serialized as JSON.
    ///
    /// # Errors
    ///
    /// - [`BuildError::Json`] if serialization fails
    /// - [`OmiseError::Config`] if no credential fits the endpoint
    /// - [`TransportError::Network`] if the URL or a header is invalid
    pub fn json<O: Operation + ?Sized>(&self, operation: &O) -> Result<reqwest::Request, OmiseError> {
        let body = serde_json::to_vec(operation).map_err(BuildError::Json)?;
        self.finish(&operation.describe(), Encoding::Json, Body::Bytes(body))
    }

    /// Builds a request whose body is the operation's flattened form fields.
    ///
    /// # Errors
    ///
    /// - [`BuildError::Form`] if encoding fails
    /// - [`OmiseError::Config`] if no credential fits the endpoint
    /// - [`TransportError::Network`] if the URL or a header is invalid
    pub fn form<O: Operation + ?Sized>(&self, operation: &O) -> Result<reqwest::Request, OmiseError> {
        let body = encode_form(operation).map_err(BuildError::Form)?;
        self.finish(
            &operation.describe(),
            Encoding::Form,
            Body::Bytes(body.into_bytes()),
        )
    }

    /// Builds a multipart upload request.
    ///
    /// The body holds a `kind` text field followed by a `file` part carrying
    /// the content and filename. No other field of the operation is sent.
    ///
    /// # Errors
    ///
    /// - [`BuildError::Multipart`] if the file part cannot be assembled
    /// - [`OmiseError::Config`] if no credential fits the endpoint
    /// - [`TransportError::Network`] if the URL or a header is invalid
    pub fn multipart<U: Upload + ?Sized>(&self, operation: &U) -> Result<reqwest::Request, OmiseError> {
        let parts = operation.upload_parts();
        let file = Part::bytes(parts.file.to_vec())
            .file_name(parts.filename.to_owned())
            .mime_str("application/octet-stream")
            .map_err(BuildError::Multipart)?;
        let form = Form::new()
            .text(UPLOAD_KIND_FIELD, parts.kind.to_owned())
            .part(UPLOAD_FILE_FIELD, file);

        self.finish(&operation.describe(), Encoding::Multipart, Body::Multipart(form))
    }

    fn finish(
        &self,
        description: &Description,
        encoding: Encoding,
        body: Body,
    ) -> Result<reqwest::Request, OmiseError> {
        let base = self.config.endpoints().resolve(&description.endpoint);
        let url = format!("{base}{}", description.path);
        let credential = select_credential(description, self.config)?;

        tracing::debug!(
            method = %description.method,
            url = %url,
            encoding = ?encoding,
            "Building Omise request"
        );

        let mut builder = self
            .transport
            .request(description.method.into(), &url)
            .header(USER_AGENT, self.user_agent)
            .basic_auth(credential, Some(""));

        if let Some(content_type) = encoding.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(version) = self.config.api_version() {
            builder = builder.header(OMISE_VERSION_HEADER, version.to_string());
        }

        builder = match body {
            Body::Bytes(bytes) => builder.body(bytes),
            Body::Multipart(form) => builder.multipart(form),
        };

        builder.build().map_err(|e| TransportError::Network(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, Endpoint, SecretKey};
    use crate::operations::{ListSchedules, UploadDocument};

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .secret_key(SecretKey::new("skey_test_1").unwrap())
            .api_version(ApiVersion::new("2019-05-29").unwrap())
            .endpoint(Endpoint::API, "http://localhost:4000")
            .build()
            .unwrap()
    }

    #[test]
    fn test_http_method_display_and_conversion() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
    }

    #[test]
    fn test_encoding_for_content_type() {
        assert_eq!(Encoding::for_content_type(ContentType::Unspecified), Encoding::Json);
        assert_eq!(Encoding::for_content_type(ContentType::Json), Encoding::Json);
        assert_eq!(Encoding::for_content_type(ContentType::Form), Encoding::Form);
        assert_eq!(
            Encoding::for_content_type(ContentType::Multipart),
            Encoding::Multipart
        );
        assert_eq!(Encoding::Multipart.content_type(), None);
    }

    #[test]
    fn test_json_request_targets_resolved_endpoint() {
        let transport = reqwest::Client::new();
        let config = config();
        let builder = RequestBuilder::new(&transport, &config, "test-agent");

        let request = builder.json(&ListSchedules::default()).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:4000/transfers/schedules"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[USER_AGENT], "test-agent");
        assert_eq!(request.headers()[OMISE_VERSION_HEADER], "2019-05-29");
        assert_eq!(request.body().and_then(reqwest::Body::as_bytes), Some(&b"{}"[..]));
    }

    #[test]
    fn test_multipart_request_leaves_content_type_to_body() {
        let transport = reqwest::Client::new();
        let config = ClientConfig::builder()
            .secret_key(SecretKey::new("skey_test_1").unwrap())
            .build()
            .unwrap();
        let builder = RequestBuilder::new(&transport, &config, "test-agent");

        let request = builder
            .multipart(&UploadDocument {
                file: b"%PDF".to_vec(),
                filename: "a.pdf".to_string(),
                kind: "identity_card".to_string(),
            })
            .unwrap();

        let content_type = request.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(
            request.url().as_str(),
            "https://api.staging-omise.co/documents"
        );
    }

    #[test]
    fn test_malformed_override_is_a_transport_error() {
        let transport = reqwest::Client::new();
        let config = ClientConfig::builder()
            .secret_key(SecretKey::new("skey_test_1").unwrap())
            .endpoint(Endpoint::API, "not a url")
            .build()
            .unwrap();
        let builder = RequestBuilder::new(&transport, &config, "test-agent");

        let result = builder.json(&ListSchedules::default());
        assert!(matches!(
            result,
            Err(OmiseError::Transport(TransportError::Network(_)))
        ));
    }
}
