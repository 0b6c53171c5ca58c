//! Integration tests for the three request encodings.
//!
//! Form and JSON bodies are inspected on the built request; multipart bodies
//! are captured by a mock server since they are streamed.

use omise_api::operations::{AccountDetails, Document, Onboard};
use omise_api::{
    encode_form, Client, ClientConfig, ContentType, CreateOnboard, Description, Endpoint,
    HttpMethod, ListSchedules, OmiseError, Operation, SecretKey, Upload, UploadDocument,
    UploadParts,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn body_text(request: &reqwest::Request) -> String {
    let bytes = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .expect("buffered body");
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn staging_client(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .secret_key(SecretKey::new("skey_test_1").unwrap())
        .endpoint(Endpoint::API_STAGING, server.uri())
        .build()
        .unwrap();
    Client::from_config(config)
}

// ============================================================================
// Form encoding
// ============================================================================

#[derive(Serialize)]
struct TagCustomer {
    #[serde(rename = "customer")]
    customer_id: String,
    #[serde(rename = "tags")]
    labels: Vec<String>,
}

impl Operation for TagCustomer {
    fn describe(&self) -> Description {
        Description::new(Endpoint::API, HttpMethod::Post, "/customers/tags")
            .with_content_type(ContentType::Form)
    }
}

#[test]
fn test_repeated_field_encodes_one_bracket_key_per_value_in_order() {
    let op = TagCustomer {
        customer_id: "cust_1".to_string(),
        labels: vec!["gold".to_string(), "early".to_string(), "vip".to_string()],
    };

    let form = encode_form(&op).unwrap();

    assert_eq!(form.matches("tags%5B%5D=").count(), 3);
    assert_eq!(
        form,
        "customer=cust_1&tags%5B%5D=gold&tags%5B%5D=early&tags%5B%5D=vip"
    );
}

#[test]
fn test_form_request_sets_body_and_content_type() {
    let client = Client::new("", "skey_test_1").unwrap();
    let op = TagCustomer {
        customer_id: "cust_1".to_string(),
        labels: vec!["gold".to_string()],
    };

    let request = client.form_request(&op).unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(request.url().as_str(), "https://api.omise.co/customers/tags");
    assert_eq!(
        request.headers()["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(body_text(&request), "customer=cust_1&tags%5B%5D=gold");
}

#[test]
fn test_onboard_form_groups_details() {
    let client = Client::new("", "skey_test_1").unwrap();
    let op = CreateOnboard {
        name: "Acme Co".to_string(),
        agreement_accepted: true,
        document_ids: vec!["docu_1".to_string()],
        account_details: AccountDetails {
            legal_name: "Acme Co., Ltd.".to_string(),
            ..AccountDetails::default()
        },
        ..CreateOnboard::default()
    };

    let body = body_text(&client.form_request(&op).unwrap());

    assert!(body.starts_with("name=Acme%20Co&agreement_accepted=true&document_ids%5B%5D=docu_1&"));
    assert!(body.contains("account_details%5Blegal_name%5D=Acme%20Co.%2C%20Ltd."));
    assert!(body.contains("statement_details%5Bstatement_name%5D="));
}

#[tokio::test]
async fn test_send_dispatches_form_operations_as_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/onboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "onboard",
            "id": "onbd_test_1",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let onboard: Onboard = staging_client(&server)
        .send(&CreateOnboard::default())
        .await
        .unwrap();
    assert_eq!(onboard.status, "pending");

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8(received[0].body.clone()).unwrap();
    assert!(body.starts_with("name=&agreement_accepted=false&"));
}

// ============================================================================
// JSON encoding
// ============================================================================

#[test]
fn test_json_body_round_trips_to_same_operation() {
    let client = Client::new("", "skey_test_1").unwrap();
    let op = ListSchedules {
        offset: Some(40),
        limit: Some(20),
    };

    let request = client.json_request(&op).unwrap();
    let decoded: ListSchedules = serde_json::from_str(&body_text(&request)).unwrap();

    assert_eq!(decoded, op);
}

// ============================================================================
// Multipart encoding
// ============================================================================

#[derive(Serialize, Deserialize)]
struct TaggedUpload {
    file: Vec<u8>,
    filename: String,
    kind: String,
    internal_note: String,
}

impl Operation for TaggedUpload {
    fn describe(&self) -> Description {
        Description::new(Endpoint::API_STAGING, HttpMethod::Post, "/documents")
            .with_content_type(ContentType::Multipart)
    }
}

impl Upload for TaggedUpload {
    fn upload_parts(&self) -> UploadParts<'_> {
        UploadParts {
            file: &self.file,
            filename: &self.filename,
            kind: &self.kind,
        }
    }
}

#[tokio::test]
async fn test_multipart_body_has_kind_field_and_file_part_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "document",
            "id": "docu_test_1",
            "kind": "bank_statement",
            "filename": "statement.pdf",
            "created_at": "2024-03-01T08:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let op = TaggedUpload {
        file: b"%PDF-1.4 file content".to_vec(),
        filename: "statement.pdf".to_string(),
        kind: "bank_statement".to_string(),
        internal_note: "never-sent-marker".to_string(),
    };

    let document: Document = staging_client(&server).execute_upload(&op).await.unwrap();
    assert_eq!(document.kind, "bank_statement");

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).into_owned();

    let kind_at = body
        .find("Content-Disposition: form-data; name=\"kind\"")
        .expect("kind field");
    let file_at = body
        .find("Content-Disposition: form-data; name=\"file\"; filename=\"statement.pdf\"")
        .expect("file part");
    assert!(kind_at < file_at);
    assert!(body.contains("bank_statement"));
    assert!(body.contains("%PDF-1.4 file content"));
    assert!(body.contains("Content-Type: application/octet-stream"));
    assert!(!body.contains("never-sent-marker"));
    assert!(!body.contains("internal_note"));
    assert_eq!(body.matches("Content-Disposition").count(), 2);
}

#[tokio::test]
async fn test_send_refuses_multipart_operations() {
    let client = Client::new("", "skey_test_1").unwrap();
    let result: Result<Document, _> = client.send(&UploadDocument::default()).await;

    assert!(matches!(result, Err(OmiseError::Build(_))));
}
