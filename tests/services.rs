//! Per-resource scenarios: path rendering and typed request/response
//! mapping for each service.

use basware_client::{
    Client, Configuration, CreditNotePathParams, Error, FilePathParams, FilePostRequestBody,
    InvoicePathParams, InvoicePostRequestBody, NotificationPathParams,
    NotificationPostRequestBody,
};
use basware_client::types::DocumentData;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = Configuration::sandbox("user", "secret").with_base_url(server.uri());
    Client::new(config).expect("mock server URL is valid")
}

#[tokio::test]
async fn gets_an_invoice_by_bum_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/invoices/abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "id": "abc-123",
                "issueDate": "2026-08-27",
                "documentCurrencyCode": "EUR",
                "invoiceLine": [
                    {
                        "id": "1",
                        "lineExtension": {"currencyId": "EUR", "amount": 200.0},
                        "item": {"name": "Widget"}
                    }
                ]
            },
            "links": [
                {"href": "/v1/invoices/abc-123", "method": "GET", "rel": "self"}
            ],
            "version": "1.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .invoices()
        .get(&InvoicePathParams::new("abc-123"))
        .await
        .expect("invoice decodes");

    assert_eq!(response.data.id, "abc-123");
    assert_eq!(response.data.document_currency_code.as_deref(), Some("EUR"));
    assert_eq!(response.data.invoice_line.len(), 1);
    assert_eq!(
        response.data.invoice_line[0].item.name.as_deref(),
        Some("Widget")
    );
    assert_eq!(response.links[0].rel.as_deref(), Some("self"));
    assert_eq!(response.version, "1.0");
}

#[tokio::test]
async fn posts_an_invoice_with_its_idempotency_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/invoices/abc-123"))
        .and(body_partial_json(serde_json::json!({
            "clientToken": "3b49a6c8-0000-4000-8000-000000000000",
            "data": {"id": "INV-1"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "links": [{"href": "/v1/invoices/abc-123", "method": "GET", "rel": "self"}],
            "version": "1.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = InvoicePostRequestBody {
        client_token: "3b49a6c8-0000-4000-8000-000000000000".to_owned(),
        data: DocumentData {
            id: "INV-1".to_owned(),
            issue_date: "2026-08-27".to_owned(),
            ..DocumentData::default()
        },
        ..InvoicePostRequestBody::default()
    };
    let response = client
        .invoices()
        .post(&InvoicePathParams::new("abc-123"), &body)
        .await
        .expect("submission accepted");
    assert_eq!(response.version.as_deref(), Some("1.0"));
    assert_eq!(response.links.len(), 1);
}

#[tokio::test]
async fn invoice_validation_failure_renders_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/invoices/abc-123"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "version": "1.0",
            "errors": {
                "validationErrors": [
                    {"fieldId": "data.invoiceLine", "fieldMessage": "required"}
                ],
                "type": "VALIDATION",
                "info": "Required field is missing"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .invoices()
        .post(
            &InvoicePathParams::new("abc-123"),
            &InvoicePostRequestBody::default(),
        )
        .await
        .expect_err("validation failure is an error");

    assert!(matches!(error, Error::Api(_)));
    let rendered = error.to_string();
    assert!(
        rendered.contains("data.invoiceLine: required"),
        "rendered message should carry the field error, got: {rendered}"
    );
    assert!(rendered.contains("422"));
}

#[tokio::test]
async fn gets_a_credit_note_by_bum_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/creditNotes/cn-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "id": "cn-42",
                "issueDate": "2026-08-27",
                "billingReference": {"id": "abc-123"}
            },
            "version": "1.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .credit_notes()
        .get(&CreditNotePathParams::new("cn-42"))
        .await
        .expect("credit note decodes");
    assert_eq!(response.data.id, "cn-42");
    assert_eq!(
        response
            .data
            .billing_reference
            .as_ref()
            .map(|reference| reference.id.as_str()),
        Some("abc-123")
    );
}

#[tokio::test]
async fn uploads_a_file_and_reads_back_its_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/files/doc-7"))
        .and(body_partial_json(serde_json::json!({
            "fileName": "invoice.pdf",
            "fileType": "pdf"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "data": {"fileType": "pdf", "refId": "ref-99"},
            "version": "1.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = FilePostRequestBody {
        client_token: "upload-token-1".to_owned(),
        file_name: "invoice.pdf".to_owned(),
        file_type: "pdf".to_owned(),
        data: "JVBERi0xLjQ=".to_owned(),
    };
    let response = client
        .files()
        .post(&FilePathParams::new("doc-7"), &body)
        .await
        .expect("upload accepted");
    let file_ref = response.data.expect("reference returned");
    assert_eq!(file_ref.ref_id, "ref-99");
    assert_eq!(file_ref.file_type, "pdf");
}

#[tokio::test]
async fn lists_and_acknowledges_notifications() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/notifications/abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "id": "n-1",
                    "bumId": "abc-123",
                    "type": "DELIVERY",
                    "status": "DELIVERED",
                    "created": "2026-08-27T10:00:00Z"
                }
            ],
            "version": "1.0"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/notifications/abc-123"))
        .and(body_partial_json(serde_json::json!({
            "notificationIds": ["n-1"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "version": "1.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let listed = client
        .notifications()
        .get(&NotificationPathParams::new("abc-123"))
        .await
        .expect("notifications decode");
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].kind.as_deref(), Some("DELIVERY"));

    let acknowledgement = NotificationPostRequestBody {
        client_token: "ack-token-1".to_owned(),
        notification_ids: listed
            .data
            .iter()
            .map(|notification| notification.id.clone())
            .collect(),
    };
    client
        .notifications()
        .post(&NotificationPathParams::new("abc-123"), &acknowledgement)
        .await
        .expect("acknowledgement accepted");
}
