//! Integration tests for the reqwest transport adapter.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use fieldlink_application::ports::{GraphqlTransport, RequestHeaders, TransportError};
use fieldlink_domain::GraphqlRequest;
use fieldlink_infrastructure::HttpGraphqlTransport;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> GraphqlRequest {
    GraphqlRequest::new("GetClients", "query GetClients { clients { id name } }")
}

fn auth_headers(token: &str) -> RequestHeaders {
    let mut headers = RequestHeaders::new();
    headers.insert("authorization".to_string(), format!("JWT {token}"));
    headers
}

#[tokio::test]
async fn posts_envelope_and_decodes_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/graph/"))
        .and(body_partial_json(json!({"operationName": "GetClients"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"clients": [{"id": "1", "name": "Acme"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport =
        HttpGraphqlTransport::new(&format!("{}/api/graph/", server.uri())).unwrap();
    let response = transport
        .send(&sample_request(), &RequestHeaders::new())
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(
        response.data.unwrap()["clients"][0]["name"],
        json!("Acme")
    );
}

#[tokio::test]
async fn forwards_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "JWT token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpGraphqlTransport::new(&server.uri()).unwrap();
    transport
        .send(&sample_request(), &auth_headers("token-123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn passes_domain_errors_through_unclassified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Signature has expired"}]
        })))
        .mount(&server)
        .await;

    let transport = HttpGraphqlTransport::new(&server.uri()).unwrap();
    let response = transport
        .send(&sample_request(), &RequestHeaders::new())
        .await
        .unwrap();

    // The adapter never interprets domain errors; that is the pipeline's job.
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Signature has expired");
}

#[tokio::test]
async fn non_success_status_keeps_body() {
    let server = MockServer::start().await;
    let body = json!({"errors": [{"message": "Field 'email' was not provided"}]});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let transport = HttpGraphqlTransport::new(&server.uri()).unwrap();
    let error = transport
        .send(&sample_request(), &RequestHeaders::new())
        .await
        .unwrap_err();

    match error {
        TransportError::HttpStatus { status, body: captured } => {
            assert_eq!(status, 400);
            let parsed: serde_json::Value = serde_json::from_str(&captured).unwrap();
            assert_eq!(parsed, body);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let transport = HttpGraphqlTransport::new(&server.uri()).unwrap();
    let error = transport
        .send(&sample_request(), &RequestHeaders::new())
        .await
        .unwrap_err();
    assert!(matches!(error, TransportError::InvalidBody(_)));
}
