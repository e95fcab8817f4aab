//! Validation extraction, error surfacing, and post-mutation refetching.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod support;

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldlink::{
    ClientInput, ClientOptions, FieldServiceSdk, SdkError, TransportError, ValidationError,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{ScriptedTransport, empty_clients, errors, ok};

fn sdk_over(transport: Arc<ScriptedTransport>) -> FieldServiceSdk {
    let options = ClientOptions::new("http://test.invalid/").with_token("tok");
    FieldServiceSdk::with_transport(transport, options)
}

fn acme_input() -> ClientInput {
    ClientInput {
        name: "Acme".into(),
        ..ClientInput::default()
    }
}

#[tokio::test]
async fn missing_field_surfaces_as_validation_error() {
    let captured: Arc<Mutex<Vec<ValidationError>>> = Arc::new(Mutex::new(Vec::new()));

    let transport = Arc::new(ScriptedTransport::new([errors(&[
        "Field 'email' was not provided",
    ])]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("tok")
        .with_on_validation_error({
            let captured = Arc::clone(&captured);
            Arc::new(move |validation_errors: &[ValidationError]| {
                captured.lock().unwrap().extend_from_slice(validation_errors);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport.clone(), options);

    let result = sdk.create_client(&acme_input()).await;

    match result {
        Err(SdkError::Validation(validation_errors)) => {
            assert_eq!(validation_errors.len(), 1);
            assert_eq!(validation_errors[0].field, "email");
            assert_eq!(validation_errors[0].message, "Field 'email' was not provided");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(captured.lock().unwrap().len(), 1);
    assert_eq!(transport.calls().len(), 1, "failed mutation must not refetch");
}

#[tokio::test]
async fn invalid_value_message_attributes_the_field() {
    let transport = Arc::new(ScriptedTransport::new([errors(&[
        "Variable '$input' got invalid value 42 at Field 'price'",
    ])]));
    let sdk = sdk_over(transport);

    let result = sdk.create_client(&acme_input()).await;

    match result {
        Err(SdkError::Validation(validation_errors)) => {
            assert_eq!(validation_errors[0].field, "price");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_mutation_refetches_declared_reads() {
    let transport = Arc::new(ScriptedTransport::new([
        ok(json!({
            "createClient": {
                "client": {"id": "c-1", "name": "Acme"},
                "success": true,
                "message": null
            }
        })),
        ok(empty_clients()),
    ]));
    let sdk = sdk_over(transport.clone());

    let payload = sdk.create_client(&acme_input()).await.unwrap();

    assert!(payload.status.success);
    assert_eq!(payload.client.unwrap().id, "c-1");

    let operations: Vec<String> = transport
        .calls()
        .into_iter()
        .map(|call| call.operation)
        .collect();
    assert_eq!(operations, vec!["CreateClient", "GetClients"]);

    let refreshed = fieldlink::operations::clients::get_clients();
    assert!(sdk.pipeline().cache().get(&refreshed).await.is_some());
}

#[tokio::test]
async fn failed_refetch_does_not_fail_the_mutation() {
    let transport = Arc::new(ScriptedTransport::new([
        ok(json!({
            "deleteClient": {"success": true, "message": null}
        })),
        errors(&["Client list unavailable"]),
    ]));
    let sdk = sdk_over(transport.clone());

    let status = sdk.delete_client("c-1").await.unwrap();

    assert!(status.success);
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test]
async fn unmatched_transport_failure_reaches_on_error() {
    let error_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(ScriptedTransport::new([Err(
        TransportError::ConnectionFailed("peer reset".into()),
    )]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("tok")
        .with_on_error({
            let calls = Arc::clone(&error_calls);
            Arc::new(move |_failure: &TransportError| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport, options);

    let result = sdk.get_clients().await;

    assert!(matches!(result, Err(SdkError::Transport(_))));
    assert_eq!(error_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unclassified_domain_errors_surface_as_graphql() {
    let transport = Arc::new(ScriptedTransport::new([errors(&["Job not found"])]));
    let sdk = sdk_over(transport);

    let result = sdk.get_job("j-404").await;

    match result {
        Err(SdkError::Graphql(domain_errors)) => {
            assert_eq!(domain_errors[0].message, "Job not found");
        }
        other => panic!("expected graphql error, got {other:?}"),
    }
}

#[tokio::test]
async fn null_payload_field_is_missing_data() {
    let transport = Arc::new(ScriptedTransport::new([ok(json!({"client": null}))]));
    let sdk = sdk_over(transport);

    let result = sdk.get_client("c-404").await;
    assert!(matches!(result, Err(SdkError::MissingData { .. })));
}

#[tokio::test]
async fn estimate_delete_reads_parent_job_for_refetch() {
    let transport = Arc::new(ScriptedTransport::new([
        ok(json!({
            "estimate": {"id": "e-1", "job": {"id": "j-1", "title": "Gutters"}}
        })),
        ok(json!({"deleteEstimate": {"success": true, "message": null}})),
        ok(json!({"estimates": []})),
        ok(json!({"job": {"id": "j-1", "title": "Gutters"}})),
    ]));
    let sdk = sdk_over(transport.clone());

    let status = sdk.delete_estimate("e-1").await.unwrap();

    assert!(status.success);
    let operations: Vec<String> = transport
        .calls()
        .into_iter()
        .map(|call| call.operation)
        .collect();
    assert_eq!(
        operations,
        vec!["GetEstimate", "DeleteEstimate", "GetEstimatesForJob", "GetJob"]
    );
}
