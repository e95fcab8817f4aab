//! Credential lifecycle scenarios: expiry, refresh, replay, logout.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fieldlink::{ClientOptions, FieldServiceSdk, RefreshFunction, SdkError, TransportError};
use futures_util::FutureExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use support::{GatedTransport, ScriptedTransport, empty_clients, errors, ok};

/// A refresh hook resolving to the given token, counting invocations.
fn counting_refresh(token: Option<&str>, calls: &Arc<AtomicUsize>) -> RefreshFunction {
    let calls = Arc::clone(calls);
    let token = token.map(String::from);
    Arc::new(move || {
        let calls = Arc::clone(&calls);
        let token = token.clone();
        async move {
            // Yield so concurrent auth failures can pile onto this attempt.
            tokio::task::yield_now().await;
            calls.fetch_add(1, Ordering::SeqCst);
            token
        }
        .boxed()
    })
}

#[tokio::test]
async fn expired_signature_refreshes_and_replays_with_new_header() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let unauthorized_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(GatedTransport::new("JWT new-token-123", empty_clients()));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale-token")
        .with_refresh_token(counting_refresh(Some("new-token-123"), &refresh_calls))
        .with_on_unauthorized({
            let calls = Arc::clone(&unauthorized_calls);
            Arc::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport.clone(), options);

    let clients = sdk.get_clients().await.unwrap();

    assert!(clients.is_empty());
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(unauthorized_calls.load(Ordering::SeqCst), 0);

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].headers.get("authorization").map(String::as_str),
        Some("JWT stale-token")
    );
    assert_eq!(
        calls[1].headers.get("authorization").map(String::as_str),
        Some("JWT new-token-123")
    );
}

#[tokio::test]
async fn http_level_auth_failure_engages_refresh_not_on_error() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let error_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(ScriptedTransport::new([
        Err(TransportError::HttpStatus {
            status: 401,
            body: r#"{"errors": [{"message": "Signature has expired"}]}"#.into(),
        }),
        ok(empty_clients()),
    ]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale-token")
        .with_refresh_token(counting_refresh(Some("fresh"), &refresh_calls))
        .with_on_error({
            let calls = Arc::clone(&error_calls);
            Arc::new(move |_failure: &TransportError| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport, options);

    sdk.get_clients().await.unwrap();

    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(error_calls.load(Ordering::SeqCst), 0, "auth failures bypass on_error");
}

#[tokio::test]
async fn concurrent_auth_failures_share_one_refresh() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(GatedTransport::new("JWT fresh", empty_clients()));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale")
        .with_refresh_token(counting_refresh(Some("fresh"), &refresh_calls));
    let sdk = FieldServiceSdk::with_transport(transport, options);

    let (a, b, c) = tokio::join!(sdk.get_clients(), sdk.get_clients(), sdk.get_clients());

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_refresh_fires_unauthorized_once_without_retry() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let unauthorized_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(ScriptedTransport::new([errors(&["Signature has expired"])]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale")
        .with_refresh_token(counting_refresh(None, &refresh_calls))
        .with_on_unauthorized({
            let calls = Arc::clone(&unauthorized_calls);
            Arc::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport.clone(), options);

    let result = sdk.get_clients().await;

    assert!(matches!(result, Err(SdkError::Unauthorized)));
    assert_eq!(unauthorized_calls.load(Ordering::SeqCst), 1);
    assert_eq!(transport.calls().len(), 1, "no retry after failed refresh");
}

#[tokio::test]
async fn auth_failure_without_refresh_hook_is_unauthorized() {
    let unauthorized_calls = Arc::new(AtomicUsize::new(0));

    let transport = Arc::new(ScriptedTransport::new([errors(&["Signature has expired"])]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale")
        .with_on_unauthorized({
            let calls = Arc::clone(&unauthorized_calls);
            Arc::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport, options);

    let result = sdk.get_clients().await;

    assert!(matches!(result, Err(SdkError::Unauthorized)));
    assert_eq!(unauthorized_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn set_token_is_idempotent_and_makes_no_network_calls() {
    let transport = Arc::new(ScriptedTransport::new([]));
    let sdk = FieldServiceSdk::with_transport(
        transport.clone(),
        ClientOptions::new("http://test.invalid/"),
    );

    sdk.set_token("token-x").await;
    sdk.set_token("token-x").await;

    assert_eq!(
        sdk.pipeline().credentials().get().await.as_deref(),
        Some("token-x")
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn logout_drops_header_and_cached_reads() {
    let transport = Arc::new(ScriptedTransport::new([
        ok(empty_clients()),
        ok(empty_clients()),
    ]));
    let options = ClientOptions::new("http://test.invalid/").with_token("tok");
    let sdk = FieldServiceSdk::with_transport(transport.clone(), options);

    sdk.get_clients().await.unwrap();
    assert!(!sdk.pipeline().cache().is_empty().await);

    sdk.logout().await;
    assert!(sdk.pipeline().cache().is_empty().await);

    sdk.get_clients().await.unwrap();
    let calls = transport.calls();
    assert!(calls[0].headers.contains_key("authorization"));
    assert!(!calls[1].headers.contains_key("authorization"));
}

#[tokio::test]
async fn token_auth_adopts_returned_credential() {
    let transport = Arc::new(ScriptedTransport::new([ok(json!({
        "tokenAuth": {
            "token": "issued-token",
            "isAdmin": true,
            "accountId": "a-1",
            "payload": {"email": "owner@example.com"}
        }
    }))]));
    let sdk = FieldServiceSdk::with_transport(
        transport,
        ClientOptions::new("http://test.invalid/"),
    );

    let payload = sdk.token_auth("owner@example.com", "hunter2").await.unwrap();

    assert_eq!(payload.is_admin, Some(true));
    assert_eq!(
        sdk.pipeline().credentials().get().await.as_deref(),
        Some("issued-token")
    );
}

#[tokio::test]
async fn caller_initiated_refresh_adopts_token() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let transport = Arc::new(ScriptedTransport::new([]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_refresh_token(counting_refresh(Some("renewed"), &refresh_calls));
    let sdk = FieldServiceSdk::with_transport(transport, options);

    assert!(sdk.refresh_token().await);
    assert_eq!(
        sdk.pipeline().credentials().get().await.as_deref(),
        Some("renewed")
    );
}

#[tokio::test]
async fn auth_and_validation_in_one_payload_trigger_both_flows() {
    let refresh_calls = Arc::new(AtomicUsize::new(0));
    let unauthorized_calls = Arc::new(AtomicUsize::new(0));
    let captured_fields: Arc<std::sync::Mutex<Vec<String>>> =
        Arc::new(std::sync::Mutex::new(Vec::new()));

    let transport = Arc::new(ScriptedTransport::new([
        errors(&["Signature has expired", "Field 'email' was not provided"]),
        ok(empty_clients()),
    ]));
    let options = ClientOptions::new("http://test.invalid/")
        .with_token("stale")
        .with_refresh_token(counting_refresh(Some("fresh"), &refresh_calls))
        .with_on_unauthorized({
            let calls = Arc::clone(&unauthorized_calls);
            Arc::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        })
        .with_on_validation_error({
            let captured = Arc::clone(&captured_fields);
            Arc::new(move |validation_errors: &[fieldlink::ValidationError]| {
                let mut fields = captured.lock().unwrap();
                fields.extend(validation_errors.iter().map(|e| e.field.clone()));
            })
        });
    let sdk = FieldServiceSdk::with_transport(transport, options);

    sdk.get_clients().await.unwrap();

    assert_eq!(*captured_fields.lock().unwrap(), vec!["email".to_string()]);
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(unauthorized_calls.load(Ordering::SeqCst), 0);
}
