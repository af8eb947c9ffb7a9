//! # API Client Integration Tests
//!
//! Runs the real `ApiClient` against a stand-in daemon served by axum on an
//! ephemeral port.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::RwLock;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use shared::dto::gui::{BalanceReply, BlockHeightReply};
use wallet_sync::app::{App, Exit};
use wallet_sync::core::{AppError, GuiApi};
use wallet_sync::services::api::{gui, ApiClient};
use wallet_sync::ui::page::class;
use wallet_sync::ui::{Document, Page, SharedPage};

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn spawn_daemon(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Every GUI endpoint except the heartbeat, which each test wires itself.
fn wallet_daemon() -> Router {
    Router::new()
        .route(
            "/gui/blockHeight",
            get(|| async { Json(json!([12345, "Synchronized", "blue"])) }),
        )
        .route("/gui/balance", get(|| async { Json(json!(["1.5", "0.2", "3.0", "0"])) }))
        .route("/gui/downloaderProgress", get(|| async { Json(json!(["42%"])) }))
        .route("/gui/broken", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route("/gui/html", get(|| async { "<html>not json</html>" }))
}

#[tokio::test]
async fn test_fetch_decodes_json_arrays() {
    let router = wallet_daemon().route("/gui/heartbeat", get(|| async { Json(json!(["true"])) }));
    let base = spawn_daemon(router).await;
    let client = ApiClient::new(format!("{}/", base), Some(Duration::from_secs(5)));

    let body = client.fetch(gui::BLOCK_HEIGHT).await.unwrap();
    let reply: BlockHeightReply = gui::decode(gui::BLOCK_HEIGHT, body).unwrap();
    assert_eq!(reply.height, "12345");
    assert!(reply.is_synchronized());

    let body = client.fetch(gui::BALANCE).await.unwrap();
    let reply: BalanceReply = gui::decode(gui::BALANCE, body).unwrap();
    assert_eq!(reply.confirmed, "1.5");
    assert_eq!(reply.claim.as_deref(), Some("0"));

    let body = client.fetch(gui::HEARTBEAT).await.unwrap();
    assert_eq!(body, json!(["true"]));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let base = spawn_daemon(wallet_daemon()).await;
    let client = ApiClient::new(base, None);

    let err = client.fetch("/gui/broken").await.unwrap_err();
    assert_eq!(err, AppError::Status(503));

    let err = client.fetch("/gui/missing").await.unwrap_err();
    assert_eq!(err, AppError::Status(404));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let base = spawn_daemon(wallet_daemon()).await;
    let client = ApiClient::new(base, None);

    let err = client.fetch("/gui/html").await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let router = wallet_daemon().route(
        "/gui/heartbeat",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!(["true"]))
        }),
    );
    let base = spawn_daemon(router).await;
    let client = ApiClient::new(base, Some(Duration::from_millis(200)));

    let started = std::time::Instant::now();
    let err = client.fetch(gui::HEARTBEAT).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)), "got {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_app_renders_then_shows_shutdown_notice() {
    let heartbeats = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&heartbeats);

    let router = wallet_daemon().route(
        "/gui/heartbeat",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                // alive for a few beats, then the daemon dies
                if counter.fetch_add(1, Ordering::SeqCst) < 3 {
                    Json(json!(["true"])).into_response()
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }),
    );
    let base = spawn_daemon(router).await;

    let doc = Arc::new(RwLock::new(Document::dashboard("/gui/dashboard")));
    let page: SharedPage = doc.clone();
    let mut app = App::new(page);

    let api = Arc::new(ApiClient::new(base, None));
    let exit = tokio::time::timeout(Duration::from_secs(10), app.run(api))
        .await
        .expect("sync should stop once the heartbeat fails");

    assert_eq!(exit, Exit::BackendLost);
    assert_eq!(heartbeats.load(Ordering::SeqCst), 4);

    let doc = doc.read();
    assert!(doc.body().unwrap().contains("Shutdown Notice"));
    assert!(!doc.has_class(class::BALANCE));
    assert!(app.state.is_dead());
}
