//! End-to-end tests: relay router → real DeepLX client → in-process stub DeepLX
//!
//! The stub listens on an ephemeral localhost port, records what it receives
//! and answers with a canned status and body.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use tower::ServiceExt;

use hcfy_deeplx::{BackendRequest, ClientResponse, DeepLxClient, LanguageRegistry};

use crate::{AppState, router};

const TOKEN: &str = "deeplx";

#[derive(Clone)]
struct Stub {
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<BackendRequest>>>,
    status: StatusCode,
    body: &'static str,
    delay: Duration,
}

impl Stub {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> Option<BackendRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

async fn stub_translate(
    State(stub): State<Stub>,
    Json(request): Json<BackendRequest>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    *stub.last_request.lock().unwrap() = Some(request);
    if !stub.delay.is_zero() {
        tokio::time::sleep(stub.delay).await;
    }
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
}

/// Serve the stub and return its translate URL
async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/translate", post(stub_translate))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/translate", addr)
}

/// A localhost address nothing is listening on
async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn relay(endpoint: &str, timeout: Option<Duration>) -> Router {
    let backend = DeepLxClient::new(endpoint, timeout).unwrap();
    let state = AppState::new(
        Arc::new(LanguageRegistry::new()),
        Arc::new(backend),
        Some(TOKEN.to_string()),
    );
    router(state, "/")
}

async fn post_client(app: Router, name: &str, destination: &[&str]) -> (StatusCode, Vec<u8>) {
    let body = serde_json::json!({
        "name": name,
        "text": "line one\nline two",
        "destination": destination,
        "source": "英语",
    });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_e2e_success_splits_lines() {
    let stub = Stub::new(StatusCode::OK, r#"{"code":200,"data":"第一行\n第二行"}"#);
    let endpoint = spawn_stub(stub.clone()).await;

    let (status, body) =
        post_client(relay(&endpoint, Some(Duration::from_secs(5))), TOKEN, &["中文(简体)"]).await;

    assert_eq!(status, StatusCode::OK);
    let response: ClientResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.result, vec!["第一行", "第二行"]);
    assert_eq!(response.to, "中文(简体)");
    assert_eq!(response.from, "英语");
    assert_eq!(response.text, "line one\nline two");

    assert_eq!(stub.calls(), 1);
    assert_eq!(
        stub.last_request(),
        Some(BackendRequest {
            text: "line one\nline two".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "ZH".to_string(),
        })
    );
}

#[tokio::test]
async fn test_e2e_backend_error_status_is_folded_into_result() {
    let stub = Stub::new(
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"code":503,"msg":"rate limited"}"#,
    );
    let endpoint = spawn_stub(stub.clone()).await;

    let (status, body) = post_client(relay(&endpoint, None), TOKEN, &["英语"]).await;

    assert_eq!(status, StatusCode::OK);
    let response: ClientResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.result, vec!["rate limited"]);
    assert_eq!(response.to, "英语");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_e2e_wrong_name_never_reaches_backend() {
    let stub = Stub::new(StatusCode::OK, r#"{"code":200,"data":"x"}"#);
    let endpoint = spawn_stub(stub.clone()).await;

    let (status, body) = post_client(relay(&endpoint, None), "someone-else", &["英语"]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Wrong name");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_e2e_non_json_reply_is_bad_gateway() {
    let stub = Stub::new(StatusCode::OK, "<html>upstream proxy error</html>");
    let endpoint = spawn_stub(stub.clone()).await;

    let (status, body) = post_client(relay(&endpoint, None), TOKEN, &["英语"]).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, b"Error decoding response");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_e2e_unreachable_backend_is_bad_gateway() {
    let endpoint = format!("http://{}/translate", closed_addr().await);

    let (status, body) =
        post_client(relay(&endpoint, Some(Duration::from_secs(5))), TOKEN, &["英语"]).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, b"Error calling translation service");
}

#[tokio::test]
async fn test_e2e_slow_backend_hits_timeout() {
    let mut stub = Stub::new(StatusCode::OK, r#"{"code":200,"data":"late"}"#);
    stub.delay = Duration::from_secs(2);
    let endpoint = spawn_stub(stub.clone()).await;

    let (status, _) =
        post_client(relay(&endpoint, Some(Duration::from_millis(200))), TOKEN, &["英语"]).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(stub.calls(), 1);
}
