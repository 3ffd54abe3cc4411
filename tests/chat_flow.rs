//! End-to-end widget flow tests against an in-process stub backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};

use smartassist::AppState;
use smartassist::backend::BackendClient;
use smartassist::config::AppConfig;
use smartassist::server::build_router;
use smartassist::widget::WidgetStore;

/// Requests the stub backend received, for asserting the wire contract.
type Captured = Arc<Mutex<Vec<Value>>>;

/// Spawn a stub `/chat` backend on an ephemeral port.
///
/// Replies with `reply` on success, or a bare 500 when `reply` is `None`.
async fn spawn_stub_backend(reply: Option<Value>) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let seen = captured.clone();

    let app = Router::new().route(
        "/chat",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            let reply = reply.clone();
            async move {
                seen.lock().unwrap().push(body);
                match reply {
                    Some(value) => (StatusCode::OK, Json(value)),
                    None => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

fn test_state(backend_url: &str) -> AppState {
    let config = AppConfig::load_from_args(["smartassist", "--backend-url", backend_url])
        .expect("test config should load");
    let backend = BackendClient::new(backend_url, Duration::from_secs(5)).unwrap();
    AppState {
        widgets: WidgetStore::new(Duration::from_millis(600), Duration::from_secs(1800)),
        backend: Arc::new(backend),
        config: Arc::new(config),
    }
}

#[tokio::test]
async fn home_page_renders_with_a_closed_widget() {
    let (url, _) = spawn_stub_backend(Some(json!({"reply": "hi"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("SmartAssist Demo"));
    assert!(html.contains("AI Powered Customer Assistant"));
    assert!(html.contains("data-chat-open=\"false\""));
    // Each page view gets its own session.
    assert_eq!(state.widgets.len(), 1);
}

#[tokio::test]
async fn quick_reply_turn_hits_the_backend_and_renders_the_reply() {
    let (url, captured) =
        spawn_stub_backend(Some(json!({"reply": "Our plans start at $9/mo"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.open();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "Pricing")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Pricing"));
    assert!(html.contains("Our plans start at $9/mo"));

    // Greeting + user message + reply, loading cleared.
    assert_eq!(session.message_count(), 3);
    assert!(!session.is_loading());

    // The backend saw the new text separately from the prior transcript.
    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["message"], "Pricing");
    let history = requests[0]["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "bot");
}

#[tokio::test]
async fn profile_fields_from_the_backend_reach_the_rendered_widget() {
    let (url, _) = spawn_stub_backend(Some(json!({
        "reply": "Nice to meet you, Ada!",
        "userInfo": {"name": "Ada", "email": null, "query_type": null},
        "stage": "collect_email"
    })))
    .await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.open();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "I'm Ada")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Your Information"));
    assert!(html.contains("Chatting with Ada"));
    assert_eq!(session.user_info().name.as_deref(), Some("Ada"));
    assert_eq!(session.stage().as_deref(), Some("collect_email"));
}

#[tokio::test]
async fn backend_failure_appends_the_fallback_reply() {
    let (url, captured) = spawn_stub_backend(None).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.open();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", session.id()), ("message", "hello?")])
        .await;
    response.assert_status_ok();

    // The turn still lands in the transcript, followed by the fixed fallback.
    assert!(response.text().contains("having trouble connecting right now"));
    assert_eq!(session.message_count(), 3);
    assert!(!session.is_loading());
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn blank_submissions_never_reach_the_backend() {
    let (url, captured) = spawn_stub_backend(Some(json!({"reply": "hi"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.open();

    for message in ["", "   ", "\n\t "] {
        let response = server
            .post("/api/chat")
            .form(&[("session_id", session.id()), ("message", message)])
            .await;
        response.assert_status_ok();
    }

    assert_eq!(session.message_count(), 1, "transcript untouched");
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn toggle_opens_then_closes_the_panel() {
    let (url, _) = spawn_stub_backend(Some(json!({"reply": "hi"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.push_user_message("unread before open");

    let response = server
        .post(&format!("/api/widget/{}/toggle", session.id()))
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("data-chat-open=\"true\""));
    assert!(state.widgets.scroll_lock().is_locked());
    // Opening marks the whole transcript read.
    assert!(session.messages().iter().all(|m| m.read));

    let response = server
        .post(&format!("/api/widget/{}/toggle", session.id()))
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("data-chat-open=\"false\""));
    assert!(!state.widgets.scroll_lock().is_locked());
}

#[tokio::test]
async fn toggling_an_unknown_session_is_not_found() {
    let (url, _) = spawn_stub_backend(Some(json!({"reply": "hi"}))).await;
    let server = TestServer::new(build_router(test_state(&url))).unwrap();

    let response = server.post("/api/widget/no-such-session/toggle").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unmount_tears_the_session_down() {
    let (url, _) = spawn_stub_backend(Some(json!({"reply": "hi"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    let session = state.widgets.create();
    session.open();

    let path = format!("/api/widget/{}/unmount", session.id());
    let response = server.post(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);

    assert!(state.widgets.get(session.id()).is_none());
    assert!(session.cancel_token().is_cancelled());
    assert!(!state.widgets.scroll_lock().is_locked());

    // Idempotent: the beacon can fire more than once.
    let response = server.post(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_session_on_submit_gets_a_fresh_transcript() {
    let (url, captured) =
        spawn_stub_backend(Some(json!({"reply": "Happy to help"}))).await;
    let state = test_state(&url);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    // Simulates a submit after the session was evicted server-side.
    let response = server
        .post("/api/chat")
        .form(&[("session_id", "evicted-id"), ("message", "Get Support")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Happy to help"));

    let session = state.widgets.get("evicted-id").expect("session recreated");
    assert_eq!(session.message_count(), 3);

    // The recreated transcript starts from the greeting.
    let requests = captured.lock().unwrap();
    assert_eq!(requests[0]["history"].as_array().unwrap().len(), 1);
}
