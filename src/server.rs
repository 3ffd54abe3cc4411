//! HTTP server: router, handlers and startup.
//!
//! The page and every widget interaction are plain HTMX form posts; each
//! handler mutates the session and responds with the re-rendered
//! `#chat-widget` fragment for an `outerHTML` swap.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::ui;
use crate::widget::{WidgetStore, normalize_submission};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let backend = BackendClient::new(config.backend.base_url.clone(), config.backend.timeout())?;

    let widgets = WidgetStore::new(
        config.widget.read_receipt_delay(),
        config.widget.session_timeout(),
    );
    widgets.spawn_cleanup();

    let state = AppState {
        widgets,
        backend: Arc::new(backend),
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
///
/// Exposed separately so integration tests can drive it without binding a
/// real port.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/chat", post(api_chat))
        .route("/api/widget/{id}/toggle", post(api_widget_toggle))
        .route("/api/widget/{id}/unmount", post(api_widget_unmount))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            |req: Request, next: Next| async move {
                match tokio::time::timeout(Duration::from_secs(30), next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .with_state(state)
}

/// GET / - Render the marketing page with a fresh widget session.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let session = state.widgets.create();
    info!(
        name: "widget.session.created",
        session_id = %session.id(),
        "New widget session"
    );
    Html(ui::render_home(&session.snapshot()))
}

/// Form body for a submitted chat message (typed or quick reply).
#[derive(Debug, Deserialize)]
struct ChatForm {
    session_id: String,
    message: String,
}

/// POST /api/chat - Run one user turn.
///
/// Turns are serialized per session: a second submit parks on the turn lock
/// and runs after the first completes. Empty and whitespace-only submissions
/// are no-ops. Any backend failure appends the fixed fallback reply; the
/// loading flag is cleared on every exit path.
async fn api_chat(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, StatusCode> {
    let session = state.widgets.get_or_create(&form.session_id);

    let Some(text) = normalize_submission(&form.message) else {
        return Ok(Html(ui::render_widget(&session.snapshot())));
    };

    let _turn = session.turn_lock().lock().await;

    let (history, _) = session.push_user_message(text);
    session.set_loading(true);

    let result = tokio::select! {
        () = session.cancel_token().cancelled() => {
            session.set_loading(false);
            return Err(StatusCode::GONE);
        }
        result = state.backend.send_turn(text, &history) => result,
    };

    match result {
        Ok(outcome) => session.apply_reply(outcome),
        Err(err) => {
            warn!(
                name: "widget.turn.failed",
                session_id = %session.id(),
                error = %err,
                "Chat turn failed, serving fallback"
            );
            session.push_fallback();
        }
    }
    session.set_loading(false);

    Ok(Html(ui::render_widget(&session.snapshot())))
}

/// POST /api/widget/:id/toggle - Flip the panel open or closed.
async fn api_widget_toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let session = state.widgets.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let open = session.toggle();
    info!(
        name: "widget.toggled",
        session_id = %id,
        open = open,
        "Widget toggled"
    );
    Ok(Html(ui::render_widget(&session.snapshot())))
}

/// POST /api/widget/:id/unmount - Tear the session down.
///
/// Called via `sendBeacon` when the page unloads. Cancels any in-flight
/// turn and releases the scroll lock. Idempotent.
async fn api_widget_unmount(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if state.widgets.remove(&id).is_some() {
        info!(
            name: "widget.session.removed",
            session_id = %id,
            "Widget session removed"
        );
    }
    StatusCode::NO_CONTENT
}
