//! SmartAssist marketing site and embeddable chat widget.
//!
//! A single-page marketing site with a floating chat widget, rendered
//! server-side and driven by HTMX fragment swaps. The widget owns its state
//! per browser session (transcript, open flag, loading flag, backend-authored
//! profile fields) and performs exactly one outbound HTTP call per user turn
//! against an external `/chat` backend.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering pages and widget fragments
//! - **UI**: Leptos SSR components + HTMX form posts, local assets only
//! - **Widget state**: in-memory per-session store, append-only transcript
//! - **Backend client**: one fire-and-forget POST per submitted message
//!
//! # Modules
//!
//! - [`backend`]: HTTP client for the external chat backend
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`server`]: router and request handlers
//! - [`ui`]: Leptos SSR components for the page and the widget
//! - [`widget`]: widget session state and store

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]

pub mod backend;
pub mod config;
pub mod server;
pub mod ui;
pub mod widget;

use std::sync::Arc;

use backend::BackendClient;
use config::AppConfig;
use widget::WidgetStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-session widget state.
    pub widgets: WidgetStore,
    /// Client for the external chat backend.
    pub backend: Arc<BackendClient>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}
