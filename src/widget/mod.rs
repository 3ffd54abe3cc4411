//! Server-owned chat widget state.
//!
//! The widget's interactive state lives here, one session per page view:
//! the append-only transcript, the open/closed panel flag, the loading flag,
//! and the backend-authored profile and stage fields.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use smartassist::widget::WidgetStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = WidgetStore::new(Duration::from_millis(600), Duration::from_secs(1800));
//! let session = store.create();
//!
//! // Every transcript starts with the greeting.
//! assert_eq!(session.message_count(), 1);
//! # }
//! ```

mod scroll_lock;
mod state;
mod transcript;

pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use state::{WidgetSession, WidgetSnapshot, WidgetStore};
pub use transcript::{
    FALLBACK_REPLY, GREETING, Message, QUICK_REPLIES, Role, UserInfo, normalize_submission,
};
