//! Widget session state and the in-memory session store.
//!
//! Each browser view of the page gets one [`WidgetSession`], identified by
//! UUID and held in a [`WidgetStore`]. Sessions carry the complete widget
//! state: the append-only transcript, the open flag (as a held scroll-lock
//! guard), the loading flag, and the backend-authored profile and stage
//! fields.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::backend::TurnOutcome;
use crate::widget::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::widget::transcript::{FALLBACK_REPLY, Message, UserInfo};

/// A single widget session.
///
/// Cloning is cheap; clones share the same state.
#[derive(Debug, Clone)]
pub struct WidgetSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Append-only transcript, seeded with the greeting.
    messages: RwLock<Vec<Message>>,
    /// Panel open state; holding the guard suppresses background scroll.
    open: RwLock<Option<ScrollLockGuard>>,
    /// True while a turn is running against the backend.
    loading: RwLock<bool>,
    /// Last profile object returned by the backend, replaced wholesale.
    user_info: RwLock<UserInfo>,
    /// Opaque stage value from the backend; stored, never interpreted.
    stage: RwLock<Option<String>>,
    /// Last activity time, for idle eviction.
    last_activity: RwLock<DateTime<Utc>>,
    /// Handle to the shared scroll-lock resource.
    scroll_lock: ScrollLock,
    /// Delay before a sent message flips to "read".
    read_receipt_delay: Duration,
    /// Serializes user turns: queue depth 1, no overlapping backend calls.
    turn_lock: Mutex<()>,
    /// Cancelled when the session is removed; in-flight turns are discarded.
    cancel: CancellationToken,
}

/// Point-in-time copy of session state handed to the renderer.
#[derive(Debug, Clone)]
pub struct WidgetSnapshot {
    pub id: String,
    pub open: bool,
    pub loading: bool,
    pub messages: Vec<Message>,
    pub user_info: UserInfo,
    pub stage: Option<String>,
}

impl WidgetSession {
    fn new(id: String, scroll_lock: ScrollLock, read_receipt_delay: Duration) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id,
                messages: RwLock::new(vec![Message::greeting()]),
                open: RwLock::new(None),
                loading: RwLock::new(false),
                user_info: RwLock::new(UserInfo::default()),
                stage: RwLock::new(None),
                last_activity: RwLock::new(Utc::now()),
                scroll_lock,
                read_receipt_delay,
                turn_lock: Mutex::new(()),
                cancel: CancellationToken::new(),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.messages.read().unwrap().clone()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.open.read().unwrap().is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.inner.loading.read().unwrap()
    }

    #[must_use]
    pub fn user_info(&self) -> UserInfo {
        self.inner.user_info.read().unwrap().clone()
    }

    #[must_use]
    pub fn stage(&self) -> Option<String> {
        self.inner.stage.read().unwrap().clone()
    }

    /// Open the panel: acquire the scroll lock and mark everything read.
    pub fn open(&self) {
        let mut guard = self.inner.open.write().unwrap();
        if guard.is_none() {
            *guard = Some(self.inner.scroll_lock.acquire());
        }
        drop(guard);
        self.mark_all_read();
        self.touch();
    }

    /// Close the panel, releasing the scroll lock.
    pub fn close(&self) {
        let mut guard = self.inner.open.write().unwrap();
        *guard = None;
        drop(guard);
        self.touch();
    }

    /// Flip the panel open/closed. Returns the new open state.
    pub fn toggle(&self) -> bool {
        if self.is_open() {
            self.close();
            false
        } else {
            self.open();
            true
        }
    }

    /// Mark every currently held message as read.
    pub fn mark_all_read(&self) {
        let mut guard = self.inner.messages.write().unwrap();
        for msg in guard.iter_mut() {
            msg.read = true;
        }
    }

    fn mark_read(&self, index: usize) {
        let mut guard = self.inner.messages.write().unwrap();
        if let Some(msg) = guard.get_mut(index) {
            msg.read = true;
        }
    }

    /// Append a freshly submitted user message.
    ///
    /// Returns the transcript as it stood *before* this message (the history
    /// the backend receives) and the index of the new entry. Schedules the
    /// read-receipt flip for that entry after the fixed delay, regardless of
    /// how the network call turns out. Must be called within a Tokio runtime.
    pub fn push_user_message(&self, text: &str) -> (Vec<Message>, usize) {
        let mut guard = self.inner.messages.write().unwrap();
        let history = guard.clone();
        let index = guard.len();
        guard.push(Message::user(text));
        drop(guard);
        self.touch();

        let session = self.clone();
        let delay = self.inner.read_receipt_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.mark_read(index);
        });

        (history, index)
    }

    /// Apply a successful backend reply.
    ///
    /// Profile and stage are replaced wholesale when present: the last
    /// response wins, with no partial merge. The reply is then appended as a
    /// read bot message.
    pub fn apply_reply(&self, outcome: TurnOutcome) {
        if let Some(info) = outcome.user_info {
            *self.inner.user_info.write().unwrap() = info;
        }
        if let Some(stage) = outcome.stage {
            *self.inner.stage.write().unwrap() = Some(stage);
        }
        self.push_bot_message(outcome.reply);
    }

    /// Append the fixed fallback reply after a failed turn.
    pub fn push_fallback(&self) {
        self.push_bot_message(FALLBACK_REPLY);
    }

    fn push_bot_message(&self, text: impl Into<String>) {
        let mut guard = self.inner.messages.write().unwrap();
        guard.push(Message::bot(text));
        drop(guard);
        self.touch();
    }

    pub fn set_loading(&self, loading: bool) {
        *self.inner.loading.write().unwrap() = loading;
    }

    /// The per-session turn lock. Hold it across a whole turn.
    #[must_use]
    pub fn turn_lock(&self) -> &Mutex<()> {
        &self.inner.turn_lock
    }

    /// Cancelled when the session is unmounted or evicted.
    #[must_use]
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.inner.cancel
    }

    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            id: self.inner.id.clone(),
            open: self.is_open(),
            loading: self.is_loading(),
            messages: self.messages(),
            user_info: self.user_info(),
            stage: self.stage(),
        }
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Whether the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(idle) = (now - last).to_std() {
            idle > timeout
        } else {
            // "last" in the future means clock skew; treat as active.
            false
        }
    }
}

/// Thread-safe store for widget sessions.
#[derive(Debug, Clone)]
pub struct WidgetStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    sessions: RwLock<HashMap<String, WidgetSession>>,
    scroll_lock: ScrollLock,
    read_receipt_delay: Duration,
    session_timeout: Duration,
}

impl WidgetStore {
    #[must_use]
    pub fn new(read_receipt_delay: Duration, session_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                sessions: RwLock::new(HashMap::new()),
                scroll_lock: ScrollLock::new(),
                read_receipt_delay,
                session_timeout,
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> WidgetSession {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(id)
    }

    /// Create a new session with a specific ID.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> WidgetSession {
        let id = id.into();
        let session = WidgetSession::new(
            id.clone(),
            self.inner.scroll_lock.clone(),
            self.inner.read_receipt_delay,
        );
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, session.clone());
        session
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<WidgetSession> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Get a session by ID, creating it if it doesn't exist.
    #[must_use]
    pub fn get_or_create(&self, id: &str) -> WidgetSession {
        {
            let guard = self.inner.sessions.read().unwrap();
            if let Some(session) = guard.get(id) {
                return session.clone();
            }
        }
        self.create_with_id(id)
    }

    /// Remove a session: cancels its in-flight turn (if any) and releases
    /// its scroll lock.
    pub fn remove(&self, id: &str) -> Option<WidgetSession> {
        let removed = {
            let mut guard = self.inner.sessions.write().unwrap();
            guard.remove(id)
        };
        if let Some(session) = &removed {
            session.cancel_token().cancel();
            session.close();
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shared scroll-lock resource.
    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.inner.scroll_lock
    }

    /// Remove sessions idle longer than the configured timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired(&self) -> usize {
        let timeout = self.inner.session_timeout;
        let expired: Vec<String> = {
            let guard = self.inner.sessions.read().unwrap();
            guard
                .iter()
                .filter(|(_, s)| s.is_expired_with_timeout(timeout))
                .map(|(id, _)| id.clone())
                .collect()
        };
        for id in &expired {
            self.remove(id);
        }
        expired.len()
    }

    /// Spawn the background eviction sweep.
    pub fn spawn_cleanup(&self) {
        let store = self.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(Duration::from_secs(60));
            tick.tick().await; // first tick fires immediately
            loop {
                tick.tick().await;
                let removed = store.cleanup_expired();
                if removed > 0 {
                    tracing::info!(
                        name: "widget.sessions.evicted",
                        count = removed,
                        "Evicted idle widget sessions"
                    );
                }
            }
        });
    }
}
