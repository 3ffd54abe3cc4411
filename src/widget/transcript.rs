//! Transcript entries and the fixed texts the widget ships with.
//!
//! Field names on [`Message`] and [`UserInfo`] are part of the wire contract
//! with the backend: the history array is sent as
//! `[{role, text, timestamp, read}, ...]` and the profile object comes back
//! under `userInfo` with optional `name`, `email` and `query_type` keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting seeded into every new transcript, `read` from the start.
pub const GREETING: &str = "Hi! 👋 I'm SmartAssist, your digital services assistant. I can help you learn about our services, pricing, and support options.\n\nWhat's your name?";

/// The one reply shown for any send failure, regardless of cause.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again.";

/// Fixed quick replies. Not filtered by conversation stage.
pub const QUICK_REPLIES: [&str; 4] = ["Our Services", "Pricing", "Contact Us", "Get Support"];

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One transcript entry.
///
/// The transcript is append-only: messages are never removed or reordered.
/// Timestamps are assigned by this server on append; a bot message carries
/// the time its reply was received, not generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Display text; may contain newlines, rendered verbatim.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Cosmetic read receipt. Always `true` for bot messages.
    pub read: bool,
}

impl Message {
    /// A freshly sent user message, unread until the receipt flip.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }

    /// A bot message, read on arrival.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            timestamp: Utc::now(),
            read: true,
        }
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }

    /// Clock label shown next to the bubble, e.g. `2:07 PM`.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%-I:%M %p").to_string()
    }
}

/// Profile fragment authored entirely by the backend.
///
/// The widget stores whatever object the backend returns, wholesale and
/// unvalidated; `query_type` is never read beyond storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub query_type: Option<String>,
}

impl UserInfo {
    /// True when no field has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.query_type.is_none()
    }
}

/// Accept a submission only if it is non-empty once trimmed.
///
/// The text itself is passed through untrimmed, exactly as typed.
#[must_use]
pub fn normalize_submission(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_a_read_bot_message() {
        let msg = Message::greeting();
        assert_eq!(msg.role, Role::Bot);
        assert!(msg.read);
        assert_eq!(msg.text, GREETING);
    }

    #[test]
    fn user_messages_start_unread() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert!(!msg.read);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["text"], "hi");
        assert_eq!(json["read"], false);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn whitespace_submissions_are_rejected() {
        assert_eq!(normalize_submission(""), None);
        assert_eq!(normalize_submission("   \n\t"), None);
        assert_eq!(normalize_submission("Pricing"), Some("Pricing"));
        // Untrimmed text passes through as typed.
        assert_eq!(normalize_submission("  hi  "), Some("  hi  "));
    }

    #[test]
    fn empty_user_info_detection() {
        assert!(UserInfo::default().is_empty());
        let populated = UserInfo {
            name: Some("Ada".into()),
            ..UserInfo::default()
        };
        assert!(!populated.is_empty());
    }
}
