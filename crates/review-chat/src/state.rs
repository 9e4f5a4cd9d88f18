//! Conversation state
//!
//! Domain model for one pull request's chat log. The state is owned
//! exclusively by a [`crate::ConversationController`]; all mutation goes
//! through the pure reducer in [`crate::reducer`].

use chrono::{DateTime, NaiveDateTime, Utc};
use review_api_client::{ConversationItem, Role};

/// One message in a conversation
///
/// Append-only: once part of a conversation, `content` and `role` never
/// change; the list around it only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    /// Raw, unrendered message text
    pub content: String,

    /// Who sent it
    pub role: Role,

    /// Assigned by the persistence service on save, or locally at send
    /// time for optimistic entries
    pub created_at: DateTime<Utc>,
}

impl ConversationEntry {
    /// Create an optimistic user entry stamped with the current time
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    /// Create an assistant entry stamped with the current time
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::System,
            created_at: Utc::now(),
        }
    }

    /// Map a wire conversation item into a domain entry
    ///
    /// Normalizes the role case and falls back to the receive time when the
    /// service timestamp cannot be parsed; entry order is positional, the
    /// timestamp is informational.
    pub fn from_item(item: &ConversationItem) -> Self {
        Self {
            content: item.message.clone(),
            role: Role::from_wire(&item.role),
            created_at: parse_wire_timestamp(&item.date_created).unwrap_or_else(Utc::now),
        }
    }

    /// The entry's content rendered as safe display markup
    pub fn rendered_content(&self) -> String {
        review_markdown::render_markdown(&self.content)
    }
}

/// Parse the service's timestamp formats (RFC 3339, or naive ISO-8601)
fn parse_wire_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Lifecycle phase of one conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// History not yet loaded
    #[default]
    Idle,

    /// History present, no request in flight
    Loaded,

    /// User message appended optimistically, awaiting the assistant reply
    Sending,

    /// Last operation failed; entries appended so far remain
    Error,
}

/// The chat panel state for one pull request
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Messages in strictly non-decreasing send order
    pub entries: Vec<ConversationEntry>,

    /// Current lifecycle phase
    pub phase: Phase,

    /// Text of the last failed operation, for the error banner
    pub last_error: Option<String>,
}

impl ConversationState {
    /// True between a user send and the final assistant reply (or error)
    ///
    /// The UI uses this to disable further sends while one is in flight.
    pub fn pending(&self) -> bool {
        self.phase == Phase::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_from_item_normalizes_role_case() {
        let item = ConversationItem {
            id: 1,
            message: "hello".to_string(),
            date_created: "2024-11-03T09:15:27".to_string(),
            role: "USER".to_string(),
        };

        let entry = ConversationEntry::from_item(&item);
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.content, "hello");
    }

    #[test]
    fn test_from_item_parses_naive_timestamp() {
        let item = ConversationItem {
            id: 1,
            message: "hi".to_string(),
            date_created: "2024-11-03T09:15:27.500".to_string(),
            role: "System".to_string(),
        };

        let entry = ConversationEntry::from_item(&item);
        assert_eq!(entry.created_at.hour(), 9);
        assert_eq!(entry.created_at.minute(), 15);
    }

    #[test]
    fn test_from_item_tolerates_garbage_timestamp() {
        let item = ConversationItem {
            id: 1,
            message: "hi".to_string(),
            date_created: "yesterday-ish".to_string(),
            role: "User".to_string(),
        };

        // Falls back to the receive time rather than failing.
        let entry = ConversationEntry::from_item(&item);
        assert_eq!(entry.content, "hi");
    }

    #[test]
    fn test_rendered_content_goes_through_markdown() {
        let entry = ConversationEntry::system("use `cargo fmt`");
        assert_eq!(entry.rendered_content(), "use <code>cargo fmt</code>");
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = ConversationState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.entries.is_empty());
        assert!(state.last_error.is_none());
        assert!(!state.pending());
    }
}
