//! Review service data transfer objects
//!
//! These types represent the data returned from the review service API.
//! They are intentionally separate from application domain models to keep
//! this crate pure and reusable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored pull-request record from the review service
///
/// `content` is the blob the content parser consumes, `diff` is handed to
/// the external diff renderer, and `feedback` goes through the markdown
/// renderer. Timestamps are naive ISO-8601 as the service emits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// Database row id
    pub id: i64,

    /// Opaque pull-request id on the source host
    pub pr_id: String,

    /// PR title
    #[serde(default)]
    pub title: Option<String>,

    /// Source branch name
    #[serde(rename = "sourceBranchName")]
    pub source_branch: String,

    /// Target branch name
    #[serde(rename = "targetBranchName")]
    pub target_branch: String,

    /// Review status shown on the detail view
    #[serde(default)]
    pub status: Option<String>,

    /// Raw per-file change blob
    #[serde(default)]
    pub content: Option<String>,

    /// Raw unified diff
    #[serde(default)]
    pub diff: Option<String>,

    /// Generated review feedback
    #[serde(default)]
    pub feedback: Option<String>,

    /// When the record was created
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,

    /// When the record was last modified
    #[serde(default)]
    pub last_modified: Option<NaiveDateTime>,
}

/// One stored conversation entry, exactly as the service returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationItem {
    /// Database row id
    pub id: i64,

    /// Message text
    pub message: String,

    /// Timestamp string as the service emitted it
    pub date_created: String,

    /// Sender role, in whatever case the service stored ("User", "user", ..)
    pub role: String,
}

/// Sender of a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human reviewer typing into the chat panel
    User,
    /// The assistant side of the conversation
    System,
}

impl Role {
    /// Parse a wire role case-insensitively
    ///
    /// Anything that is not recognizably a user entry belongs to the
    /// assistant side.
    pub fn from_wire(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("user") {
            Role::User
        } else {
            Role::System
        }
    }

    /// Wire spelling used when persisting an entry
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::System => "System",
        }
    }
}

/// Envelope of `GET /pr/{prId}/conversations`
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationsResponse {
    /// Stored entries in send order
    pub conversations: Vec<ConversationItem>,
}

/// Envelope of `POST /pr/{prId}/groq-response`
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantReplyResponse {
    /// The assistant's reply text
    pub response: String,
}

/// Body of `POST /pr/{prId}/conversation`
#[derive(Debug, Serialize)]
pub struct SaveConversationBody<'a> {
    /// Message text to persist
    pub message: &'a str,
    /// Wire spelling of the sender role
    pub role: &'a str,
}

/// Body of `POST /pr/{prId}/groq-response`
#[derive(Debug, Serialize)]
pub struct AssistantReplyBody<'a> {
    /// The user message the reply should answer
    pub message: &'a str,
}
