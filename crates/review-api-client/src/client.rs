//! Review API client trait
//!
//! This module defines the core `ReviewApi` trait that all client
//! implementations must satisfy. The conversation controller and the detail
//! view consume the trait, never a concrete client, so tests can substitute
//! a mock.

use crate::error::ApiError;
use crate::types::{ConversationItem, PullRequestRecord, Role};
use async_trait::async_trait;

/// Review service API client trait
///
/// One method per collaborator operation. Implementations must be
/// `Send + Sync` so a client can be shared across async tasks.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch the full stored record for one pull request
    ///
    /// Maps to `GET /pr/{prId}`.
    async fn fetch_pull_request(&self, pr_id: &str) -> Result<PullRequestRecord, ApiError>;

    /// Fetch the ordered conversation history for one pull request
    ///
    /// Maps to `GET /pr/{prId}/conversations`, unwrapping the
    /// `{ conversations: [...] }` envelope.
    async fn fetch_conversations(&self, pr_id: &str) -> Result<Vec<ConversationItem>, ApiError>;

    /// Persist one conversation entry
    ///
    /// Maps to `POST /pr/{prId}/conversation` with body `{ message, role }`.
    async fn save_conversation(
        &self,
        pr_id: &str,
        message: &str,
        role: Role,
    ) -> Result<(), ApiError>;

    /// Request the assistant's reply to a user message
    ///
    /// Maps to `POST /pr/{prId}/groq-response` with body `{ message }`,
    /// unwrapping the `{ response }` envelope.
    async fn fetch_assistant_reply(&self, pr_id: &str, message: &str)
        -> Result<String, ApiError>;
}
