//! Conversation controller
//!
//! Owns the chat state for one pull request and orchestrates history load
//! and optimistic send against the review API. Failures never propagate
//! past this boundary: they land in the state's `last_error` for the UI to
//! display.

use crate::actions::ConversationAction;
use crate::reducer::reduce;
use crate::state::{ConversationEntry, ConversationState, Phase};
use review_api_client::{ReviewApi, Role};
use std::sync::Arc;

/// Drives one pull request's conversation
///
/// The controller is the single owner of its [`ConversationState`].
/// Switching to another pull request means constructing a fresh controller;
/// state is never carried across ids. The `&mut self` receivers make
/// overlapping operations on one controller unrepresentable; the `Sending`
/// phase additionally rejects a queued second send.
pub struct ConversationController<C: ReviewApi> {
    pr_id: String,
    client: Arc<C>,
    state: ConversationState,
}

impl<C: ReviewApi> ConversationController<C> {
    /// Create a controller for one pull request id
    pub fn new(pr_id: impl Into<String>, client: Arc<C>) -> Self {
        Self {
            pr_id: pr_id.into(),
            client,
            state: ConversationState::default(),
        }
    }

    /// The pull request this conversation belongs to
    pub fn pr_id(&self) -> &str {
        &self.pr_id
    }

    /// Current conversation state, for the view layer
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Messages in send order
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.state.entries
    }

    /// Text of the last failed operation, if any
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    fn apply(&mut self, action: ConversationAction) {
        self.state = reduce(std::mem::take(&mut self.state), &action);
    }

    /// Load the stored conversation history
    ///
    /// Fails fast with a local error when the pull request id is empty;
    /// no network call is attempted. Valid from `Idle` (and from `Error`
    /// while nothing was loaded yet, so a failed initial load can be
    /// retried); once history is present the call is ignored. On success
    /// the entry list is replaced wholesale, dropping any local optimistic
    /// state.
    pub async fn load_history(&mut self) {
        if self.pr_id.is_empty() {
            log::error!("Cannot fetch conversation history: no PR id provided");
            self.apply(ConversationAction::OperationFailed(
                "No PR id available. Unable to fetch conversation history.".to_string(),
            ));
            return;
        }

        let retryable = self.state.phase == Phase::Error && self.state.entries.is_empty();
        if self.state.phase != Phase::Idle && !retryable {
            log::debug!("History already loaded for PR {}, ignoring", self.pr_id);
            return;
        }

        match self.client.fetch_conversations(&self.pr_id).await {
            Ok(items) => {
                let entries = items.iter().map(ConversationEntry::from_item).collect();
                self.apply(ConversationAction::HistoryLoaded(entries));
            }
            Err(e) => {
                log::error!("Error fetching conversation history: {}", e);
                self.apply(ConversationAction::OperationFailed(
                    "Failed to fetch conversation history. Please try again.".to_string(),
                ));
            }
        }
    }

    /// Send a user message and obtain the assistant's reply
    ///
    /// No-op when `text` trims empty; rejected while a send is already in
    /// flight. The user entry is appended before any network round trip so
    /// it is visible immediately. The round trip then persists the user
    /// entry, requests the assistant reply, appends it, and persists it,
    /// strictly in that order, so the reply always lands after the message
    /// that produced it. A failure at any step records `last_error` and
    /// keeps every entry appended so far.
    pub async fn send(&mut self, text: &str) {
        let message = text.trim();
        if message.is_empty() {
            return;
        }
        if self.state.phase == Phase::Sending {
            log::warn!("Send already in flight for PR {}, rejecting", self.pr_id);
            return;
        }

        let message = message.to_string();
        self.apply(ConversationAction::SendStarted(ConversationEntry::user(
            message.as_str(),
        )));

        if let Err(e) = self
            .client
            .save_conversation(&self.pr_id, &message, Role::User)
            .await
        {
            self.apply(ConversationAction::OperationFailed(format!("Error: {}", e)));
            return;
        }

        let reply = match self
            .client
            .fetch_assistant_reply(&self.pr_id, &message)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                self.apply(ConversationAction::OperationFailed(format!("Error: {}", e)));
                return;
            }
        };

        self.apply(ConversationAction::ReplyReceived(ConversationEntry::system(
            reply.as_str(),
        )));

        if let Err(e) = self
            .client
            .save_conversation(&self.pr_id, &reply, Role::System)
            .await
        {
            self.apply(ConversationAction::OperationFailed(format!("Error: {}", e)));
            return;
        }

        self.apply(ConversationAction::SendCompleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use review_api_client::{ApiError, ConversationItem, PullRequestRecord};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock client for testing
    #[derive(Default)]
    struct MockApi {
        history: Vec<ConversationItem>,
        reply: String,
        fail_history: AtomicBool,
        fail_user_save: bool,
        fail_reply: bool,
        fail_system_save: bool,
        history_calls: AtomicUsize,
        saved: Mutex<Vec<(String, String)>>,
    }

    impl MockApi {
        fn with_reply(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                ..Default::default()
            }
        }

        fn saved(&self) -> Vec<(String, String)> {
            self.saved.lock().unwrap().clone()
        }

        fn history_calls(&self) -> usize {
            self.history_calls.load(Ordering::SeqCst)
        }

        fn boom() -> ApiError {
            ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }
        }
    }

    #[async_trait]
    impl ReviewApi for MockApi {
        async fn fetch_pull_request(&self, _pr_id: &str) -> Result<PullRequestRecord, ApiError> {
            Err(ApiError::Status {
                status: 404,
                message: "PR not found".to_string(),
            })
        }

        async fn fetch_conversations(
            &self,
            _pr_id: &str,
        ) -> Result<Vec<ConversationItem>, ApiError> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_history.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(self.history.clone())
        }

        async fn save_conversation(
            &self,
            _pr_id: &str,
            message: &str,
            role: Role,
        ) -> Result<(), ApiError> {
            let fail = match role {
                Role::User => self.fail_user_save,
                Role::System => self.fail_system_save,
            };
            if fail {
                return Err(Self::boom());
            }
            self.saved
                .lock()
                .unwrap()
                .push((message.to_string(), role.wire_name().to_string()));
            Ok(())
        }

        async fn fetch_assistant_reply(
            &self,
            _pr_id: &str,
            _message: &str,
        ) -> Result<String, ApiError> {
            if self.fail_reply {
                return Err(Self::boom());
            }
            Ok(self.reply.clone())
        }
    }

    fn item(id: i64, message: &str, role: &str) -> ConversationItem {
        ConversationItem {
            id,
            message: message.to_string(),
            date_created: "2024-11-03T09:15:27".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_history_replaces_entries() {
        let mock = Arc::new(MockApi {
            history: vec![item(1, "hi", "User"), item(2, "hello", "SYSTEM")],
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", mock);

        controller.load_history().await;

        assert_eq!(controller.state().phase, Phase::Loaded);
        assert_eq!(controller.entries().len(), 2);
        assert_eq!(controller.entries()[0].role, Role::User);
        assert_eq!(controller.entries()[1].role, Role::System);
        assert!(controller.last_error().is_none());
    }

    #[tokio::test]
    async fn test_load_history_without_pr_id_is_local_error() {
        let mock = Arc::new(MockApi::default());
        let mut controller = ConversationController::new("", Arc::clone(&mock));

        controller.load_history().await;

        assert_eq!(
            controller.last_error(),
            Some("No PR id available. Unable to fetch conversation history.")
        );
        // No network call was attempted.
        assert_eq!(mock.history_calls(), 0);
    }

    #[tokio::test]
    async fn test_load_history_failure_can_be_retried() {
        let mock = Arc::new(MockApi::default());
        mock.fail_history.store(true, Ordering::SeqCst);
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.load_history().await;
        assert_eq!(controller.state().phase, Phase::Error);
        assert_eq!(
            controller.last_error(),
            Some("Failed to fetch conversation history. Please try again.")
        );

        mock.fail_history.store(false, Ordering::SeqCst);
        controller.load_history().await;
        assert_eq!(controller.state().phase, Phase::Loaded);
        assert_eq!(mock.history_calls(), 2);
    }

    #[tokio::test]
    async fn test_load_history_is_ignored_once_loaded() {
        let mock = Arc::new(MockApi {
            history: vec![item(1, "hi", "User")],
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.load_history().await;
        controller.load_history().await;

        assert_eq!(mock.history_calls(), 1);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_system_in_order() {
        let mock = Arc::new(MockApi::with_reply("the diff adds a handler"));
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.send("hi").await;

        assert_eq!(controller.state().phase, Phase::Loaded);
        let entries = controller.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "hi");
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[1].content, "the diff adds a handler");
        assert_eq!(entries[1].role, Role::System);

        // The reply is persisted strictly after the user message.
        assert_eq!(
            mock.saved(),
            vec![
                ("hi".to_string(), "User".to_string()),
                ("the diff adds a handler".to_string(), "System".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_send_trims_and_ignores_empty_text() {
        let mock = Arc::new(MockApi::with_reply("unused"));
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.send("   ").await;

        assert!(controller.entries().is_empty());
        assert_eq!(controller.state().phase, Phase::Idle);
        assert!(mock.saved().is_empty());
    }

    #[tokio::test]
    async fn test_send_is_rejected_while_sending() {
        let mock = Arc::new(MockApi::with_reply("unused"));
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.apply(ConversationAction::SendStarted(ConversationEntry::user(
            "in flight",
        )));
        controller.send("second").await;

        assert_eq!(controller.entries().len(), 1);
        assert!(mock.saved().is_empty());
    }

    #[tokio::test]
    async fn test_user_entry_survives_reply_failure() {
        let mock = Arc::new(MockApi {
            fail_reply: true,
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.send("hi").await;

        // The optimistic entry and its successful persist are kept.
        assert_eq!(controller.entries().len(), 1);
        assert_eq!(controller.entries()[0].content, "hi");
        assert_eq!(controller.state().phase, Phase::Error);
        assert_eq!(controller.last_error(), Some("Error: boom"));
        assert_eq!(mock.saved(), vec![("hi".to_string(), "User".to_string())]);
    }

    #[tokio::test]
    async fn test_user_persist_failure_keeps_optimistic_entry() {
        let mock = Arc::new(MockApi {
            fail_user_save: true,
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.send("hi").await;

        assert_eq!(controller.entries().len(), 1);
        assert_eq!(controller.state().phase, Phase::Error);
        assert_eq!(controller.last_error(), Some("Error: boom"));
    }

    #[tokio::test]
    async fn test_reply_persist_failure_keeps_both_entries() {
        let mock = Arc::new(MockApi {
            reply: "answer".to_string(),
            fail_system_save: true,
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.send("hi").await;

        assert_eq!(controller.entries().len(), 2);
        assert_eq!(controller.entries()[1].content, "answer");
        assert_eq!(controller.state().phase, Phase::Error);
    }

    #[tokio::test]
    async fn test_send_recovers_from_error_phase() {
        let mock = Arc::new(MockApi {
            reply: "answer".to_string(),
            fail_user_save: false,
            ..Default::default()
        });
        let mut controller = ConversationController::new("41", Arc::clone(&mock));

        controller.apply(ConversationAction::OperationFailed("Error: boom".to_string()));
        controller.send("again").await;

        assert_eq!(controller.state().phase, Phase::Loaded);
        assert!(controller.last_error().is_none());
    }
}
