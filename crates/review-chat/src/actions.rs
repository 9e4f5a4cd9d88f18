//! Conversation actions
//!
//! Every state change of a conversation is one of these actions, applied
//! through the pure reducer.

use crate::state::ConversationEntry;

/// A state transition of one conversation
#[derive(Debug, Clone)]
pub enum ConversationAction {
    /// History fetched; replaces the entry list wholesale
    HistoryLoaded(Vec<ConversationEntry>),

    /// A user message was appended optimistically; a send round trip begins
    SendStarted(ConversationEntry),

    /// The assistant reply arrived and is appended
    ReplyReceived(ConversationEntry),

    /// The send round trip finished, including persisting the reply
    SendCompleted,

    /// An operation failed; entries appended so far are kept
    OperationFailed(String),
}
