//! Conversation reducer
//!
//! Pure transition function over conversation state. The controller's only
//! way to mutate state is through here, which keeps the append-only entry
//! order enforced in a single place.

use crate::actions::ConversationAction;
use crate::state::{ConversationState, Phase};

/// Reduce conversation state based on an action
pub fn reduce(mut state: ConversationState, action: &ConversationAction) -> ConversationState {
    match action {
        ConversationAction::HistoryLoaded(entries) => {
            state.entries = entries.clone();
            state.phase = Phase::Loaded;
            state.last_error = None;
            log::info!("Loaded {} conversation entries", state.entries.len());
        }

        ConversationAction::SendStarted(entry) => {
            state.entries.push(entry.clone());
            state.phase = Phase::Sending;
            state.last_error = None;
            log::debug!("Send started, {} entries", state.entries.len());
        }

        ConversationAction::ReplyReceived(entry) => {
            state.entries.push(entry.clone());
            log::debug!("Assistant reply appended");
        }

        ConversationAction::SendCompleted => {
            state.phase = Phase::Loaded;
            log::debug!("Send round trip completed");
        }

        ConversationAction::OperationFailed(error) => {
            state.phase = Phase::Error;
            state.last_error = Some(error.clone());
            log::error!("Conversation operation failed: {}", error);
        }
    }

    state
}
