//! Review Chat
//!
//! The conversation state machine behind the dashboard's chat panel. One
//! [`ConversationController`] owns the ordered message log for one pull
//! request: it loads stored history, appends user messages optimistically,
//! round-trips them and the assistant replies through the review API, and
//! surfaces failures as displayable state instead of errors.
//!
//! State transitions are pure ([`reducer::reduce`]) over explicit
//! [`actions::ConversationAction`] values, so the append-only ordering
//! invariant lives in one function rather than scattered event handlers.
//!
//! # Example
//!
//! ```rust,no_run
//! use review_api_client::HttpReviewApi;
//! use review_chat::ConversationController;
//! use review_config::AppConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), review_api_client::ApiError> {
//! let client = Arc::new(HttpReviewApi::new(&AppConfig::load())?);
//! let mut chat = ConversationController::new("41", client);
//!
//! chat.load_history().await;
//! chat.send("What does this change do?").await;
//!
//! for entry in chat.entries() {
//!     println!("{:?}: {}", entry.role, entry.rendered_content());
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod controller;
pub mod reducer;
pub mod state;

pub use actions::ConversationAction;
pub use controller::ConversationController;
pub use reducer::reduce;
pub use state::{ConversationEntry, ConversationState, Phase};

// The role enum is shared with the wire layer; re-export it so consumers
// of this crate do not need the client crate for display logic.
pub use review_api_client::Role;
