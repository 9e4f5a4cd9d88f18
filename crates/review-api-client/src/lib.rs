//! Review service API client
//!
//! This crate provides a trait-based client for the review dashboard's REST
//! service. The design keeps the trait as the seam: consumers (the
//! conversation controller, the detail view) depend on `ReviewApi`, and the
//! direct HTTP implementation can be swapped for a mock in tests.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                ReviewApi trait               │
//! │  - fetch_pull_request()                      │
//! │  - fetch_conversations()                     │
//! │  - save_conversation()                       │
//! │  - fetch_assistant_reply()                   │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!            ┌─────────────────────┐
//!            │    HttpReviewApi    │
//!            │  (reqwest, direct)  │
//!            └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use review_api_client::{HttpReviewApi, ReviewApi};
//! use review_config::AppConfig;
//!
//! # async fn example() -> Result<(), review_api_client::ApiError> {
//! let client = HttpReviewApi::new(&AppConfig::load())?;
//! let record = client.fetch_pull_request("41").await?;
//! println!("{}: {:?}", record.pr_id, record.title);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::ReviewApi;
pub use error::ApiError;
pub use http_client::HttpReviewApi;
pub use types::{
    AssistantReplyBody, AssistantReplyResponse, ConversationItem, ConversationsResponse,
    PullRequestRecord, Role, SaveConversationBody,
};
