//! Typed errors for review API calls

use thiserror::Error;

/// Errors that can occur during a review API call
///
/// The `Display` text of every variant is the user-visible error message;
/// callers surface it as state rather than propagating it further.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status
    ///
    /// `message` carries the best-effort decoded `error` or `message` field
    /// of the response body, falling back to the HTTP status line.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body this client cannot decode
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
