//! Direct HTTP implementation of the review API client

use crate::client::ReviewApi;
use crate::error::ApiError;
use crate::types::{
    AssistantReplyBody, AssistantReplyResponse, ConversationItem, ConversationsResponse,
    PullRequestRecord, Role, SaveConversationBody,
};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use review_config::AppConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Review API client talking to the service over HTTP
///
/// All requests send and expect JSON. Every request carries the configured
/// timeout so an unanswered call cannot leave the UI in a sending state
/// indefinitely. There is no retry logic: a single failed call surfaces as
/// an error to the caller.
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    http: Client,
    base_url: String,
}

impl HttpReviewApi {
    /// Create a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a non-2xx response into a typed error
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn fetch_pull_request(&self, pr_id: &str) -> Result<PullRequestRecord, ApiError> {
        debug!("Fetching pull request {}", pr_id);

        let response = self
            .http
            .get(self.url(&format!("/pr/{}", pr_id)))
            .send()
            .await?;

        Self::parse_json(response).await
    }

    async fn fetch_conversations(&self, pr_id: &str) -> Result<Vec<ConversationItem>, ApiError> {
        debug!("Fetching conversation history for PR {}", pr_id);

        let response = self
            .http
            .get(self.url(&format!("/pr/{}/conversations", pr_id)))
            .send()
            .await?;

        let envelope: ConversationsResponse = Self::parse_json(response).await?;
        debug!(
            "Fetched {} conversation entries for PR {}",
            envelope.conversations.len(),
            pr_id
        );
        Ok(envelope.conversations)
    }

    async fn save_conversation(
        &self,
        pr_id: &str,
        message: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        debug!("Saving {} conversation entry for PR {}", role.wire_name(), pr_id);

        let body = SaveConversationBody {
            message,
            role: role.wire_name(),
        };
        let response = self
            .http
            .post(self.url(&format!("/pr/{}/conversation", pr_id)))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn fetch_assistant_reply(
        &self,
        pr_id: &str,
        message: &str,
    ) -> Result<String, ApiError> {
        debug!("Requesting assistant reply for PR {}", pr_id);

        let body = AssistantReplyBody { message };
        let response = self
            .http
            .post(self.url(&format!("/pr/{}/groq-response", pr_id)))
            .json(&body)
            .send()
            .await?;

        let envelope: AssistantReplyResponse = Self::parse_json(response).await?;
        Ok(envelope.response)
    }
}

/// Error payload shape the service uses for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Best-effort error text from a non-2xx response body
///
/// Prefers the body's `error` field, then `message`, then the HTTP status
/// line.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}
