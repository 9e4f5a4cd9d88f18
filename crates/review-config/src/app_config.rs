//! Application configuration
//!
//! Configuration loaded from .pr-review.toml, with environment overrides
//! for the API base URL.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the runtime environment
///
/// Set to `development` to pin the API base to the local backend.
pub const ENV_VAR: &str = "PR_REVIEW_ENV";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PR_REVIEW_API_URL";

/// API base used when running against the local development backend
pub const DEV_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Fixed production host used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://pr-ai-code-reviewer.vercel.app";

/// Application configuration loaded from .pr-review.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the review API service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for API calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Never fails: a missing or malformed file falls back to defaults with
    /// a warning. Environment resolution is applied on top of the file
    /// values, see [`resolve_base_url`].
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let mut config = if let Some(content) = crate::load_config_file() {
            match toml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            }
        } else {
            log::debug!("Using default app config");
            Self::default()
        };

        config.base_url = resolve_base_url(
            config.base_url,
            env::var(ENV_VAR).ok().as_deref(),
            env::var(API_URL_ENV).ok().as_deref(),
        );
        config
    }
}

/// Resolve the effective API base URL
///
/// Precedence: a development environment pins the local backend; otherwise
/// a non-empty env override wins over the configured (or default) value.
pub fn resolve_base_url(
    configured: String,
    env_setting: Option<&str>,
    env_url: Option<&str>,
) -> String {
    if env_setting.is_some_and(|v| v.eq_ignore_ascii_case("development")) {
        return DEV_BASE_URL.to_string();
    }

    match env_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => configured,
    }
}
