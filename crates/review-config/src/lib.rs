//! Configuration for the review dashboard core
//!
//! This crate provides:
//! - Configuration file loading (TOML, CWD then home directory)
//! - Application configuration (AppConfig) with environment overrides
//! - API base URL resolution (development pin, env override, fixed default)

pub mod app_config;
pub mod config_file;

pub use app_config::{
    resolve_base_url, AppConfig, API_URL_ENV, DEFAULT_BASE_URL, DEV_BASE_URL, ENV_VAR,
};
pub use config_file::load_config_file;
