// ABOUTME: Environment-based configuration for credentials, the local LLM, and export paths
// ABOUTME: Every variable is optional; defaults target a local Ollama server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `GARMIN_EMAIL` / `GARMIN_PASSWORD` | unset |
//! | `COACH_LLM_PROVIDER` | `ollama` |
//! | `COACH_LLM_BASE_URL` | `http://localhost:11434` |
//! | `COACH_LLM_MODEL` | `llama2` |
//! | `COACH_LLM_TIMEOUT_SECS` | `30` |
//! | `COACH_EXPORT_PATH` | `garmin_data_export.json` |
//! | `RUST_LOG` | `info` |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use super::types::{LlmProviderType, LogLevel};
use crate::constants::export::DEFAULT_EXPORT_PATH;
use crate::constants::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use crate::providers::Credentials;

const GARMIN_EMAIL_ENV: &str = "GARMIN_EMAIL";
const GARMIN_PASSWORD_ENV: &str = "GARMIN_PASSWORD";
const LLM_BASE_URL_ENV: &str = "COACH_LLM_BASE_URL";
const LLM_MODEL_ENV: &str = "COACH_LLM_MODEL";
const LLM_TIMEOUT_ENV: &str = "COACH_LLM_TIMEOUT_SECS";
const EXPORT_PATH_ENV: &str = "COACH_EXPORT_PATH";
const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Garmin Connect account settings
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GarminConfig {
    /// Account email
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl GarminConfig {
    /// Read `GARMIN_EMAIL` and `GARMIN_PASSWORD`; empty values count as unset
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            email: non_empty_env(GARMIN_EMAIL_ENV),
            password: non_empty_env(GARMIN_PASSWORD_ENV),
        }
    }

    /// Credentials for constructing a data provider
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for GarminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GarminConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Local text-generation endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Requested backend
    pub provider: LlmProviderType,
    /// Base URL of the endpoint, without the `/api/...` suffix
    pub base_url: String,
    /// Model name sent with every request
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderType::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load from `COACH_LLM_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if `COACH_LLM_TIMEOUT_SECS` is not a
    /// positive integer.
    pub fn from_env() -> AppResult<Self> {
        let provider = env::var(LlmProviderType::ENV_VAR)
            .map(|value| LlmProviderType::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            provider,
            base_url: non_empty_env(LLM_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            model: non_empty_env(LLM_MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            timeout_secs: parse_timeout_secs(env::var(LLM_TIMEOUT_ENV).ok().as_deref())?,
        })
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachConfig {
    /// Garmin account settings
    pub garmin: GarminConfig,
    /// Text-generation settings
    pub llm: LlmConfig,
    /// Default JSON export file
    pub export_path: PathBuf,
    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            garmin: GarminConfig::default(),
            llm: LlmConfig::default(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            log_level: LogLevel::default(),
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when a numeric variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading configuration from environment variables");

        let config = Self {
            garmin: GarminConfig::from_env(),
            llm: LlmConfig::from_env()?,
            export_path: non_empty_env(EXPORT_PATH_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH), PathBuf::from),
            log_level: env::var(LOG_LEVEL_ENV)
                .map(|value| LogLevel::from_str_or_default(&value))
                .unwrap_or_default(),
        };

        info!(
            provider = %config.llm.provider,
            base_url = %config.llm.base_url,
            model = %config.llm.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Configuration summary for display (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Garmin Coach Configuration:\n\
             - Garmin Credentials: {}\n\
             - LLM Provider: {}\n\
             - LLM Endpoint: {}\n\
             - LLM Model: {}\n\
             - LLM Timeout: {}s\n\
             - Export Path: {}\n\
             - Log Level: {}",
            if self.garmin.credentials().is_complete() {
                "Configured"
            } else {
                "Not configured"
            },
            self.llm.provider,
            self.llm.base_url,
            self.llm.model,
            self.llm.timeout_secs,
            self.export_path.display(),
            self.log_level
        )
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse the timeout override, keeping the default when unset
fn parse_timeout_secs(raw: Option<&str>) -> AppResult<u64> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(DEFAULT_TIMEOUT_SECS);
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(AppError::config_invalid(format!(
            "{LLM_TIMEOUT_ENV} must be greater than zero"
        ))),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::config_invalid(format!(
            "Invalid {LLM_TIMEOUT_ENV} value '{raw}': {e}"
        ))
        .with_source(e)),
    }
}
