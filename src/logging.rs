// ABOUTME: Logging configuration and tracing subscriber setup
// ABOUTME: Selects JSON, pretty, or compact output and quiets noisy HTTP dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`
//!
//! Logs go to stderr so that summaries and JSON printed on stdout stay clean
//! enough to pipe into other tools.

use anyhow::Result;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::types::LogLevel;

const SERVICE_NAME: &str = "garmin-coach";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level applied to this crate (and everything else unless `RUST_LOG` is set)
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives, used verbatim unless the level was forced
    pub filter: Option<String>,
    /// Level set explicitly (`--verbose`); crate directives win over `filter`
    pub level_forced: bool,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Full human-readable output with targets
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`, defaulting to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            filter: None,
            level_forced: false,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, and `LOG_INCLUDE_THREAD`.
    #[must_use]
    pub fn from_env() -> Self {
        let filter = env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let level = filter
            .as_deref()
            .map(LogLevel::from_str_or_default)
            .unwrap_or_default();
        let format = env::var("LOG_FORMAT")
            .map(|value| LogFormat::from_str_or_default(&value))
            .unwrap_or(LogFormat::Compact);

        Self {
            level,
            filter,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..Self::default()
        }
    }

    /// Override the level (used by `--verbose`)
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.level_forced = true;
        self
    }

    /// Build the filter
    ///
    /// `RUST_LOG` directives are used as given. Without them (or with a forced
    /// level) the crate level applies, with HTTP client noise held at `warn`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        match (&self.filter, self.level_forced) {
            (Some(raw), false) => EnvFilter::new(raw),
            (raw, _) => {
                let crate_level = self.level;
                let base = raw.as_deref().map_or_else(
                    || EnvFilter::new(crate_level.to_string()),
                    EnvFilter::new,
                );
                base.add_directive(directive("hyper=warn", Level::WARN))
                    .add_directive(directive("hyper_util=warn", Level::WARN))
                    .add_directive(directive("reqwest=warn", Level::WARN))
                    .add_directive(directive(
                        &format!("garmin_coach={crate_level}"),
                        crate_level.to_tracing_level(),
                    ))
                    .add_directive(directive(
                        &format!("garmin_coach_providers={crate_level}"),
                        crate_level.to_tracing_level(),
                    ))
            }
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

fn directive(raw: &str, fallback: Level) -> Directive {
    raw.parse().unwrap_or_else(|_| fallback.into())
}
