// ABOUTME: Configuration enums for log verbosity and text-generation provider selection
// ABOUTME: Parsing is lenient; unrecognized values fall back to a documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::Level;

/// Log verbosity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operational messages (default)
    #[default]
    Info,
    /// Provider calls, prompt sizes, fallback selection
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string, falling back to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// `Debug` when verbose output was requested, otherwise `Info`
    #[must_use]
    pub const fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Text-generation backend requested for coaching responses
///
/// Only the local Ollama endpoint is wired up. Hosted backends are accepted
/// as configuration values but always resolve to canned responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Local Ollama server (default)
    #[default]
    Ollama,
    /// Hugging Face inference API (not implemented)
    HuggingFace,
    /// Together AI (not implemented)
    Together,
    /// Any other value
    Unknown,
}

impl LlmProviderType {
    /// Environment variable name for provider selection
    pub const ENV_VAR: &'static str = "COACH_LLM_PROVIDER";

    /// Parse from string; empty input selects the default, anything unrecognized is `Unknown`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "ollama" | "local" => Self::Ollama,
            "huggingface" | "hf" => Self::HuggingFace,
            "together" => Self::Together,
            _ => Self::Unknown,
        }
    }

    /// Whether this provider has a working client
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Ollama)
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Ollama => "ollama",
            Self::HuggingFace => "huggingface",
            Self::Together => "together",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
