// ABOUTME: Prompt-and-fallback AI coach for activity feedback, health advice, and training plans
// ABOUTME: Tries the configured local LLM once per call and degrades to canned responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Coach
//!
//! Every call builds a prompt, then either
//!
//! - **attempts the external generator** once (local strategy), returning its
//!   text on success and a canned response on any failure, or
//! - **goes straight to the canned response** (canned-only strategy).
//!
//! Nothing here returns an error: external failures are logged at `warn` and
//! swallowed. The coach keeps no state between calls.

use std::fmt::{self, Display};

use tracing::{debug, info, warn};

use crate::config::{LlmConfig, LlmProviderType};
use crate::errors::AppResult;
use crate::llm::prompts::{activity_prompt, health_prompt, training_plan_prompt};
use crate::llm::{CannedResponse, GenerateRequest, OllamaProvider, TextGenerator};
use crate::models::{Activity, HealthBundle, UserStats};

/// How the coach answers a prompt
pub enum ResponderStrategy {
    /// Ask a generator first, fall back on failure
    Local(Box<dyn TextGenerator>),
    /// Never perform I/O; always answer with a canned response
    CannedOnly {
        /// Provider type that was configured but has no client
        requested: LlmProviderType,
    },
}

impl ResponderStrategy {
    /// Strategy backed by any generator
    #[must_use]
    pub fn local(generator: impl TextGenerator + 'static) -> Self {
        Self::Local(Box::new(generator))
    }

    /// Map configuration to a strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for a local provider cannot be built.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        if config.provider.is_local() {
            Ok(Self::local(OllamaProvider::new(config)?))
        } else {
            info!(
                provider = %config.provider,
                "No client for configured LLM provider; using canned responses"
            );
            Ok(Self::CannedOnly {
                requested: config.provider,
            })
        }
    }

    /// Short description for status output
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Local(generator) => {
                format!("{} (model {})", generator.name(), generator.default_model())
            }
            Self::CannedOnly { requested } => format!("canned responses ({requested} requested)"),
        }
    }
}

impl fmt::Debug for ResponderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(generator) => f
                .debug_struct("Local")
                .field("name", &generator.name())
                .field("model", &generator.default_model())
                .finish(),
            Self::CannedOnly { requested } => f
                .debug_struct("CannedOnly")
                .field("requested", requested)
                .finish(),
        }
    }
}

/// Which branch produced a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSource {
    /// Text came from the external generator
    External {
        /// Model that answered
        model: String,
    },
    /// Text is one of the canned responses
    Fallback(CannedResponse),
}

/// Coaching text plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachResponse {
    /// Response text
    pub text: String,
    /// Origin of the text
    pub source: ResponseSource,
}

impl CoachResponse {
    fn fallback(prompt: &str) -> Self {
        let canned = CannedResponse::select(prompt);
        Self {
            text: canned.text().to_owned(),
            source: ResponseSource::Fallback(canned),
        }
    }

    /// Whether the text is a canned response
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, ResponseSource::Fallback(_))
    }
}

impl Display for CoachResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Coach that turns fitness data into advice
#[derive(Debug)]
pub struct AiCoach {
    strategy: ResponderStrategy,
}

impl AiCoach {
    /// Coach using the given strategy
    #[must_use]
    pub const fn new(strategy: ResponderStrategy) -> Self {
        Self { strategy }
    }

    /// Coach for the configured provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for a local provider cannot be built.
    pub fn from_config(config: &LlmConfig) -> AppResult<Self> {
        Ok(Self::new(ResponderStrategy::from_config(config)?))
    }

    /// Active strategy
    #[must_use]
    pub const fn strategy(&self) -> &ResponderStrategy {
        &self.strategy
    }

    /// Brief feedback on one workout
    pub async fn analyze_activity(&self, activity: &Activity) -> CoachResponse {
        self.respond(&activity_prompt(activity)).await
    }

    /// Recommendations from one day of health samples
    pub async fn analyze_health_metrics(&self, health: &HealthBundle) -> CoachResponse {
        self.respond(&health_prompt(health)).await
    }

    /// Seven-day plan toward `goal`
    pub async fn create_training_plan(&self, stats: &UserStats, goal: &str) -> CoachResponse {
        self.respond(&training_plan_prompt(stats, goal)).await
    }

    /// Answer an arbitrary prompt
    pub async fn respond(&self, prompt: &str) -> CoachResponse {
        match &self.strategy {
            ResponderStrategy::Local(generator) => {
                match generator.generate(&GenerateRequest::new(prompt)).await {
                    Ok(response) => CoachResponse {
                        text: response.content,
                        source: ResponseSource::External {
                            model: response.model,
                        },
                    },
                    Err(e) => {
                        warn!(
                            provider = generator.name(),
                            error = %e,
                            "AI endpoint unavailable; using canned response"
                        );
                        CoachResponse::fallback(prompt)
                    }
                }
            }
            ResponderStrategy::CannedOnly { requested } => {
                debug!(provider = %requested, "Answering with canned response");
                CoachResponse::fallback(prompt)
            }
        }
    }

    /// Whether real AI responses are currently available
    pub async fn health_check(&self) -> bool {
        match &self.strategy {
            ResponderStrategy::Local(generator) => match generator.health_check().await {
                Ok(healthy) => healthy,
                Err(e) => {
                    debug!(error = %e, "AI endpoint health check failed");
                    false
                }
            },
            ResponderStrategy::CannedOnly { .. } => false,
        }
    }
}
