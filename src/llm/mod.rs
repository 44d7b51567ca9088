// ABOUTME: Text-generation abstraction for coaching responses
// ABOUTME: Defines the TextGenerator contract, the Ollama client, prompts, and canned fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Generation
//!
//! A [`TextGenerator`] turns one prompt into one completion. The only
//! implementation talks to a local Ollama server over `POST /api/generate`
//! with streaming disabled.
//!
//! Generators report failures as `AppError`. Deciding what to do about a
//! failure (substituting a [`CannedResponse`]) belongs to the coach.
//!
//! ## Example
//!
//! ```rust,no_run
//! use garmin_coach::config::LlmConfig;
//! use garmin_coach::llm::{GenerateRequest, OllamaProvider, TextGenerator};
//!
//! # async fn example() -> garmin_coach::errors::AppResult<()> {
//! let provider = OllamaProvider::new(&LlmConfig::default())?;
//! let response = provider
//!     .generate(&GenerateRequest::new("Suggest a recovery stretch"))
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod fallback;
mod ollama;
pub mod prompts;

pub use fallback::CannedResponse;
pub use ollama::OllamaProvider;

use async_trait::async_trait;

use crate::errors::AppResult;

/// Single-prompt generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Prompt text
    pub prompt: String,
    /// Model override (provider default when `None`)
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Request using the provider's default model
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    /// Override the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Completion returned by a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
}

/// Text-generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend identifier (e.g., "ollama")
    fn name(&self) -> &'static str;

    /// Model used when a request does not override it
    fn default_model(&self) -> &str;

    /// Generate a completion for one prompt
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable, times out, answers
    /// with a non-success status, or returns a payload without text.
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;

    /// Whether the backend is reachable and serving
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached at all.
    async fn health_check(&self) -> AppResult<bool>;
}
