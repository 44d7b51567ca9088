// ABOUTME: Ollama client for the non-streaming /api/generate endpoint
// ABOUTME: One POST per prompt, bounded by the configured timeout, no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ollama Provider
//!
//! Sends `{"model": ..., "prompt": ..., "stream": false}` to
//! `{base_url}/api/generate` and reads the `response` field of the reply.
//! Only HTTP 200 counts as success. The health check lists installed models
//! via `GET {base_url}/api/tags`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{GenerateRequest, GenerateResponse, TextGenerator};
use crate::config::LlmConfig;
use crate::constants::llm::{GENERATE_ENDPOINT, TAGS_ENDPOINT};
use crate::errors::{AppError, AppResult, ErrorCode};

const SERVICE_NAME: &str = "Ollama";

/// Characters of an error body kept in error messages
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[serde(default)]
    model: Option<String>,
}

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaProvider {
    /// Build a client for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &LlmConfig) -> AppResult<Self> {
        let timeout = config.timeout();
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            timeout_secs = config.timeout_secs,
            "Initialized Ollama provider"
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout,
        })
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Configured request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url())
    }

    fn transport_error(&self, error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!("Request timed out after {}s", self.timeout.as_secs()),
            )
        } else if error.is_connect() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!("Cannot connect to Ollama. Is the server running at {}?", self.base_url()),
            )
        } else {
            AppError::external_service(SERVICE_NAME, format!("Request failed: {error}"))
        }
    }

    fn status_error(status: StatusCode, body: &str) -> AppError {
        let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
        match status.as_u16() {
            404 => AppError::external_service(
                SERVICE_NAME,
                format!("Model or endpoint not found: {preview}"),
            ),
            502..=504 => AppError::external_unavailable(
                SERVICE_NAME,
                "Local Ollama server is not responding",
            ),
            _ => AppError::external_service(SERVICE_NAME, format!("API error ({status}): {preview}")),
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.model)))]
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        debug!(prompt_len = request.prompt.len(), "Sending generate request");

        let body = OllamaGenerateRequest {
            model,
            prompt: &request.prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.api_url(GENERATE_ENDPOINT))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Ollama request failed");
                self.transport_error(&e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read Ollama response body");
            self.transport_error(&e)
        })?;

        if status != StatusCode::OK {
            warn!(%status, "Ollama returned a non-success status");
            return Err(Self::status_error(status, &text));
        }

        let parsed: OllamaGenerateResponse = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "Ollama response has no text");
            AppError::new(
                ErrorCode::SerializationError,
                format!("{SERVICE_NAME}: unexpected response payload: {e}"),
            )
            .with_source(e)
        })?;

        debug!(response_len = parsed.response.len(), "Received Ollama completion");
        Ok(GenerateResponse {
            content: parsed.response,
            model: parsed.model.unwrap_or_else(|| model.to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        debug!(base_url = %self.base_url(), "Performing Ollama health check");

        let response = self
            .client
            .get(self.api_url(TAGS_ENDPOINT))
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "Ollama health check failed");
                self.transport_error(&e)
            })?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("Ollama health check passed");
        } else {
            warn!(status = %response.status(), "Ollama health check failed");
        }
        Ok(healthy)
    }
}
