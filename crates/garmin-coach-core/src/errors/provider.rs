// ABOUTME: Structured error types for fitness data provider operations
// ABOUTME: Covers the authenticate() guard raised before any data retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

/// Errors raised by fitness data providers
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// A data-retrieval call was made before `authenticate()` succeeded
    #[error("Not authenticated with {provider}. Call authenticate() first.")]
    NotAuthenticated {
        /// Provider that rejected the call
        provider: String,
    },
}

impl ProviderError {
    /// Create a "not authenticated" error for the given provider
    #[must_use]
    pub fn not_authenticated(provider: impl Into<String>) -> Self {
        Self::NotAuthenticated {
            provider: provider.into(),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::NotAuthenticated { .. } => ErrorCode::AuthRequired,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
