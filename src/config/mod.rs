// ABOUTME: Configuration module for the Garmin Coach client
// ABOUTME: Environment-only settings for credentials, the local LLM, logging, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only. There is no config
//! file; every setting has a default that works against a local Ollama server.

/// Environment configuration loading
pub mod environment;
/// Strongly typed configuration enums
pub mod types;

pub use environment::{CoachConfig, GarminConfig, LlmConfig};
pub use types::{LlmProviderType, LogLevel};
