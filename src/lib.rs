// ABOUTME: Main library entry point for the Garmin Coach demo client
// ABOUTME: Sample fitness data, text summaries, JSON export, and AI coaching via a local LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Coach
//!
//! A demonstration client that stitches together three thin layers:
//!
//! - **Providers**: a placeholder Garmin Connect provider returning sample data
//! - **Formatters**: human-readable summaries and pretty JSON export
//! - **Coach**: prompt templates sent to a local Ollama server, with canned
//!   responses whenever the server is unavailable or not configured
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use garmin_coach::coach::AiCoach;
//! use garmin_coach::config::environment::CoachConfig;
//! use garmin_coach::errors::AppResult;
//! use garmin_coach::providers::{
//!     ActivityQueryParams, FitnessDataProvider, SampleDataProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CoachConfig::from_env()?;
//!     let mut provider = SampleDataProvider::new(config.garmin.credentials());
//!     provider.authenticate().await?;
//!
//!     let activities = provider.get_activities(&ActivityQueryParams::default()).await?;
//!     let coach = AiCoach::from_config(&config.llm)?;
//!     if let Some(activity) = activities.first() {
//!         println!("{}", coach.analyze_activity(activity).await);
//!     }
//!     Ok(())
//! }
//! ```

pub use garmin_coach_core::constants;
pub use garmin_coach_core::errors;
pub use garmin_coach_core::models;
pub use garmin_coach_providers as providers;

/// Prompt-and-fallback AI coach
pub mod coach;

/// Environment-driven configuration
pub mod config;

/// Text summaries and JSON export
pub mod formatters;

/// Local text-generation client, prompt templates, and canned responses
pub mod llm;

/// Structured logging setup
pub mod logging;
