// ABOUTME: Core types and constants for the Garmin Coach demo client
// ABOUTME: Foundation crate with error handling, fitness data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Coach Core
//!
//! Foundation crate providing shared types and constants for the Garmin Coach
//! workspace. The provider crate and the root crate both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Unit conversions, provider names, and text-generation defaults
//! - **models**: Activity, health samples, user statistics, and export bundles

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Fitness and health data models
pub mod models;
