// ABOUTME: Fitness data provider trait and the sample Garmin Connect provider
// ABOUTME: Re-exports core types so callers can depend on this crate alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness data provider abstractions.
//!
//! The only implementation is [`SampleDataProvider`], which returns fixed
//! placeholder records in the shape Garmin Connect would deliver them.

pub use garmin_coach_core::constants;
pub use garmin_coach_core::errors;
pub use garmin_coach_core::models;

/// Core provider trait and request types
pub mod core;
/// Placeholder Garmin Connect provider returning fixed sample data
pub mod sample_provider;

pub use core::{ActivityQueryParams, Credentials, FitnessDataProvider};
pub use garmin_coach_core::errors::provider::ProviderError;
pub use sample_provider::SampleDataProvider;
