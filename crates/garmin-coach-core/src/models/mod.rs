// ABOUTME: Core data models for the Garmin Coach demo client
// ABOUTME: Re-exports Activity, health samples, user statistics, and the export bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records with no identity beyond their fields. JSON field names follow
//! the camelCase keys Garmin Connect uses (`activityName`, `restingHeartRate`),
//! so an export reads like the data a real client would receive.
//!
//! Derived display values such as kilometers or minutes are never stored; the
//! formatters compute them from the raw units held here.

mod activity;
mod export;
mod health;
mod user;

pub use activity::Activity;
pub use export::DataExport;
pub use health::{HealthBundle, HeartRateSample, HeartRateZones, SleepSample, StressSample};
pub use user::UserStats;
