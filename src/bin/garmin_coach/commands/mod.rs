// ABOUTME: Command modules for the garmin-coach CLI
// ABOUTME: Shared argument enums for data and coaching selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod coaching;
pub mod example;
pub mod fetch;

use std::fmt::{self, Display};

use clap::ValueEnum;
use garmin_coach::errors::AppResult;
use garmin_coach::providers::{Credentials, FitnessDataProvider, SampleDataProvider};

/// Goal used by the training-plan walkthrough and as the `--goal` default
pub const DEFAULT_GOAL: &str = "Improve 5K running time and build endurance";

/// Data selectable with `fetch-data --data-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataType {
    /// Recent activities
    Activities,
    /// Heart rate, sleep, and stress
    Health,
    /// User profile
    Stats,
    /// Everything, plus a JSON export
    All,
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Activities => "activities",
            Self::Health => "health",
            Self::Stats => "stats",
            Self::All => "all",
        })
    }
}

/// Coaching selectable with `coaching --coaching-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoachingType {
    /// Feedback on the most recent activity
    Activity,
    /// Recommendations from today's health samples
    Health,
    /// Seven-day training plan toward `--goal`
    Plan,
}

impl Display for CoachingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Activity => "activity",
            Self::Health => "health",
            Self::Plan => "plan",
        })
    }
}

/// Sample provider built from configured credentials and authenticated
pub async fn connect(credentials: Credentials) -> AppResult<SampleDataProvider> {
    let mut provider = SampleDataProvider::new(credentials);
    provider.authenticate().await?;
    Ok(provider)
}
