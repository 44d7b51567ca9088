// ABOUTME: Daily health samples for heart rate, sleep, and stress
// ABOUTME: Groups the three samples into a HealthBundle for summaries and prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::units::SECONDS_PER_HOUR;

/// Minutes spent in each of the five heart rate zones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
    /// Warm-up zone minutes
    pub zone1: u32,
    /// Easy zone minutes
    pub zone2: u32,
    /// Aerobic zone minutes
    pub zone3: u32,
    /// Threshold zone minutes
    pub zone4: u32,
    /// Maximum effort zone minutes
    pub zone5: u32,
}

impl HeartRateZones {
    /// Total minutes across all zones
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.zone1 + self.zone2 + self.zone3 + self.zone4 + self.zone5
    }
}

/// Heart rate summary for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateSample {
    /// Calendar day the sample covers
    pub date: NaiveDate,
    /// Resting heart rate in BPM
    #[serde(default)]
    pub resting_heart_rate: Option<u32>,
    /// Highest heart rate of the day in BPM
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    /// Mean heart rate of the day in BPM
    #[serde(default)]
    pub average_heart_rate: Option<u32>,
    /// Time-in-zone distribution
    #[serde(default)]
    pub heart_rate_zones: HeartRateZones,
}

/// Sleep summary for one night, durations in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSample {
    /// Calendar day the night started on
    pub date: NaiveDate,
    /// Total time asleep
    #[serde(default)]
    pub total_sleep_time: u64,
    /// Deep sleep
    #[serde(default)]
    pub deep_sleep: u64,
    /// Light sleep
    #[serde(default)]
    pub light_sleep: u64,
    /// REM sleep
    #[serde(default)]
    pub rem_sleep: u64,
    /// Time awake after sleep onset
    #[serde(default)]
    pub awake_time: u64,
    /// Garmin sleep score (0-100)
    #[serde(default)]
    pub sleep_score: Option<u32>,
}

impl SleepSample {
    /// Total sleep in hours (unrounded)
    #[must_use]
    pub fn total_sleep_hours(&self) -> f64 {
        seconds_to_hours(self.total_sleep_time)
    }

    /// Deep sleep in hours (unrounded)
    #[must_use]
    pub fn deep_sleep_hours(&self) -> f64 {
        seconds_to_hours(self.deep_sleep)
    }

    /// Light sleep in hours (unrounded)
    #[must_use]
    pub fn light_sleep_hours(&self) -> f64 {
        seconds_to_hours(self.light_sleep)
    }

    /// REM sleep in hours (unrounded)
    #[must_use]
    pub fn rem_sleep_hours(&self) -> f64 {
        seconds_to_hours(self.rem_sleep)
    }
}

fn seconds_to_hours(seconds: u64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}

/// Stress summary for one day, times in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressSample {
    /// Calendar day the sample covers
    pub date: NaiveDate,
    /// Mean stress level (0-100)
    #[serde(default)]
    pub average_stress_level: Option<u32>,
    /// Peak stress level (0-100)
    #[serde(default)]
    pub max_stress_level: Option<u32>,
    /// Minutes classified as rest
    #[serde(default)]
    pub rest_time: u64,
    /// Minutes classified as activity
    #[serde(default)]
    pub activity_time: u64,
    /// Minutes at low stress
    #[serde(default)]
    pub low_stress_time: u64,
    /// Minutes at medium stress
    #[serde(default)]
    pub medium_stress_time: u64,
    /// Minutes at high stress
    #[serde(default)]
    pub high_stress_time: u64,
}

/// Heart rate, sleep, and stress grouped for one reporting day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBundle {
    /// Heart rate for the reporting day
    pub heart_rate: HeartRateSample,
    /// Sleep for the preceding night
    pub sleep: SleepSample,
    /// Stress for the reporting day
    pub stress: StressSample,
}
