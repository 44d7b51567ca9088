// ABOUTME: Fitness activity model with raw distance and duration units
// ABOUTME: Display conversions to kilometers and minutes are computed on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};

/// A single recorded workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Provider-assigned identifier
    pub activity_id: u64,
    /// User-facing activity title (e.g., "Morning Run")
    pub activity_name: String,
    /// Garmin activity type key (e.g., "running", "cycling")
    pub activity_type: String,
    /// Local start time, serialized as `YYYY-MM-DDTHH:MM:SS`
    pub start_time: NaiveDateTime,
    /// Distance in meters
    pub distance: f64,
    /// Elapsed time in seconds
    pub duration: u64,
    /// Average heart rate in BPM
    #[serde(rename = "averageHR", default, skip_serializing_if = "Option::is_none")]
    pub average_hr: Option<u32>,
    /// Maximum heart rate in BPM
    #[serde(rename = "maxHR", default, skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<u32>,
    /// Energy expenditure in kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl Activity {
    /// Distance in kilometers (unrounded)
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance / METERS_PER_KM
    }

    /// Duration in minutes (unrounded)
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration as f64 / SECONDS_PER_MINUTE
    }
}
