// ABOUTME: Athlete profile and lifetime totals
// ABOUTME: Used by the profile formatter and the training-plan prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// User profile with lifetime activity totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Display name
    pub user_name: String,
    /// Age in years
    pub user_age: u32,
    /// Body weight in kilograms
    pub user_weight: f64,
    /// Height in centimeters
    pub user_height: f64,
    /// Estimated VO2 max (ml/kg/min)
    pub vo2_max: f64,
    /// Fitness age derived from VO2 max
    pub fitness_age: u32,
    /// Number of recorded activities
    pub total_activities: u32,
    /// Lifetime distance in meters
    pub total_distance: f64,
    /// Lifetime moving time in seconds
    pub total_duration: u64,
}
