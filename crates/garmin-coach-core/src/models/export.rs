// ABOUTME: Combined export bundle written by the data demo
// ABOUTME: Activities, health samples, and user stats stamped with the export time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Activity, HealthBundle, UserStats};

/// Everything the sample provider can return, gathered into one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataExport {
    /// Recent activities
    pub activities: Vec<Activity>,
    /// Health samples for the reporting day
    pub health: HealthBundle,
    /// User profile
    pub user_stats: UserStats,
    /// Local time the export was assembled
    pub export_timestamp: NaiveDateTime,
}
