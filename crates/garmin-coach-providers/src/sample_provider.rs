// ABOUTME: Placeholder Garmin Connect provider returning fixed sample records
// ABOUTME: Enforces the authenticate() guard before any data is produced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sample Data Provider
//!
//! Stands in for a Garmin Connect client. `authenticate()` performs no
//! credential check; it only flips the authentication flag on this value.
//! Every retrieval method then returns the same hardcoded records, with the
//! requested (or defaulted) date stamped onto the daily samples.

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::constants::limits::DEFAULT_ACTIVITIES_LIMIT;
use crate::constants::providers::GARMIN;
use crate::core::{ActivityQueryParams, Credentials, FitnessDataProvider};
use crate::errors::{AppError, AppResult, ProviderError};
use crate::models::{
    Activity, HeartRateSample, HeartRateZones, SleepSample, StressSample, UserStats,
};

/// Garmin Connect stand-in backed by fixed sample data
#[derive(Debug, Clone, Default)]
pub struct SampleDataProvider {
    credentials: Credentials,
    is_authenticated: bool,
}

impl SampleDataProvider {
    /// Create an unauthenticated provider holding the given credentials
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            is_authenticated: false,
        }
    }

    /// Credentials supplied at construction
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn ensure_authenticated(&self) -> AppResult<()> {
        if self.is_authenticated {
            Ok(())
        } else {
            Err(ProviderError::not_authenticated(GARMIN).into())
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn sample_start_time(hour: u32) -> AppResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|day| day.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| AppError::internal(format!("invalid sample start hour {hour}")))
}

fn sample_activities() -> AppResult<Vec<Activity>> {
    Ok(vec![
        Activity {
            activity_id: 1,
            activity_name: "Morning Run".to_owned(),
            activity_type: "running".to_owned(),
            start_time: sample_start_time(7)?,
            distance: 5000.0,
            duration: 1800,
            average_hr: Some(145),
            max_hr: Some(165),
            calories: Some(350),
        },
        Activity {
            activity_id: 2,
            activity_name: "Evening Cycle".to_owned(),
            activity_type: "cycling".to_owned(),
            start_time: sample_start_time(18)?,
            distance: 15000.0,
            duration: 3600,
            average_hr: Some(130),
            max_hr: Some(155),
            calories: Some(450),
        },
    ])
}

#[async_trait]
impl FitnessDataProvider for SampleDataProvider {
    fn name(&self) -> &'static str {
        GARMIN
    }

    async fn authenticate(&mut self) -> AppResult<bool> {
        if !self.credentials.is_complete() {
            debug!("No Garmin credentials configured; continuing with sample data");
        }
        warn!("Authentication placeholder: real Garmin Connect sign-in is not implemented");
        self.is_authenticated = true;
        info!(provider = GARMIN, "Sample data provider authenticated");
        Ok(true)
    }

    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    async fn get_activities(&self, params: &ActivityQueryParams) -> AppResult<Vec<Activity>> {
        self.ensure_authenticated()?;
        let limit = params.limit.unwrap_or(DEFAULT_ACTIVITIES_LIMIT);
        debug!(
            limit,
            start_date = ?params.start_date,
            end_date = ?params.end_date,
            "Fetching sample activities"
        );

        let mut activities = sample_activities()?;
        activities.truncate(limit);
        Ok(activities)
    }

    async fn get_heart_rate_data(&self, date: Option<NaiveDate>) -> AppResult<HeartRateSample> {
        self.ensure_authenticated()?;
        let date = date.unwrap_or_else(today);
        debug!(%date, "Fetching sample heart rate data");

        Ok(HeartRateSample {
            date,
            resting_heart_rate: Some(55),
            max_heart_rate: Some(165),
            average_heart_rate: Some(70),
            heart_rate_zones: HeartRateZones {
                zone1: 120,
                zone2: 45,
                zone3: 15,
                zone4: 5,
                zone5: 1,
            },
        })
    }

    async fn get_sleep_data(&self, date: Option<NaiveDate>) -> AppResult<SleepSample> {
        self.ensure_authenticated()?;
        let date = date.unwrap_or_else(|| {
            let now = today();
            now.checked_sub_days(Days::new(1)).unwrap_or(now)
        });
        debug!(%date, "Fetching sample sleep data");

        Ok(SleepSample {
            date,
            total_sleep_time: 28_800,
            deep_sleep: 7_200,
            light_sleep: 18_000,
            rem_sleep: 3_600,
            awake_time: 600,
            sleep_score: Some(85),
        })
    }

    async fn get_stress_data(&self, date: Option<NaiveDate>) -> AppResult<StressSample> {
        self.ensure_authenticated()?;
        let date = date.unwrap_or_else(today);
        debug!(%date, "Fetching sample stress data");

        Ok(StressSample {
            date,
            average_stress_level: Some(35),
            max_stress_level: Some(65),
            rest_time: 180,
            activity_time: 60,
            low_stress_time: 480,
            medium_stress_time: 120,
            high_stress_time: 30,
        })
    }

    async fn get_user_stats(&self) -> AppResult<UserStats> {
        self.ensure_authenticated()?;
        debug!("Fetching sample user stats");

        Ok(UserStats {
            user_name: "Garmin User".to_owned(),
            user_age: 30,
            user_weight: 70.0,
            user_height: 175.0,
            vo2_max: 52.0,
            fitness_age: 25,
            total_activities: 150,
            total_distance: 750_000.0,
            total_duration: 270_000,
        })
    }
}
