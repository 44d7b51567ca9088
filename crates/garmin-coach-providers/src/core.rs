// ABOUTME: Core provider trait and request types for fitness data access
// ABOUTME: Defines FitnessDataProvider, ActivityQueryParams, and Credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Interface
//!
//! `FitnessDataProvider` is the contract every data source implements. All
//! data-retrieval operations require a prior successful
//! [`FitnessDataProvider::authenticate`] call and fail with
//! `ErrorCode::AuthRequired` otherwise.
//!
//! Dates are naive local calendar days. When a caller passes `None`, the
//! provider picks the day itself (today for heart rate and stress, yesterday
//! for sleep).

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{
    Activity, HealthBundle, HeartRateSample, SleepSample, StressSample, UserStats,
};

/// Account credentials handed to a provider at construction time
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account email
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl Credentials {
    /// Build credentials from optional email and password
    #[must_use]
    pub const fn new(email: Option<String>, password: Option<String>) -> Self {
        Self { email, password }
    }

    /// Whether both email and password were supplied
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}

// Keep the password out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Query parameters for fetching activities
///
/// Date bounds are accepted for interface compatibility with a real Garmin
/// client. The sample provider ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQueryParams {
    /// Earliest start date to include
    pub start_date: Option<NaiveDate>,
    /// Latest start date to include
    pub end_date: Option<NaiveDate>,
    /// Maximum number of activities to return (provider default when `None`)
    pub limit: Option<usize>,
}

impl ActivityQueryParams {
    /// Query with only a result limit
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            start_date: None,
            end_date: None,
            limit: Some(limit),
        }
    }

    /// Query bounded by start and end dates
    #[must_use]
    pub const fn with_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            limit: None,
        }
    }
}

/// Fitness data provider interface
///
/// Implementations must be `Send + Sync` so a provider can be moved into async
/// tasks. Authentication state lives on the provider value itself.
#[async_trait]
pub trait FitnessDataProvider: Send + Sync {
    /// Provider name (e.g., "garmin")
    fn name(&self) -> &'static str;

    /// Establish a session with the data source
    ///
    /// # Errors
    ///
    /// Returns an error if the data source rejects the session.
    async fn authenticate(&mut self) -> AppResult<bool>;

    /// Whether `authenticate()` has succeeded on this value
    fn is_authenticated(&self) -> bool;

    /// Recent activities, most recent first, truncated to the query limit
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_activities(&self, params: &ActivityQueryParams) -> AppResult<Vec<Activity>>;

    /// Heart rate summary for a day (today when `None`)
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_heart_rate_data(&self, date: Option<NaiveDate>) -> AppResult<HeartRateSample>;

    /// Sleep summary for a night (yesterday when `None`)
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_sleep_data(&self, date: Option<NaiveDate>) -> AppResult<SleepSample>;

    /// Stress summary for a day (today when `None`)
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_stress_data(&self, date: Option<NaiveDate>) -> AppResult<StressSample>;

    /// User profile and lifetime totals
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_user_stats(&self) -> AppResult<UserStats>;

    /// Heart rate and stress for `date`, sleep for the night before it
    ///
    /// With `None`, each sample uses its own default day, which yields the
    /// same pairing (today, last night).
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::AuthRequired` before `authenticate()`.
    async fn get_health_bundle(&self, date: Option<NaiveDate>) -> AppResult<HealthBundle> {
        let sleep_date = date.and_then(|day| day.pred_opt());
        Ok(HealthBundle {
            heart_rate: self.get_heart_rate_data(date).await?,
            sleep: self.get_sleep_data(sleep_date).await?,
            stress: self.get_stress_data(date).await?,
        })
    }
}
