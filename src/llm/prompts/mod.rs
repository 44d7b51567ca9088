// ABOUTME: Prompt templates for activity feedback, health recommendations, and training plans
// ABOUTME: Deterministic text built fresh from the sample models on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching Prompts
//!
//! Each template embeds the figures a coach needs and ends with an explicit
//! instruction about response length. Numbers are rendered the same way the
//! text summaries render them (km to two decimals, whole minutes, hours to one
//! decimal), and missing optional values appear as `N/A`.
//!
//! The wording doubles as the trigger vocabulary for canned responses: the
//! activity prompt mentions a "workout activity", the health prompt mentions
//! "health", and the plan prompt mentions a "training plan".

use std::fmt::Display;

use crate::formatters::NOT_AVAILABLE;
use crate::models::{Activity, HealthBundle, UserStats};

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| v.to_string())
}

/// Fitness-coach prompt for a single workout
#[must_use]
pub fn activity_prompt(activity: &Activity) -> String {
    format!(
        "As a personal fitness coach, analyze this workout activity and provide brief feedback:\n\
         \n\
         Activity: {name}\n\
         Type: {kind}\n\
         Distance: {km:.2} km\n\
         Duration: {minutes:.0} minutes\n\
         Average Heart Rate: {avg_hr} bpm\n\
         Max Heart Rate: {max_hr} bpm\n\
         Calories: {calories} kcal\n\
         \n\
         Provide concise coaching feedback in 2-3 sentences focusing on:\n\
         1. Performance assessment\n\
         2. One specific recommendation for improvement\n",
        name = activity.activity_name,
        kind = activity.activity_type,
        km = activity.distance_km(),
        minutes = activity.duration_minutes(),
        avg_hr = or_na(activity.average_hr),
        max_hr = or_na(activity.max_hr),
        calories = or_na(activity.calories),
    )
}

/// Health-coach prompt for one day of heart rate, sleep, and stress
#[must_use]
pub fn health_prompt(health: &HealthBundle) -> String {
    format!(
        "As a health coach, analyze these daily health metrics and provide brief recommendations:\n\
         \n\
         Heart Rate:\n\
         - Resting: {resting} bpm\n\
         - Average: {average} bpm\n\
         \n\
         Sleep:\n\
         - Total: {sleep_hours:.1} hours\n\
         - Sleep Score: {score}/100\n\
         \n\
         Stress:\n\
         - Average Level: {stress}\n\
         - Rest Time: {rest} minutes\n\
         \n\
         Provide 2-3 actionable health recommendations based on this data.\n",
        resting = or_na(health.heart_rate.resting_heart_rate),
        average = or_na(health.heart_rate.average_heart_rate),
        sleep_hours = health.sleep.total_sleep_hours(),
        score = or_na(health.sleep.sleep_score),
        stress = or_na(health.stress.average_stress_level),
        rest = health.stress.rest_time,
    )
}

/// Weekly training plan prompt for an athlete and a free-text goal
#[must_use]
pub fn training_plan_prompt(stats: &UserStats, goal: &str) -> String {
    format!(
        "Create a brief weekly training plan for this athlete:\n\
         \n\
         User Profile:\n\
         - Age: {age} years\n\
         - Fitness Age: {fitness_age} years\n\
         - VO2 Max: {vo2_max:?}\n\
         - Total Activities: {total}\n\
         \n\
         Goal: {goal}\n\
         \n\
         Provide a concise 7-day training plan with daily recommendations.\n",
        age = stats.user_age,
        fitness_age = stats.fitness_age,
        vo2_max = stats.vo2_max,
        total = stats.total_activities,
    )
}
