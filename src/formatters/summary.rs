// ABOUTME: Plain-text summaries for activities, daily health samples, and the user profile
// ABOUTME: Distances in km to two decimals, durations in whole minutes, sleep in hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Write};

use crate::models::{Activity, HeartRateSample, SleepSample, StressSample, UserStats};

/// Placeholder printed for missing optional values
pub const NOT_AVAILABLE: &str = "N/A";

const RULE_WIDTH: usize = 50;
const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

struct OrNa<T>(Option<T>);

impl<T: Display> Display for OrNa<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

fn header(title: &str) -> String {
    format!("{title}\n{}\n\n", "=".repeat(RULE_WIDTH))
}

/// Numbered activity summary, or `"No activities found."` for an empty slice
#[must_use]
pub fn format_activity_summary(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "No activities found.".to_owned();
    }

    let mut summary = header("Activity Summary");
    for (index, activity) in activities.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(
            summary,
            "Activity {number}: {name}\n  \
             Type: {kind}\n  \
             Date: {date}\n  \
             Distance: {km:.2} km\n  \
             Duration: {minutes:.0} minutes\n  \
             Avg HR: {hr} bpm\n  \
             Calories: {calories} kcal\n\n",
            number = index + 1,
            name = activity.activity_name,
            kind = activity.activity_type,
            date = activity.start_time.format(START_TIME_FORMAT),
            km = activity.distance_km(),
            minutes = activity.duration_minutes(),
            hr = OrNa(activity.average_hr),
            calories = OrNa(activity.calories),
        );
    }
    summary
}

/// Heart rate, sleep, and stress sections for one reporting day
#[must_use]
pub fn format_health_summary(
    heart_rate: &HeartRateSample,
    sleep: &SleepSample,
    stress: &StressSample,
) -> String {
    let mut summary = header("Health Summary");
    let _ = write!(
        summary,
        "Heart Rate Data ({hr_date})\n  \
         Resting HR: {resting} bpm\n  \
         Average HR: {average} bpm\n  \
         Max HR: {max} bpm\n\n\
         Sleep Data ({sleep_date})\n  \
         Total Sleep: {total:.1} hours\n  \
         Deep Sleep: {deep:.1} hours\n  \
         Light Sleep: {light:.1} hours\n  \
         REM Sleep: {rem:.1} hours\n  \
         Sleep Score: {score}/100\n\n\
         Stress Data ({stress_date})\n  \
         Average Stress: {avg_stress}\n  \
         Max Stress: {max_stress}\n  \
         Rest Time: {rest} minutes\n",
        hr_date = heart_rate.date,
        resting = OrNa(heart_rate.resting_heart_rate),
        average = OrNa(heart_rate.average_heart_rate),
        max = OrNa(heart_rate.max_heart_rate),
        sleep_date = sleep.date,
        total = sleep.total_sleep_hours(),
        deep = sleep.deep_sleep_hours(),
        light = sleep.light_sleep_hours(),
        rem = sleep.rem_sleep_hours(),
        score = OrNa(sleep.sleep_score),
        stress_date = stress.date,
        avg_stress = OrNa(stress.average_stress_level),
        max_stress = OrNa(stress.max_stress_level),
        rest = stress.rest_time,
    );
    summary
}

/// "User Profile" block printed by the data demo
#[must_use]
pub fn format_user_profile(stats: &UserStats) -> String {
    format!(
        "User Profile:\n  \
         Name: {}\n  \
         Age: {} years\n  \
         Weight: {:?} kg\n  \
         Height: {:?} cm\n  \
         VO2 Max: {:?}\n  \
         Fitness Age: {} years\n  \
         Total Activities: {}\n",
        stats.user_name,
        stats.user_age,
        stats.user_weight,
        stats.user_height,
        stats.vo2_max,
        stats.fitness_age,
        stats.total_activities,
    )
}
