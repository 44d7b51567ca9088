// ABOUTME: Integration tests for text summaries and JSON export
// ABOUTME: Verifies unit conversions, N/A placeholders, and exact export file contents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{evening_cycle, morning_run, sample_health, sample_user_stats};
use garmin_coach::errors::ErrorCode;
use garmin_coach::formatters::{
    format_activity_summary, format_health_summary, format_user_profile, to_json,
};
use garmin_coach::models::{Activity, DataExport};
use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// Activity summary
// ============================================================================

#[test]
fn test_empty_activity_list_message() {
    assert_eq!(format_activity_summary(&[]), "No activities found.");
}

#[test]
fn test_activity_summary_layout() {
    let summary = format_activity_summary(&[morning_run(), evening_cycle()]);

    let expected_first = "Activity Summary\n\
        ==================================================\n\n\
        Activity 1: Morning Run\n  \
        Type: running\n  \
        Date: 2024-01-01T07:00:00\n  \
        Distance: 5.00 km\n  \
        Duration: 30 minutes\n  \
        Avg HR: 145 bpm\n  \
        Calories: 350 kcal\n\n";
    assert!(summary.starts_with(expected_first), "got:\n{summary}");
    assert!(summary.contains("Activity 2: Evening Cycle\n"));
    assert!(summary.contains("  Distance: 15.00 km\n"));
    assert!(summary.contains("  Duration: 60 minutes\n"));
    assert!(summary.ends_with("  Calories: 450 kcal\n\n"));
}

#[test]
fn test_activity_summary_rounds_units() {
    let activity = Activity {
        distance: 4321.0,
        duration: 1_547,
        ..morning_run()
    };
    let summary = format_activity_summary(&[activity]);

    assert!(summary.contains("Distance: 4.32 km"));
    assert!(summary.contains("Duration: 26 minutes"), "got:\n{summary}");

    // Ties round to the even minute
    for (seconds, expected) in [(90, "2"), (150, "2"), (210, "4")] {
        let activity = Activity {
            duration: seconds,
            ..morning_run()
        };
        let summary = format_activity_summary(&[activity]);
        assert!(
            summary.contains(&format!("Duration: {expected} minutes\n")),
            "{seconds}s, got:\n{summary}"
        );
    }
}

#[test]
fn test_activity_summary_missing_values_render_na() {
    let activity = Activity {
        average_hr: None,
        calories: None,
        ..morning_run()
    };
    let summary = format_activity_summary(&[activity]);

    assert!(summary.contains("Avg HR: N/A bpm"));
    assert!(summary.contains("Calories: N/A kcal"));
}

// ============================================================================
// Health summary and profile
// ============================================================================

#[test]
fn test_health_summary_text() {
    let health = sample_health();
    let summary = format_health_summary(&health.heart_rate, &health.sleep, &health.stress);

    let expected = "Health Summary\n\
        ==================================================\n\n\
        Heart Rate Data (2024-01-01)\n  \
        Resting HR: 55 bpm\n  \
        Average HR: 70 bpm\n  \
        Max HR: 165 bpm\n\n\
        Sleep Data (2023-12-31)\n  \
        Total Sleep: 8.0 hours\n  \
        Deep Sleep: 2.0 hours\n  \
        Light Sleep: 5.0 hours\n  \
        REM Sleep: 1.0 hours\n  \
        Sleep Score: 85/100\n\n\
        Stress Data (2024-01-01)\n  \
        Average Stress: 35\n  \
        Max Stress: 65\n  \
        Rest Time: 180 minutes\n";
    assert_eq!(summary, expected);
}

#[test]
fn test_health_summary_missing_scores() {
    let mut health = sample_health();
    health.heart_rate.resting_heart_rate = None;
    health.sleep.sleep_score = None;
    health.stress.max_stress_level = None;

    let summary = format_health_summary(&health.heart_rate, &health.sleep, &health.stress);
    assert!(summary.contains("Resting HR: N/A bpm"));
    assert!(summary.contains("Sleep Score: N/A/100"));
    assert!(summary.contains("Max Stress: N/A\n"));
}

#[test]
fn test_user_profile_text() {
    let profile = format_user_profile(&sample_user_stats());

    assert_eq!(
        profile,
        "User Profile:\n  \
         Name: Garmin User\n  \
         Age: 30 years\n  \
         Weight: 70.0 kg\n  \
         Height: 175.0 cm\n  \
         VO2 Max: 52.0\n  \
         Fitness Age: 25 years\n  \
         Total Activities: 150\n"
    );
}

// ============================================================================
// JSON export
// ============================================================================

#[test]
fn test_to_json_without_path_only_returns_string() {
    let json = to_json(&[morning_run()], None).expect("serializes");

    let parsed: Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(parsed[0]["activityName"], "Morning Run");
    // Two-space pretty printing
    assert!(json.starts_with("[\n  {\n    \"activityId\": 1,"));
}

#[test]
fn test_to_json_writes_exact_contents() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("export.json");

    let export = DataExport {
        activities: vec![morning_run(), evening_cycle()],
        health: sample_health(),
        user_stats: sample_user_stats(),
        export_timestamp: common::sample_day().and_hms_opt(12, 0, 0).unwrap(),
    };
    let json = to_json(&export, Some(&path)).expect("export succeeds");

    let on_disk = fs::read_to_string(&path).expect("file exists");
    assert_eq!(on_disk, json);

    let parsed: Value = serde_json::from_str(&on_disk).expect("valid JSON");
    assert_eq!(parsed["activities"].as_array().map(Vec::len), Some(2));
    assert_eq!(parsed["health"]["sleep"]["sleepScore"], 85);
    assert_eq!(parsed["user_stats"]["userName"], "Garmin User");
    assert_eq!(parsed["export_timestamp"], "2024-01-01T12:00:00");
}

#[test]
fn test_to_json_overwrites_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("export.json");
    fs::write(&path, "stale contents that are much longer than the new export").unwrap();

    let json = to_json(&sample_user_stats(), Some(&path)).expect("export succeeds");

    assert_eq!(fs::read_to_string(&path).unwrap(), json);
}

#[test]
fn test_to_json_unwritable_path_is_storage_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing").join("export.json");

    let error = to_json(&sample_user_stats(), Some(&path)).expect_err("write must fail");
    assert_eq!(error.code, ErrorCode::StorageError);
}
