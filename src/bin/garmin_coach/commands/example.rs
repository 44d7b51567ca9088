// ABOUTME: Step-by-step walkthroughs for data retrieval and AI coaching
// ABOUTME: The data walkthrough ends by exporting everything to a JSON file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use garmin_coach::coach::AiCoach;
use garmin_coach::config::environment::CoachConfig;
use garmin_coach::errors::AppResult;
use garmin_coach::formatters::{
    format_activity_summary, format_health_summary, format_user_profile, to_json,
};
use garmin_coach::models::{DataExport, HealthBundle};
use garmin_coach::providers::{ActivityQueryParams, FitnessDataProvider, SampleDataProvider};

use super::{connect, DEFAULT_GOAL};
use crate::helpers::display::{
    display_ai_next_steps, display_banner, display_coach_response, display_done, display_section,
};

/// Run the named walkthrough; unknown names print a hint and succeed
pub async fn run(config: &CoachConfig, example_type: &str) -> AppResult<()> {
    match example_type {
        "data" => run_data_example(config).await,
        "ai" => run_ai_example(config).await,
        _ => {
            eprintln!("Unknown example type. Use 'data' or 'ai'");
            Ok(())
        }
    }
}

async fn run_data_example(config: &CoachConfig) -> AppResult<()> {
    display_banner("Garmin Coach - Data Retrieval Example");

    println!("Step 1: Initializing Garmin Connect Client...");
    let mut provider = SampleDataProvider::new(config.garmin.credentials());
    display_done("Client initialized");

    println!("Step 2: Authenticating with Garmin Connect...");
    provider.authenticate().await?;
    display_done("Authentication successful");

    println!("Step 3: Retrieving recent activities...");
    let activities = provider
        .get_activities(&ActivityQueryParams::with_limit(5))
        .await?;
    display_done(&format!("Retrieved {} activities", activities.len()));
    println!("{}", format_activity_summary(&activities));

    println!("Step 4: Retrieving health metrics...");
    let health = provider.get_health_bundle(None).await?;
    display_done("Health metrics retrieved");
    println!(
        "{}",
        format_health_summary(&health.heart_rate, &health.sleep, &health.stress)
    );

    println!("Step 5: Retrieving user statistics...");
    let user_stats = provider.get_user_stats().await?;
    display_done("User statistics retrieved");
    println!("{}", format_user_profile(&user_stats));

    println!("Step 6: Exporting data to JSON...");
    let export = DataExport {
        activities,
        health,
        user_stats,
        export_timestamp: Local::now().naive_local(),
    };
    to_json(&export, Some(config.export_path.as_path()))?;
    display_done(&format!("Data exported to {}", config.export_path.display()));

    display_banner("Example completed successfully!");
    Ok(())
}

async fn run_ai_example(config: &CoachConfig) -> AppResult<()> {
    display_banner("Garmin Coach - AI Coaching Example");

    println!("Initializing Garmin Connect Client...");
    let provider = connect(config.garmin.credentials()).await?;
    display_done("Connected to Garmin");

    println!("Initializing AI Coach...");
    let coach = AiCoach::from_config(&config.llm)?;
    let ai_available = coach.health_check().await;
    println!("✓ AI Coach ready ({})", coach.strategy().describe());
    if ai_available {
        println!("  (AI endpoint reachable: responses are generated)");
    } else {
        println!("  (AI endpoint unavailable: using canned responses)");
    }
    println!();

    display_section("Step 1: Analyzing Recent Activity");
    let activities = provider
        .get_activities(&ActivityQueryParams::with_limit(1))
        .await?;
    if let Some(activity) = activities.first() {
        println!("Activity: {}", activity.activity_name);
        println!("Type: {}", activity.activity_type);
        println!("Distance: {:.2} km", activity.distance_km());
        println!("Duration: {:.0} minutes", activity.duration_minutes());
        println!();

        let feedback = coach.analyze_activity(activity).await;
        display_coach_response("AI Coach Feedback", &feedback, coach.strategy());
    }

    display_section("Step 2: Analyzing Health Metrics");
    let health = HealthBundle {
        heart_rate: provider.get_heart_rate_data(None).await?,
        sleep: provider.get_sleep_data(None).await?,
        stress: provider.get_stress_data(None).await?,
    };
    let recommendations = coach.analyze_health_metrics(&health).await;
    display_coach_response("AI Coach Health Recommendations", &recommendations, coach.strategy());

    display_section("Step 3: Creating Personalized Training Plan");
    let user_stats = provider.get_user_stats().await?;
    println!("Goal: {DEFAULT_GOAL}");
    println!();
    let plan = coach.create_training_plan(&user_stats, DEFAULT_GOAL).await;
    display_coach_response("AI Coach Training Plan", &plan, coach.strategy());

    display_banner("AI Coaching Example Completed!");
    display_ai_next_steps(ai_available);
    Ok(())
}
