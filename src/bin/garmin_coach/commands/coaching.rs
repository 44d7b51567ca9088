// ABOUTME: coaching command for the garmin-coach CLI
// ABOUTME: Activity feedback, health recommendations, or a training plan from the AI coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_coach::coach::AiCoach;
use garmin_coach::config::environment::CoachConfig;
use garmin_coach::errors::AppResult;
use garmin_coach::formatters::format_activity_summary;
use garmin_coach::providers::{ActivityQueryParams, FitnessDataProvider};
use tracing::{info, warn};

use super::{connect, CoachingType};
use crate::helpers::display::display_coach_response;

/// Print one piece of coaching for the sample data
pub async fn run(config: &CoachConfig, coaching_type: CoachingType, goal: &str) -> AppResult<()> {
    let provider = connect(config.garmin.credentials()).await?;
    let coach = AiCoach::from_config(&config.llm)?;
    info!(strategy = %coach.strategy().describe(), "AI coach ready");

    match coaching_type {
        CoachingType::Activity => {
            let activities = provider
                .get_activities(&ActivityQueryParams::with_limit(1))
                .await?;
            println!("{}", format_activity_summary(&activities));
            let Some(activity) = activities.first() else {
                warn!("No activities available for coaching");
                return Ok(());
            };
            let feedback = coach.analyze_activity(activity).await;
            display_coach_response("AI Coach Feedback", &feedback, coach.strategy());
        }
        CoachingType::Health => {
            let health = provider.get_health_bundle(None).await?;
            let recommendations = coach.analyze_health_metrics(&health).await;
            display_coach_response(
                "AI Coach Health Recommendations",
                &recommendations,
                coach.strategy(),
            );
        }
        CoachingType::Plan => {
            let stats = provider.get_user_stats().await?;
            println!("Goal: {goal}");
            println!();
            let plan = coach.create_training_plan(&stats, goal).await;
            display_coach_response("AI Coach Training Plan", &plan, coach.strategy());
        }
    }

    Ok(())
}
