// ABOUTME: fetch-data command for the garmin-coach CLI
// ABOUTME: Prints activity, health, or profile summaries and optionally exports JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::Local;
use garmin_coach::config::environment::CoachConfig;
use garmin_coach::errors::AppResult;
use garmin_coach::formatters::{
    format_activity_summary, format_health_summary, format_user_profile, to_json,
};
use garmin_coach::models::DataExport;
use garmin_coach::providers::{ActivityQueryParams, FitnessDataProvider};
use serde::Serialize;

use super::{connect, DataType};

/// Fetch and print the selected data
pub async fn run(
    config: &CoachConfig,
    data_type: DataType,
    limit: Option<usize>,
    export: Option<&Path>,
) -> AppResult<()> {
    let provider = connect(config.garmin.credentials()).await?;
    let query = ActivityQueryParams {
        limit,
        ..ActivityQueryParams::default()
    };

    match data_type {
        DataType::Activities => {
            let activities = provider.get_activities(&query).await?;
            println!("{}", format_activity_summary(&activities));
            if let Some(path) = export {
                write_export(&activities, path)?;
            }
        }
        DataType::Health => {
            let health = provider.get_health_bundle(None).await?;
            println!(
                "{}",
                format_health_summary(&health.heart_rate, &health.sleep, &health.stress)
            );
            if let Some(path) = export {
                write_export(&health, path)?;
            }
        }
        DataType::Stats => {
            let stats = provider.get_user_stats().await?;
            println!("{}", format_user_profile(&stats));
            if let Some(path) = export {
                write_export(&stats, path)?;
            }
        }
        DataType::All => {
            let bundle = DataExport {
                activities: provider.get_activities(&query).await?,
                health: provider.get_health_bundle(None).await?,
                user_stats: provider.get_user_stats().await?,
                export_timestamp: Local::now().naive_local(),
            };
            println!("{}", format_activity_summary(&bundle.activities));
            println!(
                "{}",
                format_health_summary(
                    &bundle.health.heart_rate,
                    &bundle.health.sleep,
                    &bundle.health.stress
                )
            );
            println!("{}", format_user_profile(&bundle.user_stats));
            write_export(&bundle, export.unwrap_or(config.export_path.as_path()))?;
        }
    }

    Ok(())
}

fn write_export<T: Serialize>(data: &T, path: &Path) -> AppResult<()> {
    to_json(data, Some(path))?;
    println!("✓ Data exported to {}", path.display());
    Ok(())
}
