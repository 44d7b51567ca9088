// ABOUTME: Garmin Coach CLI - fetch sample fitness data, get AI coaching, run demo walkthroughs
// ABOUTME: Wires environment configuration, logging, the sample provider, and the AI coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the activity summary
//! garmin-coach fetch-data --data-type activities --limit 5
//!
//! # Print everything and export it to JSON
//! garmin-coach fetch-data --data-type all --export garmin_data_export.json
//!
//! # Coaching feedback (uses Ollama at COACH_LLM_BASE_URL when reachable)
//! garmin-coach coaching --coaching-type plan --goal "Run a sub-25 minute 5K"
//!
//! # Step-by-step walkthroughs
//! garmin-coach example --example-type data
//! garmin-coach example --example-type ai
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use garmin_coach::config::environment::CoachConfig;
use garmin_coach::config::types::LogLevel;
use garmin_coach::logging::LoggingConfig;
use tracing::{debug, info};

use commands::{CoachingType, DataType, DEFAULT_GOAL};

#[derive(Parser)]
#[command(
    name = "garmin-coach",
    version,
    about = "A personal coach for Garmin devices",
    long_about = "Fetch sample Garmin Connect data, print summaries, export JSON, and get coaching feedback from a local LLM with canned fallbacks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve data from Garmin Connect
    FetchData {
        /// Type of data to fetch
        #[arg(short, long, value_enum, default_value_t = DataType::Activities)]
        data_type: DataType,

        /// Maximum number of activities
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write the fetched data as JSON to this file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Get AI coaching feedback
    Coaching {
        /// Type of coaching
        #[arg(short, long, value_enum, default_value_t = CoachingType::Activity)]
        coaching_type: CoachingType,

        /// Training goal for plan coaching
        #[arg(short, long, default_value = DEFAULT_GOAL)]
        goal: String,
    },

    /// Run example walkthroughs
    Example {
        /// Which example to run (data, ai)
        #[arg(short, long, default_value = "data")]
        example_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let config = CoachConfig::from_env()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::FetchData {
            data_type,
            limit,
            export,
        } => {
            info!(%data_type, "Fetching data");
            println!("Fetching {data_type} data from Garmin Connect...");
            commands::fetch::run(&config, data_type, limit, export.as_deref()).await?;
        }
        Command::Coaching {
            coaching_type,
            goal,
        } => {
            info!(%coaching_type, "Requesting coaching");
            println!("Getting {coaching_type} coaching feedback...");
            commands::coaching::run(&config, coaching_type, &goal).await?;
        }
        Command::Example { example_type } => {
            println!("Running {example_type} example...");
            commands::example::run(&config, &example_type).await?;
        }
    }

    Ok(())
}
