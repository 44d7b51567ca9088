// ABOUTME: Canned coaching responses used when the local LLM cannot answer
// ABOUTME: Keyword-driven selection over the prompt text, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fallback Responses
//!
//! Selection is case-insensitive and ordered:
//!
//! 1. `activity` or `workout`: workout feedback
//! 2. `health` or `sleep`: health recommendations
//! 3. `training plan`: seven-day plan
//! 4. anything else: a one-sentence encouragement

use std::fmt::{self, Display};

use tracing::debug;

const WORKOUT_FEEDBACK: &str = "Great workout! Your heart rate data suggests you maintained a good intensity level. \n\
For improvement, consider adding interval training to boost your cardiovascular fitness. \n\
Keep monitoring your recovery between sessions.";

const HEALTH_RECOMMENDATIONS: &str = "Your health metrics look good overall. Consider these recommendations:\n\
1. Aim for 7-9 hours of quality sleep to optimize recovery\n\
2. Practice stress management techniques like meditation or deep breathing\n\
3. Monitor your resting heart rate trends as an indicator of overall fitness";

const TRAINING_PLAN: &str = "7-Day Training Plan:\n\
Day 1: Easy run/walk 30 min (recovery pace)\n\
Day 2: Strength training (upper body focus)\n\
Day 3: Interval training 40 min\n\
Day 4: Rest or light yoga\n\
Day 5: Tempo run 45 min\n\
Day 6: Strength training (lower body focus)\n\
Day 7: Long slow distance 60 min\n\
\n\
Remember to listen to your body and adjust intensity as needed.";

const ENCOURAGEMENT: &str =
    "Keep up the good work with your training! Stay consistent and focus on gradual improvement.";

/// One of the four canned responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CannedResponse {
    /// Feedback on a single workout
    WorkoutFeedback,
    /// Sleep, stress, and resting heart rate advice
    HealthRecommendations,
    /// Generic seven-day plan
    TrainingPlan,
    /// Catch-all encouragement
    Encouragement,
}

impl CannedResponse {
    /// Pick the canned response whose trigger words appear in `prompt`
    #[must_use]
    pub fn select(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        let selected = if lowered.contains("activity") || lowered.contains("workout") {
            Self::WorkoutFeedback
        } else if lowered.contains("health") || lowered.contains("sleep") {
            Self::HealthRecommendations
        } else if lowered.contains("training plan") {
            Self::TrainingPlan
        } else {
            Self::Encouragement
        };
        debug!(response = ?selected, "Selected canned response");
        selected
    }

    /// Response text
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::WorkoutFeedback => WORKOUT_FEEDBACK,
            Self::HealthRecommendations => HEALTH_RECOMMENDATIONS,
            Self::TrainingPlan => TRAINING_PLAN,
            Self::Encouragement => ENCOURAGEMENT,
        }
    }
}

impl Display for CannedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
