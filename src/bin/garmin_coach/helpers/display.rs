// ABOUTME: Output formatting helpers for the garmin-coach CLI
// ABOUTME: Banners, step headings, and coaching response rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_coach::coach::{CoachResponse, ResponderStrategy, ResponseSource};

const BANNER_WIDTH: usize = 60;

/// Title framed by `=` rules
pub fn display_banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
}

/// Section heading underlined with `-`
pub fn display_section(title: &str) {
    println!("{title}");
    println!("{}", "-".repeat(BANNER_WIDTH));
}

/// Completed step marker followed by a blank line
pub fn display_done(message: &str) {
    println!("✓ {message}");
    println!();
}

/// Coaching text under a label, noting where the text came from
pub fn display_coach_response(
    label: &str,
    response: &CoachResponse,
    strategy: &ResponderStrategy,
) {
    println!("{label}:");
    println!("{response}");
    println!("  ({})", source_note(&response.source, strategy));
    println!();
}

fn source_note(source: &ResponseSource, strategy: &ResponderStrategy) -> String {
    match (source, strategy) {
        (ResponseSource::External { model }, _) => format!("generated by {model}"),
        (ResponseSource::Fallback(_), ResponderStrategy::Local(_)) => {
            "canned response: AI endpoint unavailable".to_owned()
        }
        (ResponseSource::Fallback(_), ResponderStrategy::CannedOnly { requested }) => {
            format!("canned response: no client for {requested}")
        }
    }
}

/// Closing hints for the AI walkthrough
pub fn display_ai_next_steps(ai_available: bool) {
    println!("Next Steps:");
    if ai_available {
        println!("1. Try other models with COACH_LLM_MODEL");
    } else {
        println!("1. Install Ollama locally for real AI responses:");
        println!("   https://ollama.ai");
    }
    println!("2. Set up actual Garmin Connect credentials");
    println!("3. Customize the AI prompts for your specific needs");
    println!();
}
