// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, provider identifiers, and text-generation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Fitness data provider identifiers
pub mod providers {
    /// Garmin Connect provider name
    pub const GARMIN: &str = "garmin";
}

/// Defaults for the local text-generation endpoint
pub mod llm {
    /// Default base URL of the local Ollama server
    pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

    /// Default model requested from the local endpoint
    pub const DEFAULT_MODEL: &str = "llama2";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Path of the non-streaming generate endpoint, relative to the base URL
    pub const GENERATE_ENDPOINT: &str = "api/generate";

    /// Path of the model listing endpoint used for health checks
    pub const TAGS_ENDPOINT: &str = "api/tags";
}

/// Sample data provider limits
pub mod limits {
    /// Activities returned when the caller does not pass a limit
    pub const DEFAULT_ACTIVITIES_LIMIT: usize = 10;
}

/// Export defaults
pub mod export {
    /// File written by the data demo when no path is configured
    pub const DEFAULT_EXPORT_PATH: &str = "garmin_data_export.json";
}
