// ABOUTME: Pretty JSON export and human-readable summaries of fitness data
// ABOUTME: Pure functions; the only side effect is the optional export file write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output formatting
//!
//! - [`to_json`] serializes any model (or bundle of models) as pretty JSON with
//!   two-space indentation and optionally writes it to a file.
//! - The `format_*` functions render plain-text summaries for terminal output.
//!   Missing optional values render as `N/A`.

mod summary;

pub use summary::{
    format_activity_summary, format_health_summary, format_user_profile, NOT_AVAILABLE,
};

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Serialize `data` as pretty JSON, optionally writing it to `path`
///
/// The file is created or fully overwritten with exactly the returned string.
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if `data` cannot be serialized and
/// `ErrorCode::StorageError` if the file cannot be written.
pub fn to_json<T: Serialize + ?Sized>(data: &T, path: Option<&Path>) -> AppResult<String> {
    let json = serde_json::to_string_pretty(data).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Failed to serialize export: {e}"),
        )
        .with_source(e)
    })?;

    if let Some(path) = path {
        fs::write(path, &json).map_err(|e| {
            AppError::new(
                ErrorCode::StorageError,
                format!("Failed to write {}: {e}", path.display()),
            )
            .with_source(e)
        })?;
        info!(path = %path.display(), bytes = json.len(), "Exported data to JSON");
    } else {
        debug!(bytes = json.len(), "Serialized data to JSON");
    }

    Ok(json)
}
