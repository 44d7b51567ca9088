// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, sample fixtures, and an in-process mock of the Ollama generate API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `garmin_coach`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use garmin_coach::config::{LlmConfig, LlmProviderType};
use garmin_coach::models::{
    Activity, HealthBundle, HeartRateSample, HeartRateZones, SleepSample, StressSample, UserStats,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn morning_run() -> Activity {
    Activity {
        activity_id: 1,
        activity_name: "Morning Run".to_owned(),
        activity_type: "running".to_owned(),
        start_time: sample_day().and_hms_opt(7, 0, 0).unwrap(),
        distance: 5000.0,
        duration: 1800,
        average_hr: Some(145),
        max_hr: Some(165),
        calories: Some(350),
    }
}

pub fn evening_cycle() -> Activity {
    Activity {
        activity_id: 2,
        activity_name: "Evening Cycle".to_owned(),
        activity_type: "cycling".to_owned(),
        start_time: sample_day().and_hms_opt(18, 0, 0).unwrap(),
        distance: 15000.0,
        duration: 3600,
        average_hr: Some(130),
        max_hr: Some(155),
        calories: Some(450),
    }
}

pub fn sample_health() -> HealthBundle {
    HealthBundle {
        heart_rate: HeartRateSample {
            date: sample_day(),
            resting_heart_rate: Some(55),
            max_heart_rate: Some(165),
            average_heart_rate: Some(70),
            heart_rate_zones: HeartRateZones {
                zone1: 120,
                zone2: 45,
                zone3: 15,
                zone4: 5,
                zone5: 1,
            },
        },
        sleep: SleepSample {
            date: sample_day().pred_opt().unwrap(),
            total_sleep_time: 28_800,
            deep_sleep: 7_200,
            light_sleep: 18_000,
            rem_sleep: 3_600,
            awake_time: 600,
            sleep_score: Some(85),
        },
        stress: StressSample {
            date: sample_day(),
            average_stress_level: Some(35),
            max_stress_level: Some(65),
            rest_time: 180,
            activity_time: 60,
            low_stress_time: 480,
            medium_stress_time: 120,
            high_stress_time: 30,
        },
    }
}

pub fn sample_user_stats() -> UserStats {
    UserStats {
        user_name: "Garmin User".to_owned(),
        user_age: 30,
        user_weight: 70.0,
        user_height: 175.0,
        vo2_max: 52.0,
        fitness_age: 25,
        total_activities: 150,
        total_distance: 750_000.0,
        total_duration: 270_000,
    }
}

// ============================================================================
// Mock Ollama server
// ============================================================================

/// How the mock answers `POST /api/generate`
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// 200 with `{"response": <text>, "model": <requested model>}`
    Reply(String),
    /// Given status with a plain-text body
    Status(u16),
    /// 200 with an arbitrary JSON body
    Body(Value),
    /// Sleep before replying
    Delay(Duration),
}

/// Shared state recorded by the mock
#[derive(Debug)]
pub struct MockState {
    pub behavior: MockBehavior,
    pub hits: AtomicUsize,
    pub last_body: Mutex<Option<Value>>,
}

impl MockState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

/// Running mock server
pub struct MockOllama {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockOllama {
    /// LLM config pointing at this server
    pub fn config(&self, timeout_secs: u64) -> LlmConfig {
        LlmConfig {
            provider: LlmProviderType::Ollama,
            base_url: self.base_url.clone(),
            model: "llama2".to_owned(),
            timeout_secs,
        }
    }
}

async fn generate_handler(
    State(state): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_body.lock().unwrap() = Some(body.clone());

    match &state.behavior {
        MockBehavior::Reply(text) => Json(json!({
            "model": body["model"],
            "response": text,
            "done": true
        }))
        .into_response(),
        MockBehavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "mock failure".to_owned(),
        )
            .into_response(),
        MockBehavior::Body(value) => Json(value.clone()).into_response(),
        MockBehavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(json!({ "response": "too late", "done": true })).into_response()
        }
    }
}

async fn tags_handler(State(state): State<Arc<MockState>>) -> Json<Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "models": [{ "name": "llama2:latest" }] }))
}

/// Start a mock Ollama server on an ephemeral port
pub async fn spawn_mock_ollama(behavior: MockBehavior) -> MockOllama {
    init_test_logging();
    let state = Arc::new(MockState {
        behavior,
        hits: AtomicUsize::new(0),
        last_body: Mutex::new(None),
    });

    let router = Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/tags", get(tags_handler))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockOllama {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Base URL of a port that refuses connections
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
