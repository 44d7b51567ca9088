// ABOUTME: Integration tests for the Ollama client and coach fallback against a mock server
// ABOUTME: Covers success, error statuses, malformed payloads, refused connections, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::{Duration, Instant};

use common::{
    morning_run, refused_base_url, sample_health, sample_user_stats, spawn_mock_ollama,
    MockBehavior,
};
use garmin_coach::coach::{AiCoach, ResponderStrategy, ResponseSource};
use garmin_coach::config::{LlmConfig, LlmProviderType};
use garmin_coach::errors::ErrorCode;
use garmin_coach::llm::{CannedResponse, GenerateRequest, OllamaProvider, TextGenerator};
use serde_json::json;

fn coach_for(config: &LlmConfig) -> AiCoach {
    AiCoach::from_config(config).expect("client builds")
}

// ============================================================================
// Provider
// ============================================================================

#[tokio::test]
async fn test_generate_sends_non_streaming_request() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("Nice pacing.".to_owned())).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    let response = provider
        .generate(&GenerateRequest::new("How was my run?"))
        .await
        .expect("generate succeeds");

    assert_eq!(response.content, "Nice pacing.");
    assert_eq!(response.model, "llama2");

    let body = mock.state.last_body().expect("request recorded");
    assert_eq!(body["model"], "llama2");
    assert_eq!(body["prompt"], "How was my run?");
    assert_eq!(body["stream"], false);
}

#[tokio::test]
async fn test_generate_model_override() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("ok".to_owned())).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    let response = provider
        .generate(&GenerateRequest::new("hi").with_model("mistral"))
        .await
        .unwrap();

    assert_eq!(response.model, "mistral");
    assert_eq!(mock.state.last_body().unwrap()["model"], "mistral");
}

#[tokio::test]
async fn test_generate_trailing_slash_in_base_url() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("ok".to_owned())).await;
    let mut config = mock.config(5);
    config.base_url.push('/');
    let provider = OllamaProvider::new(&config).unwrap();

    assert!(provider.generate(&GenerateRequest::new("hi")).await.is_ok());
    assert_eq!(mock.state.hits(), 1);
}

#[tokio::test]
async fn test_generate_error_status() {
    let mock = spawn_mock_ollama(MockBehavior::Status(500)).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    let error = provider
        .generate(&GenerateRequest::new("hi"))
        .await
        .expect_err("500 is a failure");
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("500"));
}

#[tokio::test]
async fn test_generate_gateway_status_is_unavailable() {
    let mock = spawn_mock_ollama(MockBehavior::Status(503)).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    let error = provider
        .generate(&GenerateRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_generate_missing_response_field() {
    let mock = spawn_mock_ollama(MockBehavior::Body(json!({ "done": true }))).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    let error = provider
        .generate(&GenerateRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_generate_refused_connection() {
    let config = LlmConfig {
        base_url: refused_base_url().await,
        timeout_secs: 5,
        ..LlmConfig::default()
    };
    let provider = OllamaProvider::new(&config).unwrap();

    let error = provider
        .generate(&GenerateRequest::new("hi"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_health_check_against_mock() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("ok".to_owned())).await;
    let provider = OllamaProvider::new(&mock.config(5)).unwrap();

    assert!(provider.health_check().await.unwrap());
}

// ============================================================================
// Coach fallback
// ============================================================================

#[tokio::test]
async fn test_coach_returns_external_text() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("Solid tempo effort.".to_owned())).await;
    let coach = coach_for(&mock.config(5));

    let response = coach.analyze_activity(&morning_run()).await;

    assert_eq!(response.text, "Solid tempo effort.");
    assert_eq!(
        response.source,
        ResponseSource::External {
            model: "llama2".to_owned()
        }
    );
    let prompt = mock.state.last_body().unwrap()["prompt"]
        .as_str()
        .unwrap()
        .to_owned();
    assert!(prompt.contains("Activity: Morning Run"));
}

#[tokio::test]
async fn test_coach_falls_back_on_error_status() {
    let mock = spawn_mock_ollama(MockBehavior::Status(500)).await;
    let coach = coach_for(&mock.config(5));

    let response = coach.analyze_health_metrics(&sample_health()).await;

    assert!(response.is_fallback());
    assert_eq!(response.text, CannedResponse::HealthRecommendations.text());
    assert_eq!(mock.state.hits(), 1, "exactly one attempt per call");
}

#[tokio::test]
async fn test_coach_falls_back_on_non_string_response() {
    let mock = spawn_mock_ollama(MockBehavior::Body(json!({ "response": 42 }))).await;
    let coach = coach_for(&mock.config(5));

    let response = coach
        .create_training_plan(&sample_user_stats(), "Faster 10K")
        .await;

    assert_eq!(
        response.source,
        ResponseSource::Fallback(CannedResponse::TrainingPlan)
    );
}

#[tokio::test]
async fn test_coach_falls_back_when_server_is_down() {
    let config = LlmConfig {
        base_url: refused_base_url().await,
        timeout_secs: 5,
        ..LlmConfig::default()
    };
    let coach = coach_for(&config);

    let response = coach.analyze_activity(&morning_run()).await;

    assert_eq!(response.text, CannedResponse::WorkoutFeedback.text());
    assert!(!coach.health_check().await);
}

#[tokio::test]
async fn test_coach_falls_back_on_timeout() {
    let mock = spawn_mock_ollama(MockBehavior::Delay(Duration::from_secs(5))).await;
    let coach = coach_for(&mock.config(1));

    let started = Instant::now();
    let response = coach.respond("Anything to add?").await;

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(
        response.source,
        ResponseSource::Fallback(CannedResponse::Encouragement)
    );
}

#[tokio::test]
async fn test_canned_only_strategy_never_calls_endpoint() {
    let mock = spawn_mock_ollama(MockBehavior::Reply("should not be used".to_owned())).await;
    let config = LlmConfig {
        provider: LlmProviderType::Together,
        ..mock.config(5)
    };
    let coach = coach_for(&config);

    assert!(matches!(
        coach.strategy(),
        ResponderStrategy::CannedOnly {
            requested: LlmProviderType::Together
        }
    ));

    let activity = coach.analyze_activity(&morning_run()).await;
    let health = coach.analyze_health_metrics(&sample_health()).await;
    let plan = coach
        .create_training_plan(&sample_user_stats(), "Faster 10K")
        .await;

    assert!(activity.is_fallback() && health.is_fallback() && plan.is_fallback());
    assert!(!coach.health_check().await);
    assert_eq!(mock.state.hits(), 0);
}
