// ABOUTME: Criterion benchmarks for summaries, JSON export, and canned coaching responses
// ABOUTME: Measures formatting cost across activity batch sizes with deterministic fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for output formatting.
//!
//! Uses deterministic activities so runs are comparable.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use garmin_coach::coach::{AiCoach, ResponderStrategy};
use garmin_coach::config::LlmProviderType;
use garmin_coach::formatters::{format_activity_summary, format_health_summary, to_json};
use garmin_coach::models::Activity;
use garmin_coach::providers::{FitnessDataProvider, SampleDataProvider};
use tokio::runtime::Runtime;

const BATCH_SIZES: [usize; 3] = [1, 10, 100];

#[allow(clippy::cast_possible_wrap)]
fn generate_activities(count: usize) -> Vec<Activity> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(7, 0, 0))
        .unwrap();
    (0..count)
        .map(|index| Activity {
            activity_id: index as u64 + 1,
            activity_name: format!("Bench Run {index}"),
            activity_type: if index % 2 == 0 { "running" } else { "cycling" }.to_owned(),
            start_time: base - Duration::days(index as i64),
            distance: 5_000.0 + (index * 37 % 10_000) as f64,
            duration: 1_800 + (index as u64 * 13) % 1_800,
            average_hr: (index % 5 != 0).then_some(140 + (index % 20) as u32),
            max_hr: Some(170),
            calories: Some(300 + (index % 200) as u32),
        })
        .collect()
}

fn bench_activity_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_summary");

    for size in BATCH_SIZES {
        let activities = generate_activities(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &activities, |b, data| {
            b.iter(|| format_activity_summary(black_box(data)));
        });
    }

    group.finish();
}

fn bench_health_summary(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let health = rt.block_on(async {
        let mut provider = SampleDataProvider::default();
        provider.authenticate().await.unwrap();
        provider.get_health_bundle(None).await.unwrap()
    });

    c.bench_function("health_summary", |b| {
        b.iter(|| {
            format_health_summary(
                black_box(&health.heart_rate),
                black_box(&health.sleep),
                black_box(&health.stress),
            )
        });
    });
}

fn bench_json_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_json");

    for size in BATCH_SIZES {
        let activities = generate_activities(size);
        let serialized = to_json(&activities, None).unwrap();
        group.throughput(Throughput::Bytes(serialized.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &activities, |b, data| {
            b.iter(|| to_json(black_box(data), None));
        });
    }

    group.finish();
}

fn bench_canned_coaching(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let coach = AiCoach::new(ResponderStrategy::CannedOnly {
        requested: LlmProviderType::Unknown,
    });
    let activity = generate_activities(1).remove(0);

    c.bench_function("canned_activity_feedback", |b| {
        b.to_async(&rt)
            .iter(|| async { coach.analyze_activity(black_box(&activity)).await });
    });
}

criterion_group!(
    benches,
    bench_activity_summary,
    bench_health_summary,
    bench_json_export,
    bench_canned_coaching,
);
criterion_main!(benches);
