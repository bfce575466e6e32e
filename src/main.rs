// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gluco-Tracker dashboard loader.
//!
//! Loads every dashboard resource once, reconciles today's medication
//! adherence, and logs a summary. Interactive front-ends drive the same
//! controller through the library crate.

use gluco_tracker::{
    api::ApiClient, config::Config, controller::Dashboard, store::FallbackStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_logging();

    let config = Config::from_env();
    tracing::info!(api = %config.api_base_url, "Starting Gluco-Tracker dashboard");

    let api = ApiClient::new(config.api_base_url.clone());
    let store = FallbackStore::new(config.data_dir.clone());
    let mut dashboard = Dashboard::new(api, store);

    dashboard.load_all().await;

    tracing::info!(
        glucose = dashboard.glucose_entries.len(),
        medications = dashboard.medications.len(),
        sleep = dashboard.sleep_entries.len(),
        activities = dashboard.activity_entries.len(),
        glucose_phase = ?dashboard.phases.glucose,
        "Dashboard loaded"
    );

    for schedule in dashboard.medication_schedule() {
        for dose in &schedule.doses {
            tracing::info!(
                medication = %schedule.name,
                time = %dose.scheduled_time,
                status = ?dose.status,
                "Dose"
            );
        }
    }

    let series = dashboard.glucose_chart_series();
    tracing::info!(points = series.len(), "Glucose chart series ready");
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gluco_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
