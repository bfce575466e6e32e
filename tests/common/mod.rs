// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process mock of the health API for integration tests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use gluco_tracker::models::{
    ActivityEntry, AdherenceRecord, Analytics, GlucoseEntry, Medication, NewActivityEntry,
    NewAdherenceLog, NewGlucoseEntry, NewSleepEntry, SleepEntry,
};
use gluco_tracker::time_utils;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared mutable state of the mock server.
#[derive(Default)]
pub struct MockState {
    pub glucose: Vec<GlucoseEntry>,
    pub medications: Vec<Medication>,
    pub sleep: Vec<SleepEntry>,
    pub activities: Vec<ActivityEntry>,
    pub adherence: Vec<AdherenceRecord>,
    pub analytics: Analytics,
    pub next_id: i64,
    /// When set, every endpoint answers 500.
    pub fail: bool,
}

pub type Shared = Arc<Mutex<MockState>>;

#[allow(dead_code)]
pub fn shared_state() -> Shared {
    Arc::new(Mutex::new(MockState::default()))
}

/// Spawn the mock server on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_mock_api(state: Shared) -> String {
    let app = Router::new()
        .route("/api/glucose", get(list_glucose).post(create_glucose))
        .route("/api/medications", get(list_medications))
        .route("/api/sleep", get(list_sleep).post(create_sleep))
        .route("/api/activities", get(list_activities).post(create_activity))
        .route("/api/analytics", get(get_analytics))
        .route(
            "/api/medications/adherence",
            get(list_adherence).post(create_adherence),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL nothing listens on, for transport-failure tests.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Fresh per-test data directory for the fallback store.
#[allow(dead_code)]
pub fn unique_data_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut dir = std::env::temp_dir();
    dir.push(format!("gluco_tracker_{}_{}", std::process::id(), nanos));
    dir
}

async fn list_glucose(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.glucose.clone()).into_response()
}

async fn create_glucose(
    State(state): State<Shared>,
    Json(req): Json<NewGlucoseEntry>,
) -> Response {
    let mut state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let now = Utc::now();
    state.next_id += 1;
    let entry = GlucoseEntry {
        id: state.next_id,
        value: req.value,
        kind: req.kind,
        date: time_utils::format_date_key(now),
        time: time_utils::format_clock_time(now),
        notes: req.notes,
    };
    state.glucose.insert(0, entry.clone());
    Json(entry).into_response()
}

async fn list_medications(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.medications.clone()).into_response()
}

async fn list_sleep(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.sleep.clone()).into_response()
}

async fn create_sleep(State(state): State<Shared>, Json(req): Json<NewSleepEntry>) -> Response {
    let mut state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let now = Utc::now();
    state.next_id += 1;
    let entry = SleepEntry {
        id: state.next_id,
        hours_slept: hours_between(&req.bedtime, &req.wake_time),
        bedtime: req.bedtime,
        wake_time: req.wake_time,
        quality: req.quality,
        date: time_utils::format_date_key(now),
        notes: req.notes,
    };
    state.sleep.insert(0, entry.clone());
    Json(entry).into_response()
}

async fn list_activities(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.activities.clone()).into_response()
}

async fn create_activity(
    State(state): State<Shared>,
    Json(req): Json<NewActivityEntry>,
) -> Response {
    let mut state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let now = Utc::now();
    state.next_id += 1;
    let entry = ActivityEntry {
        id: state.next_id,
        kind: req.kind,
        duration: req.duration,
        intensity: req.intensity,
        date: time_utils::format_date_key(now),
        time: time_utils::format_clock_time(now),
        notes: req.notes,
    };
    state.activities.insert(0, entry.clone());
    Json(entry).into_response()
}

async fn get_analytics(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.analytics.clone()).into_response()
}

async fn list_adherence(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.adherence.clone()).into_response()
}

async fn create_adherence(
    State(state): State<Shared>,
    Json(req): Json<NewAdherenceLog>,
) -> Response {
    let mut state = state.lock().unwrap();
    if state.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let record = AdherenceRecord {
        medication_id: req.medication_id,
        scheduled_time: req.scheduled_time,
        status: req.status,
        reason: req.reason,
        date: time_utils::today_utc(),
    };
    state.adherence.push(record.clone());
    Json(record).into_response()
}

fn hours_between(bedtime: &str, wake_time: &str) -> f64 {
    use chrono::NaiveTime;
    let bed = NaiveTime::parse_from_str(bedtime, "%H:%M").unwrap();
    let wake = NaiveTime::parse_from_str(wake_time, "%H:%M").unwrap();
    let mut minutes = (wake - bed).num_minutes();
    if minutes <= 0 {
        minutes += 24 * 60;
    }
    minutes as f64 / 60.0
}
