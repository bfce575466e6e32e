// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health API client.
//!
//! Handles:
//! - Fetching every dashboard collection (glucose, medications, sleep,
//!   activities, adherence) plus the analytics aggregate
//! - Creating entries and adherence logs
//!
//! One attempt per call, with no retry and no explicit timeout. The
//! caller decides what a failure falls back to.

use crate::error::AppError;
use crate::models::{
    ActivityEntry, AdherenceRecord, Analytics, GlucoseEntry, Medication, NewActivityEntry,
    NewAdherenceLog, NewGlucoseEntry, NewSleepEntry, SleepEntry,
};
use serde::{Deserialize, Serialize};

/// REST client for the health API.
///
/// All requests and responses are JSON; no authentication header is
/// attached.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// List glucose entries, newest first.
    pub async fn get_glucose(&self) -> Result<Vec<GlucoseEntry>, AppError> {
        self.get_json("/api/glucose").await
    }

    /// Store a glucose reading; returns the server's entry.
    pub async fn create_glucose(&self, entry: &NewGlucoseEntry) -> Result<GlucoseEntry, AppError> {
        self.post_json("/api/glucose", entry).await
    }

    /// List medications with their dose schedules.
    pub async fn get_medications(&self) -> Result<Vec<Medication>, AppError> {
        self.get_json("/api/medications").await
    }

    /// List sleep entries, newest first.
    pub async fn get_sleep(&self) -> Result<Vec<SleepEntry>, AppError> {
        self.get_json("/api/sleep").await
    }

    /// Store a sleep entry; the server computes `hours_slept`.
    pub async fn create_sleep(&self, entry: &NewSleepEntry) -> Result<SleepEntry, AppError> {
        self.post_json("/api/sleep", entry).await
    }

    /// List activity entries, newest first.
    pub async fn get_activities(&self) -> Result<Vec<ActivityEntry>, AppError> {
        self.get_json("/api/activities").await
    }

    /// Store an activity entry.
    pub async fn create_activity(
        &self,
        entry: &NewActivityEntry,
    ) -> Result<ActivityEntry, AppError> {
        self.post_json("/api/activities", entry).await
    }

    /// Fetch the server-computed analytics aggregate.
    pub async fn get_analytics(&self) -> Result<Analytics, AppError> {
        self.get_json("/api/analytics").await
    }

    /// List adherence records; no ordering is promised.
    pub async fn get_adherence(&self) -> Result<Vec<AdherenceRecord>, AppError> {
        self.get_json("/api/medications/adherence").await
    }

    /// Log a dose as taken or skipped; returns the server's record.
    pub async fn log_adherence(&self, log: &NewAdherenceLog) -> Result<AdherenceRecord, AppError> {
        self.post_json("/api/medications/adherence", log).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Generic POST request with JSON body and response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }
}
