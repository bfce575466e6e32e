// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sleep log model.

use serde::{Deserialize, Serialize};

/// Subjective sleep quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Good,
    Fair,
    Poor,
}

/// Sleep entry as delivered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: i64,
    /// `HH:MM`
    pub bedtime: String,
    /// `HH:MM`
    pub wake_time: String,
    /// Server-computed duration in hours
    pub hours_slept: f64,
    pub quality: SleepQuality,
    /// `DD/MM/YYYY`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `POST /api/sleep` request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSleepEntry {
    pub bedtime: String,
    pub wake_time: String,
    pub quality: SleepQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
