// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Physical activity log model.

use serde::{Deserialize, Serialize};

/// Activity kind that marks a day on the glucose chart.
pub const GYM_KIND: &str = "gym";

/// Perceived workout intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

/// Activity entry as delivered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: i64,
    /// Activity category ("gym", "walk", ...); the server owns the set
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration in minutes
    pub duration: i32,
    pub intensity: Intensity,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `POST /api/activities` request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i32,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
