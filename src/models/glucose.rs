// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Glucose reading model.

use serde::{Deserialize, Serialize};

/// Measurement context for a glucose reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlucoseKind {
    /// Fasting measurement
    Ayuno,
    /// After breakfast
    Desayuno,
    /// After lunch
    Comida,
    /// After dinner
    Cena,
    /// Before going to bed
    AntesDormir,
}

/// Glucose reading as delivered by the server, or synthesized locally
/// when the API is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlucoseEntry {
    /// Server-assigned id; local fallback entries use a millisecond
    /// timestamp instead.
    pub id: i64,
    /// Blood glucose in mg/dL
    pub value: i32,
    /// Measurement context
    #[serde(rename = "type")]
    pub kind: GlucoseKind,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `POST /api/glucose` request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGlucoseEntry {
    pub value: i32,
    #[serde(rename = "type")]
    pub kind: GlucoseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
