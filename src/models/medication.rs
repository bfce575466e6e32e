// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Medication schedule and adherence models.

use serde::{Deserialize, Serialize};

/// Medication with its scheduled dose times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    /// Free text, e.g. "500mg"
    pub dosage: String,
    /// Free text, e.g. "Cada 12 horas"
    pub frequency: String,
    /// Scheduled clock times (`HH:MM`), in dose order
    pub times: Vec<String>,
}

/// Whether a scheduled dose was taken or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdherenceStatus {
    Taken,
    Skipped,
}

/// One logged dose, keyed by `(medication_id, scheduled_time)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceRecord {
    pub medication_id: i64,
    /// `HH:MM`, one of the medication's scheduled times
    pub scheduled_time: String,
    pub status: AdherenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// UTC-derived `DD/MM/YYYY`
    pub date: String,
}

/// `POST /api/medications/adherence` request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdherenceLog {
    pub medication_id: i64,
    pub scheduled_time: String,
    pub status: AdherenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Fixed schedule shown when the medications fetch fails.
///
/// Repeated failures must render the identical list.
pub fn default_medications() -> Vec<Medication> {
    vec![
        Medication {
            id: 1,
            name: "Metformina".to_string(),
            dosage: "500mg".to_string(),
            frequency: "Cada 12 horas".to_string(),
            times: vec!["08:00".to_string(), "20:00".to_string()],
        },
        Medication {
            id: 2,
            name: "Insulina".to_string(),
            dosage: "10 unidades".to_string(),
            frequency: "Antes de comidas".to_string(),
            times: vec![
                "07:30".to_string(),
                "12:30".to_string(),
                "19:30".to_string(),
            ],
        },
    ]
}
