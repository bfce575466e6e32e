//! Server-computed analytics aggregate, read-only to the client.
//!
//! The server owns all aggregation; the client renders whatever arrives.
//! Every field defaults so partial aggregates from older server versions
//! still deserialize.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dashboard-wide summary statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analytics {
    /// Average and count per glucose measurement context
    #[serde(default)]
    pub glucose: HashMap<String, GlucoseKindStats>,
    /// Fraction of scheduled doses logged as taken
    #[serde(default)]
    pub adherence_rate: f64,
    /// Entry count per sleep quality rating
    #[serde(default)]
    pub sleep_quality: HashMap<String, u32>,
    /// Totals per activity kind
    #[serde(default)]
    pub activities: HashMap<String, ActivityKindStats>,
}

/// Glucose statistics for one measurement context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlucoseKindStats {
    /// Average value in mg/dL
    pub avg: f64,
    pub count: u32,
}

/// Totals for one activity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityKindStats {
    pub total_minutes: u32,
    pub sessions: u32,
}
