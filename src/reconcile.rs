// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Medication adherence reconciliation.
//!
//! Flattens the server's adherence record list into a per-dose status
//! map for the current UTC day. The schedule view indexes the map by the
//! composite dose key.

use crate::models::{AdherenceRecord, AdherenceStatus};
use crate::time_utils;
use std::collections::HashMap;

/// Composite key for one scheduled dose: `"{medication_id}-{scheduled_time}"`.
///
/// Write and read paths must produce the identical string; the status
/// map is only ever indexed by this function's output.
pub fn adherence_key(medication_id: i64, scheduled_time: &str) -> String {
    format!("{}-{}", medication_id, scheduled_time)
}

/// Build the status map for `today` from the server's record list.
///
/// Records are applied in delivery order; when two records carry the
/// same dose key for the same day the later one wins. The server
/// promises no ordering.
pub fn reconcile(records: &[AdherenceRecord], today: &str) -> HashMap<String, AdherenceStatus> {
    let mut status = HashMap::new();
    for record in records {
        if record.date == today {
            status.insert(
                adherence_key(record.medication_id, &record.scheduled_time),
                record.status,
            );
        }
    }
    status
}

/// Status map for the current UTC day.
pub fn reconcile_today(records: &[AdherenceRecord]) -> HashMap<String, AdherenceStatus> {
    reconcile(records, &time_utils::today_utc())
}
