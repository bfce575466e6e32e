// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the dashboard.

pub mod activity;
pub mod analytics;
pub mod glucose;
pub mod medication;
pub mod sleep;

pub use activity::{ActivityEntry, Intensity, NewActivityEntry};
pub use analytics::Analytics;
pub use glucose::{GlucoseEntry, GlucoseKind, NewGlucoseEntry};
pub use medication::{AdherenceRecord, AdherenceStatus, Medication, NewAdherenceLog};
pub use sleep::{NewSleepEntry, SleepEntry, SleepQuality};
