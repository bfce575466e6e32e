// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard state controller.
//!
//! Owns every list and form the dashboard renders and is the only place
//! that mutates them. Load and save flows run through the API client;
//! failures are logged and absorbed here, never surfaced to the user.
//!
//! Fallback policy is per resource:
//! - glucose: reload the persisted local cache
//! - medications: fixed default schedule
//! - sleep, activities, analytics, adherence: keep prior state

use crate::api::ApiClient;
use crate::models::medication::default_medications;
use crate::models::{
    activity, ActivityEntry, AdherenceRecord, AdherenceStatus, Analytics, GlucoseEntry,
    GlucoseKind, Medication, NewActivityEntry, NewAdherenceLog, NewGlucoseEntry, NewSleepEntry,
    SleepEntry,
};
use crate::reconcile;
use crate::store::{FallbackStore, GLUCOSE_CACHE_KEY};
use crate::time_utils;
use chrono::Utc;
use std::collections::{HashMap, HashSet};

/// Chart series cap: the 20 most recent readings, drawn oldest first.
const CHART_POINTS_MAX: usize = 20;

/// Load phase of one dashboard resource.
///
/// A failed fetch has no phase of its own: the resource settles as
/// `Loaded` with prior data, or `LoadedStaleFallback` when fallback data
/// was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Served from the fallback path; data may be stale.
    LoadedStaleFallback,
}

/// Per-resource load phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadPhases {
    pub glucose: LoadPhase,
    pub medications: LoadPhase,
    pub sleep: LoadPhase,
    pub activities: LoadPhase,
    pub analytics: LoadPhase,
    pub adherence: LoadPhase,
}

/// Glucose form state. Raw input is kept as entered until a submission
/// succeeds, so a failed save can be retried manually.
#[derive(Debug, Clone)]
pub struct GlucoseDraft {
    /// Raw value field, unparsed
    pub value: String,
    pub kind: GlucoseKind,
    pub notes: String,
}

impl Default for GlucoseDraft {
    fn default() -> Self {
        Self {
            value: String::new(),
            kind: GlucoseKind::Ayuno,
            notes: String::new(),
        }
    }
}

/// One point of the glucose chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// X-axis label, `"date time"`
    pub label: String,
    /// mg/dL
    pub value: i32,
    pub kind: GlucoseKind,
    /// True when a gym session was logged the same day
    pub gym: bool,
}

/// One medication's schedule with today's dose statuses.
#[derive(Debug, Clone)]
pub struct MedicationSchedule {
    pub medication_id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub doses: Vec<DoseStatus>,
}

/// A scheduled dose and its reconciled status for today, if logged.
#[derive(Debug, Clone)]
pub struct DoseStatus {
    pub scheduled_time: String,
    pub status: Option<AdherenceStatus>,
}

/// Outcome of a submission, for the presentation layer to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored by the server
    Saved,
    /// Network down; entry synthesized locally and cached
    SavedOffline,
    /// Save failed and no fallback path exists; state untouched
    Failed,
    /// Draft empty or unparseable; nothing was sent
    Incomplete,
}

/// Application state for the whole dashboard screen.
///
/// A single controller owns all mutation rights; handlers borrow it
/// mutably one at a time.
pub struct Dashboard {
    api: ApiClient,
    store: FallbackStore,

    pub glucose_entries: Vec<GlucoseEntry>,
    pub medications: Vec<Medication>,
    pub sleep_entries: Vec<SleepEntry>,
    pub activity_entries: Vec<ActivityEntry>,
    pub analytics: Option<Analytics>,
    pub adherence_records: Vec<AdherenceRecord>,
    /// Dose key -> status for the current UTC day
    pub adherence_status: HashMap<String, AdherenceStatus>,
    pub phases: LoadPhases,
    pub glucose_draft: GlucoseDraft,
}

impl Dashboard {
    pub fn new(api: ApiClient, store: FallbackStore) -> Self {
        Self {
            api,
            store,
            glucose_entries: Vec::new(),
            medications: Vec::new(),
            sleep_entries: Vec::new(),
            activity_entries: Vec::new(),
            analytics: None,
            adherence_records: Vec::new(),
            adherence_status: HashMap::new(),
            phases: LoadPhases::default(),
            glucose_draft: GlucoseDraft::default(),
        }
    }

    // ─── Load Flow ───────────────────────────────────────────────────────────

    /// Fetch every dashboard resource concurrently and settle each one
    /// independently. One failing fetch never cancels or affects the
    /// others; each gates only its own slice of state.
    pub async fn load_all(&mut self) {
        self.phases = LoadPhases {
            glucose: LoadPhase::Loading,
            medications: LoadPhase::Loading,
            sleep: LoadPhase::Loading,
            activities: LoadPhase::Loading,
            analytics: LoadPhase::Loading,
            adherence: LoadPhase::Loading,
        };

        let (glucose, medications, sleep, activities, analytics, adherence) = tokio::join!(
            self.api.get_glucose(),
            self.api.get_medications(),
            self.api.get_sleep(),
            self.api.get_activities(),
            self.api.get_analytics(),
            self.api.get_adherence(),
        );

        match glucose {
            Ok(entries) => {
                self.glucose_entries = entries;
                self.phases.glucose = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "glucose fetch failed, trying local cache");
                match self.store.load::<Vec<GlucoseEntry>>(GLUCOSE_CACHE_KEY).await {
                    Some(cached) => {
                        self.glucose_entries = cached;
                        self.phases.glucose = LoadPhase::LoadedStaleFallback;
                    }
                    None => self.phases.glucose = LoadPhase::Loaded,
                }
            }
        }

        match medications {
            Ok(meds) => {
                self.medications = meds;
                self.phases.medications = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "medications fetch failed, using default schedule");
                self.medications = default_medications();
                self.phases.medications = LoadPhase::LoadedStaleFallback;
            }
        }

        match sleep {
            Ok(entries) => {
                self.sleep_entries = entries;
                self.phases.sleep = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "sleep fetch failed, keeping prior state");
                self.phases.sleep = LoadPhase::Loaded;
            }
        }

        match activities {
            Ok(entries) => {
                self.activity_entries = entries;
                self.phases.activities = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "activities fetch failed, keeping prior state");
                self.phases.activities = LoadPhase::Loaded;
            }
        }

        match analytics {
            Ok(aggregate) => {
                self.analytics = Some(aggregate);
                self.phases.analytics = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "analytics fetch failed, keeping prior state");
                self.phases.analytics = LoadPhase::Loaded;
            }
        }

        match adherence {
            Ok(records) => {
                self.adherence_status = reconcile::reconcile_today(&records);
                self.adherence_records = records;
                self.phases.adherence = LoadPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "adherence fetch failed, keeping prior state");
                self.phases.adherence = LoadPhase::Loaded;
            }
        }
    }

    // ─── Save Flows ──────────────────────────────────────────────────────────

    /// Submit the current glucose draft.
    ///
    /// On success the server's entry is prepended, the draft clears, and
    /// the list is reloaded from the server. When the POST fails the
    /// entry is synthesized locally (timestamp id, UTC date and time),
    /// prepended, and the whole list persisted for the next mount; the
    /// draft keeps its values for a manual retry.
    pub async fn submit_glucose(&mut self) -> SubmitOutcome {
        let value = match self.glucose_draft.value.trim().parse::<i32>() {
            Ok(v) => v,
            Err(_) => return SubmitOutcome::Incomplete,
        };
        let notes = Some(self.glucose_draft.notes.trim())
            .filter(|n| !n.is_empty())
            .map(String::from);
        let new_entry = NewGlucoseEntry {
            value,
            kind: self.glucose_draft.kind,
            notes,
        };

        match self.api.create_glucose(&new_entry).await {
            Ok(saved) => {
                self.glucose_entries.insert(0, saved);
                self.glucose_draft = GlucoseDraft::default();
                self.reload_glucose().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(error = %err, "glucose save failed, caching locally");
                let now = Utc::now();
                let entry = GlucoseEntry {
                    id: time_utils::timestamp_ms(now),
                    value: new_entry.value,
                    kind: new_entry.kind,
                    date: time_utils::format_date_key(now),
                    time: time_utils::format_clock_time(now),
                    notes: new_entry.notes,
                };
                self.glucose_entries.insert(0, entry);
                if let Err(err) = self
                    .store
                    .save(GLUCOSE_CACHE_KEY, &self.glucose_entries)
                    .await
                {
                    tracing::error!(error = %err, "failed to persist glucose cache");
                }
                self.phases.glucose = LoadPhase::LoadedStaleFallback;
                SubmitOutcome::SavedOffline
            }
        }
    }

    /// Store a sleep entry, then reload the list from the server.
    pub async fn submit_sleep(&mut self, entry: NewSleepEntry) -> SubmitOutcome {
        match self.api.create_sleep(&entry).await {
            Ok(_) => {
                self.reload_sleep().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(error = %err, "sleep save failed, keeping prior state");
                SubmitOutcome::Failed
            }
        }
    }

    /// Store an activity entry, then reload the list from the server.
    pub async fn submit_activity(&mut self, entry: NewActivityEntry) -> SubmitOutcome {
        match self.api.create_activity(&entry).await {
            Ok(_) => {
                self.reload_activities().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(error = %err, "activity save failed, keeping prior state");
                SubmitOutcome::Failed
            }
        }
    }

    /// Record a dose as taken or skipped.
    ///
    /// The status map is updated optimistically before the POST; on
    /// success the record list is re-fetched and reconciled so the map
    /// reflects server truth. A failed POST leaves the optimistic status
    /// in place.
    pub async fn log_adherence(
        &mut self,
        medication_id: i64,
        scheduled_time: &str,
        status: AdherenceStatus,
        reason: Option<String>,
    ) -> SubmitOutcome {
        self.adherence_status.insert(
            reconcile::adherence_key(medication_id, scheduled_time),
            status,
        );

        let log = NewAdherenceLog {
            medication_id,
            scheduled_time: scheduled_time.to_string(),
            status,
            reason,
        };
        match self.api.log_adherence(&log).await {
            Ok(_) => {
                self.reload_adherence().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    medication_id,
                    scheduled_time,
                    "adherence log failed, keeping optimistic status"
                );
                SubmitOutcome::Failed
            }
        }
    }

    /// Best-effort reload after a successful write. A failed reload
    /// keeps the optimistic list.
    async fn reload_glucose(&mut self) {
        self.phases.glucose = LoadPhase::Loading;
        match self.api.get_glucose().await {
            Ok(entries) => self.glucose_entries = entries,
            Err(err) => {
                tracing::warn!(error = %err, "glucose reload failed, keeping optimistic list")
            }
        }
        self.phases.glucose = LoadPhase::Loaded;
    }

    async fn reload_sleep(&mut self) {
        self.phases.sleep = LoadPhase::Loading;
        match self.api.get_sleep().await {
            Ok(entries) => self.sleep_entries = entries,
            Err(err) => tracing::warn!(error = %err, "sleep reload failed"),
        }
        self.phases.sleep = LoadPhase::Loaded;
    }

    async fn reload_activities(&mut self) {
        self.phases.activities = LoadPhase::Loading;
        match self.api.get_activities().await {
            Ok(entries) => self.activity_entries = entries,
            Err(err) => tracing::warn!(error = %err, "activities reload failed"),
        }
        self.phases.activities = LoadPhase::Loaded;
    }

    async fn reload_adherence(&mut self) {
        self.phases.adherence = LoadPhase::Loading;
        match self.api.get_adherence().await {
            Ok(records) => {
                self.adherence_status = reconcile::reconcile_today(&records);
                self.adherence_records = records;
            }
            Err(err) => {
                tracing::warn!(error = %err, "adherence reload failed, keeping optimistic map")
            }
        }
        self.phases.adherence = LoadPhase::Loaded;
    }

    // ─── View Models ─────────────────────────────────────────────────────────

    /// Chart series for the glucose history: the most recent readings,
    /// at most [`CHART_POINTS_MAX`], oldest first. Days with a logged
    /// gym session carry the gym marker.
    ///
    /// The entry list stays newest-first as delivered; the reverse here
    /// is the one reorder the client performs.
    pub fn glucose_chart_series(&self) -> Vec<ChartPoint> {
        let gym_dates: HashSet<&str> = self
            .activity_entries
            .iter()
            .filter(|a| a.kind == activity::GYM_KIND)
            .map(|a| a.date.as_str())
            .collect();

        let mut points: Vec<ChartPoint> = self
            .glucose_entries
            .iter()
            .take(CHART_POINTS_MAX)
            .map(|entry| ChartPoint {
                label: format!("{} {}", entry.date, entry.time),
                value: entry.value,
                kind: entry.kind,
                gym: gym_dates.contains(entry.date.as_str()),
            })
            .collect();
        points.reverse();
        points
    }

    /// Per-medication dose schedule joined with today's reconciled
    /// statuses.
    pub fn medication_schedule(&self) -> Vec<MedicationSchedule> {
        self.medications
            .iter()
            .map(|med| MedicationSchedule {
                medication_id: med.id,
                name: med.name.clone(),
                dosage: med.dosage.clone(),
                frequency: med.frequency.clone(),
                doses: med
                    .times
                    .iter()
                    .map(|time| DoseStatus {
                        scheduled_time: time.clone(),
                        status: self
                            .adherence_status
                            .get(&reconcile::adherence_key(med.id, time))
                            .copied(),
                    })
                    .collect(),
            })
            .collect()
    }
}
