// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local fallback persistence.
//!
//! File-backed key/value shim standing in for browser local storage: one
//! JSON document per key under a data directory. Used only on the
//! degraded path when the API is unreachable. Values never expire and
//! are never migrated across schema versions.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

/// Storage key for the cached glucose entry list.
///
/// Glucose is the only resource with a persisted fallback; other
/// resources fall back to defaults or prior state.
pub const GLUCOSE_CACHE_KEY: &str = "glucoseEntries";

/// Key/value store persisting each value as `{data_dir}/{key}.json`.
#[derive(Clone)]
pub struct FallbackStore {
    data_dir: PathBuf,
}

impl FallbackStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load and deserialize the value stored under `key`.
    ///
    /// Missing files and unreadable payloads both come back as `None`;
    /// parse failures are logged.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match fs::read(self.key_path(key)).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::error!(key, error = %err, "failed to parse cached value");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::error!(key, error = %err, "failed to read cached value");
                None
            }
        }
    }

    /// Serialize and persist `value` under `key`. The write completes
    /// before this returns; the data directory is created on demand.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let payload =
            serde_json::to_vec_pretty(value).map_err(|e| AppError::Store(e.to_string()))?;
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        fs::write(self.key_path(key), payload)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}
