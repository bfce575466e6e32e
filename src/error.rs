// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! The failure taxonomy mirrors what the dashboard has to survive:
//! transport failures, non-success HTTP statuses, malformed bodies, and
//! fallback-store I/O. The controller catches all of these at the call
//! site and applies the per-resource fallback; nothing is retried.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never produced a response (DNS, connect, I/O).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response arrived but the body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Local fallback store failure.
    #[error("Fallback store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the remote API could not be reached or answered with an
    /// error status, the cases where a degraded local path applies.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Api { .. })
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
