//! Response DTOs for the defaults server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::defaults::{DefaultValue, Timestamp};

/// Response body for a value lookup (GET /defaults/:key)
///
/// `value` is null when the key holds nothing; that is not an error.
#[derive(Debug, Clone, Serialize)]
pub struct ValueResponse {
    pub key: String,
    pub value: Option<DefaultValue>,
    /// Whether a tracking timestamp exists for the key
    pub tracked: bool,
    pub timestamp: Option<Timestamp>,
}

impl ValueResponse {
    pub fn new(
        key: impl Into<String>,
        value: Option<DefaultValue>,
        timestamp: Option<Timestamp>,
    ) -> Self {
        Self {
            key: key.into(),
            value,
            tracked: timestamp.is_some(),
            timestamp,
        }
    }
}

/// Response body for a tracked write (PUT /defaults/:key)
#[derive(Debug, Clone, Serialize)]
pub struct SetTrackedResponse {
    /// Success message
    pub message: String,
    pub key: String,
    /// Timestamp recorded for the write
    pub timestamp: Timestamp,
}

impl SetTrackedResponse {
    pub fn new(key: impl Into<String>, timestamp: Timestamp) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set and tracked", key),
            key,
            timestamp,
        }
    }
}

/// Response body for tracking lookups (GET /tracking/:key)
#[derive(Debug, Clone, Serialize)]
pub struct TrackingResponse {
    pub key: String,
    pub tracked: bool,
    pub timestamp: Option<Timestamp>,
    /// Seconds elapsed since the last tracked write
    pub age_seconds: Option<i64>,
}

impl TrackingResponse {
    pub fn new(key: impl Into<String>, timestamp: Option<Timestamp>, now: Timestamp) -> Self {
        Self {
            key: key.into(),
            tracked: timestamp.is_some(),
            timestamp,
            age_seconds: timestamp.map(|stamped| (now - stamped).num_seconds()),
        }
    }
}

/// Response body for DELETE /defaults/:key and DELETE /tracking/:key
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    /// Success message
    pub message: String,
    pub key: String,
}

impl RemoveResponse {
    /// Confirms removal of the value and its timestamp
    pub fn value_removed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' and its tracking removed", key),
            key,
        }
    }

    /// Confirms removal of the timestamp only
    pub fn tracking_removed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Tracking for key '{}' removed", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub reads: u64,
    pub writes: u64,
    pub removals: u64,
    /// Current number of entries, timestamps included
    pub total_entries: usize,
}

impl StatsResponse {
    pub fn new(reads: u64, writes: u64, removals: u64, total_entries: usize) -> Self {
        Self {
            reads,
            writes,
            removals,
            total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
