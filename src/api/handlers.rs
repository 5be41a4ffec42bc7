//! API Handlers
//!
//! HTTP request handlers for each defaults server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::defaults::{
    Clock, DefaultValue, DefaultsStore, MemoryDefaults, SystemClock, Timestamp, TrackedStore,
};
use crate::error::{DefaultsError, Result};
use crate::models::{
    validate_key, HealthResponse, RemoveResponse, SetTrackedRequest, SetTrackedResponse,
    StatsResponse, TrackingResponse, ValueResponse,
};

/// Application state shared across all handlers.
///
/// The defaults store synchronizes internally, so handlers share it through
/// a plain `Arc`. The clock stamps every tracked write.
#[derive(Clone)]
pub struct AppState {
    pub defaults: Arc<TrackedStore<MemoryDefaults>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new AppState over `store`, stamping with the system clock.
    pub fn new(store: MemoryDefaults) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a new AppState with an explicit clock.
    pub fn with_clock(store: MemoryDefaults, clock: Arc<dyn Clock>) -> Self {
        Self {
            defaults: Arc::new(TrackedStore::new(store)),
            clock,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(MemoryDefaults::new(config.max_entries))
    }
}

fn check_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(error_msg) => Err(DefaultsError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Routes a typed request value to the tracked setter for its slot.
fn set_typed(
    defaults: &TrackedStore<MemoryDefaults>,
    key: &str,
    value: DefaultValue,
    now: Timestamp,
) -> Result<()> {
    match value {
        DefaultValue::Bool(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Integer(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Float(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Double(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Url(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Object(v) => defaults.set_tracked(key, v, now),
        DefaultValue::Date(_) => Err(DefaultsError::InvalidRequest(
            "Date values cannot be written through the tracking API".to_string(),
        )),
    }
}

/// Handler for PUT /defaults/:key
///
/// Stores a typed value and stamps it with the current time.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<SetTrackedRequest>,
) -> Result<Json<SetTrackedResponse>> {
    check_key(&key)?;
    if let Some(error_msg) = req.validate() {
        return Err(DefaultsError::InvalidRequest(error_msg));
    }

    let now = state.clock.now();
    set_typed(&state.defaults, &key, req.value, now)?;

    Ok(Json(SetTrackedResponse::new(key, now)))
}

/// Handler for GET /defaults/:key
///
/// Returns the stored value with its tracking state. Absent values are
/// reported as null.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ValueResponse>> {
    check_key(&key)?;

    let value = state.defaults.store().value(&key)?;
    let timestamp = state.defaults.timestamp(&key)?;

    Ok(Json(ValueResponse::new(key, value, timestamp)))
}

/// Handler for DELETE /defaults/:key
///
/// Removes the value and its timestamp. Succeeds for absent keys.
pub async fn remove_value_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RemoveResponse>> {
    check_key(&key)?;
    state.defaults.remove_tracked_value(&key)?;

    Ok(Json(RemoveResponse::value_removed(key)))
}

/// Handler for GET /tracking/:key
pub async fn tracking_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TrackingResponse>> {
    check_key(&key)?;
    let timestamp = state.defaults.timestamp(&key)?;

    Ok(Json(TrackingResponse::new(key, timestamp, state.clock.now())))
}

/// Handler for DELETE /tracking/:key
///
/// Removes the timestamp only; the value stays.
pub async fn remove_tracking_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RemoveResponse>> {
    check_key(&key)?;
    state.defaults.remove_tracking(&key)?;

    Ok(Json(RemoveResponse::tracking_removed(key)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.defaults.store().stats()?;

    Ok(Json(StatsResponse::new(
        stats.reads,
        stats.writes,
        stats.removals,
        stats.total_entries,
    )))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::ManualClock;
    use chrono::{Duration, TimeZone, Utc};
    use tokio_test::{assert_err, assert_ok};

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn test_state() -> (AppState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let state = AppState::with_clock(MemoryDefaults::new(100), clock.clone());
        (state, clock)
    }

    fn set_request(value: DefaultValue) -> Json<SetTrackedRequest> {
        Json(SetTrackedRequest { value })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let (state, _clock) = test_state();

        let response = assert_ok!(
            set_handler(
                State(state.clone()),
                Path("volume".to_string()),
                set_request(DefaultValue::Double(0.0)),
            )
            .await
        );
        assert_eq!(response.timestamp, start());

        let response = assert_ok!(get_handler(State(state), Path("volume".to_string())).await);
        assert_eq!(response.value, Some(DefaultValue::Double(0.0)));
        assert!(response.tracked);
        assert_eq!(response.timestamp, Some(start()));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let (state, _clock) = test_state();

        let response = assert_ok!(get_handler(State(state), Path("brightness".to_string())).await);
        assert!(response.value.is_none());
        assert!(!response.tracked);
    }

    #[tokio::test]
    async fn test_tracking_handler_reports_age() {
        let (state, clock) = test_state();
        assert_ok!(
            set_handler(
                State(state.clone()),
                Path("flag".to_string()),
                set_request(DefaultValue::Bool(false)),
            )
            .await
        );

        clock.advance(Duration::seconds(45));

        let response = assert_ok!(tracking_handler(State(state), Path("flag".to_string())).await);
        assert!(response.tracked);
        assert_eq!(response.age_seconds, Some(45));
    }

    #[tokio::test]
    async fn test_remove_value_handler_idempotent() {
        let (state, _clock) = test_state();
        assert_ok!(
            set_handler(
                State(state.clone()),
                Path("count".to_string()),
                set_request(DefaultValue::Integer(0)),
            )
            .await
        );

        assert_ok!(remove_value_handler(State(state.clone()), Path("count".to_string())).await);
        assert_ok!(remove_value_handler(State(state.clone()), Path("count".to_string())).await);

        let response = assert_ok!(get_handler(State(state), Path("count".to_string())).await);
        assert!(response.value.is_none());
        assert!(!response.tracked);
    }

    #[tokio::test]
    async fn test_remove_tracking_handler_keeps_value() {
        let (state, _clock) = test_state();
        assert_ok!(
            set_handler(
                State(state.clone()),
                Path("count".to_string()),
                set_request(DefaultValue::Integer(3)),
            )
            .await
        );

        assert_ok!(remove_tracking_handler(State(state.clone()), Path("count".to_string())).await);

        let response = assert_ok!(get_handler(State(state), Path("count".to_string())).await);
        assert_eq!(response.value, Some(DefaultValue::Integer(3)));
        assert!(!response.tracked);
    }

    #[tokio::test]
    async fn test_set_rejects_date_and_reserved_key() {
        let (state, _clock) = test_state();

        assert_err!(
            set_handler(
                State(state.clone()),
                Path("seen".to_string()),
                set_request(DefaultValue::Date(start())),
            )
            .await
        );

        let reserved = crate::defaults::timestamp_key("volume");
        assert_err!(
            set_handler(
                State(state),
                Path(reserved),
                set_request(DefaultValue::Bool(true)),
            )
            .await
        );
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let (state, _clock) = test_state();

        let response = assert_ok!(stats_handler(State(state)).await);
        assert_eq!(response.writes, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
