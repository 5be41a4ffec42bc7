//! Tracked Store Module
//!
//! Pairs every value written through the tracking API with a timestamp kept
//! under a derived key, so "never set" can be told apart from "set to zero".
//!
//! # Reserved namespace
//! The timestamp for key `K` lives at [`TIMESTAMP_KEY_PREFIX`] + `K`. Callers
//! must never write keys beginning with that prefix themselves. Collisions are
//! a configuration error and are not detected at runtime.

use chrono::Duration;
use tracing::{debug, warn};

use crate::defaults::{Clock, DefaultValue, DefaultsStore, Timestamp, Trackable};
use crate::error::Result;

// == Key Derivation ==
/// Prefix reserved for timestamp entries.
pub const TIMESTAMP_KEY_PREFIX: &str = "__tracked_defaults.timestamp__:";

/// Returns the key holding the timestamp for `key`.
pub fn timestamp_key(key: &str) -> String {
    format!("{}{}", TIMESTAMP_KEY_PREFIX, key)
}

/// Returns true if `key` falls in the namespace reserved for timestamps.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(TIMESTAMP_KEY_PREFIX)
}

// == Tracked Entry ==
/// A tracked key's timestamp together with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntry {
    /// Current value; `None` if it was removed without removing the tracking
    pub value: Option<DefaultValue>,
    /// Time of the last tracked write
    pub timestamp: Timestamp,
}

// == Tracked Store ==
/// Facade over a [`DefaultsStore`] that timestamps tracked writes.
///
/// A tracked write is two ordered store writes: the value, then the
/// timestamp. They are not atomic; a reader in between may observe the new
/// value with a stale or missing timestamp. Concurrent writes to the same key
/// are last-write-wins, as in the underlying store.
#[derive(Debug)]
pub struct TrackedStore<S> {
    store: S,
}

impl<S: DefaultsStore> TrackedStore<S> {
    // == Constructor ==
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store for untracked reads and writes.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    // == Is Tracked ==
    /// Returns true if a timestamp exists for `key`.
    ///
    /// The value entry is not consulted.
    pub fn is_tracked(&self, key: &str) -> Result<bool> {
        self.store.contains(&timestamp_key(key))
    }

    // == Timestamp ==
    /// Returns the time of the last tracked write to `key`, if tracked.
    pub fn timestamp(&self, key: &str) -> Result<Option<Timestamp>> {
        self.store.date(&timestamp_key(key))
    }

    // == Set Tracked ==
    /// Writes `value` under `key`, then records `now` as its timestamp.
    ///
    /// If the value write fails, no timestamp is written. If the timestamp
    /// write fails, the value stays written and the error is returned.
    pub fn set_tracked<T: Trackable>(&self, key: &str, value: T, now: Timestamp) -> Result<()> {
        let value = value.into_default_value();
        let type_name = value.type_name();

        self.store.set_value(key, value)?;

        if let Err(e) = self.store.set_date(&timestamp_key(key), now) {
            warn!(
                "Tracked write of '{}' stored the value but not its timestamp: {}",
                key, e
            );
            return Err(e);
        }

        debug!("Tracked {} write to '{}' at {}", type_name, key, now);
        Ok(())
    }

    /// Like [`set_tracked`](Self::set_tracked), stamping with `clock`.
    ///
    /// Returns the timestamp that was recorded.
    pub fn set_tracked_with_clock<T, C>(
        &self,
        key: &str,
        value: T,
        clock: &C,
    ) -> Result<Timestamp>
    where
        T: Trackable,
        C: Clock + ?Sized,
    {
        let now = clock.now();
        self.set_tracked(key, value, now)?;
        Ok(now)
    }

    // == Remove Tracked Value ==
    /// Removes both the value and the timestamp for `key`.
    ///
    /// Both removals are always attempted. Absent entries are not an error.
    /// If either removal fails, the first failure is returned.
    pub fn remove_tracked_value(&self, key: &str) -> Result<()> {
        let value_result = self.store.remove(key);
        let timestamp_result = self.store.remove(&timestamp_key(key));

        debug!("Removed tracked value '{}'", key);
        value_result.and(timestamp_result)
    }

    // == Remove Tracking ==
    /// Removes the timestamp for `key`, leaving any value in place.
    pub fn remove_tracking(&self, key: &str) -> Result<()> {
        self.store.remove(&timestamp_key(key))?;
        debug!("Removed tracking for '{}'", key);
        Ok(())
    }

    // == Tracked Entry ==
    /// Returns the timestamp and current value of `key`, or `None` if untracked.
    pub fn tracked_entry(&self, key: &str) -> Result<Option<TrackedEntry>> {
        let Some(timestamp) = self.timestamp(key)? else {
            return Ok(None);
        };

        Ok(Some(TrackedEntry {
            value: self.store.value(key)?,
            timestamp,
        }))
    }

    // == Age ==
    /// Returns how long before `now` the last tracked write happened.
    ///
    /// Negative if the timestamp is later than `now`.
    pub fn age(&self, key: &str, now: Timestamp) -> Result<Option<Duration>> {
        Ok(self.timestamp(key)?.map(|stamped| now - stamped))
    }
}
