//! In-Memory Defaults Module
//!
//! HashMap-backed defaults store with a fixed entry capacity.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use crate::defaults::{DefaultValue, DefaultsStats, DefaultsStore};
use crate::error::{DefaultsError, Result};

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, DefaultValue>,
    stats: DefaultsStats,
}

// == Memory Defaults ==
/// In-memory defaults database shared across threads.
///
/// Writing a new key once `max_entries` keys are stored fails with
/// [`DefaultsError::StoreFull`]; overwriting an existing key always succeeds.
#[derive(Debug)]
pub struct MemoryDefaults {
    inner: RwLock<Inner>,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl MemoryDefaults {
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` keys.
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            max_entries,
        }
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| DefaultsError::Internal("defaults lock poisoned".to_string()))
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> Result<DefaultsStats> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DefaultsError::Internal("defaults lock poisoned".to_string()))?;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        Ok(stats)
    }

    // == Length ==
    /// Returns the number of stored entries, timestamps included.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.entries.len())
            .unwrap_or_else(|e| e.into_inner().entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries this store accepts.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }
}

impl DefaultsStore for MemoryDefaults {
    fn value(&self, key: &str) -> Result<Option<DefaultValue>> {
        // Write lock: lookups update the read counter
        let mut inner = self.write()?;
        inner.stats.record_read();
        Ok(inner.entries.get(key).cloned())
    }

    fn set_value(&self, key: &str, value: DefaultValue) -> Result<()> {
        let mut inner = self.write()?;

        let is_overwrite = inner.entries.contains_key(key);
        if !is_overwrite && inner.entries.len() >= self.max_entries {
            return Err(DefaultsError::StoreFull(format!(
                "capacity of {} entries reached",
                self.max_entries
            )));
        }

        inner.entries.insert(key.to_string(), value);
        inner.stats.record_write();
        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut inner = self.write()?;
        inner.entries.remove(key);
        inner.stats.record_removal();
        let total = inner.entries.len();
        inner.stats.set_total_entries(total);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_new() {
        let store = MemoryDefaults::new(10);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 10);
    }

    #[test]
    fn test_memory_set_and_get() {
        let store = MemoryDefaults::new(10);

        store.set_value("flag", DefaultValue::Bool(false)).unwrap();

        assert_eq!(store.value("flag").unwrap(), Some(DefaultValue::Bool(false)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_overwrite() {
        let store = MemoryDefaults::new(10);

        store.set_value("count", DefaultValue::Integer(1)).unwrap();
        store.set_value("count", DefaultValue::Integer(2)).unwrap();

        assert_eq!(store.value("count").unwrap(), Some(DefaultValue::Integer(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_remove_is_idempotent() {
        let store = MemoryDefaults::new(10);
        store.set_value("count", DefaultValue::Integer(1)).unwrap();

        store.remove("count").unwrap();
        store.remove("count").unwrap();
        store.remove("never_set").unwrap();

        assert!(store.value("count").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_capacity_rejects_new_keys() {
        let store = MemoryDefaults::new(2);

        store.set_value("a", DefaultValue::Integer(1)).unwrap();
        store.set_value("b", DefaultValue::Integer(2)).unwrap();

        let result = store.set_value("c", DefaultValue::Integer(3));
        assert!(matches!(result, Err(DefaultsError::StoreFull(_))));
        assert!(store.value("c").unwrap().is_none());

        // Overwrites still succeed at capacity
        store.set_value("a", DefaultValue::Integer(10)).unwrap();
        assert_eq!(store.value("a").unwrap(), Some(DefaultValue::Integer(10)));
    }

    #[test]
    fn test_memory_stats() {
        let store = MemoryDefaults::new(10);

        store.set_value("a", DefaultValue::Bool(true)).unwrap();
        store.value("a").unwrap();
        store.value("missing").unwrap();
        store.remove("a").unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.reads, 2);
        assert_eq!(stats.removals, 1);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_memory_rejected_write_not_counted() {
        let store = MemoryDefaults::new(0);

        assert!(store.set_value("a", DefaultValue::Bool(true)).is_err());
        assert_eq!(store.stats().unwrap().writes, 0);
    }

    #[test]
    fn test_memory_concurrent_writers() {
        let store = Arc::new(MemoryDefaults::new(1000));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .set_value(&format!("t{}_{}", t, i), DefaultValue::Integer(i))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
    }
}
