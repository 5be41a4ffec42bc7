//! Defaults Store Contract
//!
//! The primitive get/set/remove operations the tracking layer needs from an
//! underlying defaults database, with typed accessors layered on top.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;

use crate::defaults::DefaultValue;
use crate::error::Result;

// == Defaults Store ==
/// A string-keyed, process-wide shared defaults database.
///
/// Implementations own persistence and synchronization. A single `set_value`
/// or `remove` is the unit of serialization for its key.
///
/// Typed getters follow the defaults convention: `bool`, `integer`, `float`
/// and `double` return the zero value when the key is absent or holds another
/// type, so they cannot tell "unset" from "set to zero".
pub trait DefaultsStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn value(&self, key: &str) -> Result<Option<DefaultValue>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&self, key: &str, value: DefaultValue) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.value(key)?.is_some())
    }

    // == Typed Getters ==
    fn bool(&self, key: &str) -> Result<bool> {
        Ok(self
            .value(key)?
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }

    fn integer(&self, key: &str) -> Result<i64> {
        Ok(self.value(key)?.and_then(|v| v.as_integer()).unwrap_or(0))
    }

    fn float(&self, key: &str) -> Result<f32> {
        Ok(self.value(key)?.and_then(|v| v.as_float()).unwrap_or(0.0))
    }

    fn double(&self, key: &str) -> Result<f64> {
        Ok(self.value(key)?.and_then(|v| v.as_double()).unwrap_or(0.0))
    }

    fn url(&self, key: &str) -> Result<Option<Url>> {
        Ok(self.value(key)?.and_then(|v| v.as_url().cloned()))
    }

    fn object(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.value(key)?.and_then(|v| match v {
            DefaultValue::Object(o) => Some(o),
            _ => None,
        }))
    }

    fn date(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.value(key)?.and_then(|v| v.as_date()))
    }

    // == Typed Setters ==
    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set_value(key, DefaultValue::Bool(value))
    }

    fn set_integer(&self, key: &str, value: i64) -> Result<()> {
        self.set_value(key, DefaultValue::Integer(value))
    }

    fn set_float(&self, key: &str, value: f32) -> Result<()> {
        self.set_value(key, DefaultValue::Float(value))
    }

    fn set_double(&self, key: &str, value: f64) -> Result<()> {
        self.set_value(key, DefaultValue::Double(value))
    }

    fn set_url(&self, key: &str, value: Url) -> Result<()> {
        self.set_value(key, DefaultValue::Url(value))
    }

    fn set_object(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.set_value(key, DefaultValue::Object(value))
    }

    fn set_date(&self, key: &str, value: DateTime<Utc>) -> Result<()> {
        self.set_value(key, DefaultValue::Date(value))
    }
}

impl<S: DefaultsStore + ?Sized> DefaultsStore for Arc<S> {
    fn value(&self, key: &str) -> Result<Option<DefaultValue>> {
        (**self).value(key)
    }

    fn set_value(&self, key: &str, value: DefaultValue) -> Result<()> {
        (**self).set_value(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
