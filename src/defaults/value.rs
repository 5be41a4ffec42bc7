//! Default Value Module
//!
//! Defines the typed slots a defaults store can hold and the closed set of
//! types a caller may write through the tracking API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

// == Default Value ==
/// A value held by the defaults store in one of its native typed slots.
///
/// Serialized as `{"type": "double", "value": 0.5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// Absolute URL
    Url(Url),
    /// Opaque object (any JSON document)
    Object(serde_json::Value),
    /// Point in time. This is the slot tracking timestamps are written to.
    Date(DateTime<Utc>),
}

impl DefaultValue {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            DefaultValue::Bool(_) => "bool",
            DefaultValue::Integer(_) => "integer",
            DefaultValue::Float(_) => "float",
            DefaultValue::Double(_) => "double",
            DefaultValue::Url(_) => "url",
            DefaultValue::Object(_) => "object",
            DefaultValue::Date(_) => "date",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DefaultValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Reads either floating point slot, narrowing a double.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            DefaultValue::Float(f) => Some(*f),
            DefaultValue::Double(d) => Some(*d as f32),
            _ => None,
        }
    }

    /// Reads either floating point slot, widening a float.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            DefaultValue::Double(d) => Some(*d),
            DefaultValue::Float(f) => Some(f64::from(*f)),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            DefaultValue::Url(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            DefaultValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            DefaultValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

// == Trackable ==
mod sealed {
    pub trait Sealed {}
}

/// A value type that can be written through the tracking API.
///
/// Implemented for `bool`, `i64`, `f32`, `f64`, `Url` and `serde_json::Value`.
/// The set is closed; dates are reserved for timestamps.
pub trait Trackable: sealed::Sealed {
    /// Converts into the store slot matching this type.
    fn into_default_value(self) -> DefaultValue;
}

impl sealed::Sealed for bool {}
impl Trackable for bool {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Bool(self)
    }
}

impl sealed::Sealed for i64 {}
impl Trackable for i64 {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Integer(self)
    }
}

impl sealed::Sealed for f32 {}
impl Trackable for f32 {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Float(self)
    }
}

impl sealed::Sealed for f64 {}
impl Trackable for f64 {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Double(self)
    }
}

impl sealed::Sealed for Url {}
impl Trackable for Url {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Url(self)
    }
}

impl sealed::Sealed for serde_json::Value {}
impl Trackable for serde_json::Value {
    fn into_default_value(self) -> DefaultValue {
        DefaultValue::Object(self)
    }
}
