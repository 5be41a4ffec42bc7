//! Request DTOs for the defaults server API
//!
//! Defines the structure of incoming HTTP request bodies and key validation.

use serde::Deserialize;

use crate::defaults::{is_reserved_key, DefaultValue, MAX_KEY_LENGTH};

/// Checks a caller key taken from a request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    if is_reserved_key(key) {
        return Some("Key uses the reserved timestamp namespace".to_string());
    }
    None
}

/// Request body for a tracked write (PUT /defaults/:key)
///
/// ```json
/// {"value": {"type": "bool", "value": false}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SetTrackedRequest {
    /// The typed value to store
    pub value: DefaultValue,
}

impl SetTrackedRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let DefaultValue::Date(_) = self.value {
            return Some("Date values cannot be written through the tracking API".to_string());
        }
        None
    }
}
