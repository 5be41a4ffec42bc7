//! Tracked Defaults - timestamped writes for a typed defaults store
//!
//! Wraps a key-value defaults database so every tracked write records when it
//! happened, letting callers tell "never set" apart from "set to zero".

pub mod api;
pub mod config;
pub mod defaults;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use defaults::{DefaultsStore, TrackedStore};
pub use error::{DefaultsError, Result};
