//! Request and Response models for the defaults server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_key, SetTrackedRequest};
pub use responses::{
    ErrorResponse, HealthResponse, RemoveResponse, SetTrackedResponse, StatsResponse,
    TrackingResponse, ValueResponse,
};
