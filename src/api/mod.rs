//! API Module
//!
//! HTTP handlers and routing for the tracked defaults REST API.
//!
//! # Endpoints
//! - `PUT /defaults/:key` - Store a typed value and stamp it
//! - `GET /defaults/:key` - Read a value with its tracking state
//! - `DELETE /defaults/:key` - Remove a value and its timestamp
//! - `GET /tracking/:key` - Read a key's timestamp and age
//! - `DELETE /tracking/:key` - Remove a key's timestamp only
//! - `GET /stats` - Store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
