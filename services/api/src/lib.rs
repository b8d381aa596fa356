//! HTTP API for the user registry
//!
//! Thin transport over [`common::UserRegistry`]: handlers deserialize
//! request bodies, call the registry, and translate its errors into
//! status codes.

pub mod config;
pub mod error;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod telemetry;

pub use routes::create_router;
pub use state::AppState;
