//! Parley API crate - axum HTTP server and route handlers.
//!
//! Provides the REST API for the Parley assistant: the chat endpoint,
//! history lookup, preference writes, analytics counters, health checks,
//! and the embedded chat page.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
