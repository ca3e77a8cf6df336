//! Parley core crate - configuration, errors, and shared domain types.

pub mod config;
pub mod error;
pub mod types;

pub use config::ParleyConfig;
pub use error::{ParleyError, Result};
pub use types::{Analytics, Preference, Turn};
