//! Parley storage crate - SQLite persistence for turns and preferences.
//!
//! Provides a WAL-mode SQLite database with versioned migrations and
//! repositories for the conversations and user_preferences tables.

pub mod db;
pub mod migrations;
pub mod repository;

pub use db::Database;
pub use repository::{PreferenceRepository, TurnRepository};
