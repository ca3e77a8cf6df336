//! Application state shared across all route handlers.
//!
//! AppState holds references to all services and shared resources.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use parley_chat::Responder;
use parley_core::config::ParleyConfig;
use parley_search::SearchProvider;
use parley_storage::{Database, PreferenceRepository, TurnRepository};

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<ParleyConfig>,
    /// SQLite database for persistent storage.
    pub database: Arc<Database>,
    /// The router/responder handling chat turns.
    pub responder: Arc<Responder>,
    /// Turn repository for history and analytics lookups.
    pub turns: Arc<TurnRepository>,
    /// Preference repository for explicit preference writes.
    pub preferences: Arc<PreferenceRepository>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState from a configuration, an open database, and
    /// a search provider.
    pub fn new(
        config: ParleyConfig,
        database: Database,
        search: Arc<dyn SearchProvider>,
    ) -> Self {
        let database = Arc::new(database);
        let responder = Responder::new(
            config.chat.clone(),
            search,
            TurnRepository::new(Arc::clone(&database)),
            PreferenceRepository::new(Arc::clone(&database)),
        );

        Self {
            config: Arc::new(config),
            turns: Arc::new(TurnRepository::new(Arc::clone(&database))),
            preferences: Arc::new(PreferenceRepository::new(Arc::clone(&database))),
            responder: Arc::new(responder),
            database,
            start_time: Instant::now(),
        }
    }
}
