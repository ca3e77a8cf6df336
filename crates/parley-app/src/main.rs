//! Parley application binary - composition root.
//!
//! Ties together all Parley crates into a single executable:
//! 1. Load configuration from TOML (with CLI and env overrides)
//! 2. Open the SQLite database and run migrations
//! 3. Build the search client and the chat responder
//! 4. Start the axum HTTP server with the embedded chat page

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use parley_api::routes;
use parley_api::state::AppState;
use parley_core::config::ParleyConfig;
use parley_search::SearchClient;
use parley_storage::Database;

use crate::cli::CliArgs;

/// Expand ~ to the home directory in a path string.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if let Some(rest) = data_dir.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(data_dir)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the log level can come from the file.
    let config_file = args.resolve_config_path();
    let mut config = ParleyConfig::load_or_default(&config_file);

    if let Some(dir) = args.resolve_data_dir() {
        config.general.data_dir = dir;
    }
    config.general.port = args.resolve_port(config.general.port);
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }
    if let Ok(key) = std::env::var("PARLEY_SEARCH_API_KEY") {
        config.search.api_key = key;
    }

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Storage.
    let data_dir = resolve_data_dir(&config.general.data_dir);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }

    let db_path = data_dir.join(&config.storage.database_file);
    let db = Database::new(&db_path)?;
    tracing::info!(path = %db_path.display(), "SQLite database opened");

    // Search client.
    if config.search.api_key.is_empty() {
        tracing::warn!(
            "No search API key configured — search queries will fail. \
             Set [search] api_key in the config file or PARLEY_SEARCH_API_KEY."
        );
    }
    let search = Arc::new(SearchClient::new(config.search.clone()));

    let port = config.general.port;
    let state = AppState::new(config, db, search);

    tracing::info!("Chat page at http://127.0.0.1:{}/ui", port);

    routes::start_server(state).await?;

    Ok(())
}
