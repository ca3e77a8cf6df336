//! Database schema migrations.
//!
//! Applies the initial schema: the conversations and user_preferences
//! tables plus the schema_migrations tracking table.

use rusqlite::Connection;
use tracing::info;

use parley_core::error::ParleyError;

/// Run all pending database migrations.
///
/// Currently implements the initial schema (version 1). Future migrations
/// can be added by checking the current version and applying incremental
/// changes.
pub fn run_migrations(conn: &Connection) -> Result<(), ParleyError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| ParleyError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| ParleyError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: initial_schema");
    }

    Ok(())
}

/// Version 1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<(), ParleyError> {
    conn.execute_batch(
        "
        -- Append-only log of (user message, assistant response) pairs.
        CREATE TABLE IF NOT EXISTS conversations (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_message    TEXT NOT NULL,
            ai_response     TEXT NOT NULL,
            user_name       TEXT,
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_conversations_user
            ON conversations (user_name, created_at DESC)
            WHERE user_name IS NOT NULL;

        CREATE INDEX IF NOT EXISTS idx_conversations_created_at
            ON conversations (created_at DESC);

        -- Append-only user preference entries. Duplicate (user_name, key)
        -- rows are allowed; history accumulates.
        CREATE TABLE IF NOT EXISTS user_preferences (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            user_name         TEXT NOT NULL,
            preference_key    TEXT NOT NULL,
            preference_value  TEXT NOT NULL,
            created_at        INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_preferences_user
            ON user_preferences (user_name, created_at DESC);

        -- Record migration.
        INSERT OR IGNORE INTO schema_migrations (version, name) VALUES (1, 'initial_schema');
        ",
    )
    .map_err(|e| ParleyError::Storage(format!("Failed to apply migration v1: {}", e)))?;

    Ok(())
}
