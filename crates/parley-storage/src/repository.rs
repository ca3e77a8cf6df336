//! Repository implementations for SQLite-backed persistence.
//!
//! The persistence gateway: four operations (save turn, history, save
//! preference, analytics) against the conversations and user_preferences
//! tables, each a single autocommitted statement.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use parley_core::error::ParleyError;
use parley_core::types::{Analytics, Preference, Turn};

use crate::db::Database;

fn epoch_to_datetime(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

/// Repository for conversation turns.
pub struct TurnRepository {
    db: Arc<Database>,
}

impl TurnRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Append a turn to the conversations log. Returns the new row id.
    pub fn save(
        &self,
        user_message: &str,
        ai_response: &str,
        user_name: Option<&str>,
    ) -> Result<i64, ParleyError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO conversations (user_message, ai_response, user_name)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![user_message, ai_response, user_name],
            )
            .map_err(|e| ParleyError::Storage(format!("Failed to save turn: {}", e)))?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Fetch the most recent turns for a user, newest first.
    ///
    /// `id DESC` breaks ties between turns recorded in the same second, so
    /// a save followed immediately by a history read returns the saved
    /// turn first.
    pub fn history(&self, user_name: &str, limit: u32) -> Result<Vec<Turn>, ParleyError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, user_message, ai_response, user_name, created_at
                     FROM conversations
                     WHERE user_name = ?1
                     ORDER BY created_at DESC, id DESC
                     LIMIT ?2",
                )
                .map_err(|e| ParleyError::Storage(format!("History query prepare: {}", e)))?;

            let rows = stmt
                .query_map(rusqlite::params![user_name, limit], |row| {
                    Ok(Turn {
                        id: row.get(0)?,
                        user_message: row.get(1)?,
                        ai_response: row.get(2)?,
                        user_name: row.get(3)?,
                        created_at: epoch_to_datetime(row.get(4)?),
                    })
                })
                .map_err(|e| ParleyError::Storage(format!("History query: {}", e)))?;

            let mut turns = Vec::new();
            for row in rows {
                turns.push(row.map_err(|e| ParleyError::Storage(e.to_string()))?);
            }
            Ok(turns)
        })
    }

    /// Compute aggregate counters over the conversations table.
    pub fn analytics(&self) -> Result<Analytics, ParleyError> {
        self.db.with_conn(|conn| {
            let total_turns: i64 = conn
                .query_row("SELECT COUNT(*) FROM conversations", [], |row| row.get(0))
                .map_err(|e| ParleyError::Storage(format!("Analytics total: {}", e)))?;

            let unique_users: i64 = conn
                .query_row(
                    "SELECT COUNT(DISTINCT user_name) FROM conversations",
                    [],
                    |row| row.get(0),
                )
                .map_err(|e| ParleyError::Storage(format!("Analytics users: {}", e)))?;

            let turns_today: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM conversations
                     WHERE date(created_at, 'unixepoch') = date('now')",
                    [],
                    |row| row.get(0),
                )
                .map_err(|e| ParleyError::Storage(format!("Analytics today: {}", e)))?;

            Ok(Analytics {
                total_turns: total_turns as u64,
                unique_users: unique_users as u64,
                turns_today: turns_today as u64,
            })
        })
    }
}

/// Repository for user preference entries.
pub struct PreferenceRepository {
    db: Arc<Database>,
}

impl PreferenceRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Append a preference entry. Returns the new row id.
    pub fn save(&self, user_name: &str, key: &str, value: &str) -> Result<i64, ParleyError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO user_preferences (user_name, preference_key, preference_value)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![user_name, key, value],
            )
            .map_err(|e| ParleyError::Storage(format!("Failed to save preference: {}", e)))?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Fetch all preference entries for a user, newest first.
    pub fn for_user(&self, user_name: &str) -> Result<Vec<Preference>, ParleyError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, user_name, preference_key, preference_value, created_at
                     FROM user_preferences
                     WHERE user_name = ?1
                     ORDER BY created_at DESC, id DESC",
                )
                .map_err(|e| ParleyError::Storage(format!("Preference query prepare: {}", e)))?;

            let rows = stmt
                .query_map(rusqlite::params![user_name], |row| {
                    Ok(Preference {
                        id: row.get(0)?,
                        user_name: row.get(1)?,
                        key: row.get(2)?,
                        value: row.get(3)?,
                        created_at: epoch_to_datetime(row.get(4)?),
                    })
                })
                .map_err(|e| ParleyError::Storage(format!("Preference query: {}", e)))?;

            let mut prefs = Vec::new();
            for row in rows {
                prefs.push(row.map_err(|e| ParleyError::Storage(e.to_string()))?);
            }
            Ok(prefs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_repos() -> (TurnRepository, PreferenceRepository) {
        let db = Arc::new(Database::in_memory().unwrap());
        (
            TurnRepository::new(Arc::clone(&db)),
            PreferenceRepository::new(db),
        )
    }

    #[test]
    fn test_save_and_read_turn() {
        let (turns, _) = make_repos();

        let id = turns
            .save("who is Grace Hopper", "Search result: ...", Some("Alice"))
            .unwrap();
        assert!(id > 0);

        let history = turns.history("Alice", 5).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "who is Grace Hopper");
        assert_eq!(history[0].user_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_history_most_recent_first() {
        let (turns, _) = make_repos();

        for i in 0..3 {
            turns
                .save(&format!("message {}", i), "reply", Some("Bob"))
                .unwrap();
        }

        let history = turns.history("Bob", 10).unwrap();
        assert_eq!(history.len(), 3);
        // Inserts land within the same second; id DESC breaks the tie.
        assert_eq!(history[0].user_message, "message 2");
        assert_eq!(history[2].user_message, "message 0");
    }

    #[test]
    fn test_history_respects_limit() {
        let (turns, _) = make_repos();

        for i in 0..8 {
            turns
                .save(&format!("message {}", i), "reply", Some("Carol"))
                .unwrap();
        }

        let history = turns.history("Carol", 5).unwrap();
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn test_history_filters_by_user() {
        let (turns, _) = make_repos();

        turns.save("from alice", "reply", Some("Alice")).unwrap();
        turns.save("from bob", "reply", Some("Bob")).unwrap();
        turns.save("anonymous", "reply", None).unwrap();

        let history = turns.history("Alice", 10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "from alice");
    }

    #[test]
    fn test_save_then_history_returns_saved_pair_first() {
        let (turns, _) = make_repos();

        turns.save("older", "older reply", Some("Dana")).unwrap();
        turns
            .save("just saved", "just-saved reply", Some("Dana"))
            .unwrap();

        let history = turns.history("Dana", 5).unwrap();
        assert_eq!(history[0].user_message, "just saved");
        assert_eq!(history[0].ai_response, "just-saved reply");
    }

    #[test]
    fn test_analytics_counts() {
        let (turns, _) = make_repos();

        turns.save("a", "ra", Some("Alice")).unwrap();
        turns.save("b", "rb", Some("Alice")).unwrap();
        turns.save("c", "rc", Some("Bob")).unwrap();

        let analytics = turns.analytics().unwrap();
        assert_eq!(analytics.total_turns, 3);
        assert_eq!(analytics.unique_users, 2);
        assert_eq!(analytics.turns_today, 3);
    }

    #[test]
    fn test_analytics_monotonically_non_decreasing() {
        let (turns, _) = make_repos();

        let before = turns.analytics().unwrap();
        turns.save("a", "ra", Some("Alice")).unwrap();
        let after = turns.analytics().unwrap();

        assert!(after.total_turns >= before.total_turns);
        assert!(after.unique_users >= before.unique_users);
        assert!(after.turns_today >= before.turns_today);
        assert_eq!(after.total_turns, before.total_turns + 1);
    }

    #[test]
    fn test_analytics_empty_database() {
        let (turns, _) = make_repos();
        let analytics = turns.analytics().unwrap();
        assert_eq!(analytics.total_turns, 0);
        assert_eq!(analytics.unique_users, 0);
        assert_eq!(analytics.turns_today, 0);
    }

    #[test]
    fn test_save_and_read_preference() {
        let (_, prefs) = make_repos();

        prefs.save("Alice", "conversation_style", "friendly").unwrap();
        let entries = prefs.for_user("Alice").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "conversation_style");
        assert_eq!(entries[0].value, "friendly");
    }

    #[test]
    fn test_preferences_accumulate_history() {
        let (_, prefs) = make_repos();

        prefs.save("Alice", "conversation_style", "friendly").unwrap();
        prefs.save("Alice", "conversation_style", "formal").unwrap();

        let entries = prefs.for_user("Alice").unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first.
        assert_eq!(entries[0].value, "formal");
    }
}
