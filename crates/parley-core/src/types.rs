//! Shared domain types.
//!
//! A [`Turn`] is one recorded (user message, assistant response) pair; a
//! [`Preference`] is one append-only key/value entry attributed to a user
//! name. Both are owned by the storage layer once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded exchange between a user and the assistant.
///
/// Immutable once stored; the conversations table is an append-only log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Row identifier assigned at insert.
    pub id: i64,
    /// The raw user utterance.
    pub user_message: String,
    /// The response the assistant produced.
    pub ai_response: String,
    /// Free-text correlation key; not an identity.
    pub user_name: Option<String>,
    /// Assigned by the database at insert.
    pub created_at: DateTime<Utc>,
}

/// One stored user preference entry.
///
/// Multiple entries per `(user_name, key)` are allowed; history accumulates
/// and last-write is not reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    pub id: i64,
    pub user_name: String,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters over the conversations table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analytics {
    /// Total turns ever recorded.
    pub total_turns: u64,
    /// Distinct non-null user names seen.
    pub unique_users: u64,
    /// Turns recorded today (UTC day).
    pub turns_today: u64,
}
