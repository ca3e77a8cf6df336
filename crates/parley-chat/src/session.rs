//! In-memory chat sessions.
//!
//! A session holds the message transcript and the learned user name for
//! the lifetime of one UI session. Sessions are never persisted as a
//! unit; only individual turns reach the database.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ChatError;

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in a session transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One live conversation.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub started_at: i64,
    pub last_message_at: i64,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            user_name: None,
            messages: Vec::new(),
            started_at: now,
            last_message_at: now,
        }
    }
}

/// Thread-safe store of live sessions with inactivity expiry.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    timeout_minutes: u32,
}

impl SessionStore {
    pub fn new(timeout_minutes: u32) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            timeout_minutes,
        }
    }

    /// Resolve a session id: reuse the requested session if it exists and
    /// has not expired, otherwise create a fresh one.
    pub fn resolve(&self, requested: Option<Uuid>) -> Result<Uuid, ChatError> {
        let mut sessions = self.lock()?;

        if let Some(id) = requested {
            if let Some(session) = sessions.get(&id) {
                if !self.is_expired(session) {
                    return Ok(id);
                }
                sessions.remove(&id);
            }
        }

        let session = Session::new();
        let id = session.id;
        sessions.insert(id, session);
        Ok(id)
    }

    /// The user name learned for a session, if any.
    pub fn user_name(&self, id: Uuid) -> Result<Option<String>, ChatError> {
        let sessions = self.lock()?;
        Ok(sessions.get(&id).and_then(|s| s.user_name.clone()))
    }

    /// Set the session's user name if it has none yet.
    ///
    /// Returns true when the name was newly learned.
    pub fn set_user_name(&self, id: Uuid, name: &str) -> Result<bool, ChatError> {
        let mut sessions = self.lock()?;
        match sessions.get_mut(&id) {
            Some(session) if session.user_name.is_none() => {
                session.user_name = Some(name.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Append a user/assistant message pair to the transcript.
    pub fn record(&self, id: Uuid, user_message: &str, reply: &str) -> Result<(), ChatError> {
        let mut sessions = self.lock()?;
        if let Some(session) = sessions.get_mut(&id) {
            session.messages.push(ChatMessage {
                role: Role::User,
                content: user_message.to_string(),
            });
            session.messages.push(ChatMessage {
                role: Role::Assistant,
                content: reply.to_string(),
            });
            session.last_message_at = Utc::now().timestamp();
        }
        Ok(())
    }

    /// Snapshot of a session's transcript.
    pub fn messages(&self, id: Uuid) -> Result<Vec<ChatMessage>, ChatError> {
        let sessions = self.lock()?;
        Ok(sessions.get(&id).map(|s| s.messages.clone()).unwrap_or_default())
    }

    fn is_expired(&self, session: &Session) -> bool {
        let timeout_secs = i64::from(self.timeout_minutes) * 60;
        Utc::now().timestamp() - session.last_message_at > timeout_secs
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Session>>, ChatError> {
        self.sessions
            .lock()
            .map_err(|e| ChatError::Storage(format!("session lock poisoned: {}", e)))
    }
}
