//! The router/responder: central coordinator for one chat turn.
//!
//! Validates the utterance, learns the user name, routes to search or to
//! the canned-reply table, and records the turn through the persistence
//! gateway. Search and storage failures degrade to displayable output;
//! they never abort the turn.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use parley_core::config::ChatConfig;
use parley_search::{extract_answer, SearchError, SearchProvider};
use parley_storage::{PreferenceRepository, TurnRepository};

use crate::canned;
use crate::classify::{classify, Route};
use crate::error::ChatError;
use crate::names;
use crate::session::SessionStore;

/// Preference recorded when a session first learns a user name.
const DEFAULT_PREFERENCE: (&str, &str) = ("conversation_style", "friendly");

/// The result of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// The reply to display.
    pub reply: String,
    /// The session the turn belongs to (new or existing).
    pub session_id: Uuid,
    /// The user name known for this session, if any.
    pub user_name: Option<String>,
    /// Whether classification routed to the search provider.
    pub routed_to_search: bool,
    /// Whether the turn was persisted.
    pub saved: bool,
}

/// Coordinates classification, search, canned replies, and persistence.
pub struct Responder {
    search: Arc<dyn SearchProvider>,
    turns: TurnRepository,
    preferences: PreferenceRepository,
    sessions: SessionStore,
    config: ChatConfig,
}

impl Responder {
    pub fn new(
        config: ChatConfig,
        search: Arc<dyn SearchProvider>,
        turns: TurnRepository,
        preferences: PreferenceRepository,
    ) -> Self {
        let sessions = SessionStore::new(config.session_timeout_minutes);
        Self {
            search,
            turns,
            preferences,
            sessions,
            config,
        }
    }

    /// Handle one user utterance and produce a reply.
    ///
    /// Side effect: when the session has a user name, the turn is
    /// persisted unconditionally. A storage failure does not block the
    /// reply; it surfaces as `saved: false` and a warning.
    pub async fn respond(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<ChatOutcome, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        let sid = self.sessions.resolve(session_id)?;

        // Learn the user name before composing the reply so greetings and
        // this turn's persistence already use it.
        if let Some(name) = names::extract_name(message) {
            if self.sessions.set_user_name(sid, &name)? {
                debug!(name = %name, "Learned user name");
                let (key, value) = DEFAULT_PREFERENCE;
                if let Err(e) = self.preferences.save(&name, key, value) {
                    warn!(error = %e, "Failed to save default preference");
                }
            }
        }
        let user_name = self.sessions.user_name(sid)?;

        let route = classify(message);
        let routed_to_search = route == Route::Search;

        let reply = match route {
            Route::Search => match self.search.search(message).await {
                Ok(response) => extract_answer(&response, message),
                Err(e @ SearchError::Transport(_)) => {
                    warn!(error = %e, "Search request failed");
                    format!("I couldn't reach the search service ({}). Please try again.", e)
                }
                Err(e @ SearchError::Parse(_)) => {
                    warn!(error = %e, "Search response unreadable");
                    format!("The search service sent back something I couldn't read ({}).", e)
                }
            },
            Route::Conversational => canned::canned_reply(message, user_name.as_deref()),
        };

        let mut saved = false;
        if let Some(ref name) = user_name {
            match self.turns.save(message, &reply, Some(name)) {
                Ok(_) => saved = true,
                Err(e) => warn!(error = %e, "Failed to save turn"),
            }
        }

        self.sessions.record(sid, message, &reply)?;

        Ok(ChatOutcome {
            reply,
            session_id: sid,
            user_name,
            routed_to_search,
            saved,
        })
    }
}
