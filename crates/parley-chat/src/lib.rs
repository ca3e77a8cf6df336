//! Parley chat crate - the router/responder.
//!
//! Classifies each utterance as "needs external search" or "conversational",
//! produces a reply (provider answer or canned response), tracks in-memory
//! sessions, and records the turn through the persistence gateway.

pub mod canned;
pub mod classify;
pub mod error;
pub mod names;
pub mod responder;
pub mod session;

pub use classify::{classify, Route};
pub use error::ChatError;
pub use names::extract_name;
pub use responder::{ChatOutcome, Responder};
pub use session::{ChatMessage, Role, SessionStore};
