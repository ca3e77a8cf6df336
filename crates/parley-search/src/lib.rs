//! Parley search crate - HTTP client for the web-search provider.
//!
//! Issues a single GET per query, deserializes the provider's JSON body,
//! and extracts a best-effort answer using a fixed priority order over the
//! knowledge graph, organic results, and answer box.

pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use client::{SearchClient, SearchProvider};
pub use error::SearchError;
pub use extract::extract_answer;
pub use types::{AnswerBox, KnowledgeGraph, OrganicResult, SearchResponse};
