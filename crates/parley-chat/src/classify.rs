//! Search-trigger classification.
//!
//! The trigger tables are explicit ordered lists so classification order
//! is deterministic and testable. Any single match routes to search;
//! these checks run before any canned-reply lookup, and that precedence
//! is load-bearing (a greeting containing "how" routes to search).

/// Question-style prefixes that always trigger search.
pub const QUESTION_PREFIXES: &[&str] = &[
    "who is", "what is", "where is", "when is", "why is", "how to",
    "who are", "what are", "where are", "when are", "why are", "how are",
    "who was", "what was", "where was", "when was", "why was", "how was",
    "define", "explain", "tell me about",
];

/// Topic substrings that trigger search anywhere in the utterance.
pub const SEARCH_TOPICS: &[&str] = &[
    "elon musk", "bill gates", "albert einstein", "steve jobs",
    "artificial intelligence", "machine learning", "quantum computing",
    "current", "latest", "news", "today", "weather", "price of",
    "python", "javascript", "programming", "coding",
];

/// Bare interrogative words, matched as substrings anywhere in the text.
pub const INTERROGATIVES: &[&str] = &["who", "what", "where", "when", "why", "how"];

/// Where an utterance is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward to the external search provider.
    Search,
    /// Handle with the canned-reply table.
    Conversational,
}

/// Classify an utterance.
///
/// Routes to [`Route::Search`] when any of the following holds for the
/// lower-cased, trimmed utterance:
/// 1. it starts with a question-style prefix;
/// 2. it contains a search topic substring;
/// 3. it contains a question mark or a bare interrogative word.
pub fn classify(utterance: &str) -> Route {
    let lower = utterance.trim().to_lowercase();

    if QUESTION_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return Route::Search;
    }

    if SEARCH_TOPICS.iter().any(|t| lower.contains(t)) {
        return Route::Search;
    }

    if lower.contains('?') || INTERROGATIVES.iter().any(|w| lower.contains(w)) {
        return Route::Search;
    }

    Route::Conversational
}
