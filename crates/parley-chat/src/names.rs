//! Name extraction from user utterances.
//!
//! Scans the lower-cased utterance against a fixed list of introduction
//! patterns in priority order and returns the first captured word,
//! title-cased.

use std::sync::LazyLock;

use regex::Regex;

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"my name is (\w+)",
        r"i am (\w+)",
        r"call me (\w+)",
        r"i'm (\w+)",
        r"name's (\w+)",
        r"this is (\w+)",
        r"you can call me (\w+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid name pattern"))
    .collect()
});

/// Extract a user name from an utterance, if it contains an introduction.
///
/// Patterns are tried in a fixed priority order; the first capture wins.
pub fn extract_name(utterance: &str) -> Option<String> {
    let lower = utterance.to_lowercase();
    for re in NAME_PATTERNS.iter() {
        if let Some(caps) = re.captures(&lower) {
            if let Some(m) = caps.get(1) {
                return Some(title_case(m.as_str()));
            }
        }
    }
    None
}

/// Uppercase the first character, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
