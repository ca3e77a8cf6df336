//! Best-effort answer extraction from a provider response.
//!
//! Fields are consumed in a fixed priority order: knowledge-graph
//! description, knowledge-graph title, organic snippets, answer box,
//! then a generic fallback. No relevance scoring beyond "first usable
//! field found".

use crate::types::SearchResponse;

/// Organic snippets shorter than this are skipped as unusable.
const MIN_SNIPPET_LEN: usize = 20;

/// Only the first two organic results are considered.
const MAX_ORGANIC_SCANNED: usize = 2;

/// Extract a displayable answer from a provider response.
///
/// Always returns a string; when no field is usable, the result is a
/// generic "found but unclear" message naming the query.
pub fn extract_answer(response: &SearchResponse, query: &str) -> String {
    if let Some(ref kg) = response.knowledge_graph {
        if let Some(ref description) = kg.description {
            return format!("Search result: {}", description);
        }
        if let Some(ref title) = kg.title {
            return format!("{}: Information found", title);
        }
    }

    for result in response.organic_results.iter().take(MAX_ORGANIC_SCANNED) {
        if let Some(ref snippet) = result.snippet {
            if snippet.len() > MIN_SNIPPET_LEN {
                return format!("Search result: {}", snippet);
            }
        }
    }

    if let Some(ref answer_box) = response.answer_box {
        if let Some(ref answer) = answer_box.answer {
            return format!("Answer: {}", answer);
        }
        if let Some(ref snippet) = answer_box.snippet {
            return format!("Answer: {}", snippet);
        }
    }

    format!(
        "I found information about '{}' but couldn't extract a clear answer. \
         Try rephrasing your question.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerBox, KnowledgeGraph, OrganicResult};

    fn organic(snippet: &str) -> OrganicResult {
        OrganicResult {
            snippet: Some(snippet.to_string()),
        }
    }

    #[test]
    fn test_knowledge_graph_description_wins() {
        let response = SearchResponse {
            knowledge_graph: Some(KnowledgeGraph {
                title: Some("Ada Lovelace".to_string()),
                description: Some("English mathematician and writer".to_string()),
            }),
            organic_results: vec![organic("a long enough organic snippet here")],
            answer_box: Some(AnswerBox {
                answer: Some("1815".to_string()),
                snippet: None,
            }),
        };

        assert_eq!(
            extract_answer(&response, "ada lovelace"),
            "Search result: English mathematician and writer"
        );
    }

    #[test]
    fn test_knowledge_graph_title_without_description() {
        let response = SearchResponse {
            knowledge_graph: Some(KnowledgeGraph {
                title: Some("Ada Lovelace".to_string()),
                description: None,
            }),
            ..Default::default()
        };

        assert_eq!(
            extract_answer(&response, "ada lovelace"),
            "Ada Lovelace: Information found"
        );
    }

    #[test]
    fn test_organic_snippet_used_when_no_knowledge_graph() {
        let response = SearchResponse {
            organic_results: vec![organic("a sufficiently long snippet about the topic")],
            ..Default::default()
        };

        assert_eq!(
            extract_answer(&response, "topic"),
            "Search result: a sufficiently long snippet about the topic"
        );
    }

    #[test]
    fn test_short_organic_snippets_skipped() {
        let response = SearchResponse {
            organic_results: vec![
                organic("too short"),
                organic("this second snippet is long enough to use"),
            ],
            ..Default::default()
        };

        assert_eq!(
            extract_answer(&response, "topic"),
            "Search result: this second snippet is long enough to use"
        );
    }

    #[test]
    fn test_only_first_two_organic_results_scanned() {
        let response = SearchResponse {
            organic_results: vec![
                organic("short"),
                organic("tiny"),
                organic("the third snippet is long enough but never reached"),
            ],
            answer_box: Some(AnswerBox {
                answer: Some("42".to_string()),
                snippet: None,
            }),
            ..Default::default()
        };

        // Falls through to the answer box, not the third organic result.
        assert_eq!(extract_answer(&response, "q"), "Answer: 42");
    }

    #[test]
    fn test_answer_box_answer_before_snippet() {
        let response = SearchResponse {
            answer_box: Some(AnswerBox {
                answer: Some("direct answer".to_string()),
                snippet: Some("snippet answer".to_string()),
            }),
            ..Default::default()
        };

        assert_eq!(extract_answer(&response, "q"), "Answer: direct answer");
    }

    #[test]
    fn test_answer_box_snippet_fallback() {
        let response = SearchResponse {
            answer_box: Some(AnswerBox {
                answer: None,
                snippet: Some("snippet answer".to_string()),
            }),
            ..Default::default()
        };

        assert_eq!(extract_answer(&response, "q"), "Answer: snippet answer");
    }

    #[test]
    fn test_empty_response_yields_fallback_naming_query() {
        let response = SearchResponse::default();
        let answer = extract_answer(&response, "quantum computing");
        assert!(answer.contains("'quantum computing'"));
        assert!(answer.contains("rephrasing"));
    }

    #[test]
    fn test_snippet_exactly_at_threshold_skipped() {
        // Length must be strictly greater than 20.
        let exactly_twenty = "x".repeat(MIN_SNIPPET_LEN);
        let response = SearchResponse {
            organic_results: vec![OrganicResult {
                snippet: Some(exactly_twenty),
            }],
            ..Default::default()
        };

        let answer = extract_answer(&response, "q");
        assert!(answer.contains("couldn't extract"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let response = SearchResponse {
            organic_results: vec![organic("a stable snippet that is long enough")],
            ..Default::default()
        };
        let a = extract_answer(&response, "q");
        let b = extract_answer(&response, "q");
        assert_eq!(a, b);
    }
}
