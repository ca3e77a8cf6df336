//! Typed model of the search provider's JSON response.
//!
//! Every field is optional: the provider omits whole sections depending on
//! the query, and unknown fields are ignored.

use serde::Deserialize;

/// Top-level provider response. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    pub answer_box: Option<AnswerBox>,
}

/// Structured entity summary, when the provider recognizes the subject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeGraph {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// One organic search hit. Only the snippet is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    pub snippet: Option<String>,
}

/// Direct-answer section for factual queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerBox {
    pub answer: Option<String>,
    pub snippet: Option<String>,
}
