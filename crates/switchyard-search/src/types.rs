// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Serper search API.

use serde::{Deserialize, Serialize};

/// Search request payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub num: usize,
    pub hl: String,
    pub gl: String,
}

/// Search response envelope. Every section is optional; the provider omits
/// sections that do not apply to the query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
    pub answer_box: Option<AnswerBox>,
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    pub related_searches: Vec<RelatedSearch>,
}

/// One organic search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
}

/// The provider's direct-answer box.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerBox {
    pub answer: Option<String>,
    pub snippet: Option<String>,
}

/// Knowledge-graph sidebar content.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeGraph {
    pub description: Option<String>,
}

/// One related-search suggestion.
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedSearch {
    pub query: Option<String>,
}
