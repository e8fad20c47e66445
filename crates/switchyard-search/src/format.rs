// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of provider responses into user-facing text.

use chrono::Local;

use crate::types::SearchResponse;

/// Format a search response as markdown.
///
/// Renders the answer box (when present), the top three organic results,
/// knowledge-graph facts, and up to three related searches, ending with a
/// completion timestamp. An empty organic section yields a no-results
/// message instead.
pub fn format_results(response: &SearchResponse, query: &str) -> String {
    if response.organic.is_empty() {
        return "No search results found for your query.".to_string();
    }

    let mut text = format!("**Web Search Results for: '{query}'**\n\n");

    if let Some(answer_box) = &response.answer_box {
        if let Some(answer) = answer_box.answer.as_deref().or(answer_box.snippet.as_deref()) {
            text.push_str(&format!("**Quick Answer:** {answer}\n\n"));
        }
    }

    text.push_str("**Top Results:**\n\n");
    for (i, result) in response.organic.iter().take(3).enumerate() {
        let title = result.title.as_deref().unwrap_or("No title");
        let snippet = result
            .snippet
            .as_deref()
            .unwrap_or("No description available");
        text.push_str(&format!("**{}. {title}**\n{snippet}\n", i + 1));
        if let Some(link) = result.link.as_deref() {
            text.push_str(&format!("Source: {link}\n\n"));
        } else {
            text.push('\n');
        }
    }

    if let Some(kg) = &response.knowledge_graph {
        if let Some(description) = kg.description.as_deref() {
            text.push_str(&format!("\n**Quick Facts:** {description}\n"));
        }
    }

    if !response.related_searches.is_empty() {
        text.push_str("\n**Related Searches:**\n");
        for related in response.related_searches.iter().take(3) {
            if let Some(query) = related.query.as_deref() {
                text.push_str(&format!("- {query}\n"));
            }
        }
    }

    text.push_str(&format!(
        "\n*Search completed at {}*",
        Local::now().format("%H:%M:%S")
    ));

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerBox, KnowledgeGraph, OrganicResult, RelatedSearch};

    fn organic(title: &str) -> OrganicResult {
        OrganicResult {
            title: Some(title.to_string()),
            snippet: Some(format!("{title} snippet")),
            link: Some(format!("https://example.com/{title}")),
        }
    }

    #[test]
    fn empty_organic_yields_no_results_message() {
        let response = SearchResponse::default();
        assert_eq!(
            format_results(&response, "whatever"),
            "No search results found for your query."
        );
    }

    #[test]
    fn renders_top_three_results_only() {
        let response = SearchResponse {
            organic: vec![organic("a"), organic("b"), organic("c"), organic("d")],
            ..SearchResponse::default()
        };
        let text = format_results(&response, "q");
        assert!(text.contains("**1. a**"));
        assert!(text.contains("**3. c**"));
        assert!(!text.contains("**4. d**"));
    }

    #[test]
    fn answer_box_prefers_answer_over_snippet() {
        let response = SearchResponse {
            organic: vec![organic("a")],
            answer_box: Some(AnswerBox {
                answer: Some("direct".into()),
                snippet: Some("fallback".into()),
            }),
            ..SearchResponse::default()
        };
        let text = format_results(&response, "q");
        assert!(text.contains("**Quick Answer:** direct"));
        assert!(!text.contains("fallback"));
    }

    #[test]
    fn answer_box_falls_back_to_snippet() {
        let response = SearchResponse {
            organic: vec![organic("a")],
            answer_box: Some(AnswerBox {
                answer: None,
                snippet: Some("from snippet".into()),
            }),
            ..SearchResponse::default()
        };
        assert!(format_results(&response, "q").contains("**Quick Answer:** from snippet"));
    }

    #[test]
    fn knowledge_graph_and_related_searches_render() {
        let response = SearchResponse {
            organic: vec![organic("a")],
            knowledge_graph: Some(KnowledgeGraph {
                description: Some("facts here".into()),
            }),
            related_searches: vec![
                RelatedSearch {
                    query: Some("one".into()),
                },
                RelatedSearch {
                    query: Some("two".into()),
                },
            ],
            ..SearchResponse::default()
        };
        let text = format_results(&response, "q");
        assert!(text.contains("**Quick Facts:** facts here"));
        assert!(text.contains("- one"));
        assert!(text.contains("- two"));
    }

    #[test]
    fn footer_has_timestamp() {
        let response = SearchResponse {
            organic: vec![organic("a")],
            ..SearchResponse::default()
        };
        assert!(format_results(&response, "q").contains("*Search completed at "));
    }
}
