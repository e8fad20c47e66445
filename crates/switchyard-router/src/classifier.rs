// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Oracle-backed query classification with a deterministic fallback.
//!
//! Classification asks a fast oracle model for a single routing label. When
//! the oracle is unavailable, errors out, or returns text outside the closed
//! label set, a pure keyword heuristic decides instead. Classification never
//! fails: every query gets a valid label.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use switchyard_core::{ChatMessage, Oracle, OracleRequest, RoutingLabel};

/// Sampling temperature for routing calls. Low on purpose: routing should be
/// near-deterministic.
const ROUTING_TEMPERATURE: f32 = 0.1;

/// Temporal/news tokens that route to web search (contains, case-insensitive).
const TIME_INDICATORS: &[&str] = &[
    "today", "current", "latest", "recent", "now", "2024", "2025", "news",
];

/// Operator characters that mark a query as arithmetic.
const MATH_OPERATORS: &[char] = &['+', '-', '*', '/', '=', '%'];

/// Cues that upgrade an arithmetic query to the step-wise solver
/// (contains, case-insensitive).
const COMPLEX_MATH: &[&str] = &["solve", "equation", "derivative", "integral", "x=", "find x"];

/// Document-reference tokens (contains, case-insensitive).
const DOC_INDICATORS: &[&str] = &[
    "document", "file", "uploaded", "my resume", "the report", "according to",
];

/// Result of classifying one query.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The routing label. Always a member of the closed set.
    pub label: RoutingLabel,
    /// Diagnostic text when the oracle path failed and the fallback decided.
    pub error: Option<String>,
}

/// Classifies queries into routing labels.
///
/// Holds an optional oracle; without one every query goes straight to the
/// fallback heuristic.
pub struct QueryClassifier {
    oracle: Option<Arc<dyn Oracle>>,
}

impl QueryClassifier {
    /// Create a classifier backed by the given oracle.
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Create a classifier with no oracle. Every query uses the fallback
    /// heuristic.
    pub fn without_oracle() -> Self {
        Self { oracle: None }
    }

    /// Classify a query into a routing label.
    ///
    /// Makes at most one oracle call. Any failure or out-of-set answer is
    /// recovered by [`fallback_route`]; the error text is carried in the
    /// returned [`Classification`] for logging.
    pub async fn classify(&self, query: &str) -> Classification {
        let oracle = match &self.oracle {
            Some(oracle) => oracle,
            None => {
                return Classification {
                    label: fallback_route(query),
                    error: None,
                }
            }
        };

        let request = OracleRequest::new(
            vec![ChatMessage::system(routing_prompt(query))],
            ROUTING_TEMPERATURE,
        );

        match oracle.complete(request).await {
            Ok(answer) => {
                let normalized = answer.trim().to_lowercase();
                match RoutingLabel::from_str(&normalized) {
                    Ok(label) => {
                        info!(query = %truncate(query, 50), label = %label, "query routed");
                        Classification { label, error: None }
                    }
                    Err(_) => {
                        let label = fallback_route(query);
                        warn!(
                            answer = %truncate(&normalized, 50),
                            fallback = %label,
                            "oracle returned out-of-set label, using fallback"
                        );
                        Classification { label, error: None }
                    }
                }
            }
            Err(e) => {
                let label = fallback_route(query);
                warn!(error = %e, fallback = %label, "routing oracle call failed");
                Classification {
                    label,
                    error: Some(format!("Routing error: {e}")),
                }
            }
        }
    }
}

/// Pure keyword fallback routing. No I/O, same label for same text.
///
/// Signals are checked in a fixed priority order: temporal tokens, then
/// arithmetic operators (split between solver and calculator by complex-math
/// cues), then document references, with general chat as the default.
pub fn fallback_route(query: &str) -> RoutingLabel {
    let lower = query.to_lowercase();

    if TIME_INDICATORS.iter().any(|t| lower.contains(t)) {
        return RoutingLabel::WebSearch;
    }

    if query.chars().any(|c| MATH_OPERATORS.contains(&c)) {
        if COMPLEX_MATH.iter().any(|t| lower.contains(t)) {
            return RoutingLabel::MathSolver;
        }
        return RoutingLabel::Calculator;
    }

    if DOC_INDICATORS.iter().any(|t| lower.contains(t)) {
        return RoutingLabel::DocumentQa;
    }

    RoutingLabel::GeneralChat
}

/// Build the routing rubric prompt for a query.
fn routing_prompt(query: &str) -> String {
    format!(
        r#"You are an expert query router. Analyze this user query and select the single best tool.

QUERY: "{query}"

TOOLS & SELECTION CRITERIA:

web_search - Select if query contains:
- Time indicators: "today", "current", "latest", "recent", "now", "2024", "2025"
- News/events: "news", "happened", "announced", "breaking"
- Real-time data: "price", "weather", "stock", "score"
- Verification needs: "fact check", "confirm", "verify"

calculator - Select for:
- Arithmetic expressions: "2+3", "15*4", "100/5"
- Unit conversions: "miles to km", "celsius to fahrenheit"
- Percentage calculations: "20% of 150"
- Simple numeric operations (no variables/equations)

math_solver - Select for:
- Equations with variables: "solve for x", "find y when"
- Advanced math: "derivative", "integral", "matrix", "logarithm"
- Word problems: mathematical scenarios requiring multi-step solving
- Step-by-step math explanations needed

document_qa - Select if query mentions:
- Document references: "my document", "the file", "uploaded"
- Specific content: "in the paper", "according to", "from the report"
- Previously provided information context

general_chat - Default for:
- Explanations, definitions, how-to questions
- Creative tasks, brainstorming, advice
- General knowledge not requiring real-time data
- Conversations, opinions, recommendations

DECISION RULES:
1. If multiple tools could work, prioritize: web_search > math_solver > calculator > document_qa > general_chat
2. When uncertain between calculator/math_solver: choose calculator for simple arithmetic, math_solver for complex problems
3. Only choose document_qa if query explicitly references documents/files
4. Default to general_chat when no other tool clearly fits

OUTPUT: Return only the tool name (no explanations): web_search, calculator, math_solver, document_qa, or general_chat

EXAMPLES:
"What's the latest news about AI?" -> web_search
"Calculate 15% tip on $80" -> calculator
"Solve: 2x + 5 = 15" -> math_solver
"What does my resume say about experience?" -> document_qa
"Explain quantum physics" -> general_chat"#
    )
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_test_utils::MockOracle;

    #[test]
    fn fallback_temporal_routes_to_web_search() {
        assert_eq!(
            fallback_route("what is the latest AI news"),
            RoutingLabel::WebSearch
        );
        assert_eq!(
            fallback_route("weather TODAY in Paris"),
            RoutingLabel::WebSearch
        );
        assert_eq!(fallback_route("elections in 2024"), RoutingLabel::WebSearch);
    }

    #[test]
    fn fallback_arithmetic_routes_to_calculator() {
        assert_eq!(fallback_route("2+3*4"), RoutingLabel::Calculator);
        assert_eq!(fallback_route("what is 100/5"), RoutingLabel::Calculator);
        assert_eq!(fallback_route("15% of 80"), RoutingLabel::Calculator);
    }

    #[test]
    fn fallback_complex_math_routes_to_solver() {
        assert_eq!(
            fallback_route("solve 2x + 5 = 15"),
            RoutingLabel::MathSolver
        );
        assert_eq!(
            fallback_route("derivative of x**2 + 3"),
            RoutingLabel::MathSolver
        );
    }

    #[test]
    fn fallback_document_reference_routes_to_docqa() {
        assert_eq!(
            fallback_route("what does my resume say"),
            RoutingLabel::DocumentQa
        );
        assert_eq!(
            fallback_route("summarize the uploaded report"),
            RoutingLabel::DocumentQa
        );
    }

    #[test]
    fn fallback_default_is_general_chat() {
        assert_eq!(
            fallback_route("explain quantum physics"),
            RoutingLabel::GeneralChat
        );
        assert_eq!(fallback_route(""), RoutingLabel::GeneralChat);
    }

    #[test]
    fn fallback_tie_break_prefers_web_search() {
        // Temporal token beats the arithmetic operator.
        assert_eq!(
            fallback_route("what is 2+2 today"),
            RoutingLabel::WebSearch
        );
    }

    #[test]
    fn fallback_is_deterministic() {
        let queries = [
            "what is 2+2 today",
            "solve x=4",
            "hello there",
            "my document says what?",
        ];
        for q in queries {
            assert_eq!(fallback_route(q), fallback_route(q));
        }
    }

    #[test]
    fn fallback_is_case_insensitive() {
        assert_eq!(
            fallback_route("LATEST news"),
            fallback_route("latest news")
        );
        assert_eq!(
            fallback_route("SOLVE 2x+1=3"),
            fallback_route("solve 2x+1=3")
        );
    }

    #[tokio::test]
    async fn classify_accepts_valid_oracle_label() {
        let oracle = Arc::new(MockOracle::with_responses(vec!["math_solver"]));
        let classifier = QueryClassifier::new(oracle);
        let result = classifier.classify("solve for x").await;
        assert_eq!(result.label, RoutingLabel::MathSolver);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn classify_normalizes_oracle_output() {
        let oracle = Arc::new(MockOracle::with_responses(vec!["  Web_Search \n"]));
        let classifier = QueryClassifier::new(oracle);
        let result = classifier.classify("anything").await;
        assert_eq!(result.label, RoutingLabel::WebSearch);
    }

    #[tokio::test]
    async fn classify_invalid_label_uses_fallback() {
        let oracle = Arc::new(MockOracle::with_responses(vec![
            "I think you should use the calculator tool",
        ]));
        let classifier = QueryClassifier::new(oracle);
        let result = classifier.classify("what is 2+3").await;
        assert_eq!(result.label, RoutingLabel::Calculator);
        // Out-of-set output is recovered silently.
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn classify_oracle_failure_uses_fallback_and_records_error() {
        let oracle = Arc::new(MockOracle::failing());
        let classifier = QueryClassifier::new(oracle);
        let result = classifier.classify("latest election results").await;
        assert_eq!(result.label, RoutingLabel::WebSearch);
        let error = result.error.unwrap();
        assert!(error.starts_with("Routing error:"), "got: {error}");
    }

    #[tokio::test]
    async fn classify_without_oracle_is_pure_fallback() {
        let classifier = QueryClassifier::without_oracle();
        let result = classifier.classify("what does the report say?").await;
        assert_eq!(result.label, RoutingLabel::DocumentQa);
        assert!(result.error.is_none());
    }

    #[test]
    fn routing_prompt_embeds_query_and_labels() {
        let prompt = routing_prompt("what is 2+2");
        assert!(prompt.contains("\"what is 2+2\""));
        for label in RoutingLabel::ALL {
            assert!(prompt.contains(&label.to_string()), "missing {label}");
        }
    }
}
