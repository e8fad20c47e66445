// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The calculator capability handler.

use async_trait::async_trait;
use tracing::debug;

use switchyard_core::{Handler, RoutingLabel, SwitchyardError};

use crate::eval::evaluate;
use crate::format::{format_error, format_result};
use crate::parser::parse;
use crate::preprocess::preprocess;

/// Evaluate a raw expression into user-facing text.
///
/// Never fails: parse and evaluation errors are rendered into categorized
/// error text with remediation hints.
pub fn calculate(expression: &str) -> String {
    let cleaned = preprocess(expression);
    debug!(original = expression, cleaned = %cleaned, "evaluating expression");

    match parse(&cleaned).and_then(|expr| evaluate(&expr)) {
        Ok(result) => format_result(expression, result),
        Err(e) => format_error(expression, &e),
    }
}

/// Handler bound to the `calculator` routing label.
///
/// Purely local: no oracle, no network.
#[derive(Debug, Default)]
pub struct CalculatorHandler;

impl CalculatorHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for CalculatorHandler {
    fn name(&self) -> &str {
        "Calculator"
    }

    fn label(&self) -> RoutingLabel {
        RoutingLabel::Calculator
    }

    async fn execute(&self, query: &str) -> Result<String, SwitchyardError> {
        Ok(calculate(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_basic_expression() {
        let text = calculate("2+3*4");
        assert!(text.contains("`14`"), "got: {text}");
    }

    #[test]
    fn calculate_function_expression() {
        let text = calculate("sqrt(16) + 5");
        assert!(text.contains("`9`"), "got: {text}");
    }

    #[test]
    fn calculate_percentage_phrase() {
        let text = calculate("20% of 150");
        assert!(text.contains("`30`"), "got: {text}");
    }

    #[test]
    fn calculate_division_by_zero_is_a_message() {
        let text = calculate("10/0");
        assert!(text.contains("Calculation Error"));
        assert!(text.contains("division by zero"));
    }

    #[test]
    fn calculate_rejects_injection_attempts() {
        let text = calculate("__import__('os').system('ls')");
        assert!(text.contains("Calculation Error"), "got: {text}");
    }

    #[test]
    fn calculate_word_operators() {
        let text = calculate("2 plus 3 times 4");
        assert!(text.contains("`14`"), "got: {text}");
    }

    #[tokio::test]
    async fn handler_never_returns_err() {
        let handler = CalculatorHandler::new();
        for query in ["2+3", "10/0", "", "nonsense here"] {
            let result = handler.execute(query).await;
            assert!(result.is_ok(), "handler failed on {query:?}");
            assert!(!result.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn handler_identity() {
        let handler = CalculatorHandler::new();
        assert_eq!(handler.name(), "Calculator");
        assert_eq!(handler.label(), RoutingLabel::Calculator);
    }
}
