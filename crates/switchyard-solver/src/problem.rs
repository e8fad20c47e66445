// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Problem-kind classification and specialized solver prompts.

use std::sync::LazyLock;

use regex::Regex;
use strum::Display;

static ARITHMETIC_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+.*[+\-*/^].*\d+").unwrap());

/// Broad categories of math problem, each steering the solver prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProblemKind {
    CalculusDerivative,
    CalculusIntegral,
    Algebra,
    Geometry,
    Statistics,
    WordProblem,
    Arithmetic,
    General,
}

impl ProblemKind {
    /// Title-cased display name used in solution headers.
    pub fn title(&self) -> &'static str {
        match self {
            ProblemKind::CalculusDerivative => "Calculus Derivative",
            ProblemKind::CalculusIntegral => "Calculus Integral",
            ProblemKind::Algebra => "Algebra",
            ProblemKind::Geometry => "Geometry",
            ProblemKind::Statistics => "Statistics",
            ProblemKind::WordProblem => "Word Problem",
            ProblemKind::Arithmetic => "Arithmetic",
            ProblemKind::General => "General",
        }
    }
}

/// Classify a problem by keyword scan, checked in a fixed order.
pub fn classify_problem(problem: &str) -> ProblemKind {
    let lower = problem.to_lowercase();

    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(&["derivative", "differentiate", "d/dx", "slope"]) {
        ProblemKind::CalculusDerivative
    } else if contains_any(&["integral", "integrate", "area under"]) {
        ProblemKind::CalculusIntegral
    } else if contains_any(&["equation", "solve for", "x =", "find x"]) {
        ProblemKind::Algebra
    } else if contains_any(&["triangle", "circle", "area", "volume", "perimeter"]) {
        ProblemKind::Geometry
    } else if contains_any(&["probability", "statistics", "mean", "median", "variance"]) {
        ProblemKind::Statistics
    } else if contains_any(&["word problem", "age", "distance", "speed", "cost"]) {
        ProblemKind::WordProblem
    } else if ARITHMETIC_SHAPE.is_match(problem) {
        ProblemKind::Arithmetic
    } else {
        ProblemKind::General
    }
}

const BASE_PROMPT: &str = r#"You are an expert mathematics tutor. Solve problems step-by-step with clear explanations.

Rules:
1. Show ALL steps in your solution
2. Explain the reasoning behind each step
3. Use proper mathematical notation
4. Verify your answer when possible
5. If multiple methods exist, mention them
6. Be pedagogical - help the user learn

Format your response with:
- **Problem Understanding**: Restate what you're solving
- **Solution Steps**: Numbered steps with explanations
- **Final Answer**: Clear, highlighted result
- **Verification**: Check your work if possible"#;

/// Build the system prompt for a problem kind.
pub fn system_prompt(kind: ProblemKind) -> String {
    let specialization = match kind {
        ProblemKind::CalculusDerivative => {
            "Specialize in: Derivatives, chain rule, product rule, quotient rule, implicit differentiation."
        }
        ProblemKind::CalculusIntegral => {
            "Specialize in: Integration techniques, substitution, integration by parts, definite integrals."
        }
        ProblemKind::Algebra => {
            "Specialize in: Solving equations, systems of equations, factoring, simplification."
        }
        ProblemKind::Geometry => {
            "Specialize in: Area, volume, perimeter calculations, geometric theorems."
        }
        ProblemKind::Statistics => {
            "Specialize in: Descriptive statistics, probability distributions, hypothesis testing."
        }
        ProblemKind::WordProblem => {
            "Specialize in: Translating word problems into mathematical expressions, real-world applications."
        }
        ProblemKind::Arithmetic => {
            "Specialize in: Step-by-step arithmetic, order of operations, fractions, decimals."
        }
        ProblemKind::General => "Analyze the problem carefully to determine the best approach.",
    };
    format!("{BASE_PROMPT}\n\n{specialization}")
}
