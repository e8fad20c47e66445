// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic expression preprocessing.
//!
//! Rewrites natural-language arithmetic into the grammar the parser accepts.
//! The pipeline order matters: lowercase/trim, percentage phrases, word
//! operators, implicit multiplication, whitespace stripping.

use std::sync::LazyLock;

use regex::Regex;

static PERCENT_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)%\s*of\s*(\d+(?:\.\d+)?)").unwrap()
});

static INCREASE_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"increase\s+(\d+(?:\.\d+)?)\s+by\s+(\d+(?:\.\d+)?)%").unwrap()
});

static DECREASE_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"decrease\s+(\d+(?:\.\d+)?)\s+by\s+(\d+(?:\.\d+)?)%").unwrap()
});

static BARE_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());

static DIGIT_LPAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)\(").unwrap());

static RPAREN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)(\d)").unwrap());

/// Word phrases rewritten to operators, applied in this order.
const WORD_OPERATORS: &[(&str, &str)] = &[
    (" plus ", " + "),
    (" minus ", " - "),
    (" times ", " * "),
    (" multiplied by ", " * "),
    (" divided by ", " / "),
    (" to the power of ", " ** "),
    (" squared", " ** 2"),
    (" cubed", " ** 3"),
    ("square root of ", "sqrt("),
    ("sqrt of ", "sqrt("),
    ("sin of ", "sin("),
    ("cos of ", "cos("),
    ("tan of ", "tan("),
    ("log of ", "log("),
    ("ln of ", "log("),
];

/// Rewrite a raw expression into parser-ready form.
pub fn preprocess(expression: &str) -> String {
    let mut expr = expression.trim().to_lowercase();

    if expr.contains('%') {
        expr = rewrite_percentages(&expr);
    }

    for (word, symbol) in WORD_OPERATORS {
        expr = expr.replace(word, symbol);
    }

    // "2(3+4)" -> "2*(3+4)", "(3+4)2" -> "(3+4)*2"
    expr = DIGIT_LPAREN.replace_all(&expr, "$1*(").into_owned();
    expr = RPAREN_DIGIT.replace_all(&expr, ")*$1").into_owned();

    expr = expr.split_whitespace().collect();

    // Word rewrites like "square root of 16" open a paren without closing it.
    let open = expr.matches('(').count();
    let close = expr.matches(')').count();
    if open > close {
        expr.extend(std::iter::repeat(')').take(open - close));
    }

    expr
}

fn rewrite_percentages(expr: &str) -> String {
    let expr = PERCENT_OF.replace_all(expr, "($1 * $2 / 100)");
    let expr = INCREASE_BY.replace_all(&expr, "($1 * (1 + $2/100))");
    let expr = DECREASE_BY.replace_all(&expr, "($1 * (1 - $2/100))");
    BARE_PERCENT.replace_all(&expr, "($1/100)").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_rewrites_to_fraction() {
        assert_eq!(preprocess("20% of 150"), "(20*150/100)");
    }

    #[test]
    fn increase_decrease_rewrites() {
        assert_eq!(preprocess("increase 100 by 25%"), "(100*(1+25/100))");
        assert_eq!(preprocess("decrease 80 by 10%"), "(80*(1-10/100))");
    }

    #[test]
    fn bare_percent_becomes_division() {
        assert_eq!(preprocess("25%"), "(25/100)");
        assert_eq!(preprocess("12.5%"), "(12.5/100)");
    }

    #[test]
    fn word_operators_are_substituted() {
        assert_eq!(preprocess("2 plus 3"), "2+3");
        assert_eq!(preprocess("10 divided by 2"), "10/2");
        assert_eq!(preprocess("3 squared"), "3**2");
        assert_eq!(preprocess("2 to the power of 8"), "2**8");
    }

    #[test]
    fn word_functions_get_closing_paren() {
        assert_eq!(preprocess("square root of 16"), "sqrt(16)");
        assert_eq!(preprocess("sin of 0"), "sin(0)");
    }

    #[test]
    fn implicit_multiplication_is_inserted() {
        assert_eq!(preprocess("2(3+4)"), "2*(3+4)");
        assert_eq!(preprocess("(3+4)2"), "(3+4)*2");
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(preprocess("  2 +   3 * 4 "), "2+3*4");
    }

    #[test]
    fn uppercase_is_lowered() {
        assert_eq!(preprocess("SQRT(16) + 5"), "sqrt(16)+5");
    }

    #[test]
    fn plain_expressions_pass_through() {
        assert_eq!(preprocess("2+3*4"), "2+3*4");
        assert_eq!(preprocess("sin(pi/2)"), "sin(pi/2)");
    }
}
