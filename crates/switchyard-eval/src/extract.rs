// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric answer extraction from free-text responses.

use std::sync::LazyLock;

use regex::Regex;

/// Explicit answer patterns, tried in order. The last match of the first
/// matching pattern wins: conclusions come at the end of a derivation.
static ANSWER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"answer(?:\s+is)?:?\s*(\d+(?:\.\d+)?)",
        r"result(?:\s+is)?:?\s*(\d+(?:\.\d+)?)",
        r"solution(?:\s+is)?:?\s*(\d+(?:\.\d+)?)",
        r"final(?:\s+answer)?:?\s*(\d+(?:\.\d+)?)",
        r"therefore:?\s*(\d+(?:\.\d+)?)",
        r"equals?\s*(\d+(?:\.\d+)?)",
        r"=\s*(\d+(?:\.\d+)?)",
        r"\$(\d+(?:\.\d+)?)",
        r"(\d+(?:\.\d+)?)\s*dollars?",
        r"(\d+(?:\.\d+)?)\s*(?:items?|things?|pieces?|units?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ANY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap());

/// Extract the numeric answer from a response, normalized to an integer
/// string. Falls back to the last bare number in the text; `None` when the
/// response contains no number at all.
pub fn extract_numeric_answer(response: &str) -> Option<String> {
    let lower = response.to_lowercase();

    for pattern in ANSWER_PATTERNS.iter() {
        if let Some(value) = last_capture(pattern, &lower) {
            return Some(value);
        }
    }

    last_capture(&ANY_NUMBER, &lower)
}

fn last_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures_iter(text)
        .last()
        .and_then(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(0))
                .map(|m| m.as_str().to_string())
        })
        .and_then(|raw| raw.parse::<f64>().ok())
        .map(|value| format!("{}", value.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_explicit_answer_phrase() {
        assert_eq!(
            extract_numeric_answer("Step 1: 16 - 7 = 9. The answer is 18."),
            Some("18".to_string())
        );
    }

    #[test]
    fn answer_pattern_beats_bare_numbers() {
        // "answer is 5" wins even though later numbers appear.
        assert_eq!(
            extract_numeric_answer("The answer is 5, computed from 2 and 3"),
            Some("5".to_string())
        );
    }

    #[test]
    fn last_match_of_a_pattern_wins() {
        assert_eq!(
            extract_numeric_answer("First x = 4, then finally x = 12"),
            Some("12".to_string())
        );
    }

    #[test]
    fn dollar_amounts_are_recognized() {
        assert_eq!(
            extract_numeric_answer("She makes $18 every day"),
            Some("18".to_string())
        );
    }

    #[test]
    fn decimals_truncate_to_integers() {
        assert_eq!(
            extract_numeric_answer("The answer is 18.0"),
            Some("18".to_string())
        );
    }

    #[test]
    fn falls_back_to_last_bare_number() {
        assert_eq!(
            extract_numeric_answer("We have 3 cars and then 5 in total"),
            Some("5".to_string())
        );
    }

    #[test]
    fn no_numbers_yields_none() {
        assert_eq!(extract_numeric_answer("I cannot solve this"), None);
        assert_eq!(extract_numeric_answer(""), None);
    }
}
