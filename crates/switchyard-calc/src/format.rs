// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result and error rendering for the calculator.

use crate::error::CalcError;

/// Render a successful result as user-facing markdown.
pub fn format_result(original: &str, result: f64) -> String {
    let formatted = format_number(result);

    let mut response = String::from("**Calculation Result**\n\n");
    response.push_str(&format!("**Expression:** `{original}`\n"));
    response.push_str(&format!("**Result:** `{formatted}`\n\n"));

    if (result - std::f64::consts::PI).abs() < 1e-4 {
        response.push_str("*This is approximately pi*\n");
    } else if (result - std::f64::consts::E).abs() < 1e-4 {
        response.push_str("*This is approximately e (Euler's number)*\n");
    } else if result == 0.0 {
        response.push_str("*Result is zero*\n");
    } else if result < 0.0 {
        response.push_str("*Result is negative*\n");
    }

    response
}

/// Format a number: integers without a decimal point, very small or very
/// large magnitudes in scientific notation, everything else with up to six
/// fractional digits and trailing zeros trimmed.
pub fn format_number(result: f64) -> String {
    if result.fract() == 0.0 && result.abs() < 1e15 {
        return format!("{}", result as i64);
    }
    if result != 0.0 && (result.abs() < 0.001 || result.abs() > 1e6) {
        return format!("{result:.2e}");
    }
    let text = format!("{result:.6}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Render a failure with category-specific remediation hints.
pub fn format_error(original: &str, error: &CalcError) -> String {
    let mut response = String::from("**Calculation Error**\n\n");
    response.push_str(&format!("**Expression:** `{original}`\n"));
    response.push_str(&format!("**Error:** {error}\n\n"));

    let suggestions: &[&str] = match error {
        CalcError::Unsupported { .. } => &[
            "- Try using basic operations: +, -, *, /, **",
            "- Available functions: sin, cos, tan, log, sqrt, abs, round",
        ],
        CalcError::Syntax(_) => &[
            "- Check for balanced parentheses",
            "- Use * for multiplication (e.g., 2*3, not 2x3)",
        ],
        CalcError::DivisionByZero => &[
            "- Cannot divide by zero",
            "- Check your expression for zero denominators",
        ],
        CalcError::Domain(_) => &[
            "- Check the function's valid input range",
            "- For example, sqrt needs a non-negative argument",
        ],
    };

    response.push_str("**Suggestions:**\n");
    for suggestion in suggestions {
        response.push_str(suggestion);
        response.push('\n');
    }

    response.push_str("\n**Examples of valid expressions:**\n");
    response.push_str("- `2 + 3 * 4`\n");
    response.push_str("- `sqrt(16) + 5`\n");
    response.push_str("- `sin(pi/2)`\n");
    response.push_str("- `10% of 150`\n");

    response
}
