// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Categorized calculator failures.

use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// The category drives the remediation hints in the rendered error text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A construct outside the whitelisted grammar: unknown function,
    /// unknown name, or anything that is not plain arithmetic. This is a
    /// security boundary: the input is untrusted free text.
    #[error("unsupported {kind}: {name}")]
    Unsupported {
        /// "function", "variable", or "operation".
        kind: &'static str,
        name: String,
    },

    /// The text does not parse under the expression grammar.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A whitelisted function was called outside its domain
    /// (sqrt of a negative, log of a non-positive, fractional factorial).
    #[error("math domain error: {0}")]
    Domain(String),
}

impl CalcError {
    pub fn unsupported_function(name: impl Into<String>) -> Self {
        CalcError::Unsupported {
            kind: "function",
            name: name.into(),
        }
    }

    pub fn unsupported_variable(name: impl Into<String>) -> Self {
        CalcError::Unsupported {
            kind: "variable",
            name: name.into(),
        }
    }
}
