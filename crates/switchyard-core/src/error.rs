// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchyard routing agent.

use thiserror::Error;

/// The primary error type used across Switchyard traits and core operations.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Oracle (LLM completion service) errors: auth failure, rate limit,
    /// malformed or empty completion.
    #[error("oracle error: {message}")]
    Oracle {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Web search provider errors (HTTP failure, malformed response).
    #[error("search error: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Document retrieval errors (corpus unreadable, index snapshot missing
    /// or corrupt).
    #[error("retrieval error: {message}")]
    Retrieval {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation exceeded its deadline.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SwitchyardError {
    /// Shorthand for an oracle error without an underlying source.
    pub fn oracle(message: impl Into<String>) -> Self {
        SwitchyardError::Oracle {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a search error without an underlying source.
    pub fn search(message: impl Into<String>) -> Self {
        SwitchyardError::Search {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a retrieval error without an underlying source.
    pub fn retrieval(message: impl Into<String>) -> Self {
        SwitchyardError::Retrieval {
            message: message.into(),
            source: None,
        }
    }
}
