// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as chunk geometry and timeout bounds.

use crate::diagnostic::ConfigError;
use crate::model::SwitchyardConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SwitchyardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace/debug/info/warn/error, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if config.oracle.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "oracle.base_url must not be empty".to_string(),
        });
    }

    if config.oracle.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "oracle.timeout_secs must be positive".to_string(),
        });
    }

    if config.oracle.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "oracle.max_tokens must be positive".to_string(),
        });
    }

    if config.search.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "search.timeout_secs must be positive".to_string(),
        });
    }

    if config.search.result_count == 0 {
        errors.push(ConfigError::Validation {
            message: "search.result_count must be at least 1".to_string(),
        });
    }

    if config.retrieval.chunk_size == 0 {
        errors.push(ConfigError::Validation {
            message: "retrieval.chunk_size must be positive".to_string(),
        });
    }

    if config.retrieval.chunk_overlap >= config.retrieval.chunk_size {
        errors.push(ConfigError::Validation {
            message: format!(
                "retrieval.chunk_overlap ({}) must be smaller than retrieval.chunk_size ({})",
                config.retrieval.chunk_overlap, config.retrieval.chunk_size
            ),
        });
    }

    if config.retrieval.top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "retrieval.top_k must be at least 1".to_string(),
        });
    }

    if config.log.dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "log.dir must not be empty".to_string(),
        });
    }

    if config.eval.results_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "eval.results_dir must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SwitchyardConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn overlap_must_be_smaller_than_chunk_size() {
        let mut config = SwitchyardConfig::default();
        config.retrieval.chunk_overlap = config.retrieval.chunk_size;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("chunk_overlap")));
    }

    #[test]
    fn zero_timeouts_rejected() {
        let mut config = SwitchyardConfig::default();
        config.oracle.timeout_secs = 0;
        config.search.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn invalid_log_level_rejected() {
        let mut config = SwitchyardConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("log_level")));
    }

    #[test]
    fn collects_all_errors_not_just_first() {
        let mut config = SwitchyardConfig::default();
        config.agent.name = "  ".to_string();
        config.retrieval.top_k = 0;
        config.search.result_count = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
