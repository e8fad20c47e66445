// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Switchyard configuration system.

use switchyard_config::{load_and_validate_str, load_config, load_config_from_str, ConfigError};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_switchyard_config() {
    let toml = r#"
[agent]
name = "test-agent"
log_level = "debug"

[oracle]
api_key = "gsk_test"
fast_model = "llama-3.1-8b-instant"
chat_model = "llama-3.3-70b-versatile"
max_tokens = 1024
timeout_secs = 30

[search]
api_key = "serper-key"
result_count = 3
hl = "en"
gl = "gb"

[retrieval]
documents_dir = "/tmp/docs"
index_path = "/tmp/index/chunks.json"
chunk_size = 500
chunk_overlap = 100
top_k = 2

[log]
dir = "/tmp/logs"

[eval]
results_dir = "/tmp/results"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-agent");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.oracle.api_key.as_deref(), Some("gsk_test"));
    assert_eq!(config.oracle.max_tokens, 1024);
    assert_eq!(config.oracle.timeout_secs, 30);
    assert_eq!(config.search.api_key.as_deref(), Some("serper-key"));
    assert_eq!(config.search.result_count, 3);
    assert_eq!(config.search.gl, "gb");
    assert_eq!(config.retrieval.documents_dir, "/tmp/docs");
    assert_eq!(config.retrieval.chunk_size, 500);
    assert_eq!(config.retrieval.top_k, 2);
    assert_eq!(config.log.dir, "/tmp/logs");
    assert_eq!(config.eval.results_dir, "/tmp/results");
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[oracle]
api_keyy = "typo"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_keyy"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// `load_and_validate_str` surfaces validation errors as ConfigError values.
#[test]
fn validation_errors_surface_through_high_level_entry() {
    let toml = r#"
[retrieval]
chunk_size = 100
chunk_overlap = 100
"#;

    let errors = load_and_validate_str(toml).expect_err("overlap == size must be rejected");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { .. })));
}

/// A wrong-typed value is rejected with a type error.
#[test]
fn wrong_type_is_rejected() {
    let toml = r#"
[oracle]
max_tokens = "lots"
"#;

    assert!(load_config_from_str(toml).is_err());
}

/// Defaults need no file at all and pass validation.
#[test]
fn defaults_validate() {
    let config = load_and_validate_str("").expect("defaults must validate");
    assert_eq!(config.oracle.fast_model, "llama-3.1-8b-instant");
    assert_eq!(config.retrieval.chunk_size, 1000);
}

/// `SWITCHYARD_<SECTION>_<KEY>` environment variables override defaults.
/// Keys with underscores map to `section.key_with_underscores`, never
/// deeper nesting.
#[test]
fn env_vars_override_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("SWITCHYARD_ORACLE_API_KEY", "gsk_from_env");
        jail.set_env("SWITCHYARD_AGENT_LOG_LEVEL", "trace");
        jail.set_env("SWITCHYARD_RETRIEVAL_TOP_K", "7");
        jail.set_env("SWITCHYARD_EVAL_RESULTS_DIR", "/tmp/env-results");

        let config = load_config()?;
        assert_eq!(config.oracle.api_key.as_deref(), Some("gsk_from_env"));
        assert_eq!(config.agent.log_level, "trace");
        assert_eq!(config.retrieval.top_k, 7);
        assert_eq!(config.eval.results_dir, "/tmp/env-results");
        Ok(())
    });
}

/// Environment variables override values from a config file.
#[test]
fn env_vars_override_config_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "switchyard.toml",
            r#"
            [oracle]
            api_key = "gsk_from_file"
            "#,
        )?;
        jail.set_env("SWITCHYARD_ORACLE_API_KEY", "gsk_from_env");

        let config = load_config()?;
        assert_eq!(config.oracle.api_key.as_deref(), Some("gsk_from_env"));
        Ok(())
    });
}
