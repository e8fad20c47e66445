// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./switchyard.toml` > `~/.config/switchyard/switchyard.toml`
//! > `/etc/switchyard/switchyard.toml` with environment variable overrides
//! via `SWITCHYARD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SwitchyardConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/switchyard/switchyard.toml` (system-wide)
/// 3. `~/.config/switchyard/switchyard.toml` (user XDG config)
/// 4. `./switchyard.toml` (local directory)
/// 5. `SWITCHYARD_*` environment variables
pub fn load_config() -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file("/etc/switchyard/switchyard.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("switchyard/switchyard.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("switchyard.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SWITCHYARD_ORACLE_API_KEY` must map to
/// `oracle.api_key`, not `oracle.api.key`.
fn env_provider() -> Env {
    const SECTIONS: [&str; 6] = ["agent", "oracle", "search", "retrieval", "log", "eval"];

    Env::prefixed("SWITCHYARD_").map(|key| {
        // `key` arrives in the variable's original (uppercase) form with the
        // prefix stripped. Example: SWITCHYARD_ORACLE_API_KEY -> "ORACLE_API_KEY".
        let key = key.as_str().to_lowercase();
        // Only the leading section name becomes a dot. The remainder may
        // itself contain underscores: "oracle_api_key" -> "oracle.api_key",
        // "agent_log_level" -> "agent.log_level".
        for section in SECTIONS {
            let prefixed = format!("{section}_");
            if let Some(rest) = key.strip_prefix(&prefixed) {
                return format!("{section}.{rest}").into();
            }
        }
        key.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_file() {
        let config = load_config_from_str("").expect("defaults should be valid");
        assert_eq!(config.agent.name, "switchyard");
        assert_eq!(config.retrieval.chunk_size, 1000);
        assert_eq!(config.retrieval.chunk_overlap, 200);
        assert_eq!(config.search.timeout_secs, 10);
        assert!(config.oracle.api_key.is_none());
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [oracle]
            api_key = "gsk_test"
            fast_model = "test-model"

            [retrieval]
            top_k = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.oracle.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.oracle.fast_model, "test-model");
        assert_eq!(config.retrieval.top_k, 8);
        // Untouched sections keep defaults.
        assert_eq!(config.search.result_count, 5);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
            [oracle]
            api_keyy = "typo"
            "#,
        );
        assert!(result.is_err(), "unknown keys must be rejected");
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = load_config_from_str(
            r#"
            [telemetry]
            enabled = true
            "#,
        );
        assert!(result.is_err(), "unknown sections must be rejected");
    }
}
