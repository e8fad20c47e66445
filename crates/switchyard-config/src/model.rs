// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Switchyard routing agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Switchyard configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchyardConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Oracle (LLM completion service) settings.
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Web search provider settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Document retrieval settings.
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Interaction log settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Evaluation harness settings.
    #[serde(default)]
    pub eval: EvalConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "switchyard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Oracle configuration.
///
/// The API speaks the OpenAI-compatible chat-completions wire format. A
/// missing `api_key` degrades oracle-backed handlers to their unavailable
/// messages instead of failing startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// API key. `None` leaves oracle-backed handlers unavailable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions endpoint.
    #[serde(default = "default_oracle_base_url")]
    pub base_url: String,

    /// Fast model used for query routing.
    #[serde(default = "default_fast_model")]
    pub fast_model: String,

    /// Capable model used for general conversation.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Reasoning model used for step-wise math solving.
    #[serde(default = "default_solver_model")]
    pub solver_model: String,

    /// Model used for document question answering.
    #[serde(default = "default_docqa_model")]
    pub docqa_model: String,

    /// Maximum tokens per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_oracle_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_oracle_base_url(),
            fast_model: default_fast_model(),
            chat_model: default_chat_model(),
            solver_model: default_solver_model(),
            docqa_model: default_docqa_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_oracle_timeout_secs(),
        }
    }
}

fn default_oracle_base_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_fast_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_chat_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_solver_model() -> String {
    "deepseek-r1-distill-llama-70b".to_string()
}

fn default_docqa_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_oracle_timeout_secs() -> u64 {
    60
}

/// Web search provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Search provider API key. `None` makes web search report unavailable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search endpoint URL.
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// Number of organic results to request.
    #[serde(default = "default_result_count")]
    pub result_count: usize,

    /// Interface language sent to the provider.
    #[serde(default = "default_search_hl")]
    pub hl: String,

    /// Geographic locale sent to the provider.
    #[serde(default = "default_search_gl")]
    pub gl: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_search_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_search_base_url(),
            result_count: default_result_count(),
            hl: default_search_hl(),
            gl: default_search_gl(),
            timeout_secs: default_search_timeout_secs(),
        }
    }
}

fn default_search_base_url() -> String {
    "https://google.serper.dev/search".to_string()
}

fn default_result_count() -> usize {
    5
}

fn default_search_hl() -> String {
    "en".to_string()
}

fn default_search_gl() -> String {
    "us".to_string()
}

fn default_search_timeout_secs() -> u64 {
    10
}

/// Document retrieval configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RetrievalConfig {
    /// Directory holding the document corpus.
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,

    /// Path of the persisted index snapshot.
    #[serde(default = "default_index_path")]
    pub index_path: String,

    /// Chunk size in characters.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between adjacent chunks in characters.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Number of chunks retrieved per question.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            index_path: default_index_path(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            top_k: default_top_k(),
        }
    }
}

fn default_documents_dir() -> String {
    "data/documents".to_string()
}

fn default_index_path() -> String {
    "data/index/chunks.json".to_string()
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_top_k() -> usize {
    4
}

/// Interaction log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Directory for daily interaction JSONL files.
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> String {
    "data/logs".to_string()
}

/// Evaluation harness configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    /// Directory for timestamped evaluation result documents.
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

fn default_results_dir() -> String {
    "data/results".to_string()
}
