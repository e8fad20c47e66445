// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Switchyard workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        SessionId(uuid::Uuid::new_v4().to_string())
    }
}

/// The closed set of routing labels a query can be classified into.
///
/// This enumeration is never extended at runtime. When several heuristic
/// signals match, priority is `WebSearch > MathSolver > Calculator >
/// DocumentQa > GeneralChat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoutingLabel {
    WebSearch,
    Calculator,
    MathSolver,
    DocumentQa,
    GeneralChat,
}

impl RoutingLabel {
    /// All labels in tie-break priority order.
    pub const ALL: [RoutingLabel; 5] = [
        RoutingLabel::WebSearch,
        RoutingLabel::MathSolver,
        RoutingLabel::Calculator,
        RoutingLabel::DocumentQa,
        RoutingLabel::GeneralChat,
    ];
}

/// Role of a chat message sent to the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in an oracle conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A request to the oracle: ordered role-tagged messages plus sampling knobs.
///
/// `model` overrides the client's default model when set; routing uses a
/// fast model while reasoning handlers prefer a more capable one.
#[derive(Debug, Clone)]
pub struct OracleRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub temperature: f32,
}

impl OracleRequest {
    /// Build a request from messages with the given temperature and the
    /// client's default model.
    pub fn new(messages: Vec<ChatMessage>, temperature: f32) -> Self {
        OracleRequest {
            messages,
            model: None,
            temperature,
        }
    }

    /// Select a specific model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// The fully-populated result of one dispatched query.
///
/// `process_query` never fails: errors are rendered into `response` and
/// annotated in `tool_used`, and `error` carries the diagnostic text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOutcome {
    /// Human-readable response text. Never empty.
    pub response: String,
    /// Label of the handler actually invoked, suffixed with `(Error)` if it
    /// failed, or the literal `Error` for an outer-boundary failure.
    pub tool_used: String,
    /// The routing decision as a string (`web_search`, `calculator`, ...).
    pub routing_decision: String,
    /// Empty string, or a diagnostic message when classification or handling
    /// failed. Only the last assignment is observed.
    pub error: String,
}

/// One append-only interaction log record, written as a single JSONL line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// ISO 8601 timestamp of completion.
    pub timestamp: String,
    /// The raw query text.
    pub query: String,
    /// The routing decision string.
    pub routing_decision: String,
    /// The `tool_used` annotation from the outcome.
    pub tool_used: String,
    /// Length of the response text in characters.
    pub response_length: usize,
    /// Diagnostic message, or empty.
    pub error: String,
}

/// An explicit, caller-owned conversation session.
///
/// One session per user interaction lifecycle; never shared across
/// concurrent dispatches and never held in process-wide state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    history: Vec<ChatMessage>,
}

impl Session {
    /// Create a fresh session with an empty history.
    pub fn new() -> Self {
        Session {
            id: SessionId::generate(),
            history: Vec::new(),
        }
    }

    /// Record one completed user/assistant turn.
    pub fn push_turn(&mut self, query: &str, response: &str) {
        self.history.push(ChatMessage::user(query));
        self.history.push(ChatMessage::assistant(response));
    }

    /// The most recent `n` messages, oldest first.
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Total number of messages recorded.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the session has no recorded turns.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all recorded history.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
