// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Switchyard query-routing agent.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Switchyard workspace: the closed routing
//! label set, the oracle and handler seams, and the uniform outcome shape
//! every dispatched query resolves to.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwitchyardError;
pub use traits::{Handler, Oracle, QueryPipeline};
pub use types::{
    AgentOutcome, ChatMessage, ChatRole, InteractionRecord, OracleRequest, RoutingLabel, Session,
    SessionId,
};
