// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The request-processing seam consumed by callers and evaluation harnesses.

use async_trait::async_trait;

use crate::types::{AgentOutcome, Session};

/// Anything that can take a raw query to a fully-populated outcome.
///
/// The dispatcher is the production implementation; evaluation harnesses
/// accept any implementation so they can run against stubs.
#[async_trait]
pub trait QueryPipeline: Send + Sync {
    /// Process one query within the given session. Never fails: all error
    /// information is carried inside the returned outcome.
    async fn process_query(&self, session: &mut Session, query: &str) -> AgentOutcome;
}
