// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability-handler seam bound to exactly one routing label.

use async_trait::async_trait;

use crate::error::SwitchyardError;
use crate::types::RoutingLabel;

/// A capability implementation bound to exactly one routing label.
///
/// Handlers are stateless per call. Degraded-but-expected conditions
/// (missing credential, empty corpus) are returned as `Ok` user-facing text;
/// `Err` is reserved for genuine execution failures, which the dispatcher
/// converts into failure text with an annotated `tool_used`.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Human-readable handler name used for the `tool_used` annotation.
    fn name(&self) -> &str;

    /// The routing label this handler is bound to.
    fn label(&self) -> RoutingLabel;

    /// Execute the handler against the raw query text.
    async fn execute(&self, query: &str) -> Result<String, SwitchyardError>;
}
