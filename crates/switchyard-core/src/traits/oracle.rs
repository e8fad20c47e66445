// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The oracle seam: an opaque prompt-to-text completion service.

use async_trait::async_trait;

use crate::error::SwitchyardError;
use crate::types::OracleRequest;

/// An external text-completion service treated as an opaque function from
/// role-tagged messages to a single completion.
///
/// Implementations make exactly one attempt per call; retry policy is a
/// caller concern and the core performs none. All failure modes (auth, rate
/// limit, timeout, empty completion) surface as `SwitchyardError::Oracle`.
#[async_trait]
pub trait Oracle: Send + Sync + 'static {
    /// Send one completion request and return the completion text.
    async fn complete(&self, request: OracleRequest) -> Result<String, SwitchyardError>;
}
