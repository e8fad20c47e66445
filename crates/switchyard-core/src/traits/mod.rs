// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the seams of the routing agent.

pub mod handler;
pub mod oracle;
pub mod pipeline;

pub use handler::Handler;
pub use oracle::Oracle;
pub use pipeline::QueryPipeline;
