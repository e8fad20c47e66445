// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web search capability for Switchyard.
//!
//! Wraps the Serper search API: request construction, response decoding, and
//! markdown rendering of the answer box, organic hits, knowledge graph, and
//! related searches.

pub mod client;
pub mod format;
pub mod handler;
pub mod types;

pub use client::SerperClient;
pub use handler::WebSearchHandler;
pub use types::SearchResponse;
