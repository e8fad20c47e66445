// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only interaction logging for Switchyard.
//!
//! Every completed request is recorded as one JSON line in a per-day file
//! (`interactions_YYYYMMDD.jsonl`). Records are never mutated or deleted;
//! the read path aggregates routing-decision counts across all stored days.

pub mod store;

pub use store::InteractionLog;
