// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing core for Switchyard.
//!
//! This crate holds the two pieces that make up the routing core: the
//! [`classifier`] (oracle-backed with a deterministic keyword fallback) and
//! the [`dispatcher`] (the state machine that drives classification,
//! dispatches to exactly one handler, and normalizes every outcome into a
//! fully-populated [`switchyard_core::AgentOutcome`]).

pub mod classifier;
pub mod dispatcher;

pub use classifier::{fallback_route, Classification, QueryClassifier};
pub use dispatcher::Dispatcher;
