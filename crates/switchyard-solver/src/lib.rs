// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Oracle-delegating handlers for Switchyard: the step-wise math solver and
//! general conversation.
//!
//! The solver classifies problems by keyword into broad kinds (calculus,
//! algebra, geometry, ...) and steers the oracle with a kind-specific
//! tutoring prompt. General chat is the default route with no
//! preprocessing at all.

pub mod chat;
pub mod handler;
pub mod problem;

pub use chat::GeneralChatHandler;
pub use handler::MathSolverHandler;
pub use problem::{classify_problem, ProblemKind};
