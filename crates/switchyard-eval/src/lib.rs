// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Evaluation harnesses for the query agent.
//!
//! Two fixed benchmarks are replayed through the dispatch pipeline: a
//! grade-school math set scored by numeric answer extraction, and a factual
//! recall set scored by substring matching. Results are written as
//! timestamped JSON documents so runs can be compared over time.

pub mod dataset;
pub mod extract;
pub mod harness;
pub mod history;

pub use extract::extract_numeric_answer;
pub use harness::{run_evaluation, CategoryPerformance, EvalDetail, EvalKind, EvalResults};
pub use history::{compare_runs, run_history, HistoryEntry, RunComparison};
