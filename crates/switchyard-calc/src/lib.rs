// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safe arithmetic evaluation for Switchyard.
//!
//! A small expression interpreter restricted to a whitelisted grammar:
//! binary `+ - * / ** %`, unary sign, and a fixed set of named functions and
//! constants. Natural-language phrasing ("20% of 150", "2 plus 3") is
//! rewritten by a deterministic preprocessing pipeline before parsing.
//! Untrusted input never reaches anything resembling a general evaluator.

pub mod error;
pub mod eval;
pub mod format;
pub mod handler;
pub mod parser;
pub mod preprocess;

pub use error::CalcError;
pub use handler::{calculate, CalculatorHandler};
