// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Oracle client for Switchyard.
//!
//! This crate implements the [`switchyard_core::Oracle`] trait against an
//! OpenAI-compatible chat-completions API (Groq by default). It covers
//! request serialization, bearer authentication, timeout handling, and
//! response decoding. Each call is a single attempt with no retries.

pub mod client;
pub mod types;

pub use client::GroqClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse};
