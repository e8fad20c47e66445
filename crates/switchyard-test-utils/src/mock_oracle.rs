// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock oracle for deterministic testing.
//!
//! `MockOracle` implements `Oracle` with pre-configured completions,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use switchyard_core::{Oracle, OracleRequest, SwitchyardError};

/// A mock oracle that returns pre-configured completions.
///
/// Completions are popped from a FIFO queue. When the queue is empty, a
/// default "mock completion" text is returned. Calling `fail_next` makes
/// every subsequent call fail until the flag is cleared, which exercises
/// the fallback paths.
pub struct MockOracle {
    responses: Arc<Mutex<VecDeque<String>>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MockOracle {
    /// Create a new mock oracle with an empty completion queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock oracle pre-loaded with the given completions.
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.into_iter().map(String::from).collect(),
            )),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock oracle that fails every call.
    pub fn failing() -> Self {
        let oracle = Self::new();
        oracle.failing.store(true, Ordering::SeqCst);
        oracle
    }

    /// Add a completion to the end of the queue.
    pub async fn add_response(&self, text: impl Into<String>) {
        self.responses.lock().await.push_back(text.into());
    }

    /// Toggle failure mode on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `complete` calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock completion".to_string())
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn complete(&self, _request: OracleRequest) -> Result<String, SwitchyardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SwitchyardError::oracle("injected mock failure"));
        }
        Ok(self.next_response().await)
    }
}
