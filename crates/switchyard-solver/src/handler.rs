// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The step-wise math solver handler.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use switchyard_core::{
    ChatMessage, Handler, Oracle, OracleRequest, RoutingLabel, SwitchyardError,
};

use crate::problem::{classify_problem, system_prompt};

/// Low temperature keeps multi-step derivations consistent.
const SOLVER_TEMPERATURE: f32 = 0.1;

/// Handler bound to the `math_solver` routing label.
///
/// Delegates the actual reasoning to an oracle, steered by a problem-kind
/// specific system prompt. Without an oracle every call reports the solver
/// as unavailable.
pub struct MathSolverHandler {
    oracle: Option<Arc<dyn Oracle>>,
    model: Option<String>,
}

impl MathSolverHandler {
    /// Create a solver backed by the given oracle, optionally pinning a
    /// reasoning model.
    pub fn new(oracle: Arc<dyn Oracle>, model: Option<String>) -> Self {
        Self {
            oracle: Some(oracle),
            model,
        }
    }

    /// A handler with no oracle configured.
    pub fn unavailable() -> Self {
        Self {
            oracle: None,
            model: None,
        }
    }
}

#[async_trait]
impl Handler for MathSolverHandler {
    fn name(&self) -> &str {
        "Math Solver"
    }

    fn label(&self) -> RoutingLabel {
        RoutingLabel::MathSolver
    }

    async fn execute(&self, query: &str) -> Result<String, SwitchyardError> {
        let oracle = match &self.oracle {
            Some(oracle) => oracle,
            None => return Ok("Math solver is not available (LLM not configured)".to_string()),
        };

        let kind = classify_problem(query);
        debug!(kind = %kind, "solving math problem");

        let mut request = OracleRequest::new(
            vec![
                ChatMessage::system(system_prompt(kind)),
                ChatMessage::user(format!("Solve this mathematical problem: {query}")),
            ],
            SOLVER_TEMPERATURE,
        );
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        let solution = oracle.complete(request).await?;

        Ok(format!(
            "**Math Solution ({})**\n\n**Original Problem:** {query}\n\n---\n\n{solution}\n\n---\n*Solved using step-by-step mathematical reasoning*",
            kind.title()
        ))
    }
}
