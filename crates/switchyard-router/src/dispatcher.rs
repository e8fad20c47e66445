// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch state machine.
//!
//! One request moves through `start -> classified -> dispatched -> done`,
//! never revisiting a state. Classification cannot abort the request (the
//! fallback heuristic always yields a label), handler failures become
//! failure text with an annotated tool label, and the outermost boundary
//! converts anything residual into a generic apology. `process_query` never
//! fails.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, warn};

use switchyard_core::{
    AgentOutcome, Handler, InteractionRecord, QueryPipeline, RoutingLabel, Session,
};
use switchyard_log::InteractionLog;

use crate::classifier::QueryClassifier;

/// Per-request state, owned by one dispatch for the lifetime of the call.
#[derive(Debug)]
struct RequestState {
    routing_decision: RoutingLabel,
    tool_used: String,
    response: String,
    error: String,
}

/// Routes queries to capability handlers and normalizes every outcome.
///
/// Handlers are bound statically at construction, one per routing label.
/// An unbound label falls through to the general-chat binding.
pub struct Dispatcher {
    classifier: QueryClassifier,
    handlers: HashMap<RoutingLabel, Arc<dyn Handler>>,
    log: Option<InteractionLog>,
}

impl Dispatcher {
    /// Create a dispatcher with no handlers bound.
    pub fn new(classifier: QueryClassifier) -> Self {
        Self {
            classifier,
            handlers: HashMap::new(),
            log: None,
        }
    }

    /// Bind a handler to its routing label.
    pub fn with_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.insert(handler.label(), handler);
        self
    }

    /// Record every completed request to the given interaction log.
    pub fn with_log(mut self, log: InteractionLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Routing labels with a bound handler, in priority order.
    pub fn bound_labels(&self) -> Vec<RoutingLabel> {
        RoutingLabel::ALL
            .into_iter()
            .filter(|label| self.handlers.contains_key(label))
            .collect()
    }

    /// Look up the handler for a label, defaulting to the general-chat
    /// binding. Unreachable in practice given the classifier's closed-set
    /// contract, but kept as the last lookup step before the apology
    /// boundary.
    fn handler_for(&self, label: RoutingLabel) -> Option<&Arc<dyn Handler>> {
        self.handlers
            .get(&label)
            .or_else(|| self.handlers.get(&RoutingLabel::GeneralChat))
    }

    fn record(&self, query: &str, state: &RequestState) {
        let log = match &self.log {
            Some(log) => log,
            None => return,
        };
        let record = InteractionRecord {
            timestamp: Local::now().to_rfc3339(),
            query: query.to_string(),
            routing_decision: state.routing_decision.to_string(),
            tool_used: state.tool_used.clone(),
            response_length: state.response.chars().count(),
            error: state.error.clone(),
        };
        if let Err(e) = log.append(&record) {
            warn!(error = %e, "failed to append interaction record");
        }
    }
}

#[async_trait]
impl QueryPipeline for Dispatcher {
    async fn process_query(&self, session: &mut Session, query: &str) -> AgentOutcome {
        // start -> classified
        let classification = self.classifier.classify(query).await;
        let mut state = RequestState {
            routing_decision: classification.label,
            tool_used: String::new(),
            response: String::new(),
            error: classification.error.unwrap_or_default(),
        };

        // classified -> dispatched
        let handler = match self.handler_for(state.routing_decision) {
            Some(handler) => handler,
            None => {
                // Outermost boundary: nothing can serve this request.
                let message = format!(
                    "no handler bound for routing decision '{}'",
                    state.routing_decision
                );
                warn!("{message}");
                let response =
                    format!("I encountered an error processing your request: {message}");
                session.push_turn(query, &response);
                return AgentOutcome {
                    response,
                    tool_used: "Error".to_string(),
                    routing_decision: "error".to_string(),
                    error: message,
                };
            }
        };

        debug!(label = %state.routing_decision, handler = handler.name(), "dispatching query");

        // dispatched -> done
        match handler.execute(query).await {
            Ok(response) => {
                state.response = response;
                state.tool_used = handler.name().to_string();
            }
            Err(e) => {
                state.response = format!("{} failed: {e}", handler.name());
                state.tool_used = format!("{} (Error)", handler.name());
                state.error = e.to_string();
            }
        }

        self.record(query, &state);
        session.push_turn(query, &state.response);

        AgentOutcome {
            response: state.response,
            tool_used: state.tool_used,
            routing_decision: state.routing_decision.to_string(),
            error: state.error,
        }
    }
}
