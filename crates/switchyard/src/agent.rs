// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline assembly.
//!
//! Wires the oracle client, classifier, handlers, document retriever, and
//! interaction log into a [`Dispatcher`]. Missing API keys degrade the
//! affected handlers to their unavailable messages instead of failing
//! startup.

use std::sync::Arc;

use tracing::{info, warn};

use switchyard_calc::CalculatorHandler;
use switchyard_config::model::SwitchyardConfig;
use switchyard_core::Oracle;
use switchyard_docqa::{DocumentQaHandler, Retriever};
use switchyard_log::InteractionLog;
use switchyard_oracle::GroqClient;
use switchyard_router::{Dispatcher, QueryClassifier};
use switchyard_search::{SerperClient, WebSearchHandler};
use switchyard_solver::{GeneralChatHandler, MathSolverHandler};

/// The assembled agent: dispatcher plus the shared retriever so commands
/// can rebuild the index without tearing the pipeline down.
pub struct Agent {
    pub dispatcher: Dispatcher,
    pub retriever: Arc<Retriever>,
}

/// Builds the full pipeline from configuration.
pub fn build_agent(config: &SwitchyardConfig) -> Agent {
    let oracle: Option<Arc<dyn Oracle>> = match GroqClient::new(&config.oracle) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "oracle unavailable, using keyword fallback routing");
            None
        }
    };

    let classifier = match &oracle {
        Some(oracle) => QueryClassifier::new(oracle.clone()),
        None => QueryClassifier::without_oracle(),
    };

    let search_handler = match SerperClient::new(&config.search) {
        Ok(client) => WebSearchHandler::new(client),
        Err(e) => {
            warn!(error = %e, "search unavailable");
            WebSearchHandler::unavailable()
        }
    };

    let solver_handler = match &oracle {
        Some(oracle) => {
            MathSolverHandler::new(oracle.clone(), Some(config.oracle.solver_model.clone()))
        }
        None => MathSolverHandler::unavailable(),
    };

    let chat_handler = match &oracle {
        Some(oracle) => {
            GeneralChatHandler::new(oracle.clone(), Some(config.oracle.chat_model.clone()))
        }
        None => GeneralChatHandler::unavailable(),
    };

    let retriever = Arc::new(Retriever::new(config.retrieval.clone()));
    let docqa_handler = DocumentQaHandler::new(
        retriever.clone(),
        oracle.clone(),
        Some(config.oracle.docqa_model.clone()),
    );

    let dispatcher = Dispatcher::new(classifier)
        .with_handler(Arc::new(search_handler))
        .with_handler(Arc::new(solver_handler))
        .with_handler(Arc::new(CalculatorHandler::new()))
        .with_handler(Arc::new(docqa_handler))
        .with_handler(Arc::new(chat_handler))
        .with_log(InteractionLog::new(config.log.dir.clone()));

    info!(
        handlers = dispatcher.bound_labels().len(),
        oracle = oracle.is_some(),
        "agent pipeline assembled"
    );

    Agent {
        dispatcher,
        retriever,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_core::RoutingLabel;

    #[test]
    fn all_labels_bound_without_any_api_keys() {
        let config = SwitchyardConfig::default();
        let agent = build_agent(&config);
        assert_eq!(agent.dispatcher.bound_labels(), RoutingLabel::ALL.to_vec());
    }
}
