// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The web search capability handler.

use async_trait::async_trait;

use switchyard_core::{Handler, RoutingLabel, SwitchyardError};

use crate::client::SerperClient;
use crate::format::format_results;

/// Handler bound to the `web_search` routing label.
///
/// Without a configured provider client every call reports search as
/// unavailable; a missing credential is a degraded mode, not a failure.
pub struct WebSearchHandler {
    client: Option<SerperClient>,
}

impl WebSearchHandler {
    pub fn new(client: SerperClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A handler with no provider credential.
    pub fn unavailable() -> Self {
        Self { client: None }
    }
}

#[async_trait]
impl Handler for WebSearchHandler {
    fn name(&self) -> &str {
        "Web Search"
    }

    fn label(&self) -> RoutingLabel {
        RoutingLabel::WebSearch
    }

    async fn execute(&self, query: &str) -> Result<String, SwitchyardError> {
        let client = match &self.client {
            Some(client) => client,
            None => {
                return Ok(
                    "Web search is not available (API key not configured)".to_string(),
                )
            }
        };

        let response = client.search(query).await?;
        Ok(format_results(&response, query))
    }
}
