// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The general conversation handler.

use std::sync::Arc;

use async_trait::async_trait;

use switchyard_core::{
    ChatMessage, Handler, Oracle, OracleRequest, RoutingLabel, SwitchyardError,
};

/// Conversation runs a little warmer than routing or solving.
const CHAT_TEMPERATURE: f32 = 0.3;

const CHAT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Provide informative, accurate, and engaging responses. Be conversational but professional. If you don't know something, say so clearly.";

/// Handler bound to the `general_chat` routing label. The default route:
/// no specialized preprocessing, just an oracle conversation.
pub struct GeneralChatHandler {
    oracle: Option<Arc<dyn Oracle>>,
    model: Option<String>,
}

impl GeneralChatHandler {
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
impl Handler for GeneralChatHandler {
    fn name(&self) -> &str {
        "General Chat"
    }

    fn label(&self) -> RoutingLabel {
        RoutingLabel::GeneralChat
    }

    async fn execute(&self, query: &str) -> Result<String, SwitchyardError> {
        let oracle = match &self.oracle {
            Some(oracle) => oracle,
            None => return Ok("Chat is not available (LLM not configured)".to_string()),
        };

        let mut request = OracleRequest::new(
            vec![
                ChatMessage::system(CHAT_SYSTEM_PROMPT),
                ChatMessage::user(query),
            ],
            CHAT_TEMPERATURE,
        );
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        oracle.complete(request).await
    }
}
