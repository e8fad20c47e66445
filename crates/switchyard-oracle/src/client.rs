// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the chat-completions oracle.
//!
//! Provides [`GroqClient`] which handles request construction, bearer
//! authentication, and response decoding. Exactly one attempt is made per
//! call: a timeout or transport failure surfaces immediately as an oracle
//! error and recovery is the caller's concern.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use switchyard_config::model::OracleConfig;
use switchyard_core::{Oracle, OracleRequest, SwitchyardError};

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client for an OpenAI-compatible chat-completions API.
///
/// Holds the connection pool, default model, and per-request timeout.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    default_model: String,
    max_tokens: u32,
}

impl GroqClient {
    /// Creates a new oracle client from configuration.
    ///
    /// Fails fast if the API key is absent: callers that can degrade
    /// gracefully hold an `Option<GroqClient>` instead.
    pub fn new(config: &OracleConfig) -> Result<Self, SwitchyardError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| SwitchyardError::Config("oracle.api_key is not set".to_string()))?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| SwitchyardError::Config(format!("invalid API key header value: {e}")))?;
        headers.insert("authorization", bearer);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SwitchyardError::Oracle {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_model: config.fast_model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Returns the default model identifier.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}

#[async_trait]
impl Oracle for GroqClient {
    async fn complete(&self, request: OracleRequest) -> Result<String, SwitchyardError> {
        let body = ChatCompletionRequest {
            model: request
                .model
                .unwrap_or_else(|| self.default_model.clone()),
            messages: request.messages,
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SwitchyardError::Timeout {
                        duration: Duration::from_secs(0),
                    }
                } else {
                    SwitchyardError::Oracle {
                        message: format!("HTTP request failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        debug!(status = %status, model = %body.model, "oracle response received");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&text) {
                Ok(api_err) => format!(
                    "oracle API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("oracle API returned {status}: {text}"),
            };
            return Err(SwitchyardError::oracle(message));
        }

        let text = response.text().await.map_err(|e| SwitchyardError::Oracle {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| SwitchyardError::Oracle {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let completion = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
            .to_string();

        if completion.is_empty() {
            return Err(SwitchyardError::oracle("empty completion from oracle"));
        }

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_core::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GroqClient {
        let config = OracleConfig {
            api_key: Some("gsk_test".into()),
            base_url: base_url.to_string(),
            ..OracleConfig::default()
        };
        GroqClient::new(&config).unwrap()
    }

    fn test_request() -> OracleRequest {
        OracleRequest::new(
            vec![
                ChatMessage::system("You are helpful."),
                ChatMessage::user("Hello"),
            ],
            0.1,
        )
    }

    fn success_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test",
            "model": "llama-3.1-8b-instant",
            "choices": [
                {"message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
        })
    }

    #[tokio::test]
    async fn complete_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.complete(test_request()).await.unwrap();
        assert_eq!(result, "Hi there!");
    }

    #[tokio::test]
    async fn client_sends_bearer_auth_and_default_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(
                serde_json::json!({"model": "llama-3.1-8b-instant"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.complete(test_request()).await.is_ok());
    }

    #[tokio::test]
    async fn per_request_model_override_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"model": "deepseek-r1-distill-llama-70b"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = test_request().with_model("deepseek-r1-distill-llama-70b");
        assert!(client.complete(request).await.is_ok());
    }

    #[tokio::test]
    async fn api_error_body_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete(test_request()).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid API Key"), "got: {msg}");
        assert!(msg.contains("invalid_request_error"), "got: {msg}");
    }

    #[tokio::test]
    async fn rate_limit_is_not_retried() {
        let server = MockServer::start().await;
        // A single 429 must produce a single request and an error.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limited", "type": "rate_limit_error"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.complete(test_request()).await.is_err());
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-empty",
                "model": "m",
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete(test_request()).await.unwrap_err();
        assert!(err.to_string().contains("empty completion"));
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let config = OracleConfig::default();
        assert!(GroqClient::new(&config).is_err());
    }
}
