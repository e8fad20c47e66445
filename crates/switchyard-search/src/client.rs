// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Serper search provider.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use switchyard_config::model::SearchConfig;
use switchyard_core::SwitchyardError;

use crate::types::{SearchRequest, SearchResponse};

/// Client for the search provider. One attempt per call, fixed timeout.
#[derive(Debug, Clone)]
pub struct SerperClient {
    client: reqwest::Client,
    base_url: String,
    result_count: usize,
    hl: String,
    gl: String,
}

impl SerperClient {
    /// Build a client from configuration. Fails when the API key is absent;
    /// the handler treats that as "search unavailable" rather than an error.
    pub fn new(config: &SearchConfig) -> Result<Self, SwitchyardError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| SwitchyardError::Config("search.api_key is not set".to_string()))?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| SwitchyardError::Config(format!("invalid search API key: {e}")))?;
        headers.insert("x-api-key", key);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SwitchyardError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            result_count: config.result_count,
            hl: config.hl.clone(),
            gl: config.gl.clone(),
        })
    }

    /// Run one search query against the provider.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SwitchyardError> {
        let payload = SearchRequest {
            q: query.to_string(),
            num: self.result_count,
            hl: self.hl.clone(),
            gl: self.gl.clone(),
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SwitchyardError::Timeout {
                        duration: Duration::from_secs(0),
                    }
                } else {
                    SwitchyardError::Search {
                        message: format!("search request failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        debug!(status = %status, query = query, "search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SwitchyardError::search(format!(
                "search provider returned {status}: {body}"
            )));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SwitchyardError::Search {
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> SerperClient {
        let config = SearchConfig {
            api_key: Some("serper_test_key".into()),
            base_url: base_url.to_string(),
            ..SearchConfig::default()
        };
        SerperClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn search_sends_api_key_and_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-api-key", "serper_test_key"))
            .and(body_partial_json(serde_json::json!({
                "q": "latest rust release",
                "num": 5,
                "hl": "en",
                "gl": "us"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organic": [{"title": "Rust 1.80", "snippet": "released", "link": "https://blog.rust-lang.org"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let response = client.search("latest rust release").await.unwrap();
        assert_eq!(response.organic.len(), 1);
        assert_eq!(response.organic[0].title.as_deref(), Some("Rust 1.80"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.search("anything").await.unwrap_err();
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let config = SearchConfig::default();
        assert!(SerperClient::new(&config).is_err());
    }
}
