//! Embedding provider backed by the `/embeddings` endpoint of an
//! OpenAI-compatible API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::config::EmbeddingConfig;
use crate::errors::GatewayError;
use crate::interfaces::EmbeddingProvider;

/// Request timeout for a single embedding call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embeddings client authenticated with a bearer API key.
pub struct OpenAiEmbeddings {
    client: reqwest::Client,
    api_key: String,
    config: EmbeddingConfig,
}

impl OpenAiEmbeddings {
    /// Create a client for the configured endpoint.
    pub fn new(api_key: impl Into<String>, config: EmbeddingConfig) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::configuration("Embedding API key is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        info!(
            endpoint = %config.endpoint(),
            model = %config.model,
            dimensions = config.dimensions,
            "Created embeddings client"
        );

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn parse_response(&self, response: EmbeddingResponse) -> Result<Vec<f32>, GatewayError> {
        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| GatewayError::store("Embedding response contained no data"))?;

        if embedding.len() != self.config.dimensions {
            return Err(GatewayError::store(format!(
                "Embedding has {} dimensions, expected {}",
                embedding.len(),
                self.config.dimensions
            )));
        }

        Ok(embedding)
    }
}

impl fmt::Debug for OpenAiEmbeddings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiEmbeddings")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddings {
    #[instrument(skip(self, text), fields(model = %self.config.model, chars = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>, GatewayError> {
        let request = EmbeddingRequest {
            model: &self.config.model,
            input: text,
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Embedding request failed");
            return Err(GatewayError::store(format!(
                "Embedding failed with status {}: {}",
                status, error_body
            )));
        }

        let body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::store(format!("Invalid embedding response: {}", e)))?;

        let embedding = self.parse_response(body)?;
        debug!(dimensions = embedding.len(), "Computed embedding");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(dimensions: usize) -> OpenAiEmbeddings {
        OpenAiEmbeddings::new(
            "sk-test",
            EmbeddingConfig {
                dimensions,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = OpenAiEmbeddings::new("  ", EmbeddingConfig::default());
        let err = result.unwrap_err();
        assert!(matches!(err, GatewayError::ConfigurationError(_)));
        assert!(!err.is_connectivity());
    }

    #[test]
    fn test_request_body() {
        let request = EmbeddingRequest {
            model: "text-embedding-3-small",
            input: "Name: Quinoa",
        };
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "model": "text-embedding-3-small", "input": "Name: Quinoa" })
        );
    }

    #[test]
    fn test_parse_response() {
        let raw = r#"{"object":"list","data":[{"object":"embedding","index":0,"embedding":[0.1,0.2,0.3]}],"model":"text-embedding-3-small"}"#;
        let response: EmbeddingResponse = serde_json::from_str(raw).unwrap();

        let embedding = client(3).parse_response(response).unwrap();
        assert_eq!(embedding.len(), 3);
        assert_eq!(client(3).dimensions(), 3);
    }

    #[test]
    fn test_parse_response_rejects_wrong_dimensions() {
        let response: EmbeddingResponse =
            serde_json::from_str(r#"{"data":[{"embedding":[0.1,0.2]}]}"#).unwrap();

        let result = client(3).parse_response(response);
        assert!(matches!(result, Err(GatewayError::StoreError(_))));
    }

    #[test]
    fn test_parse_response_rejects_empty_data() {
        let response: EmbeddingResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(client(3).parse_response(response).is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", client(3));
        assert!(!rendered.contains("sk-test"));
        assert!(rendered.contains("<redacted>"));
    }
}
