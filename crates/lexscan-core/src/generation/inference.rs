use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{GenerationError, GenerationRequest, Generator, RawResponse};
use crate::config::{GenerationConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Client for hosted text-generation inference endpoints.
///
/// Posts `{"inputs", "parameters"}` JSON and hands back the status and body
/// untouched. Works with the Hugging Face Inference API and anything that
/// speaks the same request format.
pub struct InferenceClient {
    endpoint: String,
    api_token: Option<String>,
    timeout: Duration,
    client: Client,
}

impl InferenceClient {
    /// Creates a new client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: Client::new(),
        }
    }

    /// Creates a client for the default hosted model.
    pub fn hosted() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Creates a client from generation configuration.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let client = Self::new(&config.endpoint).with_timeout(config.timeout());
        match &config.api_token {
            Some(token) => client.with_api_token(token),
            None => client,
        }
    }

    /// Sets a bearer token. Empty tokens are ignored.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Sets how long to wait for the whole request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Generator for InferenceClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<RawResponse, GenerationError> {
        let mut req = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header("content-type", "application/json");

        // Only add authorization if a token is configured
        if let Some(token) = &self.api_token {
            req = req.header("authorization", format!("Bearer {}", token));
        }

        let response = req.json(request).send().await?;
        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout
            } else {
                GenerationError::Body(e.to_string())
            }
        })?;

        debug!(status, bytes = body.len(), "Received inference response");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InferenceClient::new("https://api.example.com/models/t5");
        assert_eq!(client.endpoint(), "https://api.example.com/models/t5");
        assert_eq!(client.timeout(), Duration::from_secs(60));
        assert!(client.api_token.is_none());
    }

    #[test]
    fn test_hosted_client() {
        let client = InferenceClient::hosted();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_empty_token_ignored() {
        let client = InferenceClient::hosted().with_api_token("");
        assert!(client.api_token.is_none());
    }

    #[test]
    fn test_from_config() {
        let config = GenerationConfig {
            endpoint: "http://localhost:8080/generate".to_string(),
            timeout_secs: 5,
            api_token: Some("hf_test".to_string()),
            ..Default::default()
        };
        let client = InferenceClient::from_config(&config);
        assert_eq!(client.endpoint(), "http://localhost:8080/generate");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.api_token.as_deref(), Some("hf_test"));
    }
}
