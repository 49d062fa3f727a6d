mod error;
mod inference;

pub use error::GenerationError;
pub use inference::InferenceClient;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE};

/// Sampling parameters sent alongside the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
        }
    }
}

/// Request body for the text-generation endpoint.
///
/// Serializes as `{"inputs": ..., "parameters": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParams,
}

impl GenerationRequest {
    pub fn new(inputs: impl Into<String>, parameters: GenerationParams) -> Self {
        Self {
            inputs: inputs.into(),
            parameters,
        }
    }
}

/// What the provider sent back when the transport itself succeeded.
///
/// The status is kept as-is; interpreting it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A text-generation provider.
///
/// This is the only seam between the analysis logic and the network, so
/// providers can be swapped or mocked without touching fallback handling.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send one request and return the raw response.
    ///
    /// Only transport failures are errors. A non-2xx status is a valid
    /// [`RawResponse`].
    async fn generate(&self, request: &GenerationRequest) -> Result<RawResponse, GenerationError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl Generator for Box<dyn Generator> {
    async fn generate(&self, request: &GenerationRequest) -> Result<RawResponse, GenerationError> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn generate(&self, request: &GenerationRequest) -> Result<RawResponse, GenerationError> {
        (**self).generate(request).await
    }
}
