pub mod analysis;
pub mod category;
pub mod config;
pub mod fallback;
pub mod generation;
pub mod prompts;
pub mod samples;

pub use analysis::{extract_generated_text, Analysis, Analyzer, Outcome};
pub use category::{Category, UnknownCategory};
pub use config::{Config, ConfigError, GenerationConfig, ServerConfig};
pub use generation::{
    GenerationError, GenerationParams, GenerationRequest, Generator, InferenceClient, RawResponse,
};
pub use samples::{Sample, SAMPLES, USE_CASES};
