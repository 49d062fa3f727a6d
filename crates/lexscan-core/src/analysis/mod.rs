//! The request handler: template selection, one provider call, and fallback.
//!
//! Every call ends in exactly one [`Outcome`]:
//!
//! ```text
//! text blank ──────────────────────────────► EmptyInput
//! provider error / malformed body ────────► Unavailable  (service-unavailable text)
//! non-2xx, or 2xx without usable text ─────► Framework    (structured framework text)
//! 2xx with generated text ─────────────────► Generated    (returned verbatim)
//! ```

mod extract;

pub use extract::extract_generated_text;

use tracing::{debug, info, warn};

use crate::category::Category;
use crate::fallback;
use crate::generation::{GenerationError, GenerationParams, GenerationRequest, Generator};
use crate::prompts::build_instruction;

/// Terminal state of one analysis call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Input was blank; the provider was not called.
    EmptyInput,
    /// The provider produced text.
    Generated(String),
    /// The provider answered but gave nothing usable.
    Framework,
    /// The provider could not be reached or returned garbage.
    Unavailable(GenerationError),
}

impl Outcome {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::EmptyInput => "empty_input",
            Outcome::Generated(_) => "generated",
            Outcome::Framework => "framework",
            Outcome::Unavailable(_) => "unavailable",
        }
    }

    /// Returns true when the text shown to the user is static boilerplate.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Framework | Outcome::Unavailable(_))
    }

    /// Produces the user-facing text for this outcome.
    pub fn render(&self, category: Category, input: &str) -> String {
        match self {
            Outcome::EmptyInput => fallback::EMPTY_INPUT_PROMPT.to_string(),
            Outcome::Generated(text) => text.clone(),
            Outcome::Framework => fallback::structured_framework(category, input),
            Outcome::Unavailable(_) => fallback::service_unavailable(category),
        }
    }
}

/// Full result of one analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub category: Category,
    pub outcome: Outcome,
    /// What the user sees.
    pub text: String,
}

/// Turns legal text into an analysis using a [`Generator`].
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// calls.
pub struct Analyzer<G: Generator> {
    generator: G,
    params: GenerationParams,
}

impl<G: Generator> Analyzer<G> {
    /// Creates an analyzer with default generation parameters.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
        }
    }

    /// Overrides the generation parameters.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Analyzes `text` under the category labelled `category`.
    ///
    /// Unknown labels use General Analysis. Never fails: every error becomes
    /// one of the fallback texts.
    pub async fn analyze(&self, text: &str, category: &str) -> String {
        self.analyze_detailed(text, category).await.text
    }

    /// Like [`Analyzer::analyze`], but also reports which branch was taken.
    pub async fn analyze_detailed(&self, text: &str, category: &str) -> Analysis {
        self.analyze_with(text, Category::resolve(category)).await
    }

    /// Analyzes `text` under an already-resolved category.
    pub async fn analyze_with(&self, text: &str, category: Category) -> Analysis {
        let outcome = self.run(text, category).await;

        match &outcome {
            Outcome::Unavailable(err) => {
                warn!(category = %category, error = %err, "Generation failed, using unavailable notice")
            }
            Outcome::Framework => {
                warn!(category = %category, "No usable generated text, using structured framework")
            }
            _ => {}
        }
        info!(
            category = %category,
            outcome = outcome.kind(),
            input_chars = text.chars().count(),
            "Analysis complete"
        );

        Analysis {
            category,
            text: outcome.render(category, text),
            outcome,
        }
    }

    /// Returns the instruction that would be sent for this input.
    pub fn instruction_for(&self, text: &str, category: &str) -> String {
        build_instruction(Category::resolve(category), text)
    }

    async fn run(&self, text: &str, category: Category) -> Outcome {
        if text.trim().is_empty() {
            return Outcome::EmptyInput;
        }

        let request = GenerationRequest::new(build_instruction(category, text), self.params);
        debug!(
            category = %category,
            prompt_chars = request.inputs.chars().count(),
            "Sending generation request"
        );

        let response = match self.generator.generate(&request).await {
            Ok(response) => response,
            Err(err) => return Outcome::Unavailable(err),
        };

        if !response.is_success() {
            debug!(status = response.status, "Provider returned non-success status");
            return Outcome::Framework;
        }

        let value: serde_json::Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(err) => return Outcome::Unavailable(GenerationError::MalformedJson(err.to_string())),
        };

        match extract_generated_text(&value) {
            Ok(Some(generated)) => Outcome::Generated(generated),
            Ok(None) => Outcome::Framework,
            Err(err) => Outcome::Unavailable(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_kinds() {
        assert_eq!(Outcome::EmptyInput.kind(), "empty_input");
        assert_eq!(Outcome::Generated("x".into()).kind(), "generated");
        assert!(Outcome::Framework.is_fallback());
        assert!(Outcome::Unavailable(GenerationError::Timeout).is_fallback());
        assert!(!Outcome::EmptyInput.is_fallback());
    }

    #[test]
    fn test_render_generated_is_verbatim() {
        let outcome = Outcome::Generated("**Result**\n".to_string());
        assert_eq!(outcome.render(Category::General, "ignored"), "**Result**\n");
    }

    #[test]
    fn test_render_unavailable_ignores_input() {
        let a = Outcome::Unavailable(GenerationError::Timeout).render(Category::Contract, "one");
        let b = Outcome::Unavailable(GenerationError::Timeout).render(Category::Contract, "two");
        assert_eq!(a, b);
    }
}
