//! API request and response models for the analysis server.
//!
//! These are Data Transfer Objects (DTOs) that define the shape of
//! JSON exchanged with the page.

use serde::{Deserialize, Serialize};

use lexscan_core::{Category, Sample};

// =============================================================================
// Analysis (`/api/analyze`)
// =============================================================================

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Legal text to analyze.
    #[serde(default)]
    pub text: String,
    /// Category label. Unknown labels use General Analysis.
    #[serde(default)]
    pub category: String,
}

/// Response of `POST /api/analyze`.
///
/// Carries only the text; generated and fallback answers look the same.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

// =============================================================================
// Page Data (`/api/categories`, `/api/examples`)
// =============================================================================

/// Response of `GET /api/categories`.
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<&'static str>,
    pub default: &'static str,
}

impl CategoryList {
    pub fn all() -> Self {
        Self {
            categories: Category::ALL.iter().map(Category::label).collect(),
            default: Category::UI_DEFAULT.label(),
        }
    }
}

/// One row of `GET /api/examples`.
#[derive(Debug, Serialize)]
pub struct ExampleEntry {
    pub text: &'static str,
    pub category: &'static str,
}

impl From<&Sample> for ExampleEntry {
    fn from(sample: &Sample) -> Self {
        Self {
            text: sample.text,
            category: sample.category.label(),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}
