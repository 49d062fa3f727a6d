//! HTTP route handlers for the analysis server.
//!
//! Handlers are kept thin, delegating to `lexscan_core::Analyzer`.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use tracing::debug;

use lexscan_core::SAMPLES;

use super::models::{AnalyzeRequest, AnalyzeResponse, CategoryList, ExampleEntry, Health};
use super::templates;
use super::AppState;

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - The analysis page.
pub async fn index() -> Html<String> {
    Html(templates::render_index_page())
}

// =============================================================================
// API Handlers
// =============================================================================

/// POST `/api/analyze` - Analyze legal text.
///
/// Always answers 200 once the body parses: failures surface as fallback text.
pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let analysis = state
        .analyzer
        .analyze_detailed(&request.text, &request.category)
        .await;

    // Not exposed in the response body
    debug!(
        category = %analysis.category,
        fallback = analysis.outcome.is_fallback(),
        "Served analysis"
    );

    Json(AnalyzeResponse {
        result: analysis.text,
    })
}

/// GET `/api/categories` - Category labels and the default selection.
pub async fn api_categories() -> Json<CategoryList> {
    Json(CategoryList::all())
}

/// GET `/api/examples` - Canned example inputs.
pub async fn api_examples() -> Json<Vec<ExampleEntry>> {
    Json(SAMPLES.iter().map(ExampleEntry::from).collect())
}

/// GET `/health` - Liveness probe.
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
