//! Term extraction endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::api::state::AppState;

/// Query parameters for extraction
#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    #[serde(default)]
    pub text: String,
}

/// GET /api/extract - Allergen terms found in `text`
pub async fn extract_terms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExtractParams>,
) -> impl IntoResponse {
    Json(state.extractor.extract(&params.text))
}
