//! Menu search endpoint

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::{debug, info};

use super::ApiError;
use crate::api::state::AppState;
use crate::search::SearchTerms;

const INVALID_CRITERIA: &str = "Critères de recherche invalides.";

/// Body of POST /rechercher
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Allergens or ingredients to avoid
    #[serde(default)]
    pub recherche: Option<Vec<String>>,
}

/// POST /rechercher - Classify every dish for the given search terms
///
/// Returns dishes grouped by category. Dishes that are incompatible with
/// nothing to remove or swap are left out.
pub async fn search_menu(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "rejected search body");
            return ApiError::bad_request(INVALID_CRITERIA).into_response();
        }
    };

    let terms = match SearchTerms::new(request.recherche.unwrap_or_default()) {
        Ok(terms) => terms,
        Err(e) => {
            debug!(error = %e, "rejected search terms");
            return ApiError::bad_request(INVALID_CRITERIA).into_response();
        }
    };

    info!(terms = ?terms.originals().collect::<Vec<_>>(), "search received");

    Json(state.engine.search(&terms)).into_response()
}
