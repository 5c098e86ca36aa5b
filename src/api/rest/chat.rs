//! Chat endpoint - free-text message in, menu advice out

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiError;
use crate::api::state::AppState;
use crate::search::SearchTerms;
use crate::types::{MenuSearchResult, StatusSummary};

const NO_TERMS_REPLY: &str = "Je n'ai pas identifié d'allergènes ou d'ingrédients à éviter. \
     Pourriez-vous reformuler ou lister vos allergies plus clairement ?";

/// Body of POST /api/chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response for POST /api/chat
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "termes")]
    pub terms: Vec<String>,
    /// Human-readable reply
    pub reponse: String,
    #[serde(rename = "resume", skip_serializing_if = "Option::is_none")]
    pub summary: Option<StatusSummary>,
    #[serde(rename = "resultats", skip_serializing_if = "Option::is_none")]
    pub results: Option<MenuSearchResult>,
}

fn reply(terms: &[String], summary: &StatusSummary) -> String {
    format!(
        "J'ai analysé les plats en fonction de vos contraintes ({}). \
         {} plats compatibles, {} plats modifiables (avec retrait d'ingrédients), \
         {} plats incompatibles.",
        terms.join(", "),
        summary.compatible,
        summary.modifiable,
        summary.incompatible
    )
}

/// POST /api/chat - Extract allergen terms from a message and search the menu
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(request)) = payload else {
        return ApiError::bad_request("Field 'message' is required").into_response();
    };

    let extraction = state.extractor.extract(&request.message);
    let terms = match SearchTerms::new(extraction.terms.iter().cloned()) {
        Ok(terms) => terms,
        Err(_) => {
            return Json(ChatResponse {
                terms: Vec::new(),
                reponse: NO_TERMS_REPLY.to_string(),
                summary: None,
                results: None,
            })
            .into_response();
        }
    };

    let results = state.engine.search(&terms);
    let summary = results.summary();
    info!(terms = ?extraction.terms, kept = results.dish_count(), "chat search");

    Json(ChatResponse {
        reponse: reply(&extraction.terms, &summary),
        terms: extraction.terms,
        summary: Some(summary),
        results: Some(results),
    })
    .into_response()
}
