//! Menu endpoints - read-only views of the loaded menu

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::state::AppState;
use crate::types::{Id, ResolvedIngredient, ResolvedSide};

/// A dish with its resolved structure
#[derive(Debug, Serialize)]
pub struct DishView {
    pub id: Id,
    pub nom: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie: Option<String>,
    pub ingredients: Vec<ResolvedIngredient>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accompagnements: Vec<ResolvedSide>,
}

/// GET /api/menu - Every dish in menu order
pub async fn list_dishes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let graph = state.engine.graph();
    let dishes: Vec<DishView> = graph
        .dishes()
        .iter()
        .map(|dish| DishView {
            id: dish.id,
            nom: dish.name.clone(),
            description: dish.description.clone(),
            categorie: dish.category.clone(),
            ingredients: graph.resolve_ingredients(dish.id),
            accompagnements: graph.resolve_sides(dish.id),
        })
        .collect();

    Json(dishes)
}

/// GET /api/menu/stats - Menu size and load time
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.engine.graph().stats())
}
