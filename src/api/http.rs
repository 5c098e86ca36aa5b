//! HTTP server setup with Axum

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info_span};

use super::rest::{chat, extract, menu, search, ApiError};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The chat page may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/rechercher", post(search::search_menu))
        .route("/api/chat", post(chat::chat))
        .route("/api/extract", get(extract::extract_terms))
        .route("/api/menu", get(menu::list_dishes))
        .route("/api/menu/stats", get(menu::get_stats))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(trace)
        .with_state(state)
}

/// Serve files from `dir` for every path no endpoint claims
pub fn with_static_dir(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Turn a panic inside a handler into a generic 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%details, "request handler panicked");

    ApiError::internal("Erreur interne du serveur").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MenuEngine;
    use crate::menu::MenuGraph;
    use crate::types::{Composition, Dish, Ingredient, MenuData, Side, SideOption};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        let graph = MenuGraph::from_data(MenuData {
            dishes: vec![
                Dish::new(1, "Salade aux noix")
                    .with_category("Entrées")
                    .with_description("Salade verte et noix"),
                Dish::new(2, "Steak frites").with_category("Plats").with_sides(),
            ],
            ingredients: vec![
                Ingredient::new(1, "noix", Some("fruits à coque")),
                Ingredient::new(2, "laitue", None),
                Ingredient::new(3, "boeuf", None),
            ],
            compositions: vec![
                Composition::new(1, 2, false),
                Composition::new(1, 1, true),
                Composition::new(2, 3, false),
            ],
            sides: vec![
                Side::new(1, "Frites", Some("gluten")),
                Side::new(2, "Salade", None),
            ],
            side_options: vec![SideOption::new(2, 1), SideOption::new(2, 2)],
        });
        let state = Arc::new(AppState::new(MenuEngine::with_defaults(graph)));
        create_router(state)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_groups_by_category() {
        let response = app()
            .oneshot(post_json("/rechercher", json!({"recherche": ["noix", "gluten"]})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let salade = &body["Entrées"][0];
        assert_eq!(salade["nom"], "Salade aux noix");
        assert_eq!(salade["status"], "modifiable");
        assert_eq!(salade["ingredientsModifiables"], json!(["noix"]));
        assert_eq!(salade["ingredients"], json!(["laitue", "noix"]));
        assert_eq!(salade["allergenes"], json!(["fruits à coque"]));

        let steak = &body["Plats"][0];
        assert_eq!(steak["status"], "compatible");
        assert_eq!(steak["accompagnements"]["compatibles"], json!(["Salade"]));
        assert_eq!(steak["accompagnements"]["incompatibles"], json!(["Frites"]));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_input() {
        for body in [
            json!({}),
            json!({"recherche": []}),
            json!({"recherche": "gluten"}),
            json!({"recherche": [1, 2]}),
            json!({"recherche": ["", "  "]}),
        ] {
            let response = app().oneshot(post_json("/rechercher", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error = body_json(response).await;
            assert_eq!(error["code"], "BAD_REQUEST");
            assert_eq!(error["error"], "Critères de recherche invalides.");
        }
    }

    #[tokio::test]
    async fn test_chat_extracts_then_searches() {
        let response = app()
            .oneshot(post_json(
                "/api/chat",
                json!({"message": "Je suis allergique aux noix"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["termes"], json!(["noix"]));
        assert_eq!(body["resume"]["modifiable"], 1);
        assert_eq!(body["resume"]["compatible"], 1);
        assert_eq!(body["resultats"]["Entrées"][0]["status"], "modifiable");
    }

    #[tokio::test]
    async fn test_chat_without_terms() {
        let response = app()
            .oneshot(post_json("/api/chat", json!({"message": "Bonjour !"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["termes"], json!([]));
        assert!(body.get("resultats").is_none());
        assert!(body["reponse"].as_str().unwrap().contains("reformuler"));
    }

    #[tokio::test]
    async fn test_extract_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/extract?text=sans%20gluten%20ni%20lait")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["termes"], json!(["gluten", "lait"]));
        assert_eq!(body["motCle"], true);
    }

    #[tokio::test]
    async fn test_menu_endpoints() {
        let response = app()
            .oneshot(Request::builder().uri("/api/menu").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["ingredients"][1]["nom"], "noix");
        assert_eq!(body[0]["ingredients"][1]["modifiable"], true);
        assert_eq!(body[1]["accompagnements"][0]["nom"], "Frites");

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/menu/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let stats = body_json(response).await;
        assert_eq!(stats["plats"], 2);
        assert_eq!(stats["categories"], json!(["Entrées", "Plats"]));
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
