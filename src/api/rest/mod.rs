//! REST API module for HTTP endpoints
//!
//! - `POST /rechercher` - Classify the menu for a list of search terms
//! - `POST /api/chat` - Extract terms from a message, then classify
//! - `GET /api/extract` - Extract terms from a message
//! - `GET /api/menu` - Menu dishes with resolved ingredients and sides
//! - `GET /api/menu/stats` - Menu size and load time

pub mod chat;
pub mod extract;
pub mod menu;
pub mod search;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}
