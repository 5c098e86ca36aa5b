//! API module for HTTP endpoints
//!
//! This module provides the REST API used by the chat page and other clients.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, with_static_dir};
pub use state::AppState;
