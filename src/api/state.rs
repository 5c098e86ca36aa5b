//! Shared application state

use crate::engine::MenuEngine;
use crate::extract::Extractor;

/// State shared by every request handler
///
/// Nothing in here is mutated after startup, so handlers share it through an
/// `Arc` without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: MenuEngine,
    pub extractor: Extractor,
}

impl AppState {
    pub fn new(engine: MenuEngine) -> Self {
        Self {
            engine,
            extractor: Extractor::default(),
        }
    }
}
