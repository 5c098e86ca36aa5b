//! Error types

use thiserror::Error;

/// Failures while loading the menu reference data
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid menu data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected search requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search terms must be a non-empty list of strings")]
    EmptyTerms,
}

/// Result type for menu loading
pub type MenuResult<T> = Result<T, MenuError>;
