//! Compatibility-classification engine
//!
//! Maps a menu graph and a set of search terms to a per-dish status with the
//! detail a diner needs to act on it (what to remove, what can be swapped,
//! which sides to skip).

mod aggregate;
mod classify;

use std::sync::Arc;

use tracing::debug;

use crate::menu::MenuGraph;
use crate::search::{MatchOptions, SearchTerms, TermMatcher};
use crate::types::MenuSearchResult;

pub use aggregate::search_menu;
pub use classify::{classify_dish, evaluate_sides, is_included};

/// Which names, besides allergen labels, are matched against the terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Flag an ingredient whose name matches a term even if its label does not
    pub match_ingredient_names: bool,
    /// Same for side dishes
    pub match_side_names: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            match_ingredient_names: true,
            match_side_names: false,
        }
    }
}

/// Matching and classification settings of a deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub matcher: MatchOptions,
    pub classify: ClassifyOptions,
}

/// Search service over one immutable menu
#[derive(Debug, Clone)]
pub struct MenuEngine {
    graph: Arc<MenuGraph>,
    matcher: TermMatcher,
    options: ClassifyOptions,
}

impl MenuEngine {
    pub fn new(graph: Arc<MenuGraph>, config: EngineConfig) -> Self {
        Self {
            graph,
            matcher: TermMatcher::new(config.matcher),
            options: config.classify,
        }
    }

    /// Engine over a menu with default settings
    pub fn with_defaults(graph: MenuGraph) -> Self {
        Self::new(Arc::new(graph), EngineConfig::default())
    }

    pub fn graph(&self) -> &MenuGraph {
        &self.graph
    }

    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            matcher: self.matcher.options(),
            classify: self.options,
        }
    }

    /// Classify the whole menu for the given terms
    pub fn search(&self, terms: &SearchTerms) -> MenuSearchResult {
        let result = search_menu(&self.graph, terms, &self.matcher, &self.options);
        debug!(
            terms = terms.len(),
            kept = result.dish_count(),
            total = self.graph.dish_count(),
            "menu search done"
        );
        result
    }
}
