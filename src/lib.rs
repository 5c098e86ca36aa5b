//! Allergen-aware menu search
//!
//! Classifies every dish of a restaurant menu against a diner's allergen or
//! ingredient constraints and explains how a dish can be adapted.
//!
//! # Features
//!
//! - **Three statuses**: compatible, modifiable (remove or swap ingredients), incompatible
//! - **Fuzzy matching**: accent-insensitive, plural-aware, synonym families, near-miss spellings
//! - **Substitutions**: a safe replacement rescues a baked-in ingredient
//! - **Side dishes**: reported per dish without affecting its status
//! - **Free text**: extract allergen terms from a chat message
//!
//! # Modules
//!
//! - `types`: Menu records, resolved views and classification results
//! - `menu`: Immutable, indexed menu graph and JSON loading
//! - `search`: Normalization, synonyms and term matching
//! - `engine`: Per-dish classification and category grouping
//! - `extract`: Allergen term extraction from free text
//! - `api`: HTTP endpoints
//! - `config`: Command-line and environment settings
//!
//! # Example
//!
//! ```no_run
//! use allergen_menu::{MenuEngine, MenuGraph, SearchTerms};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = MenuGraph::from_file("menu.json")?;
//!     let engine = MenuEngine::with_defaults(graph);
//!     let results = engine.search(&SearchTerms::new(["gluten", "noix"])?);
//!     println!("{}", serde_json::to_string_pretty(&results)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod menu;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use engine::{ClassifyOptions, EngineConfig, MenuEngine};
pub use error::{MenuError, MenuResult, SearchError};
pub use extract::{extract_terms, Extractor};
pub use menu::MenuGraph;
pub use search::{normalize, MatchOptions, SearchTerms, TermMatcher};
pub use types::{
    Composition, Dish, DishResult, Id, Ingredient, MenuData, MenuSearchResult, Side, SideOption,
    Status,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
