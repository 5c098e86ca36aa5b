//! Data types for the allergen menu engine
//!
//! This module contains the menu reference records, the resolved per-dish
//! structure and the classification results.

pub(crate) mod ingest;
mod menu;
mod resolved;
mod result;

pub use ingest::parse_flag;
pub use menu::{Composition, Dish, Ingredient, MenuData, Side, SideOption};
pub use resolved::{ResolvedIngredient, ResolvedSide, Substitute, UNKNOWN_INGREDIENT};
pub use result::{
    CategoryGroup, DishResult, MenuSearchResult, SideReport, Status, StatusSummary,
    Substitution, DEFAULT_CATEGORY,
};

/// Identifier shared by every menu relation
pub type Id = u64;
