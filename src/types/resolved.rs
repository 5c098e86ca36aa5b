//! Dish structure resolved from the menu relations

use serde::Serialize;

use super::Id;

/// Name given to ingredients whose record is missing from the menu
pub const UNKNOWN_INGREDIENT: &str = "Unknown";

/// Ingredient offered in place of a flagged one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitute {
    pub id: Id,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "allergenes", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
}

/// An ingredient as used by one dish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIngredient {
    pub id: Id,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "allergenes", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
    pub modifiable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Substitute>,
}

impl ResolvedIngredient {
    /// Placeholder for a composition edge pointing at a missing ingredient
    pub fn unknown(id: Id, modifiable: bool) -> Self {
        Self {
            id,
            name: UNKNOWN_INGREDIENT.to_string(),
            allergens: None,
            modifiable,
            substitution: None,
        }
    }

    /// Allergen tags, trimmed, empty tags skipped
    pub fn allergen_tags(&self) -> impl Iterator<Item = &str> {
        self.allergens
            .as_deref()
            .unwrap_or_default()
            .split(crate::search::TAG_DELIMITER)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// A side option as offered with one dish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSide {
    pub id: Id,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "allergenes", skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
}
