//! Menu reference data as stored on disk
//!
//! Field names follow the French wire format of the menu files (`nom`,
//! `allergenes`, `platId`, ...); English aliases are accepted as well.

use serde::{Deserialize, Serialize};

use super::ingest::{
    deserialize_flag, deserialize_id, deserialize_label, deserialize_opt_id,
};
use super::Id;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        rename = "categorie",
        alias = "category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "aDesAccompagnements",
        alias = "hasSides",
        alias = "has_sides",
        default,
        deserialize_with = "deserialize_flag"
    )]
    pub has_sides: bool,
}

impl Dish {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: None,
            has_sides: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sides(mut self) -> Self {
        self.has_sides = true;
        self
    }
}

/// An ingredient and its allergen label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(
        rename = "allergenes",
        alias = "allergens",
        default,
        deserialize_with = "deserialize_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub allergens: Option<String>,
    /// Ingredient offered in place of this one, if any
    #[serde(
        default,
        alias = "substitutionId",
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub substitution: Option<Id>,
}

impl Ingredient {
    pub fn new(id: Id, name: impl Into<String>, allergens: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            allergens: allergens
                .filter(|label| !label.trim().is_empty())
                .map(str::to_string),
            substitution: None,
        }
    }

    pub fn with_substitution(mut self, substitution: Id) -> Self {
        self.substitution = Some(substitution);
        self
    }
}

/// Composition edge: a dish uses an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(
        rename = "platId",
        alias = "dishId",
        alias = "plat_id",
        deserialize_with = "deserialize_id"
    )]
    pub dish_id: Id,
    #[serde(
        rename = "ingredientId",
        alias = "ingredient_id",
        deserialize_with = "deserialize_id"
    )]
    pub ingredient_id: Id,
    /// Can the diner ask for this ingredient to be removed or swapped?
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub modifiable: bool,
    /// Per-dish substitution, overriding the ingredient's own
    #[serde(
        default,
        alias = "substitutionId",
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub substitution: Option<Id>,
}

impl Composition {
    pub fn new(dish_id: Id, ingredient_id: Id, modifiable: bool) -> Self {
        Self {
            dish_id,
            ingredient_id,
            modifiable,
            substitution: None,
        }
    }

    pub fn with_substitution(mut self, substitution: Id) -> Self {
        self.substitution = Some(substitution);
        self
    }
}

/// A side dish (accompaniment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
    #[serde(
        rename = "allergenes",
        alias = "allergens",
        default,
        deserialize_with = "deserialize_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub allergens: Option<String>,
}

impl Side {
    pub fn new(id: Id, name: impl Into<String>, allergens: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            allergens: allergens
                .filter(|label| !label.trim().is_empty())
                .map(str::to_string),
        }
    }
}

/// Side option edge: a dish can be served with a side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideOption {
    #[serde(
        rename = "platId",
        alias = "dishId",
        alias = "plat_id",
        deserialize_with = "deserialize_id"
    )]
    pub dish_id: Id,
    #[serde(
        rename = "accompagnementId",
        alias = "sideId",
        alias = "accompagnement_id",
        deserialize_with = "deserialize_id"
    )]
    pub side_id: Id,
}

impl SideOption {
    pub fn new(dish_id: Id, side_id: Id) -> Self {
        Self { dish_id, side_id }
    }
}

/// The five menu relations, as loaded from a menu file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuData {
    #[serde(rename = "plats", alias = "dishes", default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(
        rename = "platIngredients",
        alias = "compositions",
        alias = "plat_ingredients",
        default
    )]
    pub compositions: Vec<Composition>,
    #[serde(rename = "accompagnements", alias = "sides", default)]
    pub sides: Vec<Side>,
    #[serde(
        rename = "platAccompagnements",
        alias = "sideOptions",
        alias = "plat_accompagnements",
        default
    )]
    pub side_options: Vec<SideOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_french_menu() {
        let json = r#"{
            "plats": [
                {"id": 1, "nom": "Salade", "description": "Fraîche", "categorie": "Entrées", "aDesAccompagnements": "Non"},
                {"id": "2", "nom": "Steak", "aDesAccompagnements": "Oui"}
            ],
            "ingredients": [
                {"id": 1, "nom": "noix", "allergenes": "fruits à coque", "substitution": 2},
                {"id": 2, "nom": "graines de tournesol", "allergenes": ""}
            ],
            "platIngredients": [
                {"platId": 1, "ingredientId": 1, "modifiable": "Non"}
            ],
            "accompagnements": [
                {"id": 1, "nom": "Frites", "allergenes": ["gluten"]}
            ],
            "platAccompagnements": [
                {"platId": 2, "accompagnementId": 1}
            ]
        }"#;

        let data: MenuData = serde_json::from_str(json).unwrap();
        assert_eq!(data.dishes.len(), 2);
        assert_eq!(data.dishes[0].category.as_deref(), Some("Entrées"));
        assert!(!data.dishes[0].has_sides);
        assert_eq!(data.dishes[1].id, 2);
        assert!(data.dishes[1].has_sides);
        assert_eq!(data.dishes[1].category, None);
        assert_eq!(data.ingredients[0].substitution, Some(2));
        assert_eq!(data.ingredients[1].allergens, None);
        assert!(!data.compositions[0].modifiable);
        assert_eq!(data.sides[0].allergens.as_deref(), Some("gluten"));
        assert_eq!(data.side_options[0], SideOption::new(2, 1));
    }

    #[test]
    fn test_parse_english_aliases() {
        let json = r#"{
            "dishes": [{"id": 1, "name": "Soup", "category": "Starters", "hasSides": true}],
            "ingredients": [{"id": 1, "name": "cream", "allergens": ["milk"]}],
            "compositions": [{"dishId": 1, "ingredientId": 1, "modifiable": true}],
            "sides": [],
            "sideOptions": []
        }"#;

        let data: MenuData = serde_json::from_str(json).unwrap();
        assert_eq!(data.dishes[0].name, "Soup");
        assert!(data.dishes[0].has_sides);
        assert!(data.compositions[0].modifiable);
        assert_eq!(data.ingredients[0].allergens.as_deref(), Some("milk"));
    }

    #[test]
    fn test_missing_modifiable_defaults_to_false() {
        let edge: Composition =
            serde_json::from_str(r#"{"platId": 1, "ingredientId": 3}"#).unwrap();
        assert!(!edge.modifiable);
        assert_eq!(edge.substitution, None);
    }
}
