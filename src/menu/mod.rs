//! Menu graph - read-only join over the menu relations
//!
//! The graph is built once from [`MenuData`] and never mutated afterwards, so
//! it can be shared between concurrent requests behind an `Arc` without
//! locking.

mod load;
mod resolve;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::MenuResult;
use crate::types::{
    Composition, Dish, Id, Ingredient, MenuData, ResolvedIngredient, ResolvedSide, Side,
    SideOption,
};

/// Immutable menu with id indexes over every relation
#[derive(Debug, Clone)]
pub struct MenuGraph {
    pub(crate) data: MenuData,
    dish_index: HashMap<Id, usize>,
    ingredient_index: HashMap<Id, usize>,
    side_index: HashMap<Id, usize>,
    /// dish id → positions in `data.compositions`, source order
    compositions_by_dish: HashMap<Id, Vec<usize>>,
    /// dish id → positions in `data.side_options`, source order
    side_options_by_dish: HashMap<Id, Vec<usize>>,
    source: Option<String>,
    loaded_at: DateTime<Utc>,
}

/// Size of the loaded menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuStats {
    #[serde(rename = "plats")]
    pub dishes: usize,
    pub ingredients: usize,
    #[serde(rename = "accompagnements")]
    pub sides: usize,
    pub compositions: usize,
    #[serde(rename = "optionsAccompagnement")]
    pub side_options: usize,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "loadedAt")]
    pub loaded_at: String,
}

fn index_by_id<T>(items: &[T], id: impl Fn(&T) -> Id, relation: &str) -> HashMap<Id, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let key = id(item);
        if index.contains_key(&key) {
            warn!(relation, id = key, "duplicate id, keeping the first record");
            continue;
        }
        index.insert(key, position);
    }
    index
}

fn group_by_dish<T>(items: &[T], dish_id: impl Fn(&T) -> Id) -> HashMap<Id, Vec<usize>> {
    let mut groups: HashMap<Id, Vec<usize>> = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        groups.entry(dish_id(item)).or_default().push(position);
    }
    groups
}

impl MenuGraph {
    /// Build the graph and its indexes from already-parsed menu data
    pub fn from_data(data: MenuData) -> Self {
        let dish_index = index_by_id(&data.dishes, |d| d.id, "plats");
        let ingredient_index = index_by_id(&data.ingredients, |i| i.id, "ingredients");
        let side_index = index_by_id(&data.sides, |s| s.id, "accompagnements");
        let compositions_by_dish = group_by_dish(&data.compositions, |c| c.dish_id);
        let side_options_by_dish = group_by_dish(&data.side_options, |o| o.dish_id);

        Self {
            data,
            dish_index,
            ingredient_index,
            side_index,
            compositions_by_dish,
            side_options_by_dish,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Empty menu
    pub fn empty() -> Self {
        Self::from_data(MenuData::default())
    }

    /// Load a menu from a JSON string
    pub fn from_json_str(json: &str) -> MenuResult<Self> {
        load::from_json_str(json)
    }

    /// Load a menu from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MenuResult<Self> {
        load::from_file(path.as_ref())
    }

    pub(crate) fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    /// Dishes in menu order
    pub fn dishes(&self) -> &[Dish] {
        &self.data.dishes
    }

    pub fn dish(&self, id: Id) -> Option<&Dish> {
        self.dish_index.get(&id).map(|&i| &self.data.dishes[i])
    }

    pub fn ingredient(&self, id: Id) -> Option<&Ingredient> {
        self.ingredient_index
            .get(&id)
            .map(|&i| &self.data.ingredients[i])
    }

    pub fn side(&self, id: Id) -> Option<&Side> {
        self.side_index.get(&id).map(|&i| &self.data.sides[i])
    }

    /// Distinct category labels in first-seen menu order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for dish in &self.data.dishes {
            if let Some(category) = dish.category.as_deref() {
                if !categories.iter().any(|c| c == category) {
                    categories.push(category.to_string());
                }
            }
        }
        categories
    }

    pub fn dish_count(&self) -> usize {
        self.data.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.dishes.is_empty()
    }

    /// Where the menu was loaded from, if it came from a file
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn stats(&self) -> MenuStats {
        MenuStats {
            dishes: self.data.dishes.len(),
            ingredients: self.data.ingredients.len(),
            sides: self.data.sides.len(),
            compositions: self.data.compositions.len(),
            side_options: self.data.side_options.len(),
            categories: self.categories(),
            source: self.source.clone(),
            loaded_at: self.loaded_at.to_rfc3339(),
        }
    }

    pub(crate) fn compositions_of(&self, dish_id: Id) -> impl Iterator<Item = &Composition> {
        self.compositions_by_dish
            .get(&dish_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.data.compositions[i])
    }

    pub(crate) fn side_options_of(&self, dish_id: Id) -> impl Iterator<Item = &SideOption> {
        self.side_options_by_dish
            .get(&dish_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.data.side_options[i])
    }
}

impl Default for MenuGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<MenuData> for MenuGraph {
    fn from(data: MenuData) -> Self {
        Self::from_data(data)
    }
}

// Resolution operations (from resolve.rs)
impl MenuGraph {
    /// Ingredients of a dish in composition order
    ///
    /// Edges pointing at a missing ingredient resolve to an `"Unknown"`
    /// placeholder instead of failing.
    pub fn resolve_ingredients(&self, dish_id: Id) -> Vec<ResolvedIngredient> {
        resolve::resolve_ingredients(self, dish_id)
    }

    /// Side options of a dish; empty when the dish offers none
    pub fn resolve_sides(&self, dish_id: Id) -> Vec<ResolvedSide> {
        resolve::resolve_sides(self, dish_id)
    }
}
