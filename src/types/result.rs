//! Classification results

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Id;

/// Bucket for dishes without a category
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Compatibility of a dish with the active search terms
///
/// Variants are ordered by severity, so `max()` over statuses yields the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No flagged ingredient
    Compatible,
    /// Flagged ingredients can all be removed or swapped
    Modifiable,
    /// At least one flagged ingredient is baked in with no safe swap
    Incompatible,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Compatible => "compatible",
            Status::Modifiable => "modifiable",
            Status::Incompatible => "incompatible",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged ingredient and the safe ingredient that can replace it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub original: String,
    #[serde(rename = "substitution")]
    pub substitute: String,
}

/// Side options split by compatibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideReport {
    #[serde(rename = "compatibles")]
    pub compatible: Vec<String>,
    #[serde(rename = "incompatibles")]
    pub incompatible: Vec<String>,
}

impl SideReport {
    pub fn is_empty(&self) -> bool {
        self.compatible.is_empty() && self.incompatible.is_empty()
    }
}

/// Classification of one dish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishResult {
    pub id: Id,
    #[serde(rename = "nom")]
    pub name: String,
    pub description: String,
    #[serde(skip)]
    pub category: Option<String>,
    pub status: Status,
    /// Every ingredient name, in composition order
    pub ingredients: Vec<String>,
    /// Union of ingredient allergen tags, first-seen order
    #[serde(rename = "allergenes")]
    pub allergens: Vec<String>,
    #[serde(
        rename = "ingredientsModifiables",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modifiable_ingredients: Vec<String>,
    /// Flagged, baked-in ingredients left after substitution rescue
    #[serde(
        rename = "ingredientsNonModifiables",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub non_modifiable_ingredients: Vec<String>,
    #[serde(
        rename = "substitutionsPossibles",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub substitutions: Vec<Substitution>,
    #[serde(
        rename = "accompagnements",
        skip_serializing_if = "SideReport::is_empty"
    )]
    pub sides: SideReport,
}

impl DishResult {
    /// Can the diner do anything about the flagged ingredients?
    pub fn has_remedy(&self) -> bool {
        !self.modifiable_ingredients.is_empty() || !self.substitutions.is_empty()
    }

    /// Category bucket this dish is grouped under
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Dishes of one category, in menu order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub dishes: Vec<DishResult>,
}

/// Search result grouped by category
///
/// Serializes as a JSON object keyed by category, in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSearchResult {
    pub groups: Vec<CategoryGroup>,
}

impl MenuSearchResult {
    /// Append a dish to its category, creating the category on first use
    pub fn push(&mut self, dish: DishResult) {
        let category = dish.category_or_default().to_string();
        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.dishes.push(dish),
            None => self.groups.push(CategoryGroup {
                category,
                dishes: vec![dish],
            }),
        }
    }

    /// Dishes of a category, if any were kept
    pub fn category(&self, name: &str) -> Option<&[DishResult]> {
        self.groups
            .iter()
            .find(|g| g.category == name)
            .map(|g| g.dishes.as_slice())
    }

    /// Category names in output order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    /// Every kept dish, category by category
    pub fn dishes(&self) -> impl Iterator<Item = &DishResult> {
        self.groups.iter().flat_map(|g| g.dishes.iter())
    }

    pub fn dish_count(&self) -> usize {
        self.groups.iter().map(|g| g.dishes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Count kept dishes per status
    pub fn summary(&self) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for dish in self.dishes() {
            match dish.status {
                Status::Compatible => summary.compatible += 1,
                Status::Modifiable => summary.modifiable += 1,
                Status::Incompatible => summary.incompatible += 1,
            }
        }
        summary
    }
}

impl Serialize for MenuSearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.category, &group.dishes)?;
        }
        map.end()
    }
}

/// Number of kept dishes per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub compatible: usize,
    pub modifiable: usize,
    pub incompatible: usize,
}
