//! Whole-menu search: classify every dish and group by category

use tracing::debug;

use crate::menu::MenuGraph;
use crate::search::{SearchTerms, TermMatcher};
use crate::types::MenuSearchResult;

use super::classify::{classify_dish, is_included};
use super::ClassifyOptions;

/// Classify every dish of the menu and group the kept ones by category
///
/// Categories appear in the order their first dish appears on the menu, and
/// dishes keep menu order within a category.
pub fn search_menu(
    graph: &MenuGraph,
    terms: &SearchTerms,
    matcher: &TermMatcher,
    options: &ClassifyOptions,
) -> MenuSearchResult {
    let mut result = MenuSearchResult::default();

    for dish in graph.dishes() {
        let ingredients = graph.resolve_ingredients(dish.id);
        let sides = graph.resolve_sides(dish.id);
        let classified = classify_dish(dish, &ingredients, &sides, terms, matcher, options);

        if is_included(&classified) {
            result.push(classified);
        } else {
            debug!(dish = %dish.name, "dropped: incompatible with no remedy");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Composition, Dish, Ingredient, MenuData, Status, DEFAULT_CATEGORY};

    fn graph() -> MenuGraph {
        MenuGraph::from_data(MenuData {
            dishes: vec![
                Dish::new(1, "Tarte aux noix").with_category("Desserts"),
                Dish::new(2, "Soupe").with_category("Entrées"),
                Dish::new(3, "Salade").with_category("Entrées"),
                Dish::new(4, "Pain maison"),
                Dish::new(5, "Mousse").with_category("Desserts"),
            ],
            ingredients: vec![
                Ingredient::new(1, "noix", Some("fruits à coque")),
                Ingredient::new(2, "carotte", None),
                Ingredient::new(3, "farine", Some("gluten")),
                Ingredient::new(4, "chocolat", Some("lait")),
            ],
            compositions: vec![
                Composition::new(1, 1, false),
                Composition::new(2, 2, false),
                Composition::new(3, 1, true),
                Composition::new(4, 3, false),
                Composition::new(5, 4, false),
            ],
            ..MenuData::default()
        })
    }

    #[test]
    fn test_groups_and_drops_hopeless_dishes() {
        let terms = SearchTerms::new(["noix"]).unwrap();
        let result = search_menu(
            &graph(),
            &terms,
            &TermMatcher::strict(),
            &ClassifyOptions::default(),
        );

        // Tarte aux noix is incompatible with no remedy
        assert_eq!(
            result.categories().collect::<Vec<_>>(),
            vec!["Entrées", DEFAULT_CATEGORY, "Desserts"]
        );
        let entrees = result.category("Entrées").unwrap();
        assert_eq!(entrees[0].name, "Soupe");
        assert_eq!(entrees[0].status, Status::Compatible);
        assert_eq!(entrees[1].name, "Salade");
        assert_eq!(entrees[1].status, Status::Modifiable);
        assert_eq!(result.category("Desserts").unwrap()[0].name, "Mousse");
        assert_eq!(result.dish_count(), 4);
    }

    #[test]
    fn test_empty_menu() {
        let terms = SearchTerms::new(["gluten"]).unwrap();
        let result = search_menu(
            &MenuGraph::empty(),
            &terms,
            &TermMatcher::strict(),
            &ClassifyOptions::default(),
        );
        assert!(result.is_empty());
    }
}
