//! Resolving a dish's ingredients and sides

use tracing::{debug, warn};

use crate::types::{Id, ResolvedIngredient, ResolvedSide, Substitute};

use super::MenuGraph;

fn resolve_substitute(graph: &MenuGraph, dish_id: Id, substitute_id: Id) -> Option<Substitute> {
    match graph.ingredient(substitute_id) {
        Some(ingredient) => Some(Substitute {
            id: ingredient.id,
            name: ingredient.name.clone(),
            allergens: ingredient.allergens.clone(),
        }),
        None => {
            warn!(dish_id, substitute_id, "substitution points to a missing ingredient, ignored");
            None
        }
    }
}

/// Join composition edges of a dish against the ingredient table
pub fn resolve_ingredients(graph: &MenuGraph, dish_id: Id) -> Vec<ResolvedIngredient> {
    graph
        .compositions_of(dish_id)
        .map(|edge| match graph.ingredient(edge.ingredient_id) {
            Some(ingredient) => {
                let substitution = edge
                    .substitution
                    .or(ingredient.substitution)
                    .and_then(|id| resolve_substitute(graph, dish_id, id));

                ResolvedIngredient {
                    id: ingredient.id,
                    name: ingredient.name.clone(),
                    allergens: ingredient.allergens.clone(),
                    modifiable: edge.modifiable,
                    substitution,
                }
            }
            None => {
                warn!(
                    dish_id,
                    ingredient_id = edge.ingredient_id,
                    "composition points to a missing ingredient, using placeholder"
                );
                ResolvedIngredient::unknown(edge.ingredient_id, edge.modifiable)
            }
        })
        .collect()
}

/// Join side options of a dish against the side table
pub fn resolve_sides(graph: &MenuGraph, dish_id: Id) -> Vec<ResolvedSide> {
    let offers_sides = graph.dish(dish_id).map(|d| d.has_sides).unwrap_or(false);
    if !offers_sides {
        return Vec::new();
    }

    graph
        .side_options_of(dish_id)
        .filter_map(|option| match graph.side(option.side_id) {
            Some(side) => Some(ResolvedSide {
                id: side.id,
                name: side.name.clone(),
                allergens: side.allergens.clone(),
            }),
            None => {
                debug!(dish_id, side_id = option.side_id, "side option points to a missing side, skipped");
                None
            }
        })
        .collect()
}
