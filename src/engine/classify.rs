//! Per-dish compatibility classification
//!
//! A dish goes through four passes:
//! 1. flag every ingredient whose allergen label or name matches a term
//! 2. split the flagged ingredients by modifiability
//! 3. rescue baked-in ingredients that have a substitution safe for every term
//! 4. derive the status from what is left
//!
//! Sides are evaluated on their own and never change the dish status.

use crate::search::{SearchTerms, TermMatcher};
use crate::types::{
    Dish, DishResult, ResolvedIngredient, ResolvedSide, SideReport, Status, Substitution,
};

use super::ClassifyOptions;

/// Is this ingredient hit by any of the terms?
fn is_flagged(
    ingredient: &ResolvedIngredient,
    terms: &SearchTerms,
    matcher: &TermMatcher,
    options: &ClassifyOptions,
) -> bool {
    matcher.label_matches_any(ingredient.allergens.as_deref(), terms)
        || (options.match_ingredient_names && matcher.name_matches_any(&ingredient.name, terms))
}

fn is_side_flagged(
    side: &ResolvedSide,
    terms: &SearchTerms,
    matcher: &TermMatcher,
    options: &ClassifyOptions,
) -> bool {
    matcher.label_matches_any(side.allergens.as_deref(), terms)
        || (options.match_side_names && matcher.name_matches_any(&side.name, terms))
}

/// Union of allergen tags over all ingredients, first-seen order
fn aggregate_allergens(ingredients: &[ResolvedIngredient]) -> Vec<String> {
    let mut allergens: Vec<String> = Vec::new();
    for tag in ingredients.iter().flat_map(|i| i.allergen_tags()) {
        if !allergens.iter().any(|a| a == tag) {
            allergens.push(tag.to_string());
        }
    }
    allergens
}

/// Split sides into compatible and incompatible for the terms
pub fn evaluate_sides(
    sides: &[ResolvedSide],
    terms: &SearchTerms,
    matcher: &TermMatcher,
    options: &ClassifyOptions,
) -> SideReport {
    let mut report = SideReport::default();
    for side in sides {
        if is_side_flagged(side, terms, matcher, options) {
            report.incompatible.push(side.name.clone());
        } else {
            report.compatible.push(side.name.clone());
        }
    }
    report
}

/// Classify one dish against the active search terms
pub fn classify_dish(
    dish: &Dish,
    ingredients: &[ResolvedIngredient],
    sides: &[ResolvedSide],
    terms: &SearchTerms,
    matcher: &TermMatcher,
    options: &ClassifyOptions,
) -> DishResult {
    let mut modifiable: Vec<&ResolvedIngredient> = Vec::new();
    let mut non_modifiable: Vec<&ResolvedIngredient> = Vec::new();

    for ingredient in ingredients {
        if !is_flagged(ingredient, terms, matcher, options) {
            continue;
        }
        if ingredient.modifiable {
            modifiable.push(ingredient);
        } else {
            non_modifiable.push(ingredient);
        }
    }

    // Rescue runs over the full partition: whether a swap is safe depends on
    // the substitute's own label, not on why the original was flagged.
    let mut substitutions: Vec<Substitution> = Vec::new();
    let mut remaining: Vec<&ResolvedIngredient> = Vec::new();
    for ingredient in &non_modifiable {
        let safe_substitute = ingredient
            .substitution
            .as_ref()
            .filter(|s| !matcher.label_matches_any(s.allergens.as_deref(), terms));

        match safe_substitute {
            Some(substitute) => substitutions.push(Substitution {
                original: ingredient.name.clone(),
                substitute: substitute.name.clone(),
            }),
            None => remaining.push(ingredient),
        }
    }

    let status = if !remaining.is_empty() {
        Status::Incompatible
    } else if !non_modifiable.is_empty() || !modifiable.is_empty() {
        Status::Modifiable
    } else {
        Status::Compatible
    };

    DishResult {
        id: dish.id,
        name: dish.name.clone(),
        description: dish.description.clone(),
        category: dish.category.clone(),
        status,
        ingredients: ingredients.iter().map(|i| i.name.clone()).collect(),
        allergens: aggregate_allergens(ingredients),
        modifiable_ingredients: modifiable.iter().map(|i| i.name.clone()).collect(),
        non_modifiable_ingredients: remaining.iter().map(|i| i.name.clone()).collect(),
        substitutions,
        sides: evaluate_sides(sides, terms, matcher, options),
    }
}

/// Should a classified dish be shown to the diner?
///
/// Only dishes that are incompatible with nothing the diner can do about it
/// are dropped.
pub fn is_included(result: &DishResult) -> bool {
    result.status != Status::Incompatible || result.has_remedy()
}
