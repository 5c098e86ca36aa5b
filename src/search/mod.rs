//! Text normalization and fuzzy matching of allergen search terms
//!
//! Every comparison between a diner's term and menu data goes through
//! [`normalize`] and then [`TermMatcher`]:
//! - `normalize`: case, diacritic, ligature and punctuation folding
//! - `matcher`: layered containment / plural / synonym / edit-distance rules
//! - `synonyms`: allergen-family dictionary
//! - `terms`: validated, deduplicated search-term sets

mod matcher;
mod normalize;
mod synonyms;
mod terms;

pub use matcher::{MatchOptions, TermMatcher, TAG_DELIMITER};
pub use normalize::{normalize, normalize_opt};
pub use synonyms::{canonical_forms, family_members, has_synonyms, SYNONYM_GROUPS};
pub use terms::{SearchTerm, SearchTerms};
