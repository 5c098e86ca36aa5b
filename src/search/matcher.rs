//! Layered fuzzy matching of search terms against allergen labels
//!
//! Allergen labels and diner input are free text typed inconsistently, so a
//! term is tried against a label through a graduated series of rules, from
//! strict to loose, stopping at the first one that succeeds:
//!
//! 1. bidirectional substring containment
//! 2. singular/plural folding of the term
//! 3. the multi-word synonym table, both ways: a family member typed against
//!    the family label, and the family label typed against a member
//! 4. bounded Levenshtein distance (optional)

use strsim::levenshtein;

use super::synonyms::{canonical_forms, family_members};
use super::{normalize, SearchTerms};

/// Labels up to this length tolerate one edit, longer ones two
const SHORT_LABEL_LEN: usize = 5;

/// Delimiter between tags in an allergen label
pub const TAG_DELIMITER: char = ',';

/// Whole-word occurrence of `phrase` in `text`, plural allowed on the last word
fn contains_words(text: &str, phrase: &str) -> bool {
    let padded = format!(" {} ", text);
    padded.contains(&format!(" {} ", phrase)) || padded.contains(&format!(" {}s ", phrase))
}

/// Toggles for the optional matching layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Accept near-misses by edit distance as a last resort
    pub edit_distance: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            edit_distance: true,
        }
    }
}

/// Term matcher configured for one deployment
#[derive(Debug, Clone, Copy, Default)]
pub struct TermMatcher {
    options: MatchOptions,
}

impl TermMatcher {
    /// Create a matcher with the given options
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Matcher with every optional layer disabled
    pub fn strict() -> Self {
        Self::new(MatchOptions {
            edit_distance: false,
        })
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Does `term` match a single `label`?
    ///
    /// Both sides are normalized first. An empty side never matches.
    pub fn matches(&self, label: &str, term: &str) -> bool {
        self.matches_normalized(&normalize(label), &normalize(term))
    }

    /// Same as [`matches`](Self::matches) for inputs already normalized
    pub fn matches_normalized(&self, label: &str, term: &str) -> bool {
        if label.is_empty() || term.is_empty() {
            return false;
        }

        if label.contains(term) || term.contains(label) {
            return true;
        }

        if let Some(singular) = term.strip_suffix('s') {
            if !singular.is_empty() && label.contains(singular) {
                return true;
            }
        } else if label.contains(&format!("{}s", term)) {
            return true;
        }

        if canonical_forms(term)
            .iter()
            .any(|canonical| label.contains(canonical))
        {
            return true;
        }

        if family_members(term)
            .iter()
            .any(|member| contains_words(label, member))
        {
            return true;
        }

        if self.options.edit_distance {
            let max_distance = if label.len() <= SHORT_LABEL_LEN { 1 } else { 2 };
            return levenshtein(label, term) <= max_distance;
        }

        false
    }

    /// Does `term` match any tag of a comma-delimited allergen label?
    pub fn label_matches(&self, label: Option<&str>, term: &str) -> bool {
        let term = normalize(term);
        self.label_matches_normalized(label, &term)
    }

    fn label_matches_normalized(&self, label: Option<&str>, term: &str) -> bool {
        let Some(label) = label else {
            return false;
        };
        label
            .split(TAG_DELIMITER)
            .map(normalize)
            .any(|tag| self.matches_normalized(&tag, term))
    }

    /// Does any search term match any tag of the label?
    pub fn label_matches_any(&self, label: Option<&str>, terms: &SearchTerms) -> bool {
        terms
            .normalized()
            .any(|term| self.label_matches_normalized(label, term))
    }

    /// Does any search term match a whole name (ingredient or side)?
    ///
    /// Names are not split on the tag delimiter.
    pub fn name_matches_any(&self, name: &str, terms: &SearchTerms) -> bool {
        let name = normalize(name);
        terms
            .normalized()
            .any(|term| self.matches_normalized(&name, term))
    }
}
