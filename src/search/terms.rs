//! Validated search-term sets

use serde::Serialize;

use crate::error::SearchError;

use super::normalize;

/// A single search term as typed and in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTerm {
    pub original: String,
    #[serde(skip)]
    pub normalized: String,
}

/// Non-empty, deduplicated set of search terms with OR semantics
///
/// Terms that normalize to the same string are kept once (first occurrence
/// wins); terms that normalize to nothing are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<SearchTerm>,
}

impl SearchTerms {
    /// Build a term set, rejecting input with no usable term
    pub fn new<I, S>(raw: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<SearchTerm> = Vec::new();
        for original in raw {
            let original = original.into();
            let normalized = normalize(&original);
            if normalized.is_empty() || terms.iter().any(|t| t.normalized == normalized) {
                continue;
            }
            terms.push(SearchTerm {
                original,
                normalized,
            });
        }

        if terms.is_empty() {
            return Err(SearchError::EmptyTerms);
        }

        Ok(Self { terms })
    }

    /// Terms in canonical form, in input order
    pub fn normalized(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| t.normalized.as_str())
    }

    /// Terms as typed, in input order
    pub fn originals(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| t.original.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_on_normalized_form() {
        let terms = SearchTerms::new(["Œuf", "oeuf", "OEUF ", "lait"]).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms.originals().collect::<Vec<_>>(), vec!["Œuf", "lait"]);
        assert_eq!(terms.normalized().collect::<Vec<_>>(), vec!["oeuf", "lait"]);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            SearchTerms::new(Vec::<String>::new()),
            Err(SearchError::EmptyTerms)
        ));
        assert!(matches!(
            SearchTerms::new(["  ", "?!"]),
            Err(SearchError::EmptyTerms)
        ));
    }
}
