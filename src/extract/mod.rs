//! Keyword extraction of allergen terms from free text
//!
//! A best-effort dictionary lookup, not language understanding: every known
//! allergen that appears as a whole word (or plural) in the message becomes a
//! candidate search term.

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;

use crate::search::normalize;

/// Allergens recognized out of the box
pub const COMMON_ALLERGENS: &[&str] = &[
    "gluten",
    "lait",
    "lactose",
    "arachide",
    "soja",
    "fruits à coque",
    "noix",
    "noisette",
    "amande",
    "oeuf",
    "œuf",
    "poisson",
    "crustacé",
    "fruits de mer",
    "céleri",
    "moutarde",
    "sésame",
    "sulfite",
    "lupin",
    "mollusque",
];

/// Words that announce an allergy or an exclusion
pub const ALLERGY_KEYWORDS: &[&str] = &[
    "allergique",
    "allergie",
    "intolérant",
    "intolérance",
    "éviter",
    "sans",
    "pas de",
];

/// Terms found in a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    #[serde(rename = "termes")]
    pub terms: Vec<String>,
    /// The message used an allergy keyword ("allergique", "sans", ...)
    #[serde(rename = "motCle")]
    pub triggered: bool,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    term: String,
    normalized: String,
}

fn entries<S: AsRef<str>>(words: &[S]) -> Vec<Entry> {
    words
        .iter()
        .map(|w| Entry {
            term: w.as_ref().to_string(),
            normalized: normalize(w.as_ref()),
        })
        .filter(|e| !e.normalized.is_empty())
        .collect()
}

/// Singular stem of a word; short words are left alone ("pas", "os")
fn fold_plural(word: &str) -> &str {
    match word.strip_suffix('s') {
        Some(stem) if stem.len() >= 3 => stem,
        _ => word,
    }
}

/// Whole-word occurrence of `phrase`, each word compared singular to singular
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let phrase: Vec<&str> = phrase.split(' ').map(fold_plural).collect();
    if phrase.is_empty() || phrase.len() > words.len() {
        return false;
    }
    words.windows(phrase.len()).any(|window| {
        window
            .iter()
            .zip(&phrase)
            .all(|(word, expected)| fold_plural(word) == *expected)
    })
}

/// Dictionary-based term extractor
#[derive(Debug, Clone)]
pub struct Extractor {
    dictionary: Vec<Entry>,
    keywords: Vec<Entry>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            dictionary: entries(COMMON_ALLERGENS),
            keywords: entries(ALLERGY_KEYWORDS),
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with a custom allergen dictionary
    pub fn with_dictionary<S: AsRef<str>>(dictionary: &[S]) -> Self {
        Self {
            dictionary: entries(dictionary),
            ..Self::default()
        }
    }

    /// Find dictionary terms in `text`
    ///
    /// Terms come back in dictionary order, once per normalized form.
    pub fn extract(&self, text: &str) -> Extraction {
        // Punctuation separates words here ("d'amandes"), unlike in normalize
        let spaced: String = text
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || is_combining_mark(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        let normalized = normalize(&spaced);
        let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();

        let triggered = self
            .keywords
            .iter()
            .any(|k| contains_phrase(&words, &k.normalized));

        let mut seen: Vec<&str> = Vec::new();
        let mut terms = Vec::new();
        for entry in &self.dictionary {
            if seen.contains(&entry.normalized.as_str()) {
                continue;
            }
            if contains_phrase(&words, &entry.normalized) {
                seen.push(&entry.normalized);
                terms.push(entry.term.clone());
            }
        }

        Extraction { terms, triggered }
    }
}

/// Extract candidate terms with the built-in dictionary
pub fn extract_terms(text: &str) -> Vec<String> {
    Extractor::default().extract(text).terms
}
