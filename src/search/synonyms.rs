//! Synonym dictionary for allergen families
//!
//! Each group maps a canonical allergen label to the spellings and family
//! members a diner might type instead. Lookups are done on normalized text,
//! so accents and case in the table are irrelevant.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::normalize;

/// Synonym groups: (canonical label, variants that denote it)
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    // Tree nuts
    (
        "fruits a coque",
        &[
            "fruit a coque",
            "fruit à coque",
            "fruits à coque",
            "fruits a coques",
            "fruits à coques",
            "fruit a coques",
            "noix",
            "noisette",
            "amande",
            "pistache",
            "cajou",
            "noix de cajou",
            "noix de pecan",
            "pécan",
            "macadamia",
            "noix du brésil",
        ],
    ),
    // Peanuts
    (
        "arachide",
        &[
            "cacahuète",
            "cacahuetes",
            "cacahouète",
            "cacahouètes",
            "beurre de cacahuète",
        ],
    ),
    // Dairy
    (
        "lait",
        &[
            "lactose",
            "produit laitier",
            "produits laitiers",
            "laitage",
            "laitages",
        ],
    ),
    // Cereals containing gluten
    ("gluten", &["blé", "farine de blé", "seigle", "orge", "épeautre"]),
    // Shellfish
    (
        "crustace",
        &["fruits de mer", "crevette", "homard", "crabe", "langoustine"],
    ),
    (
        "mollusque",
        &["fruits de mer", "moule", "huître", "calamar", "poulpe", "seiche"],
    ),
    // Sulphites
    (
        "sulfite",
        &["dioxyde de soufre", "anhydride sulfureux", "e220"],
    ),
];

fn synonym_map() -> &'static HashMap<String, Vec<&'static str>> {
    static MAP: OnceLock<HashMap<String, Vec<&'static str>>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map: HashMap<String, Vec<&'static str>> = HashMap::new();
        for &(canonical, variants) in SYNONYM_GROUPS {
            for variant in variants {
                let entry = map.entry(normalize(variant)).or_default();
                if !entry.contains(&canonical) {
                    entry.push(canonical);
                }
            }
        }
        map
    })
}

/// Canonical labels for an already-normalized term (empty if none)
pub fn canonical_forms(normalized_term: &str) -> &'static [&'static str] {
    synonym_map()
        .get(normalized_term)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn family_map() -> &'static HashMap<String, Vec<String>> {
    static MAP: OnceLock<HashMap<String, Vec<String>>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for &(canonical, variants) in SYNONYM_GROUPS {
            let members = map.entry(normalize(canonical)).or_default();
            for variant in variants {
                let variant = normalize(variant);
                if !members.contains(&variant) {
                    members.push(variant);
                }
            }
        }
        map
    })
}

/// Normalized members of the family named by a canonical label (empty if none)
pub fn family_members(normalized_canonical: &str) -> &'static [String] {
    family_map()
        .get(normalized_canonical)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Check whether a normalized term is a known synonym key
pub fn has_synonyms(normalized_term: &str) -> bool {
    !canonical_forms(normalized_term).is_empty()
}
