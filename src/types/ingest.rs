//! Load-time normalization of menu source formats
//!
//! Menu files in the wild disagree on shapes: flags are booleans or
//! "Oui"/"Non" strings, allergen labels are comma strings or lists, ids are
//! numbers or numeric strings. These deserializers fold every variant into
//! the canonical in-memory shape (`bool`, comma-delimited `Option<String>`,
//! [`Id`]) so nothing past loading has to care.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::search::normalize;

use super::Id;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(Id),
    Text(String),
}

/// Interpret a textual yes/no flag
pub fn parse_flag(text: &str) -> Option<bool> {
    match normalize(text).as_str() {
        "oui" | "o" | "yes" | "y" | "true" | "vrai" | "1" => Some(true),
        "non" | "n" | "no" | "false" | "faux" | "0" => Some(false),
        _ => None,
    }
}

/// Boolean flag; absent, null or unrecognized values are `false`
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawFlag> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => false,
        Some(RawFlag::Bool(value)) => value,
        Some(RawFlag::Number(value)) => value != 0,
        Some(RawFlag::Text(text)) => parse_flag(&text).unwrap_or_else(|| {
            if !text.trim().is_empty() {
                warn!(value = %text, "unrecognized flag value, treating as false");
            }
            false
        }),
    })
}

/// Allergen label as a comma-delimited string; lists are joined
pub fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawLabel> = Option::deserialize(deserializer)?;
    let label = match raw {
        None => return Ok(None),
        Some(RawLabel::Text(text)) => text,
        Some(RawLabel::List(tags)) => tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    };

    if label.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(label))
    }
}

fn id_from_text<E: serde::de::Error>(text: &str) -> Result<Option<Id>, E> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Id>()
        .map(Some)
        .map_err(|_| E::custom(format!("invalid id '{}'", text)))
}

/// Required identifier, number or numeric string
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => {
            id_from_text::<D::Error>(&text)?.ok_or_else(|| D::Error::custom("empty id"))
        }
    }
}

/// Optional identifier; null and empty strings are `None`
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => id_from_text::<D::Error>(&text),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_flag")]
        flag: bool,
        #[serde(default, deserialize_with = "deserialize_label")]
        label: Option<String>,
        #[serde(default, deserialize_with = "deserialize_opt_id")]
        other: Option<Id>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flag_variants() {
        assert!(probe(r#"{"flag": true}"#).flag);
        assert!(probe(r#"{"flag": "Oui"}"#).flag);
        assert!(probe(r#"{"flag": "yes"}"#).flag);
        assert!(probe(r#"{"flag": 1}"#).flag);
        assert!(!probe(r#"{"flag": "Non"}"#).flag);
        assert!(!probe(r#"{"flag": false}"#).flag);
        assert!(!probe(r#"{"flag": null}"#).flag);
        assert!(!probe(r#"{"flag": "peut-être"}"#).flag);
        assert!(!probe(r#"{}"#).flag);
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(
            probe(r#"{"label": "gluten, lait"}"#).label.as_deref(),
            Some("gluten, lait")
        );
        assert_eq!(
            probe(r#"{"label": ["gluten", " lait ", ""]}"#).label.as_deref(),
            Some("gluten, lait")
        );
        assert_eq!(probe(r#"{"label": ""}"#).label, None);
        assert_eq!(probe(r#"{"label": []}"#).label, None);
        assert_eq!(probe(r#"{"label": null}"#).label, None);
        assert_eq!(probe(r#"{}"#).label, None);
    }

    #[test]
    fn test_id_variants() {
        assert_eq!(probe(r#"{"other": 7}"#).other, Some(7));
        assert_eq!(probe(r#"{"other": " 7 "}"#).other, Some(7));
        assert_eq!(probe(r#"{"other": ""}"#).other, None);
        assert_eq!(probe(r#"{"other": null}"#).other, None);
        assert!(serde_json::from_str::<Probe>(r#"{"other": "abc"}"#).is_err());
    }
}
