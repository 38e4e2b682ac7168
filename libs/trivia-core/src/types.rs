//! Core types for the trivia catalog.

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};

pub type QuestionId = i64;
pub type CategoryId = i64;

/// Category id → label, ordered by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// A stored trivia question, in its formatted (wire) shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A question category such as "Science".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String,
}

/// A validated question ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Build the id → label lookup from a list of categories.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

/// Integer that clients may send either as a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn parse_int<E: de::Error>(raw: IntOrString) -> std::result::Result<Option<i64>, E> {
    match raw {
        IntOrString::Int(n) => Ok(Some(n)),
        IntOrString::Str(s) if s.trim().is_empty() => Ok(None),
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected an integer, got \"{}\"", s))),
    }
}

/// Optional integer field: `null`, absent and `""` all become `None`.
pub(crate) fn deserialize_optional_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(raw) => parse_int(raw),
        None => Ok(None),
    }
}

/// Required integer field that tolerates numeric strings.
pub(crate) fn deserialize_int<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_int::<D::Error>(IntOrString::deserialize(deserializer)?)?
        .ok_or_else(|| <D::Error as de::Error>::custom("expected an integer, got an empty string"))
}
