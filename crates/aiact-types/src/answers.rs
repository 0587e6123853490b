//! Answer values collected by the questionnaire.
//!
//! An [`AnswerSet`] is built fresh for every evaluation and owned by the caller. Absent entries
//! are not errors: the evaluator reads them as "not triggered".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single user-supplied value.
///
/// Untagged so that answer files read naturally: `p1 = true`, `compute = 1e25`,
/// `domain = "Biometrics"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Choice(String),
}

impl AnswerValue {
    /// Infer a value from a raw `--answer id=value` token.
    ///
    /// `true`/`false` become booleans, anything that parses as a float becomes a number, the
    /// rest is kept as text.
    pub fn parse_raw(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "true" => return AnswerValue::Bool(true),
            "false" => return AnswerValue::Bool(false),
            _ => {}
        }
        match raw.parse::<f64>() {
            Ok(n) => AnswerValue::Number(n),
            Err(_) => AnswerValue::Choice(raw.to_string()),
        }
    }

    /// Short description used in error messages, e.g. `text "lots"`.
    pub fn describe(&self) -> String {
        match self {
            AnswerValue::Bool(b) => format!("boolean {b}"),
            AnswerValue::Number(n) => format!("number {n:e}"),
            AnswerValue::Choice(s) => format!("text {s:?}"),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Number(n) => write!(f, "{n:e}"),
            AnswerValue::Choice(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Choice(value)
    }
}

/// Mapping from criterion id to answer value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy in tests and fixtures.
    pub fn with(mut self, id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(&mut self, other: AnswerSet) {
        self.answers.extend(other.answers);
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_raw_infers_kinds() {
        assert_eq!(AnswerValue::parse_raw("true"), AnswerValue::Bool(true));
        assert_eq!(AnswerValue::parse_raw(" false "), AnswerValue::Bool(false));
        assert_eq!(AnswerValue::parse_raw("1e25"), AnswerValue::Number(1e25));
        assert_eq!(AnswerValue::parse_raw("0"), AnswerValue::Number(0.0));
        assert_eq!(
            AnswerValue::parse_raw("None / Other"),
            AnswerValue::Choice("None / Other".to_string())
        );
        assert_eq!(
            AnswerValue::parse_raw("Yes"),
            AnswerValue::Choice("Yes".to_string())
        );
    }

    #[test]
    fn answer_set_deserializes_untagged_values_from_json() {
        let set: AnswerSet = serde_json::from_str(
            r#"{"g1": true, "compute": 1e25, "steps": 3, "domain": "Biometrics"}"#,
        )
        .unwrap();
        assert_eq!(set.get("g1"), Some(&AnswerValue::Bool(true)));
        assert_eq!(set.get("compute"), Some(&AnswerValue::Number(1e25)));
        assert_eq!(set.get("steps"), Some(&AnswerValue::Number(3.0)));
        assert_eq!(
            set.get("domain"),
            Some(&AnswerValue::Choice("Biometrics".to_string()))
        );
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn merge_prefers_incoming_entries() {
        let mut base = AnswerSet::new().with("p1", true).with("p2", true);
        base.merge(AnswerSet::new().with("p2", false).with("p3", true));
        assert_eq!(base.get("p1"), Some(&AnswerValue::Bool(true)));
        assert_eq!(base.get("p2"), Some(&AnswerValue::Bool(false)));
        assert_eq!(base.get("p3"), Some(&AnswerValue::Bool(true)));
    }

    #[test]
    fn describe_quotes_text() {
        assert_eq!(
            AnswerValue::Choice("lots".to_string()).describe(),
            "text \"lots\""
        );
        assert_eq!(AnswerValue::Bool(true).describe(), "boolean true");
    }
}
