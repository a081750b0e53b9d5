//! Demographics value object.
//!
//! The engine does not interpret demographics beyond handing them to the
//! scale selector. Only the age bracket has a name of its own; everything
//! else the intake form collects is kept as free-form attributes.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Age bracket code used for the 14-17 group.
pub const MINOR_AGE_BRACKET: &str = "0";

/// Demographic attributes collected at intake.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Demographics {
    /// Age bracket code as submitted by the intake form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// All other intake attributes.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl Demographics {
    /// Creates demographics with only an age bracket.
    pub fn with_age(age: impl Into<String>) -> Self {
        Self {
            age: Some(age.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds a string attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), JsonValue::String(value.into()));
        self
    }

    /// Looks up an attribute by name as text.
    ///
    /// `"age"` resolves to the age bracket. Numbers and booleans are rendered
    /// in their JSON text form so selector rules can match them as strings.
    pub fn attribute(&self, key: &str) -> Option<String> {
        if key == "age" {
            return self.age.clone();
        }
        match self.attributes.get(key)? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// True when nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.attributes.is_empty()
    }

    /// True for the 14-17 age bracket, which gets guardian-aware consent wording.
    pub fn is_minor(&self) -> bool {
        self.age.as_deref() == Some(MINOR_AGE_BRACKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_empty_demographics() {
        let demo: Demographics = serde_json::from_str("{}").unwrap();
        assert!(demo.is_empty());
    }

    #[test]
    fn unknown_fields_are_kept_as_attributes() {
        let demo: Demographics =
            serde_json::from_str(r#"{"age":"2","gender":"f","relationship":1}"#).unwrap();

        assert_eq!(demo.attribute("age").as_deref(), Some("2"));
        assert_eq!(demo.attribute("gender").as_deref(), Some("f"));
        assert_eq!(demo.attribute("relationship").as_deref(), Some("1"));
        assert_eq!(demo.attribute("missing"), None);
    }

    #[test]
    fn serializes_flat() {
        let demo = Demographics::with_age("1").with_attribute("gender", "m");
        let json = serde_json::to_value(&demo).unwrap();
        assert_eq!(json, serde_json::json!({"age": "1", "gender": "m"}));
    }

    #[test]
    fn minor_bracket_is_detected() {
        assert!(Demographics::with_age("0").is_minor());
        assert!(!Demographics::with_age("1").is_minor());
        assert!(!Demographics::default().is_minor());
    }
}
