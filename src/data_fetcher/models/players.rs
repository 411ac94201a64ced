use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Player entry from the upstream directory (`GET /players/{sport}`).
///
/// Every field is optional. `birth_date` arrives either as a JSON number or a
/// numeric string of epoch milliseconds, so it is kept as a raw value and
/// coerced when the age is derived. `number` and `years_exp` are passed
/// through to clients untouched.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_exp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RawPlayer {
    /// Builds a record field by field so that one mistyped field (say a numeric
    /// `team`) only blanks that field instead of rejecting the whole player.
    /// Non-object values yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        let raw = |key: &str| object.get(key).filter(|v| !v.is_null()).cloned();

        Self {
            first_name: text("first_name"),
            last_name: text("last_name"),
            position: text("position"),
            team: text("team"),
            birth_date: raw("birth_date"),
            years_exp: raw("years_exp"),
            number: raw("number"),
            status: text("status"),
        }
    }
}

/// Display-ready player record returned to clients.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolvedPlayer {
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub team: Option<String>,
    pub number: Option<Value>,
    pub status: Option<String>,
    pub experience: Option<Value>,
}
