use serde::{Deserialize, Serialize};

/// The scalar value collected from one control: a string, a boolean, or
/// nothing. Serializes untagged, so collected data comes out as plain
/// JSON strings/booleans/nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Bool(bool),
    Text(String),
    Null,
}

impl ControlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ControlValue::Null)
    }
}

impl From<String> for ControlValue {
    fn from(s: String) -> Self {
        ControlValue::Text(s)
    }
}

impl From<&str> for ControlValue {
    fn from(s: &str) -> Self {
        ControlValue::Text(s.to_string())
    }
}

impl From<bool> for ControlValue {
    fn from(b: bool) -> Self {
        ControlValue::Bool(b)
    }
}
