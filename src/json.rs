//! Dynamically-shaped actions backed by `serde_json::Value`.
//!
//! A [`JsonAction`] is only ever constructed from an object that has a
//! string `type` field, so reducers never see a malformed action.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::mvi::Action;

/// Field holding the action type identifier.
pub const TYPE_FIELD: &str = "type";

/// Errors that can occur when building a [`JsonAction`].
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("Action is missing a string 'type' field")]
    MissingType,

    #[error("Invalid action JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A JSON object action with a validated `type` field.
///
/// The type is kept apart from the remaining fields and put back when the
/// action is turned into a `Value` again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct JsonAction {
    action_type: String,
    payload: Map<String, Value>,
}

impl JsonAction {
    /// Builds an action with the given type and no payload.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Map::new(),
        }
    }

    /// Adds a payload field. Setting `type` through here is ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != TYPE_FIELD {
            self.payload.insert(key, value.into());
        }
        self
    }

    /// Payload field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Every field except `type`.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn into_value(self) -> Value {
        let mut object = self.payload;
        object.insert(TYPE_FIELD.to_string(), Value::String(self.action_type));
        Value::Object(object)
    }
}

impl Action for JsonAction {
    fn action_type(&self) -> &str {
        &self.action_type
    }
}

impl TryFrom<Value> for JsonAction {
    type Error = ActionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut payload = match value {
            Value::Object(object) => object,
            other => {
                return Err(ActionError::NotAnObject {
                    kind: value_kind(&other),
                })
            }
        };

        match payload.remove(TYPE_FIELD) {
            Some(Value::String(action_type)) => Ok(Self {
                action_type,
                payload,
            }),
            _ => Err(ActionError::MissingType),
        }
    }
}

impl FromStr for JsonAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }
}

impl From<JsonAction> for Value {
    fn from(action: JsonAction) -> Self {
        action.into_value()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_with_type() {
        let action: JsonAction = r#"{"type":"ADD","amount":3}"#.parse().unwrap();
        assert_eq!(action.action_type(), "ADD");
        assert_eq!(action.get("amount"), Some(&json!(3)));
        assert!(action.get("type").is_none());
        assert_eq!(action.payload().len(), 1);
    }

    #[test]
    fn rejects_missing_type() {
        let err = JsonAction::try_from(json!({"amount": 3})).unwrap_err();
        assert!(matches!(err, ActionError::MissingType));
    }

    #[test]
    fn rejects_non_string_type() {
        let err = JsonAction::try_from(json!({"type": 7})).unwrap_err();
        assert!(matches!(err, ActionError::MissingType));
    }

    #[test]
    fn rejects_non_object() {
        let err = JsonAction::try_from(json!(null)).unwrap_err();
        assert!(matches!(err, ActionError::NotAnObject { kind: "null" }));
        assert_eq!(err.to_string(), "Action must be a JSON object, got null");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = "{not json".parse::<JsonAction>().unwrap_err();
        assert!(matches!(err, ActionError::InvalidJson(_)));
    }

    #[test]
    fn with_field_cannot_overwrite_type() {
        let action = JsonAction::new("ADD")
            .with_field("amount", 2)
            .with_field("type", "REMOVE");
        assert_eq!(action.action_type(), "ADD");
        assert_eq!(action.into_value(), json!({"type": "ADD", "amount": 2}));
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<JsonAction, _> = serde_json::from_value(json!({"type": "X"}));
        assert!(ok.is_ok());
        let bad: Result<JsonAction, _> = serde_json::from_value(json!({"kind": "X"}));
        assert!(bad.is_err());
    }
}
