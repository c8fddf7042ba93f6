use map_state_reducer::{Action, ActionError, JsonAction, Reducer, WithMapState};
use serde_json::{json, Value};

fn cart(state: Value, action: JsonAction) -> Value {
    let mut items = state.as_array().cloned().unwrap_or_default();
    if action.action_type() == "ADD_ITEM" {
        if let Some(item) = action.get("item") {
            items.push(item.clone());
        }
    }
    Value::Array(items)
}

#[test]
fn json_actions_drive_mapping() -> anyhow::Result<()> {
    let reducer = WithMapState::new()
        .after(|state: Value| json!({ "items": state }))
        .before(|state: Value| state.get("items").cloned().unwrap_or(Value::Null))
        .only(["ADD_ITEM"])
        .wrap(|state: Value, action: JsonAction| cart(state, action));

    let action: JsonAction = r#"{"type":"ADD_ITEM","item":"apple"}"#.parse()?;
    let state = reducer.reduce(json!({ "items": ["pear"] }), action);
    assert_eq!(state, json!({ "items": ["pear", "apple"] }));

    let untouched = reducer.reduce(json!(["pear"]), JsonAction::new("CHECKOUT"));
    assert_eq!(untouched, json!(["pear"]));
    Ok(())
}

#[test]
fn malformed_actions_fail_before_reaching_reducer() {
    let inputs = [
        (r#"{"item":"apple"}"#, "missing type"),
        (r#"{"type":null}"#, "null type"),
        (r#"["ADD_ITEM"]"#, "array"),
    ];

    for (raw, label) in inputs {
        let result = raw.parse::<JsonAction>();
        assert!(result.is_err(), "{label} should be rejected");
    }

    let err = r#"["ADD_ITEM"]"#.parse::<JsonAction>().unwrap_err();
    assert!(matches!(err, ActionError::NotAnObject { kind: "array" }));
}

#[test]
fn serializes_with_type_field() -> anyhow::Result<()> {
    let action = JsonAction::new("ADD_ITEM").with_field("item", "apple");
    let value = serde_json::to_value(&action)?;
    assert_eq!(value, json!({ "type": "ADD_ITEM", "item": "apple" }));

    let back: JsonAction = serde_json::from_value(value)?;
    assert_eq!(back, action);
    Ok(())
}
