use serde::{Deserialize, Serialize};

/// Envelope for the TV's generic menu settings update.
///
/// Wire shape: `{"values":[{"value":{"Nodeid":N,"Controllable":"true","Available":"true","data":{"value":V}}}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub values: Vec<SettingsValues>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsValues {
    pub value: SettingsValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsValue {
    #[serde(rename = "Nodeid")]
    pub node_id: u32,
    #[serde(rename = "Controllable")]
    pub controllable: String,
    #[serde(rename = "Available")]
    pub available: String,
    pub data: SettingsData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsData {
    pub value: DataValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Integer(i64),
    Text(String),
}

impl SettingsUpdate {
    /// Update a single controllable node.
    pub fn single(node_id: u32, value: DataValue) -> Self {
        Self {
            values: vec![SettingsValues {
                value: SettingsValue {
                    node_id,
                    controllable: "true".into(),
                    available: "true".into(),
                    data: SettingsData { value },
                },
            }],
        }
    }

    /// Boolean nodes take the strings `"true"` and `"false"`.
    pub fn toggle(node_id: u32, on: bool) -> Self {
        Self::single(node_id, DataValue::Text(on.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_integer_update_shape() {
        let update = SettingsUpdate::single(2131230769, DataValue::Integer(5));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "values": [{
                    "value": {
                        "Nodeid": 2131230769,
                        "Controllable": "true",
                        "Available": "true",
                        "data": {"value": 5}
                    }
                }]
            })
        );
    }

    #[test]
    fn test_toggle_uses_string_value() {
        let update = SettingsUpdate::toggle(2131230774, false);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["values"][0]["value"]["data"]["value"], "false");
    }

    #[test]
    fn test_parse_mixed_values() {
        let raw = r#"{"values":[{"value":{"Nodeid":1,"Controllable":"true","Available":"false","data":{"value":"true"}}}]}"#;
        let update: SettingsUpdate = serde_json::from_str(raw).unwrap();
        assert_eq!(
            update.values[0].value.data.value,
            DataValue::Text("true".into())
        );
        assert_eq!(update.values[0].value.available, "false");
    }
}
