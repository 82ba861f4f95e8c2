use serde::{Deserialize, Serialize};

/// A todo record. The title doubles as its key in the store.
///
/// On the wire the fields are `Title`, `Description` and `Complete`. Decoding
/// also accepts lowercase names and fills missing fields with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "description")]
    pub description: String,
    #[serde(alias = "complete")]
    pub complete: bool,
}

impl Item {
    /// A fresh, incomplete item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), complete: false }
    }
}

/// Previous and stored values returned by a replace. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateResult {
    pub old: Item,
    pub new: Item,
}

/// Create payload: `{"description": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DescriptionInput {
    #[serde(alias = "Description")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_uses_pascal_case_fields() {
        let item = Item::new("milk", "buy milk");
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v, json!({"Title": "milk", "Description": "buy milk", "Complete": false}));
    }

    #[test]
    fn item_survives_serialize_deserialize() {
        let item = Item { title: "t\"x".into(), description: "ünï\ncode".into(), complete: true };
        let raw = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn item_decodes_lowercase_and_partial_bodies() {
        let item: Item = serde_json::from_str(r#"{"title":"a","complete":true}"#).unwrap();
        assert_eq!(item, Item { title: "a".into(), description: String::new(), complete: true });

        let empty: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Item::default());
    }

    #[test]
    fn update_result_shape() {
        let res = UpdateResult { old: Item::default(), new: Item::new("a", "b") };
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["Old"]["Title"], "");
        assert_eq!(v["New"]["Description"], "b");
    }

    #[test]
    fn description_input_accepts_either_case() {
        let lower: DescriptionInput = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        let upper: DescriptionInput = serde_json::from_str(r#"{"Description":"x"}"#).unwrap();
        assert_eq!(lower, upper);
        assert!(serde_json::from_str::<DescriptionInput>("not json").is_err());
    }
}
