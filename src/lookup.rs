use serde_json::Value;

/// Renders a scalar JSON value as trimmed display text.
///
/// Strings, numbers and booleans count; booleans render as `True`/`False`.
/// Null, arrays and objects yield `None`, as does text that is empty after trimming.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Returns the text of the first key in `keys` holding a usable scalar value.
///
/// Keys are tried in order; a record that is not a JSON object has no fields.
pub fn first_text(record: &Value, keys: &[&str]) -> Option<String> {
    let object = record.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(scalar_text)
}

/// Resolves a record's image URL.
///
/// `Images` may be a list (first element wins) or a bare string; otherwise the
/// `img` and `image` keys are consulted.
pub fn image_value(record: &Value) -> Option<String> {
    match record.get("Images") {
        Some(Value::Array(images)) if !images.is_empty() => {
            let first = match &images[0] {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            };
            Some(first)
        }
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => first_text(record, &["img", "image"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("  Straw Hat ")), Some("Straw Hat".to_string()));
        assert_eq!(scalar_text(&json!(42)), Some("42".to_string()));
        assert_eq!(scalar_text(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(scalar_text(&json!("   ")), None);
        assert_eq!(scalar_text(&json!(true)), Some("True".to_string()));
        assert_eq!(scalar_text(&json!(false)), Some("False".to_string()));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!(["a"])), None);
        assert_eq!(scalar_text(&json!({"a": 1})), None);
    }

    #[test]
    fn test_first_text_order() {
        let record = json!({
            "English Name": "",
            "engName": null,
            "name": "Monkey D. Luffy",
            "epithet": "Straw Hat"
        });
        let name_keys = ["English Name", "Official English Name", "engName", "name"];
        assert_eq!(first_text(&record, &name_keys), Some("Monkey D. Luffy".to_string()));
        assert_eq!(
            first_text(&record, &["Epithet", "epithet"]),
            Some("Straw Hat".to_string())
        );
    }

    #[test]
    fn test_first_text_missing_keys() {
        let record = json!({"name": "Nami", "Epithet": null, "epithet": ["Cat Burglar"]});
        assert_eq!(first_text(&record, &["Epithet", "epithet"]), None);
        assert_eq!(first_text(&json!("not an object"), &["name"]), None);
        assert_eq!(first_text(&json!({"name": "Nami"}), &[]), None);
    }

    #[test]
    fn test_first_text_numbers() {
        let record = json!({"Bounty": 1500000000u64});
        assert_eq!(first_text(&record, &["Bounty", "bounty"]), Some("1500000000".to_string()));
    }

    #[test]
    fn test_first_text_booleans() {
        let record = json!({"Epithet": "", "epithet": false});
        assert_eq!(first_text(&record, &["Epithet", "epithet"]), Some("False".to_string()));
    }

    #[test]
    fn test_image_value_variants() {
        assert_eq!(
            image_value(&json!({"Images": [" a.jpg ", "b.jpg"]})),
            Some("a.jpg".to_string())
        );
        assert_eq!(image_value(&json!({"Images": "c.jpg"})), Some("c.jpg".to_string()));
        assert_eq!(
            image_value(&json!({"Images": [], "img": "d.jpg"})),
            Some("d.jpg".to_string())
        );
        assert_eq!(
            image_value(&json!({"Images": "  ", "image": "e.jpg"})),
            Some("e.jpg".to_string())
        );
        assert_eq!(image_value(&json!({"name": "Nami"})), None);
        assert_eq!(image_value(&json!([1, 2])), None);
    }
}
