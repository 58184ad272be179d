use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as a missing field.
///
/// Use together with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<i64>,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let p: Probe = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(p.text, "");
        assert!(p.items.is_empty());

        let p: Probe = serde_json::from_str(r#"{"text": "x", "items": [1, 2]}"#).unwrap();
        assert_eq!(p.text, "x");
        assert_eq!(p.items, vec![1, 2]);
    }
}
