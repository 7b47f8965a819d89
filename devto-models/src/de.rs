//! Lenient field decoding.
//!
//! The API sends `null` for many fields that are usually present. Fields
//! tagged with [`null_default`] decode `null` to the type's default, so a
//! single sparse record never fails a whole response.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper: `null` becomes `T::default()`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_default")]
        name: String,
        #[serde(deserialize_with = "null_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_becomes_default() {
        let s: Sample = serde_json::from_str(r#"{"name":null,"tags":null}"#).unwrap();
        assert_eq!(s.name, "");
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_present_and_missing_values() {
        let s: Sample = serde_json::from_str(r#"{"name":"ben"}"#).unwrap();
        assert_eq!(s.name, "ben");
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"tags":"a, b"}"#).is_err());
    }
}
