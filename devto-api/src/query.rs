//! Query-string encoding for the listing endpoints' parameter structs.
//!
//! Parameter structs are plain `Serialize` types. Each field is one key;
//! fields marked `#[serde(skip_serializing_if = "...")]` with [`is_zero`] or
//! `String::is_empty` disappear when they hold their zero value, all others
//! are always emitted. Keys come out in ascending order so identical input
//! always gives an identical URL.

use serde::Serialize;
use serde_json::Value;

use devto_core::error::{DevError, DevResult};

/// `skip_serializing_if` predicate for integer parameters.
pub fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// Encode `params` as an `application/x-www-form-urlencoded` query string.
///
/// Fails with [`DevError::Serialization`] if `params` does not serialize to a
/// flat map of scalars.
pub fn encode_query<T: Serialize>(params: &T) -> DevResult<String> {
    let value = serde_json::to_value(params)
        .map_err(|e| DevError::Serialization(format!("failed to encode query: {e}")))?;
    let Value::Object(map) = value else {
        return Err(DevError::Serialization(
            "query parameters must serialize to a map".into(),
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(DevError::Serialization(format!(
                    "query parameter {key:?} is not a scalar"
                )))
            }
        };
        pairs.push((key, value));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish())
}

/// Append the encoded `params` to `path`, omitting the `?` when nothing is left.
pub fn with_query<T: Serialize>(path: &str, params: &T) -> DevResult<String> {
    let query = encode_query(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Params {
        #[serde(skip_serializing_if = "is_zero")]
        page: i32,
        #[serde(skip_serializing_if = "String::is_empty")]
        tag: String,
        sort: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        count: i32,
    }

    #[test]
    fn test_zero_values_omitted_and_literals_kept() {
        let query = encode_query(&Params::default()).unwrap();
        assert_eq!(query, "count=0&sort=");
    }

    #[test]
    fn test_set_values_present_and_sorted() {
        let params = Params {
            page: 2,
            tag: "rust".into(),
            sort: "desc".into(),
            state: Some("fresh".into()),
            count: 5,
        };
        assert_eq!(
            encode_query(&params).unwrap(),
            "count=5&page=2&sort=desc&state=fresh&tag=rust"
        );
    }

    #[test]
    fn test_deterministic() {
        let params = Params { page: 3, tag: "go".into(), ..Default::default() };
        assert_eq!(encode_query(&params).unwrap(), encode_query(&params).unwrap());
    }

    #[test]
    fn test_values_are_escaped() {
        let params = Params { tag: "c++ & rust".into(), ..Default::default() };
        let query = encode_query(&params).unwrap();
        assert!(query.contains("tag=c%2B%2B+%26+rust"));
    }

    #[test]
    fn test_non_map_rejected() {
        assert!(matches!(encode_query(&42), Err(DevError::Serialization(_))));
        assert!(matches!(encode_query(&vec![1, 2]), Err(DevError::Serialization(_))));
    }

    #[test]
    fn test_nested_value_rejected() {
        let params = serde_json::json!({ "tags": ["a", "b"] });
        assert!(matches!(encode_query(&params), Err(DevError::Serialization(_))));
    }

    #[test]
    fn test_with_query_drops_empty_separator() {
        #[derive(Serialize)]
        struct Empty {
            #[serde(skip_serializing_if = "is_zero")]
            page: i32,
        }
        assert_eq!(with_query("/webhooks", &Empty { page: 0 }).unwrap(), "/webhooks");
        assert_eq!(with_query("/webhooks", &Empty { page: 4 }).unwrap(), "/webhooks?page=4");
    }
}
