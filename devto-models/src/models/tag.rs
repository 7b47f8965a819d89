//! Followed tag entity model.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

/// A tag the authenticated user follows, with its follow weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub points: f64,
}
