//! Webhook entity model.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

/// A registered webhook endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub target_url: String,
    #[serde(deserialize_with = "null_default")]
    pub events: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}
