//! Profile image entity model.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

/// Profile image URLs for a user or an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileImage {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    /// Either `"user"` or `"organization"`.
    #[serde(deserialize_with = "null_default")]
    pub image_of: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image_90: String,
}
