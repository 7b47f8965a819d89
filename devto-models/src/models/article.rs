//! Article entity models.
//!
//! The API returns two incompatible article shapes. List endpoints send
//! `tag_list` as an array and `tags` as a comma-joined string; single-article
//! endpoints (get, create, update) swap them. `Article` decodes the first,
//! `ArticleVariant` the second. They are kept apart on purpose: decoding one
//! payload into the other shape fails.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

use super::user::User;

/// An article as returned by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub published: bool,
    #[serde(deserialize_with = "null_default")]
    pub readable_publish_date: String,
    #[serde(deserialize_with = "null_default")]
    pub social_image: String,
    #[serde(deserialize_with = "null_default")]
    pub body_markdown: String,
    #[serde(deserialize_with = "null_default")]
    pub body_html: String,
    /// Tag names, e.g. `["rust", "webdev"]`.
    #[serde(deserialize_with = "null_default")]
    pub tag_list: Vec<String>,
    /// The same tags joined with `", "`.
    #[serde(deserialize_with = "null_default")]
    pub tags: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub canonical_url: String,
    #[serde(deserialize_with = "null_default")]
    pub comments_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub positive_reactions_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub public_reactions_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossposted_at: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SSZ`; absent for drafts.
    pub published_at: Option<String>,
    pub last_comment_at: Option<String>,
    pub published_timestamp: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(deserialize_with = "null_default")]
    pub reading_time_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<SharedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flare_tag: Option<ArticleFlareTag>,
}

/// An article as returned by single-article endpoints and by create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleVariant {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub published: bool,
    #[serde(deserialize_with = "null_default")]
    pub readable_publish_date: String,
    #[serde(deserialize_with = "null_default")]
    pub social_image: String,
    #[serde(deserialize_with = "null_default")]
    pub body_markdown: String,
    #[serde(deserialize_with = "null_default")]
    pub body_html: String,
    /// Tag names joined with `", "`.
    #[serde(deserialize_with = "null_default")]
    pub tag_list: String,
    /// Tag names as an array.
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub canonical_url: String,
    #[serde(deserialize_with = "null_default")]
    pub comments_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub positive_reactions_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub public_reactions_count: i32,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossposted_at: Option<String>,
    pub published_at: Option<String>,
    pub last_comment_at: Option<String>,
    pub published_timestamp: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(deserialize_with = "null_default")]
    pub reading_time_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<SharedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flare_tag: Option<ArticleFlareTag>,
}

/// Organization summary embedded in articles and listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedOrganization {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image_90: String,
}

/// Highlighted tag shown next to an article title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleFlareTag {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub bg_color_hex: String,
    #[serde(deserialize_with = "null_default")]
    pub text_color_hex: String,
}
