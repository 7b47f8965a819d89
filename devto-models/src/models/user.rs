//! User and reading-list entity models.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::de::null_default;

use super::article::Article;

/// A DEV user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub joined_at: String,
    #[serde(deserialize_with = "null_default")]
    pub profile_image: String,
}

/// Status of a reading-list reaction. Unknown statuses keep their raw name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReadingListStatus {
    #[default]
    Valid,
    Invalid,
    Confirmed,
    Archived,
    Other(String),
}

impl ReadingListStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Confirmed => "confirmed",
            Self::Archived => "archived",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ReadingListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReadingListStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReadingListStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let known = match name.as_str() {
            "valid" => Some(Self::Valid),
            "invalid" => Some(Self::Invalid),
            "confirmed" => Some(Self::Confirmed),
            "archived" => Some(Self::Archived),
            _ => None,
        };
        Ok(known.unwrap_or(Self::Other(name)))
    }
}

/// A bookmarked article on the authenticated user's reading list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingList {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub status: ReadingListStatus,
    #[serde(deserialize_with = "null_default")]
    pub article: Article,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_nulls() {
        let json = serde_json::json!({
            "type_of": "user",
            "id": 1234,
            "username": "bob",
            "name": "bob",
            "summary": "Hello, world",
            "twitter_username": "bob",
            "github_username": null,
            "website_url": null,
            "location": "New York",
            "joined_at": "Jan 1, 2017",
            "profile_image": "https://res.cloudinary.com/profile.jpeg"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, 1234);
        assert_eq!(user.summary.as_deref(), Some("Hello, world"));
        assert!(user.github_username.is_none());
    }

    #[test]
    fn test_reading_list_status() {
        let json = serde_json::json!({
            "type_of": "readinglist",
            "id": 9,
            "status": "archived",
            "article": { "id": 3, "tag_list": ["rust"], "tags": "rust" }
        });
        let entry: ReadingList = serde_json::from_value(json).unwrap();
        assert_eq!(entry.status, ReadingListStatus::Archived);
        assert_eq!(entry.article.id, 3);
    }

    #[test]
    fn test_unknown_status_kept() {
        let json = serde_json::json!([
            { "id": 1, "status": "pending" },
            { "id": 2, "status": null },
            { "id": 3, "status": "confirmed" }
        ]);
        let list: Vec<ReadingList> = serde_json::from_value(json).unwrap();
        assert_eq!(list[0].status, ReadingListStatus::Other("pending".into()));
        assert_eq!(list[0].status.to_string(), "pending");
        assert_eq!(list[1].status, ReadingListStatus::Valid);
        assert_eq!(list[2].status, ReadingListStatus::Confirmed);
        assert_eq!(serde_json::to_value(&list[2].status).unwrap(), "confirmed");
    }

    #[test]
    fn test_null_strings_and_article() {
        let user: User =
            serde_json::from_str(r#"{"id":7,"username":"ann","name":null,"joined_at":null}"#).unwrap();
        assert_eq!(user.username, "ann");
        assert!(user.name.is_empty());

        let entry: ReadingList = serde_json::from_str(r#"{"id":1,"article":null}"#).unwrap();
        assert_eq!(entry.article.id, 0);
    }
}
