//! Listing (classified ad) entity model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::de::null_default;

use super::article::SharedOrganization;
use super::user::User;

/// Category a listing is filed under.
///
/// Categories the client does not know decode to `Other` with the raw name,
/// so a new server-side category does not fail a whole listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ListingCategory {
    Cfp,
    Forhire,
    Collabs,
    Education,
    Jobs,
    Mentors,
    Products,
    Mentees,
    Forsale,
    Events,
    #[default]
    Misc,
    Other(String),
}

impl ListingCategory {
    /// The known categories, in the order the API documents them.
    pub const ALL: [ListingCategory; 11] = [
        Self::Cfp,
        Self::Forhire,
        Self::Collabs,
        Self::Education,
        Self::Jobs,
        Self::Mentors,
        Self::Products,
        Self::Mentees,
        Self::Forsale,
        Self::Events,
        Self::Misc,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cfp => "cfp",
            Self::Forhire => "forhire",
            Self::Collabs => "collabs",
            Self::Education => "education",
            Self::Jobs => "jobs",
            Self::Mentors => "mentors",
            Self::Products => "products",
            Self::Mentees => "mentees",
            Self::Forsale => "forsale",
            Self::Events => "events",
            Self::Misc => "misc",
            Self::Other(name) => name,
        }
    }

    /// Map a wire name onto a category, keeping unknown names.
    pub fn from_wire(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| Self::Other(name.to_string()))
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for user input: only the known categories are accepted.
impl FromStr for ListingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .cloned()
            .ok_or_else(|| format!("unknown listing category: {s}"))
    }
}

impl Serialize for ListingCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ListingCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&name))
    }
}

/// A listing as returned by the API.
///
/// Unlike articles, listing responses carry both `tag_list` (joined string)
/// and `tags` (array) with the same types on every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub body_markdown: String,
    #[serde(deserialize_with = "null_default")]
    pub tag_list: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub category: ListingCategory,
    #[serde(deserialize_with = "null_default")]
    pub processed_html: String,
    #[serde(deserialize_with = "null_default")]
    pub published: bool,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<SharedOrganization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip_names() {
        for category in ListingCategory::ALL {
            let parsed: ListingCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
            let json = serde_json::to_value(&category).unwrap();
            assert_eq!(json, category.as_str());
        }
        assert!("garage-sale".parse::<ListingCategory>().is_err());
    }

    #[test]
    fn test_unknown_category_kept() {
        let json = serde_json::json!([
            { "id": 1, "category": "cfp" },
            { "id": 2, "category": "garage-sale" },
            { "id": 3, "category": null }
        ]);
        let listings: Vec<Listing> = serde_json::from_value(json).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].category, ListingCategory::Cfp);
        assert_eq!(listings[1].category, ListingCategory::Other("garage-sale".into()));
        assert_eq!(listings[1].category.to_string(), "garage-sale");
        assert_eq!(listings[2].category, ListingCategory::Misc);
        assert_eq!(
            serde_json::to_value(&listings[1].category).unwrap(),
            "garage-sale"
        );
    }

    #[test]
    fn test_null_user_and_strings() {
        let json = r#"{"id":4,"title":null,"body_markdown":null,"user":null,"tags":null}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 4);
        assert!(listing.title.is_empty());
        assert!(listing.user.username.is_empty());
        assert!(listing.tags.is_empty());
    }

    #[test]
    fn test_listing_decode() {
        let json = serde_json::json!({
            "type_of": "listing",
            "id": 1157,
            "title": "ACME Conference",
            "slug": "acme-conference-2of8",
            "body_markdown": "Awesome conference",
            "tag_list": "events",
            "tags": ["events"],
            "category": "cfp",
            "processed_html": "<p>Awesome conference</p>",
            "published": true,
            "user": { "username": "bob" },
            "organization": null
        });
        let listing: Listing = serde_json::from_value(json).unwrap();
        assert_eq!(listing.category, ListingCategory::Cfp);
        assert_eq!(listing.tags, vec!["events"]);
        assert!(listing.organization.is_none());
    }
}
