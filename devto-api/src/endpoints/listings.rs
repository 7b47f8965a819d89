//! Listing (classified ad) endpoints.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::{Listing, ListingCategory};

use crate::client::ApiClient;
use crate::markdown::MarkdownSource;
use crate::query::{is_zero, with_query};

/// Query parameters for listing lists. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ListingCategory>,
}

/// State change requested alongside an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingAction {
    Bump,
    Publish,
    Unpublish,
}

/// Writable listing fields. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ListingCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Comma-separated alternative to `tags`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<String>,
    /// `DD/MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_via_connect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ListingAction>,
}

#[derive(Serialize)]
struct ListingEnvelope<'a> {
    listing: &'a ListingParams,
}

impl ListingParams {
    /// Replace `body_markdown` with the resolved source, if it yields text.
    pub fn with_markdown(mut self, markdown: &MarkdownSource) -> DevResult<Self> {
        if let Some(text) = markdown.resolve()? {
            self.body_markdown = Some(text);
        }
        Ok(self)
    }
}

impl ApiClient {
    pub async fn published_listings(&self, query: &ListingQuery) -> DevResult<Vec<Listing>> {
        self.get_json(&with_query("/listings", query)?).await
    }

    /// Published listings in one category. A `category` set on `query` is
    /// redundant here and is still sent.
    pub async fn published_listings_by_category(
        &self,
        category: ListingCategory,
        query: &ListingQuery,
    ) -> DevResult<Vec<Listing>> {
        let path = format!("/listings/category/{category}");
        self.get_json(&with_query(&path, query)?).await
    }

    pub async fn listing_by_id(&self, id: i64) -> DevResult<Listing> {
        self.get_json(&format!("/listings/{id}")).await
    }

    /// Create a listing. Listings cost credits on the remote side.
    pub async fn create_listing(
        &self,
        body: ListingParams,
        markdown: &MarkdownSource,
    ) -> DevResult<Listing> {
        let listing = body.with_markdown(markdown)?;
        self.post_json("/listings", &ListingEnvelope { listing: &listing })
            .await
    }

    /// Update a listing, or bump/publish/unpublish it via `body.action`.
    pub async fn update_listing(
        &self,
        id: i64,
        body: ListingParams,
        markdown: &MarkdownSource,
    ) -> DevResult<Listing> {
        let listing = body.with_markdown(markdown)?;
        self.put_json(
            &format!("/listings/{id}"),
            &ListingEnvelope { listing: &listing },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;

    #[test]
    fn test_query_uses_snake_case_keys() {
        let query = ListingQuery {
            page: 2,
            per_page: 10,
            category: Some(ListingCategory::Cfp),
        };
        assert_eq!(encode_query(&query).unwrap(), "category=cfp&page=2&per_page=10");
        assert_eq!(encode_query(&ListingQuery::default()).unwrap(), "");
    }

    #[test]
    fn test_action_body() {
        let params = ListingParams {
            action: Some(ListingAction::Bump),
            ..Default::default()
        };
        let json = serde_json::to_value(ListingEnvelope { listing: &params }).unwrap();
        assert_eq!(json, serde_json::json!({ "listing": { "action": "bump" } }));
    }

    #[test]
    fn test_create_body_fields() {
        let params = ListingParams {
            title: Some("Rust mentor".into()),
            category: Some(ListingCategory::Mentors),
            tags: Some(vec!["rust".into()]),
            contact_via_connect: Some(true),
            ..Default::default()
        }
        .with_markdown(&MarkdownSource::from("Weekly sessions"))
        .unwrap();
        let json = serde_json::to_value(ListingEnvelope { listing: &params }).unwrap();
        assert_eq!(json["listing"]["category"], "mentors");
        assert_eq!(json["listing"]["body_markdown"], "Weekly sessions");
        assert_eq!(json["listing"]["contact_via_connect"], true);
        assert!(json["listing"].get("expires_at").is_none());
    }
}
