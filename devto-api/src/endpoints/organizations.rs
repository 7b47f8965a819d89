//! Organization endpoints.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::{Article, Listing, ListingCategory, Organization, User};

use crate::client::ApiClient;
use crate::query::{is_zero, with_query};

/// Query parameters for an organization's members, listings and articles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: i32,
    /// Only meaningful for listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ListingCategory>,
}

impl ApiClient {
    pub async fn organization(&self, username: &str) -> DevResult<Organization> {
        self.get_json(&format!("/organizations/{username}")).await
    }

    pub async fn organization_users(
        &self,
        username: &str,
        query: &OrganizationQuery,
    ) -> DevResult<Vec<User>> {
        let path = format!("/organizations/{username}/users");
        self.get_json(&with_query(&path, query)?).await
    }

    pub async fn organization_listings(
        &self,
        username: &str,
        query: &OrganizationQuery,
    ) -> DevResult<Vec<Listing>> {
        let path = format!("/organizations/{username}/listings");
        self.get_json(&with_query(&path, query)?).await
    }

    pub async fn organization_articles(
        &self,
        username: &str,
        query: &OrganizationQuery,
    ) -> DevResult<Vec<Article>> {
        let path = format!("/organizations/{username}/articles");
        self.get_json(&with_query(&path, query)?).await
    }
}
