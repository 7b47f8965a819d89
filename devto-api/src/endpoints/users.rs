//! User endpoints: lookups, the authenticated user, followers and the reading list.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::{ReadingList, User};

use crate::client::ApiClient;
use crate::query::{is_zero, with_query};

/// Query parameters for user lookups and follower lists.
///
/// `url` and `sort` are always sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: i32,
    /// Username to look up, for [`ApiClient::user_by_username`].
    pub url: String,
    /// Follower ordering, e.g. "-created_at".
    pub sort: String,
}

/// Pagination for the reading list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingListQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: i32,
}

impl ApiClient {
    pub async fn user_by_id(&self, id: i64) -> DevResult<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    /// Look up a user by the username in `query.url`.
    pub async fn user_by_username(&self, query: &UserQuery) -> DevResult<User> {
        self.get_json(&with_query("/users/by_username", query)?).await
    }

    /// The user owning the API key.
    pub async fn authenticated_user(&self) -> DevResult<User> {
        self.get_json("/users/me").await
    }

    pub async fn reading_list(&self, query: &ReadingListQuery) -> DevResult<Vec<ReadingList>> {
        self.get_json(&with_query("/readinglist", query)?).await
    }

    /// Users following the authenticated user.
    pub async fn user_followers(&self, query: &UserQuery) -> DevResult<Vec<User>> {
        self.get_json(&with_query("/followers/users", query)?).await
    }
}
