//! Article endpoints.
//!
//! List operations decode [`Article`]; get, create and update decode
//! [`ArticleVariant`], whose tag fields have the opposite types.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::{Article, ArticleVariant};

use crate::client::ApiClient;
use crate::markdown::MarkdownSource;
use crate::query::{is_zero, with_query};

/// Feed selection for the public article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleState {
    Fresh,
    Rising,
    All,
}

/// Query parameters shared by the article list endpoints. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: i32,
    /// Single tag filter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Comma-separated tags, all of which must match.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tags: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tags_exclude: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ArticleState>,
    /// Most popular articles of the last N days.
    #[serde(skip_serializing_if = "is_zero")]
    pub top: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub collection_id: i32,
}

/// Writable article fields. `None` fields are not sent, so an update only
/// touches what is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sent as an array, unlike the joined string in list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
}

#[derive(Serialize)]
struct ArticleEnvelope<'a> {
    article: &'a ArticleParams,
}

impl ArticleParams {
    /// Replace `body_markdown` with the resolved source, if it yields text.
    pub fn with_markdown(mut self, markdown: &MarkdownSource) -> DevResult<Self> {
        if let Some(text) = markdown.resolve()? {
            self.body_markdown = Some(text);
        }
        Ok(self)
    }
}

impl ApiClient {
    /// List published articles, newest popular first.
    pub async fn published_articles(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/articles", query)?).await
    }

    /// List published articles in descending publish order.
    pub async fn published_articles_sorted(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/articles/latest", query)?).await
    }

    /// Get a published article by id.
    pub async fn published_article_by_id(&self, id: i64) -> DevResult<ArticleVariant> {
        self.get_json(&format!("/articles/{id}")).await
    }

    /// Get a published article by author username and slug.
    pub async fn published_article_by_path(
        &self,
        username: &str,
        slug: &str,
    ) -> DevResult<ArticleVariant> {
        self.get_json(&format!("/articles/{username}/{slug}")).await
    }

    /// Create an article. `markdown` overrides `body.body_markdown` when it yields text.
    pub async fn create_article(
        &self,
        body: ArticleParams,
        markdown: &MarkdownSource,
    ) -> DevResult<ArticleVariant> {
        let article = body.with_markdown(markdown)?;
        self.post_json("/articles", &ArticleEnvelope { article: &article })
            .await
    }

    /// Update an article owned by the authenticated user.
    pub async fn update_article(
        &self,
        id: i64,
        body: ArticleParams,
        markdown: &MarkdownSource,
    ) -> DevResult<ArticleVariant> {
        let article = body.with_markdown(markdown)?;
        self.put_json(
            &format!("/articles/{id}"),
            &ArticleEnvelope { article: &article },
        )
        .await
    }

    /// All articles of the authenticated user, drafts included.
    pub async fn user_articles(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/articles/me/all", query)?).await
    }

    pub async fn user_published_articles(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/articles/me/published", query)?)
            .await
    }

    pub async fn user_unpublished_articles(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/articles/me/unpublished", query)?)
            .await
    }

    /// Articles that carry a video.
    pub async fn articles_with_video(&self, query: &ArticleQuery) -> DevResult<Vec<Article>> {
        self.get_json(&with_query("/videos", query)?).await
    }
}
