//! DEV API - typed HTTP client for the DEV (Forem) REST API.
//!
//! Covers articles, comments, listings, organizations, podcast episodes,
//! profile images, followed tags, users and webhooks. Every operation is one
//! request/response round trip through [`ApiClient`], which attaches the API
//! key, encodes JSON bodies and maps non-2xx responses to
//! [`DevError::Remote`](devto_core::DevError::Remote).
//!
//! ```no_run
//! # async fn run() -> devto_core::DevResult<()> {
//! use devto_api::{ApiClient, endpoints::articles::ArticleQuery};
//!
//! let client = ApiClient::new("my-api-key")?;
//! let latest = client
//!     .published_articles(&ArticleQuery { per_page: 5, tag: "rust".into(), ..Default::default() })
//!     .await?;
//! for article in latest {
//!     println!("{} by {}", article.title, article.user.username);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dates;
pub mod endpoints;
pub mod markdown;
pub mod query;
pub mod response;

// Re-export key types
pub use client::{ApiClient, ApiRequest};
pub use markdown::MarkdownSource;
pub use response::ErrorBody;
