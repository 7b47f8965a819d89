//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods to [`ApiClient`](crate::ApiClient) for one
//! group of related endpoints, plus the query and body types they accept.

pub mod articles;
pub mod comments;
pub mod listings;
pub mod organizations;
pub mod podcasts;
pub mod profile_images;
pub mod tags;
pub mod users;
pub mod webhooks;
