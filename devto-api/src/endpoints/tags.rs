//! Tag endpoints.

use devto_core::error::DevResult;
use devto_models::Tag;

use crate::client::ApiClient;

impl ApiClient {
    /// Tags the authenticated user follows, with their follow weights.
    pub async fn followed_tags(&self) -> DevResult<Vec<Tag>> {
        self.get_json("/follows/tags").await
    }
}
