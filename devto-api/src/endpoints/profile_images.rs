//! Profile image endpoint.

use devto_core::error::DevResult;
use devto_models::ProfileImage;

use crate::client::ApiClient;

impl ApiClient {
    /// Profile image of a user or an organization.
    pub async fn profile_image(&self, username: &str) -> DevResult<ProfileImage> {
        self.get_json(&format!("/profile_images/{username}")).await
    }
}
