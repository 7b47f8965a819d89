//! Webhook endpoints.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::Webhook;

use crate::client::ApiClient;

/// Fields for registering a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookParams {
    /// Name of the integration, e.g. "DEV".
    pub source: String,
    pub target_url: String,
    /// Events to subscribe to, e.g. `["article_created"]`.
    pub events: Vec<String>,
}

#[derive(Serialize)]
struct WebhookEnvelope<'a> {
    webhook_endpoint: &'a WebhookParams,
}

impl ApiClient {
    /// Webhooks registered by the authenticated user.
    pub async fn webhooks(&self) -> DevResult<Vec<Webhook>> {
        self.get_json("/webhooks").await
    }

    pub async fn create_webhook(&self, body: &WebhookParams) -> DevResult<Webhook> {
        self.post_json("/webhooks", &WebhookEnvelope { webhook_endpoint: body })
            .await
    }

    pub async fn webhook_by_id(&self, id: i64) -> DevResult<Webhook> {
        self.get_json(&format!("/webhooks/{id}")).await
    }

    /// Delete a webhook. The response body is not read.
    pub async fn delete_webhook(&self, id: i64) -> DevResult<()> {
        self.delete(&format!("/webhooks/{id}")).await
    }
}
