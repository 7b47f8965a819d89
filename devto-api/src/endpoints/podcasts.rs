//! Podcast episode endpoints.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::PodcastEpisode;

use crate::client::ApiClient;
use crate::query::with_query;

/// Query parameters for podcast episodes. All keys are always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodcastQuery {
    pub page: i32,
    pub per_page: i32,
    /// Podcast slug; empty selects all podcasts.
    pub username: String,
}

impl Default for PodcastQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 30,
            username: String::new(),
        }
    }
}

impl ApiClient {
    pub async fn published_podcast_episodes(
        &self,
        query: &PodcastQuery,
    ) -> DevResult<Vec<PodcastEpisode>> {
        self.get_json(&with_query("/podcast_episodes", query)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;

    #[test]
    fn test_literal_keys() {
        assert_eq!(
            encode_query(&PodcastQuery::default()).unwrap(),
            "page=1&per_page=30&username="
        );
        let query = PodcastQuery {
            username: "codenewbie".into(),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&query).unwrap(),
            "page=1&per_page=30&username=codenewbie"
        );
    }
}
