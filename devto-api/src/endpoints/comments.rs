//! Comment endpoints.

use serde::Serialize;

use devto_core::error::DevResult;
use devto_models::Comment;

use crate::client::ApiClient;
use crate::query::with_query;

/// Selects the comment threads of one article or one podcast episode.
///
/// Both keys are always sent, zero included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentQuery {
    /// Article id.
    pub a_id: i64,
    /// Podcast episode id.
    pub p_id: i64,
}

impl CommentQuery {
    pub fn for_article(id: i64) -> Self {
        Self { a_id: id, ..Default::default() }
    }

    pub fn for_podcast_episode(id: i64) -> Self {
        Self { p_id: id, ..Default::default() }
    }
}

impl ApiClient {
    /// Top-level comments with their full reply trees.
    pub async fn comments(&self, query: &CommentQuery) -> DevResult<Vec<Comment>> {
        self.get_json(&with_query("/comments", query)?).await
    }

    /// A single comment and its replies, by id code (e.g. "m35m").
    pub async fn comment(&self, id_code: &str) -> DevResult<Comment> {
        self.get_json(&format!("/comments/{id_code}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;

    #[test]
    fn test_both_keys_always_present() {
        assert_eq!(encode_query(&CommentQuery::default()).unwrap(), "a_id=0&p_id=0");
        assert_eq!(
            encode_query(&CommentQuery::for_article(270180)).unwrap(),
            "a_id=270180&p_id=0"
        );
        assert_eq!(
            encode_query(&CommentQuery::for_podcast_episode(13)).unwrap(),
            "a_id=0&p_id=13"
        );
    }
}
