//! Podcast episode entity model.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

/// A published podcast episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastEpisode {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub podcast: Podcast,
}

/// The show an episode belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Podcast {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_default")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_decode() {
        let json = serde_json::json!({
            "type_of": "podcast_episodes",
            "id": 13894,
            "path": "/codenewbie/s11-e8",
            "image_url": "https://example.com/ep.png",
            "title": "S11:E8 - What is the Jamstack",
            "podcast": { "title": "CodeNewbie", "slug": "codenewbie", "image_url": "https://example.com/cn.png" }
        });
        let ep: PodcastEpisode = serde_json::from_value(json).unwrap();
        assert_eq!(ep.id, 13894);
        assert_eq!(ep.podcast.slug, "codenewbie");
    }
}
