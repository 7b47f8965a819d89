//! Podcast episode command.

use devto_api::endpoints::podcasts::PodcastQuery;
use devto_api::ApiClient;
use devto_core::error::DevResult;

use crate::OutputFormat;

pub async fn run(
    api: &ApiClient,
    page: i32,
    per_page: i32,
    username: Option<String>,
    format: OutputFormat,
) -> DevResult<()> {
    let query = PodcastQuery {
        page,
        per_page,
        username: username.unwrap_or_default(),
    };
    let episodes = api.published_podcast_episodes(&query).await?;

    match format {
        OutputFormat::Json => super::print_json(&episodes),
        OutputFormat::Text => {
            if episodes.is_empty() {
                println!("No episodes found.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Podcast", "Episode", "Path"]);
            for e in &episodes {
                table.add_row(vec![
                    e.id.to_string(),
                    super::truncate(&e.podcast.title, 25),
                    super::truncate(&e.title, 50),
                    e.path.clone(),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
