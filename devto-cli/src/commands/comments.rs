//! Comment commands.

use clap::Subcommand;
use console::style;

use devto_api::endpoints::comments::CommentQuery;
use devto_api::ApiClient;
use devto_core::error::{DevError, DevResult};
use devto_models::Comment;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CommentsAction {
    /// Show the comment threads of an article or podcast episode.
    List {
        /// Article id.
        #[arg(short, long, conflicts_with = "episode")]
        article: Option<i64>,
        /// Podcast episode id.
        #[arg(short, long)]
        episode: Option<i64>,
    },
    /// Show one comment and its replies.
    Get {
        /// Comment id code, e.g. "m35m".
        id_code: String,
    },
}

pub async fn run(api: &ApiClient, action: CommentsAction, format: OutputFormat) -> DevResult<()> {
    match action {
        CommentsAction::List { article, episode } => {
            let query = match (article, episode) {
                (Some(id), _) => CommentQuery::for_article(id),
                (None, Some(id)) => CommentQuery::for_podcast_episode(id),
                (None, None) => {
                    return Err(DevError::Validation(
                        "either --article or --episode is required".into(),
                    ))
                }
            };
            let comments = api.comments(&query).await?;
            match format {
                OutputFormat::Json => super::print_json(&comments),
                OutputFormat::Text => {
                    if comments.is_empty() {
                        println!("No comments.");
                    }
                    for comment in &comments {
                        print_thread(comment, 0);
                    }
                    Ok(())
                }
            }
        }
        CommentsAction::Get { id_code } => {
            let comment = api.comment(&id_code).await?;
            match format {
                OutputFormat::Json => super::print_json(&comment),
                OutputFormat::Text => {
                    print_thread(&comment, 0);
                    Ok(())
                }
            }
        }
    }
}

fn print_thread(comment: &Comment, level: usize) {
    let indent = "  ".repeat(level);
    println!(
        "{indent}{} {} {}",
        style(&comment.id_code).cyan(),
        style(&comment.user.username).bold(),
        style(super::short_date(Some(comment.created_at.as_str()))).dim()
    );
    let text = strip_tags(&comment.body_html);
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        println!("{indent}  {}", line.trim());
    }
    for child in &comment.children {
        print_thread(child, level + 1);
    }
}

/// Drop HTML tags for terminal display. Entities are left as-is.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Nice <strong>post</strong>!</p>\n"), "Nice post!\n");
        assert_eq!(strip_tags("no markup"), "no markup");
    }
}
