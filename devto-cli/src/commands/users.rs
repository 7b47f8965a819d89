//! User commands.

use clap::Subcommand;
use console::style;

use devto_api::endpoints::users::{ReadingListQuery, UserQuery};
use devto_api::ApiClient;
use devto_core::error::DevResult;
use devto_models::User;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum UsersAction {
    /// Show the user owning the API key.
    Me,
    /// Show a user by id.
    Get {
        id: i64,
    },
    /// Show a user by username.
    ByUsername {
        username: String,
    },
    /// List your followers.
    Followers {
        #[arg(short, long, default_value = "1")]
        page: i32,
        #[arg(short = 'n', long, default_value = "80")]
        per_page: i32,
        /// Sort order, e.g. "-created_at".
        #[arg(long, default_value = "")]
        sort: String,
    },
    /// Show your reading list.
    ReadingList {
        #[arg(short, long, default_value = "1")]
        page: i32,
        #[arg(short = 'n', long, default_value = "30")]
        per_page: i32,
    },
}

pub async fn run(api: &ApiClient, action: UsersAction, format: OutputFormat) -> DevResult<()> {
    match action {
        UsersAction::Me => print_user(&api.authenticated_user().await?, format),
        UsersAction::Get { id } => print_user(&api.user_by_id(id).await?, format),
        UsersAction::ByUsername { username } => {
            let query = UserQuery {
                url: username,
                ..Default::default()
            };
            print_user(&api.user_by_username(&query).await?, format)
        }
        UsersAction::Followers { page, per_page, sort } => {
            let query = UserQuery {
                page,
                per_page,
                sort,
                ..Default::default()
            };
            let followers = api.user_followers(&query).await?;
            print_users(&followers, format)
        }
        UsersAction::ReadingList { page, per_page } => {
            let list = api.reading_list(&ReadingListQuery { page, per_page }).await?;
            match format {
                OutputFormat::Json => super::print_json(&list),
                OutputFormat::Text => {
                    if list.is_empty() {
                        println!("Your reading list is empty.");
                        return Ok(());
                    }
                    let mut table = super::new_table(vec!["ID", "Status", "Article", "Author"]);
                    for item in &list {
                        table.add_row(vec![
                            item.id.to_string(),
                            item.status.to_string(),
                            super::truncate(&item.article.title, 50),
                            item.article.user.username.clone(),
                        ]);
                    }
                    println!("{table}");
                    Ok(())
                }
            }
        }
    }
}

fn print_user(user: &User, format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(user),
        OutputFormat::Text => {
            println!("{} (@{})", style(&user.name).bold(), user.username);
            println!("  id:       {}", user.id);
            if let Some(summary) = user.summary.as_deref().filter(|s| !s.is_empty()) {
                println!("  summary:  {summary}");
            }
            println!("  location: {}", super::or_dash(user.location.as_deref()));
            println!("  github:   {}", super::or_dash(user.github_username.as_deref()));
            println!("  twitter:  {}", super::or_dash(user.twitter_username.as_deref()));
            println!("  website:  {}", super::or_dash(user.website_url.as_deref()));
            println!("  joined:   {}", super::or_dash(Some(user.joined_at.as_str())));
            Ok(())
        }
    }
}

/// Table of users; shared with the organization members command.
pub fn print_users(users: &[User], format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(users),
        OutputFormat::Text => {
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Username", "Name"]);
            for u in users {
                table.add_row(vec![u.id.to_string(), u.username.clone(), u.name.clone()]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
