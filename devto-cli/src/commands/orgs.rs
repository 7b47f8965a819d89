//! Organization commands.

use clap::Subcommand;
use console::style;

use devto_api::endpoints::organizations::OrganizationQuery;
use devto_api::ApiClient;
use devto_core::error::{DevError, DevResult};
use devto_models::ListingCategory;

use crate::OutputFormat;

/// Pagination shared by the organization list subcommands.
#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    #[arg(short, long, default_value = "1")]
    page: i32,
    #[arg(short = 'n', long, default_value = "30")]
    per_page: i32,
}

#[derive(Subcommand)]
pub enum OrgsAction {
    /// Show an organization's profile.
    Get {
        username: String,
    },
    /// List an organization's members.
    Users {
        username: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List an organization's articles.
    Articles {
        username: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List an organization's listings.
    Listings {
        username: String,
        #[arg(short, long)]
        category: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

pub async fn run(api: &ApiClient, action: OrgsAction, format: OutputFormat) -> DevResult<()> {
    match action {
        OrgsAction::Get { username } => {
            let org = api.organization(&username).await?;
            match format {
                OutputFormat::Json => super::print_json(&org),
                OutputFormat::Text => {
                    println!("{} ({})", style(&org.name).bold(), org.username);
                    if !org.tag_line.as_deref().unwrap_or_default().is_empty() {
                        println!("  {}", org.tag_line.as_deref().unwrap_or_default());
                    }
                    println!("  url:        {}", super::or_dash(Some(org.url.as_str())));
                    println!("  location:   {}", super::or_dash(org.location.as_deref()));
                    println!("  tech stack: {}", super::or_dash(org.tech_stack.as_deref()));
                    println!("  joined:     {}", super::or_dash(Some(org.joined_at.as_str())));
                    Ok(())
                }
            }
        }
        OrgsAction::Users { username, page } => {
            let query = OrganizationQuery { page: page.page, per_page: page.per_page, category: None };
            let users = api.organization_users(&username, &query).await?;
            super::users::print_users(&users, format)
        }
        OrgsAction::Articles { username, page } => {
            let query = OrganizationQuery { page: page.page, per_page: page.per_page, category: None };
            let articles = api.organization_articles(&username, &query).await?;
            match format {
                OutputFormat::Json => super::print_json(&articles),
                OutputFormat::Text => {
                    let mut table = super::new_table(vec!["ID", "Title", "Author", "Published"]);
                    for a in &articles {
                        table.add_row(vec![
                            a.id.to_string(),
                            super::truncate(&a.title, 50),
                            a.user.username.clone(),
                            super::short_date(a.published_at.as_deref()),
                        ]);
                    }
                    println!("{table}");
                    Ok(())
                }
            }
        }
        OrgsAction::Listings { username, category, page } => {
            let category = category
                .map(|c| c.parse::<ListingCategory>().map_err(DevError::Validation))
                .transpose()?;
            let query = OrganizationQuery { page: page.page, per_page: page.per_page, category };
            let listings = api.organization_listings(&username, &query).await?;
            match format {
                OutputFormat::Json => super::print_json(&listings),
                OutputFormat::Text => {
                    let mut table = super::new_table(vec!["ID", "Category", "Title"]);
                    for l in &listings {
                        table.add_row(vec![
                            l.id.to_string(),
                            l.category.to_string(),
                            super::truncate(&l.title, 60),
                        ]);
                    }
                    println!("{table}");
                    Ok(())
                }
            }
        }
    }
}
