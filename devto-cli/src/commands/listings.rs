//! Listing commands.

use clap::Subcommand;
use console::style;

use devto_api::endpoints::listings::{ListingParams, ListingQuery};
use devto_api::{ApiClient, MarkdownSource};
use devto_core::error::{DevError, DevResult};
use devto_models::{Listing, ListingCategory};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ListingsAction {
    /// List published listings, optionally in one category.
    List {
        /// Category, e.g. cfp, jobs, forsale.
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value = "1")]
        page: i32,
        #[arg(short = 'n', long, default_value = "30")]
        per_page: i32,
    },
    /// Show a listing by id.
    Get {
        id: i64,
    },
    /// Create a listing. Costs credits.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        /// Markdown body given inline.
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,
        /// Read the markdown body from a .md or .markdown file.
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
        /// Expiry date, DD/MM/YYYY.
        #[arg(long)]
        expires_at: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Let readers contact you through DEV Connect.
        #[arg(long)]
        contact_via_connect: bool,
        #[arg(long)]
        organization_id: Option<i64>,
    },
}

fn parse_category(value: &str) -> DevResult<ListingCategory> {
    value.parse::<ListingCategory>().map_err(DevError::Validation)
}

pub async fn run(api: &ApiClient, action: ListingsAction, format: OutputFormat) -> DevResult<()> {
    match action {
        ListingsAction::List { category, page, per_page } => {
            let query = ListingQuery { page, per_page, category: None };
            let listings = match category {
                Some(c) => {
                    api.published_listings_by_category(parse_category(&c)?, &query)
                        .await?
                }
                None => api.published_listings(&query).await?,
            };
            print_list(&listings, format)
        }
        ListingsAction::Get { id } => {
            let listing = api.listing_by_id(id).await?;
            print_one(&listing, format)
        }
        ListingsAction::Create {
            title,
            category,
            body,
            file,
            tags,
            expires_at,
            location,
            contact_via_connect,
            organization_id,
        } => {
            let markdown = match (body, file) {
                (Some(text), _) => MarkdownSource::Inline(text),
                (None, Some(path)) => MarkdownSource::FromFile(path),
                (None, None) => MarkdownSource::None,
            };
            let params = ListingParams {
                title: Some(title),
                category: Some(parse_category(&category)?),
                tags: tags.as_deref().map(super::split_list),
                expires_at,
                location,
                contact_via_connect: Some(contact_via_connect),
                organization_id,
                ..Default::default()
            };
            let listing = api.create_listing(params, &markdown).await?;
            if let OutputFormat::Text = format {
                println!("{} listing {}", style("Created").green().bold(), listing.id);
            }
            print_one(&listing, format)
        }
    }
}

fn print_list(listings: &[Listing], format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(listings),
        OutputFormat::Text => {
            if listings.is_empty() {
                println!("No listings found.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Category", "Title", "Author", "Tags"]);
            for l in listings {
                table.add_row(vec![
                    l.id.to_string(),
                    l.category.to_string(),
                    super::truncate(&l.title, 50),
                    l.user.username.clone(),
                    super::truncate(&l.tags.join(", "), 30),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

fn print_one(listing: &Listing, format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(listing),
        OutputFormat::Text => {
            println!("{}", style(&listing.title).bold());
            println!("  id:       {}", listing.id);
            println!("  category: {}", listing.category);
            println!("  author:   {}", listing.user.username);
            println!("  tags:     {}", super::or_dash(Some(listing.tag_list.as_str())));
            if !listing.body_markdown.is_empty() {
                println!();
                println!("{}", listing.body_markdown);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("cfp").unwrap(), ListingCategory::Cfp);
        assert!(matches!(parse_category("nope"), Err(DevError::Validation(_))));
    }
}
