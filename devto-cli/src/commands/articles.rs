//! Article commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use devto_api::endpoints::articles::{ArticleParams, ArticleQuery, ArticleState};
use devto_api::{ApiClient, MarkdownSource};
use devto_core::error::DevResult;
use devto_models::{Article, ArticleVariant};

use crate::OutputFormat;

/// Feed filter for `articles list`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StateArg {
    Fresh,
    Rising,
    All,
}

impl From<StateArg> for ArticleState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Fresh => ArticleState::Fresh,
            StateArg::Rising => ArticleState::Rising,
            StateArg::All => ArticleState::All,
        }
    }
}

/// Which of the authenticated user's articles to list.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MineFilter {
    All,
    Published,
    Unpublished,
}

/// Pagination and filters shared by the list subcommands.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Page number (1-based).
    #[arg(short, long, default_value = "1")]
    page: i32,
    /// Articles per page.
    #[arg(short = 'n', long, default_value = "30")]
    per_page: i32,
    /// Only articles with this tag.
    #[arg(short, long)]
    tag: Option<String>,
    /// Only articles with all of these comma-separated tags.
    #[arg(long)]
    tags: Option<String>,
    /// Exclude articles with any of these comma-separated tags.
    #[arg(long)]
    exclude: Option<String>,
    /// Only articles by this user or organization.
    #[arg(short, long)]
    username: Option<String>,
    #[arg(long)]
    state: Option<StateArg>,
    /// Most popular articles of the last N days.
    #[arg(long)]
    top: Option<i32>,
    /// Only articles in this series.
    #[arg(long)]
    collection: Option<i32>,
}

impl ListArgs {
    fn query(&self) -> ArticleQuery {
        ArticleQuery {
            page: self.page,
            per_page: self.per_page,
            tag: self.tag.clone().unwrap_or_default(),
            tags: self.tags.clone().unwrap_or_default(),
            tags_exclude: self.exclude.clone().unwrap_or_default(),
            username: self.username.clone().unwrap_or_default(),
            state: self.state.map(Into::into),
            top: self.top.unwrap_or_default(),
            collection_id: self.collection.unwrap_or_default(),
        }
    }
}

/// Writable article fields taken from flags.
#[derive(Debug, Clone, clap::Args)]
pub struct WriteArgs {
    #[arg(long)]
    title: Option<String>,
    /// Markdown body given inline.
    #[arg(long, conflicts_with = "file")]
    body: Option<String>,
    /// Read the markdown body from a .md or .markdown file.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Comma-separated tags (at most four).
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    series: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    canonical_url: Option<String>,
    #[arg(long)]
    main_image: Option<String>,
    /// Publish under this organization.
    #[arg(long)]
    organization_id: Option<i64>,
    /// Publish immediately instead of saving a draft.
    #[arg(long)]
    publish: bool,
    /// Unpublish (update only).
    #[arg(long, conflicts_with = "publish")]
    unpublish: bool,
}

impl WriteArgs {
    fn split(self) -> (ArticleParams, MarkdownSource) {
        let markdown = match (self.body, self.file) {
            (Some(text), _) => MarkdownSource::Inline(text),
            (None, Some(path)) => MarkdownSource::FromFile(path),
            (None, None) => MarkdownSource::None,
        };
        let published = if self.publish {
            Some(true)
        } else if self.unpublish {
            Some(false)
        } else {
            None
        };
        let params = ArticleParams {
            title: self.title,
            body_markdown: None,
            published,
            series: self.series,
            main_image: self.main_image,
            canonical_url: self.canonical_url,
            description: self.description,
            tags: self.tags.as_deref().map(super::split_list),
            organization_id: self.organization_id,
        };
        (params, markdown)
    }
}

#[derive(Subcommand)]
pub enum ArticlesAction {
    /// List published articles.
    List(ListArgs),
    /// List published articles, newest first.
    Latest(ListArgs),
    /// Show a published article by id.
    Get {
        id: i64,
    },
    /// Show a published article by author and slug.
    ByPath {
        username: String,
        slug: String,
    },
    /// List your own articles.
    Mine {
        #[arg(long, default_value = "all")]
        filter: MineFilter,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Create an article (a draft unless --publish is given).
    Create(WriteArgs),
    /// Update one of your articles.
    Update {
        id: i64,
        #[command(flatten)]
        fields: WriteArgs,
    },
    /// List articles with a video.
    Videos(ListArgs),
}

pub async fn run(api: &ApiClient, action: ArticlesAction, format: OutputFormat) -> DevResult<()> {
    match action {
        ArticlesAction::List(args) => {
            let articles = api.published_articles(&args.query()).await?;
            print_list(&articles, format)
        }
        ArticlesAction::Latest(args) => {
            let articles = api.published_articles_sorted(&args.query()).await?;
            print_list(&articles, format)
        }
        ArticlesAction::Get { id } => {
            let article = api.published_article_by_id(id).await?;
            print_one(&article, format)
        }
        ArticlesAction::ByPath { username, slug } => {
            let article = api.published_article_by_path(&username, &slug).await?;
            print_one(&article, format)
        }
        ArticlesAction::Mine { filter, list } => {
            let query = list.query();
            let articles = match filter {
                MineFilter::All => api.user_articles(&query).await?,
                MineFilter::Published => api.user_published_articles(&query).await?,
                MineFilter::Unpublished => api.user_unpublished_articles(&query).await?,
            };
            print_list(&articles, format)
        }
        ArticlesAction::Create(fields) => {
            let (params, markdown) = fields.split();
            let article = api.create_article(params, &markdown).await?;
            if let OutputFormat::Text = format {
                println!("{} article {}", style("Created").green().bold(), article.id);
            }
            print_one(&article, format)
        }
        ArticlesAction::Update { id, fields } => {
            let (params, markdown) = fields.split();
            let article = api.update_article(id, params, &markdown).await?;
            if let OutputFormat::Text = format {
                println!("{} article {}", style("Updated").green().bold(), article.id);
            }
            print_one(&article, format)
        }
        ArticlesAction::Videos(args) => {
            let articles = api.articles_with_video(&args.query()).await?;
            print_list(&articles, format)
        }
    }
}

fn print_list(articles: &[Article], format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(articles),
        OutputFormat::Text => {
            if articles.is_empty() {
                println!("No articles found.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Title", "Author", "Tags", "Published", "Reactions"]);
            for a in articles {
                table.add_row(vec![
                    a.id.to_string(),
                    super::truncate(&a.title, 50),
                    a.user.username.clone(),
                    super::truncate(&a.tag_list.join(", "), 30),
                    super::short_date(a.published_at.as_deref()),
                    a.public_reactions_count.to_string(),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

fn print_one(article: &ArticleVariant, format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(article),
        OutputFormat::Text => {
            println!("{}", style(&article.title).bold());
            println!("  id:        {}", article.id);
            println!("  author:    {}", article.user.username);
            println!("  url:       {}", super::or_dash(Some(article.url.as_str())));
            println!("  tags:      {}", super::or_dash(Some(article.tags.join(", ").as_str())));
            println!("  published: {}", super::short_date(article.published_at.as_deref()));
            println!(
                "  reactions: {}  comments: {}",
                article.public_reactions_count, article.comments_count
            );
            if !article.body_markdown.is_empty() {
                println!();
                println!("{}", article.body_markdown);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_args() -> ListArgs {
        ListArgs {
            page: 1,
            per_page: 30,
            tag: None,
            tags: None,
            exclude: None,
            username: None,
            state: None,
            top: None,
            collection: None,
        }
    }

    #[test]
    fn test_list_args_to_query() {
        let args = ListArgs {
            tag: Some("rust".into()),
            state: Some(StateArg::Rising),
            ..list_args()
        };
        let query = args.query();
        assert_eq!(query.tag, "rust");
        assert_eq!(query.state, Some(ArticleState::Rising));
        assert_eq!(query.top, 0);
        assert!(query.username.is_empty());
    }

    #[test]
    fn test_write_args_split() {
        let args = WriteArgs {
            title: Some("Hello".into()),
            body: None,
            file: Some(PathBuf::from("post.md")),
            tags: Some("rust, cli".into()),
            series: None,
            description: None,
            canonical_url: None,
            main_image: None,
            organization_id: None,
            publish: true,
            unpublish: false,
        };
        let (params, markdown) = args.split();
        assert_eq!(params.title.as_deref(), Some("Hello"));
        assert_eq!(params.published, Some(true));
        assert_eq!(params.tags, Some(vec!["rust".to_string(), "cli".to_string()]));
        assert_eq!(markdown, MarkdownSource::FromFile(PathBuf::from("post.md")));
    }
}
