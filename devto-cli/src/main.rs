//! DEV CLI - command-line client for the DEV (Forem) REST API.
//!
//! A thin front end over `devto-api`: every subcommand is one API call whose
//! decoded result is printed as a table or as JSON.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use devto_core::config::AppConfig;
use devto_core::error::DevResult;
use devto_core::logging;

/// devto - read and publish on DEV from the terminal.
#[derive(Parser)]
#[command(
    name = "devto",
    version,
    about = "DEV (dev.to) API client",
    long_about = "A command-line client for the DEV (Forem) REST API.\n\
                  The API key is read from the config file, the DEV_API_KEY environment variable \
                  or --api-key, in increasing order of precedence."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// API key (overrides config and environment).
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, create and update articles.
    Articles {
        #[command(subcommand)]
        action: commands::articles::ArticlesAction,
    },
    /// Read comment threads.
    Comments {
        #[command(subcommand)]
        action: commands::comments::CommentsAction,
    },
    /// Browse and create listings.
    Listings {
        #[command(subcommand)]
        action: commands::listings::ListingsAction,
    },
    /// Organization profiles, members, articles and listings.
    Orgs {
        #[command(subcommand)]
        action: commands::orgs::OrgsAction,
    },
    /// List published podcast episodes.
    Podcasts {
        #[arg(short, long, default_value = "1")]
        page: i32,
        #[arg(short = 'n', long, default_value = "30")]
        per_page: i32,
        /// Only episodes of this podcast.
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Show the profile image of a user or organization.
    ProfileImage {
        username: String,
    },
    /// List the tags you follow.
    Tags,
    /// User profiles, followers and your reading list.
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
    /// Manage webhooks.
    Webhooks {
        #[command(subcommand)]
        action: commands::webhooks::WebhooksAction,
    },
    /// Inspect or edit the config file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// `config set` may create the file named by `--config`, so only then may it be missing.
fn load_config(path: Option<&std::path::Path>, may_be_missing: bool) -> DevResult<AppConfig> {
    match path {
        Some(path) if may_be_missing && !path.exists() => {
            let mut config = AppConfig::default();
            config.apply_env();
            Ok(config)
        }
        Some(path) => {
            let mut config = AppConfig::load_from_file(path)?;
            config.apply_env();
            Ok(config)
        }
        None => AppConfig::load_default(),
    }
}

#[tokio::main]
async fn main() -> DevResult<()> {
    let cli = Cli::parse();

    let editing_config = matches!(cli.command, Commands::Config { .. });
    let config = load_config(cli.config.as_deref(), editing_config)?;

    let log_dir = config.effective_log_dir()?;
    let _guard = logging::init_logging(&config.logging, &log_dir, cli.verbose)?;

    debug!("devto CLI v{}", devto_core::constants::APP_VERSION);

    if let Commands::Config { action } = cli.command {
        let path = match cli.config {
            Some(path) => path,
            None => AppConfig::default_config_path()?,
        };
        return commands::config::run(&path, action, cli.format);
    }

    let api = commands::create_api_client(&config, cli.api_key.as_deref())?;
    debug!("Using API at {}", api.base_url());

    // Dispatch to command handlers
    match cli.command {
        Commands::Articles { action } => commands::articles::run(&api, action, cli.format).await,
        Commands::Comments { action } => commands::comments::run(&api, action, cli.format).await,
        Commands::Listings { action } => commands::listings::run(&api, action, cli.format).await,
        Commands::Orgs { action } => commands::orgs::run(&api, action, cli.format).await,
        Commands::Podcasts { page, per_page, username } => {
            commands::podcasts::run(&api, page, per_page, username, cli.format).await
        }
        Commands::ProfileImage { username } => {
            commands::profile_image::run(&api, &username, cli.format).await
        }
        Commands::Tags => commands::tags::run(&api, cli.format).await,
        Commands::Users { action } => commands::users::run(&api, action, cli.format).await,
        Commands::Webhooks { action } => commands::webhooks::run(&api, action, cli.format).await,
        Commands::Config { .. } => Ok(()),
    }
}
