//! Webhook commands.

use clap::Subcommand;
use console::style;

use devto_api::endpoints::webhooks::WebhookParams;
use devto_api::ApiClient;
use devto_core::error::{DevError, DevResult};
use devto_models::Webhook;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum WebhooksAction {
    /// List your webhooks.
    List,
    /// Show a webhook by id.
    Get {
        id: i64,
    },
    /// Register a webhook.
    Create {
        /// Endpoint receiving the events.
        #[arg(long)]
        target_url: String,
        /// Comma-separated events, e.g. "article_created,article_updated".
        #[arg(long)]
        events: String,
        /// Name of the integration.
        #[arg(long, default_value = "DEV")]
        source: String,
    },
    /// Delete a webhook.
    Delete {
        id: i64,
    },
}

pub async fn run(api: &ApiClient, action: WebhooksAction, format: OutputFormat) -> DevResult<()> {
    match action {
        WebhooksAction::List => {
            let hooks = api.webhooks().await?;
            match format {
                OutputFormat::Json => super::print_json(&hooks),
                OutputFormat::Text => {
                    if hooks.is_empty() {
                        println!("No webhooks registered.");
                        return Ok(());
                    }
                    let mut table = super::new_table(vec!["ID", "Source", "Target", "Events", "Created"]);
                    for h in &hooks {
                        table.add_row(vec![
                            h.id.to_string(),
                            h.source.clone(),
                            super::truncate(&h.target_url, 40),
                            h.events.join(", "),
                            super::short_date(Some(h.created_at.as_str())),
                        ]);
                    }
                    println!("{table}");
                    Ok(())
                }
            }
        }
        WebhooksAction::Get { id } => print_one(&api.webhook_by_id(id).await?, format),
        WebhooksAction::Create { target_url, events, source } => {
            let events = super::split_list(&events);
            if events.is_empty() {
                return Err(DevError::Validation("at least one event is required".into()));
            }
            let params = WebhookParams { source, target_url, events };
            let hook = api.create_webhook(&params).await?;
            if let OutputFormat::Text = format {
                println!("{} webhook {}", style("Created").green().bold(), hook.id);
            }
            print_one(&hook, format)
        }
        WebhooksAction::Delete { id } => {
            api.delete_webhook(id).await?;
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({ "deleted": id })),
                OutputFormat::Text => {
                    println!("{} webhook {}", style("Deleted").green().bold(), id);
                    Ok(())
                }
            }
        }
    }
}

fn print_one(hook: &Webhook, format: OutputFormat) -> DevResult<()> {
    match format {
        OutputFormat::Json => super::print_json(hook),
        OutputFormat::Text => {
            println!("{} {}", style("Webhook").bold(), hook.id);
            println!("  source:  {}", hook.source);
            println!("  target:  {}", hook.target_url);
            println!("  events:  {}", hook.events.join(", "));
            println!("  created: {}", super::or_dash(Some(hook.created_at.as_str())));
            Ok(())
        }
    }
}
