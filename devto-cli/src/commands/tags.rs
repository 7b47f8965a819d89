//! Followed tags command.

use devto_api::ApiClient;
use devto_core::error::DevResult;

use crate::OutputFormat;

pub async fn run(api: &ApiClient, format: OutputFormat) -> DevResult<()> {
    let mut tags = api.followed_tags().await?;
    // Heaviest follows first.
    tags.sort_by(|a, b| b.points.total_cmp(&a.points));

    match format {
        OutputFormat::Json => super::print_json(&tags),
        OutputFormat::Text => {
            if tags.is_empty() {
                println!("You do not follow any tags.");
                return Ok(());
            }
            let mut table = super::new_table(vec!["ID", "Tag", "Weight"]);
            for t in &tags {
                table.add_row(vec![t.id.to_string(), t.name.clone(), format!("{:.1}", t.points)]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
