//! Profile image command.

use devto_api::ApiClient;
use devto_core::error::DevResult;

use crate::OutputFormat;

pub async fn run(api: &ApiClient, username: &str, format: OutputFormat) -> DevResult<()> {
    let image = api.profile_image(username).await?;
    match format {
        OutputFormat::Json => super::print_json(&image),
        OutputFormat::Text => {
            println!("{} ({})", username, super::or_dash(Some(image.image_of.as_str())));
            println!("  640px: {}", image.profile_image);
            println!("   90px: {}", image.profile_image_90);
            Ok(())
        }
    }
}
