//! CLI command implementations.

pub mod articles;
pub mod comments;
pub mod config;
pub mod listings;
pub mod orgs;
pub mod podcasts;
pub mod profile_image;
pub mod tags;
pub mod users;
pub mod webhooks;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tracing::warn;

use devto_api::ApiClient;
use devto_core::config::AppConfig;
use devto_core::error::{DevError, DevResult};

/// Helper to create an API client from config, with an optional key override.
pub fn create_api_client(config: &AppConfig, api_key: Option<&str>) -> DevResult<ApiClient> {
    let mut api = config.api.clone();
    match api_key {
        Some(key) => api.api_key = key.to_string(),
        None if !config.has_api_key() => {
            warn!("No API key configured; set DEV_API_KEY or pass --api-key");
        }
        None => {}
    }
    ApiClient::from_config(&api)
}

/// Pretty-print any decoded value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> DevResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| DevError::Serialization(e.to_string()))?;
    println!("{text}");
    Ok(())
}

/// A table with the CLI's standard look.
pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Truncate a string to a maximum number of characters, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Show `-` for missing or empty values.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Date part of a `YYYY-MM-DDTHH:MM:SSZ` timestamp.
pub fn short_date(ts: Option<&str>) -> String {
    match ts {
        Some(ts) if ts.len() >= 10 && ts.is_char_boundary(10) => ts[..10].to_string(),
        other => or_dash(other),
    }
}

/// Split a comma-separated CLI value into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("héllo wörld", 5), "hé...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("Berlin")), "Berlin");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(Some("2024-05-01T10:00:00Z")), "2024-05-01");
        assert_eq!(short_date(Some("today")), "today");
        assert_eq!(short_date(None), "-");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("rust, api ,,cli"), vec!["rust", "api", "cli"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_api_key_override() {
        let config = AppConfig::default();
        assert!(matches!(
            create_api_client(&config, None),
            Err(DevError::InvalidCredential)
        ));
        let client = create_api_client(&config, Some("cli-key")).unwrap();
        assert_eq!(client.base_url(), "https://dev.to/api");
    }
}
