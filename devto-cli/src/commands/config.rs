//! Config file commands. These never touch the network.

use std::path::Path;

use clap::Subcommand;
use console::style;

use devto_core::config::AppConfig;
use devto_core::error::{DevError, DevResult};

use crate::OutputFormat;

/// Keys accepted by `get` and `set`.
const KEYS: &[&str] = &[
    "api.api_key",
    "api.base_url",
    "api.api_timeout_ms",
    "logging.level",
    "logging.directory",
    "logging.json_output",
];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location.
    Path,
    /// Show every setting (the API key is masked).
    Show,
    /// Print one setting.
    Get {
        /// Key path, e.g. "api.base_url".
        key: String,
    },
    /// Change one setting and save the file.
    Set {
        /// Key path, e.g. "logging.level".
        key: String,
        value: String,
    },
}

fn get_value(cfg: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api.api_key" => Some(mask(&cfg.api.api_key)),
        "api.base_url" => Some(cfg.api.base_url.clone()),
        "api.api_timeout_ms" => Some(cfg.api.api_timeout_ms.to_string()),
        "logging.level" => Some(cfg.logging.level.clone()),
        "logging.directory" => Some(cfg.logging.directory.clone()),
        "logging.json_output" => Some(cfg.logging.json_output.to_string()),
        _ => None,
    }
}

fn set_value(cfg: &mut AppConfig, key: &str, value: &str) -> DevResult<()> {
    let value = value.trim();
    match key {
        "api.api_key" => cfg.api.api_key = value.to_string(),
        "api.base_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(DevError::Validation(format!("base URL must be http(s): {value}")));
            }
            cfg.api.base_url = value.trim_end_matches('/').to_string();
        }
        "api.api_timeout_ms" => {
            cfg.api.api_timeout_ms = value
                .parse()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| DevError::Validation(format!("timeout must be a positive integer: {value}")))?;
        }
        "logging.level" => cfg.logging.level = value.to_string(),
        "logging.directory" => cfg.logging.directory = value.to_string(),
        "logging.json_output" => {
            cfg.logging.json_output = value
                .parse()
                .map_err(|_| DevError::Validation(format!("expected true or false: {value}")))?;
        }
        _ => {
            return Err(DevError::Validation(format!(
                "unknown key {key:?}, expected one of: {}",
                KEYS.join(", ")
            )))
        }
    }
    Ok(())
}

fn mask(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

/// The file as written on disk, without environment overrides.
fn load_file(path: &Path) -> DevResult<AppConfig> {
    if path.exists() {
        AppConfig::load_from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn run(path: &Path, action: ConfigAction, format: OutputFormat) -> DevResult<()> {
    match action {
        ConfigAction::Path => match format {
            OutputFormat::Json => super::print_json(&serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            })),
            OutputFormat::Text => {
                println!("{}", path.display());
                Ok(())
            }
        },
        ConfigAction::Show => {
            let cfg = load_file(path)?;
            match format {
                OutputFormat::Json => {
                    let values: serde_json::Map<String, serde_json::Value> = KEYS
                        .iter()
                        .filter_map(|k| get_value(&cfg, k).map(|v| (k.to_string(), v.into())))
                        .collect();
                    super::print_json(&values)
                }
                OutputFormat::Text => {
                    let mut table = super::new_table(vec!["Key", "Value"]);
                    for key in KEYS {
                        let value = get_value(&cfg, key).unwrap_or_default();
                        table.add_row(vec![key.to_string(), super::or_dash(Some(value.as_str()))]);
                    }
                    println!("{table}");
                    Ok(())
                }
            }
        }
        ConfigAction::Get { key } => {
            let cfg = load_file(path)?;
            let value = get_value(&cfg, &key)
                .ok_or_else(|| DevError::Validation(format!("unknown key {key:?}")))?;
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({ "key": key, "value": value })),
                OutputFormat::Text => {
                    println!("{value}");
                    Ok(())
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = load_file(path)?;
            set_value(&mut cfg, &key, &value)?;
            cfg.save_to_file(path)?;

            let shown = get_value(&cfg, &key).unwrap_or_default();
            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({
                    "key": key,
                    "value": shown,
                    "saved": true,
                })),
                OutputFormat::Text => {
                    println!("{} {} = {}", style("SET").green().bold(), key, shown);
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_reads_back() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_value(&cfg, key).is_some(), "{key}");
        }
        assert!(get_value(&cfg, "api.nope").is_none());
    }

    #[test]
    fn test_set_validates() {
        let mut cfg = AppConfig::default();
        set_value(&mut cfg, "api.base_url", "http://localhost:3000/api/").unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:3000/api");

        assert!(set_value(&mut cfg, "api.base_url", "localhost").is_err());
        assert!(set_value(&mut cfg, "api.api_timeout_ms", "0").is_err());
        assert!(set_value(&mut cfg, "logging.json_output", "yes").is_err());
        assert!(matches!(
            set_value(&mut cfg, "api.key", "x"),
            Err(DevError::Validation(_))
        ));
    }

    #[test]
    fn test_key_is_masked() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_value(&cfg, "api.api_key").unwrap(), "");
        set_value(&mut cfg, "api.api_key", " abc123 ").unwrap();
        assert_eq!(cfg.api.api_key, "abc123");
        assert_eq!(get_value(&cfg, "api.api_key").unwrap(), "********");
    }

    #[test]
    fn test_set_saves_without_env_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("devto").join("config.toml");

        run(
            &path,
            ConfigAction::Set { key: "api.api_timeout_ms".into(), value: "5000".into() },
            OutputFormat::Json,
        )
        .unwrap();
        run(
            &path,
            ConfigAction::Set { key: "api.api_key".into(), value: "k".into() },
            OutputFormat::Text,
        )
        .unwrap();

        let saved = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(saved.api.api_timeout_ms, 5000);
        assert_eq!(saved.api.api_key, "k");
        assert_eq!(saved.api.base_url, "https://dev.to/api");
    }
}
