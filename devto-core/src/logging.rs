//! Tracing subscriber setup for the CLI.
//!
//! Events go to stderr in compact form and to a daily `devto.log.*` file,
//! either plain text or one JSON object per line.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_PREFIX, QUIET_LOG_TARGETS};
use crate::error::{DevError, DevResult};

/// Keeps the background file writer alive. Dropping it flushes the log file.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`; `verbose` forces `debug`. An
/// unparsable level falls back to `info` and is reported once logging is up.
/// Fails with `Config` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig, log_dir: &Path, verbose: bool) -> DevResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let level = match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() && !verbose => env,
        _ if verbose => "debug".to_string(),
        _ => config.level.clone(),
    };
    let directives = filter_directives(&level);
    let (filter, rejected) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(filter_directives("info")), Some(e)),
    };

    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX));

    let json_file = config.json_output.then(|| {
        fmt::layer()
            .json()
            .with_writer(writer.clone())
            .with_current_span(false)
    });
    let plain_file = (!config.json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_line_number(true)
    });
    let console = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(json_file)
        .with(plain_file)
        .with(console)
        .try_init()
        .map_err(|e| DevError::Config(format!("logging already initialized: {e}")))?;

    if let Some(e) = rejected {
        tracing::warn!(level = %level, "invalid log filter, using info: {e}");
    }
    tracing::debug!(filter = %directives, dir = %log_dir.display(), "logging ready");

    Ok(LogGuard { _worker: worker })
}

/// Expand a level or directive list so the HTTP stack stays at `warn`
/// unless the caller names one of its crates.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    let mut out = if level.is_empty() { "info".to_string() } else { level.to_string() };

    let named: Vec<&str> = out
        .split(',')
        .filter_map(|d| d.split_once('=').map(|(target, _)| target.trim()))
        .collect();
    let missing: Vec<&str> = QUIET_LOG_TARGETS
        .iter()
        .copied()
        .filter(|target| !named.contains(target))
        .collect();

    for target in missing {
        out.push_str(&format!(",{target}=warn"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_level_gets_quiet_targets() {
        assert_eq!(
            filter_directives("debug"),
            "debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn"
        );
    }

    #[test]
    fn test_empty_level_means_info() {
        assert!(filter_directives("  ").starts_with("info,hyper=warn"));
    }

    #[test]
    fn test_named_target_is_left_alone() {
        let out = filter_directives("info,reqwest=trace");
        assert!(out.contains("reqwest=trace"));
        assert!(!out.contains("reqwest=warn"));
        assert!(out.contains("hyper=warn"));
        assert!(out.contains("hyper_util=warn"));
    }

    #[test]
    fn test_prefix_target_does_not_shadow() {
        let out = filter_directives("hyper_util=debug");
        assert!(out.contains(",hyper=warn"));
        assert!(!out.contains("hyper_util=warn"));
    }

    #[test]
    fn test_expanded_directives_parse() {
        for level in ["trace", "warn", "devto_api=debug", "info,rustls=error"] {
            assert!(EnvFilter::try_new(filter_directives(level)).is_ok(), "{level}");
        }
    }
}
