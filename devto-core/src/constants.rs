//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "devto";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the DEV REST API. Every request path is appended to this verbatim.
pub const BASE_URL: &str = "https://dev.to/api";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "api-key";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DEV_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "DEV_API_BASE_URL";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Wire format of publish and comment timestamps (UTC, whole seconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Prefix of the daily log files (`devto.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "devto.log";

/// HTTP stack crates held at `warn` unless a directive names them.
pub const QUIET_LOG_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Path suffixes (after a dot, case-sensitive) accepted by the markdown loader.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];
