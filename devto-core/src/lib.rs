//! DEV Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other crates in the
//! workspace:
//! - Client configuration (API key, base URL, timeout, logging)
//! - The unified error type covering every failure a request can produce
//! - Structured logging with tracing
//! - Per-user directory lookup and common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{DevError, DevResult};
pub use logging::{init_logging, LogGuard};
