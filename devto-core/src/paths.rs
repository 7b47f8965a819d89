//! Per-user directories for the `devto` app.
//!
//! - config: `%APPDATA%\devto`, `~/Library/Application Support/devto`, `~/.config/devto`
//! - data (logs): `%APPDATA%\devto`, `~/Library/Application Support/devto`, `~/.local/share/devto`

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{DevError, DevResult};

/// Directory holding `config.toml`.
pub fn config_dir() -> DevResult<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or_else(|| DevError::Config("could not determine config directory".into()))
}

/// Directory holding the `logs/` folder.
pub fn data_dir() -> DevResult<PathBuf> {
    dirs::data_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or_else(|| DevError::Config("could not determine data directory".into()))
}
