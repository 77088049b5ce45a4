//! Configuration and data directory paths
//!
//! Uses platform directories via `dirs` crate.
//!
//! - Linux: `~/.config/kwiz-kid/`, `~/.cache/kwiz-kid/`
//! - macOS: `~/Library/Application Support/kwiz-kid/`, `~/Library/Caches/kwiz-kid/`
//! - Windows: `%APPDATA%\kwiz-kid\`, `%LOCALAPPDATA%\kwiz-kid\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "kwiz-kid";

/// Get the application config directory
///
/// Only the path is resolved; the directory may not exist.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}
