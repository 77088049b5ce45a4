//! Config file discovery

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".kwiz-kid.toml";
const PLATFORM_CONFIG_FILE: &str = "config.toml";

/// Places searched for a config file, most specific first:
/// 1. `.kwiz-kid.toml` in the current working directory
/// 2. `~/.kwiz-kid.toml`
/// 3. `config.toml` in the platform config directory
///
/// Listing touches nothing on disk.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(dirs::home_dir().map(|home| home.join(CONFIG_FILE)));
    match crate::config_dir() {
        Ok(dir) => candidates.push(dir.join(PLATFORM_CONFIG_FILE)),
        Err(e) => log::debug!("No platform config directory: {:#}", e),
    }
    candidates
}

/// Content of the first readable candidate, if any
pub fn load_config_file() -> Option<String> {
    first_readable(&config_candidates())
}

fn first_readable(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}
