//! Configuration loading
//!
//! Optional TOML file at `{config_dir}/markplan/config.toml`. Every field
//! has a default, so a missing or invalid file just means defaults. The
//! API credential is environment-supplied and never read from here.

mod types;

pub use types::{ClipboardBackend, Config, GenerationConfig};

use std::path::{Path, PathBuf};

/// Load configuration, falling back to defaults
pub fn load() -> Config {
    config_path()
        .and_then(|path| load_from_path(&path))
        .unwrap_or_default()
}

/// Platform config file location
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("markplan").join("config.toml"))
}

/// Parse a config file, returning None when it is missing or invalid
fn load_from_path(path: &Path) -> Option<Config> {
    let contents = std::fs::read_to_string(path).ok()?;

    match toml::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring invalid config at {}: {}", path.display(), e);
            None
        }
    }
}
