use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::AtendeConfig;

/// Standard config file name.
const CONFIG_FILENAME: &str = "atende.toml";

/// Load config from the given TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<AtendeConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./atende.toml` (project-local)
/// 2. `~/.config/atende/atende.toml` (user-global)
///
/// Returns `AtendeConfig::default()` if no config file is found.
pub fn discover_and_load() -> AtendeConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    AtendeConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(dir) = config_dir() {
        let p = dir.join(CONFIG_FILENAME);
        if p.exists() {
            return Some(p);
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/atende/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "atende").map(|d| d.config_dir().to_path_buf())
}

/// Returns the path of an existing config file, or the default TOML path.
pub fn find_or_default_config_path() -> PathBuf {
    if let Some(path) = find_config_file() {
        return path;
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILENAME)
}

/// Serialize `config` to TOML and write it to `path`.
///
/// Creates parent directories if needed.
pub fn save_config_to(path: &Path, config: &AtendeConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("serialize config: {e}"))?;
    std::fs::write(path, toml_str)?;
    debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Write `config` to the discovered (or default user-global) config path.
///
/// Returns the path written to.
pub fn save_config(config: &AtendeConfig) -> anyhow::Result<PathBuf> {
    let path = find_or_default_config_path();
    save_config_to(&path, config)?;
    Ok(path)
}
