//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::PlayConfig;
use crate::{Error, Result};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "TTTREE_CONFIG";

/// File looked up in the current directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "tttree.toml";

/// Resolve the run configuration.
///
/// Searches in the following order:
/// 1. `explicit`, when given (a missing or malformed file is an error)
/// 2. Path in the `TTTREE_CONFIG` environment variable
/// 3. `tttree.toml` in the current directory
/// 4. Built-in defaults
///
/// `TTTREE_*` environment overrides are applied on top, then the result is
/// validated.
pub fn load_config(explicit: Option<&Path>) -> Result<PlayConfig> {
    let base = match explicit {
        Some(path) => {
            info!("Loading config from {}", path.display());
            load_from_path(path)?
        }
        None => search_default_locations()?,
    };

    let config = apply_env_overrides(base);
    config.validate()?;
    Ok(config)
}

fn search_default_locations() -> Result<PlayConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {CONFIG_ENV_VAR}: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "{CONFIG_ENV_VAR}={} not found, searching defaults",
            path.display()
        );
    }

    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() {
        info!("Loading config from {}", path.display());
        return load_from_path(&path);
    }

    debug!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
    Ok(PlayConfig::default())
}

/// Load configuration from a specific TOML file, without overrides.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::ConfigParse`] if it is not a valid config.
pub fn load_from_path(path: &Path) -> Result<PlayConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read config {}", path.display()),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Apply `TTTREE_*` overrides from the process environment.
pub fn apply_env_overrides(config: PlayConfig) -> PlayConfig {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Macro to reduce override boilerplate
macro_rules! override_field {
    // String field
    ($config:expr, $lookup:expr, $field:ident, $key:expr) => {
        if let Some(v) = $lookup($key) {
            $config.$field = v;
        }
    };
    // Parseable field; unparseable values are ignored with a warning
    ($config:expr, $lookup:expr, $field:ident, $key:expr, parse) => {
        if let Some(v) = $lookup($key) {
            match v.parse() {
                Ok(parsed) => $config.$field = parsed,
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, v),
            }
        }
    };
    // Optional parseable field
    ($config:expr, $lookup:expr, $field:ident, $key:expr, optional_parse) => {
        if let Some(v) = $lookup($key) {
            match v.parse() {
                Ok(parsed) => $config.$field = Some(parsed),
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, v),
            }
        }
    };
}

/// Apply overrides read through `lookup` instead of the process environment.
///
/// Keys: `TTTREE_AI_MARK`, `TTTREE_SEED`, `TTTREE_GAMES`, `TTTREE_LOG_LEVEL`.
pub fn apply_overrides_from<L>(mut config: PlayConfig, lookup: L) -> PlayConfig
where
    L: Fn(&str) -> Option<String>,
{
    override_field!(config, lookup, ai_mark, "TTTREE_AI_MARK", parse);
    override_field!(config, lookup, seed, "TTTREE_SEED", optional_parse);
    override_field!(config, lookup, games, "TTTREE_GAMES", parse);
    override_field!(config, lookup, log_level, "TTTREE_LOG_LEVEL");
    config
}
