use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::AppConfig;

const CONFIG_ENV: &str = "STREAK_CARD_CONFIG";
const LOCAL_FILE: &str = "streak-card.toml";
const APP_DIR: &str = "streak-card";

/// Places searched for a config file when no explicit path is given.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    /// Value of `$STREAK_CARD_CONFIG`.
    pub env_path: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl SearchPaths {
    pub fn from_env() -> Self {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            env_path: std::env::var(CONFIG_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| expand_tilde(&v)),
            cwd: std::env::current_dir().ok(),
            xdg_config_home: var("XDG_CONFIG_HOME"),
            home: dirs_fallback(),
        }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        [
            self.env_path.clone(),
            self.cwd.as_ref().map(|d| d.join(LOCAL_FILE)),
            self.xdg_config_home
                .as_ref()
                .map(|d| d.join(APP_DIR).join("config.toml")),
            self.home
                .as_ref()
                .map(|d| d.join(".config").join(APP_DIR).join("config.toml")),
        ]
        .into_iter()
        .flatten()
    }
}

/// Discover and load the app config.
///
/// Priority:
/// 1. `--config` flag (explicit path)
/// 2. `$STREAK_CARD_CONFIG` environment variable
/// 3. `streak-card.toml` in the current directory
/// 4. `$XDG_CONFIG_HOME/streak-card/config.toml`
/// 5. `~/.config/streak-card/config.toml`
///
/// An explicit path must exist. With nothing found, defaults are used.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    load_config_from(explicit_path, &SearchPaths::from_env())
}

/// [`load_config`] against an explicit set of search locations.
pub fn load_config_from(explicit_path: Option<&Path>, search: &SearchPaths) -> Result<AppConfig> {
    if let Some(path) = explicit_path {
        return read_config(path);
    }

    match discover(search) {
        Some(path) => read_config(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// First existing config file among `search`'s candidates.
pub fn discover(search: &SearchPaths) -> Option<PathBuf> {
    search.candidates().find(|p| p.is_file())
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML from {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn dirs_fallback() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_fallback()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
