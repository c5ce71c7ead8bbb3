use std::path::PathBuf;

use serde::Deserialize;

use crate::card::CardOptions;

/// Output file used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_PATH: &str = "github-streak.svg";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Contents of `streak-card.toml`. Every key is optional and unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub login whose calendar is fetched.
    pub user: Option<String>,
    /// Where the rendered SVG is written.
    pub output: Option<PathBuf>,
    pub github: GitHubConfig,
    pub card: CardOptions,
}

impl AppConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

// ---------------------------------------------------------------------------
// GitHub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API root for GitHub Enterprise, e.g. `https://ghe.example.com/api`.
    pub api_url: Option<String>,
}
