/// Web server configuration, read from `WEB_*` environment variables
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built client and its `index.html`
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl WebConfig {
    /// Load configuration from the environment (`WEB_HOST`, `WEB_PORT`, `WEB_ROOT`)
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("WEB").prefix_separator("_"),
            )
            .build()?
            .try_deserialize()
            .context("Invalid web server configuration")
    }

    /// Whether the root directory has an entry document to fall back to
    pub fn has_index(&self) -> bool {
        self.root.join("index.html").is_file()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_root() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root: default_root(),
        }
    }
}
