/// Server configuration
///
/// Each section is read from the matching table of an optional TOML file and
/// then overridden by environment variables: `API_*` for the listener and
/// `DB_*` for the database (`DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`,
/// `DB_PASSWORD`, `DB_SSL_MODE`, ...).
use anyhow::{bail, Context, Result};
use roster_storage::DatabaseConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

const SSL_MODES: &[&str] = &[
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from the given file (if present) and environment
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            server: load_section(path, "server", "API")?,
            database: load_section(path, "database", "DB")?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let db = &self.database;

        if db.host.is_empty() {
            bail!("Database host is required (set DB_HOST)");
        }
        if db.name.is_empty() {
            bail!("Database name is required (set DB_NAME)");
        }
        if db.user.is_empty() {
            bail!("Database user is required (set DB_USER)");
        }
        if !SSL_MODES.contains(&db.ssl_mode.as_str()) {
            bail!(
                "Unknown DB_SSL_MODE '{}', expected one of {:?}",
                db.ssl_mode,
                SSL_MODES
            );
        }
        if db.max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }
}

fn load_section<T: DeserializeOwned>(path: &Path, table: &str, env_prefix: &str) -> Result<T> {
    let mut settings = config::Config::builder();

    if path.exists() {
        let file = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if let Ok(values) = file.get_table(table) {
            for (key, value) in values {
                settings = settings.set_default(key.as_str(), value)?;
            }
        }
    }

    settings = settings.add_source(
        config::Environment::with_prefix(env_prefix).prefix_separator("_"),
    );

    settings
        .build()?
        .try_deserialize()
        .with_context(|| format!("Invalid [{}] configuration", table))
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
