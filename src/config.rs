//! Configuration management for Beantheory using the prefer crate.

use std::path::{Path, PathBuf};

use prefer::FromValue;
use serde::{Deserialize, Serialize};

/// Default HTTP bind port.
pub const DEFAULT_PORT: u16 = 37777;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Public host the site is served under. Plain-HTTP requests for it
    /// are redirected to https, and only it gets the real robots.txt.
    pub canonical_host: String,
    /// Directory holding static files served at the root (favicon.ico,
    /// robots.txt) and under /static.
    pub static_dir: PathBuf,
    /// Debug mode: disables stylesheet caching.
    pub debug: bool,
    /// Connection metadata for the backing database.
    pub db: DbSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canonical_host: "beantheory.org".to_string(),
            static_dir: PathBuf::from("static"),
            debug: false,
            db: DbSettings::default(),
        }
    }
}

/// Connection metadata for the backing database.
///
/// The front end never runs queries itself; these values drive the
/// liveness probe and the info page.
#[derive(Debug, Clone, Serialize, Deserialize, FromValue)]
pub struct DbSettings {
    /// Database server host.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Database name.
    pub name: String,
    /// Connecting user.
    pub user: String,
    /// Whether the connection is read-only.
    #[serde(default)]
    pub read_only: bool,
    /// Whether the connection may write to the user database.
    #[serde(default)]
    pub read_and_write_userdb: bool,
    /// Whether the connection may write to the knowls database.
    #[serde(default)]
    pub read_and_write_knowls: bool,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "beantheory".to_string(),
            user: "beantheory".to_string(),
            read_only: true,
            read_and_write_userdb: false,
            read_and_write_knowls: false,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Canonical public host.
    #[serde(default)]
    pub canonical_host: Option<String>,
    /// Static file directory.
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Debug mode.
    #[serde(default)]
    pub debug: Option<bool>,
    /// Database connection metadata.
    #[serde(default)]
    pub db: Option<DbSettings>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers beantheory config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("beantheory").await {
            Ok(pref_config) => {
                let canonical_host: Option<String> =
                    pref_config.get("canonical_host").ok();
                let static_dir: Option<String> = pref_config.get("static_dir").ok();
                let debug: Option<bool> = pref_config.get("debug").ok();
                let db: Option<DbSettings> = pref_config.get("db").ok();

                Config {
                    canonical_host,
                    static_dir,
                    debug,
                    db,
                }
            }
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Load an explicit configuration file instead of discovering one.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref host) = self.canonical_host {
            settings.canonical_host = host.clone();
        }
        if let Some(ref dir) = self.static_dir {
            let path = shellexpand::tilde(dir);
            settings.static_dir = PathBuf::from(path.as_ref());
        }
        if let Some(debug) = self.debug {
            settings.debug = debug;
        }
        if let Some(ref db) = self.db {
            settings.db = db.clone();
        }
    }
}

/// Load settings from configuration (async version).
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}
