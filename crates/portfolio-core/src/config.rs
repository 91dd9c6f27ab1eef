//! Configuration types for portfolio.
//!
//! [`Config::load`] reads `~/.config/portfolio/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers
//! an explicit file over the defaults instead. [`Config::defaults`] returns
//! the defaults without touching the filesystem (useful in tests).

use crate::search::DEFAULT_SORT_BY;
use crate::sort::SortOrder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "data.json"

[server]
bind = "127.0.0.1:5000"

[search]
sort_by    = "start_date"
sort_order = "desc"

[logging]
level     = "info"
directory = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/portfolio/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[data]` section: where the project records live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("data.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[search]` section: defaults applied when a caller omits sort parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_sort_by() -> String { DEFAULT_SORT_BY.to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            sort_order: SortOrder::default(),
        }
    }
}

/// `[logging]` section. An empty `directory` logs to stderr.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub directory: String,
}

fn default_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Log directory, if file logging is enabled.
    pub fn directory(&self) -> Option<&Path> {
        let trimmed = self.directory.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/portfolio/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::layered(path.as_ref(), true)
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("portfolio")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
