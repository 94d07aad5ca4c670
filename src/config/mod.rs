//! Configuration management for treesweep
//!
//! A run is described by a single [`Settings`] value built once before the
//! walk starts. Values are layered with figment: embedded defaults, then a
//! TOML file, then `TREESWEEP_*` environment variables, then the flags that
//! were given on the command line.

use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};


// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Config file picked up from the working directory when `--config` is not given
pub const REPO_CONFIG: &str = "treesweep.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "TREESWEEP_";

/// Immutable parameters of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the walk starts from
    pub root: PathBuf,

    /// Extension filter including the leading dot; empty matches everything
    #[serde(default)]
    pub ext: String,

    /// Minimum file size in bytes; files smaller than this are skipped
    #[serde(default)]
    pub size: u64,

    /// List matched files only, even if other actions are configured
    #[serde(default)]
    pub list: bool,

    /// Delete matched files
    #[serde(default)]
    pub delete: bool,

    /// File the deletion log is appended to (stdout when absent)
    #[serde(default)]
    pub log: Option<PathBuf>,

    /// Directory compressed copies are written under
    #[serde(default)]
    pub archive: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ext: String::new(),
            size: 0,
            list: false,
            delete: false,
            log: None,
            archive: None,
        }
    }
}

/// Values given explicitly on the command line. Unset fields leave the
/// lower layers untouched.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
}

impl Settings {
    /// Merge all configuration layers into a `Settings`.
    ///
    /// An explicit `config_file` must exist; the implicit `treesweep.toml` is
    /// optional.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        figment = match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(REPO_CONFIG)),
        };

        // Environment variables override files, flags override everything
        figment = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        let settings: Settings = figment
            .extract()
            .context("Failed to load configuration")?;

        tracing::debug!(?settings, "configuration loaded");
        Ok(settings)
    }

    /// Archive destination, treating an empty path as not configured.
    pub fn archive_dir(&self) -> Option<&Path> {
        self.archive
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Deletion log file, treating an empty path as not configured.
    pub fn log_file(&self) -> Option<&Path> {
        self.log.as_deref().filter(|file| !file.as_os_str().is_empty())
    }
}
