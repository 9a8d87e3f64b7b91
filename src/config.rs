use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::filter::SearchMode;
use crate::error::ConfigError;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "firms-finder.json";

pub const ENV_DATA_PATH: &str = "FIRMS_DATA_PATH";
pub const ENV_CASE_SENSITIVE: &str = "FIRMS_CASE_SENSITIVE";

/// Startup settings. Every field is optional in the JSON file.
///
/// ```json
/// { "data_path": "data/firms_codes.csv", "case_sensitive": false, "default_mode": "general" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV loaded automatically at startup and by File → Reload.
    pub data_path: PathBuf,
    pub case_sensitive: bool,
    pub default_mode: SearchMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/firms_codes.csv"),
            case_sensitive: false,
            default_mode: SearchMode::General,
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read [`CONFIG_FILE`] from `dir` if it exists, then apply environment
    /// overrides. Never fails: an unreadable or malformed file is logged and
    /// replaced by defaults, and a bad variable is logged and skipped.
    pub fn load_from_dir(dir: &Path) -> Self {
        Self::load_from_dir_with(dir, |var| std::env::var(var).ok())
    }

    /// [`AppConfig::load_from_dir`] with variables read through `lookup`.
    pub fn load_from_dir_with<F>(dir: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            log::debug!("reading config from {}", path.display());
            Self::from_file(&path).unwrap_or_else(|e| {
                log::error!("{e}; using default settings");
                Self::default()
            })
        } else {
            Self::default()
        };
        for e in config.apply_env(lookup) {
            log::warn!("{e}; ignored");
        }
        config
    }

    /// Apply `FIRMS_DATA_PATH` / `FIRMS_CASE_SENSITIVE` overrides, reading
    /// variables through `lookup`. Each variable is applied on its own; the
    /// ones that could not be parsed are returned and leave their setting as is.
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|p| !p.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_CASE_SENSITIVE) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.case_sensitive = true,
                "0" | "false" | "no" | "off" | "" => self.case_sensitive = false,
                _ => rejected.push(ConfigError::Env {
                    var: ENV_CASE_SENSITIVE,
                    value,
                }),
            }
        }
        rejected
    }
}
