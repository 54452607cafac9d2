//! User settings file discovery and parsing
//!
//! Settings only supply defaults; command-line flags always win.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV: &str = "SCAFFOLD_CONFIG";

/// File name looked up in the platform config directory
const CONFIG_FILE_NAME: &str = "config.yml";

/// Defaults read from `config.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Template used when `--template` is not given
    #[serde(default)]
    pub template: Option<String>,

    /// Initialize git without asking
    #[serde(default)]
    pub git: bool,

    /// Install dependencies without `--install`
    #[serde(default)]
    pub install: bool,

    /// Directory holding one subdirectory per template
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from YAML text
    pub fn parse(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a settings file that must exist
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    /// Load from an explicit path, `SCAFFOLD_CONFIG`, or the platform config dir
    ///
    /// Explicit paths must exist; the platform file is optional.
    pub fn discover(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Settings::default()),
        }
    }
}

/// `<platform config dir>/config.yml`, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "scaffold").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
