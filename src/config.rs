use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::format::UnitFormatter;
use crate::model::{DEFAULT_DECIMALS, Mode};

/// Defaults applied when the command line does not say otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Precision for grams and meters.
    pub decimals: i32,
    /// Divide byte counts by 1024 instead of 1000.
    pub binary: bool,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { decimals: DEFAULT_DECIMALS, binary: true, strict: false }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            debug!(path = %path.display(), "loading configuration");
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(&path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        Mode::from_strict(self.strict)
    }

    pub fn formatter(&self) -> UnitFormatter {
        UnitFormatter::with_mode(self.mode())
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("unitfmt").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        Config::default().save()?;
    }
    Ok(path)
}
