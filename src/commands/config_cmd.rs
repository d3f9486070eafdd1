use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::utils::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub decimals: Option<i32>,
    pub binary: Option<bool>,
    pub strict: Option<bool>,
}

impl ConfigOptions {
    fn has_updates(&self) -> bool {
        self.decimals.is_some() || self.binary.is_some() || self.strict.is_some()
    }
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.show_path {
        let path = config_file_path()?;
        println!("Configuration file: {}", display_path(&path));
    }

    if options.has_updates() {
        let mut config = Config::load()?;
        if let Some(decimals) = options.decimals {
            config.decimals = decimals;
        }
        if let Some(binary) = options.binary {
            config.binary = binary;
        }
        if let Some(strict) = options.strict {
            config.strict = strict;
        }
        config.save()?;
        info!(?config, "configuration updated");
        print_config(&config);
    }

    if options.edit {
        let path = ensure_config_file()?;
        open_editor(&path)?;
    }

    if !options.show_path && !options.has_updates() && !options.edit {
        let path = config_file_path()?;
        println!("Configuration file: {}", display_path(&path));
        print_config(&Config::load()?);
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!("  decimals = {}", config.decimals);
    println!("  binary   = {}", config.binary);
    println!("  strict   = {}", config.strict);
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(err.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("Editor exited with status {}", status)))
    }
}
