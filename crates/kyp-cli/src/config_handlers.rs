//! Handler functions for `kyp config` subcommands.

use std::path::PathBuf;

use kyp_core::config::PROJECT_NAME;
use kyp_core::{Error, KypConfig, Result};

use crate::app::load_config;
use crate::{ConfigAction, Overrides};

const REDACTED: &str = "<redacted>";

/// Handle a config subcommand.
///
/// `get` and `show` report the effective configuration, overrides included.
pub fn handle_config_command(
    config_path: Option<&str>,
    overrides: &Overrides,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let (path, exists) = cmd_config_path(config_path)?;
            println!("{}", path.display());
            if !exists {
                eprintln!("(file does not exist, run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        ConfigAction::Get { key } => {
            let config = load_config(config_path, overrides)?;
            println!("{}", cmd_config_get(&config, &key)?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(config_path, overrides)?;
            print!("{}", cmd_config_show(&config)?);
            Ok(())
        }
    }
}

/// Resolved config file path and whether it exists.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<(PathBuf, bool)> {
    let path = KypConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    let exists = path.exists();
    Ok((path, exists))
}

/// A configuration value by dotted key, formatted for display.
pub fn cmd_config_get(config: &KypConfig, key: &str) -> Result<String> {
    let value = redacted_value(config)?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => KypConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = KypConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// The effective configuration as TOML, with the API key redacted.
pub fn cmd_config_show(config: &KypConfig) -> Result<String> {
    toml::to_string_pretty(&redacted_value(config)?).map_err(|e| Error::config(e.to_string()))
}

fn redacted_value(config: &KypConfig) -> Result<toml::Value> {
    let mut config = config.clone();
    if config.completion.api_key.is_some() {
        config.completion.api_key = Some(REDACTED.to_string());
    }
    toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
