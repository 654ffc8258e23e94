use std::{collections::HashMap, fs, io, path::Path};

use anyhow::Context;

pub const DEFAULT_CONFIG_FILE: &str = "store.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            sidebar_open: false,
            dark_mode: false,
        }
    }
}

/// Defaults, then the config file (if present), then `APP__*` env vars.
/// An explicitly requested file that cannot be read is an error; the default
/// file is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        }
        None => {
            if let Some(raw) = read_optional(Path::new(DEFAULT_CONFIG_FILE))? {
                apply_file(&mut settings, &raw).with_context(|| {
                    format!("failed to parse config file '{DEFAULT_CONFIG_FILE}'")
                })?;
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

/// Reads a config file that may legitimately be absent. Any failure other
/// than a missing file is reported.
fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err)
            .with_context(|| format!("failed to read config file '{}'", path.display())),
    }
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
    if let Some(v) = file_cfg.get("sidebar_open").and_then(file_flag) {
        settings.sidebar_open = v;
    }
    if let Some(v) = file_cfg.get("dark_mode").and_then(file_flag) {
        settings.dark_mode = v;
    }
    Ok(())
}

fn file_flag(value: &toml::Value) -> Option<bool> {
    match value {
        toml::Value::Boolean(flag) => Some(*flag),
        toml::Value::String(raw) => parse_flag(raw),
        _ => None,
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__SIDEBAR_OPEN").and_then(|v| parse_flag(&v)) {
        settings.sidebar_open = v;
    }
    if let Some(v) = var("APP__DARK_MODE").and_then(|v| parse_flag(&v)) {
        settings.dark_mode = v;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
