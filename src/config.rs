use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;
use thiserror::Error;

/// A config file that exists but cannot be used. Callers fall back to
/// defaults and report it once logging is up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub sample_interval_ms: u64,
    pub frame_poll_ms: u64,
    pub visible_rows: usize,
    pub status_ttl_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            sample_interval_ms: 5000,
            frame_poll_ms: 200,
            visible_rows: 20,
            status_ttl_ms: 1000,
            log_file: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub terminate: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            terminate: "Enter".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wtop").join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// A missing file is not an error and yields defaults.
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a keybind name: a single character, or one of `Enter`, `Esc`,
/// `Space`, `Tab`, `Backspace`, `Delete`.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "Enter" | "enter" | "Return" => Some(KeyCode::Enter),
        "Esc" | "esc" | "Escape" => Some(KeyCode::Esc),
        "Space" | "space" => Some(KeyCode::Char(' ')),
        "Tab" | "tab" => Some(KeyCode::Tab),
        "Backspace" | "backspace" => Some(KeyCode::Backspace),
        "Delete" | "delete" | "Del" => Some(KeyCode::Delete),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}
