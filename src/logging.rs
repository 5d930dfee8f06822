use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;

use crate::config::GeneralConfig;

/// Installs a file-backed tracing subscriber when `log_file` is set.
///
/// The terminal belongs to the UI, so without a log file no subscriber is
/// installed and events are discarded.
pub fn init(general: &GeneralConfig) -> Result<()> {
    let Some(path) = general.log_file.as_deref() else {
        return Ok(());
    };

    ensure_parent_dir(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = parse_level(&general.log_level);

    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(Mutex::new(file));

    let installed = if general.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), %level, "logging initialised");
    Ok(())
}

fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::INFO)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("nonsense"), Level::INFO);
    }

    #[test]
    fn no_log_file_is_a_no_op() {
        let general = GeneralConfig::default();
        assert!(init(&general).is_ok());
    }

    // The only test here that installs the global subscriber.
    #[test]
    fn json_log_file_is_created_and_written() {
        let dir = std::env::temp_dir().join(format!("wtop_logging_{}", std::process::id()));
        let path = dir.join("nested").join("wtop.log");
        let _ = fs::remove_dir_all(&dir);

        let general = GeneralConfig {
            log_file: Some(path.clone()),
            log_level: "debug".to_string(),
            log_json: true,
            ..GeneralConfig::default()
        };
        init(&general).unwrap();
        tracing::info!(pid = 42, "sample published");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(!lines.is_empty());
        assert!(lines[0].starts_with('{') && lines[0].ends_with('}'));
        assert!(contents.contains("\"message\":\"logging initialised\""));
        assert!(contents.contains("\"pid\":42"));

        // A second subscriber cannot be installed over the first.
        assert!(init(&general).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
