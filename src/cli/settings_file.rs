//! Settings file handling (TOML under the user config directory)

use std::fs;
use std::path::{Path, PathBuf};

use aion_timer_core::TimerSettings;
use anyhow::{Context, Result};

/// File name under the app config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// App directory name under the platform config dir
const APP_DIR: &str = "aion-timer";

/// Resolve the settings path, defaulting to the platform config directory.
pub fn resolve_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    let base = dirs::config_dir().context("no user config directory available")?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILE))
}

/// Load settings from `path`, or defaults when the file does not exist yet.
pub fn load(path: &Path) -> Result<TimerSettings> {
    if !path.exists() {
        return Ok(TimerSettings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}

/// Write `settings` to `path`, creating parent directories as needed.
pub fn save(path: &Path, settings: &TimerSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, raw).with_context(|| format!("failed to write settings file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use aion_timer_core::ContentId;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        assert_eq!(load(&path).unwrap(), TimerSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = TimerSettings::default();
        let rift = settings.contents.get_mut(&ContentId::Rift).unwrap();
        rift.enabled = true;
        rift.options = [2, 23].into_iter().collect();

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "enabled = \"definitely\"").unwrap();
        assert!(load(&path).is_err());
    }
}
