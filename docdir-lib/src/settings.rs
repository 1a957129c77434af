//! Shared application settings.
//!
//! The settings file lives at `~/.config/docdir/settings.toml`:
//!
//! ```toml
//! [directory]
//! page_size = 30
//! scroll_threshold = 200.0
//! database = "/srv/docdir/providers.db"
//!
//! [site]
//! base_url = "https://example.com"
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::window::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub directory: DirectorySettings,
    pub site: SiteSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    pub page_size: usize,
    pub scroll_threshold: f64,
    pub database: Option<PathBuf>,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            database: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub base_url: Option<String>,
}

/// Canonical path to the settings file: `~/.config/docdir/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("docdir").join("settings.toml")
}

/// Default location of the provider database.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("docdir").join("providers.db")
}

impl Settings {
    /// Load settings from [`settings_path`].
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, returning defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(SettingsError::io(path, e)),
        };
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Resolve the database path using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `directory.database` in the settings file
    /// 3. [`default_database_path`]
    pub fn database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.directory.database.clone())
            .unwrap_or_else(default_database_path)
    }
}

/// Set one `key` in `[section]` of the settings file.
pub fn save_setting(section: &str, key: &str, value: toml::Value) -> Result<(), SettingsError> {
    save_setting_at(&settings_path(), section, key, value)
}

/// Set one `key` in `[section]` of the settings file at `path`.
///
/// Uses `toml::Value` for a surgical update so keys this program does not
/// know about are preserved. The file is replaced atomically.
pub fn save_setting_at(
    path: &Path,
    section: &str,
    key: &str,
    value: toml::Value,
) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(SettingsError::io(path, e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::invalid("settings.toml root is not a table"))?;
    let section_value = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = section_value
        .as_table_mut()
        .ok_or_else(|| SettingsError::invalid(format!("[{section}] is not a table")))?;
    section_table.insert(key.to_string(), value);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| SettingsError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| SettingsError::io(path, e))?;

    log::debug!("Saved [{}] {} to {}", section, key, path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
