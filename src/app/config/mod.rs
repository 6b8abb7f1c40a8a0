// SPDX-License-Identifier: MPL-2.0
//! `settings.toml`: the user-editable configuration file.
//!
//! ```toml
//! [general]
//! language = "fr"          # optional, BCP-47
//! theme_mode = "dark"      # light | dark | system, any case
//!
//! [notifications]
//! duration_ms = 3000
//!
//! [catalog]
//! path = "cards.toml"      # optional, replaces the built-in catalog
//! fetch_delay_ms = 1000
//! ```
//!
//! Every section and key is optional. A file that exists but cannot be
//! parsed never stops the application: [`load`] falls back to defaults and
//! hands back [`CONFIG_LOAD_WARNING_KEY`] for the caller to surface.
//!
//! ```no_run
//! use iced_showcase::app::config;
//!
//! let (mut settings, _warning) = config::load();
//! settings.general.language = Some("fr".to_string());
//! config::save(&settings).expect("settings directory is writable");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const FILE_NAME: &str = "settings.toml";

/// Notification key raised when `settings.toml` exists but is unreadable.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Toast lifetime; clamped when turned into a `NotificationDuration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_NOTIFICATION_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_delay_ms: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            fetch_delay_ms: Some(DEFAULT_FETCH_DELAY_MS),
        }
    }
}

impl CatalogConfig {
    /// Latency of the simulated fetch, capped at [`MAX_FETCH_DELAY_MS`].
    #[must_use]
    pub fn fetch_delay(&self) -> Duration {
        let millis = self.fetch_delay_ms.unwrap_or(DEFAULT_FETCH_DELAY_MS);
        Duration::from_millis(millis.min(MAX_FETCH_DELAY_MS))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub notifications: NotificationsConfig,
    pub catalog: CatalogConfig,
}

fn theme_mode_any_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(FILE_NAME))
}

/// Reads `settings.toml` from the resolved config directory.
///
/// Returns the configuration and, when the file was unreadable, the
/// warning key to show. A missing file is not a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// [`load`] with an explicit config directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Writes `settings.toml` into the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// [`save`] with an explicit config directory. Does nothing when no
/// directory can be resolved.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::warn!("no config directory available; settings not saved");
            Ok(())
        }
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
