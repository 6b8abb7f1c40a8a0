// SPDX-License-Identifier: MPL-2.0
//! User preferences that survive restarts: theme mode and language.
//!
//! The application never touches `settings.toml` directly for these; it goes
//! through a [`PreferenceStore`], so tests can swap in [`MemoryPreferenceStore`].

use super::config::{self, Config};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// The persisted subset of user choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme_mode: ThemeMode,
    /// BCP-47 tag of the chosen UI language, if the user picked one.
    pub language: Option<String>,
}

/// Read/write access to persisted preferences.
pub trait PreferenceStore: Send {
    fn load(&self) -> Preferences;
    fn save(&mut self, preferences: &Preferences) -> Result<()>;
}

/// Stores preferences in the `[general]` section of `settings.toml`.
///
/// Other sections of the file are preserved on save.
#[derive(Debug, Clone, Default)]
pub struct ConfigPreferenceStore {
    base_dir: Option<PathBuf>,
}

impl ConfigPreferenceStore {
    /// Store using the regular config directory resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rooted at an explicit directory.
    #[must_use]
    pub fn with_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    fn read_config(&self) -> Config {
        config::load_with_override(self.base_dir.clone()).0
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn load(&self) -> Preferences {
        let config = self.read_config();
        Preferences {
            theme_mode: config.general.theme_mode,
            language: config.general.language,
        }
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        let mut config = self.read_config();
        config.general.theme_mode = preferences.theme_mode;
        config.general.language = preferences.language.clone();
        config::save_with_override(&config, self.base_dir.clone())
    }
}

/// In-memory store. Clones share the same slot, so a test can keep one
/// clone to inspect what the application saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Arc<Mutex<Preferences>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new(initial: Preferences) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial)),
            saves: Arc::default(),
        }
    }

    /// Number of successful `save` calls across all clones.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().map_or(0, |count| *count)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Preferences {
        self.slot
            .lock()
            .map(|preferences| preferences.clone())
            .unwrap_or_default()
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = preferences.clone();
        }
        if let Ok(mut count) = self.saves.lock() {
            *count += 1;
        }
        Ok(())
    }
}
