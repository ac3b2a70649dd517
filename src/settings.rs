use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::charset::CharacterClassSelection;
use crate::error::SettingsError;
use crate::manager::settings_file_path;
use crate::password::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, LengthBounds};

/// Hard ceiling for the configurable maximum length
pub const LENGTH_CEILING: usize = 128;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Shortest accepted password length (1-128, default 4)
    pub min_length: usize,
    /// Longest accepted password length (min_length-128, default 10)
    pub max_length: usize,
    /// Selection restored on startup and on Reset
    pub default_selection: CharacterClassSelection,
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_selection: CharacterClassSelection::default(),
            clipboard_clear_seconds: 30,
        }
    }
}

impl AppSettings {
    /// Load settings from the data directory, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&settings_file_path())
    }

    /// Load settings from `path`. A missing file yields defaults silently,
    /// an unreadable or malformed one yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(mut settings) => {
                settings.normalize();
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save settings to the data directory
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_file_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate and clamp the length range, keeping min <= max
    pub fn set_length_range(&mut self, min: usize, max: usize) {
        self.min_length = min.clamp(1, LENGTH_CEILING);
        self.max_length = max.clamp(self.min_length, LENGTH_CEILING);
    }

    /// Validate and clamp clipboard timeout to allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }

    pub fn bounds(&self) -> LengthBounds {
        LengthBounds::new(self.min_length, self.max_length)
    }

    fn normalize(&mut self) {
        self.set_length_range(self.min_length, self.max_length);
        self.set_clipboard_timeout(self.clipboard_clear_seconds);
    }
}
