//! Editor settings.
//!
//! Settings live in `<config dir>/symbolboard/settings.json`. Every field has
//! a default, so partial or missing files are fine; a file that cannot be
//! parsed is reported through `tracing` and replaced by the defaults.

use crate::constants::{
    DEFAULT_BASE_PX, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_TEXT, DUPLICATE_OFFSET,
    MAX_SCALE, MIN_SCALE, NUDGE_STEP, RESIZE_STEP, SYMBOLS_DIR_ENV,
};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the symbol images (and optional manifest)
    pub library_dir: Option<PathBuf>,
    /// Largest displayed dimension of a newly placed image
    pub base_px: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Factor per resize key press or wheel tick
    pub resize_step: f32,
    /// Distance per arrow key press
    pub nudge_step: f32,
    pub duplicate_offset: (f32, f32),
    pub default_text: String,
    pub font_family: String,
    pub base_font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_dir: None,
            base_px: DEFAULT_BASE_PX,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            resize_step: RESIZE_STEP,
            nudge_step: NUDGE_STEP,
            duplicate_offset: DUPLICATE_OFFSET,
            default_text: DEFAULT_TEXT.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            base_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("symbolboard").join("settings.json"))
}

/// Default symbol library folder when neither the environment nor the
/// settings name one.
pub fn default_library_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("symbolboard").join("symbols"))
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Repair values that would break board invariants.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.base_px.is_finite() && self.base_px > 0.0) {
            self.base_px = defaults.base_px;
        }
        // Settings may narrow the scale range but never widen it
        if self.min_scale.is_finite() {
            self.min_scale = self.min_scale.clamp(MIN_SCALE, MAX_SCALE);
        } else {
            self.min_scale = defaults.min_scale;
        }
        if self.max_scale.is_finite() && self.max_scale > 0.0 {
            self.max_scale = self.max_scale.clamp(MIN_SCALE, MAX_SCALE);
        } else {
            self.max_scale = defaults.max_scale;
        }
        if self.max_scale < self.min_scale {
            self.max_scale = defaults.max_scale;
        }
        if !self.nudge_step.is_finite() {
            self.nudge_step = defaults.nudge_step;
        }
        if !(self.duplicate_offset.0.is_finite() && self.duplicate_offset.1.is_finite()) {
            self.duplicate_offset = defaults.duplicate_offset;
        }
        if !(self.resize_step.is_finite() && self.resize_step > 1.0) {
            self.resize_step = defaults.resize_step;
        }
        if self.default_text.trim().is_empty() {
            self.default_text = defaults.default_text;
        }
        if self.base_font_size == 0 {
            self.base_font_size = defaults.base_font_size;
        }
        self
    }

    /// The symbol library folder: `SYMBOLS_DIR`, then settings, then the
    /// platform data directory.
    pub fn resolve_library_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(SYMBOLS_DIR_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        self.library_dir.clone().or_else(default_library_dir)
    }
}
