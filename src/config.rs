/// Application configuration
///
/// Optional JSON file with startup defaults for the controls and the
/// download location. Nothing from a session is ever written back.
///
/// Location:
/// - Linux: ~/.config/image-filters/config.json
/// - macOS: ~/Library/Application Support/image-filters/config.json
/// - Windows: %APPDATA%\image-filters\config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::filter::{FilterMethod, FilterSpec, Intensity};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Method selected at startup (its family is implied)
    pub default_method: FilterMethod,
    /// Intensity selected at startup, clamped into 1..=10
    pub default_intensity: i32,
    /// Folder the save dialog opens in; the OS download folder when unset
    pub download_dir: Option<PathBuf>,
    /// Gap between the original and filtered previews, in pixels
    pub preview_spacing: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_method: FilterMethod::Average,
            default_intensity: Intensity::default().get() as i32,
            download_dir: None,
            preview_spacing: 20,
        }
    }
}

impl AppConfig {
    /// Load from the user config directory.
    /// A missing or broken file falls back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("image-filters");
        path.push("config.json");
        Some(path)
    }

    pub fn initial_spec(&self) -> FilterSpec {
        FilterSpec::new(self.default_method)
    }

    pub fn initial_intensity(&self) -> Intensity {
        Intensity::clamped(self.default_intensity)
    }

    pub fn download_dir(&self) -> Option<PathBuf> {
        self.download_dir.clone().or_else(dirs::download_dir)
    }
}
