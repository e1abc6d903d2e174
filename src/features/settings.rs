//! Application settings
//!
//! Read once at startup. Player state is never written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::playback::{LoopMode, deserialize_loop_mode_lenient};

/// Shortest accepted tick interval in milliseconds
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
/// Longest accepted tick interval in milliseconds
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial volume level (0.0 to 1.0)
    pub volume: f32,
    /// Initial loop mode
    #[serde(deserialize_with = "deserialize_loop_mode_lenient")]
    pub loop_mode: LoopMode,
    /// Catalog file used when none is given on the command line
    pub catalog_path: Option<PathBuf>,
    /// Playback position polling interval
    pub tick_interval_ms: u64,
    /// Display and interface settings
    pub display: DisplaySettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            loop_mode: LoopMode::ListRepeat,
            catalog_path: None,
            tick_interval_ms: 250,
            display: DisplaySettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lyra", "Lyra")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::debug!("Using default settings ({:?}: {})", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse settings from JSON text, normalizing out-of-range values
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        self
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.loop_mode, LoopMode::ListRepeat);
        assert_eq!(settings.tick_interval_ms, 250);
        assert!(settings.display.dark_mode);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "loop_mode": "shuffle" }"#)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(settings.loop_mode, LoopMode::Shuffle);
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.tick_interval_ms, 250);
    }

    #[test]
    fn test_unknown_loop_mode_falls_back() {
        let settings = Settings::from_json(r#"{ "loop_mode": "party", "volume": 0.4 }"#)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(settings.loop_mode, LoopMode::ListRepeat);
        assert_eq!(settings.volume, 0.4);
    }

    #[test]
    fn test_values_are_clamped() {
        let settings = Settings::from_json(r#"{ "volume": 3.0, "tick_interval_ms": 1 }"#)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.tick_interval_ms, MIN_TICK_INTERVAL_MS);

        let settings = Settings::from_json(r#"{ "tick_interval_ms": 60000 }"#)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(settings.tick_interval_ms, MAX_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::load_from_file(Path::new("/nonexistent/lyra/settings.json")),
            Err(SettingsError::Io(_))
        ));
    }
}
