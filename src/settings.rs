//! User settings stored as settings.json in the app data directory

use crate::clock::ClockAttributes;
use crate::types::HourCycle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub show_controls: bool,

    // Clock
    pub hour_cycle: HourCycle,
    pub clock: ClockAttributes,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            show_controls: true,
            hour_cycle: HourCycle::Day,
            clock: ClockAttributes::default(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.show_controls);
        assert_eq!(settings.hour_cycle, HourCycle::Day);
        assert_eq!(settings.clock, ClockAttributes::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings {
            window_w: Some(640.0),
            show_controls: false,
            hour_cycle: HourCycle::HalfDay,
            ..Default::default()
        };
        settings.clock.hour_hand_color = Some("#2dd4bf".to_string());
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(640.0));
        assert!(!loaded.show_controls);
        assert_eq!(loaded.hour_cycle, HourCycle::HalfDay);
        assert_eq!(loaded.clock.hour_hand_color.as_deref(), Some("#2dd4bf"));
    }

    #[test]
    fn test_partial_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"hour_cycle":"half_day"}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.hour_cycle, HourCycle::HalfDay);
        assert!(loaded.show_controls);

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()).hour_cycle, HourCycle::Day);
    }
}
