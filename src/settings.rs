//! User settings stored as settings.json in the app data directory

use crate::constants::{API_URL_ENV, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // API
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
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

    /// Base URL for this session: the environment override if set, else the
    /// saved value.
    pub fn effective_api_url(&self) -> String {
        self.api_url_with_override(std::env::var(API_URL_ENV).ok())
    }

    fn api_url_with_override(&self, env_value: Option<String>) -> String {
        match env_value.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => {
                info!(url = %url, "Using API URL from environment");
                url
            }
            _ => self.api_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "employee-manager-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        std::fs::remove_file(dir.join("settings.json")).ok();
        assert_eq!(Settings::load(&dir), Settings::default());
        assert_eq!(Settings::default().api_base_url, "http://localhost:8086");
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = scratch_dir("saved");
        let settings = Settings {
            window_x: Some(10.0),
            window_w: Some(900.0),
            api_base_url: "http://hr.internal:9000".into(),
            ..Default::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"window_x": 5.0}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.window_x, Some(5.0));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn environment_override_wins_when_non_empty() {
        let settings = Settings::default();
        assert_eq!(
            settings.api_url_with_override(Some("http://other:1".into())),
            "http://other:1"
        );
        assert_eq!(
            settings.api_url_with_override(Some("  ".into())),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(settings.api_url_with_override(None), DEFAULT_API_BASE_URL);
    }
}
