//! Game settings and preferences
//!
//! Read as JSON from LocalStorage. Settings only affect presentation and
//! setup; gameplay constants live in [`crate::consts`].

use serde::{Deserialize, Serialize};

/// Element id of the canvas the game draws on
pub const DEFAULT_CANVAS_ID: &str = "drawingCanvas";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Id of the `<canvas>` element to draw on
    pub canvas_id: String,
    /// Show the live pointer-coordinate readout next to the canvas
    pub show_coordinates: bool,
    /// Log level name (error, warn, info, debug, trace)
    pub log_level: String,
    /// Fixed seed for the bounce jitter RNG (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            show_coordinates: true,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "paddle_ball_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                log::warn!("Ignoring malformed settings in LocalStorage");
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_id, "drawingCanvas");
        assert!(settings.show_coordinates);
        assert_eq!(settings.level(), log::Level::Info);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"show_coordinates": false, "seed": 42}"#)
            .expect("valid settings");
        assert!(!settings.show_coordinates);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.canvas_id, DEFAULT_CANVAS_ID);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut settings = Settings::default();
        settings.log_level = "debug".to_string();
        assert_eq!(settings.level(), log::Level::Debug);
        settings.log_level = "verbose".to_string();
        assert_eq!(settings.level(), log::Level::Info);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert_eq!(Settings::from_json("not json"), None);
        assert_eq!(Settings::from_json(r#"{"seed": "abc"}"#), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_uses_defaults() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            canvas_id: "game".to_string(),
            show_coordinates: false,
            log_level: "warn".to_string(),
            seed: Some(7),
        };
        let json = serde_json::to_string(&settings).expect("serializes");
        assert_eq!(Settings::from_json(&json), Some(settings));
    }
}
