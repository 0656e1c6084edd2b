//! Render preferences
//!
//! Persisted to LocalStorage on the web build.

use serde::{Deserialize, Serialize};

/// Render preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// CSS color for the player circle
    pub player_color: String,
    /// CSS color for the obstacle lines
    pub line_color: String,
    /// Draw the running score in the top-left corner
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_color: "red".to_string(),
            line_color: "green".to_string(),
            show_score: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "falldown_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            player_color: "#ff8800".to_string(),
            line_color: "blue".to_string(),
            show_score: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player_color, "#ff8800");
        assert_eq!(back.line_color, "blue");
        assert!(!back.show_score);
    }
}
