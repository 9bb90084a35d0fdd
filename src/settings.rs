//! Game settings and preferences
//!
//! Supplied by the host page as JSON; never written back.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_FRAME_DT;

/// Largest per-step dt a host may configure (seconds)
const MAX_FRAME_DT_CEILING: f64 = 0.25;

/// Settings could not be parsed
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Number of soft glow rings drawn around paddles and ball
    pub fn glow_layers(&self) -> u32 {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 3,
            QualityPreset::High => 6,
        }
    }

    /// Whether to draw the background grid
    pub fn grid_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }

    /// Circle tessellation for the ball
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 32,
            QualityPreset::High => 48,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Timing ===
    /// Largest dt a single simulation step may use (seconds)
    pub max_frame_dt: f64,
    /// Whether pausing also stops a running countdown
    pub pause_freezes_countdown: bool,
    /// Pause when the tab is hidden or the window loses focus
    pub auto_pause_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            pause_freezes_countdown: false,
            auto_pause_on_blur: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if self.max_frame_dt <= 0.0 {
            self.max_frame_dt = DEFAULT_MAX_FRAME_DT;
        }
        self.max_frame_dt = self.max_frame_dt.min(MAX_FRAME_DT_CEILING);
        self
    }

    /// Canvas attribute holding the settings JSON
    pub const PAGE_ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn from_page(canvas: &web_sys::Element) -> Self {
        match canvas.get_attribute(Self::PAGE_ATTRIBUTE) {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from page (quality {})", settings.quality.as_str());
                    settings
                }
                Err(e) => {
                    log::warn!("{e}; using default settings");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "quality": "High", "muted": true }"#).unwrap();
        assert_eq!(s.quality, QualityPreset::High);
        assert!(s.muted);
        assert_eq!(s.master_volume, 0.8);
        assert_eq!(s.max_frame_dt, DEFAULT_MAX_FRAME_DT);
        assert!(!s.pause_freezes_countdown);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let s = Settings::from_json(
            r#"{ "master_volume": 3.0, "sfx_volume": -1.0, "max_frame_dt": 10.0 }"#,
        )
        .unwrap();
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);
        assert_eq!(s.max_frame_dt, MAX_FRAME_DT_CEILING);

        let s = Settings::from_json(r#"{ "max_frame_dt": 0.0 }"#).unwrap();
        assert_eq!(s.max_frame_dt, DEFAULT_MAX_FRAME_DT);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ quality: ").is_err());
        assert!(Settings::from_json(r#"{ "quality": "Ultra" }"#).is_err());
    }

    #[test]
    fn test_preset_parsing() {
        let s = Settings::from_json(r#"{ "quality": "Low" }"#).unwrap();
        assert_eq!(s.quality, QualityPreset::Low);
        assert_eq!(s.quality.as_str(), "Low");
        assert!(!QualityPreset::Low.grid_enabled());
        assert_eq!(QualityPreset::Low.glow_layers(), 0);
    }
}
