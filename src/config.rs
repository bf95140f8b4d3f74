use serde::{Deserialize, Serialize};

use crate::catalog::Level;
use crate::error::ConfigError;

/// Page-level settings, passed as JSON to `start_app_with_config`.
/// Every field is optional in the JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_initial_level")]
    pub initial_level: Level,
    /// Delay before focusing the meaning field after a new character renders.
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: i32,
    #[serde(default = "default_streak_badge_threshold")]
    pub streak_badge_threshold: u32,
    #[serde(default)]
    pub writer: WriterConfig,
}

fn default_initial_level() -> Level {
    Level::FIRST
}
fn default_focus_delay_ms() -> i32 {
    50
}
fn default_streak_badge_threshold() -> u32 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_level: default_initial_level(),
            focus_delay_ms: default_focus_delay_ms(),
            streak_badge_threshold: default_streak_badge_threshold(),
            writer: WriterConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Options handed verbatim to `HanziWriter.create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub show_outline: bool,
    pub stroke_animation_speed: f64,
    pub delay_between_strokes: u32,
    pub radicals_color: String,
    pub stroke_color: String,
    pub drawing_width: u32,
    pub show_character: bool,
    pub show_hint_after_misses: u32,
    pub highlight_on_variation: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            padding: 5,
            show_outline: true,
            stroke_animation_speed: 1.0,
            delay_between_strokes: 200,
            radicals_color: "#166534".to_string(),
            stroke_color: "#000000".to_string(),
            drawing_width: 20,
            show_character: true,
            show_hint_after_misses: 1,
            highlight_on_variation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(AppConfig::from_json("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = AppConfig::from_json(r#"{"initialLevel": 3, "writer": {"width": 240}}"#).unwrap();
        assert_eq!(cfg.initial_level.get(), 3);
        assert_eq!(cfg.focus_delay_ms, 50);
        assert_eq!(cfg.writer.width, 240);
        assert_eq!(cfg.writer.height, 300);
    }

    #[test]
    fn rejects_out_of_range_level() {
        assert!(matches!(
            AppConfig::from_json(r#"{"initialLevel": 0}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn writer_options_use_widget_names() {
        let v = serde_json::to_value(WriterConfig::default()).unwrap();
        assert_eq!(v["strokeAnimationSpeed"], 1.0);
        assert_eq!(v["showHintAfterMisses"], 1);
        assert_eq!(v["radicalsColor"], "#166534");
    }
}
