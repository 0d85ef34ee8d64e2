//! Game configuration with documented defaults
//!
//! Values can be loaded from a TOML file. Every field has a default, so a
//! config file only needs to mention what it changes.

use crate::core::error::{JudoError, Result};
use crate::core::types::Button;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted session, one day
pub const MAX_SESSION_SECS: u64 = 24 * 60 * 60;
/// Longest accepted reminder pause, one hour
pub const MAX_REMINDER_SLACK_SECS: f32 = 60.0 * 60.0;

/// Configuration for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a session in seconds
    ///
    /// The hourglass on screen empties over this span and the summary screen
    /// appears once it has elapsed.
    pub session_secs: u64,

    /// Pause after an announcement finishes before it is repeated
    pub reminder_slack_secs: f32,

    /// Directory that all media paths are relative to
    pub media_dir: PathBuf,

    /// Open the window fullscreen
    pub fullscreen: bool,

    /// Score thresholds for the medals on the summary screen
    pub grades: GradeThresholds,

    /// Pad button index for each abstract button
    pub pad: PadLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_secs: 120,
            reminder_slack_secs: 5.0,
            media_dir: PathBuf::from("media"),
            fullscreen: true,
            grades: GradeThresholds::default(),
            pad: PadLayout::default(),
        }
    }
}

/// Minimum score for each medal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            bronze: 0,
            silver: 15,
            gold: 30,
        }
    }
}

/// Which raw pad button index reports which abstract button
///
/// Defaults match the common PlayStation-style dance mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadLayout {
    pub cross: u32,
    pub up: u32,
    pub circle: u32,
    pub right: u32,
    pub square: u32,
    pub down: u32,
    pub triangle: u32,
    pub left: u32,
}

impl Default for PadLayout {
    fn default() -> Self {
        Self {
            cross: 6,
            up: 2,
            circle: 7,
            right: 3,
            square: 5,
            down: 1,
            triangle: 4,
            left: 0,
        }
    }
}

impl PadLayout {
    /// (index, button) pairs in button declaration order
    pub fn entries(&self) -> [(u32, Button); 8] {
        [
            (self.cross, Button::Cross),
            (self.up, Button::Up),
            (self.circle, Button::Circle),
            (self.right, Button::Right),
            (self.square, Button::Square),
            (self.down, Button::Down),
            (self.triangle, Button::Triangle),
            (self.left, Button::Left),
        ]
    }
}

impl GameConfig {
    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate().map_err(JudoError::Config)?;
        Ok(config)
    }

    pub fn session_length(&self) -> Duration {
        Duration::from_secs(self.session_secs)
    }

    pub fn reminder_slack(&self) -> Duration {
        Duration::from_secs_f32(self.reminder_slack_secs)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.session_secs == 0 || self.session_secs > MAX_SESSION_SECS {
            return Err(format!(
                "session_secs ({}) must be between 1 and {}",
                self.session_secs, MAX_SESSION_SECS
            ));
        }

        if !(0.0..=MAX_REMINDER_SLACK_SECS).contains(&self.reminder_slack_secs) {
            return Err(format!(
                "reminder_slack_secs ({}) must be between 0 and {}",
                self.reminder_slack_secs, MAX_REMINDER_SLACK_SECS
            ));
        }

        let g = &self.grades;
        if !(g.bronze <= g.silver && g.silver <= g.gold) {
            return Err(format!(
                "grade thresholds must be ordered bronze <= silver <= gold (got {}, {}, {})",
                g.bronze, g.silver, g.gold
            ));
        }

        let entries = self.pad.entries();
        for (i, (index, button)) in entries.iter().enumerate() {
            if let Some((_, other)) = entries[i + 1..].iter().find(|(idx, _)| idx == index) {
                return Err(format!(
                    "pad index {} is assigned to both {} and {}",
                    index, button, other
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert_eq!(GameConfig::default().reminder_slack(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml(
            r#"
            session_secs = 60

            [grades]
            gold = 40
            "#,
        )
        .expect("valid config");

        assert_eq!(config.session_length(), Duration::from_secs(60));
        assert_eq!(config.grades.gold, 40);
        assert_eq!(config.grades.silver, 15);
        assert_eq!(config.pad, PadLayout::default());
        assert!(config.fullscreen);
    }

    #[test]
    fn test_unordered_grades_rejected() {
        let err = GameConfig::from_toml(
            r#"
            [grades]
            bronze = 20
            silver = 10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, JudoError::Config(ref msg) if msg.contains("ordered")));
    }

    #[test]
    fn test_duplicate_pad_index_rejected() {
        let mut config = GameConfig::default();
        config.pad.up = config.pad.cross;
        let msg = config.validate().unwrap_err();
        assert!(msg.contains("CROSS"));
        assert!(msg.contains("UP"));
    }

    #[test]
    fn test_zero_session_rejected() {
        let mut config = GameConfig::default();
        config.session_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_beyond_a_day_rejected() {
        let err = GameConfig::from_toml("session_secs = 9223372036854775807").unwrap_err();
        assert!(matches!(err, JudoError::Config(ref msg) if msg.contains("session_secs")));

        let mut config = GameConfig::default();
        config.session_secs = MAX_SESSION_SECS;
        assert!(config.validate().is_ok());
        config.session_secs = MAX_SESSION_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_or_nan_slack_rejected() {
        let err = GameConfig::from_toml("reminder_slack_secs = 1e30").unwrap_err();
        assert!(matches!(err, JudoError::Config(ref msg) if msg.contains("reminder_slack_secs")));

        let mut config = GameConfig::default();
        config.reminder_slack_secs = f32::NAN;
        assert!(config.validate().is_err());
        config.reminder_slack_secs = f32::INFINITY;
        assert!(config.validate().is_err());
        config.reminder_slack_secs = -1.0;
        assert!(config.validate().is_err());

        config.reminder_slack_secs = MAX_REMINDER_SLACK_SECS;
        assert!(config.validate().is_ok());
        assert_eq!(config.reminder_slack(), Duration::from_secs(3600));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let err = GameConfig::from_toml("session_secs = \"long\"").unwrap_err();
        assert!(matches!(err, JudoError::Toml(_)));
    }
}
