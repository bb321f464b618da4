use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub snap: SnapConfig,
    #[serde(default)]
    pub ambience: AmbienceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Deck file opened when `run` is invoked without an argument.
    #[serde(default)]
    pub deck_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a snap animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Render the background dot grid
    #[serde(default = "default_true")]
    pub show_dots: bool,
    /// Render the wandering ambient glow
    #[serde(default = "default_true")]
    pub show_glow: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            show_dots: default_true(),
            show_glow: default_true(),
        }
    }
}

/// Easing curves for the snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

/// Parameters of the scroll-snap controller and its animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Minimum gap between accepted wheel intents, in milliseconds
    #[serde(default = "default_wheel_throttle")]
    pub wheel_throttle_ms: u64,
    /// How long a snap is presumed in flight before the controller unlocks.
    /// This is a timeout, not animation-end detection.
    #[serde(default = "default_settle")]
    pub settle_ms: u64,
    /// Duration of the cosmetic scroll interpolation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// When false, snaps jump instantly instead of animating
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            wheel_throttle_ms: default_wheel_throttle(),
            settle_ms: default_settle(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            smooth_enabled: default_true(),
        }
    }
}

/// Parameters of the decorative subsystems. None of these interact with
/// navigation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbienceConfig {
    /// Cells between background dots
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: u16,
    /// Glow fade-in (and fade-out) duration in milliseconds
    #[serde(default = "default_glow_half_period")]
    pub glow_half_period_ms: u64,
    /// Entrance fade duration in milliseconds
    #[serde(default = "default_fade_duration")]
    pub fade_duration_ms: u64,
    /// Section the hero's scroll indicator always targets
    #[serde(default = "default_indicator_target")]
    pub indicator_target: String,
}

impl Default for AmbienceConfig {
    fn default() -> Self {
        Self {
            dot_spacing: default_dot_spacing(),
            glow_half_period_ms: default_glow_half_period(),
            fade_duration_ms: default_fade_duration(),
            indicator_target: default_indicator_target(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_wheel_throttle() -> u64 {
    200
}

fn default_settle() -> u64 {
    1000
}

fn default_animation_duration() -> u64 {
    400
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_dot_spacing() -> u16 {
    6
}

fn default_glow_half_period() -> u64 {
    2500
}

fn default_fade_duration() -> u64 {
    1000
}

fn default_indicator_target() -> String {
    "about".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Always ~/.config/snapdeck/config.toml, on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_defaults() {
        let config = SnapConfig::default();
        assert_eq!(config.wheel_throttle_ms, 200);
        assert_eq!(config.settle_ms, 1000);
        assert_eq!(config.easing, EasingType::Cubic);
        assert!(config.smooth_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [snap]
            wheel_throttle_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.snap.wheel_throttle_ms, 50);
        assert_eq!(config.snap.settle_ms, 1000);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ambience.indicator_target, "about");
    }

    #[test]
    fn test_easing_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [snap]
            easing = "ease_out"
            "#,
        )
        .unwrap();
        assert_eq!(config.snap.easing, EasingType::EaseOut);
    }
}
