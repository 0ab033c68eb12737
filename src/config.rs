//! Configuration loading and defaults

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub arena: ArenaConfig,

    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub exit: ExitConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Play area size in pixels
    #[serde(default = "default_container_width")]
    pub container_width: f32,
    #[serde(default = "default_container_height")]
    pub container_height: f32,

    /// Turtle sprite size in pixels
    #[serde(default = "default_sprite_size")]
    pub sprite_width: f32,
    #[serde(default = "default_sprite_size")]
    pub sprite_height: f32,

    /// Initial turtle position
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    #[serde(default = "default_start_y")]
    pub start_y: f32,

    /// Static asset paths, handed to whatever draws the arena
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_sprite")]
    pub sprite: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sea edge as a fraction of container width (0.0 - 1.0, exclusive)
    #[serde(default = "default_threshold_ratio")]
    pub threshold_ratio: f32,

    /// Flip cadence while dragging
    #[serde(default = "default_flip_period_ms")]
    pub flip_period_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitConfig {
    /// Upward travel of the exit tween in pixels
    #[serde(default = "default_exit_rise")]
    pub rise: f32,

    /// Exit tween length
    #[serde(default)]
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f32,

    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,

    #[serde(default = "default_photos")]
    pub photos: Vec<PhotoConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoConfig {
    pub src: String,
    pub alt: String,
}

// Default value functions
fn default_container_width() -> f32 {
    CONTAINER_WIDTH
}
fn default_container_height() -> f32 {
    CONTAINER_HEIGHT
}
fn default_sprite_size() -> f32 {
    SPRITE_SIZE
}
fn default_start_x() -> f32 {
    START_X
}
fn default_start_y() -> f32 {
    START_Y
}
fn default_background() -> String {
    "/sea.jpg".to_string()
}
fn default_sprite() -> String {
    "/sea_turtle.png".to_string()
}
fn default_threshold_ratio() -> f32 {
    SEA_THRESHOLD_RATIO
}
fn default_flip_period_ms() -> u64 {
    FLIP_PERIOD.as_millis() as u64
}
fn default_exit_rise() -> f32 {
    EXIT_RISE
}
fn default_scroll_step() -> f32 {
    CAROUSEL_SCROLL_STEP
}
fn default_viewport_width() -> f32 {
    CAROUSEL_VIEWPORT_WIDTH
}
fn default_photos() -> Vec<PhotoConfig> {
    ["1.jpg", "2.jpeg", "3.jpg", "4.jpg", "5.jpg", "6.jpg", "7.jpg"]
        .iter()
        .enumerate()
        .map(|(i, file)| PhotoConfig {
            src: format!("/biology/{}", file),
            alt: format!("Memory {}", i + 1),
        })
        .collect()
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
            container_height: default_container_height(),
            sprite_width: default_sprite_size(),
            sprite_height: default_sprite_size(),
            start_x: default_start_x(),
            start_y: default_start_y(),
            background: default_background(),
            sprite: default_sprite(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: default_threshold_ratio(),
            flip_period_ms: default_flip_period_ms(),
        }
    }
}

impl Default for ExitConfig {
    fn default() -> Self {
        Self {
            rise: default_exit_rise(),
            duration_ms: EXIT_DURATION.as_millis() as u64,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            viewport_width: default_viewport_width(),
            photos: default_photos(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            game: GameConfig::default(),
            exit: ExitConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn flip_period(&self) -> Duration {
        Duration::from_millis(self.flip_period_ms)
    }
}

impl ExitConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(PathBuf::from).or_else(Self::default_config_path);

        if let Some(ref path) = config_path {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: Config = toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                config.validate()?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Get the default config file path
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "seaward")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<()> {
        let arena = &self.arena;
        if !(arena.container_width > 0.0 && arena.container_height > 0.0) {
            bail!(
                "arena must have a positive size, got {}x{}",
                arena.container_width,
                arena.container_height
            );
        }
        if !(arena.container_width.is_finite() && arena.container_height.is_finite()) {
            bail!("arena size must be finite");
        }
        if !(arena.sprite_width >= 0.0 && arena.sprite_height >= 0.0) {
            bail!("sprite size cannot be negative");
        }
        if !(arena.start_x.is_finite() && arena.start_y.is_finite()) {
            bail!("start position must be finite");
        }
        let ratio = self.game.threshold_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            bail!("threshold_ratio must be between 0 and 1 (exclusive), got {}", ratio);
        }
        if self.game.flip_period_ms == 0 {
            bail!("flip_period_ms must be greater than zero");
        }
        if !self.exit.rise.is_finite() {
            bail!("exit rise must be finite");
        }
        if !(self.gallery.scroll_step > 0.0) {
            bail!("gallery scroll_step must be positive");
        }
        if !(self.gallery.viewport_width > 0.0) {
            bail!("gallery viewport_width must be positive");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.arena.container_width, 1000.0);
        assert_eq!(config.arena.sprite_width, 100.0);
        assert_eq!(config.game.threshold_ratio, 0.6);
        assert_eq!(config.game.flip_period(), Duration::from_millis(500));
        assert_eq!(config.exit.duration(), Duration::ZERO);
        assert_eq!(config.gallery.photos.len(), 7);
        assert_eq!(config.gallery.photos[1].src, "/biology/2.jpeg");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[game]\nflip_period_ms = 250\n")?;

        let config = Config::load(Some(path.as_path()))?;
        assert_eq!(config.game.flip_period_ms, 250);
        assert_eq!(config.game.threshold_ratio, 0.6);
        assert_eq!(config.arena, ArenaConfig::default());
        Ok(())
    }

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let config = Config::load(Some(temp.path().join("absent.toml").as_path()))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_ratio_rejected() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[game]\nthreshold_ratio = 1.5\n")?;

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("threshold_ratio"));
        Ok(())
    }

    #[test]
    fn test_zero_container_rejected() {
        let mut config = Config::default();
        config.arena.container_width = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_values_rejected() {
        let cases: [fn(&mut Config); 5] = [
            |c| c.arena.sprite_width = f32::NAN,
            |c| c.arena.container_width = f32::INFINITY,
            |c| c.arena.start_y = f32::NAN,
            |c| c.gallery.scroll_step = f32::NAN,
            |c| c.gallery.viewport_width = 0.0,
        ];
        for tweak in cases {
            let mut config = Config::default();
            tweak(&mut config);
            assert!(config.validate().is_err(), "accepted {:?}", config);
        }
    }

    #[test]
    fn test_toml_roundtrip_keeps_photos() -> Result<()> {
        let config = Config::default();
        let loaded: Config = toml::from_str(&config.to_toml()?)?;
        assert_eq!(loaded, config);
        Ok(())
    }
}
