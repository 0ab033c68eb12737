//! Play area geometry

use glam::Vec2;

use crate::config::ArenaConfig;

/// Container and sprite sizes; everything positional is derived from these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub container: Vec2,
    pub sprite: Vec2,
}

impl Arena {
    pub fn new(container: Vec2, sprite: Vec2) -> Self {
        Self { container, sprite }
    }

    pub fn from_config(config: &ArenaConfig) -> Self {
        Self::new(
            Vec2::new(config.container_width, config.container_height),
            Vec2::new(config.sprite_width, config.sprite_height),
        )
    }

    /// Largest top-left position that keeps the sprite fully inside.
    /// Collapses to 0 on any axis where the sprite does not fit.
    pub fn max_position(&self) -> Vec2 {
        (self.container - self.sprite).max(Vec2::ZERO)
    }

    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(Vec2::ZERO, self.max_position())
    }

    pub fn contains(&self, position: Vec2) -> bool {
        let max = self.max_position();
        position.cmpge(Vec2::ZERO).all() && position.cmple(max).all()
    }
}
