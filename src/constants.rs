//! Seaward constants

use std::time::Duration;

/// Width of the play area in pixels
pub const CONTAINER_WIDTH: f32 = 1000.0;

/// Height of the play area in pixels
pub const CONTAINER_HEIGHT: f32 = 600.0;

/// Turtle sprite edge length in pixels (square sprite)
pub const SPRITE_SIZE: f32 = 100.0;

/// Where a freshly mounted turtle sits on the beach
pub const START_X: f32 = 50.0;
pub const START_Y: f32 = 300.0;

/// Left edge of the sea as a fraction of container width
pub const SEA_THRESHOLD_RATIO: f32 = 0.6;

/// Flip cadence while the turtle is being dragged
pub const FLIP_PERIOD: Duration = Duration::from_millis(500);

/// How far the turtle rises while swimming off (pixels)
pub const EXIT_RISE: f32 = 100.0;

/// Exit tween length; zero means the turtle vanishes on the completing frame
pub const EXIT_DURATION: Duration = Duration::ZERO;

/// Carousel scroll distance per arrow press (pixels)
pub const CAROUSEL_SCROLL_STEP: f32 = 300.0;

/// Carousel card geometry (pixels)
pub const CAROUSEL_CARD_WIDTH: f32 = 288.0;
pub const CAROUSEL_GAP: f32 = 24.0;
pub const CAROUSEL_PADDING: f32 = 16.0;

/// Visible carousel width (pixels), matches the section's max content width
pub const CAROUSEL_VIEWPORT_WIDTH: f32 = 1024.0;

/// Card tilt pattern in degrees, applied cyclically
pub const PHOTO_TILTS: [f32; 7] = [-3.0, 2.0, -2.0, 3.0, -1.0, 2.0, -3.0];

/// Length of generated mount ids
pub const MOUNT_ID_LEN: usize = 8;
