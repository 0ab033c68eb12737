//! Seaward - guide the turtle to the sea to reveal a photo gallery
//!
//! The game is headless: hosts feed it pointer events and read snapshots.
//! [`reveal::RevealController`] owns the whole section, [`game::TurtleGame`]
//! is a single mount of the mini-game.

pub mod commands;
pub mod completion;
pub mod config;
pub mod constants;
pub mod drag;
pub mod driver;
pub mod exit;
pub mod flip;
pub mod gallery;
pub mod game;
pub mod geometry;
pub mod input;
pub mod reveal;
pub mod script;

pub use config::Config;
pub use game::{GameSnapshot, MountId, TurtleGame};
pub use input::{PointerEvent, PointerSource, RawInput};
pub use reveal::{RevealController, SectionView};
