//! Input handling - mouse and touch folded into one pointer stream

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Device events as the host delivers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawInput {
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    /// Active touch points, first one drives the drag
    TouchStart { touches: Vec<[f32; 2]> },
    TouchMove { touches: Vec<[f32; 2]> },
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Source-independent pointer event consumed by the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { source: PointerSource, at: Vec2 },
    Move { source: PointerSource, at: Vec2 },
    Up { source: PointerSource },
}

impl RawInput {
    /// Normalize into a pointer event. Touch events without any touch
    /// point carry no coordinate and are dropped.
    pub fn normalize(&self) -> Option<PointerEvent> {
        use PointerSource::*;
        match self {
            RawInput::MouseDown { x, y } => Some(PointerEvent::Down {
                source: Mouse,
                at: Vec2::new(*x, *y),
            }),
            RawInput::MouseMove { x, y } => Some(PointerEvent::Move {
                source: Mouse,
                at: Vec2::new(*x, *y),
            }),
            RawInput::MouseUp => Some(PointerEvent::Up { source: Mouse }),
            RawInput::TouchStart { touches } => first_touch(touches)
                .map(|at| PointerEvent::Down { source: Touch, at }),
            RawInput::TouchMove { touches } => first_touch(touches)
                .map(|at| PointerEvent::Move { source: Touch, at }),
            RawInput::TouchEnd => Some(PointerEvent::Up { source: Touch }),
        }
    }
}

fn first_touch(touches: &[[f32; 2]]) -> Option<Vec2> {
    touches.first().map(|&[x, y]| Vec2::new(x, y))
}

impl PointerEvent {
    pub fn source(&self) -> PointerSource {
        match self {
            PointerEvent::Down { source, .. }
            | PointerEvent::Move { source, .. }
            | PointerEvent::Up { source } => *source,
        }
    }
}
