//! Drag tracking - pointer deltas applied to a clamped sprite position

use glam::Vec2;

use crate::geometry::Arena;

/// Reference frame captured at press time, live until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_origin: Vec2,
    pub item_origin: Vec2,
}

/// Owns the sprite position and the (optional) active session
#[derive(Debug, Clone)]
pub struct DragController {
    arena: Arena,
    position: Vec2,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(arena: Arena, start: Vec2) -> Self {
        Self {
            arena,
            position: arena.clamp(start),
            session: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start (or restart) a session anchored at the current position
    pub fn begin(&mut self, pointer: Vec2) {
        self.session = Some(DragSession {
            pointer_origin: pointer,
            item_origin: self.position,
        });
    }

    /// Apply a pointer move. Returns the new position, or `None` when no
    /// session is active.
    pub fn update(&mut self, pointer: Vec2) -> Option<Vec2> {
        let session = self.session?;
        let delta = pointer - session.pointer_origin;
        self.position = self.arena.clamp(session.item_origin + delta);
        Some(self.position)
    }

    /// Drop the session. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Swap the arena and pull the sprite back inside it.
    pub fn resize(&mut self, arena: Arena) -> Vec2 {
        self.arena = arena;
        self.position = arena.clamp(self.position);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController {
        DragController::new(
            Arena::new(Vec2::new(1000.0, 600.0), Vec2::splat(100.0)),
            Vec2::new(50.0, 300.0),
        )
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let mut drag = controller();
        assert_eq!(drag.update(Vec2::new(500.0, 500.0)), None);
        assert_eq!(drag.position(), Vec2::new(50.0, 300.0));
    }

    #[test]
    fn test_delta_is_relative_to_press() {
        let mut drag = controller();
        drag.begin(Vec2::new(200.0, 200.0));
        assert_eq!(drag.update(Vec2::new(300.0, 150.0)), Some(Vec2::new(150.0, 250.0)));
        // Deltas do not accumulate between moves
        assert_eq!(drag.update(Vec2::new(310.0, 150.0)), Some(Vec2::new(160.0, 250.0)));
    }

    #[test]
    fn test_position_clamped_to_arena() {
        let mut drag = controller();
        drag.begin(Vec2::ZERO);
        assert_eq!(drag.update(Vec2::new(5000.0, 5000.0)), Some(Vec2::new(900.0, 500.0)));
        assert_eq!(drag.update(Vec2::new(-5000.0, -5000.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn test_second_drag_starts_from_last_position() {
        let mut drag = controller();
        drag.begin(Vec2::ZERO);
        drag.update(Vec2::new(100.0, 0.0));
        assert!(drag.end());
        assert!(!drag.end());

        drag.begin(Vec2::new(400.0, 400.0));
        assert_eq!(drag.session().map(|s| s.item_origin), Some(Vec2::new(150.0, 300.0)));
        assert_eq!(drag.update(Vec2::new(450.0, 400.0)), Some(Vec2::new(200.0, 300.0)));
    }

    #[test]
    fn test_resize_reclamps() {
        let mut drag = controller();
        drag.begin(Vec2::ZERO);
        drag.update(Vec2::new(800.0, 0.0));
        let smaller = Arena::new(Vec2::new(500.0, 600.0), Vec2::splat(100.0));
        assert_eq!(drag.resize(smaller), Vec2::new(400.0, 300.0));
    }
}
