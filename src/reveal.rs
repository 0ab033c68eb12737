//! Reveal controller - shows the game until it completes, then the gallery

use serde::Serialize;
use tokio::sync::oneshot;
use tracing::info;

use crate::config::Config;
use crate::gallery::Gallery;
use crate::game::{GameSnapshot, TurtleGame};
use crate::input::PointerEvent;

/// What the section currently renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SectionView {
    Game(GameSnapshot),
    Gallery(Gallery),
}

/// A mounted game plus the receiving end of its completion notice
struct Mount {
    game: TurtleGame,
    completed: oneshot::Receiver<()>,
}

impl Mount {
    fn new(config: &Config) -> Self {
        let (tx, completed) = oneshot::channel();
        let game = TurtleGame::new(config, move || {
            let _ = tx.send(());
        });
        Self { game, completed }
    }
}

/// Owns the `revealed` flag. While hidden, a game is mounted; once the game
/// reports completion it is dropped and the gallery takes its place. A game
/// with a running exit animation reports when the animation ends, so callers
/// `sync` to pick that up. Going back mounts a brand new game.
pub struct RevealController {
    config: Config,
    mount: Option<Mount>,
    gallery: Gallery,
    mounts: usize,
}

impl RevealController {
    pub fn new(config: Config) -> Self {
        let gallery = Gallery::from_config(&config.gallery);
        let mount = Mount::new(&config);
        Self {
            config,
            mount: Some(mount),
            gallery,
            mounts: 1,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.mount.is_none()
    }

    /// Number of game instances mounted so far
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    pub fn game(&self) -> Option<&TurtleGame> {
        self.mount.as_ref().map(|m| &m.game)
    }

    pub fn game_mut(&mut self) -> Option<&mut TurtleGame> {
        self.mount.as_mut().map(|m| &mut m.game)
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Gallery controls only act while it is visible
    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        if self.is_revealed() {
            Some(&mut self.gallery)
        } else {
            None
        }
    }

    /// Forward pointer input to the game, then reveal if it just completed.
    /// Returns `true` when this event caused the reveal.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match self.mount.as_mut() {
            Some(mount) => mount.game.handle(event),
            None => return false,
        }
        self.sync()
    }

    /// Pick up a pending completion notice. Returns `true` on reveal.
    pub fn sync(&mut self) -> bool {
        let Some(mount) = self.mount.as_mut() else {
            return false;
        };
        if mount.completed.try_recv().is_err() {
            return false;
        }
        if let Some(mount) = self.mount.take() {
            info!(mount = %mount.game.id(), "Memories revealed");
        }
        true
    }

    /// Hide the gallery and mount a fresh game. No-op while the game is up.
    pub fn go_back(&mut self) -> bool {
        if !self.is_revealed() {
            return false;
        }
        self.gallery.close();
        let mount = Mount::new(&self.config);
        info!(mount = %mount.game.id(), "Back to the game");
        self.mount = Some(mount);
        self.mounts += 1;
        true
    }

    pub fn view(&self) -> SectionView {
        match &self.mount {
            Some(mount) => SectionView::Game(mount.game.snapshot()),
            None => SectionView::Gallery(self.gallery.clone()),
        }
    }
}

impl std::fmt::Debug for RevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("revealed", &self.is_revealed())
            .field("game", &self.game())
            .field("mounts", &self.mounts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerSource;
    use glam::Vec2;

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            source: PointerSource::Mouse,
            at: Vec2::new(x, y),
        }
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move {
            source: PointerSource::Mouse,
            at: Vec2::new(x, y),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_on_completion() {
        let mut section = RevealController::new(Config::default());
        assert!(!section.is_revealed());
        assert!(section.gallery_mut().is_none());

        assert!(!section.handle(down(0.0, 0.0)));
        assert!(!section.handle(moved(500.0, 0.0)));
        assert!(section.handle(moved(600.0, 0.0)));
        assert!(section.is_revealed());
        assert!(section.game().is_none());
        assert!(matches!(section.view(), SectionView::Gallery(_)));

        // Input after the reveal has nowhere to go
        assert!(!section.handle(moved(0.0, 0.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_back_mounts_fresh_game() {
        let mut section = RevealController::new(Config::default());
        let first = section.game().map(|g| g.id().clone());
        assert!(!section.go_back());

        section.handle(down(0.0, 0.0));
        section.handle(moved(700.0, 0.0));
        assert!(section.is_revealed());

        if let Some(gallery) = section.gallery_mut() {
            gallery.open(3);
        }
        assert!(section.go_back());
        assert!(!section.gallery().is_open());
        assert_eq!(section.mount_count(), 2);

        let game = section.game().unwrap();
        assert!(!game.is_complete());
        assert_eq!(game.position(), Vec2::new(50.0, 300.0));
        assert_ne!(Some(game.id().clone()), first);

        // The replay can complete again
        section.handle(down(0.0, 0.0));
        assert!(section.handle(moved(700.0, 0.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_waits_for_exit_animation() {
        let mut config = Config::default();
        config.exit.duration_ms = 400;
        let mut section = RevealController::new(config);

        section.handle(down(0.0, 0.0));
        assert!(!section.handle(moved(700.0, 0.0)));
        assert!(!section.is_revealed());
        assert!(section.game().is_some_and(|g| g.is_complete()));

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert!(!section.sync());
        assert!(matches!(section.view(), SectionView::Game(ref s) if !s.exit.finished));

        tokio::time::sleep(std::time::Duration::from_millis(250)).await;
        assert!(section.sync());
        assert!(section.is_revealed());
        assert!(section.game().is_none());
    }
}
