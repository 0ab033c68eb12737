//! The turtle game - drag, flip, sea detection and swim-off for one mount

use anyhow::{bail, Result};
use glam::Vec2;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::completion::CompletionDetector;
use crate::config::Config;
use crate::constants::MOUNT_ID_LEN;
use crate::drag::DragController;
use crate::exit::{ExitAnimation, ExitFrame};
use crate::flip::FlipDriver;
use crate::geometry::Arena;
use crate::input::PointerEvent;

/// Called once when the turtle reaches the sea
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Identifier of a single game mount (short UUID)
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize)]
pub struct MountId(pub String);

impl MountId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string()[..MOUNT_ID_LEN].to_string())
    }
}

impl Default for MountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render-facing view of a mount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub mount: MountId,
    pub position: Vec2,
    pub dragging: bool,
    pub flipped: bool,
    pub completed: bool,
    pub exit: ExitFrame,
}

/// One mounted instance of the game.
///
/// Starting a drag spawns the flip task and a non-zero exit tween spawns the
/// task that reports completion, both on the current tokio runtime. Without
/// a runtime the flip stays off and completion is reported at once. Dropping
/// the game cancels both tasks.
pub struct TurtleGame {
    id: MountId,
    drag: DragController,
    detector: CompletionDetector,
    flip: FlipDriver,
    exit: Option<ExitAnimation>,
    exit_rise: f32,
    exit_duration: std::time::Duration,
    on_complete: Option<CompletionCallback>,
    exit_task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for TurtleGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurtleGame")
            .field("id", &self.id)
            .field("drag", &self.drag)
            .field("completed", &self.detector.is_complete())
            .field("flip", &self.flip)
            .finish_non_exhaustive()
    }
}

impl TurtleGame {
    pub fn new<F>(config: &Config, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let arena = Arena::from_config(&config.arena);
        let start = Vec2::new(config.arena.start_x, config.arena.start_y);
        let id = MountId::new();
        debug!(mount = %id, ?start, "Mounting turtle game");

        Self {
            id,
            drag: DragController::new(arena, start),
            detector: CompletionDetector::new(config.game.threshold_ratio),
            flip: FlipDriver::new(config.game.flip_period()),
            exit: None,
            exit_rise: config.exit.rise,
            exit_duration: config.exit.duration(),
            on_complete: Some(Box::new(on_complete)),
            exit_task: None,
        }
    }

    pub fn id(&self) -> &MountId {
        &self.id
    }

    pub fn position(&self) -> Vec2 {
        self.drag.position()
    }

    pub fn arena(&self) -> Arena {
        self.drag.arena()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_flipped(&self) -> bool {
        self.flip.is_flipped()
    }

    pub fn is_flip_running(&self) -> bool {
        self.flip.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.detector.is_complete()
    }

    pub fn subscribe_flip(&self) -> watch::Receiver<bool> {
        self.flip.subscribe()
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { at, .. } => self.pointer_down(at),
            PointerEvent::Move { at, .. } => self.pointer_move(at),
            PointerEvent::Up { .. } => self.pointer_up(),
        }
    }

    /// Press on the turtle. Ignored once the turtle is in the sea.
    pub fn pointer_down(&mut self, at: Vec2) {
        if self.is_complete() {
            return;
        }
        self.drag.begin(at);
        self.flip.start();
        debug!(mount = %self.id, pointer = ?at, position = ?self.position(), "Drag started");
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        if self.is_complete() {
            return;
        }
        let Some(position) = self.drag.update(at) else {
            return;
        };
        let container_width = self.arena().container.x;
        if self.detector.check(position, container_width) {
            self.complete();
        }
    }

    pub fn pointer_up(&mut self) {
        if self.drag.end() {
            debug!(mount = %self.id, position = ?self.position(), "Drag ended");
        }
        self.flip.stop();
    }

    /// Container resized; the turtle is pulled back inside and the sea edge
    /// follows the new width. The size must be finite and positive.
    pub fn resize(&mut self, container: Vec2) -> Result<()> {
        if !(container.is_finite() && container.x > 0.0 && container.y > 0.0) {
            bail!(
                "container must have a positive size, got {}x{}",
                container.x,
                container.y
            );
        }
        let arena = Arena::new(container, self.arena().sprite);
        let position = self.drag.resize(arena);
        debug!(mount = %self.id, ?container, ?position, "Arena resized");
        Ok(())
    }

    pub fn exit_frame(&self, now: Instant) -> ExitFrame {
        self.exit
            .map(|exit| exit.sample(now))
            .unwrap_or(ExitFrame::RESTING)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mount: self.id.clone(),
            position: self.position(),
            dragging: self.is_dragging(),
            flipped: self.is_flipped(),
            completed: self.is_complete(),
            exit: self.exit_frame(Instant::now()),
        }
    }

    /// Stop any live drag, mirroring an unmount without dropping the game
    pub fn teardown(&mut self) {
        self.drag.end();
        self.flip.stop();
    }

    fn complete(&mut self) {
        info!(mount = %self.id, position = ?self.position(), "Turtle reached the sea");
        self.teardown();
        let exit = ExitAnimation::start(self.exit_rise, self.exit_duration);
        self.exit = Some(exit);

        let Some(on_complete) = self.on_complete.take() else {
            return;
        };
        if exit.duration().is_zero() {
            on_complete();
            return;
        }
        match Handle::try_current() {
            Ok(runtime) => {
                let mount = self.id.clone();
                self.exit_task = Some(runtime.spawn(async move {
                    tokio::time::sleep_until(exit.ends_at()).await;
                    debug!(%mount, "Exit animation finished");
                    on_complete();
                }));
            }
            Err(_) => {
                warn!(mount = %self.id, "No tokio runtime, skipping exit animation wait");
                on_complete();
            }
        }
    }
}

impl Drop for TurtleGame {
    fn drop(&mut self) {
        if let Some(task) = self.exit_task.take() {
            task.abort();
        }
    }
}
