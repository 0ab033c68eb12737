//! Swim-off tween played once when the turtle reaches the sea

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// One sampled frame of the exit tween
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExitFrame {
    /// Vertical offset from the resting position (negative is up)
    pub offset_y: f32,
    /// 1.0 fully visible, 0.0 gone
    pub opacity: f32,
    pub finished: bool,
}

impl ExitFrame {
    pub const RESTING: ExitFrame = ExitFrame {
        offset_y: 0.0,
        opacity: 1.0,
        finished: false,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct ExitAnimation {
    rise: f32,
    duration: Duration,
    started_at: Instant,
}

impl ExitAnimation {
    pub fn start(rise: f32, duration: Duration) -> Self {
        Self {
            rise,
            duration,
            started_at: Instant::now(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Sample the tween at `now`
    pub fn sample(&self, now: Instant) -> ExitFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = ease_in_quad(t);

        ExitFrame {
            offset_y: -self.rise * eased,
            opacity: 1.0 - eased,
            finished: t >= 1.0,
        }
    }
}

/// power2.in
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_is_done_immediately() {
        let exit = ExitAnimation::start(100.0, Duration::ZERO);
        let frame = exit.sample(Instant::now());
        assert_eq!(frame.offset_y, -100.0);
        assert_eq!(frame.opacity, 0.0);
        assert!(frame.finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_eases_in() {
        let exit = ExitAnimation::start(100.0, Duration::from_millis(400));

        let start = exit.sample(Instant::now());
        assert_eq!(start.offset_y, 0.0);
        assert_eq!(start.opacity, 1.0);
        assert!(!start.finished);

        tokio::time::advance(Duration::from_millis(200)).await;
        let half = exit.sample(Instant::now());
        assert!((half.offset_y + 25.0).abs() < 1e-3);
        assert!((half.opacity - 0.75).abs() < 1e-3);

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(Instant::now() > exit.ends_at());
        let end = exit.sample(Instant::now());
        assert_eq!(end.offset_y, -100.0);
        assert_eq!(end.opacity, 0.0);
        assert!(end.finished);
    }
}
