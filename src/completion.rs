//! Sea detection

use glam::Vec2;

/// One-shot check that the turtle crossed into the sea.
#[derive(Debug, Clone)]
pub struct CompletionDetector {
    threshold_ratio: f32,
    fired: bool,
}

impl CompletionDetector {
    pub fn new(threshold_ratio: f32) -> Self {
        Self {
            threshold_ratio,
            fired: false,
        }
    }

    /// Sea edge in pixels for the given container width
    pub fn threshold(&self, container_width: f32) -> f32 {
        container_width * self.threshold_ratio
    }

    pub fn is_complete(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once: on the first call where `x` is strictly
    /// past the sea edge. Every later call returns `false`.
    pub fn check(&mut self, position: Vec2, container_width: f32) -> bool {
        if self.fired {
            return false;
        }
        if position.x > self.threshold(container_width) {
            self.fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut detector = CompletionDetector::new(0.6);
        assert!(!detector.check(Vec2::new(600.0, 0.0), 1000.0));
        assert!(!detector.is_complete());
        assert!(detector.check(Vec2::new(600.5, 0.0), 1000.0));
    }

    #[test]
    fn test_fires_once() {
        let mut detector = CompletionDetector::new(0.6);
        assert!(!detector.check(Vec2::new(550.0, 300.0), 1000.0));
        assert!(detector.check(Vec2::new(650.0, 300.0), 1000.0));
        assert!(!detector.check(Vec2::new(700.0, 300.0), 1000.0));
        assert!(!detector.check(Vec2::new(100.0, 300.0), 1000.0));
        assert!(detector.is_complete());
    }

    #[test]
    fn test_y_is_irrelevant() {
        let mut detector = CompletionDetector::new(0.6);
        assert!(detector.check(Vec2::new(700.0, -50.0), 1000.0));
    }
}
