use crate::constants::VELOCITY_WINDOW_SEC;
use glam::Vec2;
use smallvec::SmallVec;

/// Pointer position history used to estimate the velocity at release.
///
/// Only samples inside a short trailing window count, so a pointer that was
/// held still before letting go does not throw.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    window_sec: f64,
    samples: SmallVec<[(f64, Vec2); 16]>,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(VELOCITY_WINDOW_SEC)
    }
}

impl VelocityTracker {
    pub fn new(window_sec: f64) -> Self {
        Self {
            window_sec: window_sec.max(0.0),
            samples: SmallVec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn record(&mut self, time_sec: f64, position: Vec2) {
        let horizon = time_sec - self.window_sec;
        self.samples.retain(|s| s.0 >= horizon);
        self.samples.push((time_sec, position));
    }

    #[inline]
    pub fn last_position(&self) -> Option<Vec2> {
        self.samples.last().map(|s| s.1)
    }

    /// Velocity in px/s over the samples no older than the window at `now_sec`.
    pub fn velocity(&self, now_sec: f64) -> Vec2 {
        let horizon = now_sec - self.window_sec;
        let mut recent = self.samples.iter().filter(|s| s.0 >= horizon);
        let Some(first) = recent.next() else {
            return Vec2::ZERO;
        };
        let Some(last) = recent.last() else {
            return Vec2::ZERO;
        };
        let dt = (last.0 - first.0) as f32;
        if dt <= 1e-6 {
            return Vec2::ZERO;
        }
        (last.1 - first.1) / dt
    }
}
