//! Random, non-overlapping start positions for the two draggable elements.

use crate::geometry::Viewport;
use crate::params::Params;
use glam::Vec2;
use rand::Rng;

/// Start offsets (relative to viewport center) for the left and right element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: Vec2,
    pub right: Vec2,
    /// Sampling attempts consumed; equals the budget when the fallback was used.
    pub attempts: u32,
    pub fallback: bool,
}

impl Placement {
    #[inline]
    pub fn separation(&self) -> f32 {
        self.left.distance(self.right)
    }
}

/// One candidate offset, uniform within the safe zone around center.
pub fn sample_offset<R: Rng + ?Sized>(viewport: &Viewport, params: &Params, rng: &mut R) -> Vec2 {
    let safe_x = viewport.width * params.safe_zone_fraction;
    let safe_y = viewport.height * params.safe_zone_fraction;
    Vec2::new(
        rng.gen::<f32>() * safe_x - safe_x * 0.5,
        rng.gen::<f32>() * safe_y - safe_y * 0.5,
    )
}

#[inline]
pub fn min_separation(viewport: &Viewport, params: &Params) -> f32 {
    viewport.min_dimension() * params.min_separation_fraction
}

/// Deterministic pair used when sampling never finds enough separation.
pub fn fallback_pair(viewport: &Viewport, params: &Params) -> (Vec2, Vec2) {
    let dx = viewport.width * params.fallback_offset_fraction;
    (Vec2::new(-dx, 0.0), Vec2::new(dx, 0.0))
}

/// Sample candidate pairs until one is far enough apart, falling back to a
/// fixed symmetric pair once the attempt budget is spent.
pub fn place<R: Rng + ?Sized>(viewport: &Viewport, params: &Params, rng: &mut R) -> Placement {
    let min_distance = min_separation(viewport, params);
    for attempt in 1..=params.max_placement_attempts {
        let left = sample_offset(viewport, params, rng);
        let right = sample_offset(viewport, params, rng);
        if left.distance(right) >= min_distance {
            return Placement {
                left,
                right,
                attempts: attempt,
                fallback: false,
            };
        }
    }
    let (left, right) = fallback_pair(viewport, params);
    log::debug!(
        "[setup] placement fell back after {} attempts (min distance {:.1})",
        params.max_placement_attempts,
        min_distance
    );
    Placement {
        left,
        right,
        attempts: params.max_placement_attempts,
        fallback: true,
    }
}
