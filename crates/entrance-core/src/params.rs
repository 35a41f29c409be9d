use crate::constants::*;

/// Tunables for one interaction session.
///
/// `Default` reproduces the fixed constants the page ships with; tests build
/// their own to exercise edge cases.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub rest_scale: f32,
    pub drag_scale: f32,
    pub alignment_threshold: f32,
    pub blur_px: f32,
    pub safe_zone_fraction: f32,
    pub min_separation_fraction: f32,
    pub max_placement_attempts: u32,
    pub fallback_offset_fraction: f32,
    pub float_distance_factor: f32,
    pub float_enabled: bool,
    pub throw_decay_per_sec: f32,
    pub throw_stop_speed: f32,
    pub throw_release_speed: f32,
    pub throw_max_speed: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            rest_scale: REST_SCALE,
            drag_scale: DRAG_SCALE,
            alignment_threshold: ALIGNMENT_THRESHOLD,
            blur_px: BLUR_PX,
            safe_zone_fraction: SAFE_ZONE_FRACTION,
            min_separation_fraction: MIN_SEPARATION_FRACTION,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            fallback_offset_fraction: FALLBACK_OFFSET_FRACTION,
            float_distance_factor: FLOAT_DISTANCE_FACTOR,
            float_enabled: true,
            throw_decay_per_sec: THROW_DECAY_PER_SEC,
            throw_stop_speed: THROW_STOP_SPEED,
            throw_release_speed: THROW_RELEASE_SPEED,
            throw_max_speed: THROW_MAX_SPEED,
        }
    }
}

impl Params {
    /// Separation above which the idle float may run.
    #[inline]
    pub fn float_min_distance(&self) -> f32 {
        self.alignment_threshold * self.float_distance_factor
    }
}
