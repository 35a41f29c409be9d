//! Viewport and center-point geometry.
//!
//! Element positions are offsets from the viewport center (the elements are
//! anchored at 50%/50% and translated), so on-screen centers are the viewport
//! center plus the offset. Scale and blur never move a center.

use glam::Vec2;

/// Visible page area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Screen-space position of something offset from the viewport center.
    #[inline]
    pub fn to_screen(&self, offset: Vec2) -> Vec2 {
        self.center() + offset
    }
}

/// Geometry of one snap: where the pair meets and how far each must travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPlan {
    pub distance: f32,
    pub midpoint: Vec2,
    pub left_offset: Vec2,
    pub right_offset: Vec2,
}

impl SnapPlan {
    pub fn between(left_center: Vec2, right_center: Vec2) -> Self {
        let midpoint = (left_center + right_center) * 0.5;
        Self {
            distance: left_center.distance(right_center),
            midpoint,
            left_offset: midpoint - left_center,
            right_offset: midpoint - right_center,
        }
    }
}
