/// Easing curves used by the interaction timelines.
///
/// Every curve maps 0 to 0 and 1 to 1; `BackOut` overshoots in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, the default for short state tweens.
    Power1Out,
    /// Cubic ease-in-out.
    Power2InOut,
    /// Quartic ease-out.
    Power3Out,
    /// Overshooting ease-out; the parameter is the overshoot amount.
    BackOut(f32),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power1Out
    }
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

