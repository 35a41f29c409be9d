// Shared interaction tuning constants used by the session and the web frontend.

// Element sizing
pub const REST_SCALE: f32 = 0.8; // idle element size
pub const DRAG_SCALE: f32 = 0.85; // element size while a pointer holds it

// Alignment
pub const ALIGNMENT_THRESHOLD: f32 = 120.0; // center-to-center px that counts as aligned
pub const BLUR_PX: f32 = 1.0; // filter blur applied to an aligned pair

// Placement
pub const SAFE_ZONE_FRACTION: f32 = 0.3; // candidate spread, ±half of this around center
pub const MIN_SEPARATION_FRACTION: f32 = 0.3; // of min(viewport width, height)
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
pub const FALLBACK_OFFSET_FRACTION: f32 = 0.2; // of viewport width, left/right of center

// Idle float
pub const FLOAT_DISTANCE_FACTOR: f32 = 1.5; // multiples of ALIGNMENT_THRESHOLD
pub const FLOAT_TWEEN_SEC: f32 = 0.1;

// Inertial throw
pub const THROW_DECAY_PER_SEC: f32 = 4.0; // exponential velocity decay rate
pub const THROW_STOP_SPEED: f32 = 20.0; // px/s at which a throw is considered finished
pub const THROW_RELEASE_SPEED: f32 = 60.0; // slower releases settle in place
pub const THROW_MAX_SPEED: f32 = 4000.0; // px/s clamp on release velocity
pub const VELOCITY_WINDOW_SEC: f64 = 0.1; // pointer history used for release velocity

// Tween durations (seconds)
pub const PRESS_SCALE_SEC: f32 = 0.2;
pub const SETTLE_SCALE_SEC: f32 = 0.2;
pub const SNAP_SETTLE_SEC: f32 = 0.3;
pub const SNAP_TRANSLATE_SEC: f32 = 0.4;
pub const AFFORDANCE_ENTRANCE_SEC: f32 = 0.3;
pub const REVERT_SEC: f32 = 0.3;
pub const BACK_OUT_OVERSHOOT: f32 = 1.7;

// Reveal commit phases (seconds)
pub const REVEAL_FADE_OUT_SEC: f32 = 0.3;
pub const REVEAL_MESSAGE_IN_SEC: f32 = 1.2;
pub const REVEAL_HOLD_SEC: f32 = 1.0;
pub const REVEAL_MESSAGE_OUT_SEC: f32 = 1.0;
pub const REVEAL_CONTENT_IN_SEC: f32 = 0.4;
