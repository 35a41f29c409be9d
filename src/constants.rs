// Document hooks and style values for the browser frontend.
//
// Selectors name the six surfaces the page markup must provide; the class
// names are the hooks page stylesheets key their transitions on.

// Surface selectors
pub const CONTAINER_SELECTOR: &str = "#perception-container";
pub const LEFT_SELECTOR: &str = ".perception-left";
pub const RIGHT_SELECTOR: &str = ".perception-right";
pub const AFFORDANCE_SELECTOR: &str = ".enter-button";
pub const MESSAGE_SELECTOR: &str = ".welcome-message";
pub const CONTENT_SELECTOR: &str = ".hidden-content";

// Class toggles
pub const AFFORDANCE_ACTIVE_CLASS: &str = "active";
pub const CONTENT_VISIBLE_CLASS: &str = "visible";

// Stacking for the enter button, above everything the page draws
pub const AFFORDANCE_Z_INDEX: i32 = 10000;

// Window property external page code polls while the reveal runs
pub const ANIMATION_FLAG_PROPERTY: &str = "animationInProgress";

// Frame dt clamp (seconds); a backgrounded tab resumes without a jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
