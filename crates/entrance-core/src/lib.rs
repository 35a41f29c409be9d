pub mod constants;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod params;
pub mod placement;
pub mod scene;
pub mod session;
pub mod timeline;

pub use ease::Ease;
pub use error::SetupError;
pub use geometry::{SnapPlan, Viewport};
pub use gesture::VelocityTracker;
pub use params::Params;
pub use placement::Placement;
pub use scene::{Node, Property, Scene, Side, Target};
pub use session::{Cue, DragState, InteractionSession};
pub use timeline::{Cues, Motion, Timeline, Tween};
