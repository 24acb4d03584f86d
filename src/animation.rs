//! Keyframe capture and playback for the jointed dog model, plus the
//! procedural motion that runs beside it.

pub use interpolation::{advance, compute_increments, Increments};
pub use keyframes::{KeyFrame, PoseStore};
pub use oscillator::{Direction, Spinner, TriangleOscillator};
pub use playback::{PlaybackController, PlaybackMode, PlaybackState};
pub use pose::Pose;
pub use rig::{Axis, Drive, Part, PartSpec, Rig};
pub use state::{AnimationCommand, AnimationState};

mod interpolation;
mod keyframes;
mod oscillator;
mod playback;
mod pose;
mod rig;
mod state;

/// Tolerance for comparing an interpolated pose against its target after
/// a full pair of steps.
pub const POSE_EPSILON: f32 = 1e-3;
