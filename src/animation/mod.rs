//! Frame-driven animation runtime.
//!
//! [`FrameScheduler`] owns looping animations and advances them with host
//! time. A [`LoopHandle`] keeps a loop alive; dropping it cancels the loop.
//! [`ButtonAnimations`] bundles the three loops of one button together with
//! its hover/press springs, and [`Animator`] mounts and unmounts those
//! bundles as buttons appear in or disappear from an egui context.

mod animator;
mod easing;
mod instance;
mod interaction;
mod jitter;
mod loops;
mod motion;
mod rotation;
mod scheduler;
mod spring;

pub use animator::{begin_frame, with_animator, Animator};
pub use easing::{Ease, Keyframes};
pub use instance::{AnimationFrame, AnimationProbe, ButtonAnimations, GLITCH_INTENSITIES};
pub use interaction::{InteractionFrame, InteractionSprings, PointerState, HOVER_LIFT, PRESS_SCALE};
pub use jitter::{GlitchJitter, JitterCursor};
pub use loops::{JitterLoop, RotationLoop};
pub use motion::{MotionValue, MotionVec2};
pub use rotation::{BorderRotation, ROTATION_PERIOD};
pub use scheduler::{AnimationLoop, FrameScheduler, LoopHandle, LoopId};
pub use spring::{Spring, SpringParams};
