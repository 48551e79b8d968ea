use super::jitter::{GlitchJitter, JitterCursor};
use super::motion::{MotionValue, MotionVec2};
use super::rotation::BorderRotation;
use super::scheduler::AnimationLoop;

/// Drives the border gradient angle.
pub struct RotationLoop {
    rotation: BorderRotation,
    angle: MotionValue,
}

impl RotationLoop {
    pub fn new(rotation: BorderRotation, angle: MotionValue) -> Self {
        Self { rotation, angle }
    }
}

impl AnimationLoop for RotationLoop {
    fn frame(&mut self, elapsed: f64) {
        self.angle.set(self.rotation.angle_at(elapsed));
    }
}

/// Drives the offset of one glitch layer.
pub struct JitterLoop {
    cursor: JitterCursor,
    offset: MotionVec2,
}

impl JitterLoop {
    pub fn new(jitter: GlitchJitter, offset: MotionVec2) -> Self {
        Self {
            cursor: JitterCursor::new(jitter),
            offset,
        }
    }
}

impl AnimationLoop for JitterLoop {
    fn frame(&mut self, elapsed: f64) {
        self.offset.set(self.cursor.offset_at(elapsed));
    }
}
