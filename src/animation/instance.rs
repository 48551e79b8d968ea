use egui::Vec2;

use super::interaction::{InteractionFrame, InteractionSprings, PointerState};
use super::jitter::GlitchJitter;
use super::loops::{JitterLoop, RotationLoop};
use super::motion::{MotionValue, MotionVec2};
use super::rotation::BorderRotation;
use super::scheduler::{FrameScheduler, LoopHandle};

/// Jitter intensity of the glow-colored and accent-colored glitch layers.
pub const GLITCH_INTENSITIES: [f32; 2] = [1.0, 1.3];

/// Everything one mounted button animates, sampled for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Border gradient start angle in degrees
    pub border_angle: f32,
    pub glitch_offsets: [Vec2; 2],
    pub interaction: InteractionFrame,
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self {
            border_angle: 0.0,
            glitch_offsets: [Vec2::ZERO; 2],
            interaction: InteractionFrame {
                lift: 0.0,
                scale: 1.0,
                glow: 0.0,
            },
        }
    }
}

/// Read-only view on the motion values of a button, valid after it unmounts.
#[derive(Debug, Clone)]
pub struct AnimationProbe {
    pub angle: MotionValue,
    pub glitch: [MotionVec2; 2],
}

impl AnimationProbe {
    /// Total writes across all three loops.
    pub fn writes(&self) -> u64 {
        self.angle.writes() + self.glitch.iter().map(MotionVec2::writes).sum::<u64>()
    }
}

/// Animation resources owned by one button instance.
///
/// Created on mount. Dropping it stops the border loop and both glitch loops.
pub struct ButtonAnimations {
    angle: MotionValue,
    glitch: [MotionVec2; 2],
    handles: Vec<LoopHandle>,
    interaction: InteractionSprings,
}

impl std::fmt::Debug for ButtonAnimations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonAnimations")
            .field("angle", &self.angle)
            .field("loops_running", &self.loops_running())
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}

impl ButtonAnimations {
    /// Starts the rotation loop and both glitch loops on `scheduler`.
    ///
    /// `seed` drives the glitch randomness; equal seeds replay equal jitter.
    pub fn start(scheduler: &FrameScheduler, seed: u64) -> Self {
        let angle = MotionValue::new(0.0);
        let glitch = [MotionVec2::default(), MotionVec2::default()];

        let mut handles = Vec::with_capacity(3);
        handles.push(scheduler.start(RotationLoop::new(
            BorderRotation::default(),
            angle.clone(),
        )));
        for (layer, (offset, intensity)) in glitch.iter().zip(GLITCH_INTENSITIES).enumerate() {
            let jitter = GlitchJitter::new(layer_seed(seed, layer), intensity);
            handles.push(scheduler.start(JitterLoop::new(jitter, offset.clone())));
        }

        Self {
            angle,
            glitch,
            handles,
            interaction: InteractionSprings::default(),
        }
    }

    /// Number of this instance's loops that are still scheduled.
    pub fn loops_running(&self) -> usize {
        self.handles.iter().filter(|h| h.is_running()).count()
    }

    pub fn probe(&self) -> AnimationProbe {
        AnimationProbe {
            angle: self.angle.clone(),
            glitch: self.glitch.clone(),
        }
    }

    pub fn set_pointer(&mut self, state: PointerState, now: f64) -> bool {
        self.interaction.update(state, now)
    }

    pub fn sample(&self, now: f64) -> AnimationFrame {
        AnimationFrame {
            border_angle: self.angle.get(),
            glitch_offsets: [self.glitch[0].get(), self.glitch[1].get()],
            interaction: self.interaction.sample(now),
        }
    }

    /// Stops every loop. Safe to call more than once.
    pub fn stop(&mut self) {
        for handle in &mut self.handles {
            handle.stop();
        }
    }
}

impl Drop for ButtonAnimations {
    fn drop(&mut self) {
        self.stop();
    }
}

fn layer_seed(seed: u64, layer: usize) -> u64 {
    seed.rotate_left(17) ^ (layer as u64 + 1).wrapping_mul(0xa076_1d64_78bd_642f)
}
