use super::spring::{Spring, SpringParams};

/// Upward translation while hovered, in points (negative is up).
pub const HOVER_LIFT: f32 = -1.5;
/// Scale applied while pressed.
pub const PRESS_SCALE: f32 = 0.985;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub hovered: bool,
    pub pressed: bool,
}

impl PointerState {
    pub const IDLE: Self = Self {
        hovered: false,
        pressed: false,
    };
    pub const HOVERED: Self = Self {
        hovered: true,
        pressed: false,
    };
    pub const PRESSED: Self = Self {
        hovered: true,
        pressed: true,
    };

    /// `(lift, scale, glow)` this state settles to.
    pub fn targets(self) -> (f32, f32, f32) {
        let glow = if self.hovered { 1.0 } else { 0.0 };
        if self.pressed {
            (0.0, PRESS_SCALE, glow)
        } else if self.hovered {
            (HOVER_LIFT, 1.0, glow)
        } else {
            (0.0, 1.0, glow)
        }
    }
}

/// Spring-eased hover/press response of one button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSprings {
    lift: Spring,
    scale: Spring,
    glow: Spring,
    state: PointerState,
}

/// Sampled hover/press values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionFrame {
    /// Vertical translation in points
    pub lift: f32,
    pub scale: f32,
    /// Glow strength, `0` off and `1` full
    pub glow: f32,
}

impl Default for InteractionSprings {
    fn default() -> Self {
        Self::new(SpringParams::SNAPPY)
    }
}

impl InteractionSprings {
    pub fn new(params: SpringParams) -> Self {
        Self {
            lift: Spring::new(0.0, params),
            scale: Spring::new(1.0, params),
            glow: Spring::new(0.0, params),
            state: PointerState::IDLE,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Retargets the springs for `state`. Repeating the current state changes nothing.
    pub fn update(&mut self, state: PointerState, now: f64) -> bool {
        if state == self.state {
            return false;
        }
        self.state = state;
        let (lift, scale, glow) = state.targets();
        let changed = [
            self.lift.set_target(lift, now),
            self.scale.set_target(scale, now),
            self.glow.set_target(glow, now),
        ];
        changed.contains(&true)
    }

    pub fn sample(&self, now: f64) -> InteractionFrame {
        InteractionFrame {
            lift: self.lift.value(now),
            scale: self.scale.value(now),
            glow: self.glow.value(now).clamp(0.0, 1.0),
        }
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.lift.is_settled(now) && self.scale.is_settled(now) && self.glow.is_settled(now)
    }
}
