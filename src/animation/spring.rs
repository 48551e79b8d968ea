//! Damped spring with a closed-form solution.
//!
//! Position after retargeting at `t = 0` from `from` with velocity `v0`:
//!
//! ```text
//! underdamped (c² < 4mk):
//!   a  = -c / 2m
//!   w  = sqrt(4mk - c²) / 2m
//!   B  = (c·Δ - 2m·v0) / sqrt(4mk - c²)
//!   x(t) = to - e^(a·t) · (Δ·cos(w·t) + B·sin(w·t))
//!
//! critically damped and overdamped:
//!   a  = -sqrt(k / m)
//!   L  = -a·Δ - v0
//!   x(t) = to - (Δ + L·t) · e^(a·t)
//! ```
//!
//! where `Δ = to - from`.

/// Threshold under which both displacement and velocity count as at rest.
const REST_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    /// Snappy hover/press feel with a small overshoot.
    pub const SNAPPY: Self = Self {
        stiffness: 400.0,
        damping: 30.0,
        mass: 1.0,
    };

    pub fn is_underdamped(&self) -> bool {
        self.damping * self.damping < 4.0 * self.mass * self.stiffness
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SNAPPY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    params: SpringParams,
    from: f32,
    to: f32,
    initial_velocity: f32,
    started_at: f64,
}

impl Spring {
    /// Creates a spring resting at `value`.
    pub fn new(value: f32, params: SpringParams) -> Self {
        Self {
            params,
            from: value,
            to: value,
            initial_velocity: 0.0,
            started_at: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Retargets the spring at time `now`, carrying over position and velocity.
    ///
    /// Returns `false` and leaves the motion untouched if `to` is already the target.
    pub fn set_target(&mut self, to: f32, now: f64) -> bool {
        if to == self.to {
            return false;
        }
        let position = self.value(now);
        let velocity = self.velocity(now);
        self.from = position;
        self.initial_velocity = velocity;
        self.to = to;
        self.started_at = now;
        true
    }

    /// Position at time `now`.
    pub fn value(&self, now: f64) -> f32 {
        if self.at_rest(now) {
            return self.to;
        }
        self.raw_value(self.elapsed(now))
    }

    /// Velocity at time `now`, in units per second.
    pub fn velocity(&self, now: f64) -> f32 {
        if self.at_rest(now) {
            return 0.0;
        }
        self.raw_velocity(self.elapsed(now))
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.at_rest(now)
    }

    fn elapsed(&self, now: f64) -> f32 {
        (now - self.started_at).max(0.0) as f32
    }

    fn at_rest(&self, now: f64) -> bool {
        if self.from == self.to && self.initial_velocity == 0.0 {
            return true;
        }
        let t = self.elapsed(now);
        (self.raw_value(t) - self.to).abs() < REST_EPSILON
            && self.raw_velocity(t).abs() < REST_EPSILON
    }

    fn raw_value(&self, t: f32) -> f32 {
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let delta = self.to - self.from;
        let v0 = self.initial_velocity;

        if self.params.is_underdamped() {
            let root = (4.0 * mass * stiffness - damping * damping).sqrt();
            let decay = -damping / (2.0 * mass);
            let freq = root / (2.0 * mass);
            let coeff = (damping * delta - 2.0 * mass * v0) / root;
            self.to - (decay * t).exp() * (delta * (freq * t).cos() + coeff * (freq * t).sin())
        } else {
            let decay = -(stiffness / mass).sqrt();
            let leftover = -decay * delta - v0;
            self.to - (delta + leftover * t) * (decay * t).exp()
        }
    }

    fn raw_velocity(&self, t: f32) -> f32 {
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let delta = self.to - self.from;
        let v0 = self.initial_velocity;

        if self.params.is_underdamped() {
            let root = (4.0 * mass * stiffness - damping * damping).sqrt();
            let decay = -damping / (2.0 * mass);
            let freq = root / (2.0 * mass);
            let coeff = (damping * delta - 2.0 * mass * v0) / root;
            let (sin, cos) = (freq * t).sin_cos();
            -(decay * t).exp()
                * ((decay * delta + coeff * freq) * cos + (decay * coeff - delta * freq) * sin)
        } else {
            let decay = -(stiffness / mass).sqrt();
            let leftover = -decay * delta - v0;
            -(decay * t).exp() * (leftover + decay * (delta + leftover * t))
        }
    }
}
