use egui::emath::easing;

/// Easing curve applied to normalized progress `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    InOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => easing::linear(t),
            Ease::InOut => easing::cubic_in_out(t),
        }
    }
}

/// Evenly spaced keyframes, each segment eased independently.
#[derive(Debug, Clone, Copy)]
pub struct Keyframes<'a> {
    values: &'a [f32],
    ease: Ease,
}

impl<'a> Keyframes<'a> {
    pub const fn new(values: &'a [f32], ease: Ease) -> Self {
        Self { values, ease }
    }

    /// Samples the curve at cycle progress `progress` in `[0, 1]`.
    pub fn sample(&self, progress: f32) -> f32 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let segments = (values.len() - 1) as f32;
                let scaled = progress.clamp(0.0, 1.0) * segments;
                let idx = (scaled.floor() as usize).min(values.len() - 2);
                let local = self.ease.apply(scaled - idx as f32);
                values[idx] + (values[idx + 1] - values[idx]) * local
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAVE: Keyframes<'static> = Keyframes::new(&[0.0, 1.0, 0.0, -1.0, 0.0], Ease::InOut);

    #[test]
    fn keyframes_hit_their_values() {
        assert_eq!(WAVE.sample(0.0), 0.0);
        assert!((WAVE.sample(0.25) - 1.0).abs() < 1e-6);
        assert!(WAVE.sample(0.5).abs() < 1e-6);
        assert!((WAVE.sample(0.75) + 1.0).abs() < 1e-6);
        assert!(WAVE.sample(1.0).abs() < 1e-6);
    }

    #[test]
    fn keyframes_stay_in_range() {
        for i in 0..=100 {
            let v = WAVE.sample(i as f32 / 100.0);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn ease_endpoints() {
        for ease in [Ease::Linear, Ease::InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
        assert_eq!(Ease::Linear.apply(0.3), 0.3);
    }
}
