/// Seconds for one full turn of the border gradient.
pub const ROTATION_PERIOD: f64 = 12.0;

/// Linear, endlessly repeating 0→360° sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRotation {
    period: f64,
}

impl Default for BorderRotation {
    fn default() -> Self {
        Self {
            period: ROTATION_PERIOD,
        }
    }
}

impl BorderRotation {
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Angle in degrees after `elapsed` seconds, always in `[0, 360)`.
    pub fn angle_at(&self, elapsed: f64) -> f32 {
        let phase = elapsed.rem_euclid(self.period) / self.period;
        let angle = (phase * 360.0) as f32;
        if angle >= 360.0 {
            0.0
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_linearly() {
        let r = BorderRotation::default();
        assert_eq!(r.angle_at(0.0), 0.0);
        assert!((r.angle_at(3.0) - 90.0).abs() < 1e-4);
        assert!((r.angle_at(6.0) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn is_periodic() {
        let r = BorderRotation::default();
        for i in 0..240 {
            let t = f64::from(i) * 0.173;
            assert!((r.angle_at(t) - r.angle_at(t + ROTATION_PERIOD)).abs() < 1e-3);
        }
    }

    #[test]
    fn stays_in_range() {
        let r = BorderRotation::default();
        for t in [0.0, 11.999_999_9, 12.0, 1e6, -3.0, 86_400.5] {
            let a = r.angle_at(t);
            assert!((0.0..360.0).contains(&a), "{a} out of range for t={t}");
        }
    }
}
