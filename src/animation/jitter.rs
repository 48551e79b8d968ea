use egui::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::easing::{Ease, Keyframes};

/// Shortest jitter cycle in seconds.
pub const BASE_CYCLE: f64 = 0.8;
/// Random extra length added to every cycle, in seconds.
pub const CYCLE_SPREAD: f64 = 0.6;
/// Horizontal amplitude per unit of intensity, in points.
pub const AMPLITUDE_X: f32 = 2.0;
/// Vertical amplitude per unit of intensity, in points.
pub const AMPLITUDE_Y: f32 = 1.5;
/// Offsets are re-rolled this many times per second.
pub const FRAME_RATE: f64 = 60.0;

const CURVE: Keyframes<'static> = Keyframes::new(&[0.0, 1.0, 0.0, -1.0, 0.0], Ease::InOut);

// Domain tags so cycle and frame draws never share a stream.
const CYCLE_STREAM: u64 = 0x6379_636c_6500_0000;
const FRAME_STREAM: u64 = 0x6672_616d_6500_0000;

fn splitmix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

fn rng_for(seed: u64, stream: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(splitmix(seed ^ splitmix(stream ^ index)))
}

/// Positional jitter of one glitch layer as a pure function of seed and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchJitter {
    seed: u64,
    intensity: f32,
}

impl GlitchJitter {
    pub fn new(seed: u64, intensity: f32) -> Self {
        Self { seed, intensity }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Largest absolute offset on each axis.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(AMPLITUDE_X * self.intensity, AMPLITUDE_Y * self.intensity)
    }

    /// Length of cycle number `cycle`, in `[BASE_CYCLE, BASE_CYCLE + CYCLE_SPREAD)`.
    pub fn cycle_duration(&self, cycle: u64) -> f64 {
        let r: f64 = rng_for(self.seed, CYCLE_STREAM, cycle).random();
        BASE_CYCLE + r * CYCLE_SPREAD
    }

    /// Offset after `elapsed` seconds. Walks cycles from zero; loops use [`JitterCursor`].
    pub fn offset_at(&self, elapsed: f64) -> Vec2 {
        let mut cursor = JitterCursor::new(*self);
        cursor.offset_at(elapsed)
    }

    fn offset_in_cycle(&self, elapsed: f64, cycle_start: f64, cycle_len: f64) -> Vec2 {
        let progress = ((elapsed - cycle_start) / cycle_len) as f32;
        let wave = CURVE.sample(progress);

        let frame = (elapsed.max(0.0) * FRAME_RATE).floor() as u64;
        let mut rng = rng_for(self.seed, FRAME_STREAM, frame);
        let dx = (rng.random::<f32>() * 2.0 - 1.0) * AMPLITUDE_X * self.intensity;
        let dy = (rng.random::<f32>() * 2.0 - 1.0) * AMPLITUDE_Y * self.intensity;

        Vec2::new(dx * wave, dy * wave)
    }
}

/// Incremental cycle lookup for monotonically increasing time.
///
/// Produces the same offsets as [`GlitchJitter::offset_at`] without re-walking
/// every past cycle on each frame.
#[derive(Debug, Clone, Copy)]
pub struct JitterCursor {
    jitter: GlitchJitter,
    cycle: u64,
    cycle_start: f64,
    cycle_len: f64,
}

impl JitterCursor {
    pub fn new(jitter: GlitchJitter) -> Self {
        Self {
            jitter,
            cycle: 0,
            cycle_start: 0.0,
            cycle_len: jitter.cycle_duration(0),
        }
    }

    pub fn jitter(&self) -> &GlitchJitter {
        &self.jitter
    }

    /// Index of the cycle the cursor currently sits in.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn offset_at(&mut self, elapsed: f64) -> Vec2 {
        let elapsed = elapsed.max(0.0);
        if elapsed < self.cycle_start {
            *self = Self::new(self.jitter);
        }
        while elapsed >= self.cycle_start + self.cycle_len {
            self.cycle_start += self.cycle_len;
            self.cycle += 1;
            self.cycle_len = self.jitter.cycle_duration(self.cycle);
        }
        self.jitter
            .offset_in_cycle(elapsed, self.cycle_start, self.cycle_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_bounded() {
        for intensity in [1.0, 1.3] {
            let j = GlitchJitter::new(42, intensity);
            let bounds = j.bounds();
            let mut cursor = JitterCursor::new(j);
            for i in 0..2_000 {
                let off = cursor.offset_at(f64::from(i) / 97.0);
                assert!(off.x.abs() <= bounds.x + 1e-5);
                assert!(off.y.abs() <= bounds.y + 1e-5);
            }
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let a = GlitchJitter::new(7, 1.0);
        let b = GlitchJitter::new(7, 1.0);
        for i in 0..300 {
            let t = f64::from(i) * 0.037;
            assert_eq!(a.offset_at(t), b.offset_at(t));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = GlitchJitter::new(1, 1.0);
        let b = GlitchJitter::new(2, 1.0);
        let differs = (1..300).any(|i| {
            let t = f64::from(i) * 0.037;
            a.offset_at(t) != b.offset_at(t)
        });
        assert!(differs);
    }

    #[test]
    fn cursor_matches_pure_function() {
        let j = GlitchJitter::new(99, 1.3);
        let mut cursor = JitterCursor::new(j);
        for i in 0..500 {
            let t = f64::from(i) * 0.021;
            assert_eq!(cursor.offset_at(t), j.offset_at(t));
        }
        assert!(cursor.cycle() > 0);
    }

    #[test]
    fn cursor_rewinds_when_time_goes_back() {
        let j = GlitchJitter::new(5, 1.0);
        let mut cursor = JitterCursor::new(j);
        cursor.offset_at(10.0);
        assert_eq!(cursor.offset_at(0.3), j.offset_at(0.3));
    }

    #[test]
    fn cycle_durations_vary_within_range() {
        let j = GlitchJitter::new(3, 1.0);
        let durations: Vec<f64> = (0..32).map(|c| j.cycle_duration(c)).collect();
        for d in &durations {
            assert!((BASE_CYCLE..BASE_CYCLE + CYCLE_SPREAD).contains(d));
        }
        assert!(durations.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn rests_at_cycle_start() {
        let j = GlitchJitter::new(11, 1.0);
        assert_eq!(j.offset_at(0.0), Vec2::ZERO);
    }
}
