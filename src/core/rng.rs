//! Random source used by every probabilistic combat decision.
//!
//! Production code passes any `rand::Rng` (thread rng, `ChaCha8Rng`). Tests
//! that need exact outcomes use [`ScriptedRng`], which replays queued draws.

use rand::Rng;
use std::collections::VecDeque;

/// Draws consumed by the combat engine.
pub trait CombatRng {
    /// Uniform integer in `lo..=hi`.
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn roll_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// True when a unit draw lands strictly below `chance`.
    fn roll_chance(&mut self, chance: f64) -> bool {
        self.roll_unit() < chance
    }
}

impl<R: Rng> CombatRng for R {
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.gen_range(lo..=hi)
    }

    fn roll_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Unit draw returned once the scripted queue is empty.
pub const FALLBACK_UNIT: f64 = 0.99;

/// Replays injected draws in order.
///
/// Integer draws are clamped into the requested range. When a queue runs dry,
/// integer draws fall back to the low bound and unit draws to
/// [`FALLBACK_UNIT`], which fails every ordinary chance check.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self {
            ints: VecDeque::new(),
            units: VecDeque::new(),
        }
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    pub fn push_unit(&mut self, value: f64) {
        self.units.push_back(value);
    }

    /// Number of queued draws not yet consumed (ints, units).
    pub fn remaining(&self) -> (usize, usize) {
        (self.ints.len(), self.units.len())
    }
}

impl CombatRng for ScriptedRng {
    fn roll_range(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.ints.pop_front().unwrap_or(lo).clamp(lo, hi)
    }

    fn roll_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(FALLBACK_UNIT)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.ints.pop_front().unwrap_or(0) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scripted_rng_replays_in_order() {
        let mut rng = ScriptedRng::new().with_ints([4, 2]).with_units([0.4, 0.6]);
        assert_eq!(rng.roll_range(1, 6), 4);
        assert_eq!(rng.roll_range(1, 6), 2);
        assert!(rng.roll_chance(0.5));
        assert!(!rng.roll_chance(0.5));
    }

    #[test]
    fn test_scripted_rng_clamps_and_falls_back() {
        let mut rng = ScriptedRng::new().with_ints([99]);
        assert_eq!(rng.roll_range(1, 6), 6);
        assert_eq!(rng.roll_range(1, 6), 1);
        assert!(!rng.roll_chance(0.9));
    }

    #[test]
    fn test_fixed_range_consumes_no_draw() {
        let mut rng = ScriptedRng::new().with_ints([3]);
        assert_eq!(rng.roll_range(7, 7), 7);
        assert_eq!(rng.remaining(), (1, 0));
    }

    #[test]
    fn test_seeded_rng_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..500 {
            let v = rng.roll_range(1, 5);
            assert!((1..=5).contains(&v));
            let u = rng.roll_unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.pick_index(3) < 3);
        }
    }
}
