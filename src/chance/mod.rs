//! Random source abstraction for the stochastic parts of the surge simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub mod scripted;

pub use scripted::ScriptedChance;

/// Source of yes/no rolls with a given success probability.
///
/// The simulation owns exactly one source and rolls it once per tick.
pub trait ChanceSource: Send + fmt::Debug {
    /// Roll once.
    ///
    /// # Arguments
    /// * `probability` - Success chance in `[0.0, 1.0]`
    ///
    /// # Returns
    /// `true` on success
    fn roll(&mut self, probability: f64) -> bool;
}

/// `StdRng`-backed source, either entropy-seeded or pinned to a seed.
pub struct SeededChance {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededChance {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Same seed, same roll sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl fmt::Debug for SeededChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededChance")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl ChanceSource for SeededChance {
    fn roll(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededChance::seeded(42);
        let mut b = SeededChance::seeded(42);
        let rolls_a: Vec<bool> = (0..64).map(|_| a.roll(0.3)).collect();
        let rolls_b: Vec<bool> = (0..64).map(|_| b.roll(0.3)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_certain_and_impossible_rolls() {
        let mut chance = SeededChance::seeded(7);
        assert!((0..32).all(|_| chance.roll(1.0)));
        assert!((0..32).all(|_| !chance.roll(0.0)));
    }

    #[test]
    fn test_out_of_range_probability_is_clamped() {
        let mut chance = SeededChance::seeded(7);
        assert!(chance.roll(1.5));
        assert!(!chance.roll(-0.5));
        assert!(!chance.roll(f64::NAN));
    }

    #[test]
    fn test_debug_shows_seed() {
        let chance = SeededChance::seeded(9);
        assert!(format!("{:?}", chance).contains("Some(9)"));
    }
}
