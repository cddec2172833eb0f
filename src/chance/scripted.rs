//! Scripted chance source for pinning exact counter trajectories in tests.

use super::ChanceSource;
use std::collections::VecDeque;

/// Replays a fixed list of outcomes, ignoring the requested probability.
///
/// Once the script runs out every roll returns the fallback (default `false`).
#[derive(Debug, Clone, Default)]
pub struct ScriptedChance {
    outcomes: VecDeque<bool>,
    fallback: bool,
    rolls: usize,
}

impl ScriptedChance {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            fallback: false,
            rolls: 0,
        }
    }

    /// Every roll succeeds.
    pub fn always() -> Self {
        Self::new([]).with_fallback(true)
    }

    /// Every roll fails.
    pub fn never() -> Self {
        Self::new([])
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of rolls taken so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }
}

impl ChanceSource for ScriptedChance {
    fn roll(&mut self, _probability: f64) -> bool {
        self.rolls += 1;
        self.outcomes.pop_front().unwrap_or(self.fallback)
    }
}
