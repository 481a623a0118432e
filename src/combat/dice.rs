//! Roll sources and inclusive roll ranges
//!
//! Every random number the engine draws goes through [`Roller`], so combat
//! and dungeon generation are reproducible with a seeded `StdRng` or fully
//! scripted with [`ScriptedRolls`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform inclusive integer rolls
pub trait Roller {
    /// Roll a uniform integer in `low..=high`
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Deterministic generator for a given seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are returned verbatim, even when outside the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    script: Vec<i32>,
    queue: VecDeque<i32>,
    drawn: usize,
}

impl ScriptedRolls {
    /// Cycle through `values` forever
    pub fn cycle(values: impl Into<Vec<i32>>) -> Self {
        let script = values.into();
        Self {
            queue: script.iter().copied().collect(),
            script,
            drawn: 0,
        }
    }

    /// Number of rolls handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Roller for ScriptedRolls {
    fn roll(&mut self, low: i32, _high: i32) -> i32 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        self.drawn += 1;
        // An empty script degenerates to the range minimum
        self.queue.pop_front().unwrap_or(low)
    }
}

/// Inclusive damage range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRange {
    pub low: i32,
    pub high: i32,
}

impl RollRange {
    /// Create a new range
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Range centered on `value` with the given spread either side
    pub fn around(value: u32, spread: i32) -> Self {
        let center = i32::try_from(value).unwrap_or(i32::MAX);
        Self::new(center.saturating_sub(spread), center.saturating_add(spread))
    }

    /// Roll and floor the result at zero
    pub fn roll(&self, rng: &mut impl Roller) -> u32 {
        rng.roll(self.low, self.high).max(0) as u32
    }

    /// Smallest possible damage
    pub fn min(&self) -> u32 {
        self.low.max(0) as u32
    }

    /// Largest possible damage
    pub fn max(&self) -> u32 {
        self.high.max(0) as u32
    }
}

impl std::fmt::Display for RollRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
