// ABOUTME: Injectable random source for reward draws and side quest selection
// ABOUTME: Blanket impl for every rand::Rng plus a scripted source for fixed sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::Rng;

/// Source of the generator's nondeterminism
///
/// Any `rand::Rng` works (`rand::thread_rng()`, a seeded `ChaCha8Rng`);
/// `ScriptedRandom` replays a fixed sequence.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// `true` with probability `chance`
    fn chance(&mut self, chance: f64) -> bool {
        self.next_unit() < chance
    }
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of unit values, cycling when exhausted
///
/// # Examples
///
/// ```rust
/// use pierre_quest_intelligence::random::{RandomSource, ScriptedRandom};
///
/// let mut source = ScriptedRandom::new(vec![0.0, 0.99]);
/// assert_eq!(source.next_index(5), 0);
/// assert_eq!(source.next_index(5), 4);
/// assert_eq!(source.next_index(5), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `values`; each is clamped into `[0, 1)`
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|value| if value.is_finite() { value.clamp(0.0, 0.999_999) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Source that always yields `value`
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}
