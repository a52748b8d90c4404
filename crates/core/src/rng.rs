//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization used by modern falling-block games.
//! Each bag holds one of each shape, shuffled; pieces are drawn from the back
//! until the bag is empty, then a fresh bag is generated.
//!
//! The generator is an explicit value owned by the engine. Seed it from OS
//! entropy for play, or with a fixed seed for deterministic tests.

use std::ops::Range;

use arrayvec::ArrayVec;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ShapeKind, SHAPE_COUNT};

/// Uniform random helpers over a seeded generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Seed from the operating system's entropy source
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform value in the half-open range `[start, end)`.
    ///
    /// Panics if the range is empty.
    pub fn int_in_range<T>(&mut self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(range)
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.int_in_range(0..i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// 7-bag piece queue, consumed from the back
#[derive(Debug, Clone, Default)]
pub struct PieceBag {
    bag: ArrayVec<ShapeKind, SHAPE_COUNT>,
}

impl PieceBag {
    /// Create an empty bag; the first draw fills it
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle a fresh set of all kinds, keep all but the last in the bag and
    /// return the last one
    fn refill(&mut self, rng: &mut Randomizer) -> ShapeKind {
        let mut kinds = ShapeKind::ALL;
        rng.shuffle(&mut kinds);
        let [rest @ .., last] = kinds;
        self.bag.clear();
        self.bag.extend(rest);
        last
    }

    /// Draw the next kind, refilling when the bag is empty
    pub fn draw(&mut self, rng: &mut Randomizer) -> ShapeKind {
        match self.bag.pop() {
            Some(kind) => kind,
            None => self.refill(rng),
        }
    }

    /// Kinds left before the next refill, in draw order reversed
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag
    }
}
