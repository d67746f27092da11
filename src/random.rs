//! Pluggable randomness.
//!
//! Shuffling and template selection go through [`RandomSource`] so callers
//! can swap `thread_rng()` for a seeded or scripted source.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform indices.
pub trait RandomSource {
    /// A uniformly distributed index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl RandomSource for Box<dyn RandomSource> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Deterministic source replaying a fixed sequence, wrapping around at the
/// end. Each value is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, position: 0 }
    }

    /// Always answers 0, which makes [`shuffle`] a fixed rotation and
    /// [`pick`] return the first element.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
}

/// Uniform pick, `None` for an empty slice.
pub fn pick<'a, T, R: RandomSource + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}
