//! RNG module - deterministic random source for piece dealing
//!
//! A seeded LCG keeps whole sessions reproducible: the same seed deals the same
//! shapes and colours in the same order, which the tests and saved games rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Resume from a state previously read with [`SimpleRng::state`]
    pub fn from_state(state: u32) -> Self {
        // Zero is a valid mid-sequence state; only seeds are remapped.
        Self { state }
    }

    /// Current internal state (persist this to resume the exact sequence)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() >> 16) as u64 * max as u64 >> 16) as u32
    }

    /// Random index into a collection of `len` items
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        self.next_range(len as u32) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
