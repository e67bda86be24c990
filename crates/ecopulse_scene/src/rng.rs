//! Deterministic pseudo-random source for particle spawning
//!
//! The particle field only needs cheap visual randomness, not statistical
//! quality, so a xorshift generator is plenty. Spawning takes any
//! `FnMut() -> f32` closure; this type is the default supplier and keeps
//! scenes reproducible from a seed.

/// A seeded xorshift32 generator producing floats in [0, 1)
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator from a seed
    pub fn new(seed: u32) -> Self {
        // xorshift has a fixed point at zero
        Self {
            state: seed.max(1),
        }
    }

    /// Next float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }
}
