//! Random sampling for particle synthesis.
//!
//! The pool draws every random value through [`RandomSource`], so tests can
//! substitute a scripted source and production code a seeded [`Rng`].

/// Capability the pool samples particle angles, speeds and rotations from.
pub trait RandomSource {
    /// Uniform value in [0, 1).
    fn next_f32(&mut self) -> f32;

    /// Uniform value between `lo` and `hi`. Returns exactly `lo` when they are equal.
    #[inline]
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, allocation-free.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly, so the result stays below 1.0.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}
