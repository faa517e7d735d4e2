//! Fixed-capacity particle batch pool.
//!
//! The host calls [`ParticleBatchPool::add_batch`] once per visual event and
//! [`ParticleBatchPool::update_and_render`] once per frame. Particle positions
//! are a pure function of the animation clock, so nothing is integrated
//! frame to frame: each draw is `origin + velocity * elapsed`.

mod batch;
mod rng;

pub use batch::{Particle, ParticleBatch, ParticleBatchSpec, PARTICLES_PER_BATCH};
pub use rng::{RandomSource, Rng};

use crate::api::config::FxConfig;
use crate::components::image::ImageId;
use crate::core::time::Millis;
use crate::renderer::traits::{DrawError, DrawSurface};

/// Default maximum number of live batches.
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded set of concurrently animating particle batches.
///
/// Storage is reserved once at construction. The live batches always occupy
/// the contiguous prefix of that storage; expired batches are reclaimed with
/// swap-remove, so later batches may be reordered.
pub struct ParticleBatchPool<I = ImageId, R = Rng> {
    batches: Vec<ParticleBatch<I>>,
    capacity: usize,
    rng: R,
}

impl<I: Copy> ParticleBatchPool<I, Rng> {
    /// Create a pool with the default capacity and a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_random(DEFAULT_CAPACITY, Rng::new(seed))
    }

    pub fn with_config(config: &FxConfig) -> Self {
        Self::with_random(config.capacity, Rng::new(config.seed))
    }
}

impl<I: Copy, R: RandomSource> ParticleBatchPool<I, R> {
    /// Create a pool with an explicit capacity and random source.
    pub fn with_random(capacity: usize, rng: R) -> Self {
        log::debug!("particle pool: capacity {} batches x {} particles", capacity, PARTICLES_PER_BATCH);
        Self {
            batches: Vec::with_capacity(capacity),
            capacity,
            rng,
        }
    }

    /// Admit a new batch. Silently dropped when the pool is full.
    pub fn add_batch(&mut self, spec: &ParticleBatchSpec<I>) {
        if self.is_full() {
            log::trace!("particle pool full ({}), dropping batch", self.capacity);
            return;
        }
        let batch = ParticleBatch::new(spec, &mut self.rng);
        self.batches.push(batch);
    }

    /// Draw every live batch at `now`, then reclaim the expired ones.
    ///
    /// Batches draw in slot order, so a newer batch lands on top of older ones
    /// until compaction moves it. A draw failure is returned as-is; the pool is
    /// left exactly as it was before the call.
    pub fn update_and_render<S>(&mut self, surface: &mut S, now: Millis) -> Result<(), DrawError>
    where
        S: DrawSurface<I> + ?Sized,
    {
        for batch in &self.batches {
            if batch.is_expired(now) {
                continue;
            }
            batch.render(surface, now)?;
        }
        self.reclaim_expired(now);
        Ok(())
    }

    /// Swap each expired batch with the last live one and shrink.
    fn reclaim_expired(&mut self, now: Millis) {
        let before = self.batches.len();
        let mut i = 0;
        while i < self.batches.len() {
            if self.batches[i].is_expired(now) {
                // The swapped-in batch lands at `i` and is checked next.
                self.batches.swap_remove(i);
            } else {
                i += 1;
            }
        }
        let reclaimed = before - self.batches.len();
        if reclaimed > 0 {
            log::trace!("particle pool: reclaimed {} batches, {} live", reclaimed, self.batches.len());
        }
    }

    /// Live batches, in current draw order.
    pub fn batches(&self) -> &[ParticleBatch<I>] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.batches.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every batch without drawing it.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}
