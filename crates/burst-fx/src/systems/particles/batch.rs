//! Particle batches: one `add_batch` call's worth of particles.

use std::f32::consts::TAU;

use glam::Vec2;

use super::rng::RandomSource;
use crate::components::tint::Tint;
use crate::core::time::{self, Millis};
use crate::extensions::easing::Easing;
use crate::renderer::traits::{DrawError, DrawSurface};

/// Number of particles synthesized for every batch.
pub const PARTICLES_PER_BATCH: usize = 30;

/// Caller-supplied description of a burst. Copied into the pool on admission.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBatchSpec<I> {
    /// Emission point shared by every particle.
    pub origin: Vec2,
    /// Mean emission direction in radians.
    pub center_angle: f32,
    /// Half-width of the emission cone in radians.
    pub spread_angle: f32,
    /// Minimum speed in units per millisecond.
    pub min_speed: f32,
    /// Maximum speed in units per millisecond.
    pub max_speed: f32,
    pub tint: Tint,
    /// Animation-clock timestamp the batch starts moving at.
    pub start_time: Millis,
    /// Lifetime in milliseconds.
    pub duration: Millis,
    /// Host-owned image handle. Must stay valid until the batch expires.
    pub image: I,
    /// Optional alpha fade over the batch lifetime.
    pub fade: Option<Easing>,
}

impl<I> ParticleBatchSpec<I> {
    /// A motionless, untinted burst. Use the builder methods to shape it.
    pub fn new(image: I, origin: Vec2, start_time: Millis, duration: Millis) -> Self {
        Self {
            origin,
            center_angle: 0.0,
            spread_angle: 0.0,
            min_speed: 0.0,
            max_speed: 0.0,
            tint: Tint::WHITE,
            start_time,
            duration,
            image,
            fade: None,
        }
    }

    // -- Builder pattern --

    pub fn with_direction(mut self, center_angle: f32, spread_angle: f32) -> Self {
        self.center_angle = center_angle;
        self.spread_angle = spread_angle;
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_fade(mut self, easing: Easing) -> Self {
        self.fade = Some(easing);
        self
    }
}

/// One particle: a fixed velocity and a fixed draw rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    /// Units per millisecond.
    pub velocity: Vec2,
    /// Image rotation in radians. Not tied to the direction of travel.
    pub rotation: f32,
}

impl Particle {
    fn sample<I, R: RandomSource + ?Sized>(spec: &ParticleBatchSpec<I>, rng: &mut R) -> Self {
        let angle = rng.range(
            spec.center_angle - spec.spread_angle,
            spec.center_angle + spec.spread_angle,
        );
        let speed = rng.range(spec.min_speed, spec.max_speed);
        let rotation = rng.range(0.0, TAU);
        Particle {
            velocity: Vec2::from_angle(angle) * speed,
            rotation,
        }
    }
}

/// A pool-owned batch. Everything except the clock is fixed at creation.
#[derive(Debug, Clone)]
pub struct ParticleBatch<I> {
    image: I,
    origin: Vec2,
    tint: Tint,
    start_time: Millis,
    duration: Millis,
    fade: Option<Easing>,
    particles: [Particle; PARTICLES_PER_BATCH],
}

impl<I: Copy> ParticleBatch<I> {
    /// Copy the batch-level fields of `spec` and synthesize its particles.
    pub fn new<R: RandomSource + ?Sized>(spec: &ParticleBatchSpec<I>, rng: &mut R) -> Self {
        ParticleBatch {
            image: spec.image,
            origin: spec.origin,
            tint: spec.tint,
            start_time: spec.start_time,
            duration: spec.duration,
            fade: spec.fade,
            particles: std::array::from_fn(|_| Particle::sample(spec, &mut *rng)),
        }
    }

    pub fn image(&self) -> I {
        self.image
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn start_time(&self) -> Millis {
        self.start_time
    }

    pub fn duration(&self) -> Millis {
        self.duration
    }

    pub fn fade(&self) -> Option<Easing> {
        self.fade
    }

    pub fn particles(&self) -> &[Particle; PARTICLES_PER_BATCH] {
        &self.particles
    }

    /// True once `now >= start_time + duration`.
    pub fn is_expired(&self, now: Millis) -> bool {
        time::window_elapsed(now, self.start_time, self.duration)
    }

    /// True while `start_time <= now < start_time + duration`.
    pub fn is_active(&self, now: Millis) -> bool {
        time::elapsed_since(now, self.start_time) >= 0 && !self.is_expired(now)
    }

    /// Milliseconds of motion at `now`, clamped to `[0, duration]`.
    pub fn elapsed(&self, now: Millis) -> Millis {
        time::clamp_elapsed(now, self.start_time, self.duration)
    }

    /// Position of `particle` after `elapsed` milliseconds.
    #[inline]
    pub fn position_at(&self, particle: &Particle, elapsed: Millis) -> Vec2 {
        self.origin + particle.velocity * elapsed as f32
    }

    /// Tint to draw with after `elapsed` milliseconds.
    pub fn tint_at(&self, elapsed: Millis) -> Tint {
        match self.fade {
            None => self.tint,
            Some(easing) => {
                let t = elapsed as f32 / self.duration.max(1) as f32;
                self.tint.with_alpha_scaled(easing.fade_out(t))
            }
        }
    }

    /// Issue one draw per particle for the frame at `now`. Stops at the first failure.
    pub fn render<S: DrawSurface<I> + ?Sized>(&self, surface: &mut S, now: Millis) -> Result<(), DrawError> {
        let elapsed = self.elapsed(now);
        let tint = self.tint_at(elapsed);
        for particle in &self.particles {
            let position = self.position_at(particle, elapsed);
            surface.draw_image(self.image, position, particle.rotation, tint)?;
        }
        Ok(())
    }
}
