pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::FxConfig;
pub use components::image::ImageId;
pub use components::tint::Tint;
pub use crate::core::time::{AnimationClock, Millis};
pub use renderer::instance::{DrawList, SpriteInstance};
pub use renderer::traits::{DrawError, DrawSurface};
pub use systems::particles::{
    Particle, ParticleBatch, ParticleBatchPool, ParticleBatchSpec,
    RandomSource, Rng, DEFAULT_CAPACITY, PARTICLES_PER_BATCH,
};
pub use extensions::Easing;

// glam is part of the public API (positions are `Vec2`).
pub use glam::Vec2;
