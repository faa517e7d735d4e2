use serde::{Deserialize, Serialize};

use crate::systems::particles::{DEFAULT_CAPACITY, PARTICLES_PER_BATCH};

/// Configuration for a particle pool and its render target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Maximum number of simultaneously live batches (default: 256).
    pub capacity: usize,
    /// Seed for the particle RNG (default: 42).
    pub seed: u64,
    /// Maximum number of recorded draws per frame (default: capacity * 30).
    pub max_instances: usize,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: 42,
            max_instances: DEFAULT_CAPACITY * PARTICLES_PER_BATCH,
        }
    }
}

impl FxConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self.max_instances = capacity * PARTICLES_PER_BATCH;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = FxConfig::default();
        assert_eq!(c.capacity, 256);
        assert_eq!(c.seed, 42);
        assert_eq!(c.max_instances, 256 * 30);
    }

    #[test]
    fn parse_partial_json() {
        let c = FxConfig::from_json(r#"{ "capacity": 8 }"#).unwrap();
        assert_eq!(c.capacity, 8);
        assert_eq!(c.seed, 42);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(FxConfig::from_json("{ capacity: }").is_err());
    }

    #[test]
    fn with_capacity_resizes_instances() {
        let c = FxConfig::default().with_capacity(4).with_seed(9);
        assert_eq!(c.max_instances, 120);
        assert_eq!(c.seed, 9);
    }
}
