//! Coherent noise sampled by the fire simulation.
//!
//! The sampler is built once by the composition root and shared read-only
//! across renders, so implementations must be `Send + Sync` and free of
//! interior mutability.

use noise::{NoiseFn, OpenSimplex};

/// Deterministic 3D noise over pixel coordinates and tick number.
pub trait NoiseField: Send + Sync {
    /// Sample at pixel `(x, y)` on tick `t`. Returns a value in `[0, 1)`.
    fn sample(&self, x: i64, y: i64, t: u64) -> f64;
}

/// Seed used when no explicit seed is configured.
pub const DEFAULT_SEED: u32 = 0;

/// Coordinates are divided by this before sampling, which smooths variation
/// over roughly three-pixel neighbourhoods.
pub const DEFAULT_SCALE: f64 = 1.0 / 3.0;

const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// OpenSimplex noise remapped from `[-1, 1]` into `[0, 1)`.
#[derive(Clone, Debug)]
pub struct SimplexNoise {
    noise: OpenSimplex,
    seed: u32,
    scale: f64,
}

impl SimplexNoise {
    pub fn new(seed: u32) -> Self {
        Self::with_scale(seed, DEFAULT_SCALE)
    }

    pub fn with_scale(seed: u32, scale: f64) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            seed,
            scale,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl NoiseField for SimplexNoise {
    fn sample(&self, x: i64, y: i64, t: u64) -> f64 {
        let p = [
            x as f64 * self.scale,
            y as f64 * self.scale,
            t as f64 * self.scale,
        ];
        let raw = self.noise.get(p);
        if !raw.is_finite() {
            return 0.0;
        }
        (raw * 0.5 + 0.5).clamp(0.0, MAX_BELOW_ONE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/field.rs"]
mod tests;
