//! Noise fields that shape the terrain
//!
//! The generator samples three fields: a 2D height field and two 3D fields for
//! caves and ore veins. They are trait objects so tests can swap in constants.

use noise::{Constant, NoiseFn, OpenSimplex};

pub type NoiseField2 = Box<dyn NoiseFn<f64, 2> + Send + Sync>;
pub type NoiseField3 = Box<dyn NoiseFn<f64, 3> + Send + Sync>;

/// The three noise layers used by chunk generation
pub struct TerrainNoise {
    pub height: NoiseField2,
    pub cave: NoiseField3,
    pub ore: NoiseField3,
}

impl TerrainNoise {
    /// Simplex layers with independent seeds derived from the world seed
    pub fn seeded(seed: u64) -> Self {
        let base = seed as u32;
        Self {
            height: Box::new(OpenSimplex::new(base)),
            cave: Box::new(OpenSimplex::new(base.wrapping_add(1))),
            ore: Box::new(OpenSimplex::new(base.wrapping_add(2))),
        }
    }

    /// Fields that return the same value everywhere
    pub fn constant(height: f64, cave: f64, ore: f64) -> Self {
        Self {
            height: Box::new(Constant::new(height)),
            cave: Box::new(Constant::new(cave)),
            ore: Box::new(Constant::new(ore)),
        }
    }

    pub fn from_fields(height: NoiseField2, cave: NoiseField3, ore: NoiseField3) -> Self {
        Self { height, cave, ore }
    }

    #[inline]
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        self.height.get([x, z])
    }

    #[inline]
    pub fn cave_at(&self, x: f64, y: f64, z: f64) -> f64 {
        self.cave.get([x, y, z])
    }

    #[inline]
    pub fn ore_at(&self, x: f64, y: f64, z: f64) -> f64 {
        self.ore.get([x, y, z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_fields() {
        let noise = TerrainNoise::constant(0.25, 0.6, -0.3);
        assert_eq!(noise.height_at(12.0, -4.0), 0.25);
        assert_eq!(noise.cave_at(1.0, 2.0, 3.0), 0.6);
        assert_eq!(noise.ore_at(-9.0, 0.0, 9.0), -0.3);
    }

    #[test]
    fn test_seeded_fields_deterministic() {
        let a = TerrainNoise::seeded(42);
        let b = TerrainNoise::seeded(42);

        for i in 0..20 {
            let p = i as f64 * 0.37;
            assert_eq!(a.height_at(p, -p), b.height_at(p, -p));
            assert_eq!(a.cave_at(p, p * 0.5, -p), b.cave_at(p, p * 0.5, -p));
            assert_eq!(a.ore_at(-p, p, p), b.ore_at(-p, p, p));
        }
    }

    #[test]
    fn test_layers_use_independent_seeds() {
        let noise = TerrainNoise::seeded(7);
        let differs = (1..50).any(|i| {
            let p = i as f64 * 0.13;
            noise.cave_at(p, p, p) != noise.ore_at(p, p, p)
        });
        assert!(differs, "cave and ore layers should not share a seed");
    }
}
