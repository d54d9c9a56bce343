//! RNG trait abstraction for world generation
//!
//! Every probabilistic generation decision (vegetation, lava, structures) goes
//! through `WorldRng`, so callers choose between:
//! - a seeded per-chunk RNG (reproducible worlds)
//! - the thread RNG (different decoration on every run)

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

/// Random number generator trait for world generation
pub trait WorldRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Covers ThreadRng, Xoshiro and any other rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::random(self)
    }
}

/// Where generation randomness comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RandomnessMode {
    /// Per-chunk RNG derived from the world seed and chunk index
    #[default]
    Seeded,
    /// Thread RNG; terrain stays reproducible, decoration does not
    Ambient,
}

/// Build the RNG for one chunk.
///
/// Depends only on (seed, chunk_x, chunk_z), never on generation order.
pub fn chunk_rng(seed: u64, chunk_x: i32, chunk_z: i32) -> Xoshiro256StarStar {
    const X_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;
    const Z_PRIME: u64 = 0xC2B2_AE3D_27D4_EB4F;

    let mixed = seed
        ^ (chunk_x as i64 as u64).wrapping_mul(X_PRIME)
        ^ (chunk_z as i64 as u64).wrapping_mul(Z_PRIME).rotate_left(31);
    Xoshiro256StarStar::seed_from_u64(mixed)
}
