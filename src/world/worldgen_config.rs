//! World generation configuration - serializable parameters for world generation
//!
//! Every tunable of the chunk generator lives here. Defaults reproduce the
//! classic world; presets can be stored as RON.
//! The seed is NOT part of the config - same config + different seed = different world.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::rng_trait::RandomnessMode;

/// Invalid generation parameters, reported when the generator is built
#[derive(Debug, Error, PartialEq)]
pub enum WorldGenError {
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(i32),

    #[error("world height must be positive, got {0}")]
    InvalidWorldHeight(i32),

    #[error("ground level {ground_level} must lie inside the world (1..{world_height})")]
    GroundLevelOutOfRange { ground_level: i32, world_height: i32 },

    #[error("{name} must be between 0 and 1, got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f32 },

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: i32 },

    #[error("initial chunk radius must not be negative, got {0}")]
    NegativeChunkRadius(i32),

    #[error("failed to parse world generation preset: {0}")]
    Preset(String),
}

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Global world dimensions
    pub world: WorldParams,

    /// Surface height generation
    pub terrain: TerrainParams,

    /// Cave carving
    pub caves: CaveParams,

    /// Water and lava fill
    pub fluids: FluidParams,

    /// Iron and coal veins
    pub ores: OreParams,

    /// Tall grass and trees
    pub vegetation: VegetationParams,

    /// Towers
    pub structures: StructureParams,

    /// Source of vegetation/fluid/structure randomness
    pub randomness: RandomnessMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Columns per chunk side (default: 16)
    pub chunk_size: i32,
    /// Cells are generated for y in 0..world_height (default: 256)
    pub world_height: i32,
    /// Average surface height (default: 64)
    pub ground_level: i32,
    /// Chunks generated at startup form a (2r+1)^2 square (default: 1)
    pub initial_chunk_radius: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Horizontal frequency of the height field (default: 0.05)
    pub noise_scale: f64,
    /// Height noise multiplier in blocks (default: 10.0)
    pub height_amplitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveParams {
    /// Frequency of the cave field (default: 0.1)
    pub scale: f64,
    /// Samples below this become cave air (default: 0.5)
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidParams {
    /// Empty cells at or below this y are filled (default: 62)
    pub water_level: i32,
    /// Below this y pockets may hold lava instead of water (default: 10)
    pub lava_depth: i32,
    /// Chance a deep empty cell becomes lava (default: 0.2)
    pub lava_probability: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OreParams {
    /// Frequency of the ore field (default: 0.08)
    pub noise_scale: f64,
    /// Ore sample above this turns stone into iron (default: 0.8)
    pub iron_threshold: f64,
    /// Ore sample above this turns stone into coal (default: 0.9)
    pub coal_threshold: f64,
    /// Highest y for iron (default: 60)
    pub iron_max_y: i32,
    /// Highest y for coal (default: 120)
    pub coal_max_y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationParams {
    /// Chance of tall grass on a grass column (default: 0.5)
    pub grass_density: f32,
    /// Chance of a tree on a grass column (default: 0.01)
    pub tree_probability: f32,
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Trunk length in blocks, starting at the top block (default: 4)
    pub trunk_height: i32,
    /// Leaf cells satisfy dx^2 + dz^2 + (dy-1)^2 < this (default: 5)
    pub leaf_radius_sq: i32,
}

/// Reference height a tower is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TowerFooting {
    /// Constant `ground_level`, regardless of the terrain below
    #[default]
    GroundLevel,
    /// Sampled top block at the tower's center column
    SampledSurface,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureParams {
    /// Chance of a tower per chunk (default: 0.05)
    pub probability: f32,
    /// Wall height in blocks (default: 10)
    pub tower_height: i32,
    /// Footprint side length (default: 3)
    pub tower_size: i32,
    pub footing: TowerFooting,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            world: WorldParams::default(),
            terrain: TerrainParams::default(),
            caves: CaveParams::default(),
            fluids: FluidParams::default(),
            ores: OreParams::default(),
            vegetation: VegetationParams::default(),
            structures: StructureParams::default(),
            randomness: RandomnessMode::Seeded,
        }
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            chunk_size: 16,
            world_height: 256,
            ground_level: 64,
            initial_chunk_radius: 1,
        }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            noise_scale: 0.05,
            height_amplitude: 10.0,
        }
    }
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            scale: 0.1,
            threshold: 0.5,
        }
    }
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            water_level: 62,
            lava_depth: 10,
            lava_probability: 0.2,
        }
    }
}

impl Default for OreParams {
    fn default() -> Self {
        Self {
            noise_scale: 0.08,
            iron_threshold: 0.8,
            coal_threshold: 0.9,
            iron_max_y: 60,
            coal_max_y: 120,
        }
    }
}

impl Default for VegetationParams {
    fn default() -> Self {
        Self {
            grass_density: 0.5,
            tree_probability: 0.01,
            tree: TreeConfig::default(),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            trunk_height: 4,
            leaf_radius_sq: 5,
        }
    }
}

impl Default for StructureParams {
    fn default() -> Self {
        Self {
            probability: 0.05,
            tower_height: 10,
            tower_size: 3,
            footing: TowerFooting::GroundLevel,
        }
    }
}

impl WorldGenConfig {
    /// Same terrain, but no randomness-driven content at all
    /// (no tall grass, trees, towers or lava)
    pub fn without_decoration(mut self) -> Self {
        self.vegetation.grass_density = 0.0;
        self.vegetation.tree_probability = 0.0;
        self.structures.probability = 0.0;
        self.fluids.lava_probability = 0.0;
        self
    }

    /// Check every precondition the generator relies on
    pub fn validate(&self) -> Result<(), WorldGenError> {
        let world = &self.world;
        if world.chunk_size <= 0 {
            return Err(WorldGenError::InvalidChunkSize(world.chunk_size));
        }
        if world.world_height <= 0 {
            return Err(WorldGenError::InvalidWorldHeight(world.world_height));
        }
        if world.ground_level <= 0 || world.ground_level >= world.world_height {
            return Err(WorldGenError::GroundLevelOutOfRange {
                ground_level: world.ground_level,
                world_height: world.world_height,
            });
        }
        if world.initial_chunk_radius < 0 {
            return Err(WorldGenError::NegativeChunkRadius(world.initial_chunk_radius));
        }

        for (name, value) in [
            ("terrain.noise_scale", self.terrain.noise_scale),
            ("caves.scale", self.caves.scale),
            ("ores.noise_scale", self.ores.noise_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(WorldGenError::InvalidScale { name, value });
            }
        }
        // Surface must stay inside the world for any sample in [-1, 1]
        let amplitude = self.terrain.height_amplitude;
        let headroom = f64::from(world.world_height - world.ground_level);
        if !amplitude.is_finite() || amplitude < 0.0 || amplitude >= headroom {
            return Err(WorldGenError::InvalidScale {
                name: "terrain.height_amplitude",
                value: self.terrain.height_amplitude,
            });
        }

        for (name, value) in [
            ("fluids.lava_probability", self.fluids.lava_probability),
            ("vegetation.grass_density", self.vegetation.grass_density),
            ("vegetation.tree_probability", self.vegetation.tree_probability),
            ("structures.probability", self.structures.probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WorldGenError::ProbabilityOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("vegetation.tree.trunk_height", self.vegetation.tree.trunk_height),
            ("vegetation.tree.leaf_radius_sq", self.vegetation.tree.leaf_radius_sq),
            ("structures.tower_height", self.structures.tower_height),
            ("structures.tower_size", self.structures.tower_size),
        ] {
            if value <= 0 {
                return Err(WorldGenError::InvalidDimension { name, value });
            }
        }

        if self.ores.coal_threshold < self.ores.iron_threshold {
            log::warn!(
                "coal threshold {} is below iron threshold {}: coal will shadow iron above y={}",
                self.ores.coal_threshold,
                self.ores.iron_threshold,
                self.ores.iron_max_y
            );
        }

        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, WorldGenError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| WorldGenError::Preset(e.to_string()))
    }

    /// Parse a preset. Missing fields fall back to defaults.
    pub fn from_ron(source: &str) -> Result<Self, WorldGenError> {
        let config: Self =
            ron::from_str(source).map_err(|e| WorldGenError::Preset(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
