//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `cubeland.ron` file (if exists)
//! 3. Environment variables prefixed with `CUBELAND_`
//!
//! Example environment variable: `CUBELAND_WORLDGEN__CAVES__THRESHOLD=0.3`

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::blocks::BlockType;
use crate::world::raycasting::MAX_INTERACTION_DISTANCE;
use crate::world::WorldGenConfig;

/// Seed used when nothing else is configured
pub const DEFAULT_SEED: u64 = 42;

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub worldgen: WorldGenConfig,

    #[serde(default)]
    pub interaction: InteractionConfig,

    #[serde(default)]
    pub entities: EntitySpawnConfig,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            worldgen: WorldGenConfig::default(),
            interaction: InteractionConfig::default(),
            entities: EntitySpawnConfig::default(),
        }
    }
}

/// Block editing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Reach for break/place, in world units
    pub max_distance: f32,
    /// Block placed by the secondary button
    pub place_block: BlockType,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            max_distance: MAX_INTERACTION_DISTANCE,
            place_block: BlockType::Stone,
        }
    }
}

/// Startup population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpawnConfig {
    /// Sheep spawned on the surface after the world is built
    pub initial_count: usize,
}

impl Default for EntitySpawnConfig {
    fn default() -> Self {
        Self { initial_count: 4 }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `cubeland.ron` file (if exists)
    /// 3. Environment variables prefixed with `CUBELAND_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("cubeland")
    }

    /// Same as `load`, reading the optional RON file `<name>.ron`
    pub fn load_from(name: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("seed", DEFAULT_SEED as i64)?
            .set_default("interaction.max_distance", MAX_INTERACTION_DISTANCE as f64)?
            .set_default("interaction.place_block", "Stone")?
            .set_default("entities.initial_count", 4_i64)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(name)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (CUBELAND_SEED, CUBELAND_WORLDGEN__..., etc.)
            .add_source(
                Environment::with_prefix("CUBELAND")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let game_config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        game_config
            .worldgen
            .validate()
            .context("Invalid world generation settings")?;
        Ok(game_config)
    }
}
