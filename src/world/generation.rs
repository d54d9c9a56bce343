use glam::{IVec2, IVec3};

use crate::blocks::BlockType;
use crate::world::block_store::{BlockStore, Presenter};
use crate::world::chunk::ChunkBounds;
use crate::world::features::{place_tower, place_tree};
use crate::world::noise_field::TerrainNoise;
use crate::world::rng_trait::{chunk_rng, RandomnessMode, WorldRng};
use crate::world::worldgen_config::{TowerFooting, WorldGenConfig, WorldGenError};

/// Counters for one generated chunk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Blocks actually inserted (terrain, fluids, decoration, structures)
    pub blocks_placed: usize,
    pub tall_grass: usize,
    pub trees: usize,
    pub towers: usize,
}

impl std::ops::AddAssign for ChunkStats {
    fn add_assign(&mut self, other: Self) {
        self.blocks_placed += other.blocks_placed;
        self.tall_grass += other.tall_grass;
        self.trees += other.trees;
        self.towers += other.towers;
    }
}

/// Deterministic chunk generator
///
/// Create with the default configuration via `new(seed)` or with a full
/// configuration via `from_config(seed, config)`. Terrain shape depends only on
/// the noise fields; decoration depends on the configured `RandomnessMode`.
pub struct ChunkGenerator {
    pub seed: u64,
    config: WorldGenConfig,
    noise: TerrainNoise,
}

impl ChunkGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config: WorldGenConfig::default(),
            noise: TerrainNoise::seeded(seed),
        }
    }

    /// Create a generator from a configuration, rejecting invalid parameters
    pub fn from_config(seed: u64, config: WorldGenConfig) -> Result<Self, WorldGenError> {
        Self::with_noise(seed, config, TerrainNoise::seeded(seed))
    }

    /// Create a generator with caller-supplied noise fields
    pub fn with_noise(
        seed: u64,
        config: WorldGenConfig,
        noise: TerrainNoise,
    ) -> Result<Self, WorldGenError> {
        config.validate()?;
        Ok(Self {
            seed,
            config,
            noise,
        })
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Bounds of the chunk at the given index under this configuration
    pub fn chunk_bounds(&self, chunk_x: i32, chunk_z: i32) -> ChunkBounds {
        ChunkBounds::new(chunk_x, chunk_z, self.config.world.chunk_size)
    }

    /// Terrain height H of a column: one above its grass block
    pub fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        let scale = self.config.terrain.noise_scale;
        let sample = self
            .noise
            .height_at(world_x as f64 * scale, world_z as f64 * scale);
        let offset = (sample * self.config.terrain.height_amplitude).round() as i32;
        self.config.world.ground_level.saturating_add(offset)
    }

    /// Generate one chunk into the store.
    ///
    /// Randomness comes from the configured mode: a per-chunk seeded RNG or
    /// the thread RNG.
    pub fn generate_chunk<P: Presenter>(
        &self,
        store: &mut BlockStore<P>,
        chunk_x: i32,
        chunk_z: i32,
    ) -> ChunkStats {
        match self.config.randomness {
            RandomnessMode::Seeded => {
                let mut rng = chunk_rng(self.seed, chunk_x, chunk_z);
                self.generate_chunk_with_rng(store, chunk_x, chunk_z, &mut rng)
            }
            RandomnessMode::Ambient => {
                let mut rng = rand::rng();
                self.generate_chunk_with_rng(store, chunk_x, chunk_z, &mut rng)
            }
        }
    }

    /// Generate one chunk using a caller-provided RNG
    pub fn generate_chunk_with_rng<P: Presenter, R: WorldRng + ?Sized>(
        &self,
        store: &mut BlockStore<P>,
        chunk_x: i32,
        chunk_z: i32,
        rng: &mut R,
    ) -> ChunkStats {
        let bounds = self.chunk_bounds(chunk_x, chunk_z);
        let mut stats = ChunkStats::default();

        for column in bounds.columns() {
            stats += self.generate_column(store, column, rng);
        }

        let structures = &self.config.structures;
        if rng.check_probability(structures.probability) {
            let center = bounds.center();
            let footing_y = match structures.footing {
                TowerFooting::GroundLevel => self.config.world.ground_level,
                TowerFooting::SampledSurface => self.surface_height(center.x, center.y) - 1,
            };
            stats.blocks_placed += place_tower(store, center, footing_y, structures);
            stats.towers += 1;
            log::debug!(
                "Tower placed in chunk ({}, {}) at {:?}, footing y={}",
                chunk_x,
                chunk_z,
                center,
                footing_y
            );
        }

        log::debug!(
            "Generated chunk ({}, {}): {} blocks, {} trees",
            chunk_x,
            chunk_z,
            stats.blocks_placed,
            stats.trees
        );
        stats
    }

    /// Build one full column bottom-up, then decorate its top block
    fn generate_column<P: Presenter, R: WorldRng + ?Sized>(
        &self,
        store: &mut BlockStore<P>,
        column: IVec2,
        rng: &mut R,
    ) -> ChunkStats {
        let (world_x, world_z) = (column.x, column.y);
        let height = self.surface_height(world_x, world_z);
        let mut stats = ChunkStats::default();
        let mut top_y = None;

        for y in 0..self.config.world.world_height {
            let mut block = stratum(y, height);
            if block == BlockType::Grass {
                top_y = Some(y);
            }

            block = self.carve(world_x, y, world_z, height, block);
            block = self.ore(world_x, y, world_z, block);
            block = self.fluid(y, block, rng);

            if !block.is_air() && store.insert(IVec3::new(world_x, y, world_z), block) {
                stats.blocks_placed += 1;
            }
        }

        let Some(top_y) = top_y else {
            return stats;
        };

        let vegetation = &self.config.vegetation;
        if rng.check_probability(vegetation.grass_density)
            && store.insert(IVec3::new(world_x, top_y + 1, world_z), BlockType::TallGrass)
        {
            stats.blocks_placed += 1;
            stats.tall_grass += 1;
        }

        if rng.check_probability(vegetation.tree_probability) {
            stats.blocks_placed += place_tree(store, world_x, top_y, world_z, &vegetation.tree);
            stats.trees += 1;
        }

        stats
    }

    /// Hollow out solid cells below the surface where the cave field is low
    fn carve(&self, world_x: i32, y: i32, world_z: i32, height: i32, block: BlockType) -> BlockType {
        if y <= 0 || y >= height || block.is_air() {
            return block;
        }

        let caves = &self.config.caves;
        let sample = self.noise.cave_at(
            world_x as f64 * caves.scale,
            y as f64 * caves.scale,
            world_z as f64 * caves.scale,
        );
        if sample < caves.threshold {
            BlockType::Air
        } else {
            block
        }
    }

    /// Replace stone with ore where the ore field peaks. Iron wins over coal.
    fn ore(&self, world_x: i32, y: i32, world_z: i32, block: BlockType) -> BlockType {
        if block != BlockType::Stone {
            return block;
        }

        let ores = &self.config.ores;
        let sample = self.noise.ore_at(
            world_x as f64 * ores.noise_scale,
            y as f64 * ores.noise_scale,
            world_z as f64 * ores.noise_scale,
        );
        if y <= ores.iron_max_y && sample > ores.iron_threshold {
            BlockType::IronOre
        } else if y <= ores.coal_max_y && sample > ores.coal_threshold {
            BlockType::CoalOre
        } else {
            block
        }
    }

    /// Fill empty cells at or below the water level. Deep pockets may hold lava.
    fn fluid<R: WorldRng + ?Sized>(&self, y: i32, block: BlockType, rng: &mut R) -> BlockType {
        let fluids = &self.config.fluids;
        if !block.is_air() || y > fluids.water_level {
            return block;
        }

        if y >= fluids.lava_depth {
            BlockType::Water
        } else if rng.check_probability(fluids.lava_probability) {
            BlockType::Lava
        } else {
            block
        }
    }
}

/// Base layering of a column with terrain height `height`
pub fn stratum(y: i32, height: i32) -> BlockType {
    if y == 0 {
        BlockType::Bedrock
    } else if y < height - 4 {
        BlockType::Stone
    } else if y < height - 1 {
        BlockType::Dirt
    } else if y == height - 1 {
        BlockType::Grass
    } else {
        BlockType::Air
    }
}
