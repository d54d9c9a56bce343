//! World model - block storage, generation and editing

pub mod block_store;
pub mod chunk;
pub mod edit;
pub mod features;
pub mod generation;
pub mod noise_field;
pub mod raycasting;
pub mod rng_trait;
pub mod world_init;
pub mod worldgen_config;

pub use block_store::{BlockRecord, BlockStore, NoopPresenter, Presenter};
pub use chunk::{ChunkBounds, CHUNK_SIZE};
pub use edit::{apply_edit, EditKind, EditOutcome, PointerButton};
pub use generation::{ChunkGenerator, ChunkStats};
pub use noise_field::TerrainNoise;
pub use raycasting::{raycast, resolve_target, RayHit, Target, MAX_INTERACTION_DISTANCE};
pub use rng_trait::{RandomnessMode, WorldRng};
pub use world_init::{initialize_world, WorldSummary};
pub use worldgen_config::{TowerFooting, WorldGenConfig, WorldGenError};
