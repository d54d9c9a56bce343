//! Startup world build over the fixed chunk neighborhood

use crate::world::block_store::{BlockStore, Presenter};
use crate::world::generation::{ChunkGenerator, ChunkStats};

/// Totals for the initial world build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldSummary {
    pub chunks: usize,
    pub totals: ChunkStats,
    /// Store size after the build
    pub stored_blocks: usize,
}

/// Generate every chunk (cx, cz) with -R <= cx, cz <= R, x outer, z inner,
/// where R is the configured initial chunk radius
pub fn initialize_world<P: Presenter>(
    generator: &ChunkGenerator,
    store: &mut BlockStore<P>,
) -> WorldSummary {
    let radius = generator.config().world.initial_chunk_radius;
    let mut summary = WorldSummary::default();

    for chunk_x in -radius..=radius {
        for chunk_z in -radius..=radius {
            summary.totals += generator.generate_chunk(store, chunk_x, chunk_z);
            summary.chunks += 1;
        }
    }
    summary.stored_blocks = store.len();

    log::info!(
        "Initial world generated: {} chunks, {} blocks ({} trees, {} towers)",
        summary.chunks,
        summary.stored_blocks,
        summary.totals.trees,
        summary.totals.towers
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockType;
    use crate::world::noise_field::TerrainNoise;
    use crate::world::worldgen_config::WorldGenConfig;
    use glam::IVec3;

    #[test]
    fn test_default_radius_builds_nine_chunks() {
        let generator = ChunkGenerator::with_noise(
            3,
            WorldGenConfig::default().without_decoration(),
            TerrainNoise::constant(0.0, 1.0, 0.0),
        )
        .expect("valid config");
        let mut store = BlockStore::new();

        let summary = initialize_world(&generator, &mut store);

        assert_eq!(summary.chunks, 9);
        assert_eq!(summary.stored_blocks, 9 * 16384);
        assert_eq!(summary.totals.blocks_placed, summary.stored_blocks);
        // Corners of the 48x48 area
        assert!(store.contains(IVec3::new(-16, 0, -16)));
        assert!(store.contains(IVec3::new(31, 63, 31)));
        assert!(!store.contains(IVec3::new(32, 0, 0)));
        assert!(!store.contains(IVec3::new(-17, 0, 0)));
    }

    #[test]
    fn test_radius_zero_builds_single_chunk() {
        let mut config = WorldGenConfig::default().without_decoration();
        config.world.initial_chunk_radius = 0;
        let generator = ChunkGenerator::with_noise(3, config, TerrainNoise::constant(0.0, 1.0, 0.0))
            .expect("valid config");
        let mut store = BlockStore::new();

        let summary = initialize_world(&generator, &mut store);

        assert_eq!(summary.chunks, 1);
        assert_eq!(store.count_by_type(BlockType::Bedrock), 256);
    }
}
