//! End-to-end generation and editing against the public API

use cubeland::blocks::BlockType;
use cubeland::world::{
    apply_edit, initialize_world, raycast, BlockStore, ChunkGenerator, EditKind, EditOutcome,
    TerrainNoise, WorldGenConfig,
};
use glam::{IVec3, Vec3};

/// Flat terrain at ground level with no cave, ore, fluid or decoration triggered
fn quiet_generator() -> ChunkGenerator {
    let config = WorldGenConfig::default().without_decoration();
    // Cave sample at the threshold carves nothing (carving needs sample < threshold)
    let noise = TerrainNoise::constant(0.0, config.caves.threshold, 0.0);
    ChunkGenerator::with_noise(1, config, noise).expect("default config is valid")
}

#[test]
fn test_flat_chunk_has_exact_layering() {
    let generator = quiet_generator();
    let mut store = BlockStore::new();

    let stats = generator.generate_chunk(&mut store, 0, 0);

    assert_eq!(store.len(), 16384);
    assert_eq!(stats.blocks_placed, 16384);

    for x in 0..16 {
        for z in 0..16 {
            for y in 0..256 {
                let expected = match y {
                    0 => BlockType::Bedrock,
                    1..=59 => BlockType::Stone,
                    60..=62 => BlockType::Dirt,
                    63 => BlockType::Grass,
                    _ => BlockType::Air,
                };
                assert_eq!(
                    store.block_type_at(IVec3::new(x, y, z)),
                    expected,
                    "at ({}, {}, {})",
                    x,
                    y,
                    z
                );
            }
        }
    }

    for block_type in [
        BlockType::IronOre,
        BlockType::CoalOre,
        BlockType::Water,
        BlockType::Lava,
        BlockType::TallGrass,
        BlockType::OakLog,
        BlockType::OakLeaves,
    ] {
        assert_eq!(store.count_by_type(block_type), 0, "{}", block_type);
    }
}

#[test]
fn test_regenerating_a_chunk_changes_nothing() {
    let generator = quiet_generator();
    let mut store = BlockStore::new();

    generator.generate_chunk(&mut store, 0, 0);
    let stats = generator.generate_chunk(&mut store, 0, 0);

    assert_eq!(stats.blocks_placed, 0);
    assert_eq!(store.len(), 16384);
}

#[test]
fn test_edit_no_ops_leave_store_size_unchanged() {
    let generator = quiet_generator();
    let mut store = BlockStore::new();
    generator.generate_chunk(&mut store, 0, 0);
    let before = store.len();

    let hit = raycast(&store, Vec3::new(4.5, 66.0, 4.5), Vec3::NEG_Y, 5.0)
        .expect("grass below the camera");
    assert_eq!(hit.block_type, BlockType::Grass);

    // Place into the occupied grass cell itself
    let mut occupied = hit.target;
    occupied.adjacent = occupied.block;
    assert_eq!(
        apply_edit(&mut store, occupied, EditKind::Place(BlockType::Stone)),
        EditOutcome::NoEffect
    );
    assert_eq!(store.len(), before);

    // Break the air above it
    let mut empty = hit.target;
    empty.block = hit.target.adjacent;
    assert_eq!(apply_edit(&mut store, empty, EditKind::Break), EditOutcome::NoEffect);
    assert_eq!(store.len(), before);

    // A real break shrinks the store
    assert!(apply_edit(&mut store, hit.target, EditKind::Break).is_applied());
    assert_eq!(store.len(), before - 1);
}

#[test]
fn test_seeded_world_is_reproducible() {
    let a = ChunkGenerator::new(2024);
    let b = ChunkGenerator::new(2024);
    let mut store_a = BlockStore::new();
    let mut store_b = BlockStore::new();

    let summary_a = initialize_world(&a, &mut store_a);
    let summary_b = initialize_world(&b, &mut store_b);

    assert_eq!(summary_a, summary_b);
    assert_eq!(summary_a.chunks, 9);
    for (pos, record) in store_a.iter() {
        assert_eq!(store_b.block_type_at(pos), record.block_type);
    }
}

#[test]
fn test_default_world_invariants() {
    let generator = ChunkGenerator::new(7);
    let mut store = BlockStore::new();
    initialize_world(&generator, &mut store);

    for (pos, record) in store.iter() {
        assert!(!record.block_type.is_air(), "air stored at {:?}", pos);
        if pos.y == 0 {
            // Bedrock floor is never carved or replaced
            assert_eq!(record.block_type, BlockType::Bedrock);
        }
        match record.block_type {
            BlockType::IronOre => assert!(pos.y <= 60),
            BlockType::CoalOre => assert!(pos.y <= 120),
            BlockType::Water => assert!((10..=62).contains(&pos.y)),
            BlockType::Lava => assert!((1..10).contains(&pos.y)),
            _ => {}
        }
    }

    // Every column of the 3x3 chunk area has a bedrock floor
    assert_eq!(store.count_by_type(BlockType::Bedrock), 9 * 256);
}
