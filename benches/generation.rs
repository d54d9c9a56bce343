/// Benchmarks for chunk generation and block store access
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cubeland::world::{initialize_world, BlockStore, ChunkGenerator, WorldGenConfig};
use glam::IVec3;

fn bench_generate_chunk(c: &mut Criterion) {
    let generator = ChunkGenerator::new(42);

    c.bench_function("generate_chunk", |b| {
        b.iter(|| {
            let mut store = BlockStore::new();
            black_box(generator.generate_chunk(&mut store, 0, 0))
        });
    });
}

fn bench_initialize_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize_world");
    group.sample_size(10);

    for &radius in &[0, 1, 2] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            let mut config = WorldGenConfig::default();
            config.world.initial_chunk_radius = radius;
            let generator = ChunkGenerator::from_config(42, config).expect("valid config");

            b.iter(|| {
                let mut store = BlockStore::new();
                black_box(initialize_world(&generator, &mut store))
            });
        });
    }
    group.finish();
}

fn bench_column_lookup(c: &mut Criterion) {
    let generator = ChunkGenerator::new(42);
    let mut store = BlockStore::new();
    generator.generate_chunk(&mut store, 0, 0);

    c.bench_function("highest_block_in_column", |b| {
        b.iter(|| {
            for x in 0..16 {
                black_box(store.highest_block_in_column(x, 7, 256));
            }
        });
    });

    c.bench_function("block_type_at", |b| {
        b.iter(|| black_box(store.block_type_at(IVec3::new(7, 40, 7))));
    });
}

criterion_group!(
    benches,
    bench_generate_chunk,
    bench_initialize_world,
    bench_column_lookup
);
criterion_main!(benches);
