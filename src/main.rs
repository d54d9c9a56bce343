use anyhow::Context;
use clap::Parser;
use cubeland::blocks::BlockType;
use cubeland::config::GameConfig;
use cubeland::world::{RandomnessMode, TowerFooting, WorldGenConfig};
use cubeland::GameState;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Initial chunk radius: generates a (2r+1)x(2r+1) square of chunks
    #[arg(long)]
    radius: Option<i32>,

    /// World generation preset (RON), replaces the configured generator settings
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Use the thread RNG for decoration instead of per-chunk seeded RNGs
    #[arg(long)]
    ambient_random: bool,

    /// Build towers on the sampled surface instead of the constant ground level
    #[arg(long)]
    sampled_footing: bool,

    /// Print the effective generation preset as RON and exit
    #[arg(long)]
    dump_preset: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = GameConfig::load()?;
    apply_args(&mut config, &args)?;

    if args.dump_preset {
        println!("{}", config.worldgen.to_ron()?);
        return Ok(());
    }

    log::info!("Starting Cubeland with seed {}", config.seed);
    let state = GameState::new(config).context("Failed to build world")?;

    let summary = state.summary();
    println!(
        "Generated {} chunks, {} blocks ({} tall grass, {} trees, {} towers)",
        summary.chunks,
        summary.stored_blocks,
        summary.totals.tall_grass,
        summary.totals.trees,
        summary.totals.towers
    );
    for block_type in BlockType::ALL.into_iter().filter(|b| !b.is_air()) {
        let count = state.store().count_by_type(block_type);
        if count > 0 {
            println!("  {:<12} {}", block_type.name(), count);
        }
    }
    println!("{} entities spawned", state.entities().len());

    state.shutdown();
    Ok(())
}

fn apply_args(config: &mut GameConfig, args: &Args) -> anyhow::Result<()> {
    if let Some(path) = &args.preset {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {:?}", path))?;
        config.worldgen = WorldGenConfig::from_ron(&source)
            .with_context(|| format!("Invalid preset {:?}", path))?;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(radius) = args.radius {
        config.worldgen.world.initial_chunk_radius = radius;
    }
    if args.ambient_random {
        config.worldgen.randomness = RandomnessMode::Ambient;
    }
    if args.sampled_footing {
        config.worldgen.structures.footing = TowerFooting::SampledSurface;
    }
    config.worldgen.validate().context("Invalid generation settings")?;
    Ok(())
}
