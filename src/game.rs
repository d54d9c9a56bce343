//! Top-level game state
//!
//! Owns everything the running game needs: configuration, block store,
//! generator, entities and the queue of edit requests coming from input.

use std::collections::VecDeque;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::GameConfig;
use crate::entity::{EntityKind, EntityManager};
use crate::world::{
    apply_edit, initialize_world, raycast, BlockStore, ChunkGenerator, EditKind, EditOutcome,
    NoopPresenter, PointerButton, Presenter, WorldGenError, WorldSummary,
};

/// A view ray from the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub edits_applied: usize,
    /// Misses, unmapped buttons and edits with no effect
    pub edits_ignored: usize,
    pub entities: usize,
}

pub struct GameState<P: Presenter = NoopPresenter> {
    config: GameConfig,
    store: BlockStore<P>,
    generator: ChunkGenerator,
    entities: EntityManager,
    pending_edits: VecDeque<(Ray, PointerButton)>,
    rng: Xoshiro256StarStar,
    summary: WorldSummary,
}

impl GameState<NoopPresenter> {
    /// Headless game: builds the world without a renderer attached
    pub fn new(config: GameConfig) -> Result<Self, WorldGenError> {
        Self::with_presenter(config, NoopPresenter)
    }
}

impl<P: Presenter> GameState<P> {
    /// Build the generator, generate the starting area and populate it
    pub fn with_presenter(config: GameConfig, presenter: P) -> Result<Self, WorldGenError> {
        let generator = ChunkGenerator::from_config(config.seed, config.worldgen.clone())?;
        let mut store = BlockStore::with_presenter(presenter);
        let summary = initialize_world(&generator, &mut store);

        let mut state = Self {
            entities: EntityManager::new(),
            pending_edits: VecDeque::new(),
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
            config,
            store,
            generator,
            summary,
        };
        state.spawn_initial_entities();
        Ok(state)
    }

    fn spawn_initial_entities(&mut self) {
        let world = &self.config.worldgen.world;
        let half_extent = (world.initial_chunk_radius + 1) * world.chunk_size;
        let max_y = world.world_height;

        for _ in 0..self.config.entities.initial_count {
            let x = self.rng.random_range(-half_extent + world.chunk_size..half_extent);
            let z = self.rng.random_range(-half_extent + world.chunk_size..half_extent);
            if self
                .entities
                .spawn_on_surface(&self.store, EntityKind::Sheep, x, z, max_y)
                .is_none()
            {
                log::warn!("No surface to spawn on at ({}, {})", x, z);
            }
        }
        log::info!("Spawned {} entities", self.entities.len());
    }

    /// Queue a pointer press along `ray`; applied on the next `tick`
    pub fn queue_edit(&mut self, ray: Ray, button: PointerButton) {
        self.pending_edits.push_back((ray, button));
    }

    /// Apply queued edits in order, then advance entities
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let place_block = self.config.interaction.place_block;
        let max_distance = self.config.interaction.max_distance;

        while let Some((ray, button)) = self.pending_edits.pop_front() {
            let outcome = EditKind::from_button(button, place_block).and_then(|kind| {
                let hit = raycast(&self.store, ray.origin, ray.direction, max_distance)?;
                Some(apply_edit(&mut self.store, hit.target, kind))
            });

            match outcome {
                Some(EditOutcome::Applied) => report.edits_applied += 1,
                Some(EditOutcome::NoEffect) | None => report.edits_ignored += 1,
            }
        }

        self.entities.update(&mut self.rng);
        report.entities = self.entities.len();
        report
    }

    /// Tear down entities and report the final world size
    pub fn shutdown(mut self) -> BlockStore<P> {
        self.entities.clear();
        log::info!(
            "Shutting down with {} blocks in the world",
            self.store.len()
        );
        self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &BlockStore<P> {
        &self.store
    }

    pub fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    pub fn summary(&self) -> &WorldSummary {
        &self.summary
    }

    pub fn pending_edits(&self) -> usize {
        self.pending_edits.len()
    }
}
