//! Entities - simple mobs that live on the generated surface

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::block_store::{BlockStore, Presenter};
use crate::world::rng_trait::WorldRng;

/// Maximum horizontal drift per update on each axis
const WANDER_STEP: f32 = 0.01;
/// Heading change per update, in radians
const TURN_RATE: f32 = 0.005;

/// Unique identifier for entities in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Generate a new unique entity ID
    pub fn new() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Sheep,
    Zombie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Center of the entity's footprint, feet at `position.y`
    pub position: Vec3,
    /// Rotation about the vertical axis, radians
    pub heading: f32,
}

/// Owns every live entity. One per game, no global registry.
#[derive(Debug, Default)]
pub struct EntityManager {
    entities: Vec<Entity>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: EntityKind, position: Vec3) -> EntityId {
        let id = EntityId::new();
        self.entities.push(Entity {
            id,
            kind,
            position,
            heading: 0.0,
        });
        log::debug!("Spawned {:?} {} at {}", kind, id, position);
        id
    }

    /// Spawn standing on the highest block of column (x, z) below `max_y`.
    /// Returns `None` if the column is empty.
    pub fn spawn_on_surface<P: Presenter>(
        &mut self,
        store: &BlockStore<P>,
        kind: EntityKind,
        x: i32,
        z: i32,
        max_y: i32,
    ) -> Option<EntityId> {
        let (top_y, _) = store.highest_block_in_column(x, z, max_y)?;
        let position = Vec3::new(x as f32 + 0.5, (top_y + 1) as f32, z as f32 + 0.5);
        Some(self.spawn(kind, position))
    }

    /// Advance every entity one step: a small random drift in x/z and a
    /// constant turn whose direction depends on the id's parity
    pub fn update<R: WorldRng + ?Sized>(&mut self, rng: &mut R) {
        for entity in &mut self.entities {
            let dx = (rng.gen_f32() - 0.5) * WANDER_STEP;
            let dz = (rng.gen_f32() - 0.5) * WANDER_STEP;
            entity.position += Vec3::new(dx, 0.0, dz);

            let turn = if entity.id.raw() % 2 == 0 {
                TURN_RATE
            } else {
                -TURN_RATE
            };
            entity.heading += turn;
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop every entity
    pub fn clear(&mut self) {
        let count = self.entities.len();
        self.entities.clear();
        log::debug!("Cleared {} entities", count);
    }
}
