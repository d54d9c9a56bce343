//! Post-terrain feature placement: trees and towers
//!
//! Features are placed after a column (trees) or a whole chunk (towers) has
//! been committed. Every cell goes through `BlockStore::insert`, so features
//! never overwrite terrain or each other.

use glam::{IVec2, IVec3};

use crate::blocks::BlockType;
use crate::world::block_store::{BlockStore, Presenter};
use crate::world::worldgen_config::{StructureParams, TreeConfig};

/// Leaf layers relative to the leaf center, bottom to top
const LEAF_LAYERS: std::ops::RangeInclusive<i32> = -2..=1;
/// Horizontal reach of the canopy
const LEAF_SPREAD: i32 = 2;

/// Grow an oak rooted at the top block of a column.
///
/// The trunk starts AT `top_y`, so its first log lands on the grass cell and
/// is dropped by the store. Returns the number of blocks actually placed.
pub fn place_tree<P: Presenter>(
    store: &mut BlockStore<P>,
    world_x: i32,
    top_y: i32,
    world_z: i32,
    tree: &TreeConfig,
) -> usize {
    let mut placed = 0;

    for dy in 0..tree.trunk_height {
        if store.insert(IVec3::new(world_x, top_y + dy, world_z), BlockType::OakLog) {
            placed += 1;
        }
    }

    let leaf_center = IVec3::new(world_x, top_y + tree.trunk_height, world_z);
    for offset in canopy_offsets(tree.leaf_radius_sq) {
        if store.insert(leaf_center + offset, BlockType::OakLeaves) {
            placed += 1;
        }
    }

    placed
}

/// Leaf offsets around the leaf center: the ball dx^2 + dz^2 + (dy-1)^2 < r^2
/// clipped to the canopy box
fn canopy_offsets(leaf_radius_sq: i32) -> impl Iterator<Item = IVec3> {
    (-LEAF_SPREAD..=LEAF_SPREAD).flat_map(move |dx| {
        (-LEAF_SPREAD..=LEAF_SPREAD).flat_map(move |dz| {
            LEAF_LAYERS.filter_map(move |dy| {
                let dist_sq = dx * dx + dz * dz + (dy - 1) * (dy - 1);
                (dist_sq < leaf_radius_sq).then_some(IVec3::new(dx, dy, dz))
            })
        })
    })
}

/// Build a hollow square stone tower around `center`.
///
/// Walls occupy the ring of the footprint where |dx| or |dz| equals the
/// half-width; they rise from `footing_y + 1` for `tower_height` blocks.
pub fn place_tower<P: Presenter>(
    store: &mut BlockStore<P>,
    center: IVec2,
    footing_y: i32,
    structure: &StructureParams,
) -> usize {
    let half = structure.tower_size / 2;
    let mut placed = 0;

    for dx in -half..=half {
        for dz in -half..=half {
            if dx.abs() != half && dz.abs() != half {
                continue;
            }
            for dy in 0..structure.tower_height {
                let pos = IVec3::new(center.x + dx, footing_y + 1 + dy, center.y + dz);
                if store.insert(pos, BlockType::Stone) {
                    placed += 1;
                }
            }
        }
    }

    placed
}
