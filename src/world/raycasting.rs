//! Raycasting utilities for block targeting
//!
//! Two ways to find the block under the crosshair:
//! - `resolve_target` when the renderer already intersected a block face
//! - `raycast` for a voxel traversal (DDA) directly against the block store

use glam::{IVec3, Vec3};

use crate::blocks::BlockType;
use crate::world::block_store::{BlockStore, Presenter};

/// Default reach of the player, in world units
pub const MAX_INTERACTION_DISTANCE: f32 = 5.0;

/// The block an edit acts on and the empty cell in front of the hit face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Block that was hit (break target)
    pub block: IVec3,
    /// Neighbor across the hit face (place target)
    pub adjacent: IVec3,
}

/// Result of a voxel traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub target: Target,
    /// Unit normal of the entered face; zero when the ray starts inside a block
    pub normal: IVec3,
    pub block_type: BlockType,
    /// Ray parameter at the face that was entered
    pub distance: f32,
}

/// Turn a surface hit into grid targets.
///
/// The hit block is found by stepping half a cell back along the face normal
/// from the intersection point. The adjacent cell is one full step along the
/// rounded normal.
pub fn resolve_target(point: Vec3, normal: Vec3) -> Target {
    let block = (point - normal * 0.5).floor().as_ivec3();
    let adjacent = block + normal.round().as_ivec3();
    Target { block, adjacent }
}

/// Walk the grid cells crossed by a ray and return the first stored block
/// within `max_distance`.
///
/// Returns `None` for a zero direction, an origin outside the integer grid,
/// or when nothing is hit.
pub fn raycast<P: Presenter>(
    store: &BlockStore<P>,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RayHit> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO || !on_grid(origin) {
        return None;
    }

    let mut cell = origin.floor().as_ivec3();
    let step = IVec3::new(axis_step(dir.x), axis_step(dir.y), axis_step(dir.z));

    // Ray length needed to cross one cell on each axis
    let t_delta = Vec3::new(inv_abs(dir.x), inv_abs(dir.y), inv_abs(dir.z));
    // Ray length to the first boundary on each axis
    let mut t_max = Vec3::new(
        first_crossing(origin.x, cell.x, dir.x),
        first_crossing(origin.y, cell.y, dir.y),
        first_crossing(origin.z, cell.z, dir.z),
    );

    let mut normal = IVec3::ZERO;
    let mut distance = 0.0;

    while distance <= max_distance {
        if let Some(record) = store.get(cell) {
            return Some(RayHit {
                target: Target {
                    block: cell,
                    adjacent: cell + normal,
                },
                normal,
                block_type: record.block_type,
                distance,
            });
        }

        if t_max.x < t_max.y && t_max.x < t_max.z {
            distance = t_max.x;
            cell.x = cell.x.checked_add(step.x)?;
            t_max.x += t_delta.x;
            normal = IVec3::new(-step.x, 0, 0);
        } else if t_max.y < t_max.z {
            distance = t_max.y;
            cell.y = cell.y.checked_add(step.y)?;
            t_max.y += t_delta.y;
            normal = IVec3::new(0, -step.y, 0);
        } else {
            distance = t_max.z;
            cell.z = cell.z.checked_add(step.z)?;
            t_max.z += t_delta.z;
            normal = IVec3::new(0, 0, -step.z);
        }
    }

    None
}

/// Whether every component floors to a representable cell index
#[inline]
fn on_grid(origin: Vec3) -> bool {
    let range = i32::MIN as f32..i32::MAX as f32;
    origin.is_finite() && origin.to_array().iter().all(|v| range.contains(&v.floor()))
}

#[inline]
fn axis_step(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else {
        -1
    }
}

#[inline]
fn inv_abs(d: f32) -> f32 {
    if d != 0.0 {
        1.0 / d.abs()
    } else {
        f32::INFINITY
    }
}

/// Ray length from `origin` to the first cell boundary on one axis.
/// Infinite when the ray runs parallel to the axis.
#[inline]
fn first_crossing(origin: f32, cell: i32, d: f32) -> f32 {
    if d > 0.0 {
        ((cell as f32 + 1.0) - origin) / d
    } else if d < 0.0 {
        (origin - cell as f32) / -d
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_top_face() {
        // Looking down at the top face of block (2, 63, -4)
        let target = resolve_target(Vec3::new(2.3, 64.0, -3.7), Vec3::Y);
        assert_eq!(target.block, IVec3::new(2, 63, -4));
        assert_eq!(target.adjacent, IVec3::new(2, 64, -4));
    }

    #[test]
    fn test_resolve_target_side_face() {
        // -X face of block (5, 10, 5)
        let target = resolve_target(Vec3::new(5.0, 10.5, 5.5), Vec3::NEG_X);
        assert_eq!(target.block, IVec3::new(5, 10, 5));
        assert_eq!(target.adjacent, IVec3::new(4, 10, 5));
    }

    #[test]
    fn test_raycast_hits_block_below() {
        let mut store = BlockStore::new();
        store.insert(IVec3::new(0, 63, 0), BlockType::Grass);

        let hit = raycast(&store, Vec3::new(0.5, 65.5, 0.5), Vec3::NEG_Y, 5.0)
            .expect("should hit grass");

        assert_eq!(hit.target.block, IVec3::new(0, 63, 0));
        assert_eq!(hit.target.adjacent, IVec3::new(0, 64, 0));
        assert_eq!(hit.normal, IVec3::Y);
        assert_eq!(hit.block_type, BlockType::Grass);
        assert!((hit.distance - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let mut store = BlockStore::new();
        store.insert(IVec3::new(10, 0, 0), BlockType::Stone);

        assert!(raycast(&store, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 5.0).is_none());
        assert!(raycast(&store, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 10.0).is_some());
    }

    #[test]
    fn test_raycast_diagonal_side_face() {
        let mut store = BlockStore::new();
        store.insert(IVec3::new(3, 0, 0), BlockType::Stone);

        let hit = raycast(&store, Vec3::new(0.5, 0.5, 0.2), Vec3::new(1.0, 0.0, 0.1), 5.0)
            .expect("should hit stone");

        assert_eq!(hit.target.block, IVec3::new(3, 0, 0));
        assert_eq!(hit.normal, IVec3::NEG_X);
        assert_eq!(hit.target.adjacent, IVec3::new(2, 0, 0));
    }

    #[test]
    fn test_raycast_from_inside_block() {
        let mut store = BlockStore::new();
        store.insert(IVec3::ZERO, BlockType::Water);

        let hit = raycast(&store, Vec3::splat(0.5), Vec3::Z, 5.0).expect("starts inside");
        assert_eq!(hit.normal, IVec3::ZERO);
        assert_eq!(hit.target.adjacent, hit.target.block);
    }

    #[test]
    fn test_raycast_rejects_origin_off_grid() {
        let mut store = BlockStore::new();
        store.insert(IVec3::ZERO, BlockType::Stone);

        assert!(raycast(&store, Vec3::new(f32::NAN, 0.5, 0.5), Vec3::X, 5.0).is_none());
        assert!(raycast(&store, Vec3::new(f32::INFINITY, 0.5, 0.5), Vec3::NEG_X, 5.0).is_none());
        assert!(raycast(&store, Vec3::new(0.5, 3e9, 0.5), Vec3::Y, 5.0).is_none());
        assert!(raycast(&store, Vec3::new(0.5, -3e9, 0.5), Vec3::NEG_Y, 5.0).is_none());
    }

    #[test]
    fn test_raycast_stops_at_grid_edge() {
        let store = BlockStore::new();
        // Largest f32 below i32::MAX still floors onto the grid; stepping past the edge ends the walk
        let edge = Vec3::new(2_147_483_520.0, 0.5, 0.5);
        assert!(raycast(&store, edge, Vec3::X, 1e9).is_none());
    }

    #[test]
    fn test_raycast_zero_direction_and_empty_world() {
        let store = BlockStore::new();
        assert!(raycast(&store, Vec3::ZERO, Vec3::ZERO, 5.0).is_none());
        assert!(raycast(&store, Vec3::ZERO, Vec3::NEG_Y, 5.0).is_none());
    }
}
