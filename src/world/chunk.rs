//! Chunk - a 16x16 column strip used as generation bounds
//!
//! Chunks are not stored. Only their blocks end up in the block store.

use glam::{IVec2, IVec3};

pub const CHUNK_SIZE: i32 = 16;

/// Horizontal bounds of one chunk in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub size: i32,
}

impl ChunkBounds {
    pub fn new(chunk_x: i32, chunk_z: i32, size: i32) -> Self {
        debug_assert!(size > 0);
        Self {
            chunk_x,
            chunk_z,
            size,
        }
    }

    /// World x/z of the chunk's (0, 0) column
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.chunk_x * self.size, self.chunk_z * self.size)
    }

    /// World x/z of the middle column
    pub fn center(&self) -> IVec2 {
        self.origin() + IVec2::splat(self.size / 2)
    }

    /// Whether a world coordinate falls inside this chunk's columns
    pub fn contains(&self, pos: IVec3) -> bool {
        let origin = self.origin();
        (origin.x..origin.x + self.size).contains(&pos.x)
            && (origin.y..origin.y + self.size).contains(&pos.z)
    }

    /// World x/z of every column, x outer and z inner
    pub fn columns(&self) -> impl Iterator<Item = IVec2> {
        let origin = self.origin();
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |z| origin + IVec2::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_and_center() {
        let bounds = ChunkBounds::new(-1, 2, CHUNK_SIZE);
        assert_eq!(bounds.origin(), IVec2::new(-16, 32));
        assert_eq!(bounds.center(), IVec2::new(-8, 40));
    }

    #[test]
    fn test_columns_order_and_count() {
        let bounds = ChunkBounds::new(0, 0, CHUNK_SIZE);
        let columns: Vec<IVec2> = bounds.columns().collect();
        assert_eq!(columns.len(), 256);
        assert_eq!(columns[0], IVec2::new(0, 0));
        // z varies fastest
        assert_eq!(columns[1], IVec2::new(0, 1));
        assert_eq!(columns[16], IVec2::new(1, 0));
        assert_eq!(columns[255], IVec2::new(15, 15));
    }

    #[test]
    fn test_contains() {
        let bounds = ChunkBounds::new(1, -1, CHUNK_SIZE);
        assert!(bounds.contains(IVec3::new(16, 500, -16)));
        assert!(bounds.contains(IVec3::new(31, -3, -1)));
        assert!(!bounds.contains(IVec3::new(32, 0, -1)));
        assert!(!bounds.contains(IVec3::new(16, 0, 0)));
    }
}
