//! Block type definitions and property table

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Every kind of cell the world can hold.
///
/// `Air` means "empty" and is never stored in the block store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Bedrock = 4,
    Water = 5,
    Lava = 6,
    OakLog = 7,
    OakLeaves = 8,
    TallGrass = 9,
    IronOre = 10,
    CoalOre = 11,
}

impl BlockType {
    /// All block types in id order
    pub const ALL: [BlockType; 12] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Bedrock,
        BlockType::Water,
        BlockType::Lava,
        BlockType::OakLog,
        BlockType::OakLeaves,
        BlockType::TallGrass,
        BlockType::IronOre,
        BlockType::CoalOre,
    ];

    /// Stable numeric id (matches the renderer's material table)
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    pub fn is_ore(self) -> bool {
        matches!(self, BlockType::IronOre | BlockType::CoalOre)
    }

    pub fn is_fluid(self) -> bool {
        self.properties().flags.contains(BlockFlags::FLUID)
    }

    /// Whether entities and rays collide with this block
    pub fn is_solid(self) -> bool {
        self.properties().flags.contains(BlockFlags::SOLID)
    }

    pub fn name(self) -> &'static str {
        self.properties().name
    }

    /// Static attributes for this block type
    pub fn properties(self) -> &'static BlockProperties {
        &BLOCK_PROPERTIES[self as usize]
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Behaviour flags for a block type
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BlockFlags: u8 {
        /// Blocks movement and stops raycasts
        const SOLID = 1 << 0;
        /// Water and lava
        const FLUID = 1 << 1;
        /// Rendered with alpha blending
        const TRANSPARENT = 1 << 2;
        /// Plants and leaves
        const FOLIAGE = 1 << 3;
        /// Glows (lava)
        const EMISSIVE = 1 << 4;
    }
}

/// Static per-type attributes consumed by the renderer and collision code
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockProperties {
    pub name: &'static str,
    /// Base color (RGB)
    pub color: [u8; 3],
    /// 1.0 = fully opaque
    pub opacity: f32,
    pub flags: BlockFlags,
}

const fn props(name: &'static str, color: u32, opacity: f32, flags: BlockFlags) -> BlockProperties {
    BlockProperties {
        name,
        color: [(color >> 16) as u8, (color >> 8) as u8, color as u8],
        opacity,
        flags,
    }
}

const SOLID: BlockFlags = BlockFlags::SOLID;

// Indexed by `BlockType as usize`
static BLOCK_PROPERTIES: [BlockProperties; 12] = [
    props("air", 0x000000, 0.0, BlockFlags::TRANSPARENT),
    props("grass", 0x00cc00, 1.0, SOLID),
    props("dirt", 0x964b00, 1.0, SOLID),
    props("stone", 0x808080, 1.0, SOLID),
    props("bedrock", 0x333333, 1.0, SOLID),
    props(
        "water",
        0x0099ff,
        0.7,
        BlockFlags::FLUID.union(BlockFlags::TRANSPARENT),
    ),
    props("lava", 0xff4500, 1.0, BlockFlags::FLUID.union(BlockFlags::EMISSIVE)),
    props("oak_log", 0x8b4513, 1.0, SOLID),
    props(
        "oak_leaves",
        0x38761d,
        0.9,
        SOLID
            .union(BlockFlags::TRANSPARENT)
            .union(BlockFlags::FOLIAGE),
    ),
    props(
        "tall_grass",
        0x6aa84f,
        1.0,
        BlockFlags::FOLIAGE.union(BlockFlags::TRANSPARENT),
    ),
    props("iron_ore", 0xc4a170, 1.0, SOLID),
    props("coal_ore", 0x4f4f4f, 1.0, SOLID),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        for (index, block) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block.id() as usize, index);
            assert_eq!(BlockType::from_id(index as u8), Some(*block));
        }
        assert_eq!(BlockType::from_id(12), None);
    }

    #[test]
    fn test_property_table_matches_types() {
        assert_eq!(BlockType::Stone.name(), "stone");
        assert_eq!(BlockType::CoalOre.name(), "coal_ore");
        assert_eq!(BlockType::Grass.properties().color, [0x00, 0xcc, 0x00]);
        assert_eq!(BlockType::Water.properties().opacity, 0.7);
    }

    #[test]
    fn test_fluids_are_not_solid() {
        assert!(BlockType::Water.is_fluid());
        assert!(BlockType::Lava.is_fluid());
        assert!(!BlockType::Water.is_solid());
        assert!(!BlockType::Lava.is_solid());
        assert!(BlockType::Stone.is_solid());
        assert!(!BlockType::TallGrass.is_solid());
    }

    #[test]
    fn test_ore_classification() {
        assert!(BlockType::IronOre.is_ore());
        assert!(BlockType::CoalOre.is_ore());
        assert!(!BlockType::Stone.is_ore());
    }
}
