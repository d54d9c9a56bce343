//! Block catalogue - block types and their static properties

mod materials;

pub use materials::{BlockFlags, BlockProperties, BlockType};
