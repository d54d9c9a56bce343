//! Player block edits: break and place

use serde::{Deserialize, Serialize};

use crate::blocks::BlockType;
use crate::world::block_store::{BlockStore, Presenter};
use crate::world::raycasting::Target;

/// Pointer buttons as reported by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Map a DOM-style button index (0 = left, 1 = middle, 2 = right)
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Remove the targeted block
    Break,
    /// Insert a block in the cell adjacent to the hit face
    Place(BlockType),
}

impl EditKind {
    /// Primary breaks, secondary places `place_type`, anything else does nothing
    pub fn from_button(button: PointerButton, place_type: BlockType) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(EditKind::Break),
            PointerButton::Secondary => Some(EditKind::Place(place_type)),
            PointerButton::Middle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// Nothing to break, or the place cell was occupied
    NoEffect,
}

impl EditOutcome {
    pub fn is_applied(self) -> bool {
        self == EditOutcome::Applied
    }
}

/// Apply one edit to the store. Never fails: a no-op is reported as `NoEffect`.
pub fn apply_edit<P: Presenter>(
    store: &mut BlockStore<P>,
    target: Target,
    kind: EditKind,
) -> EditOutcome {
    let changed = match kind {
        EditKind::Break => store.remove(target.block),
        EditKind::Place(block_type) => store.insert(target.adjacent, block_type),
    };

    if changed {
        log::debug!("{:?} applied at {:?}", kind, target);
        EditOutcome::Applied
    } else {
        EditOutcome::NoEffect
    }
}
