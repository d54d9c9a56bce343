//! Block store - sparse registry of every non-empty cell in the world

use ahash::AHashMap;
use glam::IVec3;

use crate::blocks::BlockType;

/// Hooks the rendering side uses to attach resources to stored blocks.
///
/// The store asks for a handle when a block is inserted and hands it back when
/// the block is removed, so the renderer can release whatever it allocated.
pub trait Presenter {
    /// Opaque per-block resource owned by the renderer
    type Handle;

    fn create(&mut self, pos: IVec3, block_type: BlockType) -> Self::Handle;

    fn dispose(&mut self, pos: IVec3, handle: Self::Handle);
}

/// Presenter for headless use (generation tools, tests, servers)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    type Handle = ();

    fn create(&mut self, _pos: IVec3, _block_type: BlockType) {}
    fn dispose(&mut self, _pos: IVec3, _handle: ()) {}
}

/// A stored block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord<H = ()> {
    pub block_type: BlockType,
    pub handle: H,
}

/// Sparse map from grid coordinate to block.
///
/// Holds at most one record per coordinate. A missing entry means air.
/// Insertion never overwrites: the first writer wins.
pub struct BlockStore<P: Presenter = NoopPresenter> {
    blocks: AHashMap<IVec3, BlockRecord<P::Handle>>,
    presenter: P,
}

impl BlockStore<NoopPresenter> {
    pub fn new() -> Self {
        Self::with_presenter(NoopPresenter)
    }
}

impl Default for BlockStore<NoopPresenter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Presenter> BlockStore<P> {
    pub fn with_presenter(presenter: P) -> Self {
        Self {
            blocks: AHashMap::new(),
            presenter,
        }
    }

    /// Insert a block. Returns false (and changes nothing) if the coordinate is
    /// already occupied or `block_type` is air.
    pub fn insert(&mut self, pos: IVec3, block_type: BlockType) -> bool {
        if block_type.is_air() || self.blocks.contains_key(&pos) {
            return false;
        }

        let handle = self.presenter.create(pos, block_type);
        self.blocks.insert(pos, BlockRecord { block_type, handle });
        true
    }

    /// Remove a block and release its presentation handle.
    /// Returns false if nothing was stored at `pos`.
    pub fn remove(&mut self, pos: IVec3) -> bool {
        match self.blocks.remove(&pos) {
            Some(record) => {
                self.presenter.dispose(pos, record.handle);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, pos: IVec3) -> Option<&BlockRecord<P::Handle>> {
        self.blocks.get(&pos)
    }

    /// Block type at `pos`, `Air` if nothing is stored
    #[inline]
    pub fn block_type_at(&self, pos: IVec3) -> BlockType {
        self.blocks
            .get(&pos)
            .map_or(BlockType::Air, |record| record.block_type)
    }

    #[inline]
    pub fn contains(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// All stored records, in no particular order
    pub fn values(&self) -> impl Iterator<Item = &BlockRecord<P::Handle>> {
        self.blocks.values()
    }

    /// All stored records with their coordinates, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, &BlockRecord<P::Handle>)> {
        self.blocks.iter().map(|(pos, record)| (*pos, record))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of stored blocks of the given type
    pub fn count_by_type(&self, block_type: BlockType) -> usize {
        self.values()
            .filter(|record| record.block_type == block_type)
            .count()
    }

    /// Highest occupied y in the column at (x, z), scanning down from `max_y`
    /// (exclusive) to 0
    pub fn highest_block_in_column(&self, x: i32, z: i32, max_y: i32) -> Option<(i32, BlockType)> {
        (0..max_y).rev().find_map(|y| {
            self.get(IVec3::new(x, y, z))
                .map(|record| (y, record.block_type))
        })
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
