//! The block tree itself: an arena of content and structure blocks linked
//! by parent/prev/next indices rather than raw pointers.
//!
//! Every extracted page is a flat list of top-level blocks (the arena's
//! "root" child list). Table hunting works by running its grid-detection
//! pass over a block's children, then — on success — unlinking the blocks
//! it has claimed and relinking them as descendants of freshly allocated
//! `Table`/`Tr`/`Td` structural blocks. `BlockId` indexes into the arena;
//! nothing here ever frees a slot, so an id stays valid for the page's
//! whole lifetime even after the block it names has been moved elsewhere
//! in the tree.

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::geom::{Quad, Rect};
use crate::grid::GridPositions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Char {
    pub c: char,
    pub quad: Quad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub bbox: Rect,
    pub dir: Direction,
    pub wmode: WriteMode,
    pub chars: Vec<Char>,
}

impl Line {
    pub fn recalc_bbox(&mut self) {
        self.bbox = self
            .chars
            .iter()
            .fold(Rect::EMPTY, |acc, c| acc.union(c.quad.bbox()));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub bbox: Rect,
    pub lines: Vec<Line>,
}

impl TextBlock {
    pub fn recalc_bbox(&mut self) {
        self.bbox = self
            .lines
            .iter()
            .fold(Rect::EMPTY, |acc, l| acc.union(l.bbox));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorBlock {
    pub bbox: Rect,
}

/// The standard structure tags this engine ever introduces. Structural
/// blocks that were already present on the page before hunting carry their
/// own `raw` tag string and are left untouched; hunting only ever
/// allocates `Table`/`Tr`/`Td`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardStructure {
    Table,
    Tr,
    Td,
}

impl StandardStructure {
    pub fn raw_tag(self) -> &'static str {
        match self {
            StandardStructure::Table => "Table",
            StandardStructure::Tr => "TR",
            StandardStructure::Td => "TD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralBlock {
    pub bbox: Rect,
    pub tag: StandardStructure,
    pub raw: String,
    /// Order among structural siblings only, independent of `prev`/`next`
    /// document order which also counts interleaved text/vector blocks.
    pub index: u32,
    pub first_block: Option<BlockId>,
    pub last_block: Option<BlockId>,
}

impl StructuralBlock {
    pub fn new(tag: StandardStructure, bbox: Rect, index: u32) -> Self {
        StructuralBlock {
            bbox,
            raw: tag.raw_tag().to_string(),
            tag,
            index,
            first_block: None,
            last_block: None,
        }
    }
}

/// A decorative annotation carrying the divider positions table hunting
/// inferred, attached as the first child of the `Table` structural block it
/// describes. Never contains its own children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridBlock {
    pub bbox: Rect,
    pub xs: GridPositions,
    pub ys: GridPositions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Text(TextBlock),
    Vector(VectorBlock),
    Structural(StructuralBlock),
    Grid(GridBlock),
}

impl Block {
    pub fn bbox(&self) -> Rect {
        match self {
            Block::Text(t) => t.bbox,
            Block::Vector(v) => v.bbox,
            Block::Structural(s) => s.bbox,
            Block::Grid(g) => g.bbox,
        }
    }

    pub fn set_bbox(&mut self, r: Rect) {
        match self {
            Block::Text(t) => t.bbox = r,
            Block::Vector(v) => v.bbox = r,
            Block::Structural(s) => s.bbox = r,
            Block::Grid(g) => g.bbox = r,
        }
    }

    pub fn as_structural(&self) -> Option<&StructuralBlock> {
        match self {
            Block::Structural(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_structural_mut(&mut self) -> Option<&mut StructuralBlock> {
        match self {
            Block::Structural(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextBlock> {
        match self {
            Block::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node {
    block: Block,
    parent: Option<BlockId>,
    prev: Option<BlockId>,
    next: Option<BlockId>,
}

/// An arena of blocks linked into a tree by index rather than pointer.
/// Every node stores its own `parent`, even non-structural ones — a
/// generalization over the pointer-and-back-link original, which only
/// needed an up-pointer on structural nodes because its tree-surgery
/// routines always had the source and destination containers in hand
/// statically. The arena-based design needs a uniform way to unlink a
/// block from "wherever it currently lives", so every node carries one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    nodes: Vec<Node>,
    first_block: Option<BlockId>,
    last_block: Option<BlockId>,
}

impl Arena {
    pub fn new() -> Self {
        Arena::default()
    }

    pub fn block(&self, id: BlockId) -> &Block {
        &self.nodes[id.0 as usize].block
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.nodes[id.0 as usize].block
    }

    pub fn parent_of(&self, id: BlockId) -> Option<BlockId> {
        self.nodes[id.0 as usize].parent
    }

    pub fn prev_of(&self, id: BlockId) -> Option<BlockId> {
        self.nodes[id.0 as usize].prev
    }

    pub fn next_of(&self, id: BlockId) -> Option<BlockId> {
        self.nodes[id.0 as usize].next
    }

    /// Allocates a new, detached block. The caller must place it into the
    /// tree with [`Arena::insert_before`].
    pub fn alloc(&mut self, block: Block) -> Result<BlockId, ArenaError> {
        let idx = self.nodes.len();
        let idx: u32 = idx.try_into().map_err(|_| ArenaError::Capacity(u32::MAX))?;
        self.nodes.push(Node { block, parent: None, prev: None, next: None });
        Ok(BlockId(idx))
    }

    fn child_head(&self, parent: Option<BlockId>) -> Option<BlockId> {
        match parent {
            None => self.first_block,
            Some(id) => self.block(id).as_structural().and_then(|s| s.first_block),
        }
    }

    fn child_tail(&self, parent: Option<BlockId>) -> Option<BlockId> {
        match parent {
            None => self.last_block,
            Some(id) => self.block(id).as_structural().and_then(|s| s.last_block),
        }
    }

    fn set_child_head(&mut self, parent: Option<BlockId>, v: Option<BlockId>) {
        match parent {
            None => self.first_block = v,
            Some(id) => {
                if let Some(s) = self.block_mut(id).as_structural_mut() {
                    s.first_block = v;
                }
            }
        }
    }

    fn set_child_tail(&mut self, parent: Option<BlockId>, v: Option<BlockId>) {
        match parent {
            None => self.last_block = v,
            Some(id) => {
                if let Some(s) = self.block_mut(id).as_structural_mut() {
                    s.last_block = v;
                }
            }
        }
    }

    /// Unlinks `id` from its current parent's child list, patching the
    /// neighbors (and the parent's head/tail) it leaves behind. Does not
    /// clear `id`'s own `prev`/`next`/`parent`: the subsequent
    /// `insert_before` call overwrites them.
    pub fn unlink(&mut self, id: BlockId) {
        let node = &self.nodes[id.0 as usize];
        let (parent, prev, next) = (node.parent, node.prev, node.next);
        match prev {
            Some(p) => self.nodes[p.0 as usize].next = next,
            None => self.set_child_head(parent, next),
        }
        match next {
            Some(n) => self.nodes[n.0 as usize].prev = prev,
            None => self.set_child_tail(parent, prev),
        }
        let node = &mut self.nodes[id.0 as usize];
        node.prev = None;
        node.next = None;
    }

    /// Inserts `id` as a child of `parent`, immediately before `before`
    /// (or at the tail of `parent`'s children if `before` is `None`).
    pub fn insert_before(&mut self, id: BlockId, before: Option<BlockId>, parent: Option<BlockId>) {
        match before {
            Some(b) => {
                let prev = self.nodes[b.0 as usize].prev;
                {
                    let node = &mut self.nodes[id.0 as usize];
                    node.prev = prev;
                    node.next = Some(b);
                    node.parent = parent;
                }
                match prev {
                    Some(p) => self.nodes[p.0 as usize].next = Some(id),
                    None => self.set_child_head(parent, Some(id)),
                }
                self.nodes[b.0 as usize].prev = Some(id);
            }
            None => {
                let tail = self.child_tail(parent);
                {
                    let node = &mut self.nodes[id.0 as usize];
                    node.prev = tail;
                    node.next = None;
                    node.parent = parent;
                }
                match tail {
                    Some(t) => self.nodes[t.0 as usize].next = Some(id),
                    None => self.set_child_head(parent, Some(id)),
                }
                self.set_child_tail(parent, Some(id));
            }
        }
    }

    /// The children of `parent` (or the page's top-level blocks, if `None`)
    /// in document order.
    pub fn children(&self, parent: Option<BlockId>) -> ChildIter<'_> {
        ChildIter { arena: self, next: self.child_head(parent) }
    }

    pub fn bbox_of_children(&self, parent: Option<BlockId>) -> Rect {
        self.children(parent)
            .fold(Rect::EMPTY, |acc, id| acc.union(self.block(id).bbox()))
    }

    /// The highest `index` among existing structural children of `parent`,
    /// used by block-tree surgery to number a freshly inserted structural
    /// block correctly relative to its siblings.
    pub fn max_structural_index(&self, parent: Option<BlockId>) -> Option<u32> {
        self.children(parent)
            .filter_map(|id| self.block(id).as_structural().map(|s| s.index))
            .max()
    }
}

pub struct ChildIter<'a> {
    arena: &'a Arena,
    next: Option<BlockId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = BlockId;

    fn next(&mut self) -> Option<BlockId> {
        let cur = self.next?;
        self.next = self.arena.next_of(cur);
        Some(cur)
    }
}
