//! The top-level page: a bounding box plus an [`Arena`] of blocks whose
//! root children are the page's top-level content.

use serde::{Deserialize, Serialize};

use crate::block::{Arena, Block, BlockId};
use crate::error::ArenaError;
use crate::geom::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub media_box: Rect,
    arena: Arena,
}

impl Page {
    pub fn new(media_box: Rect) -> Self {
        Page { media_box, arena: Arena::new() }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn alloc(&mut self, block: Block) -> Result<BlockId, ArenaError> {
        self.arena.alloc(block)
    }

    /// The page's top-level blocks, in document order.
    pub fn top_level(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.arena.children(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::VectorBlock;

    #[test]
    fn fresh_page_has_no_top_level_blocks() {
        let page = Page::new(Rect::new(0.0, 0.0, 612.0, 792.0));
        assert_eq!(page.top_level().count(), 0);
    }

    #[test]
    fn allocated_block_must_be_inserted_to_be_visible() {
        let mut page = Page::new(Rect::new(0.0, 0.0, 612.0, 792.0));
        let id = page
            .alloc(Block::Vector(VectorBlock { bbox: Rect::new(0.0, 0.0, 10.0, 10.0) }))
            .unwrap();
        assert_eq!(page.top_level().count(), 0);
        page.arena_mut().insert_before(id, None, None);
        assert_eq!(page.top_level().collect::<Vec<_>>(), vec![id]);
    }
}
