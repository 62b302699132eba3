//! Block-tree surgery: the operations that actually rewrite the page once
//! a grid candidate has been accepted — allocating the new structural
//! blocks, finding where they belong among their future siblings, and
//! migrating the content they claim out of wherever it used to live.

use tablehunt_types::{
    Arena, Block, BlockId, Line, Page, Point, Rect, StandardStructure, StructuralBlock, TextBlock,
};

use crate::error::HuntResult;

/// Finds the sibling `table_rect` should be inserted in front of: the
/// position right after the last sibling whose bounding box overlaps it,
/// preserving every other sibling's relative order. Falls back to the
/// head of the list when nothing overlaps at all, which only happens when
/// a grid is hunted from an otherwise-empty container.
pub fn find_insertion_point(arena: &Arena, parent: Option<BlockId>, table_rect: Rect) -> Option<BlockId> {
    let mut before = arena.children(parent).next();
    for id in arena.children(parent) {
        if !arena.block(id).bbox().intersect(table_rect).is_empty_inclusive() {
            before = arena.next_of(id);
        }
    }
    before
}

/// Allocates a new structural block and splices it into `parent`'s child
/// list immediately before `before`, numbering it one past the highest
/// structural index already present among its new siblings.
pub fn insert_structural_block(
    page: &mut Page,
    parent: Option<BlockId>,
    before: Option<BlockId>,
    tag: StandardStructure,
    bbox: Rect,
) -> HuntResult<BlockId> {
    let index = page.arena().max_structural_index(parent).map_or(0, |m| m + 1);
    let id = page.alloc(Block::Structural(StructuralBlock::new(tag, bbox, index)))?;
    page.arena_mut().insert_before(id, before, parent);
    Ok(id)
}

/// Moves every block among `source_parent`'s children that overlaps
/// `rect` into `dest`, appended in their existing relative order. A block
/// whose bbox sits entirely inside `rect` moves whole; a block entirely
/// outside is left untouched; a text block straddling the boundary is
/// split line by line, and partial lines character by character, rather
/// than moved or excluded wholesale. Only text blocks can be split —
/// vector content straddling a cell boundary stays with its original
/// parent, since unlike text it has no well-defined sub-unit to carry
/// across.
pub fn move_contained_content(page: &mut Page, source_parent: Option<BlockId>, rect: Rect, dest: BlockId) {
    let children: Vec<BlockId> = page.arena().children(source_parent).collect();
    for id in children {
        let bbox = page.arena().block(id).bbox();
        let clipped = bbox.intersect(rect);
        if clipped.is_empty_inclusive() {
            continue;
        }
        if clipped.equals(bbox) {
            page.arena_mut().unlink(id);
            page.arena_mut().insert_before(id, None, Some(dest));
            continue;
        }
        if matches!(page.arena().block(id), Block::Text(_)) {
            split_text_block_into(page, id, rect, dest);
        }
    }
}

fn split_text_block_into(page: &mut Page, id: BlockId, rect: Rect, dest: BlockId) {
    let mut acceptor_lines: Vec<Line> = Vec::new();

    if let Block::Text(t) = page.arena_mut().block_mut(id) {
        let mut donor_lines = Vec::with_capacity(t.lines.len());
        for mut line in t.lines.drain(..) {
            let clipped = line.bbox.intersect(rect);
            if clipped.is_empty_inclusive() {
                donor_lines.push(line);
                continue;
            }
            if clipped.equals(line.bbox) {
                acceptor_lines.push(line);
                continue;
            }

            let mut acceptor_chars = Vec::new();
            let mut donor_chars = Vec::new();
            for ch in line.chars.drain(..) {
                let b = ch.quad.bbox();
                let mid = Point::new((b.x0 + b.x1) / 2.0, (b.y0 + b.y1) / 2.0);
                let inside = mid.x >= rect.x0 && mid.x <= rect.x1 && mid.y >= rect.y0 && mid.y <= rect.y1;
                if inside {
                    acceptor_chars.push(ch);
                } else {
                    donor_chars.push(ch);
                }
            }
            if !acceptor_chars.is_empty() {
                let mut acceptor_line = Line { bbox: Rect::EMPTY, dir: line.dir, wmode: line.wmode, chars: acceptor_chars };
                acceptor_line.recalc_bbox();
                acceptor_lines.push(acceptor_line);
            }
            if !donor_chars.is_empty() {
                line.chars = donor_chars;
                line.recalc_bbox();
                donor_lines.push(line);
            }
        }
        t.lines = donor_lines;
        t.recalc_bbox();
    }

    if acceptor_lines.is_empty() {
        return;
    }
    let bbox = acceptor_lines.iter().fold(Rect::EMPTY, |acc, l| acc.union(l.bbox));
    if let Ok(new_id) = page.alloc(Block::Text(TextBlock { bbox, lines: acceptor_lines })) {
        page.arena_mut().insert_before(new_id, None, Some(dest));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablehunt_types::VectorBlock;

    #[test]
    fn insertion_point_falls_after_last_overlapping_sibling() {
        let mut page = Page::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let a = page.alloc(Block::Vector(VectorBlock { bbox: Rect::new(0.0, 0.0, 10.0, 10.0) })).unwrap();
        let b = page.alloc(Block::Vector(VectorBlock { bbox: Rect::new(50.0, 0.0, 60.0, 10.0) })).unwrap();
        let c = page.alloc(Block::Vector(VectorBlock { bbox: Rect::new(200.0, 200.0, 210.0, 210.0) })).unwrap();
        for id in [a, b, c] {
            page.arena_mut().insert_before(id, None, None);
        }
        let table_rect = Rect::new(0.0, 0.0, 60.0, 10.0);
        let before = find_insertion_point(page.arena(), None, table_rect);
        assert_eq!(before, Some(c));
    }

    #[test]
    fn whole_block_inside_rect_moves_entirely() {
        let mut page = Page::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let leaf = page.alloc(Block::Vector(VectorBlock { bbox: Rect::new(1.0, 1.0, 2.0, 2.0) })).unwrap();
        page.arena_mut().insert_before(leaf, None, None);
        let dest = page
            .alloc(Block::Structural(StructuralBlock::new(StandardStructure::Td, Rect::new(0.0, 0.0, 10.0, 10.0), 0)))
            .unwrap();
        page.arena_mut().insert_before(dest, None, None);

        move_contained_content(&mut page, None, Rect::new(0.0, 0.0, 10.0, 10.0), dest);

        assert_eq!(page.arena().children(None).collect::<Vec<_>>(), vec![dest]);
        assert_eq!(page.arena().children(Some(dest)).collect::<Vec<_>>(), vec![leaf]);
    }
}
