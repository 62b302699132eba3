//! Span detection and emission: walks the reduced cell matrix looking for
//! the largest rectangular span each unclaimed cell can grow into, then
//! hands the result to [`crate::surgery`] to actually rewrite the tree.
//!
//! A cell grows rightward past a column boundary only while that boundary
//! isn't a drawn rule and the text itself is seen crossing it — the same
//! kind of evidence the reducer used to collapse whole columns, applied
//! here one candidate span at a time instead of to an entire column.
//! Growing downward additionally requires that at least one cell in the
//! row being absorbed shows that crossing evidence; a row with no
//! evidence at all that it belongs with the row above stays separate.

use tablehunt_types::{BlockId, GridBlock, GridPositions, Page, Rect, StandardStructure};

use crate::error::HuntResult;
use crate::matrix::CellMatrix;
use crate::surgery::{find_insertion_point, insert_structural_block, move_contained_content};

/// Builds the table (and its rows and cells) described by `matrix`,
/// `xs` and `ys`, rewriting `page` in place under `parent`. Returns
/// `false` without touching the tree if the matrix has no content at all.
pub fn transcribe_table(
    page: &mut Page,
    parent: Option<BlockId>,
    xs: &GridPositions,
    ys: &GridPositions,
    matrix: &CellMatrix,
) -> HuntResult<bool> {
    let (Some(x0), Some(x1)) = (xs.first_pos(), xs.last_pos()) else {
        return Ok(false);
    };
    let (Some(y0), Some(y1)) = (ys.first_pos(), ys.last_pos()) else {
        return Ok(false);
    };
    let table_rect = Rect::new(x0, y0, x1, y1);

    let before = find_insertion_point(page.arena(), parent, table_rect);
    let table_id = insert_structural_block(page, parent, before, StandardStructure::Table, table_rect)?;

    let grid_id = page.alloc(tablehunt_types::Block::Grid(GridBlock {
        bbox: table_rect,
        xs: xs.clone(),
        ys: ys.clone(),
    }))?;
    page.arena_mut().insert_before(grid_id, None, Some(table_id));

    // the matrix's last column/row is edge-only; real cells are everything
    // before it
    let cols = matrix.cols() - 1;
    let rows = matrix.rows() - 1;
    let mut sent = vec![false; cols * rows];
    let mut any_emitted = false;

    for y in 0..rows {
        if (0..cols).all(|x| sent[y * cols + x]) {
            continue;
        }
        let tr_rect = Rect::new(table_rect.x0, ys.list[y].pos, table_rect.x1, ys.list[y + 1].pos);
        let tr_id = insert_structural_block(page, Some(table_id), None, StandardStructure::Tr, tr_rect)?;

        for x in 0..cols {
            if sent[y * cols + x] {
                continue;
            }

            let mut x2 = x + 1;
            while x2 < cols && !matrix.get(x2, y).v_line && xs.list[x2].uncertainty != 0 && matrix.get(x2 - 1, y).v_crossed {
                x2 += 1;
            }

            let mut y2 = y + 1;
            while y2 < rows && ys.list[y2].uncertainty != 0 {
                let blocked = (x..x2).any(|cx| matrix.get(cx, y2).h_line);
                if blocked {
                    break;
                }
                let any_crossed = (x..x2).any(|cx| matrix.get(cx, y2 - 1).h_crossed);
                if !any_crossed {
                    break;
                }
                y2 += 1;
            }

            // The divider rectangle, not the union of the content inside
            // it — otherwise a spanned cell with no content of its own
            // would end up with an empty bbox.
            let cell_rect = Rect::new(xs.list[x].pos, ys.list[y].pos, xs.list[x2].pos, ys.list[y2].pos);
            let td_id = insert_structural_block(page, Some(tr_id), None, StandardStructure::Td, cell_rect)?;
            move_contained_content(page, parent, cell_rect, td_id);

            for cy in y..y2 {
                for cx in x..x2 {
                    sent[cy * cols + cx] = true;
                }
            }
            any_emitted = true;
        }
    }

    Ok(any_emitted)
}
