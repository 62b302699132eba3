//! The recursive driver: walks the block tree depth-first, hunting for a
//! table grid among each structural container's direct children before
//! looking at its parent's.
//!
//! Recursing into existing structure first means a table nested inside,
//! say, a list item or an existing table cell is found and rewritten
//! before its ancestor's own children are considered — so the ancestor
//! sees the already-collapsed structural block as a single unit rather
//! than re-walking content that's already been claimed.

use tracing::{debug, debug_span};

use tablehunt_types::{Block, BlockId, Page};

use crate::config::HuntOptions;
use crate::error::HuntResult;
use crate::matrix::CellMatrix;
use crate::{content, emit, events, grid, reduce, rules};

/// Hunts for table grids across the whole page, rewriting it in place.
pub fn hunt(page: &mut Page) -> HuntResult<()> {
    hunt_with_options(page, &HuntOptions::default())
}

pub fn hunt_with_options(page: &mut Page, options: &HuntOptions) -> HuntResult<()> {
    hunt_level(page, None, options)
}

fn hunt_level(page: &mut Page, parent: Option<BlockId>, options: &HuntOptions) -> HuntResult<()> {
    let _span = debug_span!("hunt_level", parent = ?parent).entered();

    let structural_children: Vec<BlockId> = page
        .arena()
        .children(parent)
        .filter(|&id| matches!(page.arena().block(id), Block::Structural(_)))
        .collect();
    for id in structural_children {
        hunt_level(page, Some(id), options)?;
    }

    let count = page.arena().children(parent).count();
    if count <= 1 {
        return Ok(());
    }

    let (xs_events, ys_events) = events::collect(page.arena(), parent);
    let xs = grid::sanitize(&grid::build_positions(xs_events));
    let ys = grid::sanitize(&grid::build_positions(ys_events));

    if xs.len() <= 2 || ys.len() <= 2 {
        debug!(x_positions = xs.len(), y_positions = ys.len(), "too few positions to form a grid");
        return Ok(());
    }

    let mut xs = xs;
    let mut ys = ys;
    let mut matrix = CellMatrix::new(xs.len(), ys.len());

    rules::walk(page.arena(), parent, &mut xs, &mut ys, &mut matrix, options);
    content::walk(page.arena(), parent, &xs, &ys, &mut matrix);
    reduce::merge_columns(&mut matrix, &mut xs);
    reduce::merge_rows(&mut matrix, &mut ys);

    if xs.len() < options.min_positions || ys.len() < options.min_positions {
        debug!("candidate collapsed below the minimum grid size during reduction");
        return Ok(());
    }

    let emitted = emit::transcribe_table(page, parent, &xs, &ys, &matrix)?;
    debug!(emitted, "table hunt finished for this container");
    Ok(())
}
