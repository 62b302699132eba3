//! Reinforces grid positions from drawn vector content (rules, underlines,
//! cell borders) and records which cells they touch.
//!
//! A vector block much wider than it is tall (and thin) reads as a drawn
//! horizontal rule; much taller than wide (and thin) as a vertical rule;
//! anything else is treated as an outline or filled rectangle and
//! decomposed into its four edges. A vector block that doesn't land near
//! any known grid position at all — neither as a rule nor as a rectangle —
//! is given one second chance: if the *next* vector block in document
//! order is collinear with it and close enough, the two are merged into
//! one bounding box and retried once, to recover rules PDF producers often
//! emit as a run of short dashes rather than one continuous stroke.

use tablehunt_types::{Arena, Block, BlockId, GridPositions, Rect};

use crate::config::HuntOptions;
use crate::matrix::CellMatrix;

const EPS: f64 = 1e-6;

/// Finds the grid position whose `[min, max]` ambiguity window contains
/// `x`, reinforcing it with `x`'s exact coordinate. With `expand` set, a
/// point that falls in the gap between two windows — or past the
/// outermost one — snaps to whichever neighboring window is nearer instead
/// of failing; without it, `x` must land inside some window outright.
fn find_with_reinforcement(positions: &mut GridPositions, x: f64, expand: bool) -> Option<usize> {
    let n = positions.list.len();
    for i in 0..n {
        let (min, max) = (positions.list[i].min, positions.list[i].max);
        if x >= min && x <= max {
            positions.list[i].reinforce(x);
            return Some(i);
        }
    }
    if !expand || n == 0 {
        return None;
    }
    if x < positions.list[0].min {
        positions.list[0].reinforce(x);
        return Some(0);
    }
    let last = n - 1;
    if x > positions.list[last].max {
        positions.list[last].reinforce(x);
        return Some(last);
    }
    for i in 0..n - 1 {
        let (max_i, min_next) = (positions.list[i].max, positions.list[i + 1].min);
        if x > max_i && x < min_next {
            let mid = (max_i + min_next) / 2.0;
            let idx = if x < mid { i } else { i + 1 };
            positions.list[idx].reinforce(x);
            return Some(idx);
        }
    }
    None
}

fn add_h_line(x0: f64, x1: f64, y: f64, xs: &mut GridPositions, ys: &mut GridPositions, matrix: &mut CellMatrix) -> bool {
    let xi0 = find_with_reinforcement(xs, x0, true);
    let xi1 = find_with_reinforcement(xs, x1, true);
    let yi = find_with_reinforcement(ys, y, false);
    match (xi0, xi1, yi) {
        (Some(a), Some(b), Some(y)) => {
            matrix.mark_h_line(a.min(b), a.max(b), y);
            true
        }
        _ => false,
    }
}

fn add_v_line(y0: f64, y1: f64, x: f64, xs: &mut GridPositions, ys: &mut GridPositions, matrix: &mut CellMatrix) -> bool {
    let yi0 = find_with_reinforcement(ys, y0, true);
    let yi1 = find_with_reinforcement(ys, y1, true);
    let xi = find_with_reinforcement(xs, x, false);
    match (yi0, yi1, xi) {
        (Some(a), Some(b), Some(x)) => {
            matrix.mark_v_line(a.min(b), a.max(b), x);
            true
        }
        _ => false,
    }
}

fn add_rule(bbox: Rect, xs: &mut GridPositions, ys: &mut GridPositions, matrix: &mut CellMatrix, options: &HuntOptions) -> bool {
    let w = bbox.width();
    let h = bbox.height();
    if w > h && h < options.thin_threshold {
        add_h_line(bbox.x0, bbox.x1, (bbox.y0 + bbox.y1) / 2.0, xs, ys, matrix)
    } else if w < h && w < options.thin_threshold {
        add_v_line(bbox.y0, bbox.y1, (bbox.x0 + bbox.x1) / 2.0, xs, ys, matrix)
    } else {
        let top = add_h_line(bbox.x0, bbox.x1, bbox.y0, xs, ys, matrix);
        let bottom = add_h_line(bbox.x0, bbox.x1, bbox.y1, xs, ys, matrix);
        let left = add_v_line(bbox.y0, bbox.y1, bbox.x0, xs, ys, matrix);
        let right = add_v_line(bbox.y0, bbox.y1, bbox.x1, xs, ys, matrix);
        (top || bottom) || (left || right)
    }
}

fn collinear_and_close(a: Rect, b: Rect, gap: f64) -> bool {
    let same_row = (a.y0 - b.y0).abs() < EPS && (a.y1 - b.y1).abs() < EPS;
    let same_col = (a.x0 - b.x0).abs() < EPS && (a.x1 - b.x1).abs() < EPS;
    if same_row {
        let dx = (b.x0 - a.x1).max(a.x0 - b.x1);
        return dx <= gap;
    }
    if same_col {
        let dy = (b.y0 - a.y1).max(a.y0 - b.y1);
        return dy <= gap;
    }
    false
}

pub fn walk(
    arena: &Arena,
    parent: Option<BlockId>,
    xs: &mut GridPositions,
    ys: &mut GridPositions,
    matrix: &mut CellMatrix,
    options: &HuntOptions,
) {
    let bboxes: Vec<Rect> = arena
        .children(parent)
        .filter_map(|id| match arena.block(id) {
            Block::Vector(v) => Some(v.bbox),
            _ => None,
        })
        .collect();

    let mut i = 0;
    while i < bboxes.len() {
        let bbox = bboxes[i];
        let ok = add_rule(bbox, xs, ys, matrix, options);
        if !ok && i + 1 < bboxes.len() {
            let next = bboxes[i + 1];
            if collinear_and_close(bbox, next, options.dash_merge_gap) {
                let _ = add_rule(bbox.union(next), xs, ys, matrix, options);
                i += 1;
            }
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablehunt_types::GridPosition;

    /// Builds fixture positions the way `grid::build_positions` would: each
    /// entry's window spans out to the midpoint with its neighbors, open on
    /// the outward side for the two outer entries.
    fn positions(vals: &[f64]) -> GridPositions {
        let n = vals.len();
        let list = vals
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let min = if i == 0 { f64::NEG_INFINITY } else { (vals[i - 1] + p) / 2.0 };
                let max = if i == n - 1 { f64::INFINITY } else { (p + vals[i + 1]) / 2.0 };
                GridPosition::with_window(p, min, max, 1)
            })
            .collect();
        GridPositions { list }
    }

    #[test]
    fn thin_wide_rectangle_reinforces_row_divider() {
        let mut xs = positions(&[0.0, 10.0, 20.0]);
        let mut ys = positions(&[0.0, 10.0]);
        let mut matrix = CellMatrix::new(3, 2);
        let bbox = Rect::new(0.0, 9.8, 20.0, 10.0);
        assert!(add_rule(bbox, &mut xs, &mut ys, &mut matrix, &HuntOptions::default()));
        assert_eq!(ys.list[1].reinforcement, 1);
    }

    #[test]
    fn collinear_dashes_within_gap_merge() {
        let a = Rect::new(0.0, 9.8, 5.0, 10.0);
        let b = Rect::new(5.5, 9.8, 10.0, 10.0);
        assert!(collinear_and_close(a, b, 1.0));
        let c = Rect::new(7.0, 9.8, 10.0, 10.0);
        assert!(!collinear_and_close(a, c, 1.0));
    }

    #[test]
    fn walk_reinforces_every_rule_on_the_page() {
        let mut xs = positions(&[0.0, 10.0, 20.0]);
        let mut ys = positions(&[0.0, 10.0]);
        let mut matrix = CellMatrix::new(3, 2);
        let mut arena = Arena::new();
        let id = arena
            .alloc(Block::Vector(tablehunt_types::VectorBlock { bbox: Rect::new(0.0, 9.8, 20.0, 10.0) }))
            .unwrap();
        arena.insert_before(id, None, None);
        walk(&arena, None, &mut xs, &mut ys, &mut matrix, &HuntOptions::default());
        assert_eq!(ys.list[1].reinforcement, 1);
    }
}
