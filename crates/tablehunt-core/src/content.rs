//! Crossing detection: finds where text content straddles grid cells
//! instead of respecting their boundaries, and marks which cells are
//! covered at all.
//!
//! Every non-space run of characters is mapped onto the cells it overlaps.
//! A run that spans more than one column means content is crossing a
//! vertical divider rather than stopping at it — good evidence that the
//! divider isn't real, or at least that this particular row doesn't honor
//! it. The same applies to a line that spans more than one row. A crossed
//! divider is recorded on the cell past it — the one the run crosses into,
//! not the one it started from. Cells a run lands in at all are marked
//! `full`, regardless of crossing.

use tablehunt_types::{Arena, Block, BlockId, GridPositions};

use crate::events::line_runs;
use crate::matrix::CellMatrix;

/// Finds the cell index `i` such that `positions[i] <= x < positions[i+1]`,
/// treating `x` equal to the very last position as belonging to the final
/// cell rather than falling off the end of the grid.
pub fn find_cell(positions: &GridPositions, x: f64) -> Option<usize> {
    let n = positions.list.len();
    if n < 2 {
        return None;
    }
    if x == positions.list[n - 1].pos {
        return Some(n - 2);
    }
    for i in 0..n - 1 {
        if positions.list[i].pos <= x && x < positions.list[i + 1].pos {
            return Some(i);
        }
    }
    None
}

pub fn walk(arena: &Arena, parent: Option<BlockId>, xs: &GridPositions, ys: &GridPositions, matrix: &mut CellMatrix) {
    for id in arena.children(parent) {
        let Block::Text(text) = arena.block(id) else {
            continue;
        };
        for line in &text.lines {
            let (Some(y0), Some(y1)) = (find_cell(ys, line.bbox.y0), find_cell(ys, line.bbox.y1)) else {
                continue;
            };
            let (y0, y1) = (y0.min(y1), y0.max(y1));
            for (start, end) in line_runs(line) {
                let (Some(x0), Some(x1)) = (find_cell(xs, start), find_cell(xs, end)) else {
                    continue;
                };
                let (x0, x1) = (x0.min(x1), x0.max(x1));
                for y in y0..=y1 {
                    for x in x0..=x1 {
                        if x >= matrix.cols() || y >= matrix.rows() {
                            continue;
                        }
                        matrix.get_mut(x, y).full = true;
                        // the cell the crossing lands in, not the one it
                        // departed from, carries the evidence
                        if x < x1 {
                            matrix.get_mut(x + 1, y).v_crossed = true;
                        }
                        if y < y1 {
                            matrix.get_mut(x, y + 1).h_crossed = true;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablehunt_types::{Char, Direction, GridPosition, Line, Quad, Rect, TextBlock, WriteMode};

    fn positions(vals: &[f64]) -> GridPositions {
        GridPositions { list: vals.iter().map(|&p| GridPosition::new(p, 1)).collect() }
    }

    #[test]
    fn find_cell_treats_trailing_boundary_as_last_cell() {
        let p = positions(&[0.0, 10.0, 20.0]);
        assert_eq!(find_cell(&p, 20.0), Some(1));
        assert_eq!(find_cell(&p, 5.0), Some(0));
        assert_eq!(find_cell(&p, 25.0), None);
    }

    #[test]
    fn run_spanning_two_columns_marks_v_crossed() {
        let xs = positions(&[0.0, 10.0, 20.0]);
        let ys = positions(&[0.0, 10.0]);
        let mut matrix = CellMatrix::new(3, 2);

        let word = Line {
            bbox: Rect::new(5.0, 0.0, 15.0, 10.0),
            dir: Direction::LeftToRight,
            wmode: WriteMode::Horizontal,
            chars: vec![
                Char { c: 'a', quad: Quad::axis_aligned(5.0, 0.0, 9.0, 10.0) },
                Char { c: 'b', quad: Quad::axis_aligned(9.0, 0.0, 15.0, 10.0) },
            ],
        };
        let mut arena = Arena::new();
        let id = arena.alloc(Block::Text(TextBlock { bbox: word.bbox, lines: vec![word] })).unwrap();
        arena.insert_before(id, None, None);

        walk(&arena, None, &xs, &ys, &mut matrix);
        assert!(matrix.get(1, 0).v_crossed, "the cell right of the crossing carries the evidence");
        assert!(matrix.get(0, 0).full);
        assert!(matrix.get(1, 0).full);
    }
}
