//! Row and column reduction: collapses adjacent columns (or rows) that
//! shouldn't have been split apart in the first place.
//!
//! Two adjacent columns merge when, in every row, either side is simply
//! empty, or both sides are full with matching ruled-top status and
//! content is actually observed crossing the divider between them. A
//! drawn vertical rule on the right-hand column always blocks the merge
//! outright — a real ruled divider is never reduced away. The scan runs
//! right to left so that merging a pair doesn't invalidate the indices of
//! pairs still waiting to be checked to its left.

use tablehunt_types::GridPositions;

use crate::matrix::{CellMatrix, CellRecord};

fn merge_cells(a: CellRecord, b: CellRecord) -> CellRecord {
    CellRecord {
        h_line: a.h_line || b.h_line,
        v_line: a.v_line,
        h_crossed: a.h_crossed || b.h_crossed,
        v_crossed: a.v_crossed || b.v_crossed,
        full: a.full || b.full,
    }
}

fn columns_mergeable(matrix: &CellMatrix, x: usize) -> bool {
    for y in 0..matrix.rows() {
        let a = matrix.get(x, y);
        let b = matrix.get(x + 1, y);
        if b.v_line {
            return false;
        }
        if !a.full || !b.full {
            continue;
        }
        if a.h_line != b.h_line {
            return false;
        }
        if !b.v_crossed {
            return false;
        }
    }
    true
}

fn rows_mergeable(matrix: &CellMatrix, y: usize) -> bool {
    for x in 0..matrix.cols() {
        let a = matrix.get(x, y);
        let b = matrix.get(x, y + 1);
        if b.h_line {
            return false;
        }
        if !a.full || !b.full {
            continue;
        }
        if a.v_line != b.v_line {
            return false;
        }
        if !b.h_crossed {
            return false;
        }
    }
    true
}

pub fn merge_columns(matrix: &mut CellMatrix, xs: &mut GridPositions) {
    // the matrix's last column is the edge-only one; only real columns
    // (everything before it) are candidates for merging
    let real_cols = matrix.cols().saturating_sub(1);
    if real_cols < 2 {
        return;
    }
    let mut x = real_cols - 2;
    loop {
        if columns_mergeable(matrix, x) {
            for y in 0..matrix.rows() {
                let merged = merge_cells(matrix.get(x, y), matrix.get(x + 1, y));
                matrix.set(x, y, merged);
            }
            matrix.remove_column(x + 1);
            xs.list.remove(x + 1);
        }
        if x == 0 {
            break;
        }
        x -= 1;
    }
}

pub fn merge_rows(matrix: &mut CellMatrix, ys: &mut GridPositions) {
    // the matrix's last row is the edge-only one; only real rows
    // (everything above it) are candidates for merging
    let real_rows = matrix.rows().saturating_sub(1);
    if real_rows < 2 {
        return;
    }
    let mut y = real_rows - 2;
    loop {
        if rows_mergeable(matrix, y) {
            for x in 0..matrix.cols() {
                let merged = merge_cells(matrix.get(x, y), matrix.get(x, y + 1));
                matrix.set(x, y, merged);
            }
            matrix.remove_row(y + 1);
            ys.list.remove(y + 1);
        }
        if y == 0 {
            break;
        }
        y -= 1;
    }
}
