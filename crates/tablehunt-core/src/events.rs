//! Extent collection: turns a block's text content into two lists of
//! divider events (one per axis) describing where content starts and
//! stops.
//!
//! Each text line contributes a Y-axis open/close pair spanning its own
//! bounding box. Along X, each line is further broken into runs of
//! non-space characters: a single interior space does not end a run (two
//! words separated by one space still read as one continuous run of
//! content for the purposes of finding column gaps), but a trailing space
//! or a run of two or more spaces does.

use tablehunt_types::{Arena, Block, BlockId};

#[derive(Debug, Clone, Copy)]
pub struct DividerEvent {
    pub pos: f64,
    pub opens: u32,
    pub closes: u32,
}

/// Inserts an open or close event at `pos`, coalescing with an existing
/// event at the exact same position. Linear scan, matching the original's
/// own `div_list_push` (whose comment notes a sorted list would let this be
/// a binary search instead).
fn push(list: &mut Vec<DividerEvent>, pos: f64, is_open: bool) {
    for ev in list.iter_mut() {
        if ev.pos == pos {
            if is_open {
                ev.opens += 1;
            } else {
                ev.closes += 1;
            }
            return;
        }
    }
    let mut idx = list.len();
    for (i, ev) in list.iter().enumerate() {
        if ev.pos > pos {
            idx = i;
            break;
        }
    }
    list.insert(
        idx,
        DividerEvent {
            pos,
            opens: if is_open { 1 } else { 0 },
            closes: if is_open { 0 } else { 1 },
        },
    );
}

/// Collects X and Y divider events from the direct, non-structural
/// children of `parent`. Vector content is not a source of extent events;
/// drawn rules are handled separately by [`crate::rules`].
pub fn collect(arena: &Arena, parent: Option<BlockId>) -> (Vec<DividerEvent>, Vec<DividerEvent>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for id in arena.children(parent) {
        let Block::Text(text) = arena.block(id) else {
            continue;
        };
        for line in &text.lines {
            push(&mut ys, line.bbox.y0, true);
            push(&mut ys, line.bbox.y1, false);
            collect_line_runs(line, &mut xs);
        }
    }

    (xs, ys)
}

fn collect_line_runs(line: &tablehunt_types::Line, xs: &mut Vec<DividerEvent>) {
    for (start, end) in line_runs(line) {
        push(xs, start, true);
        push(xs, end, false);
    }
}

/// The left/right extents of each non-space run on `line`. A single
/// interior space does not split a run; a trailing space or a run of two
/// or more spaces does.
pub(crate) fn line_runs(line: &tablehunt_types::Line) -> Vec<(f64, f64)> {
    let mut runs = Vec::new();
    let mut run_start: Option<f64> = None;
    let mut run_end = 0.0_f64;
    let mut pending_single_space = false;

    for ch in &line.chars {
        if ch.c == ' ' {
            if let Some(start) = run_start {
                if pending_single_space {
                    runs.push((start, run_end));
                    run_start = None;
                    pending_single_space = false;
                } else {
                    pending_single_space = true;
                }
            }
            continue;
        }

        if run_start.is_none() {
            run_start = Some(ch.quad.left_x());
        }
        pending_single_space = false;
        run_end = ch.quad.right_x();
    }

    if let Some(start) = run_start {
        runs.push((start, run_end));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablehunt_types::{Char, Direction, Line, Quad, Rect, WriteMode};

    fn line(words: &[(f64, f64)]) -> Line {
        let mut chars = Vec::new();
        for (i, &(x0, x1)) in words.iter().enumerate() {
            if i > 0 {
                chars.push(Char { c: ' ', quad: Quad::axis_aligned(chars.last().unwrap().quad.right_x(), 0.0, x0, 10.0) });
            }
            chars.push(Char { c: 'x', quad: Quad::axis_aligned(x0, 0.0, x1, 10.0) });
        }
        Line {
            bbox: Rect::new(words[0].0, 0.0, words.last().unwrap().1, 10.0),
            dir: Direction::LeftToRight,
            wmode: WriteMode::Horizontal,
            chars,
        }
    }

    #[test]
    fn single_interior_space_does_not_split_run() {
        let l = line(&[(0.0, 5.0), (6.0, 10.0)]);
        let mut xs = Vec::new();
        collect_line_runs(&l, &mut xs);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].pos, 0.0);
        assert_eq!(xs[1].pos, 10.0);
    }

    #[test]
    fn y_events_bracket_line_bbox() {
        let mut arena = Arena::new();
        let l = line(&[(0.0, 5.0)]);
        let tb = tablehunt_types::TextBlock { bbox: l.bbox, lines: vec![l] };
        let id = arena.alloc(Block::Text(tb)).unwrap();
        arena.insert_before(id, None, None);
        let (_, ys) = collect(&arena, None);
        assert_eq!(ys.len(), 2);
        assert_eq!(ys[0].pos, 0.0);
        assert_eq!(ys[1].pos, 10.0);
    }
}
