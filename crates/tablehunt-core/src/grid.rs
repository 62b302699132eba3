//! Turns a sorted list of divider events into grid positions.
//!
//! Content runs are treated as intervals that are "open" while inside a
//! run and "closed" in the gaps between them. Walking the events left to
//! right while tracking how many runs are currently open, every point
//! where that count returns to zero is a local minimum: no content is
//! straddling it, so it is a candidate divider. The very first event and
//! the very last are always such positions too, since nothing is open
//! before the first run starts or after the last one ends.
//!
//! An interior divider's recorded position is the midpoint between the
//! closing run's right edge and the next run's left edge, not either edge
//! on its own — the gap between them is genuinely ambiguous, and that same
//! `[min, max]` span becomes the divider's ambiguity window for later rule
//! reinforcement. The two outer boundary dividers have no such gap to split
//! and sit at the edge coordinate itself, with their window left open on
//! the outward side.

use tablehunt_types::{GridPosition, GridPositions};

use crate::events::DividerEvent;

pub fn build_positions(mut events: Vec<DividerEvent>) -> GridPositions {
    events.sort_by(|a, b| a.pos.partial_cmp(&b.pos).unwrap());

    let mut out = GridPositions::new();
    let mut wind: i64 = 0;
    let n = events.len();
    for (i, ev) in events.iter().enumerate() {
        wind -= ev.closes as i64;
        // A real gap only counts as a divider if nothing reopens at the
        // exact same coordinate (the run immediately resuming means there
        // was no actual gap there) — except for the very first event, whose
        // position is always the grid's outer boundary regardless.
        if wind == 0 && (ev.opens == 0 || i == 0) {
            let uncertainty = ev.opens.max(ev.closes);
            let is_first = i == 0;
            let is_last = i == n - 1;
            let position = if is_first && is_last {
                GridPosition::with_window(ev.pos, f64::NEG_INFINITY, f64::INFINITY, uncertainty)
            } else if is_first {
                GridPosition::with_window(ev.pos, f64::NEG_INFINITY, ev.pos, uncertainty)
            } else if is_last {
                GridPosition::with_window(ev.pos, ev.pos, f64::INFINITY, uncertainty)
            } else {
                let next = events[i + 1].pos;
                GridPosition::with_window((ev.pos + next) / 2.0, ev.pos, next, uncertainty)
            };
            out.list.push(position);
        }
        wind += ev.opens as i64;
    }
    out
}

/// Coalesces adjacent positions that landed on (or within floating-point
/// noise of) the same coordinate, keeping the higher uncertainty count,
/// then drops the now-redundant duplicates. Mirrors the original's
/// "coalesce same-sided runs, then compact zero-freq" two-pass cleanup.
pub fn sanitize(positions: &GridPositions) -> GridPositions {
    const EPS: f64 = 1e-6;
    let mut out: Vec<GridPosition> = Vec::new();
    for &p in &positions.list {
        if let Some(last) = out.last_mut() {
            if (last.pos - p.pos).abs() < EPS {
                last.uncertainty = last.uncertainty.max(p.uncertainty);
                last.reinforcement = last.reinforcement.max(p.reinforcement);
                last.min = last.min.min(p.min);
                last.max = last.max.max(p.max);
                continue;
            }
        }
        out.push(p);
    }
    GridPositions { list: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DividerEvent;

    fn ev(pos: f64, opens: u32, closes: u32) -> DividerEvent {
        DividerEvent { pos, opens, closes }
    }

    #[test]
    fn two_separated_runs_yield_three_divider_positions() {
        // run [0,5], gap, run [10,15]
        let events = vec![ev(0.0, 1, 0), ev(5.0, 0, 1), ev(10.0, 1, 0), ev(15.0, 0, 1)];
        let positions = build_positions(events);
        let xs: Vec<f64> = positions.list.iter().map(|p| p.pos).collect();
        // the interior divider sits at the midpoint of the gap, not at
        // either run's bare edge
        assert_eq!(xs, vec![0.0, 7.5, 15.0]);
        assert_eq!(positions.list[1].min, 5.0);
        assert_eq!(positions.list[1].max, 10.0);
    }

    #[test]
    fn touching_runs_still_record_the_boundary() {
        let events = vec![ev(0.0, 1, 0), ev(5.0, 1, 1), ev(10.0, 0, 1)];
        let positions = build_positions(events);
        let xs: Vec<f64> = positions.list.iter().map(|p| p.pos).collect();
        assert_eq!(xs, vec![0.0, 10.0]);
    }

    #[test]
    fn sanitize_merges_near_duplicate_positions() {
        let positions = GridPositions {
            list: vec![GridPosition::new(1.0, 2), GridPosition::new(1.0000001, 1)],
        };
        let out = sanitize(&positions);
        assert_eq!(out.list.len(), 1);
        assert_eq!(out.list[0].uncertainty, 2);
    }
}
