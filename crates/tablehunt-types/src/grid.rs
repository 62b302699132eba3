//! Grid divider positions: the persisted output of table hunting.
//!
//! A `GridPositions` list is an ordered set of candidate divider coordinates
//! along one axis. Each entry starts out with an `uncertainty` count coming
//! from how many coalesced text-extent events agreed on it, and carries a
//! static `[min, max]` ambiguity window recorded once at construction time —
//! the span between the previous run's right edge and the next run's left
//! edge the divider was inferred from (unbounded on the outward side for the
//! two outer boundary dividers). A drawn rule reinforces a position by
//! landing inside its window, which pulls `pos` toward the rule's own
//! coordinate via a running mean and zeroes `uncertainty`, letting the
//! row/column reducer tell "real" ruled dividers apart from soft,
//! gap-inferred ones when deciding what can still be merged away.
//! `GridPositions::max_uncertainty` summarizes the list: it settles to zero
//! once every divider has been reinforced by a drawn rule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub pos: f64,
    pub min: f64,
    pub max: f64,
    pub uncertainty: u32,
    pub reinforcement: u32,
}

impl GridPosition {
    /// A divider with no recorded ambiguity window of its own, `pos` also
    /// serving as its `min`/`max`. Used by call sites that don't need to
    /// express a window, such as tests building fixtures by hand.
    pub fn new(pos: f64, uncertainty: u32) -> Self {
        GridPosition { pos, min: pos, max: pos, uncertainty, reinforcement: 0 }
    }

    /// A divider whose ambiguity window is `[min, max]`, with `pos` given
    /// explicitly rather than assumed to be the window's midpoint (the
    /// outer boundary dividers sit at one edge of their window, not its
    /// center).
    pub fn with_window(pos: f64, min: f64, max: f64, uncertainty: u32) -> Self {
        GridPosition { pos, min, max, uncertainty, reinforcement: 0 }
    }

    /// Folds a drawn-rule hit at `x` into this position's running mean and
    /// marks it reinforced.
    pub fn reinforce(&mut self, x: f64) {
        let r = self.reinforcement as f64;
        self.pos = (self.pos * r + x) / (r + 1.0);
        self.reinforcement += 1;
        self.uncertainty = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridPositions {
    pub list: Vec<GridPosition>,
}

impl GridPositions {
    pub fn new() -> Self {
        GridPositions::default()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn first_pos(&self) -> Option<f64> {
        self.list.first().map(|p| p.pos)
    }

    pub fn last_pos(&self) -> Option<f64> {
        self.list.last().map(|p| p.pos)
    }

    /// The highest remaining per-divider uncertainty across the whole list,
    /// zero once every divider has been reinforced by a drawn rule.
    pub fn max_uncertainty(&self) -> u32 {
        self.list.iter().map(|p| p.uncertainty).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinforce_zeroes_uncertainty_and_updates_running_mean() {
        let mut p = GridPosition::new(10.0, 3);
        p.reinforce(12.0);
        assert_eq!(p.uncertainty, 0);
        assert_eq!(p.reinforcement, 1);
        assert_eq!(p.pos, 12.0);

        p.reinforce(14.0);
        assert_eq!(p.reinforcement, 2);
        assert_eq!(p.pos, 13.0);
    }

    #[test]
    fn max_uncertainty_settles_to_zero_once_every_divider_is_reinforced() {
        let mut positions = GridPositions {
            list: vec![GridPosition::new(0.0, 2), GridPosition::new(10.0, 5)],
        };
        assert_eq!(positions.max_uncertainty(), 5);

        positions.list[0].reinforce(0.0);
        assert_eq!(positions.max_uncertainty(), 5);

        positions.list[1].reinforce(10.0);
        assert_eq!(positions.max_uncertainty(), 0);
    }
}
