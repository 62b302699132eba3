//! Axis-aligned geometry: points, quads and rectangles.
//!
//! `Rect`'s emptiness test is deliberately *not* the standard
//! `x0 >= x1 || y0 >= y1` check. It uses `x0 > x1 || y0 > y1`, which keeps
//! zero-height or zero-width rectangles (the quad of a space character, for
//! instance) from being treated as empty. Block-tree surgery relies on this:
//! a space must still be testable for containment within a cell rectangle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Four corners of a (possibly rotated) quadrilateral. This engine only ever
/// receives axis-aligned quads (spec Non-goals exclude rotated/skewed text),
/// but the corner representation is kept general rather than collapsing to
/// a `Rect` up front, matching the source extraction layer's own quad type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub ll: Point,
    pub ul: Point,
    pub lr: Point,
    pub ur: Point,
}

impl Quad {
    pub fn axis_aligned(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Quad {
            ll: Point::new(x0, y1),
            ul: Point::new(x0, y0),
            lr: Point::new(x1, y1),
            ur: Point::new(x1, y0),
        }
    }

    pub fn bbox(&self) -> Rect {
        Rect::EMPTY
            .union(Rect::point(self.ll))
            .union(Rect::point(self.ul))
            .union(Rect::point(self.lr))
            .union(Rect::point(self.ur))
    }

    /// Leftmost X among the two left-hand corners, as used by the extent
    /// collector to find the start of a non-space run.
    pub fn left_x(&self) -> f64 {
        self.ll.x.min(self.ul.x)
    }

    /// Rightmost X among the two right-hand corners.
    pub fn right_x(&self) -> f64 {
        self.lr.x.max(self.ur.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// An inverted rectangle that unions away to nothing, matching
    /// `fz_empty_rect`'s convention of inverted bounds.
    pub const EMPTY: Rect = Rect {
        x0: f64::INFINITY,
        y0: f64::INFINITY,
        x1: f64::NEG_INFINITY,
        y1: f64::NEG_INFINITY,
    };

    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Rect { x0, y0, x1, y1 }
    }

    fn point(p: Point) -> Self {
        Rect::new(p.x, p.y, p.x, p.y)
    }

    pub fn union(self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn intersect(self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// The inclusive emptiness test preserved from the original (see module
    /// docs): `true` excludes genuinely disjoint rectangles, but keeps
    /// zero-height/zero-width ones.
    pub fn is_empty_inclusive(self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    pub fn equals(self, other: Rect) -> bool {
        self.x0 == other.x0 && self.y0 == other.y0 && self.x1 == other.x1 && self.y1 == other.y1
    }

    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_union_is_identity() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert!(Rect::EMPTY.union(r).equals(r));
    }

    #[test]
    fn zero_height_rect_is_not_inclusive_empty() {
        let space = Rect::new(10.0, 20.0, 10.0, 20.0);
        assert!(!space.is_empty_inclusive());
    }

    #[test]
    fn disjoint_rects_intersect_to_inclusive_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersect(b).is_empty_inclusive());
    }

    #[test]
    fn quad_bbox_matches_corners() {
        let q = Quad::axis_aligned(1.0, 2.0, 5.0, 9.0);
        let r = q.bbox();
        assert_eq!((r.x0, r.y0, r.x1, r.y1), (1.0, 2.0, 5.0, 9.0));
    }
}
