//! Intersection between two infinite lines.

use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Computes the intersection of the infinite lines passing through `(a1, a2)` and `(b1, b2)`.
///
/// Returns `None` if the lines are parallel or one of them is degenerate (two equal points).
pub fn line_intersection(
    a1: &Point<Real>,
    a2: &Point<Real>,
    b1: &Point<Real>,
    b2: &Point<Real>,
) -> Option<Point<Real>> {
    let dir_a = a2 - a1;
    let dir_b = b2 - b1;
    let denom = dir_a.perp(&dir_b);

    if denom.abs() < DEFAULT_EPSILON {
        return None;
    }

    let t = (b1 - a1).perp(&dir_b) / denom;
    Some(*a1 + dir_a * t)
}
