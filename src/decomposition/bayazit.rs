//! Bayazit algorithm for convex partitioning of a simple polygon.
//!
//! Mark Bayazit's algorithm walks the polygon looking for reflex vertices and resolves each
//! one with a single split, either towards a mutually visible vertex or towards a Steiner
//! point placed on the nearest crossed edge. It tends to produce fewer, larger pieces than
//! triangulation-based partitioning, at the price of being less tolerant of malformed input.

use crate::math::{Point, Real};
use crate::utils::line_intersection;
use na::{center, distance_squared};

/// Twice the signed area of the triangle `(a, b, c)`, positive when the
/// corner turns counter-clockwise.
fn area2(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    (b - a).perp(&(c - a))
}

fn left(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    area2(a, b, c) > 0.0
}

fn left_on(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    area2(a, b, c) >= 0.0
}

fn right(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    area2(a, b, c) < 0.0
}

fn right_on(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    area2(a, b, c) <= 0.0
}

/// Copies the vertices from `first` to `last` inclusive, wrapping around the end of the loop.
fn copy_range(poly: &[Point<Real>], first: usize, last: usize) -> Vec<Point<Real>> {
    let n = poly.len();
    let len = if last >= first {
        last - first + 1
    } else {
        n - first + last + 1
    };
    (0..len).map(|k| poly[(first + k) % n]).collect()
}

/// The outcome of examining one polygon of the worklist.
enum Split {
    /// The polygon has no reflex vertex; it is convex as-is.
    Convex,
    /// The polygon was split in two at its first reflex vertex.
    Parts(Vec<Point<Real>>, Vec<Point<Real>>),
}

/// Bayazit convex partition of a clockwise-wound simple polygon.
///
/// Returns `None` when no valid partition could be found, which happens on
/// self-intersecting loops and other degenerate input.
pub(crate) fn decompose_bayazit(points: &[Point<Real>]) -> Option<Vec<Vec<Point<Real>>>> {
    if points.len() < 3 || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return None;
    }

    // A simple polygon needs fewer than one split per vertex, so well-formed input stays
    // comfortably under this budget. Self-intersecting input can keep generating slivers
    // forever; give up instead.
    let mut budget = 16 + points.len() * 8;

    let mut worklist = vec![points.to_vec()];
    let mut out = Vec::new();

    while let Some(poly) = worklist.pop() {
        budget = budget.checked_sub(1)?;
        if poly.len() < 3 {
            return None;
        }

        match split_at_reflex(&poly)? {
            Split::Convex => out.push(poly),
            Split::Parts(lower, upper) => {
                // Examine the lower part first so the output keeps boundary order.
                worklist.push(upper);
                worklist.push(lower);
            }
        }
    }

    Some(out)
}

/// Finds the first reflex vertex of `poly` and splits the polygon there.
///
/// Since the polygon is wound clockwise, a convex corner turns clockwise and a reflex
/// corner turns counter-clockwise.
fn split_at_reflex(poly: &[Point<Real>]) -> Option<Split> {
    let n = poly.len();
    let at = |i: usize| poly[i % n];

    for i in 0..n {
        let i_prev = (i + n - 1) % n;
        let i_next = (i + 1) % n;

        if !left(&at(i_prev), &at(i), &at(i_next)) {
            continue;
        }

        // Extend the two edges adjacent to the reflex vertex and find the nearest polygon
        // edges they cross. The crossing points bound the section of the boundary that is
        // visible from the reflex vertex.
        let mut lower_dist = Real::MAX;
        let mut upper_dist = Real::MAX;
        let mut lower_int = None;
        let mut upper_int = None;
        let mut lower_index = 0;
        let mut upper_index = 0;

        for j in 0..n {
            let j_prev = (j + n - 1) % n;
            let j_next = (j + 1) % n;

            // Does the extension of the edge (i - 1, i) cross the edge (j - 1, j)?
            if right(&at(i_prev), &at(i), &at(j)) && left_on(&at(i_prev), &at(i), &at(j_prev)) {
                if let Some(p) = line_intersection(&at(i_prev), &at(i), &at(j), &at(j_prev)) {
                    // Keep the closest crossing that stays on the interior side.
                    if left(&at(i_next), &at(i), &p) {
                        let d = distance_squared(&at(i), &p);
                        if d < lower_dist {
                            lower_dist = d;
                            lower_int = Some(p);
                            lower_index = j;
                        }
                    }
                }
            }

            // Does the extension of the edge (i + 1, i) cross the edge (j, j + 1)?
            if right(&at(i_next), &at(i), &at(j_next)) && left_on(&at(i_next), &at(i), &at(j)) {
                if let Some(p) = line_intersection(&at(i_next), &at(i), &at(j), &at(j_next)) {
                    if right(&at(i_prev), &at(i), &p) {
                        let d = distance_squared(&at(i), &p);
                        if d < upper_dist {
                            upper_dist = d;
                            upper_int = Some(p);
                            upper_index = j;
                        }
                    }
                }
            }
        }

        let (lower_poly, upper_poly) = if lower_index == (upper_index + 1) % n {
            // The visible section is a single edge with no vertex on it: split towards a
            // Steiner point halfway between the two crossings, which lies on that edge.
            let steiner = center(&lower_int?, &upper_int?);

            let mut lower_poly = copy_range(poly, i, upper_index);
            lower_poly.push(steiner);
            let mut upper_poly = copy_range(poly, lower_index, i);
            upper_poly.push(steiner);
            (lower_poly, upper_poly)
        } else {
            // Connect the reflex vertex to the closest mutually visible vertex of the
            // visible section.
            let mut upper_end = upper_index;
            while lower_index > upper_end {
                upper_end += n;
            }

            let mut closest_dist = Real::MAX;
            let mut closest_index = None;
            for j in lower_index..=upper_end {
                let jn = j % n;
                if right_on(&at(i_prev), &at(i), &at(jn)) && left_on(&at(i_next), &at(i), &at(jn))
                {
                    let d = distance_squared(&at(i), &at(jn));
                    if d < closest_dist {
                        closest_dist = d;
                        closest_index = Some(jn);
                    }
                }
            }
            let closest_index = closest_index?;

            (
                copy_range(poly, i, closest_index),
                copy_range(poly, closest_index, i),
            )
        };

        return Some(Split::Parts(lower_poly, upper_poly));
    }

    Some(Split::Convex)
}
