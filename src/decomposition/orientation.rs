//! Winding-order test and normalization for polygon vertex loops.

use crate::math::{Point, Real};

/// Computes twice the signed area of the polygon described by `points`.
///
/// The result is positive for counter-clockwise winding and negative for clockwise winding.
/// The loop is implicitly closed: the last point is assumed to be connected to the first.
pub fn signed_area2(points: &[Point<Real>]) -> Real {
    let mut area2 = 0.0;

    for i1 in 0..points.len() {
        let i2 = (i1 + 1) % points.len();
        let p1 = &points[i1];
        let p2 = &points[i2];
        area2 += p1.x * p2.y - p2.x * p1.y;
    }

    area2
}

/// Tests if the polygon described by `points` has counter-clockwise winding.
///
/// This is a pure signed-area sign test. A degenerate (zero-area) polygon is
/// reported as not counter-clockwise.
pub fn is_counter_clockwise(points: &[Point<Real>]) -> bool {
    signed_area2(points) > 0.0
}

/// Returns a copy of `points` with clockwise winding.
///
/// The decomposition algorithms of this crate assume clockwise input, so this runs once on
/// every input polygon before dispatching to an algorithm. Counter-clockwise input is
/// reversed; clockwise (or degenerate zero-area) input is copied unchanged. The caller's
/// buffer is never mutated.
pub fn normalized_clockwise(points: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut points = points.to_vec();
    if is_counter_clockwise(&points) {
        points.reverse();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccw_square() -> Vec<Point<Real>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn winding_test() {
        let square = ccw_square();
        assert!(is_counter_clockwise(&square));

        let mut reversed = square.clone();
        reversed.reverse();
        assert!(!is_counter_clockwise(&reversed));
    }

    #[test]
    fn normalization_reverses_ccw_input() {
        let square = ccw_square();
        let normalized = normalized_clockwise(&square);
        assert!(!is_counter_clockwise(&normalized));

        let mut expected = square;
        expected.reverse();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalized_clockwise(&ccw_square());
        let twice = normalized_clockwise(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn degenerate_polygon_passes_through() {
        let flat = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(normalized_clockwise(&flat), flat);
    }
}
