//! Post-processing pass that splits polygons until all of them satisfy a vertex cap.

use crate::math::{Point, Real};

/// Splits every polygon of `polygons` that has more than `max_vertices` vertices until none
/// is left, and returns the resulting set.
///
/// Each split cuts along a chord between two existing boundary vertices, so the output
/// covers exactly the same area as the input and splitting a convex polygon yields two
/// convex polygons. Polygons already within the cap are passed through unchanged, and the
/// relative order of the input is preserved.
pub fn slice_max_vertices(
    polygons: Vec<Vec<Point<Real>>>,
    max_vertices: usize,
) -> Vec<Vec<Point<Real>>> {
    debug_assert!(max_vertices >= 3);

    let mut out = Vec::with_capacity(polygons.len());
    let mut worklist = Vec::new();

    for polygon in polygons {
        worklist.push(polygon);

        // Depth-first: a half that is still too large is re-split before its sibling is
        // examined, which keeps the pieces in boundary order. Termination: both halves of
        // a split are strictly smaller than the polygon they came from.
        while let Some(poly) = worklist.pop() {
            if poly.len() <= max_vertices {
                out.push(poly);
                continue;
            }

            let (first, second) = split_in_two(&poly, max_vertices);
            worklist.push(second);
            worklist.push(first);
        }
    }

    out
}

/// Cuts one oversized polygon in two along a chord.
///
/// Polygons below `2 * max_vertices - 1` vertices are bisected as evenly as possible, which
/// already puts both halves within the cap. Larger polygons always get a fixed head of
/// `max_vertices` vertices cut off, leaving the remainder to be re-sliced.
fn split_in_two(
    poly: &[Point<Real>],
    max_vertices: usize,
) -> (Vec<Point<Real>>, Vec<Point<Real>>) {
    let limit = if poly.len() < 2 * max_vertices - 1 {
        poly.len() / 2 + 1
    } else {
        max_vertices
    };

    let first = poly[..limit].to_vec();

    // The second half shares the chord vertex `limit - 1` and is re-closed with a copy of
    // vertex 0.
    let mut second = poly[limit - 1..].to_vec();
    second.push(poly[0]);

    (first, second)
}

// --- Unit tests ----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::orientation::signed_area2;
    use approx::assert_relative_eq;

    /// A clockwise regular polygon with `n` vertices.
    fn cw_ngon(n: usize) -> Vec<Point<Real>> {
        (0..n)
            .map(|i| {
                let angle = -(i as Real) / (n as Real) * std::f32::consts::TAU;
                Point::new(angle.cos(), angle.sin())
            })
            .collect()
    }

    fn total_area(polygons: &[Vec<Point<Real>>]) -> Real {
        polygons.iter().map(|p| signed_area2(p).abs() / 2.0).sum()
    }

    #[test]
    fn small_polygons_pass_through_unchanged() {
        let octagon = cw_ngon(8);
        let sliced = slice_max_vertices(vec![octagon.clone()], 8);
        assert_eq!(sliced, vec![octagon]);
    }

    #[test]
    fn ten_vertices_bisect_into_six_and_six() {
        let decagon = cw_ngon(10);
        let sliced = slice_max_vertices(vec![decagon.clone()], 8);

        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced[0].len(), 6);
        assert_eq!(sliced[1].len(), 6);

        // First half is a plain prefix; second half shares the chord vertex and re-closes
        // with a copy of vertex 0.
        assert_eq!(sliced[0], decagon[..6].to_vec());
        assert_eq!(sliced[1][..5], decagon[5..]);
        assert_eq!(*sliced[1].last().unwrap(), decagon[0]);

        assert_relative_eq!(
            total_area(&sliced),
            signed_area2(&decagon).abs() / 2.0,
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn twenty_vertices_slice_into_eight_eight_eight() {
        let icosagon = cw_ngon(20);
        let sliced = slice_max_vertices(vec![icosagon.clone()], 8);

        let sizes: Vec<_> = sliced.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![8, 8, 8]);

        assert_relative_eq!(
            total_area(&sliced),
            signed_area2(&icosagon).abs() / 2.0,
            epsilon = 1.0e-5
        );
    }

    #[test]
    fn bisection_sizes_for_all_small_counts() {
        for n in 9..15 {
            let sliced = slice_max_vertices(vec![cw_ngon(n)], 8);
            assert_eq!(sliced.len(), 2, "n = {}", n);
            assert_eq!(sliced[0].len(), n / 2 + 1, "n = {}", n);
            assert_eq!(sliced[1].len(), n - n / 2 + 1, "n = {}", n);
            assert!(sliced.iter().all(|p| p.len() <= 8), "n = {}", n);
        }
    }

    #[test]
    fn order_of_other_polygons_is_preserved() {
        let triangle = cw_ngon(3);
        let decagon = cw_ngon(10);
        let square = cw_ngon(4);

        let sliced = slice_max_vertices(
            vec![triangle.clone(), decagon.clone(), square.clone()],
            8,
        );

        assert_eq!(sliced.len(), 4);
        assert_eq!(sliced[0], triangle);
        assert_eq!(sliced[1], decagon[..6].to_vec());
        assert_eq!(sliced[3], square);
    }
}
