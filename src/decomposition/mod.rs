//! Decomposition of a simple polygon into convex, vertex-capped fixtures.

use core::fmt;

use log::{trace, warn};

use crate::math::{Point, Real};

pub use self::hertel_mehlhorn::{hertel_mehlhorn, hertel_mehlhorn_idx};
pub use self::orientation::{is_counter_clockwise, normalized_clockwise, signed_area2};
pub use self::slice_max_vertices::slice_max_vertices;

mod bayazit;
mod ear_clipping;
mod hertel_mehlhorn;
mod orientation;
mod slice_max_vertices;

/// The maximum number of vertices a convex fixture may have.
///
/// This matches the polygon vertex cap of common 2D physics engines
/// (e.g. Box2D's `b2_maxPolygonVertices`).
pub const MAX_FIXTURE_VERTICES: usize = 8;

/// Errors that can occur when decomposing a polygon into convex fixtures.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionError {
    /// The input loop has fewer than the three vertices needed to describe a polygon.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    NotEnoughVertices(usize),

    /// The selected algorithm could not decompose the polygon, e.g. because the traced
    /// outline intersects itself.
    #[error("the polygon could not be decomposed into convex parts")]
    Failed,
}

/// The algorithm used to decompose a simple polygon into convex parts.
///
/// Both algorithms consume the polygon outline after winding normalization and return
/// convex polygons covering it exactly. [`Polygonizer::EarClipping`] is the more robust
/// choice; [`Polygonizer::Bayazit`] usually produces fewer parts but gives up on outlines
/// it cannot handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Polygonizer {
    /// Ear-clipping triangulation followed by a Hertel-Mehlhorn convex merge.
    EarClipping,
    /// Mark Bayazit's convex partition.
    Bayazit,
}

impl Polygonizer {
    /// Every selectable algorithm, in display order.
    pub const ALL: [Polygonizer; 2] = [Polygonizer::EarClipping, Polygonizer::Bayazit];

    /// The human-readable name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Polygonizer::EarClipping => "Ear clipping",
            Polygonizer::Bayazit => "Bayazit",
        }
    }

    /// Decomposes the simple polygon described by `points` into convex polygons with at
    /// most [`MAX_FIXTURE_VERTICES`] vertices each.
    ///
    /// The loop is implicitly closed (the last point connects back to the first) and may
    /// have either winding; it is normalized to clockwise on a copy, so `points` is left
    /// untouched. The union of the returned polygons covers exactly the same area as the
    /// input polygon.
    ///
    /// Returns [`DecompositionError::NotEnoughVertices`] for loops of fewer than three
    /// points, and [`DecompositionError::Failed`] when the algorithm could not decompose
    /// the outline (typically a self-intersecting or otherwise degenerate trace).
    pub fn polygonize(
        self,
        points: &[Point<Real>],
    ) -> Result<Vec<Vec<Point<Real>>>, DecompositionError> {
        if points.len() < 3 {
            return Err(DecompositionError::NotEnoughVertices(points.len()));
        }

        let points = normalized_clockwise(points);

        let parts = match self {
            Polygonizer::EarClipping => decompose_ear_clipping(&points),
            Polygonizer::Bayazit => bayazit::decompose_bayazit(&points),
        };

        match parts {
            Some(parts) if !parts.is_empty() => {
                let fixtures = slice_max_vertices(parts, MAX_FIXTURE_VERTICES);
                trace!(
                    "{} decomposed a {}-vertex polygon into {} fixtures",
                    self,
                    points.len(),
                    fixtures.len()
                );
                Ok(fixtures)
            }
            _ => {
                warn!(
                    "{} could not decompose a {}-vertex polygon",
                    self,
                    points.len()
                );
                Err(DecompositionError::Failed)
            }
        }
    }
}

impl fmt::Display for Polygonizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Triangulates the polygon and merges the triangles back into convex parts.
fn decompose_ear_clipping(points: &[Point<Real>]) -> Option<Vec<Vec<Point<Real>>>> {
    let triangles = ear_clipping::triangulate_ear_clipping(points)?;
    Some(hertel_mehlhorn(points, &triangles))
}
