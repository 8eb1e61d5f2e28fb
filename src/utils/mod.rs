//! Small geometric predicates shared by the decomposition algorithms.

pub use self::line_intersection::line_intersection;
pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};

mod line_intersection;
mod point_in_triangle;
