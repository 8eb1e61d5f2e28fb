//! Aliases for the mathematical types used throughout this crate.

pub use na::{Point2, Vector2};

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 2;

/// The point type.
pub use Point2 as Point;

/// The vector type.
pub use Vector2 as Vector;
