/*!
fixturize
=========

**fixturize** decomposes a simple 2D polygon into convex sub-polygons with at
most [`MAX_FIXTURE_VERTICES`](decomposition::MAX_FIXTURE_VERTICES) vertices
each, so the pieces can be used directly as convex fixtures by 2D physics
engines that cap the vertex count of polygon shapes.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

pub extern crate nalgebra as na;

pub mod decomposition;
pub mod math;
pub mod utils;

pub use decomposition::{DecompositionError, Polygonizer, MAX_FIXTURE_VERTICES};
