//! Geometry primitives for the planner.
//!
//! - [`Point2D`]: a point in plane coordinates (f32)
//! - [`Segment2D`]: a line segment with a derived Euclidean weight

mod point;
mod segment;

pub use point::Point2D;
pub use segment::Segment2D;
