//! Line segment type with a derived Euclidean weight.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// An ordered pair of endpoints representing a line segment.
///
/// Used for obstacle boundaries and, transiently, for candidate
/// line-of-sight links. The weight is always recomputed from the
/// endpoints, never stored, so it can never drift out of sync.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    /// First endpoint
    pub start: Point2D,
    /// Second endpoint
    pub end: Point2D,
}

impl Segment2D {
    /// Create a new segment
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized)
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Segment length in plane units
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Weight for graph search: the Euclidean distance between the
    /// endpoints. Derived on every call.
    #[inline]
    pub fn weight(&self) -> f32 {
        self.length()
    }

    /// Point at parameter t along the segment (t=0 start, t=1 end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }

    /// Midpoint of the segment
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        self.point_at(0.5)
    }

    /// Minimum distance from a point to this segment.
    pub fn distance_to_point(&self, point: Point2D) -> f32 {
        let dir = self.direction();
        let len_sq = dir.dot(dir);
        if len_sq < f32::EPSILON {
            return self.start.distance(point);
        }

        let t = ((point - self.start).dot(dir) / len_sq).clamp(0.0, 1.0);
        self.point_at(t).distance(point)
    }

    /// Check whether this segment crosses another.
    ///
    /// Solves the parametric form with cross products, the same way a ray
    /// cast against a wall segment is resolved. Convention: parallel and
    /// collinear segments never intersect, and intersection parameters are
    /// taken on the open interval `(0, 1)` of both segments. Touches that
    /// happen exactly at an endpoint are therefore NOT crossings, so a
    /// sight line between two adjacent corners of the same polygon is not
    /// blocked by the boundary edge it runs along.
    ///
    /// `epsilon` bounds both the parallelism test on the cross product and
    /// the open-interval exclusion at the endpoints.
    pub fn intersects(&self, other: &Segment2D, epsilon: f32) -> bool {
        let d1 = self.direction();
        let d2 = other.direction();

        let cross = d1.cross(d2);
        if cross.abs() < epsilon {
            // Parallel or collinear: no crossing by convention
            return false;
        }

        let origin_diff = other.start - self.start;
        let t = origin_diff.cross(d2) / cross;
        let s = origin_diff.cross(d1) / cross;

        t > epsilon && t < 1.0 - epsilon && s > epsilon && s < 1.0 - epsilon
    }
}
