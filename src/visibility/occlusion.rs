//! Line-of-sight occlusion tests.
//!
//! A candidate sight line is blocked if an obstacle edge properly crosses
//! it, or if any stretch of it runs through the interior of an obstacle
//! polygon. The second test is needed because the crossing test alone
//! deliberately lets segments touch the boundary at shared endpoints:
//! without it, a segment between two corners of the same polygon could
//! cut straight through the obstacle, and an enclosed point would still
//! "see" the enclosing polygon's corners.

use crate::core::{Point2D, Segment2D};

/// Minimum distance from a point to any obstacle edge.
pub fn min_distance_to_edges(point: Point2D, edges: &[Segment2D]) -> f32 {
    edges
        .iter()
        .map(|edge| edge.distance_to_point(point))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(f32::INFINITY)
}

/// Check whether a point lies strictly inside a polygon.
///
/// Even-odd ray crossing against a ray cast in +X. Points exactly on the
/// boundary are numerically unreliable here; callers that care filter
/// boundary points first with [`min_distance_to_edges`].
pub fn point_in_polygon(point: Point2D, polygon: &[Point2D]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Check whether a candidate sight line is blocked by the obstacles.
///
/// Blocked when an obstacle edge properly crosses the candidate (open
/// intervals on both segments, see [`Segment2D::intersects`]), or when
/// any stretch of the candidate runs through a polygon's interior.
/// Stretches within `epsilon` of the boundary count as grazing, which is
/// allowed, so boundary-following sight lines between adjacent corners
/// of a polygon stay open.
pub fn is_occluded(
    candidate: &Segment2D,
    edges: &[Segment2D],
    polygons: &[Vec<Point2D>],
    epsilon: f32,
) -> bool {
    if edges.iter().any(|edge| candidate.intersects(edge, epsilon)) {
        return true;
    }

    polygons
        .iter()
        .any(|polygon| runs_through_interior(candidate, polygon, epsilon))
}

/// Check whether any stretch of the candidate lies strictly inside the
/// polygon.
///
/// Splits the candidate at every parameter where it meets the polygon
/// boundary, corner touches included, then samples the midpoint of each
/// stretch. Between two consecutive boundary meetings the candidate is
/// entirely inside or entirely outside, so one sample decides each
/// stretch; a single fixed sample point cannot, because a sight line can
/// enter and leave through two corners while its own midpoint falls
/// outside the polygon.
fn runs_through_interior(candidate: &Segment2D, polygon: &[Point2D], epsilon: f32) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let boundary: Vec<Segment2D> = (0..n)
        .map(|i| Segment2D::new(polygon[i], polygon[(i + 1) % n]))
        .collect();

    let d1 = candidate.direction();
    let mut cuts = vec![0.0_f32, 1.0];
    for edge in &boundary {
        let d2 = edge.direction();
        let cross = d1.cross(d2);
        if cross.abs() < epsilon {
            continue;
        }
        let diff = edge.start - candidate.start;
        let t = diff.cross(d2) / cross;
        let s = diff.cross(d1) / cross;
        if t >= -epsilon && t <= 1.0 + epsilon && s >= -epsilon && s <= 1.0 + epsilon {
            cuts.push(t.clamp(0.0, 1.0));
        }
    }
    cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    cuts.windows(2).any(|pair| {
        if pair[1] - pair[0] <= epsilon {
            return false;
        }
        let sample = candidate.point_at(0.5 * (pair[0] + pair[1]));
        min_distance_to_edges(sample, &boundary) > epsilon && point_in_polygon(sample, polygon)
    })
}
