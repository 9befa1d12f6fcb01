//! Visualization adapter.
//!
//! The planner core exposes plain data only; this module consumes it and
//! turns it into an SVG string for debugging. Coordinate scaling and
//! colors live here, never in the core.

use crate::core::{Point2D, Segment2D};
use crate::planner::PathPlanner;
use crate::Path;

/// Read-only view of a solved planner, for rendering.
///
/// Borrows the planner's collections; never mutates them.
#[derive(Clone, Copy, Debug)]
pub struct GraphSnapshot<'a> {
    /// Full vertex arena (start, goal, obstacle corners).
    pub vertices: &'a [Point2D],
    /// Obstacle boundary edges.
    pub obstacles: &'a [Segment2D],
    /// Per-vertex visibility lists, for debug overlays.
    pub visibility: &'a [Vec<usize>],
    /// Ordered solution waypoints (empty when no path exists).
    pub solution: &'a Path,
    /// Arena index of the start vertex.
    pub start: usize,
    /// Arena index of the goal vertex.
    pub goal: usize,
}

impl PathPlanner {
    /// Take a read-only snapshot for rendering.
    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot {
            vertices: self.vertices(),
            obstacles: self.obstacle_edges(),
            visibility: self.graph().edges(),
            solution: self.solution(),
            start: 0,
            goal: 1,
        }
    }
}

/// Render a snapshot to an SVG string.
///
/// Obstacles are black, line-of-sight edges light gray, the solution
/// path lime, the start red and the goal purple.
pub fn render_svg(snapshot: &GraphSnapshot<'_>) -> String {
    let (min_x, min_y, max_x, max_y) = bounds(snapshot);

    let margin = 0.5;
    let view_min_x = min_x - margin;
    let view_min_y = min_y - margin;
    let view_width = (max_x - min_x) + 2.0 * margin;
    let view_height = (max_y - min_y) + 2.0 * margin;

    // Flip the y axis so +y is up; the viewBox covers the flipped range
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="800" height="600">
  <rect x="{}" y="{}" width="{}" height="{}" fill="white"/>
  <g transform="scale(1, -1)">
"#,
        view_min_x,
        -view_min_y - view_height,
        view_width,
        view_height,
        view_min_x,
        -view_min_y - view_height,
        view_width,
        view_height
    );

    svg.push_str("    <!-- Visibility Edges -->\n");
    for (i, neighbors) in snapshot.visibility.iter().enumerate() {
        for &j in neighbors {
            if i < j {
                let p1 = snapshot.vertices[i];
                let p2 = snapshot.vertices[j];
                svg.push_str(&format!(
                    "    <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"#cccccc\" stroke-width=\"0.01\"/>\n",
                    p1.x, p1.y, p2.x, p2.y
                ));
            }
        }
    }

    svg.push_str("    <!-- Obstacles -->\n");
    for edge in snapshot.obstacles {
        svg.push_str(&format!(
            r#"    <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="black" stroke-width="0.05"/>"#,
            edge.start.x, edge.start.y, edge.end.x, edge.end.y
        ));
        svg.push('\n');
    }

    if !snapshot.solution.is_empty() {
        svg.push_str("    <!-- Solution Path -->\n");
        let points = &snapshot.solution.points;
        for i in 0..points.len().saturating_sub(1) {
            svg.push_str(&format!(
                r#"    <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="lime" stroke-width="0.08"/>"#,
                points[i].x, points[i].y, points[i + 1].x, points[i + 1].y
            ));
            svg.push('\n');
        }
    }

    svg.push_str("    <!-- Vertices -->\n");
    for (i, vertex) in snapshot.vertices.iter().enumerate() {
        let (color, radius) = if i == snapshot.start {
            ("red", 0.12)
        } else if i == snapshot.goal {
            ("purple", 0.12)
        } else {
            ("blue", 0.06)
        };
        svg.push_str(&format!(
            r#"    <circle cx="{:.3}" cy="{:.3}" r="{}" fill="{}"/>"#,
            vertex.x, vertex.y, radius, color
        ));
        svg.push('\n');
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Bounding box of everything in the snapshot.
fn bounds(snapshot: &GraphSnapshot<'_>) -> (f32, f32, f32, f32) {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for vertex in snapshot.vertices {
        min_x = min_x.min(vertex.x);
        min_y = min_y.min(vertex.y);
        max_x = max_x.max(vertex.x);
        max_y = max_y.max(vertex.y);
    }
    for edge in snapshot.obstacles {
        min_x = min_x.min(edge.start.x).min(edge.end.x);
        min_y = min_y.min(edge.start.y).min(edge.end.y);
        max_x = max_x.max(edge.start.x).max(edge.end.x);
        max_y = max_y.max(edge.start.y).max(edge.end.y);
    }

    if min_x.is_infinite() {
        (0.0, 0.0, 1.0, 1.0)
    } else {
        (min_x, min_y, max_x, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerSettings;

    #[test]
    fn test_snapshot_reflects_planner() {
        let planner = PathPlanner::from_map_str(
            "0,0\n10,0\n4,-2;4,2;6,2;6,-2\n",
            PlannerSettings::default(),
        )
        .unwrap();

        let snapshot = planner.snapshot();
        assert_eq!(snapshot.vertices.len(), 6);
        assert_eq!(snapshot.obstacles.len(), 4);
        assert_eq!(snapshot.visibility.len(), 6);
        assert!(!snapshot.solution.is_empty());
    }

    #[test]
    fn test_svg_export() {
        let planner = PathPlanner::from_map_str(
            "0,0\n10,0\n4,-2;4,2;6,2;6,-2\n",
            PlannerSettings::default(),
        )
        .unwrap();

        let svg = render_svg(&planner.snapshot());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("circle")); // vertices
        assert!(svg.contains("lime")); // solution path
        assert!(svg.contains("black")); // obstacles
    }

    #[test]
    fn test_svg_without_solution_has_no_path_lines() {
        let planner = PathPlanner::from_map_str(
            "0,0\n5,6\n3,3;3,7;7,7;7,3\n",
            PlannerSettings::default(),
        )
        .unwrap();

        let svg = render_svg(&planner.snapshot());
        assert!(!svg.contains("lime"));
    }
}
