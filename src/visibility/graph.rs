//! Visibility graph over a fixed set of vertices and obstacle edges.

use log::debug;

use crate::core::{Point2D, Segment2D};

use super::occlusion::is_occluded;

/// Graph of mutually visible vertices.
///
/// Vertices are stored in an arena and referenced by index. The adjacency
/// list `edges[i]` holds the indices of every vertex with an unobstructed
/// straight line to vertex `i`, computed once before search begins and
/// immutable during search.
///
/// # Example
///
/// ```rust
/// use marga_plan::core::Point2D;
/// use marga_plan::visibility::VisibilityGraph;
///
/// let vertices = vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)];
/// let mut graph = VisibilityGraph::new(vertices);
/// graph.build(&[], &[], 1e-6);
/// assert_eq!(graph.neighbors(0), &[1]);
/// ```
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
    /// Vertex arena. Index identity is stable for the graph's lifetime.
    vertices: Vec<Point2D>,

    /// Adjacency list: edges[i] = indices of vertices visible from i.
    edges: Vec<Vec<usize>>,
}

impl VisibilityGraph {
    /// Create a graph over the given vertex arena with no edges yet.
    pub fn new(vertices: Vec<Point2D>) -> Self {
        let n = vertices.len();
        Self {
            vertices,
            edges: vec![Vec::new(); n],
        }
    }

    /// Compute line-of-sight adjacency against the given obstacles.
    ///
    /// For every unordered vertex pair the candidate segment is tested for
    /// occlusion (see [`is_occluded`]); the pair is connected iff the line
    /// is open. Visibility is symmetric by construction. This is
    /// O(n² · |E|), which is the complexity ceiling of this builder;
    /// fine for the tens-of-vertices maps the planner targets, but a
    /// spatial index would be needed for anything much larger.
    ///
    /// Touches exactly at a shared endpoint do not block, so adjacent
    /// corners of one polygon see each other along the boundary itself,
    /// while the interior test keeps sight lines from cutting through
    /// a polygon.
    pub fn build(
        &mut self,
        obstacle_edges: &[Segment2D],
        polygons: &[Vec<Point2D>],
        epsilon: f32,
    ) {
        let n = self.vertices.len();
        self.edges = vec![Vec::new(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let candidate = Segment2D::new(self.vertices[i], self.vertices[j]);
                if !is_occluded(&candidate, obstacle_edges, polygons, epsilon) {
                    self.edges[i].push(j);
                    self.edges[j].push(i);
                }
            }
        }

        debug!(
            "[Visibility] built graph: {} vertices, {} sight lines, {} obstacle edges",
            n,
            self.edge_count(),
            obstacle_edges.len()
        );
    }

    /// Get the vertex arena.
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Get a vertex position by index.
    pub fn vertex(&self, index: usize) -> Point2D {
        self.vertices[index]
    }

    /// Indices visible from the given vertex.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.edges[index]
    }

    /// Get the full adjacency list.
    pub fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected sight lines.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum::<usize>() / 2
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn square_polygon() -> Vec<Point2D> {
        vec![
            Point2D::new(4.0, -1.0),
            Point2D::new(4.0, 1.0),
            Point2D::new(6.0, 1.0),
            Point2D::new(6.0, -1.0),
        ]
    }

    fn closed_edges(polygon: &[Point2D]) -> Vec<Segment2D> {
        let n = polygon.len();
        (0..n)
            .map(|i| Segment2D::new(polygon[i], polygon[(i + 1) % n]))
            .collect()
    }

    #[test]
    fn test_no_obstacles_complete_graph() {
        let vertices = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
        ];
        let mut graph = VisibilityGraph::new(vertices);
        graph.build(&[], &[], EPS);

        for i in 0..4 {
            assert_eq!(graph.neighbors(i).len(), 3);
        }
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_wall_blocks_sight() {
        let vertices = vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)];
        let wall = [Segment2D::new(
            Point2D::new(5.0, -2.0),
            Point2D::new(5.0, 2.0),
        )];

        let mut graph = VisibilityGraph::new(vertices);
        graph.build(&wall, &[], EPS);

        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_visibility_is_symmetric() {
        let polygon = square_polygon();
        let edges = closed_edges(&polygon);
        let vertices = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(5.0, 3.0),
        ];
        let mut graph = VisibilityGraph::new(vertices);
        graph.build(&edges, std::slice::from_ref(&polygon), EPS);

        for i in 0..graph.vertex_count() {
            for &j in graph.neighbors(i) {
                assert!(
                    graph.neighbors(j).contains(&i),
                    "{} sees {} but not the reverse",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_adjacent_polygon_corners_see_each_other() {
        // Vertices at two adjacent corners of the obstacle itself: the
        // candidate segment runs along the boundary edge between them.
        let polygon = square_polygon();
        let edges = closed_edges(&polygon);
        let vertices = vec![Point2D::new(4.0, -1.0), Point2D::new(4.0, 1.0)];
        let mut graph = VisibilityGraph::new(vertices);
        graph.build(&edges, std::slice::from_ref(&polygon), EPS);

        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_opposite_corners_do_not_cut_through() {
        let polygon = square_polygon();
        let edges = closed_edges(&polygon);
        let vertices = vec![Point2D::new(4.0, -1.0), Point2D::new(6.0, 1.0)];
        let mut graph = VisibilityGraph::new(vertices);
        graph.build(&edges, std::slice::from_ref(&polygon), EPS);

        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_rebuild_replaces_adjacency() {
        let vertices = vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)];
        let mut graph = VisibilityGraph::new(vertices);

        graph.build(&[], &[], EPS);
        assert_eq!(graph.edge_count(), 1);

        let wall = [Segment2D::new(
            Point2D::new(5.0, -2.0),
            Point2D::new(5.0, 2.0),
        )];
        graph.build(&wall, &[], EPS);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = VisibilityGraph::new(Vec::new());
        graph.build(&[], &[], EPS);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
