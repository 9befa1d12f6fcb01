//! Path planner owning a complete problem instance.

use log::debug;
use std::path::Path as FsPath;

use crate::config::PlannerSettings;
use crate::core::{Point2D, Segment2D};
use crate::io::{load_map, parse_map, MapDescription, MapError};
use crate::pathfinding::astar::{AStarConfig, AStarSearch, PathResult};
use crate::visibility::VisibilityGraph;
use crate::Path;

/// Error type for planner construction.
#[derive(Debug, Clone)]
pub enum PlannerError {
    /// Map loading or parsing failed
    Map(MapError),
    /// Start or goal coordinate is not finite
    InvalidInput(String),
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::Map(err) => write!(f, "map error: {}", err),
            PlannerError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<MapError> for PlannerError {
    fn from(err: MapError) -> Self {
        PlannerError::Map(err)
    }
}

/// Shortest-path planner over a fixed snapshot of a polygonal map.
///
/// Owns the vertex arena (start, goal, and every obstacle corner), the
/// obstacle edge set, the visibility graph, and the solved path.
/// Construction builds the visibility graph and runs the search
/// immediately, so a successfully constructed planner is always in a
/// solved state; callers never observe a half-initialized instance.
///
/// The solution is empty when the goal is unreachable. That is a normal
/// outcome, not an error; check [`PathPlanner::solution`] or
/// [`PathPlanner::result`] explicitly.
///
/// # Example
///
/// ```rust
/// use marga_plan::PathPlanner;
///
/// let planner = PathPlanner::from_map_str(
///     "0,0\n10,0\n4,-2;4,2;6,2;6,-2\n",
///     Default::default(),
/// ).unwrap();
///
/// let path = planner.solution();
/// assert!(path.length > 10.0); // routes around the square
/// ```
#[derive(Debug)]
pub struct PathPlanner {
    /// Arena index of the start vertex (always 0).
    start: usize,
    /// Arena index of the goal vertex (always 1).
    goal: usize,
    /// Obstacle polygons as ordered vertex lists (implicitly closed).
    polygons: Vec<Vec<Point2D>>,
    /// Obstacle boundary edges, derived from the polygons.
    obstacles: Vec<Segment2D>,
    /// Visibility graph over the vertex arena.
    graph: VisibilityGraph,
    /// Settings used for graph construction and search.
    settings: PlannerSettings,
    /// Result of the most recent solve.
    result: PathResult,
    /// Ordered solution waypoints (empty when no path exists).
    solution: Path,
}

impl PathPlanner {
    /// Construct from explicit start, goal, and obstacle polygons.
    ///
    /// Each polygon is an ordered vertex list, implicitly closed by
    /// connecting its last vertex back to the first. Solves immediately.
    pub fn from_polygons(
        start: Point2D,
        goal: Point2D,
        polygons: &[Vec<Point2D>],
        settings: PlannerSettings,
    ) -> Result<Self, PlannerError> {
        let description = MapDescription {
            start,
            goal,
            polygons: polygons.to_vec(),
        };
        Self::from_description(description, settings)
    }

    /// Construct from a map file. Solves immediately.
    pub fn from_map_file(path: &FsPath, settings: PlannerSettings) -> Result<Self, PlannerError> {
        let description = load_map(path)?;
        Self::from_description(description, settings)
    }

    /// Construct from map text contents. Solves immediately.
    pub fn from_map_str(contents: &str, settings: PlannerSettings) -> Result<Self, PlannerError> {
        let description = parse_map(contents)?;
        Self::from_description(description, settings)
    }

    /// Construct from a parsed map description. Solves immediately.
    pub fn from_description(
        description: MapDescription,
        settings: PlannerSettings,
    ) -> Result<Self, PlannerError> {
        if !description.start.is_finite() {
            return Err(PlannerError::InvalidInput(
                "start point has non-finite coordinates".to_string(),
            ));
        }
        if !description.goal.is_finite() {
            return Err(PlannerError::InvalidInput(
                "goal point has non-finite coordinates".to_string(),
            ));
        }
        for polygon in &description.polygons {
            if polygon.iter().any(|v| !v.is_finite()) {
                return Err(PlannerError::InvalidInput(
                    "obstacle vertex has non-finite coordinates".to_string(),
                ));
            }
        }

        // Arena layout: start, goal, then every obstacle corner in file order
        let mut vertices = Vec::with_capacity(2 + description.polygons.iter().map(Vec::len).sum::<usize>());
        vertices.push(description.start);
        vertices.push(description.goal);
        vertices.extend(description.obstacle_vertices());

        let obstacles = description.obstacle_edges();
        let mut graph = VisibilityGraph::new(vertices);
        let result = Self::run_search(&mut graph, &obstacles, &description.polygons, &settings, 0, 1);
        let solution = Self::solution_of(&result);

        Ok(Self {
            start: 0,
            goal: 1,
            polygons: description.polygons,
            obstacles,
            graph,
            settings,
            result,
            solution,
        })
    }

    /// Build the visibility graph and run the search.
    ///
    /// All search state is solve-scoped scratch inside the engine, so
    /// running this again produces an identical result for an unchanged
    /// instance.
    fn run_search(
        graph: &mut VisibilityGraph,
        obstacles: &[Segment2D],
        polygons: &[Vec<Point2D>],
        settings: &PlannerSettings,
        start: usize,
        goal: usize,
    ) -> PathResult {
        graph.build(obstacles, polygons, settings.intersection_epsilon);

        let search = AStarSearch::new(
            graph,
            AStarConfig {
                max_iterations: settings.max_iterations,
            },
        );
        let result = search.find_path(start, goal);

        debug!(
            "[Planner] solved: success={} waypoints={} cost={:.3}",
            result.success,
            result.path_points.len(),
            result.cost
        );
        result
    }

    /// Waypoint path for a search result; empty on failure.
    fn solution_of(result: &PathResult) -> Path {
        if result.success {
            Path::from_points(result.path_points.clone())
        } else {
            Path::new()
        }
    }

    /// Re-solve toward a different goal point.
    ///
    /// Replaces the goal vertex, rebuilds the visibility graph (the
    /// goal's sight lines change with its position), and searches again.
    /// Solving twice toward the same goal yields identical results.
    pub fn solve_to(&mut self, goal: Point2D) -> Result<&Path, PlannerError> {
        if !goal.is_finite() {
            return Err(PlannerError::InvalidInput(
                "goal point has non-finite coordinates".to_string(),
            ));
        }

        let mut vertices = self.graph.vertices().to_vec();
        vertices[self.goal] = goal;
        self.graph = VisibilityGraph::new(vertices);
        self.result = Self::run_search(
            &mut self.graph,
            &self.obstacles,
            &self.polygons,
            &self.settings,
            self.start,
            self.goal,
        );
        self.solution = Self::solution_of(&self.result);
        Ok(&self.solution)
    }

    /// Ordered solution waypoints from start to goal. Empty when the
    /// goal is unreachable.
    pub fn solution(&self) -> &Path {
        &self.solution
    }

    /// Full result of the most recent solve, including expansion count
    /// and the failure reason when no path was found.
    pub fn result(&self) -> &PathResult {
        &self.result
    }

    /// The full vertex arena: start, goal, then obstacle corners.
    pub fn vertices(&self) -> &[Point2D] {
        self.graph.vertices()
    }

    /// Obstacle boundary edges.
    pub fn obstacle_edges(&self) -> &[Segment2D] {
        &self.obstacles
    }

    /// Obstacle polygons as ordered vertex lists.
    pub fn polygons(&self) -> &[Vec<Point2D>] {
        &self.polygons
    }

    /// Vertex indices visible from the given vertex, for diagnostics
    /// and rendering overlays.
    pub fn visible_from(&self, index: usize) -> &[usize] {
        self.graph.neighbors(index)
    }

    /// The underlying visibility graph.
    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    /// Start point.
    pub fn start(&self) -> Point2D {
        self.graph.vertex(self.start)
    }

    /// Goal point.
    pub fn goal(&self) -> Point2D {
        self.graph.vertex(self.goal)
    }
}
