//! Line-oriented text map format.
//!
//! Format:
//! - Line 1: start point as `x,y`
//! - Line 2: goal point as `x,y`
//! - Each further line: one obstacle polygon as `x1,y1;x2,y2;x3,y3;...`
//!   with at least three vertices, implicitly closed last-to-first
//!
//! Blank lines and lines starting with `#` are skipped. Any malformed
//! numeric token, missing start/goal line, or undersized polygon fails
//! the entire load; no partial map is ever returned.

use crate::core::{Point2D, Segment2D};
use std::path::Path;

/// Error type for map loading.
#[derive(Debug, Clone)]
pub enum MapError {
    /// File I/O error
    Io(String),
    /// Start line (line 1) is missing
    MissingStart,
    /// Goal line (line 2) is missing
    MissingGoal,
    /// A coordinate token could not be parsed as `x,y`
    InvalidPoint {
        /// 1-based line number in the file
        line: usize,
        /// The offending token
        token: String,
    },
    /// A polygon has fewer than three vertices
    PolygonTooSmall {
        /// 1-based line number in the file
        line: usize,
        /// Number of vertices found
        count: usize,
    },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(msg) => write!(f, "I/O error: {}", msg),
            MapError::MissingStart => write!(f, "map is missing the start line"),
            MapError::MissingGoal => write!(f, "map is missing the goal line"),
            MapError::InvalidPoint { line, token } => {
                write!(f, "line {}: invalid point '{}', expected 'x,y'", line, token)
            }
            MapError::PolygonTooSmall { line, count } => {
                write!(
                    f,
                    "line {}: polygon has {} vertices, need at least 3",
                    line, count
                )
            }
        }
    }
}

impl std::error::Error for MapError {}

/// A parsed map: start, goal, and obstacle polygons.
#[derive(Clone, Debug)]
pub struct MapDescription {
    /// Start point
    pub start: Point2D,
    /// Goal point
    pub goal: Point2D,
    /// Obstacle polygons as ordered vertex lists (implicitly closed)
    pub polygons: Vec<Vec<Point2D>>,
}

impl MapDescription {
    /// All polygon corner vertices, in file order.
    pub fn obstacle_vertices(&self) -> Vec<Point2D> {
        self.polygons.iter().flatten().copied().collect()
    }

    /// All obstacle boundary edges, each polygon closed by connecting
    /// its last vertex back to the first.
    pub fn obstacle_edges(&self) -> Vec<Segment2D> {
        let mut edges = Vec::new();
        for polygon in &self.polygons {
            let n = polygon.len();
            for i in 0..n {
                edges.push(Segment2D::new(polygon[i], polygon[(i + 1) % n]));
            }
        }
        edges
    }
}

/// Load a map from a file.
pub fn load_map(path: &Path) -> Result<MapDescription, MapError> {
    let contents = std::fs::read_to_string(path).map_err(|e| MapError::Io(e.to_string()))?;
    parse_map(&contents)
}

/// Parse a map from its text contents.
pub fn parse_map(contents: &str) -> Result<MapDescription, MapError> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (start_line, start_text) = lines.next().ok_or(MapError::MissingStart)?;
    let start = parse_point(start_text, start_line)?;

    let (goal_line, goal_text) = lines.next().ok_or(MapError::MissingGoal)?;
    let goal = parse_point(goal_text, goal_line)?;

    let mut polygons = Vec::new();
    for (line_no, line) in lines {
        polygons.push(parse_polygon(line, line_no)?);
    }

    Ok(MapDescription {
        start,
        goal,
        polygons,
    })
}

/// Parse a single `x,y` token.
fn parse_point(token: &str, line: usize) -> Result<Point2D, MapError> {
    let invalid = || MapError::InvalidPoint {
        line,
        token: token.to_string(),
    };

    let (x_text, y_text) = token.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x_text.trim().parse().map_err(|_| invalid())?;
    let y: f32 = y_text.trim().parse().map_err(|_| invalid())?;

    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }

    Ok(Point2D::new(x, y))
}

/// Parse a `x1,y1;x2,y2;...` polygon line.
fn parse_polygon(line: &str, line_no: usize) -> Result<Vec<Point2D>, MapError> {
    let mut vertices = Vec::new();
    for token in line.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        vertices.push(parse_point(token, line_no)?);
    }

    if vertices.len() < 3 {
        return Err(MapError::PolygonTooSmall {
            line: line_no,
            count: vertices.len(),
        });
    }

    Ok(vertices)
}
