use crate::brush::Brush;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

// Immutable path for committed layer content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPath {
    points: Vec<Point>,
    brush: Brush,
}

// Mutable path for the stroke currently being drawn
#[derive(Debug, Clone)]
pub struct PathBuilder {
    points: Vec<Point>,
    brush: Brush,
}

impl DrawingPath {
    pub fn new(brush: Brush, points: Vec<Point>) -> Self {
        Self { points, brush }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PathBuilder {
    pub fn new(brush: Brush) -> Self {
        Self {
            points: Vec::new(),
            brush,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    // Points accumulated so far, for live preview
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn finish(self) -> DrawingPath {
        DrawingPath::new(self.brush, self.points)
    }
}
