use super::{continue_theta, RECT_DEAD_ZONE};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

pub const MIN_RECT_SIDE: f32 = 40.0;
pub const MAX_RECT_SIDE: f32 = 2000.0;

/// A rectangle described by its center, side lengths, and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub center: Point,
    pub width: f32,
    pub height: f32,
    /// Rotation in radians
    pub rotation: f32,
}

impl RectangleShape {
    pub fn new(center: Point, width: f32, height: f32) -> Self {
        Self {
            center,
            width: width.max(MIN_RECT_SIDE),
            height: height.max(MIN_RECT_SIDE),
            rotation: 0.0,
        }
    }

    /// Intersects the ray at `theta` with the box edges and returns the
    /// perimeter point, in canvas space.
    pub fn point_at(&self, theta: f32) -> Point {
        let (sin, cos) = theta.sin_cos();
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        // A vanishing ray component can never win the min, so substitute
        // infinity instead of dividing by zero.
        let tx = if cos.abs() < f32::EPSILON {
            f32::INFINITY
        } else {
            half_w / cos.abs()
        };
        let ty = if sin.abs() < f32::EPSILON {
            f32::INFINITY
        } else {
            half_h / sin.abs()
        };
        let t = tx.min(ty);
        let local = Point::new(t * cos, t * sin);
        self.center + local.rotate(self.rotation)
    }

    /// Projects `point` onto the rectangle outline. See
    /// [`ShapeState::project_to_perimeter`](super::ShapeState::project_to_perimeter).
    pub fn project_to_perimeter(
        &self,
        point: Point,
        previous_theta: Option<f32>,
    ) -> (Point, f32) {
        let local = (point - self.center).rotate(-self.rotation);
        let distance = local.length();
        let raw_theta = local.y.atan2(local.x);
        let dead_zone = RECT_DEAD_ZONE * (self.width.min(self.height) / 2.0);
        let theta = continue_theta(raw_theta, previous_theta, distance, dead_zone);
        (self.point_at(theta), theta)
    }

    pub fn with_center(&self, center: Point) -> Self {
        Self { center, ..*self }
    }

    pub fn with_rotation(&self, rotation: f32) -> Self {
        Self { rotation, ..*self }
    }

    pub fn with_dimensions(&self, width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_RECT_SIDE),
            height: height.max(MIN_RECT_SIDE),
            ..*self
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            width: (self.width * factor).clamp(MIN_RECT_SIDE, MAX_RECT_SIDE),
            height: (self.height * factor).clamp(MIN_RECT_SIDE, MAX_RECT_SIDE),
            ..*self
        }
    }
}
