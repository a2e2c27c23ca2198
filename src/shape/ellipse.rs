use super::{continue_theta, ELLIPSE_DEAD_ZONE};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

pub const MIN_ELLIPSE_RADIUS: f32 = 20.0;
pub const MAX_ELLIPSE_RADIUS: f32 = 1000.0;

/// An ellipse with independent radii and a rotation about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Rotation in radians
    pub rotation: f32,
}

impl EllipseShape {
    pub fn new(center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self {
            center,
            radius_x: radius_x.max(MIN_ELLIPSE_RADIUS),
            radius_y: radius_y.max(MIN_ELLIPSE_RADIUS),
            rotation: 0.0,
        }
    }

    /// Maps theta to the perimeter point it parameterizes, in canvas space.
    pub fn point_at(&self, theta: f32) -> Point {
        let local = Point::new(self.radius_x * theta.cos(), self.radius_y * theta.sin());
        self.center + local.rotate(self.rotation)
    }

    /// Projects `point` onto the ellipse outline. See
    /// [`ShapeState::project_to_perimeter`](super::ShapeState::project_to_perimeter).
    pub fn project_to_perimeter(
        &self,
        point: Point,
        previous_theta: Option<f32>,
    ) -> (Point, f32) {
        let local = (point - self.center).rotate(-self.rotation);
        let distance = local.length();
        // Dividing by the radii turns the ellipse into a unit circle, so
        // atan2 yields the parametric (not geometric) angle directly.
        let raw_theta = (local.y / self.radius_y).atan2(local.x / self.radius_x);
        let dead_zone = ELLIPSE_DEAD_ZONE * self.radius_x.min(self.radius_y);
        let theta = continue_theta(raw_theta, previous_theta, distance, dead_zone);
        (self.point_at(theta), theta)
    }

    pub fn with_center(&self, center: Point) -> Self {
        Self { center, ..*self }
    }

    pub fn with_rotation(&self, rotation: f32) -> Self {
        Self { rotation, ..*self }
    }

    pub fn with_radii(&self, radius_x: f32, radius_y: f32) -> Self {
        Self {
            radius_x: radius_x.max(MIN_ELLIPSE_RADIUS),
            radius_y: radius_y.max(MIN_ELLIPSE_RADIUS),
            ..*self
        }
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            radius_x: (self.radius_x * factor).clamp(MIN_ELLIPSE_RADIUS, MAX_ELLIPSE_RADIUS),
            radius_y: (self.radius_y * factor).clamp(MIN_ELLIPSE_RADIUS, MAX_ELLIPSE_RADIUS),
            ..*self
        }
    }
}
