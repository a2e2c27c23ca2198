mod ellipse;
mod rectangle;

pub use ellipse::EllipseShape;
pub use rectangle::RectangleShape;

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_8, PI, TAU};

/// Distance within which a pointer grabs a handle.
pub const HANDLE_HIT_RADIUS: f32 = 60.0;
/// Radius the rendering collaborator should draw handles at.
pub const HANDLE_VISUAL_RADIUS: f32 = 30.0;
/// Gap between the shape's un-rotated extent and its handles.
pub const HANDLE_OFFSET: f32 = 30.0;
/// Largest theta change accepted per projection call.
pub const MAX_ANGLE_STEP: f32 = FRAC_PI_8;
/// Dead-zone radius fraction of the smaller ellipse radius.
pub const ELLIPSE_DEAD_ZONE: f32 = 0.25;
/// Dead-zone radius fraction of the smaller rectangle half-side.
pub const RECT_DEAD_ZONE: f32 = 0.3;

/// Normalizes an angle into `[-π, π]`.
pub(crate) fn normalize_angle(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

/// Threads `previous_theta` through a new raw angle sample.
///
/// The first sample of a drag accepts `raw_theta` unconditionally. Samples
/// inside the center dead zone keep the previous angle untouched, since a
/// nearest-angle projection is unstable there. Everything else moves the
/// angle by at most [`MAX_ANGLE_STEP`] toward the raw sample.
pub(crate) fn continue_theta(
    raw_theta: f32,
    previous_theta: Option<f32>,
    distance_from_center: f32,
    dead_zone: f32,
) -> f32 {
    let Some(previous) = previous_theta else {
        return raw_theta;
    };
    if distance_from_center < dead_zone {
        return previous;
    }
    let delta = normalize_angle(raw_theta - previous).clamp(-MAX_ANGLE_STEP, MAX_ANGLE_STEP);
    normalize_angle(previous + delta)
}

/// The five semantic anchor points of a shape, in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePositions {
    /// Move handle
    pub center: Point,
    /// Rotate handle
    pub left: Point,
    /// Aspect handle
    pub right: Point,
    /// Uniform-scale handle
    pub top: Point,
    /// Exit handle
    pub bottom: Point,
}

impl HandlePositions {
    /// Lays the handles out around an un-rotated extent of
    /// `half_width × half_height` and rotates them about `center`.
    pub(crate) fn around(
        center: Point,
        half_width: f32,
        half_height: f32,
        rotation: f32,
    ) -> Self {
        let place = |offset: Point| center + offset.rotate(rotation);
        Self {
            center,
            left: place(Point::new(-(half_width + HANDLE_OFFSET), 0.0)),
            right: place(Point::new(half_width + HANDLE_OFFSET, 0.0)),
            top: place(Point::new(0.0, -(half_height + HANDLE_OFFSET))),
            bottom: place(Point::new(0.0, half_height + HANDLE_OFFSET)),
        }
    }
}

/// A parametric outline the pointer can be constrained to. Ephemeral:
/// shape state lives only while a shape tool is active and is never part
/// of the persisted canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeState {
    Ellipse(EllipseShape),
    Rectangle(RectangleShape),
}

impl ShapeState {
    pub fn center(&self) -> Point {
        match self {
            ShapeState::Ellipse(e) => e.center,
            ShapeState::Rectangle(r) => r.center,
        }
    }

    pub fn rotation(&self) -> f32 {
        match self {
            ShapeState::Ellipse(e) => e.rotation,
            ShapeState::Rectangle(r) => r.rotation,
        }
    }

    /// Projects `point` onto the perimeter, threading the continuity angle.
    /// The returned point always lies exactly on the outline and the theta
    /// is normalized into `[-π, π]`.
    pub fn project_to_perimeter(
        &self,
        point: Point,
        previous_theta: Option<f32>,
    ) -> (Point, f32) {
        match self {
            ShapeState::Ellipse(e) => e.project_to_perimeter(point, previous_theta),
            ShapeState::Rectangle(r) => r.project_to_perimeter(point, previous_theta),
        }
    }

    pub fn with_center(&self, center: Point) -> Self {
        match self {
            ShapeState::Ellipse(e) => ShapeState::Ellipse(e.with_center(center)),
            ShapeState::Rectangle(r) => ShapeState::Rectangle(r.with_center(center)),
        }
    }

    pub fn with_rotation(&self, rotation: f32) -> Self {
        match self {
            ShapeState::Ellipse(e) => ShapeState::Ellipse(e.with_rotation(rotation)),
            ShapeState::Rectangle(r) => ShapeState::Rectangle(r.with_rotation(rotation)),
        }
    }

    /// Uniform scale about the center, clamped to each shape's extent range.
    pub fn scaled(&self, factor: f32) -> Self {
        match self {
            ShapeState::Ellipse(e) => ShapeState::Ellipse(e.scaled(factor)),
            ShapeState::Rectangle(r) => ShapeState::Rectangle(r.scaled(factor)),
        }
    }

    /// Aspect adjustment: scales only the horizontal extent (radius_x for
    /// ellipses, width for rectangles), leaving the vertical one fixed.
    pub fn with_aspect_scaled(&self, factor: f32) -> Self {
        match self {
            ShapeState::Ellipse(e) => {
                ShapeState::Ellipse(e.with_radii(e.radius_x * factor, e.radius_y))
            }
            ShapeState::Rectangle(r) => {
                ShapeState::Rectangle(r.with_dimensions(r.width * factor, r.height))
            }
        }
    }

    pub fn handle_positions(&self) -> HandlePositions {
        match self {
            ShapeState::Ellipse(e) => HandlePositions::around(
                e.center,
                e.radius_x,
                e.radius_y,
                e.rotation,
            ),
            ShapeState::Rectangle(r) => HandlePositions::around(
                r.center,
                r.width / 2.0,
                r.height / 2.0,
                r.rotation,
            ),
        }
    }
}
