use crate::brush::Brush;
use crate::geometry::Point;
use crate::input::{PointerEvent, PointerPhase};
use crate::shape::{normalize_angle, ShapeState, HANDLE_HIT_RADIUS};
use crate::stroke::{DrawingPath, PathBuilder};
use log::trace;

/// Movement beyond this distance turns a press into a drag.
pub const TAP_SLOP: f32 = 8.0;

/// Which handle (if any) the current gesture is operating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveHandle {
    #[default]
    None,
    LeftRotate,
    RightAspect,
    TopScale,
    BottomExit,
    CenterMove,
    CanvasDraw,
}

/// What a pointer event did to the interaction state.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// Nothing the caller needs to act on
    Ignored,
    /// The shape moved, rotated or resized
    ShapeChanged,
    /// The in-progress stroke gained a point
    StrokeProgress,
    /// A stroke finished and should be committed to the active layer
    StrokeFinished(DrawingPath),
    /// The exit handle was tapped; leave shape mode
    ExitRequested,
}

/// Drives one shape-tool session: classifies gestures against the shape's
/// handles and turns canvas drags into perimeter-constrained strokes.
///
/// Strictly sequential: each event must be processed before the next, since
/// the continuity angle threads from sample to sample.
#[derive(Debug, Clone)]
pub struct ShapeInteraction {
    shape: ShapeState,
    state: ActiveHandle,
    previous_theta: Option<f32>,
    start_position: Option<Point>,
    initial_shape: ShapeState,
    initial_pointer_angle: f32,
    initial_pointer_distance: f32,
    active_path: Option<PathBuilder>,
    dragged: bool,
}

impl ShapeInteraction {
    pub fn new(shape: ShapeState) -> Self {
        Self {
            shape,
            state: ActiveHandle::None,
            previous_theta: None,
            start_position: None,
            initial_shape: shape,
            initial_pointer_angle: 0.0,
            initial_pointer_distance: 0.0,
            active_path: None,
            dragged: false,
        }
    }

    pub fn shape(&self) -> &ShapeState {
        &self.shape
    }

    pub fn state(&self) -> ActiveHandle {
        self.state
    }

    /// Points of the stroke currently being drawn, for live preview.
    pub fn preview_points(&self) -> &[Point] {
        self.active_path.as_ref().map_or(&[], PathBuilder::points)
    }

    /// Processes one pointer event. `brush` is the brush a stroke started
    /// by this event would use.
    pub fn handle_event(&mut self, event: PointerEvent, brush: &Brush) -> InteractionOutcome {
        // Multi-touch interrupts whatever gesture was in flight. The
        // in-progress path is discarded, never committed.
        if event.pointer_count > 1 || event.phase == PointerPhase::Cancel {
            if self.state != ActiveHandle::None {
                trace!("gesture interrupted in state {:?}", self.state);
                self.reset();
            }
            return InteractionOutcome::Ignored;
        }

        match event.phase {
            PointerPhase::Start => self.on_start(event.position, brush),
            PointerPhase::Move => self.on_move(event.position),
            PointerPhase::End => self.on_end(event.position),
            PointerPhase::Cancel => InteractionOutcome::Ignored,
        }
    }

    fn on_start(&mut self, position: Point, brush: &Brush) -> InteractionOutcome {
        let handles = self.shape.handle_positions();
        // Fixed priority: center wins over the outer handles.
        let grabbed = [
            (ActiveHandle::CenterMove, handles.center),
            (ActiveHandle::LeftRotate, handles.left),
            (ActiveHandle::RightAspect, handles.right),
            (ActiveHandle::TopScale, handles.top),
            (ActiveHandle::BottomExit, handles.bottom),
        ]
        .into_iter()
        .find(|(_, anchor)| position.distance(*anchor) <= HANDLE_HIT_RADIUS)
        .map(|(handle, _)| handle);

        self.state = grabbed.unwrap_or(ActiveHandle::CanvasDraw);
        self.start_position = Some(position);
        self.initial_shape = self.shape;
        self.dragged = false;
        trace!("gesture start in state {:?}", self.state);

        match self.state {
            ActiveHandle::LeftRotate => {
                self.initial_pointer_angle = (position - self.shape.center()).angle();
                InteractionOutcome::Ignored
            }
            ActiveHandle::RightAspect | ActiveHandle::TopScale => {
                self.initial_pointer_distance = position.distance(self.shape.center());
                InteractionOutcome::Ignored
            }
            ActiveHandle::CanvasDraw => {
                // New stroke: the angle tracker restarts, so the first
                // projection accepts the raw angle unconditionally.
                self.previous_theta = None;
                let (projected, theta) = self.shape.project_to_perimeter(position, None);
                self.previous_theta = Some(theta);
                let mut path = PathBuilder::new(brush.clone());
                path.push(projected);
                self.active_path = Some(path);
                InteractionOutcome::StrokeProgress
            }
            _ => InteractionOutcome::Ignored,
        }
    }

    fn on_move(&mut self, position: Point) -> InteractionOutcome {
        let Some(start) = self.start_position else {
            return InteractionOutcome::Ignored;
        };
        if position.distance(start) > TAP_SLOP {
            self.dragged = true;
        }

        match self.state {
            ActiveHandle::CenterMove => {
                let delta = position - start;
                self.shape = self
                    .initial_shape
                    .with_center(self.initial_shape.center() + delta);
                InteractionOutcome::ShapeChanged
            }
            ActiveHandle::LeftRotate => {
                let angle = (position - self.initial_shape.center()).angle();
                let delta = normalize_angle(angle - self.initial_pointer_angle);
                self.shape = self
                    .initial_shape
                    .with_rotation(self.initial_shape.rotation() + delta);
                InteractionOutcome::ShapeChanged
            }
            ActiveHandle::RightAspect => {
                self.shape = self.initial_shape.with_aspect_scaled(self.distance_ratio(position));
                InteractionOutcome::ShapeChanged
            }
            ActiveHandle::TopScale => {
                self.shape = self.initial_shape.scaled(self.distance_ratio(position));
                InteractionOutcome::ShapeChanged
            }
            ActiveHandle::CanvasDraw => {
                let (projected, theta) = self
                    .shape
                    .project_to_perimeter(position, self.previous_theta);
                self.previous_theta = Some(theta);
                if let Some(path) = &mut self.active_path {
                    path.push(projected);
                }
                InteractionOutcome::StrokeProgress
            }
            ActiveHandle::BottomExit | ActiveHandle::None => InteractionOutcome::Ignored,
        }
    }

    fn on_end(&mut self, position: Point) -> InteractionOutcome {
        if let Some(start) = self.start_position {
            if position.distance(start) > TAP_SLOP {
                self.dragged = true;
            }
        }
        let state = self.state;
        let path = self.active_path.take();
        let tapped = !self.dragged;
        self.reset();

        match state {
            ActiveHandle::CanvasDraw => match path {
                Some(path) if !path.is_empty() => {
                    InteractionOutcome::StrokeFinished(path.finish())
                }
                _ => InteractionOutcome::Ignored,
            },
            ActiveHandle::BottomExit if tapped => InteractionOutcome::ExitRequested,
            _ => InteractionOutcome::Ignored,
        }
    }

    fn distance_ratio(&self, position: Point) -> f32 {
        let distance = position.distance(self.initial_shape.center());
        if self.initial_pointer_distance <= f32::EPSILON {
            1.0
        } else {
            distance / self.initial_pointer_distance
        }
    }

    fn reset(&mut self) {
        self.state = ActiveHandle::None;
        self.previous_theta = None;
        self.start_position = None;
        self.active_path = None;
        self.dragged = false;
    }
}
