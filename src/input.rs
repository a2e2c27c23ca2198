use crate::geometry::Point;

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A pointer sample in canvas coordinate space. Conversion from screen
/// space (viewport pan/zoom/rotation) is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    /// Number of pointers currently down; more than one interrupts drawing
    pub pointer_count: u8,
}

impl PointerEvent {
    pub fn start(position: Point) -> Self {
        Self {
            phase: PointerPhase::Start,
            position,
            pointer_count: 1,
        }
    }

    pub fn move_to(position: Point) -> Self {
        Self {
            phase: PointerPhase::Move,
            position,
            pointer_count: 1,
        }
    }

    pub fn end(position: Point) -> Self {
        Self {
            phase: PointerPhase::End,
            position,
            pointer_count: 1,
        }
    }

    pub fn cancel(position: Point) -> Self {
        Self {
            phase: PointerPhase::Cancel,
            position,
            pointer_count: 0,
        }
    }
}
