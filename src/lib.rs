#![warn(clippy::all, rust_2018_idioms)]

pub mod brush;
pub mod canvas;
pub mod command;
pub mod engine;
pub mod event;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod layer;
pub mod shape;
pub mod snapshot;
pub mod stroke;
pub mod util;

pub use brush::Brush;
pub use canvas::Canvas;
pub use command::{Command, CommandHistory};
pub use engine::SketchEngine;
pub use event::{EngineEvent, EventBus};
pub use geometry::{Point, Rect};
pub use input::{PointerEvent, PointerPhase};
pub use interaction::{ActiveHandle, InteractionOutcome, ShapeInteraction};
pub use layer::{Layer, LayerContent};
pub use shape::{EllipseShape, RectangleShape, ShapeState};
pub use snapshot::CanvasSnapshot;
pub use stroke::{DrawingPath, PathBuilder};
