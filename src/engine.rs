use crate::brush::Brush;
use crate::canvas::Canvas;
use crate::command::{Command, CommandHistory};
use crate::event::{EngineEvent, EventBus, EventListener};
use crate::input::{PointerEvent, PointerPhase};
use crate::interaction::{InteractionOutcome, ShapeInteraction};
use crate::layer::{Layer, LayerContent};
use crate::shape::ShapeState;
use crate::stroke::{DrawingPath, PathBuilder};
use log::debug;
use uuid::Uuid;

/// The single owner of drawing state: canvas, history, the optional shape
/// tool session, and the listeners to notify on change.
///
/// Single-threaded: pointer events and commands must arrive in order, one
/// at a time. Background work (saving, encoding) should take a
/// cloned canvas snapshot rather than sharing this struct.
pub struct SketchEngine {
    canvas: Canvas,
    history: CommandHistory,
    shape_mode: Option<ShapeInteraction>,
    freehand_path: Option<PathBuilder>,
    brush: Brush,
    bus: EventBus,
}

impl SketchEngine {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            history: CommandHistory::new(),
            shape_mode: None,
            freehand_path: None,
            brush: Brush::default(),
            bus: EventBus::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn subscribe(&self, listener: Box<dyn EventListener>) {
        self.bus.subscribe(listener);
    }

    // ---- Command dispatch -------------------------------------------------

    pub fn perform(&mut self, command: Command) {
        self.canvas = self.history.execute(command, &self.canvas);
        self.bus.emit(EngineEvent::CanvasChanged);
        self.bus.emit(EngineEvent::HistoryChanged);
    }

    /// Undoes the last command. Returns false (no-op) on an empty stack.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.canvas) {
            Some(canvas) => {
                self.canvas = canvas;
                self.bus.emit(EngineEvent::CanvasChanged);
                self.bus.emit(EngineEvent::HistoryChanged);
                true
            }
            None => false,
        }
    }

    /// Redoes the last undone command. Returns false (no-op) on an empty stack.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.canvas) {
            Some(canvas) => {
                self.canvas = canvas;
                self.bus.emit(EngineEvent::CanvasChanged);
                self.bus.emit(EngineEvent::HistoryChanged);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn add_layer(&mut self, layer: Layer, position: Option<usize>) {
        self.perform(Command::add_layer(&self.canvas, layer, position));
    }

    pub fn delete_layer(&mut self, layer_id: Uuid) {
        if let Some(command) = Command::delete_layer(&self.canvas, layer_id) {
            self.perform(command);
        }
    }

    pub fn toggle_layer_visibility(&mut self, layer_id: Uuid) {
        self.perform(Command::toggle_layer_visibility(layer_id));
    }

    /// Active-layer selection and reordering are view state, not history:
    /// they bypass the undo stack.
    pub fn set_active_layer(&mut self, layer_id: Uuid) {
        self.canvas = self.canvas.with_active_layer(layer_id);
        self.bus.emit(EngineEvent::CanvasChanged);
    }

    pub fn move_layer(&mut self, from: usize, to: usize) {
        self.canvas = self.canvas.with_layer_moved(from, to);
        self.bus.emit(EngineEvent::CanvasChanged);
    }

    // ---- Shape mode -------------------------------------------------------

    pub fn enter_shape_mode(&mut self, shape: ShapeState) {
        self.freehand_path = None;
        self.shape_mode = Some(ShapeInteraction::new(shape));
        self.bus.emit(EngineEvent::ShapeChanged);
    }

    pub fn exit_shape_mode(&mut self) {
        if self.shape_mode.take().is_some() {
            self.bus.emit(EngineEvent::ShapeModeExited);
        }
    }

    pub fn shape_interaction(&self) -> Option<&ShapeInteraction> {
        self.shape_mode.as_ref()
    }

    pub fn in_shape_mode(&self) -> bool {
        self.shape_mode.is_some()
    }

    // ---- Pointer routing --------------------------------------------------

    /// Feeds one pointer event to whichever tool is active: the shape
    /// interaction machine in shape mode, freehand stroke building
    /// otherwise. Finished strokes land on the active layer as an
    /// undoable `AddPath` command.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        if let Some(interaction) = &mut self.shape_mode {
            match interaction.handle_event(event, &self.brush) {
                InteractionOutcome::ShapeChanged => self.bus.emit(EngineEvent::ShapeChanged),
                InteractionOutcome::StrokeFinished(path) => self.commit_stroke(path),
                InteractionOutcome::ExitRequested => self.exit_shape_mode(),
                InteractionOutcome::StrokeProgress | InteractionOutcome::Ignored => {}
            }
            return;
        }

        // Freehand drawing outside shape mode. Multi-touch aborts the
        // stroke without committing anything.
        if event.pointer_count > 1 || event.phase == PointerPhase::Cancel {
            self.freehand_path = None;
            return;
        }
        match event.phase {
            PointerPhase::Start => {
                let mut path = PathBuilder::new(self.brush.clone());
                path.push(event.position);
                self.freehand_path = Some(path);
            }
            PointerPhase::Move => {
                if let Some(path) = &mut self.freehand_path {
                    path.push(event.position);
                }
            }
            PointerPhase::End => {
                if let Some(mut path) = self.freehand_path.take() {
                    path.push(event.position);
                    self.commit_stroke(path.finish());
                }
            }
            PointerPhase::Cancel => {}
        }
    }

    /// Points of the stroke currently in flight, for live preview.
    pub fn preview_points(&self) -> &[crate::geometry::Point] {
        if let Some(interaction) = &self.shape_mode {
            return interaction.preview_points();
        }
        self.freehand_path.as_ref().map_or(&[], PathBuilder::points)
    }

    fn commit_stroke(&mut self, path: DrawingPath) {
        if path.is_empty() {
            return;
        }
        let Some(layer) = self.canvas.active_layer() else {
            debug!("stroke dropped: no active layer");
            return;
        };
        if layer.locked || !matches!(layer.content, LayerContent::Vector(_)) {
            debug!("stroke dropped: layer {} not writable", layer.id);
            return;
        }
        let layer_id = layer.id;
        self.perform(Command::add_path(layer_id, path));
    }
}
