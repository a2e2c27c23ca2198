use std::cell::RefCell;

/// Notifications published by the engine after each state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Layers or active layer changed
    CanvasChanged,
    /// The active shape moved, rotated or resized
    ShapeChanged,
    /// Shape mode was left (exit tap or programmatic)
    ShapeModeExited,
    /// Undo/redo availability changed
    HistoryChanged,
}

pub trait EventListener {
    fn on_event(&mut self, event: EngineEvent);
}

impl<F: FnMut(EngineEvent)> EventListener for F {
    fn on_event(&mut self, event: EngineEvent) {
        self(event)
    }
}

/// A simple event bus for broadcasting engine events to registered listeners
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<Box<dyn EventListener>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &format!("<{} listeners>", self.listeners.borrow().len()))
            .finish()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener to receive events
    pub fn subscribe(&self, listener: Box<dyn EventListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Emit an event to all registered listeners
    pub fn emit(&self, event: EngineEvent) {
        for listener in &mut *self.listeners.borrow_mut() {
            listener.on_event(event);
        }
    }
}
