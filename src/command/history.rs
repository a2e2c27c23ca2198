use super::Command;
use crate::canvas::Canvas;
use log::debug;

/// Manages the history of executed commands for undo/redo functionality.
/// Linear branching policy: executing a new command discards redo history.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a command, records it, and returns the resulting canvas.
    pub fn execute(&mut self, command: Command, canvas: &Canvas) -> Canvas {
        debug!("execute {:?}", command_name(&command));
        let next = command.apply(canvas);
        self.undo_stack.push(command);
        // New actions invalidate any undone history.
        self.redo_stack.clear();
        next
    }

    /// Undoes the most recent command. `None` when there is nothing to
    /// undo; callers treat that as a no-op.
    pub fn undo(&mut self, canvas: &Canvas) -> Option<Canvas> {
        let command = self.undo_stack.pop()?;
        debug!("undo {:?}", command_name(&command));
        let next = command.revert(canvas);
        self.redo_stack.push(command);
        Some(next)
    }

    /// Redoes the most recently undone command. `None` when the redo stack
    /// is empty.
    pub fn redo(&mut self, canvas: &Canvas) -> Option<Canvas> {
        let command = self.redo_stack.pop()?;
        debug!("redo {:?}", command_name(&command));
        let next = command.apply(canvas);
        self.undo_stack.push(command);
        Some(next)
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::AddPath { .. } => "AddPath",
        Command::AddLayer { .. } => "AddLayer",
        Command::DeleteLayer { .. } => "DeleteLayer",
        Command::ToggleLayerVisibility { .. } => "ToggleLayerVisibility",
    }
}
