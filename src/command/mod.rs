mod history;

pub use history::CommandHistory;

use crate::canvas::Canvas;
use crate::layer::Layer;
use crate::stroke::DrawingPath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reversible canvas mutation. Commands are pure: `apply` and `revert`
/// take a canvas and return a new one. Unknown targets (a layer id no
/// longer present) leave the canvas unchanged rather than failing.
///
/// Layer commands capture whatever pre-state their revert needs (the active
/// layer id, the deleted layer and its index) at creation time, so they are
/// built against the canvas they will run on. See [`Command::add_layer`]
/// and [`Command::delete_layer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Adds a committed stroke to a layer
    AddPath {
        layer_id: Uuid,
        path: DrawingPath,
    },
    /// Inserts a layer (appended when `position` is `None`)
    AddLayer {
        layer: Layer,
        position: Option<usize>,
        previous_active: Option<Uuid>,
    },
    /// Removes a layer; the captured layer and index restore z-order on revert
    DeleteLayer {
        layer: Layer,
        index: usize,
        previous_active: Option<Uuid>,
    },
    ToggleLayerVisibility {
        layer_id: Uuid,
    },
}

impl Command {
    pub fn add_path(layer_id: Uuid, path: DrawingPath) -> Self {
        Command::AddPath { layer_id, path }
    }

    pub fn add_layer(canvas: &Canvas, layer: Layer, position: Option<usize>) -> Self {
        Command::AddLayer {
            layer,
            position,
            previous_active: canvas.active_layer_id(),
        }
    }

    /// Builds a `DeleteLayer` command, capturing the layer and its current
    /// index so revert can reinsert it in place. `None` if the id is absent.
    pub fn delete_layer(canvas: &Canvas, layer_id: Uuid) -> Option<Self> {
        let index = canvas.layer_index(layer_id)?;
        Some(Command::DeleteLayer {
            layer: canvas.layers()[index].clone(),
            index,
            previous_active: canvas.active_layer_id(),
        })
    }

    pub fn toggle_layer_visibility(layer_id: Uuid) -> Self {
        Command::ToggleLayerVisibility { layer_id }
    }

    pub fn apply(&self, canvas: &Canvas) -> Canvas {
        match self {
            Command::AddPath { layer_id, path } => {
                canvas.with_layer_updated(*layer_id, |layer| layer.with_path_added(path.clone()))
            }
            Command::AddLayer { layer, position, .. } => {
                canvas.with_layer_added(layer.clone(), *position)
            }
            Command::DeleteLayer { layer, .. } => canvas.with_layer_removed(layer.id),
            Command::ToggleLayerVisibility { layer_id } => {
                canvas.with_layer_updated(*layer_id, |layer| {
                    layer.with_visibility(!layer.visible)
                })
            }
        }
    }

    pub fn revert(&self, canvas: &Canvas) -> Canvas {
        match self {
            // Removal is by value equality, not index. With two identical
            // paths on one layer the most recent match goes; carried over
            // from the original behavior.
            Command::AddPath { layer_id, path } => {
                canvas.with_layer_updated(*layer_id, |layer| layer.with_path_removed(path))
            }
            Command::AddLayer {
                layer,
                previous_active,
                ..
            } => {
                let canvas = canvas.with_layer_removed(layer.id);
                restore_active(canvas, *previous_active)
            }
            Command::DeleteLayer {
                layer,
                index,
                previous_active,
            } => {
                let canvas = canvas.with_layer_added(layer.clone(), Some(*index));
                restore_active(canvas, *previous_active)
            }
            Command::ToggleLayerVisibility { layer_id } => {
                canvas.with_layer_updated(*layer_id, |layer| {
                    layer.with_visibility(!layer.visible)
                })
            }
        }
    }
}

fn restore_active(canvas: Canvas, previous_active: Option<Uuid>) -> Canvas {
    match previous_active {
        Some(id) => canvas.with_active_layer(id),
        None => canvas,
    }
}
