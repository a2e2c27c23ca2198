use crate::canvas::Canvas;
use crate::util::time;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while encoding or decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize canvas: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snapshot data: {0}")]
    InvalidData(String),
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// A serializable snapshot of the canvas, handed to the persistence
/// collaborator. The collaborator owns the file format; this module only
/// defines the JSON encoding of the in-memory state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    /// The full canvas, layers and paths included
    pub canvas: Canvas,
    /// Timestamp of when the snapshot was taken, milliseconds since epoch
    pub timestamp: u64,
    /// Version of the crate that wrote the snapshot
    pub version: String,
}

impl CanvasSnapshot {
    /// Create a new snapshot of the given canvas
    pub fn new(canvas: &Canvas) -> Self {
        Self {
            canvas: canvas.clone(),
            timestamp: time::timestamp_millis(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let snapshot: CanvasSnapshot = serde_json::from_str(json)?;
        // The active-layer id must reference an existing layer, and may be
        // absent only when the layer list is empty.
        match snapshot.canvas.active_layer_id() {
            Some(id) if snapshot.canvas.layer(id).is_none() => {
                return Err(SnapshotError::InvalidData(format!(
                    "active layer {id} not present in the layer list"
                )));
            }
            None if !snapshot.canvas.layers().is_empty() => {
                return Err(SnapshotError::InvalidData(
                    "non-empty canvas without an active layer".to_string(),
                ));
            }
            _ => {}
        }
        Ok(snapshot)
    }
}
