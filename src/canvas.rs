use crate::layer::Layer;
use crate::util::time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canvas metadata carried alongside the layer list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasMeta {
    pub title: String,
    /// Background color as ARGB
    pub background: u32,
    /// Creation time, milliseconds since the UNIX epoch
    pub created_at: u64,
    /// Last mutation time, milliseconds since the UNIX epoch
    pub modified_at: u64,
}

/// The drawing document: an ordered list of layers (bottom to top paint
/// order) plus the active-layer selection. All operations are copy-based
/// and return a new `Canvas`, which keeps undo cheap and race-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub id: Uuid,
    pub width: f32,
    pub height: f32,
    pub meta: CanvasMeta,
    layers: Vec<Layer>,
    active_layer_id: Option<Uuid>,
}

impl Canvas {
    pub fn new(title: &str, width: f32, height: f32) -> Self {
        let now = time::timestamp_millis();
        Self {
            id: Uuid::new_v4(),
            width,
            height,
            meta: CanvasMeta {
                title: title.to_string(),
                background: 0xFFFF_FFFF,
                created_at: now,
                modified_at: now,
            },
            layers: Vec::new(),
            active_layer_id: None,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn active_layer_id(&self) -> Option<Uuid> {
        self.active_layer_id
    }

    pub fn layer(&self, id: Uuid) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_index(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_layer_id.and_then(|id| self.layer(id))
    }

    /// Structural equality that ignores the modification timestamp.
    pub fn same_content(&self, other: &Canvas) -> bool {
        self.id == other.id
            && self.width == other.width
            && self.height == other.height
            && self.layers == other.layers
            && self.active_layer_id == other.active_layer_id
    }

    fn touched(&self) -> Self {
        let mut canvas = self.clone();
        canvas.meta.modified_at = time::timestamp_millis();
        canvas
    }

    /// Adds a layer at `position` (append when `None`). The new layer
    /// becomes the active one.
    pub fn with_layer_added(&self, layer: Layer, position: Option<usize>) -> Self {
        let mut canvas = self.touched();
        let id = layer.id;
        let index = position
            .unwrap_or(canvas.layers.len())
            .min(canvas.layers.len());
        canvas.layers.insert(index, layer);
        canvas.active_layer_id = Some(id);
        canvas
    }

    /// Removes the layer with `id`. Unknown ids are a no-op. When the
    /// active layer is removed, the layer now occupying its former index
    /// becomes active (or the last layer when the removed one was on top,
    /// or none when the list is empty).
    pub fn with_layer_removed(&self, id: Uuid) -> Self {
        let Some(index) = self.layer_index(id) else {
            return self.clone();
        };
        let mut canvas = self.touched();
        canvas.layers.remove(index);
        if canvas.active_layer_id == Some(id) {
            canvas.active_layer_id = if canvas.layers.is_empty() {
                None
            } else {
                let next = index.min(canvas.layers.len() - 1);
                Some(canvas.layers[next].id)
            };
        }
        canvas
    }

    /// Maps the layer with `id` through `f`. Unknown ids are a no-op.
    pub fn with_layer_updated(&self, id: Uuid, f: impl FnOnce(&Layer) -> Layer) -> Self {
        let Some(index) = self.layer_index(id) else {
            return self.clone();
        };
        let mut canvas = self.touched();
        let updated = f(&canvas.layers[index]);
        canvas.layers[index] = updated;
        canvas
    }

    /// Sets the active layer. Ids not present in the layer list are ignored.
    pub fn with_active_layer(&self, id: Uuid) -> Self {
        if self.layer_index(id).is_none() {
            return self.clone();
        }
        let mut canvas = self.touched();
        canvas.active_layer_id = Some(id);
        canvas
    }

    /// Moves the layer at `from` to `to` in paint order.
    /// Out-of-bounds indices are a no-op.
    pub fn with_layer_moved(&self, from: usize, to: usize) -> Self {
        if from >= self.layers.len() || to >= self.layers.len() {
            return self.clone();
        }
        let mut canvas = self.touched();
        let layer = canvas.layers.remove(from);
        canvas.layers.insert(to, layer);
        canvas
    }
}
