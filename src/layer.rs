use crate::stroke::DrawingPath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content held by a layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerContent {
    Vector(Vec<DrawingPath>),
    /// Raster content. Pixel data lives with the rendering collaborator;
    /// the model keeps only the dimensions.
    Bitmap {
        width: u32,
        height: u32,
    },
}

impl LayerContent {
    pub fn paths(&self) -> Option<&Vec<DrawingPath>> {
        match self {
            LayerContent::Vector(paths) => Some(paths),
            LayerContent::Bitmap { .. } => None,
        }
    }
}

/// A single layer in a canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier for the layer
    pub id: Uuid,
    /// Display name of the layer
    pub name: String,
    /// Whether the layer is currently visible
    pub visible: bool,
    /// Locked layers reject new strokes
    pub locked: bool,
    /// Layer opacity in [0, 1]
    pub opacity: f32,
    /// Content of the layer
    pub content: LayerContent,
}

impl Layer {
    pub fn vector(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            visible: true,
            locked: false,
            opacity: 1.0,
            content: LayerContent::Vector(Vec::new()),
        }
    }

    pub fn bitmap(name: &str, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            visible: true,
            locked: false,
            opacity: 1.0,
            content: LayerContent::Bitmap { width, height },
        }
    }

    pub fn paths(&self) -> &[DrawingPath] {
        match &self.content {
            LayerContent::Vector(paths) => paths,
            LayerContent::Bitmap { .. } => &[],
        }
    }

    /// Returns a copy of this layer with the path appended.
    /// Bitmap layers are returned unchanged.
    pub fn with_path_added(&self, path: DrawingPath) -> Self {
        let mut layer = self.clone();
        if let LayerContent::Vector(paths) = &mut layer.content {
            paths.push(path);
        }
        layer
    }

    /// Returns a copy with the most recent path equal to `path` removed.
    /// No matching path means no change.
    pub fn with_path_removed(&self, path: &DrawingPath) -> Self {
        let mut layer = self.clone();
        if let LayerContent::Vector(paths) = &mut layer.content {
            if let Some(index) = paths.iter().rposition(|p| p == path) {
                paths.remove(index);
            }
        }
        layer
    }

    pub fn with_visibility(&self, visible: bool) -> Self {
        let mut layer = self.clone();
        layer.visible = visible;
        layer
    }

    pub fn with_opacity(&self, opacity: f32) -> Self {
        let mut layer = self.clone();
        layer.opacity = opacity.clamp(0.0, 1.0);
        layer
    }

    pub fn with_locked(&self, locked: bool) -> Self {
        let mut layer = self.clone();
        layer.locked = locked;
        layer
    }

    pub fn with_name(&self, name: &str) -> Self {
        let mut layer = self.clone();
        layer.name = name.to_string();
        layer
    }
}
