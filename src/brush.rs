use serde::{Deserialize, Serialize};

/// Smallest brush size the constructors will produce.
pub const MIN_BRUSH_SIZE: f32 = 0.5;

/// A drawing brush. Every variant carries size, opacity and an ARGB color;
/// variant-specific behavior (spray density, erasing, flood fill) is the
/// renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    Solid {
        size: f32,
        opacity: f32,
        color: u32,
    },
    Air {
        size: f32,
        opacity: f32,
        color: u32,
        /// Particles per sample, relative to brush area.
        density: f32,
    },
    Eraser {
        size: f32,
        opacity: f32,
        color: u32,
    },
    Bucket {
        size: f32,
        opacity: f32,
        color: u32,
    },
}

impl Brush {
    pub fn solid(size: f32, opacity: f32, color: u32) -> Self {
        Brush::Solid {
            size: size.max(MIN_BRUSH_SIZE),
            opacity: opacity.clamp(0.0, 1.0),
            color,
        }
    }

    pub fn air(size: f32, opacity: f32, color: u32, density: f32) -> Self {
        Brush::Air {
            size: size.max(MIN_BRUSH_SIZE),
            opacity: opacity.clamp(0.0, 1.0),
            color,
            density: density.max(0.0),
        }
    }

    pub fn eraser(size: f32, opacity: f32) -> Self {
        Brush::Eraser {
            size: size.max(MIN_BRUSH_SIZE),
            opacity: opacity.clamp(0.0, 1.0),
            color: 0x00FF_FFFF,
        }
    }

    pub fn bucket(opacity: f32, color: u32) -> Self {
        Brush::Bucket {
            size: MIN_BRUSH_SIZE,
            opacity: opacity.clamp(0.0, 1.0),
            color,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            Brush::Solid { size, .. }
            | Brush::Air { size, .. }
            | Brush::Eraser { size, .. }
            | Brush::Bucket { size, .. } => *size,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Brush::Solid { opacity, .. }
            | Brush::Air { opacity, .. }
            | Brush::Eraser { opacity, .. }
            | Brush::Bucket { opacity, .. } => *opacity,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            Brush::Solid { color, .. }
            | Brush::Air { color, .. }
            | Brush::Eraser { color, .. }
            | Brush::Bucket { color, .. } => *color,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::solid(4.0, 1.0, 0xFF00_0000)
    }
}
