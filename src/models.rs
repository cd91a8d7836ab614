use std::path::PathBuf;

use image::Rgba;

pub type Color = Rgba<u8>;

pub const PURPLE: Color = Rgba([139, 92, 246, 255]); // #8B5CF6
pub const DARK_PURPLE: Color = Rgba([109, 40, 217, 255]);
pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const DARK: Color = Rgba([30, 30, 50, 255]);
pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

/// Axis-aligned box in canvas coordinates (pixels, float).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn around(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self {
            left: cx - rx,
            top: cy - ry,
            right: cx + rx,
            bottom: cy + ry,
        }
    }

    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::around(cx, cy, r, r)
    }

    pub fn inset(&self, d: f32) -> Self {
        Self {
            left: self.left + d,
            top: self.top + d,
            right: self.right - d,
            bottom: self.bottom - d,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// One shape to paint: the ellipse inscribed in `bbox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub bbox: BoundingBox,
    pub fill: Color,
    pub outline: Option<Color>,
    pub stroke_width: u32,
}

impl Ellipse {
    pub fn filled(bbox: BoundingBox, fill: Color) -> Self {
        Self { bbox, fill, outline: None, stroke_width: 0 }
    }

    pub fn outlined(bbox: BoundingBox, fill: Color, outline: Color, stroke_width: u32) -> Self {
        Self { bbox, fill, outline: Some(outline), stroke_width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub file_name: &'static str,
    pub size: u32,
}

/// A file written by the exporter and the resolutions it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub sizes: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub artifacts: Vec<Artifact>,
}

impl ExportReport {
    pub fn push(&mut self, path: PathBuf, sizes: Vec<u32>) {
        self.artifacts.push(Artifact { path, sizes });
    }

    pub fn extend(&mut self, other: ExportReport) {
        self.artifacts.extend(other.artifacts);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
