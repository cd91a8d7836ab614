use image::RgbaImage;

use crate::models::{BoundingBox, Ellipse, DARK, DARK_PURPLE, PURPLE, TRANSPARENT, WHITE};

/// Outline width for the eye body. Never drops to zero on small canvases.
pub fn stroke_width(size: u32) -> u32 {
    (size / 32).max(1)
}

/// Every measurement of the eye, derived from the canvas size alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    pub size: u32,
    pub padding: f32,
    pub cx: f32,
    pub cy: f32,
    pub eye_width: f32,
    pub eye_height: f32,
    pub iris_radius: f32,
    pub pupil_radius: f32,
    pub highlight_radius: f32,
    pub highlight_offset: f32,
}

impl EyeGeometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let padding = s * 0.1;
        let eye_width = s - padding * 2.0;
        let eye_height = eye_width * 0.5;
        let iris_radius = eye_height * 0.4;
        let pupil_radius = iris_radius * 0.5;
        Self {
            size,
            padding,
            cx: s / 2.0,
            cy: s / 2.0,
            eye_width,
            eye_height,
            iris_radius,
            pupil_radius,
            highlight_radius: pupil_radius * 0.3,
            highlight_offset: pupil_radius * 0.3,
        }
    }

    /// Eye body, iris, pupil, highlight, in paint order.
    pub fn layers(&self) -> [Ellipse; 4] {
        let body = BoundingBox {
            left: self.padding,
            top: self.cy - self.eye_height / 2.0,
            right: self.size as f32 - self.padding,
            bottom: self.cy + self.eye_height / 2.0,
        };
        [
            Ellipse::outlined(body, PURPLE, DARK_PURPLE, stroke_width(self.size)),
            Ellipse::filled(BoundingBox::circle(self.cx, self.cy, self.iris_radius), WHITE),
            Ellipse::filled(BoundingBox::circle(self.cx, self.cy, self.pupil_radius), DARK),
            Ellipse::filled(
                BoundingBox::circle(
                    self.cx - self.highlight_offset,
                    self.cy - self.highlight_offset,
                    self.highlight_radius,
                ),
                WHITE,
            ),
        ]
    }
}

// Eye app icon: purple almond body, white iris, dark pupil, small glint.
pub fn generate_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    for shape in EyeGeometry::for_size(size).layers() {
        draw_ellipse(&mut img, &shape);
    }
    img
}

/// Paints the ellipse inscribed in `shape.bbox`, sampling pixel centres.
/// The outline is stroked inward from the bbox edge.
pub fn draw_ellipse(img: &mut RgbaImage, shape: &Ellipse) {
    let outer = shape.bbox;
    if outer.is_empty() {
        return;
    }
    let inner = match shape.outline {
        Some(_) if shape.stroke_width > 0 => Some(outer.inset(shape.stroke_width as f32)),
        _ => None,
    };

    let (w, h) = img.dimensions();
    let x0 = clamp_px(outer.left.floor(), w);
    let x1 = clamp_px(outer.right.ceil(), w);
    let y0 = clamp_px(outer.top.floor(), h);
    let y1 = clamp_px(outer.bottom.ceil(), h);

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if !inside_ellipse(px, py, &outer) {
                continue;
            }
            let color = match (shape.outline, inner) {
                (Some(outline), Some(inner)) if !inside_ellipse(px, py, &inner) => outline,
                _ => shape.fill,
            };
            img.put_pixel(x, y, color);
        }
    }
}

#[inline]
fn clamp_px(v: f32, limit: u32) -> u32 {
    if v <= 0.0 { 0 } else { (v as u32).min(limit) }
}

fn inside_ellipse(px: f32, py: f32, b: &BoundingBox) -> bool {
    if b.is_empty() {
        return false;
    }
    let rx = b.width() / 2.0;
    let ry = b.height() / 2.0;
    let dx = (px - (b.left + rx)) / rx;
    let dy = (py - (b.top + ry)) / ry;
    dx * dx + dy * dy <= 1.0
}
