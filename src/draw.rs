//! Shape primitives and the rasterizer that paints them onto an RGBA canvas.
//!
//! Shapes overwrite the pixels they cover. There is no blending and no
//! anti-aliasing, so the same sequence of draw calls always produces the same
//! bytes. Anything that falls outside the canvas is clipped.

use image::{Rgba, RgbaImage};

/// Background disc fill
pub const ACCENT_BLUE: Rgba<u8> = Rgba([66, 133, 244, 255]);

/// Disc outline and clock face fill
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Clock face outline
pub const LIGHT_GRAY: Rgba<u8> = Rgba([232, 234, 237, 255]);

/// Hands and pivot
pub const DARK_GRAY: Rgba<u8> = Rgba([95, 99, 104, 255]);

/// Empty canvas background
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A filled ellipse described by its inclusive bounding box
///
/// When an outline is set, a ring of `outline_width` pixels along the edge is
/// painted in the outline colour and the fill only covers what is left inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub fill: Rgba<u8>,
    pub outline: Option<Rgba<u8>>,
    pub outline_width: u32,
}

impl Ellipse {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, fill: Rgba<u8>) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            fill,
            outline: None,
            outline_width: 0,
        }
    }

    pub fn with_outline(mut self, color: Rgba<u8>, width: u32) -> Self {
        self.outline = Some(color);
        self.outline_width = width;
        self
    }

    pub fn draw(&self, canvas: &mut RgbaImage) {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return;
        }

        let center_x = (self.x0 + self.x1) as f32 / 2.0;
        let center_y = (self.y0 + self.y1) as f32 / 2.0;

        // Half a pixel past the box edges so the edge pixels themselves are covered
        let radius_x = (self.x1 - self.x0) as f32 / 2.0 + 0.5;
        let radius_y = (self.y1 - self.y0) as f32 / 2.0 + 0.5;

        let ring = if self.outline.is_some() {
            self.outline_width as f32
        } else {
            0.0
        };
        let fill_radius_x = radius_x - ring;
        let fill_radius_y = radius_y - ring;

        for y in self.y0..=self.y1 {
            for x in self.x0..=self.x1 {
                let dx = x as f32 - center_x;
                let dy = y as f32 - center_y;

                if !within_ellipse(dx, dy, radius_x, radius_y) {
                    continue;
                }

                let color = match self.outline {
                    Some(outline) if !within_ellipse(dx, dy, fill_radius_x, fill_radius_y) => {
                        outline
                    }
                    _ => self.fill,
                };
                put_clipped(canvas, x, y, color);
            }
        }
    }
}

/// A straight segment between two pixel positions, both ends included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub color: Rgba<u8>,
    pub width: u32,
}

impl Line {
    pub fn new(start: (i32, i32), end: (i32, i32), color: Rgba<u8>, width: u32) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    /// Bresenham walk from `start` to `end`, painting a band of `width` pixels
    /// across the major axis at every step.
    pub fn draw(&self, canvas: &mut RgbaImage) {
        let (mut x, mut y) = self.start;
        let (end_x, end_y) = self.end;

        let dx = (end_x - x).abs();
        let dy = -(end_y - y).abs();
        let step_x = if x < end_x { 1 } else { -1 };
        let step_y = if y < end_y { 1 } else { -1 };
        let steep = -dy > dx;

        let width = self.width.max(1) as i32;
        let first_offset = -(width / 2);

        let mut err = dx + dy;
        loop {
            for offset in first_offset..first_offset + width {
                if steep {
                    put_clipped(canvas, x + offset, y, self.color);
                } else {
                    put_clipped(canvas, x, y + offset, self.color);
                }
            }

            if x == end_x && y == end_y {
                break;
            }

            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += step_x;
            }
            if doubled <= dx {
                err += dx;
                y += step_y;
            }
        }
    }
}

fn within_ellipse(dx: f32, dy: f32, radius_x: f32, radius_y: f32) -> bool {
    if radius_x <= 0.0 || radius_y <= 0.0 {
        return false;
    }
    (dx / radius_x).powi(2) + (dy / radius_y).powi(2) <= 1.0
}

fn put_clipped(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, color);
    }
}
