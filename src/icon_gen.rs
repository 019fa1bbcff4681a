use crate::draw::{Ellipse, Line, ACCENT_BLUE, DARK_GRAY, LIGHT_GRAY, TRANSPARENT, WHITE};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icon sizes written by [`generate_icons`], in output order
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Directory the binary writes into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Gap between the canvas edge and the background disc
pub const OUTER_MARGIN: u32 = 2;

const DISC_OUTLINE_WIDTH: u32 = 2;
const FACE_OUTLINE_WIDTH: u32 = 1;

/// Every measurement of the clock glyph, derived from the icon size alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub margin: u32,
    pub inner_margin: u32,
    pub center: u32,
    pub hand_length: u32,
    pub hour_hand_width: u32,
    pub minute_hand_width: u32,
    pub dot_radius: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            margin: OUTER_MARGIN,
            inner_margin: size / 4,
            center: size / 2,
            hand_length: size / 4,
            hour_hand_width: (size / 32).max(1),
            minute_hand_width: (size / 48).max(1),
            dot_radius: (size / 32).max(1),
        }
    }

    pub fn center_point(&self) -> (i32, i32) {
        (self.center as i32, self.center as i32)
    }

    /// Tip of the hour hand, straight up from the center
    pub fn hour_hand_end(&self) -> (i32, i32) {
        let (x, y) = self.center_point();
        (x, y - self.hand_length as i32)
    }

    /// Tip of the minute hand, straight right from the center
    pub fn minute_hand_end(&self) -> (i32, i32) {
        let (x, y) = self.center_point();
        (x + self.hand_length as i32, y)
    }
}

/// Path of the icon of the given size inside `out_dir`
pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("icon{size}.png"))
}

/// Draw the clock glyph onto a fresh transparent canvas of `size`×`size`
pub fn create_icon(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        anyhow::bail!("icon size must be positive");
    }

    let geometry = IconGeometry::for_size(size);
    let size = i32::try_from(size).context("icon size is too large for drawing coordinates")?;
    let margin = geometry.margin as i32;
    let inner_margin = geometry.inner_margin as i32;
    let (cx, cy) = geometry.center_point();
    let dot = geometry.dot_radius as i32;

    let mut canvas = RgbaImage::from_pixel(geometry.size, geometry.size, TRANSPARENT);

    // Background disc
    Ellipse::new(margin, margin, size - margin, size - margin, ACCENT_BLUE)
        .with_outline(WHITE, DISC_OUTLINE_WIDTH)
        .draw(&mut canvas);

    // Clock face
    Ellipse::new(
        inner_margin,
        inner_margin,
        size - inner_margin,
        size - inner_margin,
        WHITE,
    )
    .with_outline(LIGHT_GRAY, FACE_OUTLINE_WIDTH)
    .draw(&mut canvas);

    Line::new(
        (cx, cy),
        geometry.hour_hand_end(),
        DARK_GRAY,
        geometry.hour_hand_width,
    )
    .draw(&mut canvas);
    Line::new(
        (cx, cy),
        geometry.minute_hand_end(),
        DARK_GRAY,
        geometry.minute_hand_width,
    )
    .draw(&mut canvas);

    // Pivot
    Ellipse::new(cx - dot, cy - dot, cx + dot, cy + dot, DARK_GRAY).draw(&mut canvas);

    Ok(canvas)
}

/// Render the icon of `size` and write it to `path`, replacing any existing file.
/// The parent directory must already exist.
pub fn generate_icon(size: u32, path: &Path) -> Result<()> {
    let canvas = create_icon(size)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas.as_raw(), &mut out_file, size)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;

    println!("Created {} ({size}x{size})", path.display());
    Ok(())
}

/// Write the standard icon set into `out_dir`, creating the directory if needed
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    for size in ICON_SIZES {
        generate_icon(size, &icon_path(out_dir, size))?;
    }

    println!("All icons created successfully!");
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_for_smallest_icon() {
        let geometry = IconGeometry::for_size(16);

        assert_eq!(geometry.margin, 2);
        assert_eq!(geometry.inner_margin, 4);
        assert_eq!(geometry.center, 8);
        assert_eq!(geometry.hand_length, 4);
        assert_eq!(geometry.hour_hand_width, 1);
        assert_eq!(geometry.minute_hand_width, 1);
        assert_eq!(geometry.dot_radius, 1);
        assert_eq!(geometry.hour_hand_end(), (8, 4));
        assert_eq!(geometry.minute_hand_end(), (12, 8));
    }

    #[test]
    fn geometry_scales_with_size() {
        let medium = IconGeometry::for_size(48);
        assert_eq!(medium.inner_margin, 12);
        assert_eq!(medium.center, 24);
        assert_eq!(medium.hour_hand_width, 1);
        assert_eq!(medium.minute_hand_width, 1);

        let large = IconGeometry::for_size(128);
        assert_eq!(large.inner_margin, 32);
        assert_eq!(large.center, 64);
        assert_eq!(large.hand_length, 32);
        assert_eq!(large.hour_hand_width, 4);
        assert_eq!(large.minute_hand_width, 2);
        assert_eq!(large.dot_radius, 4);
        assert_eq!(large.hour_hand_end(), (64, 32));
        assert_eq!(large.minute_hand_end(), (96, 64));
    }

    #[test]
    fn widths_never_drop_below_one_pixel() {
        let tiny = IconGeometry::for_size(3);
        assert_eq!(tiny.hour_hand_width, 1);
        assert_eq!(tiny.minute_hand_width, 1);
        assert_eq!(tiny.dot_radius, 1);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = create_icon(0).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn size_past_coordinate_range_is_rejected() {
        let err = create_icon(i32::MAX as u32 + 1).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn tiny_sizes_still_render() {
        for size in 1..8 {
            let canvas = create_icon(size).unwrap();
            assert_eq!(canvas.dimensions(), (size, size));
        }
    }

    #[test]
    fn icon_paths_follow_size() {
        let dir = Path::new("icons");
        let names: Vec<_> = ICON_SIZES.iter().map(|&s| icon_path(dir, s)).collect();
        assert_eq!(
            names,
            vec![
                dir.join("icon16.png"),
                dir.join("icon48.png"),
                dir.join("icon128.png"),
            ]
        );
    }
}
