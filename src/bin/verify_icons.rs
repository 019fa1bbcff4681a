use anyhow::Result;
use clock_icons::icon_gen::{icon_path, DEFAULT_OUTPUT_DIR, ICON_SIZES};
use image::ColorType;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        paths = ICON_SIZES
            .iter()
            .map(|&size| icon_path(Path::new(DEFAULT_OUTPUT_DIR), size))
            .collect();
    }

    let mut failures = 0;
    for path in &paths {
        if !check_icon(path) {
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} icons failed verification", paths.len());
    }
    println!("\n✓ All {} icons look good", paths.len());
    Ok(())
}

fn check_icon(path: &Path) -> bool {
    println!("\nChecking icon: {}", path.display());

    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) => {
            println!("⚠ Failed to open: {err}");
            return false;
        }
    };
    let width = img.width();
    let height = img.height();
    let color = img.color();

    println!("  Dimensions: {}x{}", width, height);
    println!("  Color type: {:?}", color);

    let rgba_img = img.to_rgba8();
    let center = rgba_img.get_pixel(width / 2, height / 2);
    let corner = rgba_img.get_pixel(0, 0);
    println!(
        "  Center RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );
    println!(
        "  Corner RGBA: [{}, {}, {}, {}]",
        corner[0], corner[1], corner[2], corner[3]
    );

    let mut ok = true;
    if width != height {
        println!("⚠ Icon is not square");
        ok = false;
    }
    if color != ColorType::Rgba8 {
        println!("⚠ Icon has no 8-bit alpha channel");
        ok = false;
    }
    if corner[3] != 0 {
        println!("⚠ Corner is not transparent");
        ok = false;
    }
    ok
}
