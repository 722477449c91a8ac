use crate::config::Settings;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::{
    fs::{create_dir_all, File},
    path::Path,
};

/// Everything needed to draw one icon. Immutable per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

/// Draw the bullseye raster for one spec: solid background, two concentric
/// unfilled rings and a filled center dot, all sized proportionally to the
/// pixel size.
///
/// Insets and stroke widths use integer division so the proportions match at
/// every size; strokes are floored at 2px (outer) and 1px (inner) so they
/// stay visible at 16px. Edges are hard (no anti-aliasing), which keeps the
/// output deterministic pixel for pixel. Sizes below ~8px are accepted but
/// the shapes degenerate or vanish.
pub fn render(spec: &IconSpec) -> RgbImage {
    let size = spec.size;
    let mut img = RgbImage::from_pixel(size, size, spec.background);

    // Outer ring, inset by size/8 on each side
    draw_ring(&mut img, size / 8, (size / 16).max(2), spec.foreground);

    // Inner ring
    draw_ring(&mut img, size / 4, (size / 24).max(1), spec.foreground);

    // Center dot
    draw_dot(&mut img, size / 8, spec.foreground);

    img
}

/// Paint an unfilled circle inscribed in the image inset by `inset` pixels on
/// all sides. The stroke grows inward from the outline, like a drawn border.
fn draw_ring(img: &mut RgbImage, inset: u32, stroke: u32, color: Rgb<u8>) {
    let size = img.width();
    let center = size as f32 / 2.0;
    let radius = center - inset as f32;
    let hole = radius - stroke as f32;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= radius && distance > hole {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Paint a filled circle of `radius` pixels centered in the image.
fn draw_dot(img: &mut RgbImage, radius: u32, color: Rgb<u8>) {
    let size = img.width();
    let center = size as f32 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;

            if (dx * dx + dy * dy).sqrt() <= radius as f32 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Render the icon and encode it as PNG at `path`, overwriting any existing
/// file. The parent directory must already exist; the driver takes care of
/// that.
pub fn generate(spec: &IconSpec, path: &Path) -> Result<()> {
    let img = render(spec);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    DynamicImage::ImageRgb8(img)
        .write_to(&mut file, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    Ok(())
}

/// Generate one `icon{size}.png` per configured size, in the given order.
/// The first failure aborts the whole batch; reruns are safe since every
/// file is overwritten from scratch.
pub fn generate_icons(settings: &Settings) -> Result<()> {
    create_dir_all(&settings.output).with_context(|| {
        format!(
            "Can't create output directory {}",
            settings.output.display()
        )
    })?;

    println!("Generating extension icons...");

    for &size in &settings.sizes {
        let spec = IconSpec {
            size,
            background: settings.background,
            foreground: settings.foreground,
        };
        let filename = format!("icon{size}.png");
        generate(&spec, &settings.output.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    println!(
        "Generated {} icon(s) in {}",
        settings.sizes.len(),
        settings.output.display()
    );

    Ok(())
}
