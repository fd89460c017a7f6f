//! Rasterize spectral images into 8-bit strips.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use palette::Srgb;

use crate::spectrum::SpectralImage;

/// Quantize one pixel; values outside `[0, 1]` are clamped.
pub fn to_rgb8(pixel: [f64; 3]) -> [u8; 3] {
    let [r, g, b] = pixel.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) });
    let rgb: Srgb<u8> = Srgb::new(r, g, b).into_format();
    [rgb.red, rgb.green, rgb.blue]
}

/// One strip: every sample becomes a one-pixel-wide column `height` pixels tall.
pub fn to_rgb_image(image: &SpectralImage, height: u32) -> RgbImage {
    stack(std::slice::from_ref(image), height)
}

/// Strips stacked top to bottom. The output is as wide as the widest strip;
/// narrower strips are padded with black.
pub fn stack(images: &[SpectralImage], height: u32) -> RgbImage {
    let width = images.iter().map(|img| img.width()).max().unwrap_or(0) as u32;
    let mut out = RgbImage::new(width, height * images.len() as u32);

    for (row, img) in images.iter().enumerate() {
        let y0 = row as u32 * height;
        for (x, &pixel) in img.pixels().iter().enumerate() {
            let color = Rgb(to_rgb8(pixel));
            for y in y0..y0 + height {
                out.put_pixel(x as u32, y, color);
            }
        }
    }
    out
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::{convert, ColorScheme};

    #[test]
    fn quantization_clamps() {
        assert_eq!(to_rgb8([0.0, 1.0, 2.0]), [0, 255, 255]);
        assert_eq!(to_rgb8([-1.0, f64::NAN, 0.5]), [0, 0, 128]);
    }

    #[test]
    fn strips_stack_vertically() {
        let a = convert(&[400.0, 500.0, 600.0], &[1.0; 3], ColorScheme::Colorful, 1.0).unwrap();
        let b = convert(&[400.0, 500.0], &[1.0; 2], ColorScheme::Good, 0.6).unwrap();
        let img = stack(&[a, b], 4);
        assert_eq!(img.dimensions(), (3, 8));
        // 500 nm in the colorful scheme is between cyan and green.
        assert_eq!(img.get_pixel(1, 0).0[0], 0);
        assert_eq!(img.get_pixel(1, 3), img.get_pixel(1, 0));
        // Padding beyond the second strip's width.
        assert_eq!(img.get_pixel(2, 5).0, [0, 0, 0]);
    }
}
