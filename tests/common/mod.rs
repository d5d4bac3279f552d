//! Shared helpers for building test images.

#![allow(dead_code)]

use brand_palette::image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encode an RGBA image as PNG bytes.
pub fn png(image: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("PNG encoding failed");
    buf
}

/// PNG bytes of a single solid color.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    png(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// A logo-like test card at the working resolution, so no resampling blends its colors: a white background with
/// a navy band, a red block, a black outline and a transparent right edge.
pub fn logo_image() -> RgbaImage {
    RgbaImage::from_fn(192, 192, |x, y| {
        if x >= 160 {
            Rgba([0, 0, 0, 0])
        } else if x < 4 || y < 4 || y >= 188 {
            Rgba([0, 0, 0, 255])
        } else if (64..112).contains(&y) {
            Rgba([18, 52, 86, 255])
        } else if (16..48).contains(&x) && (128..176).contains(&y) {
            Rgba([200, 30, 40, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

/// A smooth gradient with a soft alpha ramp, so resizing produces many distinct colors.
pub fn gradient_image() -> RgbaImage {
    RgbaImage::from_fn(256, 64, |x, y| Rgba([x as u8, (y * 4) as u8, 255 - x as u8, (x as u8).saturating_mul(2)]))
}
