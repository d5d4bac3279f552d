use crate::{error::Result, PixelColor};
use image::{imageops::FilterType, DynamicImage, RgbImage, RgbaImage};

pub const DEFAULT_RESIZE_WIDTH: u32 = 192;
pub const DEFAULT_RESIZE_HEIGHT: u32 = 192;
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 20;

/// Resampling filter used when downscaling. Fixed so results are repeatable.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Decode an encoded image, guessing its format from the content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(bytes)?;
    tracing::debug!(width = image.width(), height = image.height(), color = ?image.color(), "Decoded image");

    Ok(image)
}

/// Convert to RGBA and resize to exactly `width` × `height`, ignoring the aspect ratio.
///
/// Sources without an alpha channel come out fully opaque.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let rgba = image.to_rgba8();

    if rgba.dimensions() == (width, height) {
        return rgba;
    }

    image::imageops::resize(&rgba, width, height, RESIZE_FILTER)
}

/// Collect the pixels whose alpha is strictly above `alpha_threshold`, in row-major order, dropping alpha.
pub fn opaque_pixels(image: &RgbaImage, alpha_threshold: u8) -> Vec<PixelColor> {
    image
        .pixels()
        .filter(|pixel| pixel[3] > alpha_threshold)
        .map(|pixel| PixelColor::new(pixel[0], pixel[1], pixel[2]))
        .collect()
}

/// Lay the pixels out as a single row image, one pixel per color.
pub fn pixel_strip(pixels: &[PixelColor]) -> RgbImage {
    RgbImage::from_fn(pixels.len() as u32, 1, |x, _| pixels[x as usize].into())
}
