// Copyright 2026 The brand-palette Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Suggest brand colors from a single image.
//!
//! The image is downscaled to a small fixed grid, near-transparent pixels are dropped, and the rest is reduced to a
//! small palette with median-cut quantization. The palette is ranked by pixel count, and the colors that are neither
//! close to black nor close to white are suggested as brand color candidates.
//!
//! ```no_run
//! use brand_palette::{HttpFetcher, Settings};
//!
//! let settings = Settings::default();
//! let fetcher = HttpFetcher::new(settings.timeout).unwrap();
//! let palette = brand_palette::run(&settings, &fetcher, &mut std::io::stdout()).unwrap();
//!
//! println!("{:?}", palette.most_prominent_color());
//! ```

mod color;
mod color_cut_quantizer;
mod error;
mod fetch;
mod filter;
mod preprocess;
mod report;
mod swatch;

pub const DEFAULT_CALCULATE_NUMBER_COLORS: usize = 12;
pub const DEFAULT_IMAGE_URL: &str = "https://lh3.googleusercontent.com/LvjLKZYLJuUL0BEr_81HM9GFcdgNiv-f-w1EvWCuz6DIz140lJNScrzUVKtD8hvFYmWOEk3Lh7miicg0UtPVgLti1aXxFZRumaV2z1aVAihErG4h9E0J2yA=s120";

pub use crate::{
    color::PixelColor,
    color_cut_quantizer::{color_counts, ColorCutQuantizer, MAX_COUNTED_COLORS, MAX_QUANTIZE_COLORS},
    error::{Error, Result},
    fetch::{Fetcher, HttpFetcher, DEFAULT_TIMEOUT},
    filter::{DefaultFilter, Filter, MAX_CANDIDATE_LUMINANCE, MIN_CANDIDATE_LUMINANCE},
    preprocess::{
        decode, opaque_pixels, pixel_strip, resize, DEFAULT_ALPHA_THRESHOLD, DEFAULT_RESIZE_HEIGHT,
        DEFAULT_RESIZE_WIDTH, RESIZE_FILTER,
    },
    report::{Reporter, DEFAULT_CANDIDATE_LIMIT, DEFAULT_PALETTE_LIMIT},
    swatch::{Candidate, Swatch},
};
pub use image;

use image::DynamicImage;
use std::{io::Write, time::Duration};

/// Every knob of a palette run. The default reproduces the fixed brand palette script exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub timeout: Duration,
    pub colors: usize,
    pub resize_width: u32,
    pub resize_height: u32,
    pub alpha_threshold: u8,
    pub min_luminance: f64,
    pub max_luminance: f64,
    pub palette_limit: usize,
    pub candidate_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_IMAGE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            colors: DEFAULT_CALCULATE_NUMBER_COLORS,
            resize_width: DEFAULT_RESIZE_WIDTH,
            resize_height: DEFAULT_RESIZE_HEIGHT,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            min_luminance: MIN_CANDIDATE_LUMINANCE,
            max_luminance: MAX_CANDIDATE_LUMINANCE,
            palette_limit: DEFAULT_PALETTE_LIMIT,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

impl Settings {
    pub fn filter(&self) -> DefaultFilter {
        DefaultFilter::new(self.min_luminance, self.max_luminance)
    }

    pub fn reporter(&self) -> Reporter {
        Reporter::new(self.palette_limit, self.candidate_limit)
    }
}

/// A quantized palette, sorted by population from the most to the least common color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
}

pub struct PaletteBuilder {
    image: DynamicImage,
    maximum_color_count: usize,
    resize_dimensions: (u32, u32),
    alpha_threshold: u8,
}

impl Palette {
    pub fn from_image(image: DynamicImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    /// Rank quantized swatches by population. Ties are broken by color so the order is repeatable.
    pub fn from_swatches(mut swatches: Vec<Swatch>) -> Palette {
        swatches.sort_by(|lhs, rhs| {
            rhs.population()
                .cmp(&lhs.population())
                .then_with(|| lhs.color().cmp(&rhs.color()))
        });

        Self { swatches }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Number of pixels the palette was built from.
    pub fn total_population(&self) -> u64 {
        self.swatches.iter().map(|swatch| swatch.population() as u64).sum()
    }

    pub fn most_prominent_color(&self) -> Option<PixelColor> {
        self.swatches.first().map(|swatch| swatch.color())
    }

    /// Brand color candidates using the default luminance bounds.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates_with(&DefaultFilter::default())
    }

    /// Swatches accepted by `filter`, in palette order.
    pub fn candidates_with(&self, filter: &dyn Filter) -> Vec<Candidate> {
        self.swatches
            .iter()
            .filter_map(|swatch| {
                let luminance = swatch.luminance();
                filter
                    .is_allowed(swatch.color(), luminance)
                    .then(|| Candidate::new(*swatch, luminance))
            })
            .collect()
    }
}

impl PaletteBuilder {
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image,
            maximum_color_count: DEFAULT_CALCULATE_NUMBER_COLORS,
            resize_dimensions: (DEFAULT_RESIZE_WIDTH, DEFAULT_RESIZE_HEIGHT),
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }

    pub fn maximum_color_count(self, maximum_color_count: usize) -> Self {
        Self {
            maximum_color_count,
            ..self
        }
    }

    pub fn resize_dimensions(self, width: u32, height: u32) -> Self {
        Self {
            resize_dimensions: (width, height),
            ..self
        }
    }

    pub fn alpha_threshold(self, alpha_threshold: u8) -> Self {
        Self {
            alpha_threshold,
            ..self
        }
    }

    pub fn generate(self) -> Result<Palette> {
        let (width, height) = self.resize_dimensions;
        let resized = resize(&self.image, width, height);

        let pixels = opaque_pixels(&resized, self.alpha_threshold);
        let strip = pixel_strip(&pixels);
        let quantizer = ColorCutQuantizer::new(&strip, self.maximum_color_count)?;

        let swatches = if pixels.is_empty() {
            tracing::debug!("No opaque pixels left, skipping quantization");
            Vec::new()
        } else {
            quantizer.get_quantized_colors()
        };

        tracing::debug!(
            opaque_pixels = pixels.len(),
            colors = swatches.len(),
            "Quantized image"
        );

        Ok(Palette::from_swatches(swatches))
    }
}

/// Decode `data` and build its palette with the default preprocessing.
pub fn dominant_palette_from_image_bytes(data: &[u8], colors: usize) -> Result<Palette> {
    let image = decode(data)?;
    Palette::from_image(image).maximum_color_count(colors).generate()
}

/// Lowercase `#rrggbb` hex form of an sRGB triple.
pub fn rgb_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Fetch the configured image, build its palette and write the report to `out`.
pub fn run<F, W>(settings: &Settings, fetcher: &F, out: &mut W) -> Result<Palette>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let data = fetcher.fetch(&settings.url)?;
    let image = decode(&data)?;

    let palette = Palette::from_image(image)
        .maximum_color_count(settings.colors)
        .resize_dimensions(settings.resize_width, settings.resize_height)
        .alpha_threshold(settings.alpha_threshold)
        .generate()?;

    let candidates = palette.candidates_with(&settings.filter());
    tracing::info!(
        url = %settings.url,
        colors = palette.swatches().len(),
        candidates = candidates.len(),
        "Built palette"
    );

    settings
        .reporter()
        .write(out, &settings.url, palette.swatches(), &candidates)?;

    Ok(palette)
}
