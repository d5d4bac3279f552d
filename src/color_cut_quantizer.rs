use crate::{Error, PixelColor, Swatch};
use image::RgbImage;
use std::collections::{BinaryHeap, HashMap};

/// Largest palette the quantizer can be asked for.
pub const MAX_QUANTIZE_COLORS: usize = 256;
/// Cap on the number of distinct colors read back from a quantized image.
pub const MAX_COUNTED_COLORS: usize = 100_000;

/// Median-cut quantizer over a strip of opaque pixels.
pub struct ColorCutQuantizer<'a> {
    strip: &'a RgbImage,
    max_colors: usize,
}

struct Vbox<'a> {
    colors: &'a mut [(PixelColor, u32)],
    population: u32,
    red_range: (u8, u8),
    green_range: (u8, u8),
    blue_range: (u8, u8),
}

enum Component {
    Red,
    Green,
    Blue,
}

impl<'a> ColorCutQuantizer<'a> {
    pub fn new(strip: &'a RgbImage, max_colors: usize) -> Result<Self, Error> {
        if !(1..=MAX_QUANTIZE_COLORS).contains(&max_colors) {
            return Err(Error::InvalidColorCount(max_colors));
        }

        Ok(Self { strip, max_colors })
    }

    /// Quantize the strip and count how many pixels ended up on each palette color.
    pub fn get_quantized_colors(&self) -> Vec<Swatch> {
        let quantized = self.quantize();

        // the palette is bounded by max_colors, far below the counting cap
        color_counts(&quantized, MAX_COUNTED_COLORS).unwrap_or_default()
    }

    /// Return a copy of the strip where every pixel is replaced with its palette color.
    pub fn quantize(&self) -> RgbImage {
        let palette_map = self.build_palette_map();
        let mut quantized = self.strip.clone();

        for pixel in quantized.pixels_mut() {
            let color = PixelColor::from(*pixel);
            if let Some(mapped) = palette_map.get(&color) {
                *pixel = (*mapped).into();
            }
        }

        quantized
    }

    fn build_palette_map(&self) -> HashMap<PixelColor, PixelColor> {
        // begin by generating a histogram of the pixel values
        let mut hist = HashMap::new();
        for pixel in self.strip.pixels() {
            *hist.entry(PixelColor::from(*pixel)).or_insert(0u32) += 1;
        }

        let mut colors = hist.into_iter().collect::<Vec<_>>();

        // order the colors by combining their channels into a single integer where the red channel is the most
        // significant and the blue the least, so splitting is independent of hash order
        colors.sort_by_key(|(color, _)| {
            let (r, g, b) = color.rgb();
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        });

        if colors.len() <= self.max_colors {
            // there are less colors than requested, every color represents itself
            return colors.into_iter().map(|(color, _)| (color, color)).collect();
        }

        // the queue always pops the largest Vbox by volume first
        let mut pq = BinaryHeap::with_capacity(self.max_colors);
        pq.push(Vbox::new(&mut colors));

        self.split_boxes(&mut pq);

        let mut palette_map = HashMap::new();
        for vbox in pq.iter() {
            let average = vbox.get_average_color();
            for (color, _) in vbox.colors.iter() {
                palette_map.insert(*color, average);
            }
        }

        palette_map
    }

    fn split_boxes(&self, pq: &mut BinaryHeap<Vbox<'_>>) {
        while pq.len() < self.max_colors {
            let Some(vbox) = pq.pop() else {
                return;
            };

            if !vbox.can_split() {
                // the largest box holds a single color, so none of the others can be split either
                pq.push(vbox);
                return;
            }

            let (left, right) = vbox.split_box();
            pq.push(left);
            pq.push(right);
        }
    }
}

impl<'a> Vbox<'a> {
    fn new(colors: &'a mut [(PixelColor, u32)]) -> Self {
        // compute the boundaries of the Vbox to tightly fit around the colors within it

        let mut population = 0;
        // min, max
        let (mut min_red, mut max_red) = (u8::MAX, 0);
        let (mut min_green, mut max_green) = (u8::MAX, 0);
        let (mut min_blue, mut max_blue) = (u8::MAX, 0);

        for (color, count) in colors.iter() {
            let (r, g, b) = color.rgb();
            population += count;

            min_red = min_red.min(r);
            max_red = max_red.max(r);
            min_green = min_green.min(g);
            max_green = max_green.max(g);
            min_blue = min_blue.min(b);
            max_blue = max_blue.max(b);
        }

        Self {
            colors,
            population,
            red_range: (min_red, max_red),
            green_range: (min_green, max_green),
            blue_range: (min_blue, max_blue),
        }
    }

    fn volume(&self) -> u32 {
        (self.red_range.1 as u32 - self.red_range.0 as u32 + 1)
            * (self.green_range.1 as u32 - self.green_range.0 as u32 + 1)
            * (self.blue_range.1 as u32 - self.blue_range.0 as u32 + 1)
    }

    fn split_box(mut self) -> (Vbox<'a>, Vbox<'a>) {
        // split the Vbox at the population median of its largest color dimension

        debug_assert!(self.can_split());

        // sort the colors by the longest dimension so the median can be searched for
        self.sort_colors_by_longest_dimension();

        let split_point = self.find_split_point();
        let (old, new) = self.colors.split_at_mut(split_point);

        (Vbox::new(old), Vbox::new(new))
    }

    fn sort_colors_by_longest_dimension(&mut self) {
        let longest_dimension = self.get_longest_dimension();

        // stable sort keeps the packed order for colors that tie on the longest dimension
        self.colors.sort_by_key(|(color, _)| match longest_dimension {
            Component::Red => color.red(),
            Component::Green => color.green(),
            Component::Blue => color.blue(),
        });
    }

    fn find_split_point(&self) -> usize {
        let midpoint = self.population / 2;
        let mut pop = 0;

        // keep a total sum of all the color populations and split right after the first color that crosses the
        // midpoint. the last color always goes to the new box so both halves are non-empty
        for (i, (_, count)) in self.colors.iter().enumerate() {
            pop += count;

            if pop >= midpoint {
                return (i + 1).min(self.colors.len() - 1);
            }
        }

        self.colors.len() - 1
    }

    fn can_split(&self) -> bool {
        self.colors.len() > 1
    }

    fn get_longest_dimension(&self) -> Component {
        let red_length = self.red_range.1 - self.red_range.0;
        let green_length = self.green_range.1 - self.green_range.0;
        let blue_length = self.blue_range.1 - self.blue_range.0;

        if red_length >= green_length && red_length >= blue_length {
            Component::Red
        } else if green_length >= red_length && green_length >= blue_length {
            Component::Green
        } else {
            Component::Blue
        }
    }

    fn get_average_color(&self) -> PixelColor {
        // weighted sums of each color channel based on the color populations
        let (pop, red_sum, green_sum, blue_sum) = self.colors.iter().fold(
            (0u64, 0u64, 0u64, 0u64),
            |(pop, red_sum, green_sum, blue_sum), (color, count)| {
                let (r, g, b) = color.rgb();
                let count = *count as u64;

                (
                    pop + count,
                    red_sum + r as u64 * count,
                    green_sum + g as u64 * count,
                    blue_sum + b as u64 * count,
                )
            },
        );

        if pop == 0 {
            return PixelColor::new(0, 0, 0);
        }

        // rounded means of the channel weighted sums
        let mean = |sum: u64| ((sum + pop / 2) / pop) as u8;

        PixelColor::new(mean(red_sum), mean(green_sum), mean(blue_sum))
    }
}

impl Eq for Vbox<'_> {}
impl PartialEq for Vbox<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.volume() == other.volume()
    }
}

impl Ord for Vbox<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.volume().cmp(&other.volume())
    }
}

impl PartialOrd for Vbox<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Count the pixels of each distinct color in the image.
///
/// Returns `None` when the image holds more than `max_colors` distinct colors. The order of the returned swatches
/// is unspecified.
pub fn color_counts(image: &RgbImage, max_colors: usize) -> Option<Vec<Swatch>> {
    let mut counts: HashMap<PixelColor, u32> = HashMap::new();

    for pixel in image.pixels() {
        *counts.entry(PixelColor::from(*pixel)).or_insert(0) += 1;

        if counts.len() > max_colors {
            return None;
        }
    }

    Some(
        counts
            .into_iter()
            .map(|(color, count)| Swatch::new(color, count))
            .collect(),
    )
}
