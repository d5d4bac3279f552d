use std::fmt;

const RED_LUMA_WEIGHT: f64 = 0.2126;
const GREEN_LUMA_WEIGHT: f64 = 0.7152;
const BLUE_LUMA_WEIGHT: f64 = 0.0722;

/// An opaque sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl PixelColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    /// Lowercase `#rrggbb` form of the color.
    pub fn hex(self) -> String {
        crate::rgb_to_hex(self.rgb())
    }

    /// Perceptual brightness with BT.709 weights, in the 0..=255 range.
    pub fn luminance(self) -> f64 {
        RED_LUMA_WEIGHT * self.red as f64 + GREEN_LUMA_WEIGHT * self.green as f64 + BLUE_LUMA_WEIGHT * self.blue as f64
    }
}

impl From<(u8, u8, u8)> for PixelColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<image::Rgb<u8>> for PixelColor {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self::new(red, green, blue)
    }
}

impl From<PixelColor> for image::Rgb<u8> {
    fn from(color: PixelColor) -> Self {
        image::Rgb([color.red, color.green, color.blue])
    }
}

// formats like a tuple so report lines read `(18, 52, 86)`
impl fmt::Display for PixelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_of_extremes() {
        assert_eq!(PixelColor::new(0, 0, 0).luminance(), 0.0);
        assert!((PixelColor::new(255, 255, 255).luminance() - 255.0).abs() < 0.01);
    }

    #[test]
    fn green_dominates_luminance() {
        let green = PixelColor::new(0, 255, 0).luminance();
        let red = PixelColor::new(255, 0, 0).luminance();
        let blue = PixelColor::new(0, 0, 255).luminance();

        assert!(green > red && red > blue);
        assert!((red - 54.213).abs() < 0.01);
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(PixelColor::new(18, 52, 86).to_string(), "(18, 52, 86)");
    }

    #[test]
    fn converts_to_and_from_image_pixels() {
        let color = PixelColor::new(1, 2, 3);
        let pixel: image::Rgb<u8> = color.into();

        assert_eq!(pixel, image::Rgb([1, 2, 3]));
        assert_eq!(PixelColor::from(pixel), color);
    }
}
