use crate::PixelColor;

pub const MIN_CANDIDATE_LUMINANCE: f64 = 25.0;
pub const MAX_CANDIDATE_LUMINANCE: f64 = 245.0;

/// A trait used to decide which palette colors are suggested as brand colors.
///
/// Filters only see the final quantized colors. They never remove anything from the palette itself, so the
/// population counts of the full palette are unaffected. The luminance is given alongside the color for
/// convenience.
///
/// See [`crate::Palette::candidates_with`] on how to apply a custom filter.
pub trait Filter {
    /// Return whether a given color should be suggested or not.
    fn is_allowed(&self, color: PixelColor, luminance: f64) -> bool;
}

/// The filter used by [`crate::Palette::candidates`].
///
/// This filter disallows colors too close to black or too close to white to work as a primary or accent color.
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultFilter {
    min_luminance: f64,
    max_luminance: f64,
}

impl DefaultFilter {
    pub fn new(min_luminance: f64, max_luminance: f64) -> Self {
        Self {
            min_luminance,
            max_luminance,
        }
    }

    pub fn min_luminance(&self) -> f64 {
        self.min_luminance
    }

    pub fn max_luminance(&self) -> f64 {
        self.max_luminance
    }
}

impl Default for DefaultFilter {
    fn default() -> Self {
        Self::new(MIN_CANDIDATE_LUMINANCE, MAX_CANDIDATE_LUMINANCE)
    }
}

impl Filter for DefaultFilter {
    fn is_allowed(&self, _: PixelColor, luminance: f64) -> bool {
        !is_black(luminance, self.min_luminance) && !is_white(luminance, self.max_luminance)
    }
}

fn is_black(luminance: f64, min_luminance: f64) -> bool {
    luminance < min_luminance
}

fn is_white(luminance: f64, max_luminance: f64) -> bool {
    luminance > max_luminance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(r: u8, g: u8, b: u8) -> bool {
        let color = PixelColor::new(r, g, b);
        DefaultFilter::default().is_allowed(color, color.luminance())
    }

    #[test]
    fn rejects_black_and_white() {
        assert!(!allowed(0, 0, 0));
        assert!(!allowed(255, 255, 255));
        assert!(!allowed(250, 250, 250));
        assert!(!allowed(10, 10, 10));
    }

    #[test]
    fn accepts_mid_tones() {
        assert!(allowed(18, 52, 86));
        assert!(allowed(200, 30, 40));
        assert!(allowed(128, 128, 128));
    }

    #[test]
    fn bounds_are_inclusive() {
        let filter = DefaultFilter::default();
        let color = PixelColor::new(0, 0, 0);

        assert!(filter.is_allowed(color, 25.0));
        assert!(filter.is_allowed(color, 245.0));
        assert!(!filter.is_allowed(color, 24.99));
        assert!(!filter.is_allowed(color, 245.01));
    }

    #[test]
    fn color_on_lower_bound_is_allowed() {
        // 0.2126 * 90 + 0.7152 * 8 + 0.0722 * 2 lands exactly on the lower bound
        assert_eq!(PixelColor::new(90, 8, 2).luminance(), 25.0);
        assert!(allowed(90, 8, 2));
    }
}
