use crate::PixelColor;

/// A quantized palette color together with the number of source pixels mapped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    color: PixelColor,
    population: u32,
}

impl Swatch {
    pub fn new(color: impl Into<PixelColor>, population: u32) -> Swatch {
        Self {
            color: color.into(),
            population,
        }
    }

    pub fn color(self) -> PixelColor {
        self.color
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        self.color.rgb()
    }

    pub fn population(self) -> u32 {
        self.population
    }

    pub fn luminance(self) -> f64 {
        self.color.luminance()
    }
}

/// A swatch that passed the candidate filter, with its luminance precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    swatch: Swatch,
    luminance: f64,
}

impl Candidate {
    pub(crate) fn new(swatch: Swatch, luminance: f64) -> Self {
        Self { swatch, luminance }
    }

    pub fn swatch(self) -> Swatch {
        self.swatch
    }

    pub fn color(self) -> PixelColor {
        self.swatch.color()
    }

    pub fn population(self) -> u32 {
        self.swatch.population()
    }

    pub fn luminance(self) -> f64 {
        self.luminance
    }
}
