use crate::{error::Result, Candidate, Swatch};
use std::io::Write;

pub const DEFAULT_PALETTE_LIMIT: usize = 12;
pub const DEFAULT_CANDIDATE_LIMIT: usize = 8;

/// Writes the plain-text palette report.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    palette_limit: usize,
    candidate_limit: usize,
}

impl Reporter {
    pub fn new(palette_limit: usize, candidate_limit: usize) -> Self {
        Self {
            palette_limit,
            candidate_limit,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, url: &str, palette: &[Swatch], candidates: &[Candidate]) -> Result<()> {
        writeln!(out, "Source image: {url}")?;
        writeln!(out, "Top palette colors (count, hex, rgb):")?;
        for swatch in palette.iter().take(self.palette_limit) {
            writeln!(out, "{}", palette_line(*swatch))?;
        }

        writeln!(out)?;
        writeln!(out, "Candidate brand colors (non-white/black):")?;
        for candidate in candidates.iter().take(self.candidate_limit) {
            writeln!(out, "{}", candidate_line(*candidate))?;
        }

        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_LIMIT, DEFAULT_CANDIDATE_LIMIT)
    }
}

fn palette_line(swatch: Swatch) -> String {
    let color = swatch.color();
    format!("{:6} {} {}", swatch.population(), color.hex(), color)
}

fn candidate_line(candidate: Candidate) -> String {
    let color = candidate.color();
    format!(
        "{:6} {} lum={:.1} rgb={}",
        candidate.population(),
        color.hex(),
        candidate.luminance(),
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(reporter: Reporter, palette: &[Swatch], candidates: &[Candidate]) -> String {
        let mut out = Vec::new();
        reporter
            .write(&mut out, "https://example.com/logo.png", palette, candidates)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_both_sections() {
        let navy = Swatch::new((18, 52, 86), 1200);
        let white = Swatch::new((255, 255, 255), 34);
        let candidate = Candidate::new(navy, navy.luminance());

        let report = render(Reporter::default(), &[navy, white], &[candidate]);

        assert_eq!(
            report,
            "Source image: https://example.com/logo.png\n\
             Top palette colors (count, hex, rgb):\n  \
             1200 #123456 (18, 52, 86)\n    \
             34 #ffffff (255, 255, 255)\n\
             \n\
             Candidate brand colors (non-white/black):\n  \
             1200 #123456 lum=47.2 rgb=(18, 52, 86)\n"
        );
    }

    #[test]
    fn empty_palette_prints_headers_only() {
        let report = render(Reporter::default(), &[], &[]);

        assert_eq!(
            report,
            "Source image: https://example.com/logo.png\n\
             Top palette colors (count, hex, rgb):\n\
             \n\
             Candidate brand colors (non-white/black):\n"
        );
    }

    #[test]
    fn limits_entries_per_section() {
        let palette = (0..20u8).map(|i| Swatch::new((i, 100, 100), 100 - i as u32)).collect::<Vec<_>>();
        let candidates = palette
            .iter()
            .map(|swatch| Candidate::new(*swatch, swatch.luminance()))
            .collect::<Vec<_>>();

        let report = render(Reporter::new(3, 2), &palette, &candidates);

        assert_eq!(report.lines().count(), 2 + 3 + 2 + 2);
    }

    #[test]
    fn large_counts_widen_the_column() {
        assert_eq!(palette_line(Swatch::new((0, 0, 0), 1_234_567)), "1234567 #000000 (0, 0, 0)");
    }
}
