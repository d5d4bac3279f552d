use anyhow::{Context, Result};
use brand_palette::{HttpFetcher, Settings};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILTER: &str = "brand_palette=warn";

/// Suggest brand colors from the dominant colors of the built-in logo image.
///
/// Takes no arguments: the image URL, palette size and filter bounds are fixed.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(LOG_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    let settings = Settings::default();

    let fetcher = HttpFetcher::new(settings.timeout).context("failed to build HTTP client")?;
    let mut stdout = std::io::stdout().lock();

    brand_palette::run(&settings, &fetcher, &mut stdout)
        .with_context(|| format!("failed to extract brand palette from {}", settings.url))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn runs_without_arguments() {
        assert!(Args::try_parse_from(["brand-palette"]).is_ok());
    }

    #[test]
    fn overrides_are_rejected() {
        assert!(Args::try_parse_from(["brand-palette", "https://example.com/logo.png"]).is_err());
        assert!(Args::try_parse_from(["brand-palette", "--colors", "3"]).is_err());
    }
}
