use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("color count must be between 1 and {max}, got {0}", max = crate::color_cut_quantizer::MAX_QUANTIZE_COLORS)]
    InvalidColorCount(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
