use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a membership card from being rendered.
#[derive(Error, Debug)]
pub enum CardError {
    /// The logo image could not be read or decoded.
    #[error("Failed to load card logo from {path}: {source}")]
    Logo {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A font file could not be read from disk.
    #[error("Failed to read card font from {path}: {source}")]
    FontFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A font file was read but is not a usable TrueType/OpenType font.
    #[error("Invalid card font {path}")]
    InvalidFont { path: PathBuf },

    /// The rendered card could not be encoded as PNG.
    #[error("Failed to encode card image: {0}")]
    Encode(#[source] image::ImageError),
}
