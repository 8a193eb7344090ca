//! Error types for qrkit

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating, reading or storing QR images
#[derive(Error, Debug)]
pub enum QrError {
    /// The payload does not fit any QR version at the requested level
    #[error("cannot encode payload: {0}")]
    Encoding(String),

    /// Unknown error correction level
    #[error("invalid error correction level '{0}': expected one of L, M, Q, H")]
    InvalidLevel(String),

    /// Module size must be at least one pixel
    #[error("box size must be at least 1 pixel")]
    InvalidBoxSize,

    /// Rendered image would exceed the pixel limit
    #[error("image too large: {modules} modules with border {border} at box size {box_size}")]
    ImageTooLarge {
        modules: u32,
        border: u32,
        box_size: u32,
    },

    /// Failed to open or decode an image file
    #[error("could not open image '{path}': {source}")]
    ImageOpen {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Failed to encode or write an image file
    #[error("could not save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },
}
