//! # qrkit
//!
//! Generate QR-code images from text and read QR codes back out of images.
//!
//! Symbol encoding is delegated to the `qrcode` crate, detection and
//! decoding to `rqrr`, and image file I/O to `image`. This crate adds the
//! pixel layout (module size, border), lossy text decoding of payloads and
//! bounding boxes for found symbols.
//!
//! ## Example
//!
//! ```rust
//! use qrkit::{decode_file, encode_qr, save_image, EcLevel};
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("hello.png");
//!
//! let img = encode_qr("https://example.com", EcLevel::Q, 8, 4).unwrap();
//! save_image(&img, &path).unwrap();
//!
//! let symbols = decode_file(&path).unwrap();
//! assert_eq!(symbols[0].data, "https://example.com");
//! ```

pub mod decode;
pub mod encode;
pub mod error;

use std::path::Path;

use image::GrayImage;

pub use decode::{decode_qr, DecodedSymbol, Rect, QR_SYMBOL_TYPE};
pub use encode::{encode_qr, encode_qr_bytes, EcLevel};
pub use error::QrError;

/// Result type for qrkit operations
pub type Result<T> = std::result::Result<T, QrError>;

/// Open an image file as grayscale. The format is detected from its content.
pub fn open_image(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| QrError::ImageOpen {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| QrError::ImageOpen {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(img.to_luma8())
}

/// Save an image; the format comes from the file extension.
pub fn save_image(img: &GrayImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save(path).map_err(|source| QrError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Open an image file and decode every QR symbol in it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<DecodedSymbol>> {
    Ok(decode_qr(&open_image(path)?))
}
