//! QR reading: find and decode every symbol in an image.
//!
//! Detection and decoding come from the `rqrr` crate.

use image::GrayImage;
use rqrr::{Point, PreparedImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Symbol type reported for every decoded symbol.
pub const QR_SYMBOL_TYPE: &str = "QRCODE";

/// Axis-aligned bounding box of a symbol, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Smallest rectangle containing all corner points.
    fn from_corners(corners: &[Point]) -> Self {
        let min_x = corners.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = corners.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = corners.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = corners.iter().map(|p| p.y).max().unwrap_or(0);

        Rect {
            left: min_x,
            top: min_y,
            width: max_x.abs_diff(min_x),
            height: max_y.abs_diff(min_y),
        }
    }
}

/// One decoded QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSymbol {
    /// Payload as text; invalid UTF-8 sequences become U+FFFD
    pub data: String,
    /// Always [`QR_SYMBOL_TYPE`]
    #[serde(rename = "type")]
    pub symbol_type: String,
    /// Where the symbol sits in the image
    pub rect: Rect,
}

/// Decode every QR symbol found in an image.
///
/// Finding nothing is not an error: the result is simply empty. Symbols that
/// are detected but cannot be decoded are skipped.
///
/// # Example
///
/// ```rust
/// use qrkit::{decode_qr, encode_qr, EcLevel};
///
/// let img = encode_qr("hello", EcLevel::M, 8, 4).unwrap();
/// let symbols = decode_qr(&img);
///
/// assert_eq!(symbols.len(), 1);
/// assert_eq!(symbols[0].data, "hello");
/// assert_eq!(symbols[0].symbol_type, "QRCODE");
/// ```
pub fn decode_qr(image: &GrayImage) -> Vec<DecodedSymbol> {
    let (width, height) = image.dimensions();
    let mut prepared =
        PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            image.get_pixel(x as u32, y as u32).0[0]
        });

    let grids = prepared.detect_grids();
    debug!(candidates = grids.len(), "detected QR grids");

    grids
        .into_iter()
        .filter_map(|grid| {
            let mut payload = Vec::new();
            match grid.decode_to(&mut payload) {
                Ok(_) => Some(DecodedSymbol {
                    data: String::from_utf8_lossy(&payload).into_owned(),
                    symbol_type: QR_SYMBOL_TYPE.to_string(),
                    rect: Rect::from_corners(&grid.bounds),
                }),
                Err(err) => {
                    debug!(error = %err, "skipping undecodable QR grid");
                    None
                }
            }
        })
        .collect()
}
