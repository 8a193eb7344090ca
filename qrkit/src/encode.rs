//! QR generation: payload to grayscale image.
//!
//! Symbol encoding comes from the `qrcode` crate; this module only picks the
//! error correction level and paints the module grid into pixels.

use std::fmt;
use std::str::FromStr;

use image::{GrayImage, Luma};
use qrcode::types::{Color, EcLevel as QrEcLevel};
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QrError;
use crate::Result;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Largest image, in pixels, that will be allocated (256 MiB of grayscale).
const MAX_PIXELS: u64 = 1 << 28;

/// Error correction level, by the share of the symbol that can be recovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    /// ~7%
    L,
    /// ~15%
    #[default]
    M,
    /// ~25%
    Q,
    /// ~30%
    H,
}

impl EcLevel {
    /// Approximate percentage of codewords that can be restored.
    pub fn recovery_percent(self) -> u8 {
        match self {
            EcLevel::L => 7,
            EcLevel::M => 15,
            EcLevel::Q => 25,
            EcLevel::H => 30,
        }
    }
}

impl From<EcLevel> for QrEcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => QrEcLevel::L,
            EcLevel::M => QrEcLevel::M,
            EcLevel::Q => QrEcLevel::Q,
            EcLevel::H => QrEcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            _ => Err(QrError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Encode a text payload as a QR image.
///
/// The smallest symbol version that fits the payload is chosen. Each module
/// is `box_size` pixels square and `border` light modules surround the
/// symbol. Dark modules are black on a white background.
///
/// # Example
///
/// ```rust
/// use qrkit::{encode_qr, EcLevel};
///
/// let img = encode_qr("hello", EcLevel::M, 10, 4).unwrap();
/// // version 1 is 21 modules wide, plus 4 border modules on each side
/// assert_eq!(img.dimensions(), (290, 290));
/// ```
pub fn encode_qr(payload: &str, level: EcLevel, box_size: u32, border: u32) -> Result<GrayImage> {
    encode_qr_bytes(payload.as_bytes(), level, box_size, border)
}

/// Encode raw bytes as a QR image. See [`encode_qr`].
pub fn encode_qr_bytes(
    payload: &[u8],
    level: EcLevel,
    box_size: u32,
    border: u32,
) -> Result<GrayImage> {
    if box_size == 0 {
        return Err(QrError::InvalidBoxSize);
    }

    let code = QrCode::with_error_correction_level(payload, level.into())
        .map_err(|e| QrError::Encoding(e.to_string()))?;

    let modules = code.width() as u32;
    let side = border
        .checked_mul(2)
        .and_then(|b| b.checked_add(modules))
        .and_then(|m| m.checked_mul(box_size))
        .filter(|&side| u64::from(side) * u64::from(side) <= MAX_PIXELS)
        .ok_or(QrError::ImageTooLarge {
            modules,
            border,
            box_size,
        })?;
    debug!(bytes = payload.len(), modules, side, %level, "encoded QR symbol");

    let mut img = GrayImage::from_pixel(side, side, LIGHT);
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let col = i as u32 % modules;
        let row = i as u32 / modules;
        let x0 = (col + border) * box_size;
        let y0 = (row + border) * box_size;
        for y in y0..y0 + box_size {
            for x in x0..x0 + box_size {
                img.put_pixel(x, y, DARK);
            }
        }
    }

    Ok(img)
}
