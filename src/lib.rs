//! # zenpmt
//!
//! Decoder for the PMT format written by some old handheld scanners, with
//! conversion to a 4-bit palettized BMP.
//!
//! ## Format
//!
//! A PMT file is six run-length-encoded groups, each prefixed by a
//! little-endian `u16` length, followed by a 64-byte footer. Each group decodes
//! to exactly 62160 bytes covering 148 rows of 840 pixels, stored as four
//! 1-bit VGA planes per row. The last 48 footer bytes are a 16-entry palette
//! of 6-bit R/G/B values. The picture is always 840×888 at 4 bits per pixel.
//!
//! Decoding is all-or-nothing. Truncated input, oversized groups, RLE
//! commands that step outside their buffers, and groups that decode to the
//! wrong size are each reported as a distinct [`PmtError`] variant carrying
//! the failing group index.
//!
//! ## Non-Goals
//!
//! - Picture sizes other than 840×888
//! - Streaming decode (each group is decoded whole)
//! - Writing PMT or RLE-compressed BMP
//!
//! ## Usage
//!
//! ```no_run
//! use zenpmt::{DecodeRequest, EncodeRequest, Unstoppable};
//!
//! let data: &[u8] = &[]; // your PMT bytes
//!
//! let image = DecodeRequest::new(data).decode(Unstoppable)?;
//! println!("{}x{}, pixel (0,0) = {:?}", image.width(), image.height(), image.pixel(0, 0));
//!
//! let bmp = EncodeRequest::bmp().encode(&image, Unstoppable)?;
//! assert_eq!(&bmp[..2], b"BM");
//! # Ok::<(), zenpmt::PmtError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod palette;

pub mod bmp;
pub mod pmt;

#[cfg(feature = "std")]
pub mod fs;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeRequest, PmtImage};
pub use encode::{EncodeRequest, OutputFormat};
pub use enough::{Stop, Unstoppable};
pub use error::{BoundsViolation, PmtError, RleError};
pub use palette::{BmpPalette, PmtPalette};
pub use pmt::Strictness;

/// Decode a PMT stream with default settings.
pub fn decode_pmt(data: &[u8], stop: impl Stop) -> Result<PmtImage, PmtError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode a decoded picture as a 4-bit BMP.
pub fn encode_bmp(image: &PmtImage, stop: impl Stop) -> Result<Vec<u8>, PmtError> {
    EncodeRequest::bmp().encode(image, stop)
}

/// Convert a PMT stream straight to BMP bytes.
pub fn pmt_to_bmp(data: &[u8], stop: impl Stop) -> Result<Vec<u8>, PmtError> {
    let image = pmt::decode(data, Strictness::default(), &stop)?;
    bmp::encode(image.pixels(), image.palette(), &stop)
}
