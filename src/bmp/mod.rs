//! 4-bit palettized BMP output (internal).
//!
//! Use [`crate::EncodeRequest`] or [`crate::encode_bmp`].

mod encode;

pub use encode::{BmpHeader, PMT_BMP_HEADER};

use crate::error::PmtError;
use crate::palette::BmpPalette;
use alloc::vec::Vec;
use enough::Stop;

/// BITMAPFILEHEADER size.
pub const FILE_HEADER_BYTES: usize = 14;

/// BITMAPINFOHEADER size.
pub const INFO_HEADER_BYTES: usize = 40;

/// 16 entries of B, G, R, 0.
pub const COLOR_TABLE_BYTES: usize = 64;

/// Offset of the pixel array from the start of the file.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_BYTES + INFO_HEADER_BYTES + COLOR_TABLE_BYTES;

/// Total size of a converted file.
pub const FILE_BYTES: usize = PIXEL_DATA_OFFSET + crate::pmt::PACKED_IMAGE_BYTES;

/// Encode packed PMT pixels and palette to BMP.
pub(crate) fn encode(
    pixels: &[u8],
    palette: &BmpPalette,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PmtError> {
    encode::encode_bmp(pixels, palette, stop)
}
