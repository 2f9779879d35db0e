//! BMP encoder: uncompressed 4-bit palettized, top-down.

use crate::bmp::{FILE_BYTES, INFO_HEADER_BYTES, PIXEL_DATA_OFFSET};
use crate::error::PmtError;
use crate::palette::BmpPalette;
use crate::pmt::{HEIGHT, PACKED_IMAGE_BYTES, PACKED_ROW_BYTES, PALETTE_ENTRIES, PLANES, WIDTH};
use alloc::vec::Vec;
use enough::Stop;

/// Header fields that vary between BMP files; the rest are fixed.
///
/// Serialized field by field in little-endian order, never by memory layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub width: i32,
    /// Negative for top-down row order.
    pub height: i32,
    pub bits_per_pixel: u16,
    pub colors: u32,
}

/// The header every converted PMT picture gets.
pub const PMT_BMP_HEADER: BmpHeader = BmpHeader {
    file_size: FILE_BYTES as u32,
    pixel_offset: PIXEL_DATA_OFFSET as u32,
    width: WIDTH as i32,
    height: -(HEIGHT as i32),
    bits_per_pixel: PLANES as u16,
    colors: PALETTE_ENTRIES as u32,
};

impl BmpHeader {
    /// Append the 14-byte file header and 40-byte info header.
    pub fn write(&self, out: &mut Vec<u8>) {
        // File header (14 bytes)
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());

        // DIB header (BITMAPINFOHEADER, 40 bytes)
        out.extend_from_slice(&(INFO_HEADER_BYTES as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // compression
        out.extend_from_slice(&0u32.to_le_bytes()); // image size, 0 is valid uncompressed
        out.extend_from_slice(&0u32.to_le_bytes()); // h resolution
        out.extend_from_slice(&0u32.to_le_bytes()); // v resolution
        out.extend_from_slice(&self.colors.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    }
}

/// Encode a packed 4bpp PMT picture to BMP.
///
/// Only the first `PACKED_IMAGE_BYTES` of `pixels` are written.
pub(crate) fn encode_bmp(
    pixels: &[u8],
    palette: &BmpPalette,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PmtError> {
    if pixels.len() < PACKED_IMAGE_BYTES {
        return Err(PmtError::BufferTooSmall {
            needed: PACKED_IMAGE_BYTES,
            actual: pixels.len(),
        });
    }

    stop.check()?;

    let mut out = Vec::with_capacity(FILE_BYTES);
    PMT_BMP_HEADER.write(&mut out);
    out.extend_from_slice(palette.as_bytes());
    debug_assert_eq!(out.len(), PIXEL_DATA_OFFSET);

    // 420-byte rows are already 4-byte aligned, so no row padding.
    for (row_idx, row) in pixels[..PACKED_IMAGE_BYTES]
        .chunks_exact(PACKED_ROW_BYTES)
        .enumerate()
    {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}

const _: () = assert!(PACKED_ROW_BYTES % 4 == 0);
