//! PMT handheld-scanner format decoder (internal).
//!
//! A PMT file holds six RLE-compressed groups, each preceded by a
//! little-endian `u16` length. Every group decodes to 148 pixel rows. A row is
//! four consecutive 105-byte blocks, one per VGA plane, each holding one bit
//! per pixel for 840 pixels, most significant bit first. The groups are
//! followed by a 64-byte footer whose last 48 bytes are a 16-entry palette of
//! 6-bit R/G/B triples.
//!
//! Use [`crate::DecodeRequest`] or [`crate::decode_pmt`].

pub(crate) mod decode;
pub(crate) mod planar;
pub(crate) mod rle;

use crate::decode::PmtImage;
use crate::error::PmtError;
use enough::Stop;

/// Bytes in one plane of one row: 1 bit per pixel.
pub const PLANE_ROW_BYTES: usize = 105;

/// Number of VGA planes, which is also the bit depth.
pub const PLANES: usize = 4;

/// Picture width in pixels.
pub const WIDTH: usize = PLANE_ROW_BYTES * 8;

/// One decoded row across all planes.
pub const DECODED_ROW_BYTES: usize = PLANE_ROW_BYTES * PLANES;

/// One packed 4bpp output row.
pub const PACKED_ROW_BYTES: usize = WIDTH / 2;

pub const ROWS_PER_GROUP: usize = 148;

pub const GROUPS: usize = 6;

/// Picture height in pixels.
pub const HEIGHT: usize = ROWS_PER_GROUP * GROUPS;

/// Exact decompressed size of one group.
pub const DECODED_GROUP_BYTES: usize = DECODED_ROW_BYTES * ROWS_PER_GROUP;

/// Largest raw group the decoder will accept.
pub const MAX_RAW_GROUP_BYTES: usize = DECODED_GROUP_BYTES;

pub const PACKED_GROUP_BYTES: usize = PACKED_ROW_BYTES * ROWS_PER_GROUP;

/// Packed 4bpp pixel buffer for the whole picture.
pub const PACKED_IMAGE_BYTES: usize = PACKED_GROUP_BYTES * GROUPS;

/// Footer bytes skipped before the palette.
pub const FOOTER_GAP_BYTES: usize = 16;

pub const PALETTE_ENTRIES: usize = 16;

/// Raw palette: 16 entries of 6-bit R, G, B.
pub const PALETTE_BYTES: usize = PALETTE_ENTRIES * 3;

/// Controls how strictly group data is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Reject a group as soon as its output is full and input remains,
    /// even if the remaining commands are zero-length.
    Strict,

    /// Default behavior. Zero-length commands after the output is full are
    /// accepted; any command that would write more is a bounds violation.
    #[default]
    Standard,
}

/// Decode a complete PMT stream (called from `DecodeRequest`).
pub(crate) fn decode(
    data: &[u8],
    strictness: Strictness,
    stop: &dyn Stop,
) -> Result<PmtImage, PmtError> {
    let (pixels, palette) = decode::decode_pmt_stream(data, strictness, stop)?;
    Ok(PmtImage::new(pixels, palette))
}
