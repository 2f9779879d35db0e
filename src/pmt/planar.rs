//! Bit-plane to packed-nibble conversion.
//!
//! A decoded row is four 105-byte plane blocks. Pixel `i` lives in byte
//! `i / 8` of every block at bit `7 - i % 8`; plane `p` supplies bit `p` of
//! the 4-bit value. Output rows pack two pixels per byte, even pixel in the
//! high nibble.

use super::{
    DECODED_GROUP_BYTES, DECODED_ROW_BYTES, PACKED_GROUP_BYTES, PACKED_ROW_BYTES, PLANE_ROW_BYTES,
    PLANES, WIDTH,
};
use enough::Stop;

const _: () = assert!(PACKED_ROW_BYTES * 2 == WIDTH);

/// One decoded row: `PLANES` blocks of `PLANE_ROW_BYTES`.
pub(crate) type PlaneRow = [[u8; PLANE_ROW_BYTES]; PLANES];

/// Combine the four plane bits of pixel `idx` into a 0–15 value.
#[inline]
pub(crate) fn plane_pixel(row: &PlaneRow, idx: usize) -> u8 {
    let byte_idx = idx / 8;
    let shift = 7 - (idx % 8);
    let mut value = 0u8;
    for (plane, block) in row.iter().enumerate() {
        let bit = (block[byte_idx] >> shift) & 0x01;
        value |= bit << plane;
    }
    value
}

/// Split a flat decoded row slice into its plane blocks.
fn split_planes(decoded: &[u8; DECODED_ROW_BYTES]) -> PlaneRow {
    let mut row = [[0u8; PLANE_ROW_BYTES]; PLANES];
    let (blocks, _) = decoded.as_chunks::<PLANE_ROW_BYTES>();
    row.copy_from_slice(blocks);
    row
}

/// Pack one decoded row into a 4bpp output row.
pub(crate) fn pack_row(row: &PlaneRow, out: &mut [u8; PACKED_ROW_BYTES]) {
    for (pair, byte) in out.iter_mut().enumerate() {
        let hi = plane_pixel(row, pair * 2);
        let lo = plane_pixel(row, pair * 2 + 1);
        *byte = (hi << 4) | lo;
    }
}

/// Pack a whole decoded group into its slot of the output buffer.
pub(crate) fn pack_group(
    decoded: &[u8; DECODED_GROUP_BYTES],
    out: &mut [u8; PACKED_GROUP_BYTES],
    stop: &dyn Stop,
) -> Result<(), enough::StopReason> {
    let (rows_in, _) = decoded.as_chunks::<DECODED_ROW_BYTES>();
    let (rows_out, _) = out.as_chunks_mut::<PACKED_ROW_BYTES>();
    for (row_idx, (src, dst)) in rows_in.iter().zip(rows_out).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pack_row(&split_planes(src), dst);
    }
    Ok(())
}
