//! PMT stream decoder: group framing, RLE, plane packing, and footer palette.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::{
    DECODED_GROUP_BYTES, FOOTER_GAP_BYTES, MAX_RAW_GROUP_BYTES, PACKED_GROUP_BYTES,
    PACKED_IMAGE_BYTES, PALETTE_BYTES, Strictness, planar, rle,
};
use crate::error::PmtError;
use crate::palette::{BmpPalette, PmtPalette};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Option<&'a [u8; N]> {
        let arr = self.data.get(self.pos..)?.first_chunk::<N>()?;
        self.pos += N;
        Some(arr)
    }

    fn skip(&mut self, n: usize) -> Option<()> {
        self.take(n).map(|_| ())
    }
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode all six groups and the footer palette.
///
/// Returns the packed 4bpp pixel buffer (top row first) and the converted
/// palette. Fails on the first error; nothing partial is returned.
pub(crate) fn decode_pmt_stream(
    data: &[u8],
    strictness: Strictness,
    stop: &dyn Stop,
) -> Result<(Vec<u8>, BmpPalette), PmtError> {
    let mut cursor = Cursor::new(data);
    let mut pixels = vec![0u8; PACKED_IMAGE_BYTES];
    let mut decoded = Box::new([0u8; DECODED_GROUP_BYTES]);

    let (group_slots, _) = pixels.as_chunks_mut::<PACKED_GROUP_BYTES>();
    for (group, slot) in group_slots.iter_mut().enumerate() {
        stop.check()?;
        let raw = read_group(&mut cursor, group)?;
        rle::decode_group(raw, &mut decoded[..], strictness).map_err(|e| e.in_group(group))?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "group {group}: {} raw bytes -> {DECODED_GROUP_BYTES} decoded",
            raw.len()
        );

        planar::pack_group(&decoded, slot, stop)?;
    }

    let palette = read_palette(&mut cursor)?;
    Ok((pixels, palette))
}

/// Read one length-prefixed raw group, borrowing it from the input.
fn read_group<'a>(cursor: &mut Cursor<'a>, group: usize) -> Result<&'a [u8], PmtError> {
    let len = cursor
        .read_array::<2>()
        .ok_or(PmtError::StreamTruncated {
            group,
            needed: 2,
            available: cursor.remaining(),
        })?;
    let declared = usize::from(u16::from_le_bytes(*len));
    if declared > MAX_RAW_GROUP_BYTES {
        return Err(PmtError::GroupOverflow {
            group,
            declared,
            capacity: MAX_RAW_GROUP_BYTES,
        });
    }
    let available = cursor.remaining();
    cursor.take(declared).ok_or(PmtError::StreamTruncated {
        group,
        needed: declared,
        available,
    })
}

/// Skip the footer gap and convert the 48-byte palette that follows it.
fn read_palette(cursor: &mut Cursor<'_>) -> Result<BmpPalette, PmtError> {
    let available = cursor.remaining().saturating_sub(FOOTER_GAP_BYTES);
    cursor
        .skip(FOOTER_GAP_BYTES)
        .ok_or(PmtError::PaletteReadShortfall { available })?;
    let raw = cursor
        .read_array::<PALETTE_BYTES>()
        .ok_or(PmtError::PaletteReadShortfall { available })?;

    #[cfg(feature = "debug-logging")]
    log::trace!("palette: {raw:02x?}");

    Ok(PmtPalette::from_bytes(raw).to_bmp())
}
