//! 16-color palettes: the PMT footer form and the BMP color table form.

use crate::pmt::{PALETTE_BYTES, PALETTE_ENTRIES};

#[cfg(feature = "rgb")]
use rgb::RGB8;

/// Palette as stored in a PMT footer: 16 entries of 6-bit R, G, B.
///
/// Only the low 6 bits of each channel are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PmtPalette([[u8; 3]; PALETTE_ENTRIES]);

impl PmtPalette {
    /// Build from raw footer bytes (R, G, B per entry).
    pub fn from_bytes(bytes: &[u8; PALETTE_BYTES]) -> Self {
        let (entries, _) = bytes.as_chunks::<3>();
        let mut out = [[0u8; 3]; PALETTE_ENTRIES];
        out.copy_from_slice(entries);
        Self(out)
    }

    pub fn entries(&self) -> &[[u8; 3]; PALETTE_ENTRIES] {
        &self.0
    }

    /// Convert to a BMP color table.
    ///
    /// Channels are reversed to B, G, R and scaled from 6 to 8 bits by a
    /// left shift of two; bits shifted out of a byte are discarded. The
    /// fourth byte of every entry is zero.
    pub fn to_bmp(&self) -> BmpPalette {
        let mut out = [[0u8; 4]; PALETTE_ENTRIES];
        for (dst, src) in out.iter_mut().zip(self.0.iter()) {
            for c in 0..3 {
                dst[c] = src[2 - c] << 2;
            }
            dst[3] = 0;
        }
        BmpPalette(out)
    }
}

/// BMP color table: 16 entries of 8-bit B, G, R and a zero pad byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpPalette([[u8; 4]; PALETTE_ENTRIES]);

impl BmpPalette {
    /// Wrap an existing B, G, R, pad table.
    pub fn new(entries: [[u8; 4]; PALETTE_ENTRIES]) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[[u8; 4]; PALETTE_ENTRIES] {
        &self.0
    }

    /// Entry for a pixel value, or `None` above 15.
    pub fn entry(&self, index: u8) -> Option<[u8; 4]> {
        self.0.get(usize::from(index)).copied()
    }

    /// The table as it is written to a BMP file (64 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    /// Entries in R, G, B order.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self) -> [RGB8; PALETTE_ENTRIES] {
        self.0.map(|[b, g, r, _]| RGB8::new(r, g, b))
    }
}

impl From<PmtPalette> for BmpPalette {
    fn from(p: PmtPalette) -> Self {
        p.to_bmp()
    }
}
