use alloc::vec::Vec;

use enough::Stop;

use crate::error::PmtError;
use crate::palette::BmpPalette;
use crate::pmt::{self, HEIGHT, PACKED_ROW_BYTES, Strictness, WIDTH};

/// Builder for decoding a PMT stream.
///
/// ```no_run
/// use zenpmt::{DecodeRequest, Strictness, Unstoppable};
///
/// let data: &[u8] = &[]; // your PMT bytes
/// let image = DecodeRequest::new(data)
///     .with_strictness(Strictness::Strict)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), zenpmt::PmtError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    strictness: Strictness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            strictness: Strictness::default(),
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Decode the whole stream. All-or-nothing: any error discards the image.
    pub fn decode(self, stop: impl Stop) -> Result<PmtImage, PmtError> {
        pmt::decode(self.data, self.strictness, &stop)
    }
}

/// Decoded PMT picture: packed 4bpp rows plus the converted palette.
///
/// Always 840×888. Rows are stored top first, 420 bytes each, with the even
/// pixel of every pair in the high nibble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PmtImage {
    pixels: Vec<u8>,
    palette: BmpPalette,
}

impl PmtImage {
    pub(crate) fn new(pixels: Vec<u8>, palette: BmpPalette) -> Self {
        debug_assert_eq!(pixels.len(), pmt::PACKED_IMAGE_BYTES);
        Self { pixels, palette }
    }

    pub fn width(&self) -> u32 {
        WIDTH as u32
    }

    pub fn height(&self) -> u32 {
        HEIGHT as u32
    }

    /// Packed pixel data, top row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn palette(&self) -> &BmpPalette {
        &self.palette
    }

    /// Take ownership of the packed pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// One packed row, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(PACKED_ROW_BYTES)?;
        let end = start.checked_add(PACKED_ROW_BYTES)?;
        self.pixels.get(start..end)
    }

    /// Pixel value (palette index, 0–15) at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= WIDTH {
            return None;
        }
        let byte = *self.row(y)?.get(x / 2)?;
        Some(if x % 2 == 0 { byte >> 4 } else { byte & 0x0F })
    }

    /// Expand every pixel through the palette, top row first.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self) -> Vec<rgb::RGB8> {
        let colors = self.palette.to_rgb8();
        let mut out = Vec::with_capacity(WIDTH * HEIGHT);
        for &byte in &self.pixels {
            out.push(colors[usize::from(byte >> 4)]);
            out.push(colors[usize::from(byte & 0x0F)]);
        }
        out
    }

    /// Expand through the palette into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(self.to_rgb8(), WIDTH, HEIGHT)
    }
}
