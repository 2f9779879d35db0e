use alloc::vec::Vec;

use enough::Stop;

use crate::decode::PmtImage;
use crate::error::PmtError;
use crate::palette::BmpPalette;

/// Output container for [`EncodeRequest`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Uncompressed 4-bit palettized BMP, top-down.
    Bmp4,
}

/// Builder for encoding a decoded PMT picture.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: OutputFormat,
}

impl EncodeRequest {
    /// 4-bit BMP with the picture's 16-color table.
    pub fn bmp() -> Self {
        Self {
            format: OutputFormat::Bmp4,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encode a decoded picture.
    pub fn encode(self, image: &PmtImage, stop: impl Stop) -> Result<Vec<u8>, PmtError> {
        self.encode_packed(image.pixels(), image.palette(), stop)
    }

    /// Encode raw packed 4bpp rows (840×888, top row first) with a palette.
    ///
    /// `pixels` must hold at least
    /// [`PACKED_IMAGE_BYTES`](crate::pmt::PACKED_IMAGE_BYTES). Only that
    /// prefix is written; bytes beyond it are ignored.
    pub fn encode_packed(
        self,
        pixels: &[u8],
        palette: &BmpPalette,
        stop: impl Stop,
    ) -> Result<Vec<u8>, PmtError> {
        match self.format {
            OutputFormat::Bmp4 => crate::bmp::encode(pixels, palette, &stop),
        }
    }
}
