//! Whole-file conversion helpers (requires `std`).

use std::io::{Read, Write};
use std::path::Path;
use std::vec::Vec;

use enough::Stop;

use crate::error::PmtError;
use crate::Strictness;

/// Read a PMT stream to its end and write the BMP to `writer`.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    strictness: Strictness,
    stop: impl Stop,
) -> Result<(), PmtError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let bmp = convert(&data, strictness, &stop)?;
    writer.write_all(&bmp)?;
    writer.flush()?;
    Ok(())
}

/// Convert the PMT file at `input` into a BMP file at `output`.
///
/// The output file is only created once conversion has succeeded.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    strictness: Strictness,
    stop: impl Stop,
) -> Result<(), PmtError> {
    let data = std::fs::read(input.as_ref())?;

    #[cfg(feature = "debug-logging")]
    log::debug!("read {} bytes from {}", data.len(), input.as_ref().display());

    let bmp = convert(&data, strictness, &stop)?;
    std::fs::write(output.as_ref(), &bmp)?;

    #[cfg(feature = "debug-logging")]
    log::debug!("wrote {} bytes to {}", bmp.len(), output.as_ref().display());

    Ok(())
}

fn convert(data: &[u8], strictness: Strictness, stop: &dyn Stop) -> Result<Vec<u8>, PmtError> {
    let image = crate::pmt::decode(data, strictness, stop)?;
    crate::bmp::encode(image.pixels(), image.palette(), stop)
}
