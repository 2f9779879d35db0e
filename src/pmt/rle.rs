//! PMT group run-length decoder.
//!
//! Each command starts with a control byte. With the high bit set, the low
//! seven bits are a run length and the next byte is the fill value. With the
//! high bit clear, the byte is a literal count and that many bytes follow
//! verbatim. Commands repeat until the input is exhausted, and the output
//! must then be exactly full.

use super::Strictness;
use crate::error::{BoundsViolation, RleError};

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7f;

/// Decode `src` into `dst`, which must end up exactly full.
///
/// Returns the number of bytes written, always `dst.len()` on success.
/// Every read and write is checked before it happens, so a failing group
/// never touches memory outside `src` or `dst`.
pub(crate) fn decode_group(
    src: &[u8],
    dst: &mut [u8],
    strictness: Strictness,
) -> Result<usize, RleError> {
    let mut src_pos = 0usize;
    let mut dst_pos = 0usize;

    while src_pos < src.len() {
        if strictness == Strictness::Strict && dst_pos == dst.len() {
            return Err(BoundsViolation::InputAfterOutputFull { offset: src_pos }.into());
        }

        let control = src[src_pos];
        src_pos += 1;
        let count = usize::from(control & COUNT_MASK);

        if control & RUN_FLAG != 0 {
            let fill = *src
                .get(src_pos)
                .ok_or(BoundsViolation::ReadPastInput { offset: src_pos })?;
            let out = dst
                .get_mut(dst_pos..dst_pos + count)
                .ok_or(BoundsViolation::WritePastOutput {
                    offset: dst_pos,
                    run: count,
                })?;
            out.fill(fill);
            src_pos += 1;
        } else {
            let literal = src
                .get(src_pos..src_pos + count)
                .ok_or(BoundsViolation::ReadPastInput { offset: src_pos })?;
            let out = dst
                .get_mut(dst_pos..dst_pos + count)
                .ok_or(BoundsViolation::WritePastOutput {
                    offset: dst_pos,
                    run: count,
                })?;
            out.copy_from_slice(literal);
            src_pos += count;
        }
        dst_pos += count;
    }

    if dst_pos != dst.len() {
        return Err(RleError::SizeMismatch {
            decoded: dst_pos,
            expected: dst.len(),
        });
    }
    Ok(dst_pos)
}
