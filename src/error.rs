use enough::StopReason;

/// Errors from PMT decoding and BMP encoding.
///
/// Group indices are zero-based, in stream order.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PmtError {
    #[error("group {group}: stream truncated, need {needed} bytes, {available} available")]
    StreamTruncated {
        group: usize,
        needed: usize,
        available: usize,
    },

    #[error("group {group}: declared length {declared} exceeds group capacity {capacity}")]
    GroupOverflow {
        group: usize,
        declared: usize,
        capacity: usize,
    },

    #[error("group {group}: {violation}")]
    DecodeBoundsViolation {
        group: usize,
        violation: BoundsViolation,
    },

    #[error("group {group}: decoded {decoded} bytes, expected {expected}")]
    DecodeSizeMismatch {
        group: usize,
        decoded: usize,
        expected: usize,
    },

    #[error("palette needs 48 bytes after the footer gap, {available} available")]
    PaletteReadShortfall { available: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for PmtError {
    fn from(r: StopReason) -> Self {
        PmtError::Cancelled(r)
    }
}

/// Where an RLE command tried to step outside its buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundsViolation {
    /// A command byte, fill byte, or literal run extends past the input.
    #[error("read past end of input at offset {offset}")]
    ReadPastInput { offset: usize },

    /// A command would write `run` bytes starting at output `offset`.
    #[error("write of {run} bytes past end of output at offset {offset}")]
    WritePastOutput { offset: usize, run: usize },

    /// Output was already full with input remaining (strict mode only).
    #[error("unconsumed input at offset {offset} after output was filled")]
    InputAfterOutputFull { offset: usize },
}

/// RLE failure for a single group, before the group index is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RleError {
    #[error(transparent)]
    Bounds(#[from] BoundsViolation),

    #[error("decoded {decoded} bytes, expected {expected}")]
    SizeMismatch { decoded: usize, expected: usize },
}

impl RleError {
    /// Attach the failing group's index.
    pub fn in_group(self, group: usize) -> PmtError {
        match self {
            RleError::Bounds(violation) => PmtError::DecodeBoundsViolation { group, violation },
            RleError::SizeMismatch { decoded, expected } => PmtError::DecodeSizeMismatch {
                group,
                decoded,
                expected,
            },
        }
    }
}
