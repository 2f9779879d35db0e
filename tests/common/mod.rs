//! Synthetic PMT streams for integration tests.
#![allow(dead_code)]

use zenpmt::pmt::{
    DECODED_GROUP_BYTES, DECODED_ROW_BYTES, FOOTER_GAP_BYTES, GROUPS, PACKED_IMAGE_BYTES,
    PALETTE_BYTES, PLANE_ROW_BYTES, ROWS_PER_GROUP, WIDTH,
};

/// Greedy run-length encoder producing the PMT command format.
///
/// Runs of three or more identical bytes become run commands; everything
/// else is gathered into literal commands of up to 127 bytes.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut literal: Vec<u8> = Vec::new();
    let mut i = 0;

    let flush = |out: &mut Vec<u8>, literal: &mut Vec<u8>| {
        for chunk in literal.chunks(127) {
            out.push(chunk.len() as u8);
            out.extend_from_slice(chunk);
        }
        literal.clear();
    };

    while i < data.len() {
        let byte = data[i];
        let mut run = 1;
        while i + run < data.len() && data[i + run] == byte && run < 127 {
            run += 1;
        }
        if run >= 3 {
            flush(&mut out, &mut literal);
            out.push(0x80 | run as u8);
            out.push(byte);
            i += run;
        } else {
            literal.push(byte);
            i += 1;
        }
    }
    flush(&mut out, &mut literal);
    out
}

/// Decoded (planar) bytes for one group of a picture given per-pixel values.
pub fn planar_group(group: usize, pixel: &dyn Fn(usize, usize) -> u8) -> Vec<u8> {
    let mut out = vec![0u8; DECODED_GROUP_BYTES];
    for (r, row) in out.chunks_exact_mut(DECODED_ROW_BYTES).enumerate() {
        let y = group * ROWS_PER_GROUP + r;
        for (p, block) in row.chunks_exact_mut(PLANE_ROW_BYTES).enumerate() {
            for (j, byte) in block.iter_mut().enumerate() {
                for k in 0..8 {
                    let bit = (pixel(j * 8 + k, y) >> p) & 1;
                    *byte |= bit << (7 - k);
                }
            }
        }
    }
    out
}

/// Packed 4bpp pixels the decoder should produce for `pixel`.
pub fn expected_packed(pixel: &dyn Fn(usize, usize) -> u8) -> Vec<u8> {
    let height = ROWS_PER_GROUP * GROUPS;
    let mut out = Vec::with_capacity(PACKED_IMAGE_BYTES);
    for y in 0..height {
        for x in (0..WIDTH).step_by(2) {
            out.push((pixel(x, y) << 4) | pixel(x + 1, y));
        }
    }
    out
}

/// 6-bit palette with distinct R, G, B per entry.
pub fn test_palette() -> [u8; PALETTE_BYTES] {
    let mut raw = [0u8; PALETTE_BYTES];
    for (i, entry) in raw.chunks_exact_mut(3).enumerate() {
        let i = i as u8;
        entry.copy_from_slice(&[i * 4 + 3, 63 - i, i]);
    }
    raw
}

/// Frame raw groups and append the 64-byte footer.
pub fn build_stream(raw_groups: &[Vec<u8>], palette: &[u8; PALETTE_BYTES]) -> Vec<u8> {
    let mut s = Vec::new();
    for raw in raw_groups {
        s.extend_from_slice(&(raw.len() as u16).to_le_bytes());
        s.extend_from_slice(raw);
    }
    s.extend_from_slice(&[0x5Au8; FOOTER_GAP_BYTES]);
    s.extend_from_slice(palette);
    s
}

/// Blocky pattern with one noisy row per group, so both run and literal
/// commands appear.
pub fn pattern(x: usize, y: usize) -> u8 {
    if y % ROWS_PER_GROUP == 3 {
        ((x * 7 + y) % 16) as u8
    } else {
        ((x / 64 + y / 8) % 16) as u8
    }
}

/// A full, valid PMT stream for [`pattern`] and [`test_palette`].
pub fn pattern_stream() -> Vec<u8> {
    let groups: Vec<Vec<u8>> = (0..GROUPS)
        .map(|g| rle_encode(&planar_group(g, &pattern)))
        .collect();
    build_stream(&groups, &test_palette())
}

/// Reference plane-to-nibble conversion over whole decoded groups.
pub fn packed_from_planar(groups: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::with_capacity(PACKED_IMAGE_BYTES);
    for group in groups {
        for row in group.chunks_exact(DECODED_ROW_BYTES) {
            let value = |x: usize| -> u8 {
                (0..4)
                    .map(|p| ((row[p * PLANE_ROW_BYTES + x / 8] >> (7 - x % 8)) & 1) << p)
                    .sum()
            };
            for x in (0..WIDTH).step_by(2) {
                out.push((value(x) << 4) | value(x + 1));
            }
        }
    }
    out
}
