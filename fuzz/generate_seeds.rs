#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Valid PMT: every group is runs of a single byte, footer with a ramp palette
    let mut pmt = Vec::new();
    for g in 0..6u8 {
        let mut raw = Vec::new();
        let mut left = 62160usize;
        while left > 0 {
            let n = left.min(127);
            raw.push(0x80 | n as u8);
            raw.push(if g % 2 == 0 { 0x00 } else { 0xFF });
            left -= n;
        }
        pmt.extend_from_slice(&(raw.len() as u16).to_le_bytes());
        pmt.extend_from_slice(&raw);
    }
    pmt.extend_from_slice(&[0u8; 16]);
    for i in 0..16u8 {
        pmt.extend_from_slice(&[i * 4, i * 4, i * 4]);
    }
    fs::write(format!("{dir}/solid.pmt"), &pmt).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/len_only.bin"), b"\x10\x00").unwrap();
    fs::write(format!("{dir}/overflow_len.bin"), b"\xff\xff").unwrap();
    fs::write(format!("{dir}/literal_past_end.bin"), b"\x03\x00\x7f\x01\x02").unwrap();
    fs::write(format!("{dir}/no_palette.pmt"), &pmt[..pmt.len() - 48]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
