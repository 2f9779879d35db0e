#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpmt::{DecodeRequest, Strictness};

fuzz_target!(|data: &[u8]| {
    // Both strictness levels must return a typed result, never panic
    let _ = DecodeRequest::new(data).decode(enough::Unstoppable);
    let _ = DecodeRequest::new(data)
        .with_strictness(Strictness::Strict)
        .decode(enough::Unstoppable);
});
