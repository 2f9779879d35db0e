#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpmt::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, conversion must be deterministic and match the image
    let Ok(image) = decode_pmt(data, enough::Unstoppable) else {
        return;
    };

    let a = encode_bmp(&image, enough::Unstoppable).expect("encode of decoded image");
    let b = pmt_to_bmp(data, enough::Unstoppable).expect("second conversion");
    assert_eq!(a, b, "conversion not deterministic");
    assert_eq!(a.len(), bmp::FILE_BYTES);
    assert_eq!(&a[bmp::PIXEL_DATA_OFFSET..], image.pixels());

    // Strict mode may reject, but never disagree when it accepts
    if let Ok(strict) = DecodeRequest::new(data)
        .with_strictness(Strictness::Strict)
        .decode(enough::Unstoppable)
    {
        assert_eq!(strict, image);
    }
});
