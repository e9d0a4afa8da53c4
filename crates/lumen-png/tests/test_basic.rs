/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumen_core::colorspace::ColorSpace;
use lumen_png::PngDecoder;

use crate::common::{build_png, chunk, ihdr, zlib_stored, SIGNATURE};

mod common;

#[test]
fn one_by_one_none_filter_is_verbatim() {
    // a single pixel behind filter None decodes to the raw bytes
    let png = build_png(1, 1, 2, &[0, 10, 20, 30]);

    let pixels = PngDecoder::new(&png).decode_raw().unwrap();

    assert_eq!(pixels, [10, 20, 30]);
}

#[test]
fn rgba_keeps_its_alpha_channel() {
    let png = build_png(1, 1, 6, &[0, 1, 2, 3, 4]);

    let pixels = PngDecoder::new(&png).decode_raw().unwrap();

    assert_eq!(pixels, [1, 2, 3, 4]);
}

#[test]
fn decoding_is_deterministic() {
    // two rows, one per filter that depends on earlier output
    let filtered = [
        1, 10, 20, 30, 100, 100, 100, // sub
        4, 1, 2, 3, 250, 250, 250, // paeth
    ];
    let png = build_png(2, 2, 2, &filtered);

    let first = PngDecoder::new(&png).decode_raw().unwrap();
    let second = PngDecoder::new(&png).decode_raw().unwrap();

    assert_eq!(first, second);
}

#[test]
fn scattered_idat_chunks_are_reassembled_in_order() {
    let filtered = [0, 1, 2, 3, 4, 5, 6];
    let zlib = zlib_stored(&filtered);

    // same compressed stream, split across two IDAT records
    let (front, back) = zlib.split_at(4);

    let mut png = SIGNATURE.to_vec();
    png.extend(ihdr(2, 1, 8, 2, 0));
    png.extend(chunk(b"IDAT", front));
    png.extend(chunk(b"IDAT", back));
    png.extend(chunk(b"IEND", &[]));

    let pixels = PngDecoder::new(&png).decode_raw().unwrap();

    assert_eq!(pixels, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn ancillary_chunks_are_skipped_unread() {
    let mut png = SIGNATURE.to_vec();
    png.extend(ihdr(1, 1, 8, 2, 0));
    // an ancillary chunk between IHDR and IDAT, contents are noise
    png.extend(chunk(b"tEXt", b"comment\0does not matter"));
    png.extend(chunk(b"IDAT", &zlib_stored(&[0, 7, 8, 9])));
    png.extend(chunk(b"IEND", &[]));

    let pixels = PngDecoder::new(&png).decode_raw().unwrap();

    assert_eq!(pixels, [7, 8, 9]);
}

#[test]
fn header_accessors_need_decoded_headers() {
    let png = build_png(3, 2, 6, &[0; 26]);

    let mut decoder = PngDecoder::new(&png);

    assert!(decoder.get_dimensions().is_none());
    assert!(decoder.get_colorspace().is_none());

    decoder.decode_headers().unwrap();

    assert_eq!(decoder.get_dimensions(), Some((3, 2)));
    assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGBA));
    assert_eq!(decoder.get_depth(), Some(8));
}
