/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Hand-rolled PNG fixtures.
//!
//! Builds byte-exact PNG streams without an encoder: stored (type 0)
//! deflate blocks wrapped in a zlib frame with a real Adler32, and
//! chunk checksums left at zero since the decoder reads but never
//! verifies them.

#![allow(dead_code)]

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Adler32 over `data`, the checksum zlib frames end with.
pub fn adler32(data: &[u8]) -> u32 {
    const MOD: u32 = 65521;
    // largest run that cannot overflow u32 before reducing
    const NMAX: usize = 5552;

    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for chunk in data.chunks(NMAX) {
        for byte in chunk {
            a += u32::from(*byte);
            b += a;
        }
        a %= MOD;
        b %= MOD;
    }

    (b << 16) | a
}

/// Wrap `data` in a zlib frame holding only stored deflate blocks.
pub fn zlib_stored(data: &[u8]) -> Vec<u8> {
    // CMF 0x78 (deflate, 32k window), FLG 0x01 keeps the check
    // divisible by 31
    let mut out = vec![0x78, 0x01];

    if data.is_empty() {
        // a single final stored block of length zero
        out.extend_from_slice(&[0x01, 0x00, 0x00, 0xFF, 0xFF]);
    }

    let mut chunks = data.chunks(0xFFFF).peekable();

    while let Some(chunk) = chunks.next() {
        let last = chunks.peek().is_none();
        let len = chunk.len() as u16;

        // BFINAL in the lowest bit, BTYPE 00 (stored), then LEN/NLEN
        out.push(u8::from(last));
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(chunk);
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());

    out
}

/// One chunk record: length, tag, payload and a zeroed checksum.
pub fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = (payload.len() as u32).to_be_bytes().to_vec();

    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    // checksums are parsed but never verified, any value works
    out.extend_from_slice(&[0; 4]);

    out
}

/// An IHDR chunk with compression and filter methods fixed at zero.
pub fn ihdr(width: u32, height: u32, depth: u8, color_type: u8, interlace: u8) -> Vec<u8> {
    let mut payload = Vec::new();

    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&[depth, color_type, 0, 0, interlace]);

    chunk(b"IHDR", &payload)
}

/// A complete 8 bit PNG stream around already-filtered scanline bytes
/// (one filter byte plus samples, per row).
pub fn build_png(width: u32, height: u32, color_type: u8, filtered: &[u8]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();

    out.extend(ihdr(width, height, 8, color_type, 0));
    out.extend(chunk(b"IDAT", &zlib_stored(filtered)));
    out.extend(chunk(b"IEND", &[]));

    out
}
