/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png decoder for 8 bit truecolor images
//!
//! This decodes valid non-interlaced RGB and RGBA PNG images with a bit
//! depth of eight into raw pixel bytes.
//!
//! # Features
//! - Strict bounds checking, a corrupt file can never read out of range
//! - Scattered IDAT chunks are reassembled in file order before inflation
//! - In-place scanline de-filtering for all five PNG filter types
//!
//! # Usage
//!
//! ```no_run
//! use lumen_png::PngDecoder;
//!
//! let data = std::fs::read("image.png").unwrap();
//! let mut decoder = PngDecoder::new(&data);
//!
//! let pixels = decoder.decode_raw().unwrap();
//! let (width, height) = decoder.get_dimensions().unwrap();
//! ```
//!
//! # What is not here
//!
//! Palette and grayscale color types, bit depths other than 8 and Adam7
//! interlacing are all rejected with an error rather than mis-decoded.
//! Per-chunk CRC32 checksums are read and ignored; the zlib Adler32
//! checksum over the pixel data is verified during inflation.
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate

pub use decoder::{PngDecoder, PngInfo};
pub use enums::PngColor;
pub use options::PngOptions;

mod constants;
mod decoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod options;
