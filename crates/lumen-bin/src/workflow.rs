/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io;
use std::io::BufWriter;

use clap::ArgMatches;
use log::info;
use lumen_core::colorspace::ColorSpace;
use lumen_png::error::PngErrors;
use lumen_png::{PngDecoder, PngOptions};
use lumen_ppm::{PPMEncoder, PPMErrors};

/// Anything that can stop the file-to-file conversion.
pub enum BinErrors {
    Io(io::Error),
    Decode(PngErrors),
    Encode(PPMErrors)
}

impl Debug for BinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Decode(err) => writeln!(f, "{err:?}"),
            Self::Encode(err) => writeln!(f, "{err:?}")
        }
    }
}

impl From<io::Error> for BinErrors {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PngErrors> for BinErrors {
    fn from(err: PngErrors) -> Self {
        Self::Decode(err)
    }
}

impl From<PPMErrors> for BinErrors {
    fn from(err: PPMErrors) -> Self {
        Self::Encode(err)
    }
}

/// Read the input file, decode it and write the plain text PPM output.
///
/// File loading returns its error to the caller like everything else
/// here; deciding to die is the frontend's business, not the core's.
pub fn decode_to_ppm(options: &ArgMatches, decoder_options: PngOptions) -> Result<(), BinErrors> {
    let in_file = options.get_one::<String>("in").unwrap();
    let out_file = options.get_one::<String>("out").unwrap();

    let contents = std::fs::read(in_file)?;

    info!("Read {} bytes from {in_file}", contents.len());

    let mut decoder = PngDecoder::new_with_options(&contents, decoder_options);

    let pixels = decoder.decode_raw()?;

    // present whenever decode_raw succeeded
    let (width, height) = decoder.get_dimensions().unwrap();
    let colorspace: ColorSpace = decoder.get_colorspace().unwrap();

    info!("Colorspace: {colorspace:?}");

    println!(
        "decoded {width} x {height} pixels, {} bytes of image data",
        pixels.len()
    );
    println!("writing PPM output to {out_file}");

    let mut writer = BufWriter::new(File::create(out_file)?);

    PPMEncoder::new(&mut writer).encode_u8(width, height, colorspace, &pixels)?;

    Ok(())
}
