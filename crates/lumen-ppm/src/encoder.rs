/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter, Write as _};
use std::io;
use std::io::Write;

use lumen_core::colorspace::ColorSpace;

/// Errors occurring during encoding
pub enum PPMErrors
{
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PPMErrors
{
    fn from(err: io::Error) -> Self
    {
        PPMErrors::IoErrors(err)
    }
}

impl Debug for PPMErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            PPMErrors::Static(ref errors) =>
            {
                writeln!(f, "{errors}")
            }
            PPMErrors::IoErrors(ref err) =>
            {
                writeln!(f, "{err}")
            }
        }
    }
}

/// A plain text (`P3`) PPM encoder.
pub struct PPMEncoder<'a, W: Write>
{
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W>
{
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W>
    {
        Self { writer }
    }

    fn write_headers(&mut self, width: usize, height: usize) -> Result<(), PPMErrors>
    {
        // max sample value is always 255, only 8 bit data comes through
        let header = format!("P3 {width} {height} 255\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode 8 bit samples as a plain text PPM image, one text line
    /// per image row.
    ///
    /// RGBA data is accepted and its alpha channel dropped; every
    /// other colorspace is refused.
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PPMErrors>
    {
        if !matches!(colorspace, ColorSpace::RGB | ColorSpace::RGBA)
        {
            return Err(PPMErrors::Static("Only RGB and RGBA data can be written as P3"));
        }

        let components = colorspace.num_components();

        if width * height * components != data.len()
        {
            return Err(PPMErrors::Static(
                "Data length does not match image dimensions"
            ));
        }

        self.write_headers(width, height)?;

        // worst case a sample is "255 ", build each text row in one go
        let mut line = String::with_capacity(width * components * 4);

        for row in data.chunks_exact(width * components)
        {
            line.clear();

            for px in row.chunks_exact(components)
            {
                // first three channels only, alpha never reaches the text
                for value in &px[..3]
                {
                    // writing into a String cannot fail
                    let _ = write!(line, "{value} ");
                }
            }
            line.push('\n');

            self.writer.write_all(line.as_bytes())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use lumen_core::colorspace::ColorSpace;

    use super::PPMEncoder;

    #[test]
    fn p3_text_matches_byte_for_byte()
    {
        let data = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        let mut sink = Vec::new();

        PPMEncoder::new(&mut sink)
            .encode_u8(2, 2, ColorSpace::RGB, &data)
            .unwrap();

        assert_eq!(sink, b"P3 2 2 255\n255 0 0 0 255 0 \n0 0 255 9 9 9 \n");
    }

    #[test]
    fn alpha_is_dropped_from_the_output()
    {
        let data = [255u8, 0, 0, 128, 1, 2, 3, 255];
        let mut sink = Vec::new();

        PPMEncoder::new(&mut sink)
            .encode_u8(2, 1, ColorSpace::RGBA, &data)
            .unwrap();

        assert_eq!(sink, b"P3 2 1 255\n255 0 0 1 2 3 \n");
    }

    #[test]
    fn wrong_length_and_colorspace_are_refused()
    {
        let mut sink = Vec::new();

        assert!(PPMEncoder::new(&mut sink)
            .encode_u8(2, 2, ColorSpace::RGB, &[0_u8; 5])
            .is_err());

        assert!(PPMEncoder::new(&mut sink)
            .encode_u8(2, 2, ColorSpace::Luma, &[0_u8; 4])
            .is_err());

        assert!(sink.is_empty());
    }
}
