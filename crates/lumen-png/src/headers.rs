/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;
use lumen_core::bytestream::ByteReader;

use crate::decoder::PngChunk;
use crate::enums::PngColor;
use crate::error::PngErrors;
use crate::PngDecoder;

impl<'a> PngDecoder<'a>
{
    /// Extract and validate image parameters from the IHDR payload.
    ///
    /// Field layout inside the 13 byte payload is fixed: width and
    /// height as big endian u32 at offsets 0 and 4, then one byte each
    /// of bit depth, color type, compression method, filter method and
    /// interlace method.
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk<'a>) -> Result<(), PngErrors>
    {
        if self.seen_hdr
        {
            return Err(PngErrors::GenericStatic("Multiple IHDR, corrupt PNG"));
        }

        if chunk.length != 13
        {
            return Err(PngErrors::Unsupported(format!(
                "IHDR payload must be 13 bytes, found {}",
                chunk.length
            )));
        }

        let mut stream = ByteReader::new(chunk.data);

        self.png_info.width = stream.get_u32_be_err()? as usize;
        self.png_info.height = stream.get_u32_be_err()? as usize;

        if self.png_info.width == 0 || self.png_info.height == 0
        {
            return Err(PngErrors::GenericStatic("Width or height cannot be zero"));
        }

        if self.png_info.width > self.options.max_width
        {
            return Err(PngErrors::Generic(format!(
                "Image width {}, larger than maximum configured width {}, aborting",
                self.png_info.width, self.options.max_width
            )));
        }

        if self.png_info.height > self.options.max_height
        {
            return Err(PngErrors::Generic(format!(
                "Image height {}, larger than maximum configured height {}, aborting",
                self.png_info.height, self.options.max_height
            )));
        }

        self.png_info.depth = stream.get_u8();

        let color = stream.get_u8();

        match PngColor::from_int(color)
        {
            Some(img_color @ (PngColor::RGB | PngColor::RGBA)) =>
            {
                self.png_info.color = img_color;
            }
            Some(img_color) =>
            {
                // palette bit set, or color bit clear; either way this
                // is not truecolor data
                return Err(PngErrors::Unsupported(format!(
                    "color type {img_color:?} is not truecolor, only RGB and RGBA images are supported"
                )));
            }
            None =>
            {
                return Err(PngErrors::Unsupported(format!(
                    "unknown color value {color}"
                )));
            }
        }

        if self.png_info.depth != 8
        {
            return Err(PngErrors::Unsupported(format!(
                "bit depth {} is not supported, only 8 bit samples are",
                self.png_info.depth
            )));
        }

        self.png_info.component = self.png_info.color.num_components();

        self.png_info.compression_method = stream.get_u8();

        if self.png_info.compression_method != 0
        {
            return Err(PngErrors::Unsupported(format!(
                "unknown compression method {}",
                self.png_info.compression_method
            )));
        }

        self.png_info.filter_method = stream.get_u8();

        if self.png_info.filter_method != 0
        {
            return Err(PngErrors::Unsupported(format!(
                "unknown filter method {}",
                self.png_info.filter_method
            )));
        }

        self.png_info.interlace_method = stream.get_u8();

        if self.png_info.interlace_method != 0
        {
            return Err(PngErrors::Unsupported(format!(
                "interlaced images are not supported, interlace method {}",
                self.png_info.interlace_method
            )));
        }

        info!("Width: {}", self.png_info.width);
        info!("Height: {}", self.png_info.height);
        info!("Depth: {}", self.png_info.depth);
        info!("Color type: {:?}", self.png_info.color);
        info!("Alpha channel: {}", self.png_info.color.has_alpha());
        info!("Interlace: {}", self.png_info.interlace_method);

        self.seen_hdr = true;

        Ok(())
    }
}
