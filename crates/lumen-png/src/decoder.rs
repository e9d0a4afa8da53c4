/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use lumen_core::bytestream::ByteReader;
use lumen_core::colorspace::ColorSpace;
use zune_inflate::DeflateOptions;

use crate::constants::{PNG_SIGNATURE, PNG_SIGNATURE_LENGTH};
use crate::enums::{FilterType, PngChunkType, PngColor};
use crate::error::PngErrors;
use crate::filters::{
    handle_avg, handle_avg_first, handle_paeth, handle_paeth_first, handle_sub, handle_up
};
use crate::options::PngOptions;

/// A single length-tagged record in the PNG container.
///
/// The payload is a borrowed view into the input buffer, nothing is
/// copied at demux time. A chunk only lives for the parse step that
/// produced it.
#[derive(Copy, Clone)]
pub(crate) struct PngChunk<'a>
{
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4],
    pub data:       &'a [u8],
    /// Chunk checksum. Read from the stream but deliberately never
    /// verified.
    #[allow(dead_code)]
    pub crc:        u32
}

/// Image parameters extracted from the IHDR chunk.
///
/// Created once from the mandatory first chunk and immutable afterwards.
#[derive(Default, Debug, Copy, Clone)]
pub struct PngInfo
{
    pub width:     usize,
    pub height:    usize,
    pub depth:     u8,
    pub color:     PngColor,
    pub component: u8,
    /// Compression method from the header, always 0 in valid streams.
    pub compression_method: u8,
    /// The global pre-filter method from the header, always 0; distinct
    /// from the per-row filter types.
    pub filter_method:      u8,
    pub interlace_method:   u8
}

/// A PNG decoder for non-interlaced 8 bit truecolor images.
///
/// The input buffer is borrowed for the lifetime of the decoder; owned
/// buffers exist only for the gathered compressed stream and the final
/// pixels.
pub struct PngDecoder<'a>
{
    pub(crate) seen_hdr:    bool,
    pub(crate) stream:      ByteReader<'a>,
    pub(crate) options:     PngOptions,
    pub(crate) png_info:    PngInfo,
    pub(crate) idat_chunks: Vec<u8>
}

impl<'a> PngDecoder<'a>
{
    pub fn new(data: &'a [u8]) -> PngDecoder<'a>
    {
        let default_opt = PngOptions::default();

        PngDecoder::new_with_options(data, default_opt)
    }

    pub fn new_with_options(data: &'a [u8], options: PngOptions) -> PngDecoder<'a>
    {
        PngDecoder {
            seen_hdr: false,
            stream: ByteReader::new(data),
            options,
            png_info: PngInfo::default(),
            idat_chunks: Vec::new()
        }
    }

    /// Image width and height, present once headers have been decoded.
    pub const fn get_dimensions(&self) -> Option<(usize, usize)>
    {
        if !self.seen_hdr
        {
            return None;
        }

        Some((self.png_info.width, self.png_info.height))
    }

    /// Bit depth of the image, present once headers have been decoded.
    pub const fn get_depth(&self) -> Option<u8>
    {
        if !self.seen_hdr
        {
            return None;
        }

        Some(self.png_info.depth)
    }

    pub fn get_colorspace(&self) -> Option<ColorSpace>
    {
        if !self.seen_hdr
        {
            return None;
        }
        match self.png_info.color
        {
            PngColor::RGB => Some(ColorSpace::RGB),
            PngColor::RGBA => Some(ColorSpace::RGBA),
            // anything else was rejected while parsing the header
            _ => None
        }
    }

    pub const fn get_info(&self) -> Option<&PngInfo>
    {
        if !self.seen_hdr
        {
            return None;
        }

        Some(&self.png_info)
    }

    /// Bytes per whole pixel, 3 for RGB and 4 for RGBA.
    fn pixel_size(&self) -> usize
    {
        usize::from(self.png_info.component) * usize::from(self.png_info.depth / 8)
    }

    /// Size the filtered stream must inflate to, one filter byte plus
    /// `width * pixel_size` sample bytes per row.
    fn expected_raw_size(&self) -> usize
    {
        let info = &self.png_info;

        info.height * (info.width * self.pixel_size() + 1)
    }

    fn read_signature(&mut self) -> Result<(), PngErrors>
    {
        let signature = self
            .stream
            .get_u64_be_err()
            .map_err(|_| PngErrors::BadSignature)?;

        if signature != PNG_SIGNATURE
        {
            return Err(PngErrors::BadSignature);
        }

        Ok(())
    }

    /// Parse the next chunk off `stream`, leaving the cursor just past
    /// its checksum.
    ///
    /// The payload is returned as a view into the input buffer and the
    /// contents are not interpreted here. The trailing CRC is read and
    /// recorded, never checked.
    fn next_chunk(stream: &mut ByteReader<'a>) -> Result<PngChunk<'a>, PngErrors>
    {
        // Format is length - chunk type - [data] - crc
        let length = stream.get_u32_be_err()? as usize;
        let chunk_bytes = stream.get_fixed_bytes_or_error::<4>()?;

        let chunk_type = match &chunk_bytes
        {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::Unknown
        };

        if !stream.has(length + 4 /*crc bytes*/)
        {
            return Err(PngErrors::Truncated(length + 4, stream.remaining()));
        }

        let data = stream.get_as_ref(length)?;
        let crc = stream.get_u32_be();

        Ok(PngChunk {
            length,
            chunk_type,
            chunk: chunk_bytes,
            data,
            crc
        })
    }

    /// Decode the signature and the IHDR chunk, filling in the image
    /// parameters.
    ///
    /// Idempotent, later calls are no-ops once the header was seen.
    pub fn decode_headers(&mut self) -> Result<(), PngErrors>
    {
        if self.seen_hdr
        {
            return Ok(());
        }

        self.read_signature()?;

        let chunk = Self::next_chunk(&mut self.stream)?;

        if chunk.chunk_type != PngChunkType::IHDR
        {
            return Err(PngErrors::Unsupported(format!(
                "first chunk must be IHDR, found {:?}",
                std::str::from_utf8(&chunk.chunk).unwrap_or("XXXX")
            )));
        }

        self.parse_ihdr(chunk)
    }

    /// Walk the whole chunk stream again and concatenate every IDAT
    /// payload, in encounter order, into one owned buffer.
    ///
    /// Runs on an independent cursor rewound to just past the
    /// signature, so the caller's position is not disturbed. A chunk
    /// that no longer parses is treated as end of stream, trailing
    /// garbage after the image data is not this pass's problem.
    fn gather_idat(&mut self) -> Result<(), PngErrors>
    {
        let mut stream = self.stream.clone();

        stream.set_position(PNG_SIGNATURE_LENGTH);

        while let Ok(chunk) = Self::next_chunk(&mut stream)
        {
            match chunk.chunk_type
            {
                PngChunkType::IDAT =>
                {
                    self.idat_chunks
                        .try_reserve(chunk.length)
                        .map_err(|_| PngErrors::InsufficientMemory(chunk.length))?;

                    self.idat_chunks.extend_from_slice(chunk.data);
                }
                PngChunkType::IEND => break,
                _ =>
                {
                    trace!(
                        "Skipping chunk {:?} of length {}",
                        std::str::from_utf8(&chunk.chunk).unwrap_or("XXXX"),
                        chunk.length
                    );
                }
            }
        }

        Ok(())
    }

    /// Inflate the gathered IDAT stream under an exact output size
    /// contract.
    ///
    /// The expected size is computed from the header before any
    /// decompression happens; producing either more or less than that
    /// is an error, more via the hard output limit and less via the
    /// size check afterwards.
    fn inflate(&mut self) -> Result<Vec<u8>, PngErrors>
    {
        let expected = self.expected_raw_size();

        let option = DeflateOptions::default()
            .set_size_hint(expected)
            .set_limit(expected)
            .set_confirm_checksum(true);

        let mut decoder = zune_inflate::DeflateDecoder::new_with_options(&self.idat_chunks, option);

        let data = decoder.decode_zlib()?;

        if data.len() != expected
        {
            // a successful inflate of the wrong size means the header
            // and the stream disagree, not that the input is corrupt
            return Err(PngErrors::WrongInflatedSize(expected, data.len()));
        }

        Ok(data)
    }

    /// Reverse the per-row filters in place.
    ///
    /// Rows strictly top to bottom, samples strictly left to right;
    /// Sub/Average/Paeth read the already reconstructed left neighbor
    /// and Up/Average/Paeth the already reconstructed row above, all
    /// from the same buffer being written.
    fn unfilter_scanlines(&self, data: &mut [u8]) -> Result<(), PngErrors>
    {
        let info = &self.png_info;
        let components = self.pixel_size();
        let stride = info.width * components + 1;

        for y in 0..info.height
        {
            // everything before this row is already reconstructed
            let (done, rest) = data.split_at_mut(y * stride);
            let row = &mut rest[..stride];

            let filter_byte = row[0];

            let mut filter =
                FilterType::from_int(filter_byte).ok_or(PngErrors::BadFilter(filter_byte))?;

            trace!("Filter method for row {y}: {filter:?}");

            if y == 0
            {
                // match filters to the special first-row versions that
                // treat the missing row above as all zeroes
                filter = match filter
                {
                    // up against a zero row is a no-op
                    FilterType::Up => FilterType::None,
                    FilterType::Average => FilterType::AvgFirst,
                    FilterType::Paeth => FilterType::PaethFirst,
                    other => other
                };
            }

            let current = &mut row[1..];

            // previous row minus its filter byte
            let prev_row: &[u8] = if y == 0
            {
                &[]
            }
            else
            {
                &done[(y - 1) * stride + 1..y * stride]
            };

            match filter
            {
                FilterType::None => {}

                FilterType::Sub => handle_sub(current, components),

                FilterType::Up => handle_up(prev_row, current),

                FilterType::Average => handle_avg(prev_row, current, components),

                FilterType::Paeth => handle_paeth(prev_row, current, components),

                FilterType::AvgFirst => handle_avg_first(current, components),

                FilterType::PaethFirst => handle_paeth_first(current, components)
            }
        }

        Ok(())
    }

    /// Decode the image and return the raw pixel bytes, packed row
    /// after row with no padding.
    ///
    /// RGB images produce 3 bytes per pixel and RGBA images 4; the
    /// alpha channel, when present, is decoded like any other channel.
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PngErrors>
    {
        self.decode_headers()?;

        self.gather_idat()?;

        let mut data = self.inflate()?;

        // remove the compressed copy from memory, we are done with it
        self.idat_chunks = Vec::new();

        self.unfilter_scanlines(&mut data)?;

        // squeeze the per-row filter bytes out of the buffer, shifting
        // each row left over them; same allocation, rows stay in order
        let info = &self.png_info;
        let row_len = info.width * self.pixel_size();
        let stride = row_len + 1;

        for y in 0..info.height
        {
            let src = y * stride + 1;

            data.copy_within(src..src + row_len, y * row_len);
        }

        data.truncate(row_len * info.height);

        Ok(data)
    }
}
