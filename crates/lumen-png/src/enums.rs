/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// Chunk classes this decoder tells apart.
///
/// Everything that is not a header, image data or end marker is lumped
/// together and skipped during traversal, see
/// <https://www.w3.org/TR/2003/REC-PNG-20031110/> for the full table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PngChunkType
{
    IHDR,
    IDAT,
    IEND,
    Unknown
}

/// Per-scanline filter type, the first byte of every decompressed row.
///
/// `AvgFirst` and `PaethFirst` never appear in a stream; they are the
/// first-row specializations of `Average` and `Paeth` where the row
/// above is taken to be all zeroes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FilterType
{
    None,
    Sub,
    Up,
    Average,
    Paeth,
    // First scanline, special
    AvgFirst,
    PaethFirst
}

impl FilterType
{
    pub fn from_int(int: u8) -> Option<FilterType>
    {
        match int
        {
            0 => Some(FilterType::None),
            1 => Some(FilterType::Sub),
            2 => Some(FilterType::Up),
            3 => Some(FilterType::Average),
            4 => Some(FilterType::Paeth),
            _ => None
        }
    }
}

/// Color type from the image header.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngColor
{
    Luma,
    Palette,
    LumaA,
    RGB,
    RGBA,
    Unknown
}

impl Default for PngColor
{
    fn default() -> Self
    {
        Self::Unknown
    }
}

impl PngColor
{
    pub(crate) fn num_components(self) -> u8
    {
        match self
        {
            PngColor::Luma => 1,
            PngColor::Palette => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4,
            PngColor::Unknown => 0
        }
    }

    /// True if the color type's alpha bit is set.
    pub(crate) fn has_alpha(self) -> bool
    {
        matches!(self, PngColor::RGBA | PngColor::LumaA)
    }

    pub(crate) fn from_int(int: u8) -> Option<PngColor>
    {
        match int
        {
            0 => Some(Self::Luma),
            2 => Some(Self::RGB),
            3 => Some(Self::Palette),
            4 => Some(Self::LumaA),
            6 => Some(Self::RGBA),
            _ => None
        }
    }
}
