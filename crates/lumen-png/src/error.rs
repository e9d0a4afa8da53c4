/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder errors.
//!
//! Every error here aborts the whole decode; there is no local recovery
//! and no partial pixel output.

use std::fmt::{Debug, Formatter};

use lumen_core::bytestream::ByteIoError;
use zune_inflate::errors::{DecodeErrorStatus, InflateDecodeErrors};

pub enum PngErrors
{
    /// Magic bytes at the start of the stream are not the PNG signature.
    BadSignature,
    /// A field or chunk extends past the end of the buffer,
    /// fields are `(requested, available)`.
    Truncated(usize, usize),
    /// The image is valid PNG but outside what this decoder handles.
    Unsupported(String),
    /// Could not reserve memory for the compressed stream.
    InsufficientMemory(usize),
    /// Inflate ran out of compressed input or output space.
    InflateTruncated(String),
    /// The compressed stream is malformed.
    InflateCorrupt(String),
    /// Inflate succeeded but produced a different size than the header
    /// promised, fields are `(expected, found)`.
    WrongInflatedSize(usize, usize),
    /// A scanline carries a filter byte outside `0..=4`.
    BadFilter(u8),
    GenericStatic(&'static str),
    Generic(String)
}

impl Debug for PngErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::BadSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::Truncated(requested, available) => writeln!(
                f,
                "Truncated stream, needed {requested} more bytes but only {available} are left"
            ),
            Self::Unsupported(reason) => writeln!(f, "Unsupported image: {reason}"),
            Self::InsufficientMemory(bytes) =>
            {
                writeln!(f, "Cannot reserve {bytes} bytes for the compressed stream")
            }
            Self::InflateTruncated(reason) =>
            {
                writeln!(f, "Error inflating idat chunks, stream cut short: {reason}")
            }
            Self::InflateCorrupt(reason) =>
            {
                writeln!(f, "Error inflating idat chunks, broken data: {reason}")
            }
            Self::WrongInflatedSize(expected, found) => writeln!(
                f,
                "Expected {expected} bytes of filtered pixel data but inflate produced {found}, header and stream disagree"
            ),
            Self::BadFilter(filter) => writeln!(f, "Unknown filter type {filter}"),
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::Generic(val) => writeln!(f, "{val}")
        }
    }
}

impl From<&'static str> for PngErrors
{
    fn from(val: &'static str) -> Self
    {
        Self::GenericStatic(val)
    }
}

impl From<String> for PngErrors
{
    fn from(val: String) -> Self
    {
        Self::Generic(val)
    }
}

impl From<ByteIoError> for PngErrors
{
    fn from(val: ByteIoError) -> Self
    {
        match val
        {
            ByteIoError::NotEnoughBytes(requested, available) =>
            {
                Self::Truncated(requested, available)
            }
        }
    }
}

impl From<InflateDecodeErrors> for PngErrors
{
    fn from(val: InflateDecodeErrors) -> Self
    {
        match val.error
        {
            DecodeErrorStatus::InsufficientData =>
            {
                Self::InflateTruncated(String::from("compressed stream ended early"))
            }
            DecodeErrorStatus::OutputLimitExceeded(limit, found) => Self::InflateTruncated(
                format!("output limit exceeded, limit is {limit} but stream holds {found}")
            ),
            status => Self::InflateCorrupt(format!("{status:?}"))
        }
    }
}
