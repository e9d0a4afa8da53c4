/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The 8 byte PNG signature `\x89PNG\r\n\x1a\n` as a big endian integer.
pub const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;

/// Number of bytes the signature occupies at the start of the stream.
pub const PNG_SIGNATURE_LENGTH: usize = 8;
