/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text PPM encoder.
//!
//! Writes the `P3` variant of the Portable Pixmap format: a text
//! header followed by one line of space separated decimal RGB triplets
//! per image row. Alpha channels are accepted on input and dropped on
//! output, `P3` has no way to carry them.

pub use crate::encoder::{PPMEncoder, PPMErrors};

mod encoder;
