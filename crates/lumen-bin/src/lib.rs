/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line frontend, decode a PNG file and write it out as plain
//! text PPM.

use std::process::exit;

mod cmd_args;
mod cmd_parsers;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let decoder_options = cmd_parsers::parse_options(&options);

    if let Err(e) = workflow::decode_to_ppm(&options, decoder_options) {
        eprintln!("could not convert image, reason: {e:?}");
        exit(1);
    }
}
