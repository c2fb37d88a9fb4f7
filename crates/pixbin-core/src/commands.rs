use std::io::{BufRead, Read, Write};

use crate::decoder::PpmDecoder;
use crate::encoder::PpmEncoder;
use crate::result::Result;

/// Serializes every byte of `input` into a PPM (P3) document on
/// `output`, declaring a `width` x `height` pixel grid in the header.
pub fn encode(input: impl Read, output: impl Write, width: usize, height: usize) -> Result<()> {
    PpmEncoder::new(width, height).encode(input, output)
}

/// Recovers the raw byte stream of the PPM (P3) document on `input`
/// into `output`.
pub fn decode(input: impl BufRead, output: impl Write) -> Result<()> {
    PpmDecoder::decode(input, output)
}
