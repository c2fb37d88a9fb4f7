use std::io::{BufReader, BufWriter, Read, Write};

use log::debug;

use crate::error::PixbinError;
use crate::result::Result;
use crate::{PPM_MAGIC, PPM_MAX_VALUE};

const PPM_COMMENT: &str = "# Created by pixbin";

/// PPM (P3) writer that serializes a raw byte stream as one decimal
/// channel value per line, after a header declaring the grid handed to
/// the constructor.
///
/// The encoder never pads and never checks the payload length against
/// `width * height * 3`; keeping header and payload consistent is the
/// caller's business (see [`ImageDimensions`](crate::ImageDimensions)).
pub struct PpmEncoder {
    width: usize,
    height: usize,
}

impl PpmEncoder {
    /// constructor for a given pixel grid, declared verbatim in the header
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Consumes `input` to exhaustion and writes the PPM document to
    /// `output`. Output is buffered and flushed exactly once at the end
    /// of the operation, so on failure everything produced before the
    /// error still reaches the sink.
    pub fn encode<R: Read, W: Write>(&self, input: R, output: W) -> Result<()> {
        let mut writer = BufWriter::new(output);
        let result = self.encode_stream(input, &mut writer);
        let flushed = writer.flush();

        result?;
        flushed.map_err(|source| PixbinError::WriteError { source })
    }

    fn encode_stream<R: Read, W: Write>(&self, input: R, writer: &mut W) -> Result<()> {
        write!(
            writer,
            "{PPM_MAGIC}\n{PPM_COMMENT}\n{} {}\n{PPM_MAX_VALUE}\n",
            self.width, self.height
        )
        .map_err(|source| PixbinError::WriteError { source })?;

        let mut written = 0usize;
        for byte in BufReader::new(input).bytes() {
            let byte = byte.map_err(|source| PixbinError::ReadError { source })?;
            writeln!(writer, "{byte}").map_err(|source| PixbinError::WriteError { source })?;
            written += 1;
        }
        debug!(
            "encoded {written} bytes onto a {} x {} grid",
            self.width, self.height
        );

        Ok(())
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::*;

    fn encode_to_lines(payload: &[u8], width: usize, height: usize) -> Vec<String> {
        let mut document = Vec::new();
        PpmEncoder::new(width, height)
            .encode(payload, &mut document)
            .expect("encoding into a Vec must not fail");

        String::from_utf8(document)
            .expect("document must be text")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn it_should_write_the_header_and_one_line_per_byte() {
        let lines = encode_to_lines(&[0, 128, 255], 1, 1);

        assert_eq!(lines[0], "P3");
        assert!(lines[1].starts_with('#'));
        assert_eq!(lines[2], "1 1");
        assert_eq!(lines[3], "255");
        assert_eq!(&lines[4..], ["0", "128", "255"]);
    }

    #[test]
    fn it_should_write_only_the_header_for_an_empty_payload() {
        let lines = encode_to_lines(&[], 32, 32);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "32 32");
    }

    #[test]
    fn it_should_not_pad_a_payload_shorter_than_the_grid() {
        let lines = encode_to_lines(&[7, 7], 32, 32);

        assert_eq!(lines.len(), 4 + 2);
    }

    #[test]
    fn it_should_keep_the_byte_order_unchanged() {
        let payload: Vec<u8> = (0..=255).collect();
        let lines = encode_to_lines(&payload, 10, 9);

        let values: Vec<String> = payload.iter().map(u8::to_string).collect();
        assert_eq!(lines[4..], values);
    }
}
