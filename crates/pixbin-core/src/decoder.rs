use std::io::{BufRead, BufWriter, Write};

use log::debug;

use crate::error::PixbinError;
use crate::result::Result;
use crate::{PPM_MAGIC, PPM_MAX_VALUE};

/// position in the document grammar, never transitioning backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    ExpectMagic,
    ExpectDimensions,
    ExpectMaxValue,
    StreamPixels,
}

/// PPM (P3) reader that recovers the raw byte stream serialized by
/// [`PpmEncoder`](crate::PpmEncoder), driven as a state machine over a
/// lazy line iterator.
///
/// The decoder is deliberately lenient where the format carries no
/// information it needs: any number of leading `#` comment lines is
/// skipped, and the declared dimensions are never checked against the
/// number of pixel lines. Decode runs until the stream is exhausted, so
/// a payload longer or shorter than `width * height * 3` is recovered
/// as-is.
pub struct PpmDecoder;

impl PpmDecoder {
    /// Consumes `input` line by line and writes one byte per pixel
    /// value to `output`. Output is buffered and flushed exactly once
    /// at the end of the operation, so bytes decoded before a malformed
    /// line still reach the sink when the error is surfaced.
    pub fn decode<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
        let mut writer = BufWriter::new(output);
        let result = Self::decode_stream(input, &mut writer);
        let flushed = writer.flush();

        result?;
        flushed.map_err(|source| PixbinError::WriteError { source })
    }

    fn decode_stream<R: BufRead, W: Write>(input: R, writer: &mut W) -> Result<()> {
        let mut state = DecodeState::ExpectMagic;
        let mut recovered = 0usize;

        for line in input.lines() {
            let line = line.map_err(|source| PixbinError::ReadError { source })?;

            state = match state {
                DecodeState::ExpectMagic if line.is_empty() => DecodeState::ExpectMagic,
                DecodeState::ExpectMagic => {
                    if line != PPM_MAGIC {
                        return Err(PixbinError::InvalidMagic);
                    }
                    DecodeState::ExpectDimensions
                }
                DecodeState::ExpectDimensions if line.starts_with('#') => {
                    DecodeState::ExpectDimensions
                }
                DecodeState::ExpectDimensions => {
                    let fields: Vec<&str> = line.split_whitespace().collect();
                    if fields.len() != 2 {
                        return Err(PixbinError::InvalidDimensions);
                    }
                    // informational only, decode runs to stream exhaustion
                    debug!("document declares a {} x {} grid", fields[0], fields[1]);
                    DecodeState::ExpectMaxValue
                }
                DecodeState::ExpectMaxValue => {
                    if line != PPM_MAX_VALUE {
                        return Err(PixbinError::InvalidMaxValue);
                    }
                    DecodeState::StreamPixels
                }
                DecodeState::StreamPixels => {
                    let value = line
                        .parse::<i64>()
                        .map_err(|_| PixbinError::InvalidPixelValue(line.clone()))?;
                    if !(0..=255).contains(&value) {
                        return Err(PixbinError::InvalidPixelValue(line));
                    }

                    writer
                        .write_all(&[value as u8])
                        .map_err(|source| PixbinError::WriteError { source })?;
                    recovered += 1;
                    DecodeState::StreamPixels
                }
            };
        }

        // a stream ending mid-header reports the line it ran out on
        match state {
            DecodeState::ExpectMagic => Err(PixbinError::InvalidMagic),
            DecodeState::ExpectDimensions => Err(PixbinError::InvalidDimensions),
            DecodeState::ExpectMaxValue => Err(PixbinError::InvalidMaxValue),
            DecodeState::StreamPixels => {
                debug!("recovered {recovered} bytes");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;

    fn decode_str(document: &str) -> (Vec<u8>, Result<()>) {
        let mut restored = Vec::new();
        let result = PpmDecoder::decode(document.as_bytes(), &mut restored);
        (restored, result)
    }

    #[test]
    fn it_should_recover_the_bytes_of_a_well_formed_document() {
        let (restored, result) = decode_str("P3\n# any comment\n1 1\n255\n0\n128\n255\n");

        result.unwrap();
        assert_eq!(restored, [0, 128, 255]);
    }

    #[test]
    fn it_should_reject_a_missing_magic_token() {
        let (restored, result) = decode_str("P6\n# binary flavor\n1 1\n255\n0\n");

        assert!(matches!(result, Err(PixbinError::InvalidMagic)));
        assert!(restored.is_empty());
    }

    #[test]
    fn it_should_skip_blank_lines_before_the_magic() {
        let (restored, result) = decode_str("\n\nP3\n# c\n1 1\n255\n9\n");

        result.unwrap();
        assert_eq!(restored, [9]);
    }

    #[test]
    fn it_should_tolerate_any_number_of_comment_lines() {
        let (restored, result) = decode_str("P3\n# one\n# two\n# three\n1 1\n255\n1\n2\n");

        result.unwrap();
        assert_eq!(restored, [1, 2]);
    }

    #[test]
    fn it_should_reject_a_malformed_dimension_line() {
        let (_, result) = decode_str("P3\n# c\n1 1 1\n255\n0\n");

        assert!(matches!(result, Err(PixbinError::InvalidDimensions)));
    }

    #[test]
    fn it_should_not_require_numeric_dimension_fields() {
        // the declared grid is never used, only its field count is checked
        let (restored, result) = decode_str("P3\n# c\nfoo bar\n255\n42\n");

        result.unwrap();
        assert_eq!(restored, [42]);
    }

    #[test]
    fn it_should_reject_a_wrong_max_value_line() {
        let (_, result) = decode_str("P3\n# c\n1 1\n65535\n0\n");

        assert!(matches!(result, Err(PixbinError::InvalidMaxValue)));
    }

    #[test]
    fn it_should_report_the_missing_line_of_a_truncated_header() {
        for (document, expected) in [
            ("", PixbinError::InvalidMagic),
            ("P3\n", PixbinError::InvalidDimensions),
            ("P3\n# c\n", PixbinError::InvalidDimensions),
            ("P3\n# c\n1 1\n", PixbinError::InvalidMaxValue),
        ] {
            let (_, result) = decode_str(document);
            let error = result.unwrap_err();

            assert_eq!(
                std::mem::discriminant(&error),
                std::mem::discriminant(&expected),
                "unexpected error for document {document:?}: {error:?}"
            );
        }
    }

    #[test]
    fn it_should_reject_out_of_range_and_non_numeric_pixels() {
        for bad_pixel in ["256", "-1", "abc"] {
            let (_, result) = decode_str(&format!("P3\n# c\n1 1\n255\n{bad_pixel}\n"));

            match result.unwrap_err() {
                PixbinError::InvalidPixelValue(token) => assert_eq!(token, bad_pixel),
                other => panic!("expected a pixel value error, got {other:?}"),
            }
        }
    }

    #[test]
    fn it_should_flush_bytes_decoded_before_a_bad_pixel() {
        let (restored, result) = decode_str("P3\n# c\n1 1\n255\n0\n128\nabc\n255\n");

        assert!(matches!(result, Err(PixbinError::InvalidPixelValue(_))));
        assert_eq!(restored, [0, 128]);
    }

    #[test]
    fn it_should_ignore_the_declared_grid_size() {
        // 1x1 declares capacity for 3 values, six are recovered anyway
        let (restored, result) = decode_str("P3\n# c\n1 1\n255\n1\n2\n3\n4\n5\n6\n");

        result.unwrap();
        assert_eq!(restored, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn it_should_accept_a_payload_without_trailing_newline() {
        let (restored, result) = decode_str("P3\n# c\n1 1\n255\n200");

        result.unwrap();
        assert_eq!(restored, [200]);
    }
}
