use clap::Parser;
use pixbin_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Stores binary data from stdin as a plain-text PPM (P3) image on
/// stdout, and back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  Encode: cat input.bin | pixbin > output.ppm
  Decode: cat output.ppm | pixbin -d > input.bin")]
pub struct CliArgs {
    /// Decode a PPM document back to binary
    #[arg(short = 'd', long = "decode")]
    pub decode: bool,

    /// Dimensions of the image for encoding, given as width and height
    #[arg(value_name = "dimension", num_args = 0..=2)]
    pub dimensions: Vec<String>,
}

impl CliArgs {
    /// Resolves the positional dimension arguments for encode mode:
    /// none at all falls back to the default grid, otherwise both must
    /// be present and parse as positive integers. The arguments stay
    /// raw strings so the tool owns the diagnostics instead of clap.
    pub fn target_dimensions(&self) -> Result<(usize, usize), String> {
        match self.dimensions.as_slice() {
            [] => Ok((DEFAULT_WIDTH, DEFAULT_HEIGHT)),
            [width, height] => {
                let width =
                    parse_dimension(width).ok_or_else(|| format!("Invalid width: {width}"))?;
                let height =
                    parse_dimension(height).ok_or_else(|| format!("Invalid height: {height}"))?;
                Ok((width, height))
            }
            _ => Err("Image dimensions require both a width and a height".to_owned()),
        }
    }
}

fn parse_dimension(field: &str) -> Option<usize> {
    field.parse::<usize>().ok().filter(|&value| value > 0)
}
