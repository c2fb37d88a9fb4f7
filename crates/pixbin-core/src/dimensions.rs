use crate::error::PixbinError;
use crate::result::Result;

/// Layout of a byte stream on a width x height pixel grid, three bytes
/// per pixel. The grid usually offers more slots than the payload
/// fills; the surplus is tracked as `padding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
}

impl ImageDimensions {
    /// Computes the smallest square-biased grid able to hold
    /// `byte_count` bytes: width is the least integer whose square
    /// reaches the pixel count, height the least integer that makes
    /// `width * height` reach it.
    pub fn for_byte_count(byte_count: usize) -> Result<Self> {
        if byte_count == 0 {
            return Err(PixbinError::InvalidByteCount);
        }

        let pixel_count = byte_count.div_ceil(3);

        // f64 sqrt may land just under the integer root, so nudge up
        let mut width = (pixel_count as f64).sqrt() as usize;
        if width * width < pixel_count {
            width += 1;
        }
        let height = pixel_count.div_ceil(width);

        Ok(Self {
            width,
            height,
            padding: width * height * 3 - byte_count,
        })
    }

    /// capacity of the grid, payload plus padding
    pub fn total_bytes(&self) -> usize {
        self.width * self.height * 3
    }
}
