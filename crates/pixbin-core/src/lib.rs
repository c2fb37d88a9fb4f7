//! # Pixbin Core API
//!
//! Stores arbitrary binary data inside plain-text PPM (P3) images, one
//! decimal channel value per input byte. The "image" is a serialization
//! container rather than visual data, so the two codec halves are exact
//! inverses of each other regardless of the dimensions declared in the
//! header. [`ImageDimensions`] plans a square-ish grid with the padding
//! a given byte count needs.
//!
//! # Usage Examples
//!
//! ## Round-trip a payload through a PPM document
//!
//! ```rust
//! use pixbin_core::{ImageDimensions, PpmDecoder, PpmEncoder};
//!
//! let payload: &[u8] = &[0, 128, 255];
//! let dimensions = ImageDimensions::for_byte_count(payload.len())
//!     .expect("payload is not empty");
//!
//! let mut document = Vec::new();
//! PpmEncoder::new(dimensions.width, dimensions.height)
//!     .encode(payload, &mut document)
//!     .expect("Failed to encode payload");
//!
//! let mut restored = Vec::new();
//! PpmDecoder::decode(document.as_slice(), &mut restored)
//!     .expect("Failed to decode document");
//!
//! assert_eq!(restored, payload);
//! ```
//!
//! ## Plan the grid for a byte count
//!
//! ```rust
//! use pixbin_core::ImageDimensions;
//!
//! let dimensions = ImageDimensions::for_byte_count(10).unwrap();
//! assert_eq!((dimensions.width, dimensions.height), (2, 2));
//! assert_eq!(dimensions.padding, 2);
//! assert_eq!(dimensions.total_bytes(), 12);
//! ```

pub mod commands;
pub mod decoder;
pub mod dimensions;
pub mod encoder;
pub mod error;
pub mod result;

pub use crate::decoder::PpmDecoder;
pub use crate::dimensions::ImageDimensions;
pub use crate::encoder::PpmEncoder;
pub use crate::error::PixbinError;
pub use crate::result::Result;

/// magic token opening every plain-text PPM document
pub const PPM_MAGIC: &str = "P3";

/// the only supported maximum channel value, one byte per pixel slot
pub const PPM_MAX_VALUE: &str = "255";

/// grid declared by the encoder when the caller supplies no dimensions
pub const DEFAULT_WIDTH: usize = 32;
pub const DEFAULT_HEIGHT: usize = 32;
