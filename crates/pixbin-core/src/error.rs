use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixbinError {
    /// Represents a byte count the dimension calculator cannot place, i.e. zero
    #[error("Invalid byte count, a positive number of bytes is required")]
    InvalidByteCount,

    /// Represents a document that does not open with the `P3` magic token
    #[error("Invalid PPM format")]
    InvalidMagic,

    /// Represents a dimension line that does not hold exactly two fields
    #[error("Invalid PPM dimensions")]
    InvalidDimensions,

    /// Represents a max color value line other than `255`
    #[error("Invalid PPM max color value")]
    InvalidMaxValue,

    /// Represents a payload line that is not an integer within [0, 255]
    #[error("Invalid pixel value: {0}")]
    InvalidPixelValue(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write to the output sink.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
