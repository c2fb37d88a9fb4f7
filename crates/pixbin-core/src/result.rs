use crate::error::PixbinError;

/// result type alias with the crate error baked in
pub type Result<T> = std::result::Result<T, PixbinError>;
