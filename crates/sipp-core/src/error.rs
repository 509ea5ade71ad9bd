//! Error type shared by the image containers and pixel sources.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Bit depth other than 8 or 16
    #[error("unsupported bit depth {0}; expected 8 or 16")]
    InvalidDepth(u32),

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("bad argument: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A rendering could not be stored by an image sink
    #[error("could not store rendering: {0}")]
    EncodeError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
