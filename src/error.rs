//! Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by buffers, typed views and the codec gateway
#[derive(Error, Debug)]
pub enum Error {
    /// Width, height or channel count is zero, or the byte size overflows
    #[error("invalid dimensions {width} x {height} x {channels}")]
    InvalidDimension {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Element access outside of `[0,width) x [0,height)`
    #[error("({x}, {y}) is out of range for a {width} x {height} buffer")]
    OutOfRange {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Decode asked for a channel layout other than 0 (native) to 4
    #[error("cannot decode into {channels} channels, expected 0 to 4")]
    UnsupportedChannels { channels: usize },

    /// Pixel kind byte width disagrees with the buffer channel count
    #[error("pixel format needs {expected} channels, buffer has {channels}")]
    FormatMismatch { expected: usize, channels: usize },

    /// Buffer was moved from or destroyed and holds no storage
    #[error("buffer holds no storage")]
    Unowned,

    /// Codec could not produce pixel data
    #[error("cannot load image {}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Codec could not write pixel data
    #[error("cannot save image {}", .path.display())]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = Error::InvalidDimension { width: 0, height: 4, channels: 3 };
        assert_eq!(err.to_string(), "invalid dimensions 0 x 4 x 3");

        let err = Error::OutOfRange { x: -1, y: 2, width: 4, height: 4 };
        assert_eq!(err.to_string(), "(-1, 2) is out of range for a 4 x 4 buffer");

        let err = Error::FormatMismatch { expected: 4, channels: 3 };
        assert!(err.to_string().contains("needs 4"));

        let err = Error::UnsupportedChannels { channels: 7 };
        assert_eq!(err.to_string(), "cannot decode into 7 channels, expected 0 to 4");
    }
}
