//! Reading and writing of image files
//!
//! The bitstream work is done by the [image] crate; this module only moves
//! pixel bytes between it and a [PixelBuffer].
//!
//! [image]: https://docs.rs/image
//! [PixelBuffer]: ../buffer/struct.PixelBuffer.html

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, DynamicImage};
use log::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Output file format
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics, lossless
    Png,
    /// JPEG with quality in `[1,100]`
    Jpeg(u8),
}

impl ImageFormat {
    /// JPEG at full quality
    pub fn jpeg() -> Self {
        ImageFormat::Jpeg(100)
    }
}

fn color_type(channels: usize) -> Option<ColorType> {
    match channels {
        1 => Some(ColorType::Gray(8)),
        2 => Some(ColorType::GrayA(8)),
        3 => Some(ColorType::RGB(8)),
        4 => Some(ColorType::RGBA(8)),
        _ => None,
    }
}

/// Load the image at `path` into a new `ExternallyOwned` buffer
///
/// `desired_channels` selects gray (1), gray + alpha (2), RGB (3) or
/// RGBA (4); 0 keeps the channel layout of the file. Anything else fails
/// with `UnsupportedChannels` before the file is read.
pub fn decode<P: AsRef<Path>>(path: P, desired_channels: usize) -> Result<PixelBuffer> {
    let path = path.as_ref();
    if desired_channels > 4 {
        return Err(Error::UnsupportedChannels { channels: desired_channels });
    }
    let img = image::open(path)
        .map_err(|source| Error::DecodeFailure { path: path.to_path_buf(), source })?;
    let channels = match desired_channels {
        0 => match img {
            DynamicImage::ImageLuma8(_) => 1,
            DynamicImage::ImageLumaA8(_) => 2,
            DynamicImage::ImageRgb8(_) => 3,
            _ => 4,
        },
        n => n,
    };
    let (data, w, h) = match channels {
        1 => { let b = img.to_luma();       let (w,h) = b.dimensions(); (b.into_raw(), w, h) },
        2 => { let b = img.to_luma_alpha(); let (w,h) = b.dimensions(); (b.into_raw(), w, h) },
        3 => { let b = img.to_rgb();        let (w,h) = b.dimensions(); (b.into_raw(), w, h) },
        _ => { let b = img.to_rgba();       let (w,h) = b.dimensions(); (b.into_raw(), w, h) },
    };
    debug!("decoded {}: {} x {} x {}", path.display(), w, h, channels);
    PixelBuffer::from_external(data, w as usize, h as usize, channels, |data| {
        trace!("free decoded pixels, {} bytes", data.len());
    })
}

/// Write `buf` to `path` as `format`
pub fn encode<P: AsRef<Path>>(path: P, format: ImageFormat, buf: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    if buf.is_empty() {
        return Err(Error::Unowned);
    }
    let color = color_type(buf.channels()).ok_or(Error::InvalidDimension {
        width: buf.width(), height: buf.height(), channels: buf.channels()
    })?;
    let (w, h) = (buf.width() as u32, buf.height() as u32);
    let fail = |source: std::io::Error| Error::EncodeFailure { path: path.to_path_buf(), source };

    let mut out = BufWriter::new(File::create(path).map_err(fail)?);
    match format {
        ImageFormat::Png => {
            image::png::PNGEncoder::new(&mut out)
                .encode(buf.data(), w, h, color)
                .map_err(fail)?;
        },
        ImageFormat::Jpeg(quality) => {
            image::jpeg::JPEGEncoder::new_with_quality(&mut out, quality.max(1).min(100))
                .encode(buf.data(), w, h, color)
                .map_err(fail)?;
        },
    }
    out.flush().map_err(fail)?;
    debug!("encoded {} as {:?}: {} x {} x {}", path.display(), format, w, h, buf.channels());
    Ok(())
}

impl PixelBuffer {
    /// Load an image file; see [decode](fn.decode.html)
    pub fn open<P: AsRef<Path>>(path: P, desired_channels: usize) -> Result<Self> {
        decode(path, desired_channels)
    }
    /// Save as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        encode(path, ImageFormat::Png, self)
    }
    /// Save as JPEG with `quality` in `[1,100]`
    pub fn save_jpg<P: AsRef<Path>>(&self, path: P, quality: u8) -> Result<()> {
        encode(path, ImageFormat::Jpeg(quality), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_types() {
        assert_eq!(color_type(1), Some(ColorType::Gray(8)));
        assert_eq!(color_type(4), Some(ColorType::RGBA(8)));
        assert_eq!(color_type(5), None);
    }

    #[test]
    fn missing_file_is_decode_failure() {
        let path = std::env::temp_dir().join("rasterkit-does-not-exist.png");
        match decode(&path, 3) {
            Err(Error::DecodeFailure { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected DecodeFailure, got {:?}", other),
        }
    }
}
