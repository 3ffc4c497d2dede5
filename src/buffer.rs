//! Pixel buffer
//!
//! A rectangular grid of raw byte-encoded pixels together with a tag
//! stating who is responsible for releasing the underlying storage.

use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Routine releasing externally allocated storage
pub type Release = Box<dyn FnOnce(Vec<u8>) + Send>;

/// Party responsible for releasing the storage of a [PixelBuffer]
///
/// [PixelBuffer]: struct.PixelBuffer.html
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Ownership {
    /// No storage is held
    Unowned,
    /// Storage allocated by this crate
    HeapOwned,
    /// Storage allocated elsewhere, released through its own routine
    ExternallyOwned,
}

enum Storage {
    Unowned,
    Heap(Vec<u8>),
    External { data: Vec<u8>, release: Release },
}

impl Storage {
    fn bytes(&self) -> &[u8] {
        match self {
            Storage::Unowned => &[],
            Storage::Heap(data) => data,
            Storage::External { data, .. } => data,
        }
    }
    fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Storage::Unowned => &mut [],
            Storage::Heap(data) => data,
            Storage::External { data, .. } => data,
        }
    }
}

/// Pixel Buffer
///
/// Data is stored as row-major order (C-format), `channels` bytes per pixel.
///
/// Exactly one buffer owns a given block of storage. Cloning always
/// produces an independent heap copy, [take] hands the storage over and
/// leaves the source empty, and the storage is released once, either by
/// [destroy] or when the buffer is dropped.
///
/// [take]: #method.take
/// [destroy]: #method.destroy
pub struct PixelBuffer {
    storage: Storage,
    width: usize,
    height: usize,
    channels: usize,
}

fn byte_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    let invalid = Error::InvalidDimension { width, height, channels };
    if width == 0 || height == 0 || channels == 0 {
        return Err(invalid);
    }
    width.checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(invalid)
}

impl PixelBuffer {
    /// Create a new zero filled buffer of width, height and channels
    ///
    /// Any zero dimension fails with `InvalidDimension` before anything
    /// is allocated.
    ///
    ///     use rasterkit::{PixelBuffer, Ownership};
    ///
    ///     let buf = PixelBuffer::new(4, 2, 3).unwrap();
    ///     assert_eq!(buf.len(), 24);
    ///     assert_eq!(buf.ownership(), Ownership::HeapOwned);
    ///     assert!(PixelBuffer::new(0, 2, 3).is_err());
    ///
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let n = byte_len(width, height, channels)?;
        debug!("allocate {} x {} x {} buffer", width, height, channels);
        Ok(Self { storage: Storage::Heap(vec![0u8; n]), width, height, channels })
    }

    /// Wrap storage allocated outside of this crate
    ///
    /// `release` is called with the storage exactly once, when the buffer
    /// is destroyed. If the dimensions are invalid or do not describe
    /// `data`, the storage is released immediately and the construction
    /// fails with `InvalidDimension`.
    pub fn from_external<F>(data: Vec<u8>, width: usize, height: usize, channels: usize,
                            release: F) -> Result<Self>
        where F: FnOnce(Vec<u8>) + Send + 'static
    {
        match byte_len(width, height, channels) {
            Ok(n) if n == data.len() => {
                let release : Release = Box::new(release);
                Ok(Self { storage: Storage::External { data, release }, width, height, channels })
            },
            _ => {
                release(data);
                Err(Error::InvalidDimension { width, height, channels })
            }
        }
    }

    /// Move the storage out into a new buffer
    ///
    /// The ownership tag travels with the storage; no bytes are copied.
    /// `self` is left empty and `Unowned`.
    ///
    ///     use rasterkit::{PixelBuffer, Ownership};
    ///
    ///     let mut a = PixelBuffer::new(2, 2, 1).unwrap();
    ///     let b = a.take();
    ///     assert_eq!(b.ownership(), Ownership::HeapOwned);
    ///     assert_eq!(a.ownership(), Ownership::Unowned);
    ///     assert!(a.is_empty());
    ///
    pub fn take(&mut self) -> PixelBuffer {
        let empty = PixelBuffer {
            storage: Storage::Unowned, width: 0, height: 0, channels: self.channels,
        };
        std::mem::replace(self, empty)
    }

    /// Release the storage according to its ownership tag
    ///
    /// Afterwards the buffer is empty and `Unowned`; calling it again is a
    /// no-op.
    pub fn destroy(&mut self) {
        match std::mem::replace(&mut self.storage, Storage::Unowned) {
            Storage::Unowned => {},
            Storage::Heap(data) => {
                trace!("release heap storage of {} bytes", data.len());
                drop(data);
            },
            Storage::External { data, release } => {
                trace!("release external storage of {} bytes", data.len());
                release(data);
            },
        }
        self.width = 0;
        self.height = 0;
    }

    /// Current ownership tag
    pub fn ownership(&self) -> Ownership {
        match self.storage {
            Storage::Unowned => Ownership::Unowned,
            Storage::Heap(_) => Ownership::HeapOwned,
            Storage::External { .. } => Ownership::ExternallyOwned,
        }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Bytes per pixel, or number of color components
    pub fn channels(&self) -> usize {
        self.channels
    }
    /// Size of underlying storage in bytes; width * height * channels
    pub fn len(&self) -> usize {
        self.storage.bytes().len()
    }
    /// True once the storage has been moved out or released
    pub fn is_empty(&self) -> bool {
        self.ownership() == Ownership::Unowned
    }
    /// Raw pixel data, row-major
    pub fn data(&self) -> &[u8] {
        self.storage.bytes()
    }
    /// Mutable raw pixel data, row-major
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.storage.bytes_mut()
    }

    fn offset(&self, x: i64, y: i64) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::Unowned);
        }
        if x < 0 || x as u64 >= self.width as u64 || y < 0 || y as u64 >= self.height as u64 {
            return Err(Error::OutOfRange { x, y, width: self.width, height: self.height });
        }
        Ok((y as usize * self.width + x as usize) * self.channels)
    }

    /// Bytes of the pixel at (`x`,`y`), `channels` long
    ///
    /// Coordinates outside of the buffer fail with `OutOfRange`; there is
    /// no clamping at this level.
    pub fn at(&self, x: i64, y: i64) -> Result<&[u8]> {
        let i = self.offset(x, y)?;
        Ok(&self.storage.bytes()[i .. i + self.channels])
    }
    /// Mutable bytes of the pixel at (`x`,`y`), `channels` long
    pub fn at_mut(&mut self, x: i64, y: i64) -> Result<&mut [u8]> {
        let i = self.offset(x, y)?;
        let n = self.channels;
        Ok(&mut self.storage.bytes_mut()[i .. i + n])
    }
}

impl Clone for PixelBuffer {
    /// Deep copy into a fresh `HeapOwned` buffer, whatever the source tag
    fn clone(&self) -> Self {
        let storage = match self.storage {
            Storage::Unowned => Storage::Unowned,
            _ => Storage::Heap(self.storage.bytes().to_vec()),
        };
        Self { storage, width: self.width, height: self.height, channels: self.channels }
    }
}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("ownership", &self.ownership())
            .finish()
    }
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.channels;
        &self.storage.bytes()[i .. i + self.channels]
    }
}
impl IndexMut<(usize,usize)> for PixelBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.channels;
        let n = self.channels;
        &mut self.storage.bytes_mut()[i .. i + n]
    }
}
