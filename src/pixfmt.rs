//! Pixel Format
//!
//! Typed access to the raw bytes of a [PixelBuffer]. A view is only handed
//! out once the buffer channel count matches the byte width of the
//! requested [Pixel] kind.
//!
//! [PixelBuffer]: ../buffer/struct.PixelBuffer.html
//! [Pixel]: ../pixel/trait.Pixel.html

use std::marker::PhantomData;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::math::clamp_index;
use crate::pixel::Pixel;

fn check_format<T: Pixel>(rbuf: &PixelBuffer) -> Result<()> {
    if rbuf.is_empty() {
        return Err(Error::Unowned);
    }
    if rbuf.channels() != T::bpp() {
        return Err(Error::FormatMismatch { expected: T::bpp(), channels: rbuf.channels() });
    }
    Ok(())
}

/// Pixel Format Wrapper around raw pixel component data
///
///     use rasterkit::{PixelBuffer, Pixfmt, Rgb8, Rgba8};
///
///     let mut buf = PixelBuffer::new(2, 2, 3).unwrap();
///     assert!(Pixfmt::<Rgba8>::new(&mut buf).is_err());
///
///     let mut pix = Pixfmt::<Rgb8>::new(&mut buf).unwrap();
///     pix.set(1, 0, Rgb8::white()).unwrap();
///     assert_eq!(pix.get(1, 0).unwrap(), Rgb8::white());
///
pub struct Pixfmt<'a, T> {
    rbuf: &'a mut PixelBuffer,
    phantom: PhantomData<T>,
}

impl<'a, T: Pixel> Pixfmt<'a, T> {
    /// Wrap `rbuf`, failing with `FormatMismatch` if its channel count is
    /// not `T::bpp()`, or `Unowned` if it holds no storage
    pub fn new(rbuf: &'a mut PixelBuffer) -> Result<Self> {
        check_format::<T>(rbuf)?;
        Ok(Self { rbuf, phantom: PhantomData })
    }
    /// Width of rendering buffer in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width()
    }
    /// Height of rendering buffer in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height()
    }
    /// Pixel at (`x`,`y`); fails with `OutOfRange` outside of the buffer
    pub fn get(&self, x: i64, y: i64) -> Result<T> {
        self.rbuf.at(x, y).map(T::from_slice)
    }
    /// Overwrite the pixel at (`x`,`y`); fails with `OutOfRange` outside of the buffer
    pub fn set(&mut self, x: i64, y: i64, c: T) -> Result<()> {
        c.to_slice(self.rbuf.at_mut(x, y)?);
        Ok(())
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: T) {
        for p in self.rbuf.data_mut().chunks_exact_mut(T::bpp()) {
            c.to_slice(p);
        }
    }
    /// Replace every pixel `p` with `f(p)`
    ///
    ///     use rasterkit::{PixelBuffer, Pixfmt, Gray8};
    ///
    ///     let mut buf = PixelBuffer::new(3, 1, 1).unwrap();
    ///     let mut pix = Pixfmt::<Gray8>::new(&mut buf).unwrap();
    ///     pix.fill(Gray8::new(100));
    ///     pix.map(|p| p * 0.5);
    ///     assert_eq!(buf.data(), &[50, 50, 50]);
    ///
    pub fn map<F>(&mut self, mut f: F) where F: FnMut(T) -> T {
        for p in self.rbuf.data_mut().chunks_exact_mut(T::bpp()) {
            f(T::from_slice(p)).to_slice(p);
        }
    }
    fn clamp(&self, x: f32, y: f32) -> (usize, usize) {
        (clamp_index(x, self.width()), clamp_index(y, self.height()))
    }
    /// Overwrite the pixel nearest to (`x`,`y`) with `c`
    ///
    /// Coordinates are rounded half up and clamped into the buffer, so
    /// anything outside lands on the nearest edge pixel.
    pub fn plot(&mut self, x: f32, y: f32, c: T) {
        let id = self.clamp(x, y);
        c.to_slice(&mut self.rbuf[id]);
    }
    /// Mix `c` into the pixel nearest to (`x`,`y`)
    ///
    /// The new value is `c * k + current * (1 - k)` per channel, see
    /// [Pixel::blend](../pixel/trait.Pixel.html#method.blend). `k` is clamped to `[0,1]`. Coordinates are
    /// handled as in [plot].
    ///
    /// [plot]: #method.plot
    pub fn plot_blend(&mut self, x: f32, y: f32, c: T, k: f32) {
        let k = if k.is_nan() { 0.0 } else { k.max(0.0).min(1.0) };
        let id = self.clamp(x, y);
        let cur = T::from_slice(&self.rbuf[id]);
        let pix = c.blend(cur, k);
        pix.to_slice(&mut self.rbuf[id]);
    }
}

impl PixelBuffer {
    /// Typed view of this buffer as pixels of kind `T`
    pub fn pixfmt<T: Pixel>(&mut self) -> Result<Pixfmt<T>> {
        Pixfmt::new(self)
    }
    /// Read the pixel at (`x`,`y`) as kind `T`
    pub fn pixel<T: Pixel>(&self, x: i64, y: i64) -> Result<T> {
        check_format::<T>(self)?;
        self.at(x, y).map(T::from_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Gray8, Rgb8, Rgba8};

    #[test]
    fn format_is_checked() {
        let mut buf = PixelBuffer::new(4, 4, 3).unwrap();
        assert!(Pixfmt::<Rgb8>::new(&mut buf).is_ok());
        match Pixfmt::<Rgba8>::new(&mut buf) {
            Err(Error::FormatMismatch { expected: 4, channels: 3 }) => {},
            other => panic!("expected FormatMismatch, got {:?}", other.err()),
        }
        assert!(matches!(buf.pixel::<Gray8>(0, 0), Err(Error::FormatMismatch { .. })));
        buf.destroy();
        assert!(matches!(buf.pixfmt::<Rgb8>(), Err(Error::Unowned)));
    }

    #[test]
    fn get_set_are_bounds_checked() {
        let mut buf = PixelBuffer::new(2, 3, 4).unwrap();
        let mut pix = buf.pixfmt::<Rgba8>().unwrap();
        let c = Rgba8::new(1,2,3,4);
        pix.set(1, 2, c).unwrap();
        assert_eq!(pix.get(1, 2).unwrap(), c);
        assert!(matches!(pix.set(2, 0, c), Err(Error::OutOfRange { .. })));
        assert!(matches!(pix.get(0, -1), Err(Error::OutOfRange { .. })));
        assert_eq!(buf.pixel::<Rgba8>(1, 2).unwrap(), c);
    }

    #[test]
    fn plot_clamps_to_edges() {
        let mut buf = PixelBuffer::new(5, 4, 3).unwrap();
        let mut pix = buf.pixfmt::<Rgb8>().unwrap();
        pix.plot(-10.0, -10.0, Rgb8::new(1,0,0));
        pix.plot(100.0, 1.2, Rgb8::new(2,0,0));
        pix.plot(2.5, 99.0, Rgb8::new(3,0,0));
        assert_eq!(pix.get(0, 0).unwrap(), Rgb8::new(1,0,0));
        assert_eq!(pix.get(4, 1).unwrap(), Rgb8::new(2,0,0));
        assert_eq!(pix.get(3, 3).unwrap(), Rgb8::new(3,0,0));
    }

    #[test]
    fn plot_blend_mixes() {
        let mut buf = PixelBuffer::new(1, 1, 3).unwrap();
        let mut pix = buf.pixfmt::<Rgb8>().unwrap();
        pix.fill(Rgb8::new(100, 200, 0));
        pix.plot_blend(0.0, 0.0, Rgb8::new(200, 0, 100), 0.5);
        assert_eq!(pix.get(0, 0).unwrap(), Rgb8::new(150, 100, 50));
        pix.plot_blend(0.0, 0.0, Rgb8::white(), 0.0);
        assert_eq!(pix.get(0, 0).unwrap(), Rgb8::new(150, 100, 50));
        pix.plot_blend(0.0, 0.0, Rgb8::new(9, 8, 7), 3.0);
        assert_eq!(pix.get(0, 0).unwrap(), Rgb8::new(9, 8, 7));
    }
}
