//! Anti-aliased thick lines
//!
//! A generalization of [Xiaolin Wu's line algorithm] to lines wider than
//! a pixel. Every column along the major axis gets a band of `w` pixels:
//! the leading edge weighted by `rfpart`, full coverage inside, and the
//! trailing edge weighted by `fpart` of the exact intersection.
//!
//! [Xiaolin Wu's line algorithm]: https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm

use log::warn;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::math::{fpart, ipart, rfpart, round};
use crate::pixel::Pixel;
use crate::pixfmt::Pixfmt;

/// How a coverage-weighted color is written into a pixel
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PlotMode {
    /// Overwrite the pixel with `color * coverage`
    Replace,
    /// Mix `color * coverage` into the pixel with the given factor in `[0,1]`
    ///
    /// `new = color * coverage * k + current * (1 - k)`
    Blend(f32),
}

impl Default for PlotMode {
    fn default() -> Self {
        PlotMode::Replace
    }
}

/// Band width, in minor axis pixels, giving a perpendicular thickness of
/// `thickness` at slope `gradient`
///
/// Never narrower than the 1 pixel core; non-positive and NaN thickness
/// collapse to it.
fn band_width(thickness: f32, gradient: f32) -> f32 {
    if !(thickness > 0.0) {
        return 1.0;
    }
    (thickness * (1.0 + gradient * gradient).sqrt()).max(1.0)
}

impl<'a, T: Pixel> Pixfmt<'a, T> {
    fn plot_mode(&mut self, steep: bool, x: f32, y: f32, c: T, mode: PlotMode) {
        let (x, y) = if steep { (y, x) } else { (x, y) };
        match mode {
            PlotMode::Replace => self.plot(x, y, c),
            PlotMode::Blend(k) => self.plot_blend(x, y, c, k),
        }
    }

    /// One major axis column: edges weighted by coverage, interior solid
    fn plot_band(&mut self, steep: bool, x: f32, y: f32, w: f32, c: T, mode: PlotMode) {
        let top = ipart(y);
        self.plot_mode(steep, x, top, c * rfpart(y), mode);
        let mut i = 1.0;
        while i < ipart(w) {
            self.plot_mode(steep, x, top + i, c * 1.0, mode);
            i += 1.0;
        }
        self.plot_mode(steep, x, top + ipart(w), c * fpart(y), mode);
    }

    /// Draw an anti-aliased line from (`x0`,`y0`) to (`x1`,`y1`)
    ///
    /// `thickness` is measured perpendicular to the line. Pixels outside of
    /// the buffer are clamped onto its edge rather than skipped. Drawing
    /// is independent of the endpoint order.
    ///
    ///     use rasterkit::{PixelBuffer, PlotMode, Rgb8};
    ///
    ///     let mut buf = PixelBuffer::new(8, 8, 3).unwrap();
    ///     let mut pix = buf.pixfmt::<Rgb8>().unwrap();
    ///     pix.draw_line(0.0, 4.0, 7.0, 4.0, Rgb8::white(), 1.0, PlotMode::Replace);
    ///     assert_eq!(pix.get(3, 4).unwrap(), Rgb8::white());
    ///     assert_eq!(pix.get(3, 3).unwrap(), Rgb8::black());
    ///
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32,
                     c: T, thickness: f32, mode: PlotMode) {
        if let PlotMode::Blend(k) = mode {
            if !(k >= 0.0 && k <= 1.0) {
                warn!("blend factor {} outside of [0,1], clamping", k);
            }
        }
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (x0,y0,x1,y1) = if steep   { (y0,x0,y1,x1) } else { (x0,y0,x1,y1) };
        let (x0,y0,x1,y1) = if x0 > x1 { (x1,y1,x0,y0) } else { (x0,y0,x1,y1) };

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx == 0.0 { 1.0 } else { dy / dx };
        let w = band_width(thickness, gradient);
        let half = (w - 1.0) / 2.0;

        // First endpoint
        let xpxl1 = round(x0);
        let yend = y0 - half + gradient * (xpxl1 - x0);
        self.plot_band(steep, xpxl1, yend, w, c, mode);
        let mut intery = yend + gradient;

        // Second endpoint
        let xpxl2 = round(x1);
        let yend = y1 - half + gradient * (xpxl2 - x1);
        self.plot_band(steep, xpxl2, yend, w, c, mode);

        // In Between Points
        let mut x = xpxl1 + 1.0;
        while x <= xpxl2 - 1.0 {
            self.plot_band(steep, x, intery, w, c, mode);
            intery += gradient;
            x += 1.0;
        }
    }

    /// Blend an anti-aliased line into the buffer with factor `k`
    pub fn add_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32,
                    c: T, thickness: f32, k: f32) {
        self.draw_line(x0, y0, x1, y1, c, thickness, PlotMode::Blend(k));
    }
}

/// Draw an anti-aliased line into `buf`, reading its bytes as pixels of kind `T`
///
/// Fails only when `buf` cannot be viewed as `T` (`FormatMismatch` or
/// `Unowned`); the drawing itself never fails.
pub fn draw_line<T: Pixel>(buf: &mut PixelBuffer,
                           x0: f32, y0: f32, x1: f32, y1: f32,
                           c: T, thickness: f32, mode: PlotMode) -> Result<()> {
    let mut pix = Pixfmt::<T>::new(buf)?;
    pix.draw_line(x0, y0, x1, y1, c, thickness, mode);
    Ok(())
}

/// Blend an anti-aliased line into `buf` with factor `k`
pub fn add_line<T: Pixel>(buf: &mut PixelBuffer,
                          x0: f32, y0: f32, x1: f32, y1: f32,
                          c: T, thickness: f32, k: f32) -> Result<()> {
    draw_line(buf, x0, y0, x1, y1, c, thickness, PlotMode::Blend(k))
}
