//! Colors
//!
//! Floating point working colors. Channels are nominally in `[0,1]` but
//! nothing is clamped until a color is materialized back into a pixel.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use crate::pixel::{Gray8, Rgb8, Rgba8};

/// Convert an f64 `[0,1]` component to a u8 `[0,255]` component
///
/// Clamps to `[0,1]`, scales by 255 and truncates toward zero. NaN maps
/// to 0.
pub fn cu8(v: f64) -> u8 {
    (unit(v) * 255.0).trunc() as u8
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.max(0.0).min(1.0)
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue, and Alpha in floating point
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ColorRgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorRgba {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    /// Create new opaque color
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
    /// Convert to luma / chroma using coefficients `k`
    pub fn to_ycbcr(&self, k: &LumaCoefficients) -> ColorYCbCrA {
        ColorYCbCrA::from_rgba(self, k)
    }
}

impl Add for ColorRgba {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.r + o.r, self.g + o.g, self.b + o.b, (self.a + o.a) / 2.0)
    }
}
impl Sub for ColorRgba {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.r - o.r, self.g - o.g, self.b - o.b, (self.a + o.a) / 2.0)
    }
}
impl Mul<f64> for ColorRgba {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self::new(k * self.r, k * self.g, k * self.b, self.a)
    }
}
impl Mul<ColorRgba> for f64 {
    type Output = ColorRgba;
    fn mul(self, c: ColorRgba) -> ColorRgba {
        c * self
    }
}
impl Div<f64> for ColorRgba {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.r / k, self.g / k, self.b / k, self.a)
    }
}
impl AddAssign for ColorRgba {
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}
impl SubAssign for ColorRgba {
    fn sub_assign(&mut self, o: Self) {
        *self = *self - o;
    }
}
impl MulAssign<f64> for ColorRgba {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl fmt::Display for ColorRgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RGBA({:.4}, {:.4}, {:.4}, {:.4})", self.r, self.g, self.b, self.a)
    }
}

impl From<Gray8> for ColorRgba {
    fn from(p: Gray8) -> Self {
        let v = color_u8_to_f64(p.value);
        Self::rgb(v, v, v)
    }
}
impl From<Rgb8> for ColorRgba {
    fn from(p: Rgb8) -> Self {
        Self::rgb(color_u8_to_f64(p.r), color_u8_to_f64(p.g), color_u8_to_f64(p.b))
    }
}
impl From<Rgba8> for ColorRgba {
    fn from(p: Rgba8) -> Self {
        Self::new(color_u8_to_f64(p.r), color_u8_to_f64(p.g),
                  color_u8_to_f64(p.b), color_u8_to_f64(p.a))
    }
}

impl From<ColorRgba> for Gray8 {
    /// Mean of the clamped and scaled red, green and blue
    fn from(c: ColorRgba) -> Self {
        let sum = unit(c.r) * 255.0 + unit(c.g) * 255.0 + unit(c.b) * 255.0;
        Gray8::new((sum / 3.0).trunc() as u8)
    }
}
impl From<ColorRgba> for Rgb8 {
    fn from(c: ColorRgba) -> Self {
        Rgb8::new(cu8(c.r), cu8(c.g), cu8(c.b))
    }
}
impl From<ColorRgba> for Rgba8 {
    fn from(c: ColorRgba) -> Self {
        Rgba8::new(cu8(c.r), cu8(c.g), cu8(c.b), cu8(c.a))
    }
}

/// Luma weights of red (`kr`) and blue (`kb`)
///
/// Green gets `1 - kr - kb`. The default pair is `kr = 0.299`,
/// `kb = 0.587`; note this is not the BT.601 pair, whose blue weight is
/// `0.114` (see [bt601]).
///
/// [bt601]: #method.bt601
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct LumaCoefficients {
    pub kr: f64,
    pub kb: f64,
}

impl Default for LumaCoefficients {
    fn default() -> Self {
        Self { kr: 0.299, kb: 0.587 }
    }
}

impl LumaCoefficients {
    pub fn new(kr: f64, kb: f64) -> Self {
        Self { kr, kb }
    }
    /// ITU-R BT.601 weights
    pub fn bt601() -> Self {
        Self { kr: 0.299, kb: 0.114 }
    }
    /// Weight of green
    pub fn kg(&self) -> f64 {
        1.0 - self.kr - self.kb
    }
}

/// Color as Luma, Blue and Red chroma, and Alpha
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ColorYCbCrA {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
    pub a: f64,
}

impl ColorYCbCrA {
    pub fn new(y: f64, cb: f64, cr: f64, a: f64) -> Self {
        Self { y, cb, cr, a }
    }
    /// Split `c` into luma and chroma with coefficients `k`
    pub fn from_rgba(c: &ColorRgba, k: &LumaCoefficients) -> Self {
        let y = k.kr * c.r + k.kg() * c.g + k.kb * c.b;
        let cb = (c.b - y) / (2.0 * (1.0 - k.kb));
        let cr = (c.r - y) / (2.0 * (1.0 - k.kr));
        Self::new(y, cb, cr, c.a)
    }
    /// Recombine into red, green and blue with coefficients `k`
    ///
    /// `k` must be the pair used to build this value for the conversion
    /// to round trip.
    pub fn to_rgba(&self, k: &LumaCoefficients) -> ColorRgba {
        let r = self.y + 2.0 * (1.0 - k.kr) * self.cr;
        let b = self.y + 2.0 * (1.0 - k.kb) * self.cb;
        let g = (self.y - k.kr * r - k.kb * b) / k.kg();
        ColorRgba::new(r, g, b, self.a)
    }
}

impl fmt::Display for ColorYCbCrA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "YCbCrA({:.4}, {:.4}, {:.4}, {:.4})", self.y, self.cb, self.cr, self.a)
    }
}
