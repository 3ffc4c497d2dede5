//! Pixel formats
//!
//! Fixed 8-bit per channel encodings stored in a [PixelBuffer].
//!
//! Arithmetic saturates every channel to `[0,255]`. Adding or subtracting
//! two [Rgba8] pixels averages their alpha instead of summing it; alpha
//! there stands for blending confidence, not coverage to be composited.
//!
//! [PixelBuffer]: ../buffer/struct.PixelBuffer.html
//! [Rgba8]: struct.Rgba8.html

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

/// Pixel kind that can be read from and written to raw buffer bytes
pub trait Pixel: Copy + Debug + PartialEq
    + Add<Output=Self> + Sub<Output=Self>
    + Mul<f32, Output=Self> + Div<f32, Output=Self>
{
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Decode from the first `bpp()` bytes of `p`
    fn from_slice(p: &[u8]) -> Self;
    /// Encode into the first `bpp()` bytes of `p`
    fn to_slice(&self, p: &mut [u8]);
    /// Interpolate from `cur` toward `self` by `k` in `[0,1]`
    ///
    /// `k = 0` returns `cur` and `k = 1` returns `self` unchanged.
    fn blend(self, cur: Self, k: f32) -> Self {
        self * k + cur * (1.0 - k)
    }
}

/// Clamp a widened channel into `[0,255]`
fn saturate(v: i32) -> u8 {
    v.max(0).min(255) as u8
}

/// Clamp a scaled channel into `[0,255]` then truncate toward zero
///
/// NaN maps to 0.
pub(crate) fn truncate_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.max(0.0).min(255.0).trunc() as u8
}

fn sat_add(a: u8, b: u8) -> u8 {
    saturate(i32::from(a) + i32::from(b))
}
fn sat_sub(a: u8, b: u8) -> u8 {
    saturate(i32::from(a) - i32::from(b))
}
fn scale(a: u8, k: f32) -> u8 {
    truncate_u8(f32::from(a) * k)
}
fn unscale(a: u8, k: f32) -> u8 {
    truncate_u8(f32::from(a) / k)
}
fn mean(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}

/// Gray scale
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Gray8 {
    pub value: u8,
}

impl Gray8 {
    /// Create a new gray scale value
    pub fn new(value: u8) -> Self {
        Self { value }
    }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Color components without alpha
    pub fn rgb(&self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        c.rgb()
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}

impl Pixel for Gray8 {
    fn bpp() -> usize { 1 }
    fn from_slice(p: &[u8]) -> Self {
        Gray8::new(p[0])
    }
    fn to_slice(&self, p: &mut [u8]) {
        p[0] = self.value;
    }
}
impl Pixel for Rgb8 {
    fn bpp() -> usize { 3 }
    fn from_slice(p: &[u8]) -> Self {
        Rgb8::new(p[0],p[1],p[2])
    }
    fn to_slice(&self, p: &mut [u8]) {
        p[0] = self.r;
        p[1] = self.g;
        p[2] = self.b;
    }
}
impl Pixel for Rgba8 {
    fn bpp() -> usize { 4 }
    fn from_slice(p: &[u8]) -> Self {
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
    fn to_slice(&self, p: &mut [u8]) {
        p[0] = self.r;
        p[1] = self.g;
        p[2] = self.b;
        p[3] = self.a;
    }
    fn blend(self, cur: Self, k: f32) -> Self {
        // `+` averages alpha, so interpolate it on its own
        let mut p = self * k + cur * (1.0 - k);
        p.a = truncate_u8(f32::from(self.a) * k + f32::from(cur.a) * (1.0 - k));
        p
    }
}

// Gray8

impl Add for Gray8 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Gray8::new(sat_add(self.value, o.value))
    }
}
impl Sub for Gray8 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Gray8::new(sat_sub(self.value, o.value))
    }
}
impl Mul<f32> for Gray8 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        Gray8::new(scale(self.value, k))
    }
}
impl Div<f32> for Gray8 {
    type Output = Self;
    fn div(self, k: f32) -> Self {
        Gray8::new(unscale(self.value, k))
    }
}

// Rgb8

impl Add for Rgb8 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Rgb8::new(sat_add(self.r, o.r), sat_add(self.g, o.g), sat_add(self.b, o.b))
    }
}
impl Sub for Rgb8 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Rgb8::new(sat_sub(self.r, o.r), sat_sub(self.g, o.g), sat_sub(self.b, o.b))
    }
}
impl Mul<f32> for Rgb8 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        Rgb8::new(scale(self.r, k), scale(self.g, k), scale(self.b, k))
    }
}
impl Div<f32> for Rgb8 {
    type Output = Self;
    fn div(self, k: f32) -> Self {
        Rgb8::new(unscale(self.r, k), unscale(self.g, k), unscale(self.b, k))
    }
}

// Rgba8: alpha is averaged on add/sub and left alone on scaling

impl Add for Rgba8 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        let c = self.rgb() + o.rgb();
        Rgba8::new(c.r, c.g, c.b, mean(self.a, o.a))
    }
}
impl Sub for Rgba8 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        let c = self.rgb() - o.rgb();
        Rgba8::new(c.r, c.g, c.b, mean(self.a, o.a))
    }
}
impl Mul<f32> for Rgba8 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        let c = self.rgb() * k;
        Rgba8::new(c.r, c.g, c.b, self.a)
    }
}
impl Div<f32> for Rgba8 {
    type Output = Self;
    fn div(self, k: f32) -> Self {
        let c = self.rgb() / k;
        Rgba8::new(c.r, c.g, c.b, self.a)
    }
}

macro_rules! assign_ops {
    ($($t:ty),*) => {
        $(
            impl AddAssign for $t {
                fn add_assign(&mut self, o: Self) {
                    *self = *self + o;
                }
            }
            impl SubAssign for $t {
                fn sub_assign(&mut self, o: Self) {
                    *self = *self - o;
                }
            }
            impl MulAssign<f32> for $t {
                fn mul_assign(&mut self, k: f32) {
                    *self = *self * k;
                }
            }
            impl Mul<$t> for f32 {
                type Output = $t;
                fn mul(self, p: $t) -> $t {
                    p * self
                }
            }
        )*
    }
}

assign_ops!(Gray8, Rgb8, Rgba8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_saturate() {
        assert_eq!(Rgb8::white() + Rgb8::new(1,1,1), Rgb8::white());
        assert_eq!(Rgb8::black() - Rgb8::new(1,1,1), Rgb8::black());
        assert_eq!(Rgb8::new(100,200,50) + Rgb8::new(100,100,10), Rgb8::new(200,255,60));
        assert_eq!(Rgb8::new(100,20,50) - Rgb8::new(50,100,10), Rgb8::new(50,0,40));
        assert_eq!(Gray8::new(250) + Gray8::new(10), Gray8::new(255));
        assert_eq!(Gray8::new(5) - Gray8::new(10), Gray8::new(0));
        for a in 0 ..= 255u8 {
            assert_eq!((Rgba8::new(255,255,255,a) + Rgba8::new(1,1,1,a)).r, 255);
            assert_eq!((Rgba8::new(0,0,0,a) - Rgba8::new(1,1,1,a)).r, 0);
        }
    }

    #[test]
    fn rgba_alpha_is_averaged() {
        let p = Rgba8::new(10,10,10,200) + Rgba8::new(10,10,10,100);
        assert_eq!(p, Rgba8::new(20,20,20,150));
        let p = Rgba8::new(10,10,10,255) - Rgba8::new(10,10,10,0);
        assert_eq!(p, Rgba8::new(0,0,0,127));
        let p = Rgba8::new(255,0,0,255) + Rgba8::new(255,0,0,255);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn blend_interpolates_alpha() {
        let c = Rgba8::new(200,0,0,255);
        let cur = Rgba8::new(10,20,30,100);
        assert_eq!(c.blend(cur, 0.0), cur);
        assert_eq!(c.blend(cur, 1.0), c);
        assert_eq!(c.blend(cur, 0.5), Rgba8::new(105,10,15,177));
        assert_eq!(Gray8::new(200).blend(Gray8::new(100), 0.5), Gray8::new(150));
        assert_eq!(Rgb8::new(1,2,3).blend(Rgb8::new(4,5,6), 0.0), Rgb8::new(4,5,6));
    }

    #[test]
    fn scalar_ops_truncate_and_keep_alpha() {
        assert_eq!(Rgb8::new(255,100,3) * 0.5, Rgb8::new(127,50,1));
        assert_eq!(Rgb8::new(200,100,0) * 2.0, Rgb8::new(255,200,0));
        assert_eq!(Rgb8::new(200,100,0) * -1.0, Rgb8::black());
        assert_eq!(Rgb8::new(9,100,255) / 2.0, Rgb8::new(4,50,127));
        assert_eq!(Rgba8::new(255,255,255,77) * 0.0, Rgba8::new(0,0,0,77));
        assert_eq!(Rgba8::new(8,8,8,77) / 4.0, Rgba8::new(2,2,2,77));
        assert_eq!(0.5 * Gray8::new(101), Gray8::new(50));
        assert_eq!(Gray8::new(7) * std::f32::NAN, Gray8::new(0));
    }

    #[test]
    fn compound_matches_value_form() {
        let a = Rgba8::new(200,30,90,40);
        let b = Rgba8::new(100,60,10,220);
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        let mut c = a;
        c -= b;
        assert_eq!(c, a - b);
        let mut c = a;
        c *= 0.3;
        assert_eq!(c, a * 0.3);
    }

    #[test]
    fn slice_encoding() {
        let mut raw = [0u8; 4];
        Rgba8::new(1,2,3,4).to_slice(&mut raw);
        assert_eq!(raw, [1,2,3,4]);
        assert_eq!(Rgb8::from_slice(&raw), Rgb8::new(1,2,3));
        assert_eq!(Gray8::from_slice(&raw[3..]), Gray8::new(4));
        assert_eq!(Rgba8::from(Rgb8::new(1,2,3)), Rgba8::new(1,2,3,255));
    }
}
