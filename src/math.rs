//! Scalar helpers for Xiaolin Wu's line algorithm

/// Integral part of `x`, rounded toward negative infinity
pub fn ipart(x: f32) -> f32 {
    x.floor()
}

/// Fractional part of `x`; always in `[0,1)`
pub fn fpart(x: f32) -> f32 {
    x - ipart(x)
}

/// 1.0 - fractional part of `x` (remainder)
pub fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Round half up; `round(-0.5) == 0.0`, `round(2.5) == 3.0`
pub fn round(x: f32) -> f32 {
    ipart(x + 0.5)
}

/// Clamp the rounded coordinate `v` into `[0,n-1]`
///
/// `n` must be non-zero. NaN maps to 0.
pub fn clamp_index(v: f32, n: usize) -> usize {
    let v = round(v);
    if !(v > 0.0) {
        0
    } else if v >= n as f32 {
        n - 1
    } else {
        v as usize
    }
}
