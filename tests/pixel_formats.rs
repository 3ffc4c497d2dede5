extern crate rasterkit;

use rasterkit::{ColorRgba, Gray8, Rgb8, Rgba8};

#[test]
fn saturating_add_sub_over_all_channels() {
    for v in 0 ..= 255u8 {
        let p = Rgb8::gray(v);
        assert_eq!((Rgb8::white() + p).r, 255);
        assert_eq!((Rgb8::black() - p).r, 0);
        assert_eq!(p + Rgb8::black(), p);
        assert_eq!(p - Rgb8::black(), p);
        let want = (u16::from(v) + 100).min(255) as u8;
        assert_eq!((p + Rgb8::gray(100)).g, want);
    }
    assert_eq!((Rgb8::new(255,255,255) + Rgb8::new(1,1,1)).r, 255);
    assert_eq!((Rgb8::new(0,0,0) - Rgb8::new(1,1,1)).r, 0);
}

#[test]
fn pixel_color_pixel_is_lossless() {
    for r in (0 ..= 255u32).step_by(5) {
        for g in (0 ..= 255u32).step_by(17) {
            for b in 0 ..= 255u32 {
                let p = Rgb8::new(r as u8, g as u8, b as u8);
                assert_eq!(Rgb8::from(ColorRgba::from(p)), p);
                let p = Rgba8::new(b as u8, r as u8, g as u8, (255 - b) as u8);
                assert_eq!(Rgba8::from(ColorRgba::from(p)), p);
            }
        }
    }
    for v in 0 ..= 255u8 {
        assert_eq!(Gray8::from(ColorRgba::from(Gray8::new(v))), Gray8::new(v));
    }
}

#[test]
fn color_overshoot_is_clamped_on_the_way_back() {
    let c = ColorRgba::from(Rgb8::new(200, 100, 0)) * 2.0;
    assert!(c.r > 1.0);
    assert_eq!(Rgb8::from(c), Rgb8::new(255, 200, 0));
    let c = ColorRgba::from(Rgb8::new(10, 100, 0)) - ColorRgba::from(Rgb8::new(20, 50, 0));
    assert_eq!(Rgb8::from(c), Rgb8::new(0, 50, 0));
}

#[test]
fn gray_is_mean_of_rgb() {
    let c = ColorRgba::from(Rgb8::new(30, 60, 90));
    assert_eq!(Gray8::from(c), Gray8::new(60));
}
