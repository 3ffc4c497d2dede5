//! In-memory raster image toolkit
//!
//! How does this work
//!
//! ```text
//!    buf = PixelBuffer::new(w, h, 3) or PixelBuffer::open(path, 3)
//!    pix = buf.pixfmt::<Rgb8>()          -- checks channels == Rgb8::bpp()
//!  Per pixel edits
//!    ColorRgba::from(pixel)              -- u8 / 255
//!      to_ycbcr(&LumaCoefficients)       -- luma / chroma split
//!      to_rgba(&LumaCoefficients)
//!    Rgb8::from(color)                   -- clamp, * 255, truncate
//!  Lines
//!    pix.draw_line(x0,y0, x1,y1, color, thickness, PlotMode)
//!      plot_band()                       -- per column, rfpart / full / fpart
//!        plot() or plot_blend()          -- clamped to the buffer edge
//!  Output
//!    buf.save_png(path)
//! ```
//!
//!     use rasterkit::{PixelBuffer, PlotMode, Rgb8};
//!
//!     let mut buf = PixelBuffer::new(20, 20, 3).unwrap();
//!     let mut pix = buf.pixfmt::<Rgb8>().unwrap();
//!     pix.draw_line(0.0, 10.0, 19.0, 10.0, Rgb8::new(255,0,0), 1.0, PlotMode::Replace);
//!     assert_eq!(buf.pixel::<Rgb8>(7, 10).unwrap(), Rgb8::new(255,0,0));
//!

pub mod error;
pub mod buffer;
pub mod pixel;
pub mod color;
pub mod math;
pub mod pixfmt;
pub mod line;
pub mod codec;

pub use error::*;
pub use buffer::*;
pub use pixel::*;
pub use color::*;
pub use pixfmt::*;
pub use line::*;
pub use codec::*;
