use std::{fmt::Display, io};

use tracing::trace;

use crate::vec3::Vec3;

/// Red, green and blue intensities, expected (not enforced) to lie in `[0, 1]`.
pub type Color = Vec3;

#[macro_export]
macro_rules! color {
    () => {
        $crate::color::Color::new()
    };
    ($e0:expr, $e1:expr, $e2:expr) => {
        $crate::color::Color::new_with($e0, $e1, $e2)
    };
}

/// Scale applied to each channel before truncating, so that 1.0 maps to 255.
const F: f64 = 255.999;

impl Color {
    /// Channels scaled to `[0, 255]` and truncated toward zero.
    ///
    /// Nothing is clamped: a channel of 2.0 gives 511, -1.0 gives -255.
    #[inline]
    pub fn to_rgb8_unclamped(&self) -> [i32; 3] {
        [
            (self.x() * F) as i32,
            (self.y() * F) as i32,
            (self.z() * F) as i32,
        ]
    }

    pub fn as_ppm(&self) -> ColorPpm<'_> {
        ColorPpm(self)
    }
}

/// Formats a color as a single `"r g b\n"` pixel line.
pub struct ColorPpm<'a>(&'a Color);

impl<'a> Display for ColorPpm<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0.to_rgb8_unclamped();
        writeln!(f, "{r} {g} {b}")
    }
}

/// Writes `pixel_color` to `out` as `"r g b\n"`.
pub fn write_color<W: io::Write + ?Sized>(out: &mut W, pixel_color: &Color) -> io::Result<()> {
    let [r, g, b] = pixel_color.to_rgb8_unclamped();
    trace!(r, g, b, "write_color");
    writeln!(out, "{r} {g} {b}")
}
