// THEORY:
// Bridge between `Pixel` and the `image` crate's `Rgba<u8>`. Decoders in the
// `image` crate hand out RGBA8 pixels; region-growing code wants `Pixel`s with a
// position and a visited marker. This module converts one pixel at a time and
// never walks a buffer.
//
// Widening `u8` into a `Channel` is lossless. Narrowing back masks each channel to
// its low 8 bits, the same policy `packed_argb` follows.

pub mod image_bridge {
    use crate::core_modules::pixel::pixel::{Coordinate, Pixel};
    use image::Rgba;

    impl Pixel {
        pub fn from_rgba(rgba: Rgba<u8>, x: Coordinate, y: Coordinate) -> Self {
            let [r, g, b, a] = rgba.0;
            Pixel::from_channels(a.into(), r.into(), g.into(), b.into(), x, y)
        }

        pub fn to_rgba(&self) -> Rgba<u8> {
            Rgba(self.to_rgba_bytes())
        }
    }

    impl From<&Pixel> for Rgba<u8> {
        fn from(pixel: &Pixel) -> Self {
            pixel.to_rgba()
        }
    }
}
