// THEORY:
// The `Pixel` module is the most fundamental unit of any region-growing pass. It is a
// "dumb" data container for one picture element: four color channels, the element's
// position on the grid and a `visited` marker that a traversal flips once it has
// claimed the pixel. Anything that needs another pixel (neighbors, flood fill,
// connected components) belongs to the code that owns the grid, not here.
//
// Storage vs. packing:
// - Channels are stored as wide signed integers and are never clamped on write. A
//   caller that assigns 300 reads back 300.
// - The packed 32-bit ARGB form masks every channel to its low 8 bits, so 300 packs
//   as 44. Truncation happens at packing time only.
//
// Packed layout (alpha most significant):
//   bits 31..24 alpha | 23..16 red | 15..8 green | 7..0 blue
//
// Key principles:
// 1) Identity is fixed: `x` and `y` are set by the constructor and have no setter.
// 2) Construction and mutation are infallible. Only text and byte conversions,
//    which sit at the edge of the crate, return `PixelError`.
// 3) Intensity is the plain mean of R, G and B. Alpha never contributes.

pub mod pixel {
    use crate::core_modules::error::error::PixelError;
    use std::fmt;

    pub type Byte = u8;
    pub type Bytes = [Byte; CHANNELS];
    pub type Channel = i32;
    pub type Coordinate = i32;
    pub type PackedArgb = u32;
    pub type Intensity = f64;

    pub const CHANNELS: usize = 4;
    pub const OPAQUE: Channel = 255;

    const BYTE_MASK: Channel = 0xFF;
    const ALPHA_SHIFT: u32 = 24;
    const RED_SHIFT: u32 = 16;
    const GREEN_SHIFT: u32 = 8;

    /// A single picture element: ARGB channels, a fixed grid position and a
    /// traversal marker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Pixel {
        /// The alpha (opacity) channel, conventionally 0-255.
        a: Channel,
        /// The red channel, conventionally 0-255.
        r: Channel,
        /// The green channel, conventionally 0-255.
        g: Channel,
        /// The blue channel, conventionally 0-255.
        b: Channel,
        x: Coordinate,
        y: Coordinate,
        visited: bool,
    }

    impl Default for Pixel {
        /// Opaque black at the origin.
        fn default() -> Self {
            Pixel::from_coordinates(0, 0)
        }
    }

    impl Pixel {
        /// Creates an opaque black pixel at `(x, y)`.
        pub fn from_coordinates(x: Coordinate, y: Coordinate) -> Self {
            Pixel::from_channels(OPAQUE, 0, 0, 0, x, y)
        }

        /// Unpacks a 32-bit ARGB value into its four channels.
        pub fn from_packed(argb: PackedArgb, x: Coordinate, y: Coordinate) -> Self {
            let channel = |shift: u32| ((argb >> shift) as Channel) & BYTE_MASK;
            Pixel::from_channels(
                channel(ALPHA_SHIFT),
                channel(RED_SHIFT),
                channel(GREEN_SHIFT),
                channel(0),
                x,
                y,
            )
        }

        /// Stores the four channels as given. No range check is made.
        pub fn from_channels(
            a: Channel,
            r: Channel,
            g: Channel,
            b: Channel,
            x: Coordinate,
            y: Coordinate,
        ) -> Self {
            Pixel {
                a,
                r,
                g,
                b,
                x,
                y,
                visited: false,
            }
        }

        pub fn a(&self) -> Channel {
            self.a
        }

        pub fn r(&self) -> Channel {
            self.r
        }

        pub fn g(&self) -> Channel {
            self.g
        }

        pub fn b(&self) -> Channel {
            self.b
        }

        pub fn x(&self) -> Coordinate {
            self.x
        }

        pub fn y(&self) -> Coordinate {
            self.y
        }

        pub fn coordinates(&self) -> (Coordinate, Coordinate) {
            (self.x, self.y)
        }

        /// Raw stored channels in `[a, r, g, b]` order, unmasked.
        pub fn channels(&self) -> [Channel; CHANNELS] {
            [self.a, self.r, self.g, self.b]
        }

        pub fn visited(&self) -> bool {
            self.visited
        }

        /// Unweighted mean of red, green and blue.
        ///
        /// - Division is floating point, so (1, 1, 0) gives 0.666...
        /// - Channels are widened to `f64` before summing, so extreme out-of-range
        ///   values never wrap the way a 32-bit integer sum would.
        pub fn intensity(&self) -> Intensity {
            (self.r as Intensity + self.g as Intensity + self.b as Intensity) / 3.0
        }

        /// Packs the channels into `0xAARRGGBB`.
        ///
        /// Each channel is masked to its low 8 bits first, so out-of-range values
        /// wrap modulo 256 instead of clamping.
        pub fn packed_argb(&self) -> PackedArgb {
            if log::log_enabled!(log::Level::Trace) && !self.channels_in_range() {
                log::trace!(
                    "packing pixel at ({}, {}) truncates channels {:?}",
                    self.x,
                    self.y,
                    self.channels()
                );
            }
            (Self::low_byte(self.a) as PackedArgb) << ALPHA_SHIFT
                | (Self::low_byte(self.r) as PackedArgb) << RED_SHIFT
                | (Self::low_byte(self.g) as PackedArgb) << GREEN_SHIFT
                | Self::low_byte(self.b) as PackedArgb
        }

        /// Overwrites all four channels.
        pub fn set_channels(&mut self, a: Channel, r: Channel, g: Channel, b: Channel) {
            self.a = a;
            self.r = r;
            self.g = g;
            self.b = b;
        }

        /// Overwrites red, green and blue and makes the pixel fully opaque.
        /// Any previous alpha is lost.
        pub fn set_color(&mut self, r: Channel, g: Channel, b: Channel) {
            self.set_channels(OPAQUE, r, g, b);
        }

        /// Sets an opaque grey of level `c`.
        pub fn set_grey(&mut self, c: Channel) {
            self.set_color(c, c, c);
        }

        pub fn set_visited_flag(&mut self, visited: bool) {
            self.visited = visited;
        }

        /// Builds a pixel from exactly four bytes in R, G, B, A order, the layout
        /// of an RGBA8 frame buffer.
        pub fn try_from_rgba_bytes(
            bytes: &[Byte],
            x: Coordinate,
            y: Coordinate,
        ) -> Result<Self, PixelError> {
            match bytes {
                &[r, g, b, a] => Ok(Pixel::from_channels(
                    a as Channel,
                    r as Channel,
                    g as Channel,
                    b as Channel,
                    x,
                    y,
                )),
                _ => {
                    log::debug!(
                        "rejected {} channel bytes for pixel at ({}, {})",
                        bytes.len(),
                        x,
                        y
                    );
                    Err(PixelError::ChannelCount {
                        expected: CHANNELS,
                        found: bytes.len(),
                    })
                }
            }
        }

        /// Channels as RGBA8 bytes, masked the same way as `packed_argb`.
        pub fn to_rgba_bytes(&self) -> Bytes {
            [
                Self::low_byte(self.r),
                Self::low_byte(self.g),
                Self::low_byte(self.b),
                Self::low_byte(self.a),
            ]
        }

        #[inline]
        fn low_byte(channel: Channel) -> Byte {
            (channel & BYTE_MASK) as Byte
        }

        fn channels_in_range(&self) -> bool {
            self.channels()
                .iter()
                .all(|channel| (0..=BYTE_MASK).contains(channel))
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            pixel.to_rgba_bytes()
        }
    }

    impl fmt::Display for Pixel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{}, {}]: #{:08X}", self.x, self.y, self.packed_argb())?;
            if self.visited {
                write!(f, " (visited)")?;
            }
            Ok(())
        }
    }

    /// Parses a packed ARGB value written as `0xAARRGGBB`, `#AARRGGBB` or a
    /// decimal integer. Hex forms must carry exactly eight digits. Decimal input
    /// may be an unsigned `u32` or a signed `i32`, whose bits are reinterpreted
    /// (`-16777216` is opaque black).
    pub fn parse_packed_argb(text: &str) -> Result<PackedArgb, PixelError> {
        let trimmed = text.trim();
        let hex_digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'));

        let parsed = match hex_digits {
            Some(digits) if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_hexdigit()) => {
                PackedArgb::from_str_radix(digits, 16).ok()
            }
            Some(_) => None,
            None => trimmed.parse::<PackedArgb>().ok().or_else(|| {
                trimmed
                    .parse::<i32>()
                    .ok()
                    .map(|signed| signed as PackedArgb)
            }),
        };

        parsed.ok_or_else(|| {
            log::debug!("could not parse {:?} as a packed ARGB value", text);
            PixelError::InvalidPacked(text.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;
    use crate::core_modules::error::error::PixelError;

    #[test]
    fn coordinates_only_is_opaque_black() {
        let pixel = Pixel::from_coordinates(5, 7);
        assert_eq!(pixel.channels(), [255, 0, 0, 0]);
        assert_eq!(pixel.coordinates(), (5, 7));
        assert!(!pixel.visited());
    }

    #[test]
    fn default_is_opaque_black_at_origin() {
        assert_eq!(Pixel::default(), Pixel::from_coordinates(0, 0));
    }

    #[test]
    fn packed_value_splits_into_channels() {
        let pixel = Pixel::from_packed(0x80FF_1020, -3, 9);
        assert_eq!(pixel.a(), 0x80);
        assert_eq!(pixel.r(), 0xFF);
        assert_eq!(pixel.g(), 0x10);
        assert_eq!(pixel.b(), 0x20);
        assert_eq!((pixel.x(), pixel.y()), (-3, 9));
        assert_eq!(pixel.packed_argb(), 0x80FF_1020);
    }

    #[test]
    fn explicit_channels_are_stored_unclamped() {
        let pixel = Pixel::from_channels(300, -1, 256, 17, 0, 0);
        assert_eq!(pixel.channels(), [300, -1, 256, 17]);
    }

    #[test]
    fn packing_wraps_out_of_range_channels() {
        let pixel = Pixel::from_channels(300, 0, 0, 0, 0, 0);
        assert_eq!(pixel.a(), 300);
        assert_eq!(pixel.packed_argb() >> 24, 44);

        // -1 masks to 0xFF, 256 to 0x00.
        let pixel = Pixel::from_channels(255, -1, 256, 1, 0, 0);
        assert_eq!(pixel.packed_argb(), 0xFFFF_0001);
    }

    #[test]
    fn intensity_is_mean_of_rgb() {
        let pixel = Pixel::from_channels(0, 10, 20, 30, 0, 0);
        assert_eq!(pixel.intensity(), 20.0);

        let pixel = Pixel::from_channels(255, 1, 1, 2, 0, 0);
        assert!((pixel.intensity() - 4.0 / 3.0).abs() < 1e-12);

        let pixel = Pixel::from_channels(255, 1, 1, 0, 0, 0);
        assert!((pixel.intensity() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn intensity_ignores_alpha() {
        let opaque = Pixel::from_channels(255, 90, 90, 90, 0, 0);
        let clear = Pixel::from_channels(0, 90, 90, 90, 0, 0);
        assert_eq!(opaque.intensity(), clear.intensity());
    }

    #[test]
    fn set_color_forces_opaque() {
        let mut pixel = Pixel::from_packed(0x1200_0000, 1, 2);
        pixel.set_color(10, 20, 30);
        assert_eq!(pixel.channels(), [255, 10, 20, 30]);
    }

    #[test]
    fn set_grey_sets_all_rgb_and_opaque() {
        let mut pixel = Pixel::from_channels(3, 4, 5, 6, 1, 2);
        pixel.set_grey(128);
        assert_eq!(pixel.channels(), [255, 128, 128, 128]);
    }

    #[test]
    fn set_channels_keeps_coordinates_and_flag() {
        let mut pixel = Pixel::from_coordinates(11, 12);
        pixel.set_visited_flag(true);
        pixel.set_channels(1, 2, 3, 4);
        assert_eq!(pixel.channels(), [1, 2, 3, 4]);
        assert_eq!(pixel.coordinates(), (11, 12));
        assert!(pixel.visited());
    }

    #[test]
    fn visited_flag_toggles() {
        let mut pixel = Pixel::from_coordinates(0, 0);
        pixel.set_visited_flag(true);
        assert!(pixel.visited());
        pixel.set_visited_flag(false);
        assert!(!pixel.visited());
    }

    #[test]
    fn rgba_bytes_are_read_in_frame_buffer_order() {
        let pixel = Pixel::try_from_rgba_bytes(&[1, 2, 3, 4], 6, 8).expect("four bytes");
        assert_eq!(pixel.channels(), [4, 1, 2, 3]);
        assert_eq!(pixel.coordinates(), (6, 8));
        assert_eq!(Bytes::from(pixel), [1, 2, 3, 4]);
    }

    #[test]
    fn wrong_byte_count_is_rejected() {
        let err = Pixel::try_from_rgba_bytes(&[1, 2, 3], 0, 0).unwrap_err();
        assert_eq!(
            err,
            PixelError::ChannelCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn display_shows_position_and_packed_value() {
        let mut pixel = Pixel::from_packed(0xFF0A_0B0C, 3, 4);
        assert_eq!(pixel.to_string(), "[3, 4]: #FF0A0B0C");
        pixel.set_visited_flag(true);
        assert_eq!(pixel.to_string(), "[3, 4]: #FF0A0B0C (visited)");
    }

    #[test]
    fn signed_decimal_reinterprets_bits() {
        assert_eq!(parse_packed_argb("-16777216"), Ok(0xFF00_0000));
        assert_eq!(parse_packed_argb("-1"), Ok(0xFFFF_FFFF));
        let pixel = Pixel::from_packed(parse_packed_argb("-16777216").unwrap(), 0, 0);
        assert_eq!(pixel, Pixel::from_coordinates(0, 0));
    }

    #[test]
    fn intensity_does_not_wrap_on_extreme_channels() {
        let pixel = Pixel::from_channels(255, i32::MAX, i32::MAX, i32::MAX, 0, 0);
        assert_eq!(pixel.intensity(), i32::MAX as f64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_keeps_every_field() {
        let mut pixel = Pixel::from_channels(300, -1, 256, 7, -4, 9);
        pixel.set_visited_flag(true);

        let json = serde_json::to_string(&pixel).expect("serialize pixel");
        assert!(json.contains("\"visited\":true"));
        assert!(json.contains("\"x\":-4"));

        let restored: Pixel = serde_json::from_str(&json).expect("deserialize pixel");
        assert_eq!(restored, pixel);
        assert_eq!(restored.coordinates(), (-4, 9));
        assert_eq!(restored.channels(), [300, -1, 256, 7]);
        assert!(restored.visited());
    }

    #[test]
    fn packed_text_forms() {
        assert_eq!(parse_packed_argb("0xFF102030"), Ok(0xFF10_2030));
        assert_eq!(parse_packed_argb("#ff102030"), Ok(0xFF10_2030));
        assert_eq!(parse_packed_argb(" 4278190080 "), Ok(0xFF00_0000));
        assert!(parse_packed_argb("#FFF").is_err());
        assert!(parse_packed_argb("0x1FF102030").is_err());
        assert!(parse_packed_argb("-2147483649").is_err());
        assert_eq!(
            parse_packed_argb("red"),
            Err(PixelError::InvalidPacked("red".to_string()))
        );
    }
}
