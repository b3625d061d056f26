// THEORY:
// The pixel entity itself never fails. Errors only arise where outside data is
// turned into a pixel: a byte slice of the wrong length, or text that is not a
// packed ARGB value. Both are reported through `PixelError`.

pub mod error {
    use thiserror::Error;

    /// Errors raised when converting raw bytes or text into pixel data.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum PixelError {
        /// A byte slice did not hold exactly one RGBA8 pixel.
        #[error("expected {expected} channel bytes, found {found}")]
        ChannelCount { expected: usize, found: usize },
        /// Text was neither `0xAARRGGBB`, `#AARRGGBB` nor a decimal u32.
        #[error("invalid packed ARGB value: {0:?}")]
        InvalidPacked(String),
    }
}
