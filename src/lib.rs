// THEORY:
// This file is the entry point for the `pixel_entities` library crate. It exposes
// the single-pixel entity that region-growing and connected-component code builds
// on: four color channels, a fixed grid position and a "visited" marker.
//
// The entity itself lives in `core_modules::pixel`. The `image` crate bridge and
// the error type are kept in sibling modules so the pixel stays a plain value type
// with no knowledge of decoders or failure paths.

pub mod core_modules;

// Re-export the public surface so consumers don't need the nested module paths.
pub use crate::core_modules::error::error::PixelError;
pub use crate::core_modules::pixel::pixel::{
    parse_packed_argb, Channel, Coordinate, Intensity, PackedArgb, Pixel,
};
