//! Bit-position to 128-bit hex mask conversion.

pub mod encoder;

pub use encoder::{BitmaskError, encode, format_mask, mask_from_positions, parse_positions};
