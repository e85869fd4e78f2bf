//! Typed value converters for compiling spreadsheet-style configuration
//! tables into compact binary blobs.
//!
//! Every supported type has a converter implementing [`ValueConverter`],
//! which parses cell text, writes and reads a fixed binary layout, and
//! renders the value back to text. Composite types (vectors and colors)
//! additionally implement [`MultiSegment`] and split their text on a
//! configurable [`Separator`].
//!
//! | Converter | Value | Binary |
//! |-----------|-------|--------|
//! | [`BoolConverter`] | `bool` | 1 byte |
//! | [`Int16Converter`], [`UInt16Converter`] | `i16`, `u16` | 2 bytes |
//! | [`Int32Converter`], [`UInt32Converter`] | `i32`, `u32` | 4 bytes |
//! | [`Int64Converter`], [`UInt64Converter`] | `i64`, `u64` | 8 bytes |
//! | [`SingleConverter`], [`DoubleConverter`] | `f32`, `f64` | 4 / 8 bytes |
//! | [`StringConverter`] | `Option<String>` | flag + length-prefixed UTF-8 |
//! | [`Vector2Converter`] … [`Vector4Converter`] | [`Vector2`] … [`Vector4`] | N × 4 bytes |
//! | [`ColorConverter`] | [`Color`] | 4 × 4 bytes |
//! | [`Color32Converter`] | [`Color32`] | 4 × 1 byte |
//!
//! Multi-byte fields follow the `ByteOrder` type parameter of
//! [`ValueConverter::write_to`] and [`ValueConverter::read_from`]. Tables
//! are written in [`WireOrder`], which [`to_vec`] and [`from_slice`] use.
//!
//! ```
//! use cellconv::{Color32, Color32Converter, ValueConverter, from_slice, to_vec};
//!
//! let converter = Color32Converter::default();
//! let color = converter.parse("255,0,128,64")?;
//! assert_eq!(color, Color32::new(255, 0, 128, 64));
//!
//! let bytes = to_vec(&converter, &color);
//! assert_eq!(bytes, [255, 0, 128, 64]);
//! assert_eq!(from_slice(&converter, &bytes)?, color);
//! assert_eq!(converter.stringify(&color), "RGBA(255, 0, 128, 64)");
//! # Ok::<(), cellconv::Error>(())
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

/// The byte order binary tables are written in.
pub type WireOrder = LittleEndian;

mod any;
mod composite;
mod converter;
mod error;
mod scalar;
mod util;
mod value;

pub use any::*;
pub use composite::*;
pub use converter::*;
pub use error::*;
pub use scalar::*;
pub use util::ByteOrder;
pub(crate) use util::cold_path;
pub use value::*;
