//! Converters for single primitive values.
//!
//! Integer widths accept decimal text or a case-insensitive `0x` hexadecimal
//! literal. Floats use a fixed, locale-independent grammar on both the parse
//! and the stringify side.

mod boolean;
mod float;
mod integer;
mod string;

pub use boolean::*;
pub use float::*;
pub use integer::*;
pub use string::*;
