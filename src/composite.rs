//! Converters for fixed-arity values split from delimited cell text.
//!
//! Every converter here implements [`MultiSegment`](crate::MultiSegment):
//! text must hold exactly `ARITY` segments separated by the converter's
//! [`Separator`](crate::Separator). Empty segments are kept, so `"1,,3"`
//! has three segments and fails on the empty one.

mod color;
mod vector;

pub use color::*;
pub use vector::*;
