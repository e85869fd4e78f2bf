use zerocopy::byteorder;

use crate::{
    ByteOrder, Error, MultiSegment, Result, Separator, ValueConverter, Vector2, Vector3, Vector4,
    cold_path, scalar::parse_component, util::take,
};

macro_rules! define_vector_converter {
    ($($(#[$meta:meta])* $name:ident($value:ident, $arity:literal)),* $(,)?) => {
        $(
            $(#[$meta])*
            ///
            /// # Binary layout
            ///
            /// `write_to` stores each component as an IEEE-754 `f32`, but
            /// `read_from` decodes each 4-byte field as an `i32` and widens it
            /// to `f32`. The two paths are therefore not inverse: a component
            /// `c` reads back as `(c.to_bits() as i32) as f32`. Existing
            /// binary tables depend on this layout, so it is kept as is.
            #[derive(Clone, Debug, Default, PartialEq, Eq)]
            pub struct $name {
                separator: Separator,
            }

            impl $name {
                pub fn new() -> Self {
                    Self::default()
                }
            }

            impl ValueConverter for $name {
                type Value = $value;
                type Text = String;

                const TYPE_NAME: &'static str = stringify!($value);
                const IS_SCALAR: bool = false;

                fn parse(&self, text: &str) -> Result<$value> {
                    let segments = self
                        .separator
                        .split_exact::<$arity>(Self::TYPE_NAME, text)?;
                    let mut components = [0f32; $arity];
                    for (component, segment) in components.iter_mut().zip(segments) {
                        *component = parse_component(segment).ok_or_else(|| {
                            cold_path();
                            Error::invalid_literal(Self::TYPE_NAME, text)
                        })?;
                    }
                    Ok($value::from(components))
                }

                fn write_to<O: ByteOrder>(&self, value: &$value, out: &mut Vec<u8>) {
                    out.reserve($arity * 4);
                    for component in value.to_array() {
                        out.extend_from_slice(&byteorder::F32::<O>::new(component).to_bytes());
                    }
                }

                fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<$value> {
                    let mut cursor = *input;
                    let mut components = [0f32; $arity];
                    for component in components.iter_mut() {
                        *component = byteorder::I32::<O>::from_bytes(take(&mut cursor)?).get() as f32;
                    }
                    *input = cursor;
                    Ok($value::from(components))
                }

                #[inline]
                fn stringify(&self, value: &$value) -> String {
                    value.to_string()
                }
            }

            impl MultiSegment for $name {
                const ARITY: usize = $arity;

                #[inline]
                fn separator(&self) -> &Separator {
                    &self.separator
                }

                fn with_separator(self, separator: impl Into<Separator>) -> Self {
                    Self {
                        separator: separator.into(),
                    }
                }
            }
        )*
    };
}

define_vector_converter!(
    /// Converts [`Vector2`] values from `"x,y"`.
    Vector2Converter(Vector2, 2),
    /// Converts [`Vector3`] values from `"x,y,z"`.
    Vector3Converter(Vector3, 3),
    /// Converts [`Vector4`] values from `"x,y,z,w"`.
    Vector4Converter(Vector4, 4),
);
