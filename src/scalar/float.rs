use zerocopy::byteorder;

use crate::{ByteOrder, Error, Result, ValueConverter, cold_path, util::take};

macro_rules! define_float_converter {
    ($($(#[$meta:meta])* $name:ident($type:ident, $wire:ident, $type_name:literal)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl ValueConverter for $name {
                type Value = $type;
                type Text = String;

                const TYPE_NAME: &'static str = $type_name;
                const IS_SCALAR: bool = true;

                fn parse(&self, text: &str) -> Result<$type> {
                    text.trim().parse::<$type>().map_err(|_| {
                        cold_path();
                        Error::invalid_literal(Self::TYPE_NAME, text)
                    })
                }

                #[inline]
                fn write_to<O: ByteOrder>(&self, value: &$type, out: &mut Vec<u8>) {
                    out.extend_from_slice(&byteorder::$wire::<O>::new(*value).to_bytes());
                }

                #[inline]
                fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<$type> {
                    Ok(byteorder::$wire::<O>::from_bytes(take(input)?).get())
                }

                fn stringify(&self, value: &$type) -> String {
                    if value.is_nan() {
                        "NaN".to_owned()
                    } else if *value == $type::INFINITY {
                        "Infinity".to_owned()
                    } else if *value == $type::NEG_INFINITY {
                        "-Infinity".to_owned()
                    } else {
                        // shortest representation that parses back to the same bits
                        value.to_string()
                    }
                }
            }
        )*
    };
}

define_float_converter!(
    /// Converts `f32` values.
    ///
    /// The text grammar is fixed regardless of host locale: `.` as decimal
    /// point, optional exponent, and `Infinity`/`NaN` (any case, `inf` also
    /// accepted).
    SingleConverter(f32, F32, "Single"),
    /// Converts `f64` values with the same grammar as [`SingleConverter`].
    DoubleConverter(f64, F64, "Double"),
);

/// Component parser shared with the float-based composite converters.
#[inline]
pub(crate) fn parse_component(segment: &str) -> Option<f32> {
    segment.trim().parse::<f32>().ok()
}
