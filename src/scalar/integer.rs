use zerocopy::byteorder;

use crate::{
    ByteOrder, Error, Result, ValueConverter, cold_path,
    util::{is_hex_digits, strip_hex_prefix, take},
};

macro_rules! define_integer_converter {
    ($($(#[$meta:meta])* $name:ident($type:ty, $unsigned:ty, $wire:ident, $type_name:literal)),* $(,)?) => {
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
                    let trimmed = text.trim();
                    let parsed = match strip_hex_prefix(trimmed) {
                        // hex digits are the two's complement bit pattern
                        Some(digits) if is_hex_digits(digits) => {
                            <$unsigned>::from_str_radix(digits, 16).ok().map(|v| v as $type)
                        }
                        Some(_) => None,
                        None => trimmed.parse::<$type>().ok(),
                    };
                    parsed.ok_or_else(|| {
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

                #[inline]
                fn stringify(&self, value: &$type) -> String {
                    value.to_string()
                }
            }
        )*
    };
}

define_integer_converter!(
    /// Converts `i16` values. `0x8000` parses as `i16::MIN`.
    Int16Converter(i16, u16, I16, "Int16"),
    /// Converts `u16` values.
    UInt16Converter(u16, u16, U16, "UInt16"),
    /// Converts `i32` values.
    Int32Converter(i32, u32, I32, "Int32"),
    /// Converts `u32` values.
    UInt32Converter(u32, u32, U32, "UInt32"),
    /// Converts `i64` values.
    Int64Converter(i64, u64, I64, "Int64"),
    /// Converts `u64` values.
    UInt64Converter(u64, u64, U64, "UInt64"),
);
