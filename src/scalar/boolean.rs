use crate::{ByteOrder, Error, Result, ValueConverter, cold_path, util::take};

/// Converts `bool` values. Stored as a single `0`/`1` byte.
///
/// Accepts `true`/`false` in any case and the digits `1`/`0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoolConverter;

impl ValueConverter for BoolConverter {
    type Value = bool;
    type Text = String;

    const TYPE_NAME: &'static str = "Boolean";
    const IS_SCALAR: bool = true;

    fn parse(&self, text: &str) -> Result<bool> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
            Ok(false)
        } else {
            cold_path();
            Err(Error::invalid_literal(Self::TYPE_NAME, text))
        }
    }

    #[inline]
    fn write_to<O: ByteOrder>(&self, value: &bool, out: &mut Vec<u8>) {
        out.push(*value as u8);
    }

    #[inline]
    fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<bool> {
        let [byte] = take::<1>(input)?;
        Ok(byte != 0)
    }

    #[inline]
    fn stringify(&self, value: &bool) -> String {
        value.to_string()
    }
}
