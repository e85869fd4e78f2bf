use crate::{
    ByteOrder, Error, Result, ValueConverter, cold_path,
    util::{check_bounds, read_length_prefix, take, write_length_prefix},
};

/// Converts nullable strings.
///
/// `None` is the absent marker and is kept distinct from the empty string
/// in every form:
///
/// | value | binary |
/// |-------|--------|
/// | `None` | `00` |
/// | `Some("")` | `01 00` |
/// | `Some("hi")` | `01 02 68 69` |
///
/// A present string is a `1` flag, a 7-bit variable-length byte count and
/// the UTF-8 bytes. The byte order parameter does not affect the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringConverter;

impl ValueConverter for StringConverter {
    type Value = Option<String>;
    type Text = Option<String>;

    const TYPE_NAME: &'static str = "String";
    const IS_SCALAR: bool = true;

    #[inline]
    fn parse(&self, text: &str) -> Result<Option<String>> {
        Ok(Some(text.to_owned()))
    }

    fn write_to<O: ByteOrder>(&self, value: &Option<String>, out: &mut Vec<u8>) {
        match value {
            Some(text) => {
                out.reserve(1 + 5 + text.len());
                out.push(1);
                write_length_prefix(text.len(), out);
                out.extend_from_slice(text.as_bytes());
            }
            None => out.push(0),
        }
    }

    fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<Option<String>> {
        let mut cursor = *input;
        let [present] = take::<1>(&mut cursor)?;
        if present == 0 {
            *input = cursor;
            return Ok(None);
        }
        let len = read_length_prefix(&mut cursor)?;
        check_bounds!(len, cursor);
        let (bytes, rest) = cursor.split_at(len);
        let text = std::str::from_utf8(bytes).map_err(|_| {
            cold_path();
            Error::InvalidUtf8
        })?;
        *input = rest;
        Ok(Some(text.to_owned()))
    }

    #[inline]
    fn stringify(&self, value: &Option<String>) -> Option<String> {
        value.clone()
    }
}
