//! The converter contract shared by every supported value type.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::{ByteOrder, Error, Result, WireOrder, cold_path};

/// Converts a value of one type between cell text, compact binary and a
/// display string.
///
/// Converters are plain values without interior mutability, so a single
/// instance can be shared across threads for a whole conversion run.
///
/// The four operations are mutually consistent: writing a value and reading
/// it back with the same byte order reproduces it exactly, and parsing the
/// output of [`stringify`](ValueConverter::stringify) reproduces an
/// equivalent value for scalar types. The vector converters are the one
/// exception on the binary side, see [`Vector2Converter`](crate::Vector2Converter).
///
/// # Example
///
/// ```
/// use cellconv::{Int32Converter, LittleEndian, ValueConverter};
///
/// let converter = Int32Converter;
/// let value = converter.parse("0x7F")?;
/// assert_eq!(value, 127);
///
/// let mut out = Vec::new();
/// converter.write_to::<LittleEndian>(&value, &mut out);
/// assert_eq!(out, [0x7F, 0, 0, 0]);
///
/// let mut input = out.as_slice();
/// assert_eq!(converter.read_from::<LittleEndian>(&mut input)?, 127);
/// assert!(input.is_empty());
/// # Ok::<(), cellconv::Error>(())
/// ```
pub trait ValueConverter {
    /// The in-memory value produced by `parse` and `read_from`.
    type Value;

    /// The display form. `String` for everything except the string
    /// converter, whose absent value has no text.
    type Text: Into<Option<String>>;

    /// Name of the target type as it appears in error messages.
    const TYPE_NAME: &'static str;

    /// `true` for single primitives, `false` for fixed-arity composites.
    const IS_SCALAR: bool;

    /// Parses a textual cell value.
    ///
    /// # Errors
    ///
    /// Returns a format error ([`Error::InvalidLiteral`] or
    /// [`Error::SegmentCount`]) when `text` does not match the grammar of
    /// the target type.
    fn parse(&self, text: &str) -> Result<Self::Value>;

    /// Appends the binary encoding of `value` to `out`.
    fn write_to<O: ByteOrder>(&self, value: &Self::Value, out: &mut Vec<u8>);

    /// Consumes the binary encoding of one value from the front of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfFile`] when `input` holds too few bytes. On any
    /// error `input` is left where it was.
    fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<Self::Value>;

    /// Renders `value` in a locale-invariant text form.
    fn stringify(&self, value: &Self::Value) -> Self::Text;

    #[inline]
    fn is_scalar(&self) -> bool {
        Self::IS_SCALAR
    }
}

/// Converters whose text form is a fixed number of delimited segments.
///
/// The separator is part of the converter value. Changing it builds a new
/// converter, so a converter in use is never mutated underneath a reader.
///
/// ```
/// use cellconv::{MultiSegment, ValueConverter, Vector3, Vector3Converter};
///
/// let converter = Vector3Converter::default().with_separator(";");
/// assert_eq!(converter.parse("1;2;3")?, Vector3::new(1.0, 2.0, 3.0));
/// assert!(converter.parse("1,2,3").is_err());
/// # Ok::<(), cellconv::Error>(())
/// ```
pub trait MultiSegment: ValueConverter + Sized {
    /// Number of segments `parse` requires.
    const ARITY: usize;

    fn separator(&self) -> &Separator;

    fn with_separator(self, separator: impl Into<Separator>) -> Self;
}

/// Delimiter used to split composite cell text. Defaults to `","`.
///
/// An empty separator is replaced by the default.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Separator(Cow<'static, str>);

impl Separator {
    pub const COMMA: Separator = Separator(Cow::Borrowed(","));

    pub fn new(separator: impl Into<Cow<'static, str>>) -> Self {
        let separator = separator.into();
        if separator.is_empty() {
            Self::COMMA
        } else {
            Separator(separator)
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits `text` into exactly `N` segments, keeping empty ones.
    pub(crate) fn split_exact<'t, const N: usize>(
        &self,
        type_name: &'static str,
        text: &'t str,
    ) -> Result<[&'t str; N]> {
        let mut segments = [""; N];
        let mut count = 0;
        for segment in text.split(self.as_str()) {
            if count < N {
                segments[count] = segment;
            }
            count += 1;
        }
        if count != N {
            cold_path();
            return Err(Error::SegmentCount {
                type_name,
                input: text.to_owned(),
                expected: N,
                actual: count,
            });
        }
        Ok(segments)
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::COMMA
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Separator {
    fn from(value: &'static str) -> Self {
        Separator::new(value)
    }
}

impl From<String> for Separator {
    fn from(value: String) -> Self {
        Separator::new(value)
    }
}

impl From<char> for Separator {
    fn from(value: char) -> Self {
        Separator::new(value.to_string())
    }
}

/// Encodes a single value with the system byte order ([`WireOrder`]).
pub fn to_vec<C: ValueConverter>(converter: &C, value: &C::Value) -> Vec<u8> {
    let mut out = Vec::new();
    converter.write_to::<WireOrder>(value, &mut out);
    out
}

/// Decodes a single value with the system byte order ([`WireOrder`]).
///
/// # Errors
///
/// Besides the errors of [`ValueConverter::read_from`], returns
/// [`Error::TrailingData`] if bytes remain after the value.
pub fn from_slice<C: ValueConverter>(converter: &C, mut input: &[u8]) -> Result<C::Value> {
    let value = converter.read_from::<WireOrder>(&mut input)?;
    if input.is_empty() {
        Ok(value)
    } else {
        cold_path();
        Err(Error::TrailingData(input.len()))
    }
}
