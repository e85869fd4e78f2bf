use crate::{Error, Result};

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Longest 7-bit encoded `u32`.
const MAX_LENGTH_PREFIX: usize = 5;

macro_rules! check_bounds {
    ($len:expr, $input:expr) => {
        if $len > $input.len() {
            $crate::util::cold_path();
            return Err($crate::Error::EndOfFile);
        }
    };
}

pub(crate) use check_bounds;

/// Splits `N` bytes off the front of `input`.
///
/// On failure `input` is left untouched.
#[inline]
pub(crate) fn take<const N: usize>(input: &mut &[u8]) -> Result<[u8; N]> {
    match input.split_first_chunk::<N>() {
        Some((head, rest)) => {
            *input = rest;
            Ok(*head)
        }
        None => {
            cold_path();
            Err(Error::EndOfFile)
        }
    }
}

/// Appends `len` as a little-endian base-128 varint, at most five bytes.
pub(crate) fn write_length_prefix(len: usize, out: &mut Vec<u8>) {
    let mut value = len as u32;
    while value >= 0x80 {
        out.push(value as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub(crate) fn read_length_prefix(input: &mut &[u8]) -> Result<usize> {
    let mut cursor = *input;
    let mut value = 0u32;
    for index in 0..MAX_LENGTH_PREFIX {
        let [byte] = take::<1>(&mut cursor)?;
        // the fifth byte only carries the top four bits
        if index == MAX_LENGTH_PREFIX - 1 && byte > 0x0F {
            cold_path();
            return Err(Error::InvalidLength);
        }
        value |= ((byte & 0x7F) as u32) << (7 * index);
        if byte & 0x80 == 0 {
            *input = cursor;
            return usize::try_from(value).map_err(|_| Error::InvalidLength);
        }
    }
    cold_path();
    Err(Error::InvalidLength)
}

/// Strips a case-insensitive `0x` prefix.
#[inline]
pub(crate) fn strip_hex_prefix(text: &str) -> Option<&str> {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => Some(&text[2..]),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_hex_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_hexdigit())
}
