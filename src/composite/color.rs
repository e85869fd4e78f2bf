use zerocopy::byteorder;

use crate::{
    ByteOrder, Color, Color32, Error, MultiSegment, Result, Separator, ValueConverter, cold_path,
    scalar::parse_component, util::take,
};

/// Converts [`Color`] values from `"r,g,b,a"` float channels.
///
/// Each channel is stored as an `f32` and round-trips exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorConverter {
    separator: Separator,
}

impl ColorConverter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueConverter for ColorConverter {
    type Value = Color;
    type Text = String;

    const TYPE_NAME: &'static str = "Color";
    const IS_SCALAR: bool = false;

    fn parse(&self, text: &str) -> Result<Color> {
        let segments = self.separator.split_exact::<4>(Self::TYPE_NAME, text)?;
        let mut channels = [0f32; 4];
        for (channel, segment) in channels.iter_mut().zip(segments) {
            *channel = parse_component(segment).ok_or_else(|| {
                cold_path();
                Error::invalid_literal(Self::TYPE_NAME, text)
            })?;
        }
        Ok(Color::from(channels))
    }

    fn write_to<O: ByteOrder>(&self, value: &Color, out: &mut Vec<u8>) {
        out.reserve(4 * 4);
        for channel in value.to_array() {
            out.extend_from_slice(&byteorder::F32::<O>::new(channel).to_bytes());
        }
    }

    fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<Color> {
        let mut cursor = *input;
        let mut channels = [0f32; 4];
        for channel in channels.iter_mut() {
            *channel = byteorder::F32::<O>::from_bytes(take(&mut cursor)?).get();
        }
        *input = cursor;
        Ok(Color::from(channels))
    }

    #[inline]
    fn stringify(&self, value: &Color) -> String {
        value.to_string()
    }
}

impl MultiSegment for ColorConverter {
    const ARITY: usize = 4;

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

/// Converts [`Color32`] values from `"r,g,b,a"` byte channels.
///
/// Each channel must be a decimal integer in `0..=255`. Stored as four bytes,
/// so the byte order parameter does not affect the layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Color32Converter {
    separator: Separator,
}

impl Color32Converter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueConverter for Color32Converter {
    type Value = Color32;
    type Text = String;

    const TYPE_NAME: &'static str = "Color32";
    const IS_SCALAR: bool = false;

    fn parse(&self, text: &str) -> Result<Color32> {
        let segments = self.separator.split_exact::<4>(Self::TYPE_NAME, text)?;
        let mut channels = [0u8; 4];
        for (channel, segment) in channels.iter_mut().zip(segments) {
            *channel = segment.trim().parse::<u8>().map_err(|_| {
                cold_path();
                Error::invalid_literal(Self::TYPE_NAME, text)
            })?;
        }
        Ok(Color32::from(channels))
    }

    #[inline]
    fn write_to<O: ByteOrder>(&self, value: &Color32, out: &mut Vec<u8>) {
        out.extend_from_slice(&value.to_array());
    }

    #[inline]
    fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<Color32> {
        Ok(Color32::from(take::<4>(input)?))
    }

    #[inline]
    fn stringify(&self, value: &Color32) -> String {
        value.to_string()
    }
}

impl MultiSegment for Color32Converter {
    const ARITY: usize = 4;

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
