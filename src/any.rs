//! Closed tagged unions over every supported value type.
//!
//! [`AnyConverter`] lets a caller that only knows a [`ValueKind`] at run time
//! drive the typed converters without generics. Mapping declared type names
//! to kinds is left to the caller.
//!
//! ```
//! use cellconv::{AnyConverter, LittleEndian, Value, ValueKind, Vector2};
//!
//! let converter = AnyConverter::new(ValueKind::Vector2).with_separator("|");
//! let value = converter.parse("0.5|2")?;
//! assert_eq!(value, Value::Vector2(Vector2::new(0.5, 2.0)));
//!
//! let mut out = Vec::new();
//! converter.write_to::<LittleEndian>(&value, &mut out)?;
//! assert_eq!(out.len(), 8);
//! # Ok::<(), cellconv::Error>(())
//! ```

use crate::{
    BoolConverter, ByteOrder, Color, Color32, Color32Converter, ColorConverter, DoubleConverter,
    Error, Int16Converter, Int32Converter, Int64Converter, MultiSegment, Result, Separator,
    SingleConverter, StringConverter, UInt16Converter, UInt32Converter, UInt64Converter,
    ValueConverter, Vector2, Vector2Converter, Vector3, Vector3Converter, Vector4,
    Vector4Converter,
};

macro_rules! define_any {
    (
        scalar { $($scalar:ident($scalar_converter:ident, $scalar_value:ty)),* $(,)? }
        composite { $($composite:ident($composite_converter:ident, $composite_value:ty)),* $(,)? }
    ) => {
        /// Identifies one of the supported value types.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ValueKind {
            $($scalar,)*
            $($composite,)*
        }

        impl ValueKind {
            /// Every kind, scalars first.
            pub const ALL: &'static [ValueKind] = &[$(ValueKind::$scalar,)* $(ValueKind::$composite,)*];

            /// Name of the type as it appears in error messages.
            pub const fn type_name(self) -> &'static str {
                match self {
                    $(Self::$scalar => <$scalar_converter as ValueConverter>::TYPE_NAME,)*
                    $(Self::$composite => <$composite_converter as ValueConverter>::TYPE_NAME,)*
                }
            }

            pub const fn is_scalar(self) -> bool {
                match self {
                    $(Self::$scalar => <$scalar_converter as ValueConverter>::IS_SCALAR,)*
                    $(Self::$composite => <$composite_converter as ValueConverter>::IS_SCALAR,)*
                }
            }

            /// Segment count of a composite kind, `None` for scalars.
            pub const fn arity(self) -> Option<usize> {
                match self {
                    $(Self::$scalar => None,)*
                    $(Self::$composite => Some(<$composite_converter as MultiSegment>::ARITY),)*
                }
            }
        }

        /// A typed value of any supported kind.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Value {
            $($scalar($scalar_value),)*
            $($composite($composite_value),)*
        }

        impl Value {
            pub const fn kind(&self) -> ValueKind {
                match self {
                    $(Value::$scalar(_) => ValueKind::$scalar,)*
                    $(Value::$composite(_) => ValueKind::$composite,)*
                }
            }
        }

        $(
            impl From<$scalar_value> for Value {
                fn from(value: $scalar_value) -> Self {
                    Value::$scalar(value)
                }
            }
        )*

        $(
            impl From<$composite_value> for Value {
                fn from(value: $composite_value) -> Self {
                    Value::$composite(value)
                }
            }
        )*

        /// A converter for a kind chosen at run time.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum AnyConverter {
            $($scalar($scalar_converter),)*
            $($composite($composite_converter),)*
        }

        impl AnyConverter {
            /// Builds the converter for `kind`, with the default separator for
            /// composite kinds.
            pub fn new(kind: ValueKind) -> Self {
                match kind {
                    $(ValueKind::$scalar => AnyConverter::$scalar($scalar_converter),)*
                    $(ValueKind::$composite => AnyConverter::$composite($composite_converter::default()),)*
                }
            }

            pub fn kind(&self) -> ValueKind {
                match self {
                    $(AnyConverter::$scalar(_) => ValueKind::$scalar,)*
                    $(AnyConverter::$composite(_) => ValueKind::$composite,)*
                }
            }

            #[inline]
            pub fn is_scalar(&self) -> bool {
                self.kind().is_scalar()
            }

            /// The separator of a composite converter, `None` for scalars.
            pub fn separator(&self) -> Option<&Separator> {
                match self {
                    $(AnyConverter::$scalar(_) => None,)*
                    $(AnyConverter::$composite(converter) => Some(converter.separator()),)*
                }
            }

            /// Replaces the separator of a composite converter. Scalar
            /// converters are returned unchanged.
            pub fn with_separator(self, separator: impl Into<Separator>) -> Self {
                match self {
                    $(AnyConverter::$composite(converter) => {
                        AnyConverter::$composite(converter.with_separator(separator))
                    })*
                    scalar => scalar,
                }
            }

            /// See [`ValueConverter::parse`].
            pub fn parse(&self, text: &str) -> Result<Value> {
                match self {
                    $(AnyConverter::$scalar(converter) => converter.parse(text).map(Value::$scalar),)*
                    $(AnyConverter::$composite(converter) => converter.parse(text).map(Value::$composite),)*
                }
            }

            /// See [`ValueConverter::write_to`].
            ///
            /// # Errors
            ///
            /// Returns [`Error::KindMismatch`] if `value` is not of this
            /// converter's kind. Nothing is written in that case.
            pub fn write_to<O: ByteOrder>(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
                match (self, value) {
                    $((AnyConverter::$scalar(converter), Value::$scalar(value)) => {
                        converter.write_to::<O>(value, out);
                        Ok(())
                    })*
                    $((AnyConverter::$composite(converter), Value::$composite(value)) => {
                        converter.write_to::<O>(value, out);
                        Ok(())
                    })*
                    _ => Err(self.mismatch(value)),
                }
            }

            /// See [`ValueConverter::read_from`].
            pub fn read_from<O: ByteOrder>(&self, input: &mut &[u8]) -> Result<Value> {
                match self {
                    $(AnyConverter::$scalar(converter) => converter.read_from::<O>(input).map(Value::$scalar),)*
                    $(AnyConverter::$composite(converter) => converter.read_from::<O>(input).map(Value::$composite),)*
                }
            }

            /// See [`ValueConverter::stringify`]. Only an absent string
            /// yields `None`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::KindMismatch`] if `value` is not of this
            /// converter's kind.
            pub fn stringify(&self, value: &Value) -> Result<Option<String>> {
                match (self, value) {
                    $((AnyConverter::$scalar(converter), Value::$scalar(value)) => {
                        Ok(converter.stringify(value).into())
                    })*
                    $((AnyConverter::$composite(converter), Value::$composite(value)) => {
                        Ok(converter.stringify(value).into())
                    })*
                    _ => Err(self.mismatch(value)),
                }
            }
        }
    };
}

define_any! {
    scalar {
        Bool(BoolConverter, bool),
        Int16(Int16Converter, i16),
        UInt16(UInt16Converter, u16),
        Int32(Int32Converter, i32),
        UInt32(UInt32Converter, u32),
        Int64(Int64Converter, i64),
        UInt64(UInt64Converter, u64),
        Single(SingleConverter, f32),
        Double(DoubleConverter, f64),
        String(StringConverter, Option<String>),
    }
    composite {
        Vector2(Vector2Converter, Vector2),
        Vector3(Vector3Converter, Vector3),
        Vector4(Vector4Converter, Vector4),
        Color(ColorConverter, Color),
        Color32(Color32Converter, Color32),
    }
}

impl AnyConverter {
    #[cold]
    fn mismatch(&self, value: &Value) -> Error {
        Error::KindMismatch {
            expected: self.kind(),
            actual: value.kind(),
        }
    }
}

impl From<ValueKind> for AnyConverter {
    fn from(kind: ValueKind) -> Self {
        AnyConverter::new(kind)
    }
}
