use cellconv::{
    BigEndian as BE, BoolConverter, DoubleConverter, Error, Int16Converter, Int32Converter,
    Int64Converter, LittleEndian as LE, SingleConverter, UInt16Converter, UInt32Converter,
    UInt64Converter, ValueConverter, from_slice, to_vec,
};

// ==================== Helper Functions ====================

fn round_trip<C: ValueConverter>(converter: &C, value: C::Value) -> C::Value {
    from_slice(converter, &to_vec(converter, &value)).unwrap()
}

fn assert_literal_error<C: ValueConverter>(converter: &C, text: &str)
where
    C::Value: std::fmt::Debug,
{
    match converter.parse(text) {
        Err(Error::InvalidLiteral { type_name, input }) => {
            assert_eq!(type_name, C::TYPE_NAME);
            assert_eq!(input, text);
        }
        other => panic!("Expected InvalidLiteral for {text:?}, got {other:?}"),
    }
}

// ==================== Bool ====================

#[test]
fn test_bool_parse_forms() {
    let c = BoolConverter;
    assert!(c.parse("true").unwrap());
    assert!(c.parse("True").unwrap());
    assert!(c.parse("TRUE").unwrap());
    assert!(c.parse(" true ").unwrap());
    assert!(c.parse("1").unwrap());
    assert!(!c.parse("false").unwrap());
    assert!(!c.parse("False").unwrap());
    assert!(!c.parse("0").unwrap());
}

#[test]
fn test_bool_parse_rejects() {
    let c = BoolConverter;
    assert_literal_error(&c, "");
    assert_literal_error(&c, "yes");
    assert_literal_error(&c, "2");
    assert_literal_error(&c, "tru");
}

#[test]
fn test_bool_binary() {
    let c = BoolConverter;
    assert_eq!(to_vec(&c, &true), [1]);
    assert_eq!(to_vec(&c, &false), [0]);
    assert!(round_trip(&c, true));
    assert!(!round_trip(&c, false));
    // any nonzero byte reads as true
    assert!(from_slice(&c, &[0x7F]).unwrap());
}

#[test]
fn test_bool_stringify_round_trip() {
    let c = BoolConverter;
    for value in [true, false] {
        assert_eq!(c.parse(&c.stringify(&value)).unwrap(), value);
    }
}

// ==================== Integers ====================

macro_rules! integer_round_trips {
    ($($test:ident: $converter:ident($type:ty, $width:literal)),* $(,)?) => {
        $(
            #[test]
            fn $test() {
                let c = $converter;
                for value in [<$type>::MIN, <$type>::MAX, 0 as $type, 1 as $type, 42 as $type] {
                    assert_eq!(c.parse(&c.stringify(&value)).unwrap(), value);
                    let bytes = to_vec(&c, &value);
                    assert_eq!(bytes.len(), $width);
                    assert_eq!(bytes, value.to_le_bytes());
                    assert_eq!(round_trip(&c, value), value);
                }
                for value in [0 as $type, 0x1F as $type, <$type>::MAX] {
                    assert_eq!(c.parse(&format!("0x{value:x}")).unwrap(), value);
                    assert_eq!(c.parse(&format!("0X{value:X}")).unwrap(), value);
                }
                assert!(c.is_scalar());
            }
        )*
    };
}

integer_round_trips!(
    test_int16: Int16Converter(i16, 2),
    test_uint16: UInt16Converter(u16, 2),
    test_int32: Int32Converter(i32, 4),
    test_uint32: UInt32Converter(u32, 4),
    test_int64: Int64Converter(i64, 8),
    test_uint64: UInt64Converter(u64, 8),
);

#[test]
fn test_integer_hex_is_twos_complement() {
    assert_eq!(Int16Converter.parse("0xFFFF").unwrap(), -1);
    assert_eq!(Int16Converter.parse("0x8000").unwrap(), i16::MIN);
    assert_eq!(Int32Converter.parse("0xffffffff").unwrap(), -1);
    assert_eq!(Int64Converter.parse("0x8000000000000000").unwrap(), i64::MIN);
    assert_eq!(UInt64Converter.parse("0xFFFFFFFFFFFFFFFF").unwrap(), u64::MAX);
}

#[test]
fn test_integer_hex_prefix_case_and_whitespace() {
    assert_eq!(Int32Converter.parse("0x1A").unwrap(), 26);
    assert_eq!(Int32Converter.parse("0X1a").unwrap(), 26);
    assert_eq!(Int32Converter.parse("  0x1a\t").unwrap(), 26);
    assert_eq!(UInt16Converter.parse("0x00ff").unwrap(), 255);
}

#[test]
fn test_integer_parse_rejects() {
    assert_literal_error(&Int32Converter, "");
    assert_literal_error(&Int32Converter, "   ");
    assert_literal_error(&Int32Converter, "abc");
    assert_literal_error(&Int32Converter, "1.5");
    assert_literal_error(&Int32Converter, "0x");
    assert_literal_error(&Int32Converter, "0xG1");
    assert_literal_error(&Int32Converter, "0x+1");
    assert_literal_error(&Int32Converter, "2147483648");
    assert_literal_error(&Int16Converter, "0x10000");
    assert_literal_error(&UInt16Converter, "-1");
    assert_literal_error(&UInt32Converter, "0x1_0");
}

#[test]
fn test_integer_decimal_signs() {
    assert_eq!(Int32Converter.parse("-17").unwrap(), -17);
    assert_eq!(Int32Converter.parse("+17").unwrap(), 17);
    assert_eq!(Int64Converter.parse("-9223372036854775808").unwrap(), i64::MIN);
    assert_eq!(UInt32Converter.parse("4294967295").unwrap(), u32::MAX);
}

#[test]
fn test_integer_byte_order() {
    let mut out = Vec::new();
    Int16Converter.write_to::<BE>(&0x1234, &mut out);
    Int16Converter.write_to::<LE>(&0x1234, &mut out);
    assert_eq!(out, [0x12, 0x34, 0x34, 0x12]);

    let mut input = out.as_slice();
    assert_eq!(Int16Converter.read_from::<BE>(&mut input).unwrap(), 0x1234);
    assert_eq!(Int16Converter.read_from::<LE>(&mut input).unwrap(), 0x1234);
    assert!(input.is_empty());
}

#[test]
fn test_integer_sequential_reads() {
    let mut out = Vec::new();
    Int32Converter.write_to::<LE>(&-2, &mut out);
    UInt64Converter.write_to::<LE>(&7, &mut out);
    assert_eq!(&out[..4], &[0xFE, 0xFF, 0xFF, 0xFF]);

    let mut input = out.as_slice();
    assert_eq!(Int32Converter.read_from::<LE>(&mut input).unwrap(), -2);
    assert_eq!(UInt64Converter.read_from::<LE>(&mut input).unwrap(), 7);
    assert!(input.is_empty());
}

// ==================== Floats ====================

#[test]
fn test_single_round_trips() {
    let c = SingleConverter;
    for value in [
        0.0f32,
        1.0,
        -1.5,
        0.1,
        1e-7,
        1e20,
        f32::MIN,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::EPSILON,
    ] {
        let text = c.stringify(&value);
        assert_eq!(c.parse(&text).unwrap(), value, "text {text}");
        assert_eq!(round_trip(&c, value).to_bits(), value.to_bits());
    }
}

#[test]
fn test_double_round_trips() {
    let c = DoubleConverter;
    for value in [0.0f64, -2.25, 0.1, 1e300, f64::MIN, f64::MAX, f64::MIN_POSITIVE] {
        let text = c.stringify(&value);
        assert_eq!(c.parse(&text).unwrap(), value, "text {text}");
        assert_eq!(round_trip(&c, value).to_bits(), value.to_bits());
    }
    assert_eq!(to_vec(&c, &1.0), 1.0f64.to_le_bytes());
}

#[test]
fn test_float_negative_zero() {
    let c = SingleConverter;
    assert_eq!(c.stringify(&-0.0), "-0");
    let parsed = c.parse("-0").unwrap();
    assert_eq!(parsed, 0.0);
    assert!(parsed.is_sign_negative());
    assert_eq!(round_trip(&c, -0.0f32).to_bits(), (-0.0f32).to_bits());

    let d = DoubleConverter;
    assert!(d.parse(&d.stringify(&-0.0)).unwrap().is_sign_negative());
}

#[test]
fn test_float_non_finite() {
    let c = SingleConverter;
    assert_eq!(c.stringify(&f32::INFINITY), "Infinity");
    assert_eq!(c.stringify(&f32::NEG_INFINITY), "-Infinity");
    assert_eq!(c.stringify(&f32::NAN), "NaN");
    assert_eq!(c.parse("Infinity").unwrap(), f32::INFINITY);
    assert_eq!(c.parse("-Infinity").unwrap(), f32::NEG_INFINITY);
    assert_eq!(c.parse("inf").unwrap(), f32::INFINITY);
    assert!(c.parse("NaN").unwrap().is_nan());
    assert!(DoubleConverter.parse("nan").unwrap().is_nan());
}

#[test]
fn test_float_invariant_grammar() {
    let c = DoubleConverter;
    assert_eq!(c.parse("1.5").unwrap(), 1.5);
    assert_eq!(c.parse(" 1.5 ").unwrap(), 1.5);
    assert_eq!(c.parse("1e3").unwrap(), 1000.0);
    assert_eq!(c.parse("-2.5E-1").unwrap(), -0.25);
    assert_eq!(c.parse(".5").unwrap(), 0.5);
    assert_literal_error(&c, "1,5");
    assert_literal_error(&c, "");
    assert_literal_error(&c, "0x10");
    assert_literal_error(&SingleConverter, "one");
}

#[test]
fn test_scalar_flags() {
    assert!(BoolConverter.is_scalar());
    assert!(SingleConverter.is_scalar());
    assert!(DoubleConverter.is_scalar());
    assert!(BoolConverter::IS_SCALAR);
    assert!(Int64Converter::IS_SCALAR);
}
