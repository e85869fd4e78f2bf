use cellconv::{AnyConverter, BigEndian, ByteOrder, LittleEndian, ValueKind};

/// Every binary value read back must re-encode to the bytes it came from,
/// except vectors, whose read path is not the inverse of the write path.
fn test_binary<O: ByteOrder>(converter: &AnyConverter, data: &[u8]) {
    let mut input = data;
    let Ok(value) = converter.read_from::<O>(&mut input) else {
        assert_eq!(input.len(), data.len());
        return;
    };
    let consumed = &data[..data.len() - input.len()];
    let mut out = Vec::new();
    converter
        .write_to::<O>(&value, &mut out)
        .expect("value read by a converter matches its kind");
    let lossy = matches!(
        converter.kind(),
        ValueKind::Bool | ValueKind::String | ValueKind::Vector2 | ValueKind::Vector3 | ValueKind::Vector4
    );
    if !lossy {
        assert_eq!(out, consumed);
    }
}

fn test_text(converter: &AnyConverter, text: &str) {
    if let Ok(value) = converter.parse(text) {
        let _ = converter.stringify(&value);
        let mut out = Vec::new();
        let _ = converter.write_to::<LittleEndian>(&value, &mut out);
    }
}

pub fn test(data: &[u8]) {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let kind = ValueKind::ALL[selector as usize % ValueKind::ALL.len()];
    let converter = AnyConverter::new(kind);

    test_binary::<LittleEndian>(&converter, rest);
    test_binary::<BigEndian>(&converter, rest);

    if let Ok(text) = std::str::from_utf8(rest) {
        test_text(&converter, text);
        test_text(&converter.clone().with_separator(";"), text);
    }
}
