use luon::{
    Error, ErrorKind, Key, NumberFormat, ReadOptions, StringFormat, Table, TableKind, Value,
    WriteOptions,
};

#[test]
fn test_error_kinds_and_positions() {
    let cases: &[(&str, ErrorKind, (usize, usize))] = &[
        ("", ErrorKind::NoObject, (1, 1)),
        ("{a=", ErrorKind::NoObject, (1, 4)),
        ("{a=1,,}", ErrorKind::NoObject, (1, 6)),
        ("truth", ErrorKind::AtomExpected, (1, 6)),
        ("0x", ErrorKind::NumberExpected, (1, 3)),
        ("1e", ErrorKind::ExponentExpected, (1, 3)),
        ("'open", ErrorKind::UnfinishedString, (1, 6)),
        ("[x", ErrorKind::LongNotationExpected, (1, 2)),
        ("[[open", ErrorKind::UnclosedLongNotation, (1, 7)),
        ("{1 2}", ErrorKind::UnfinishedTable, (1, 4)),
        ("{[1 x]=2}", ErrorKind::UnclosedKey, (1, 5)),
        ("{[nil]=1}", ErrorKind::NoObject, (1, 9)),
        ("1 2", ErrorKind::EndOfInputExpected, (1, 3)),
    ];
    for (input, kind, position) in cases {
        let err = luon::from_str(input).unwrap_err();
        assert_eq!(err.kind(), Some(*kind), "kind for {input:?}");
        assert_eq!(err.position(), Some(*position), "position for {input:?}");
    }
}

#[test]
fn test_error_positions_track_lines() {
    let err = luon::from_str("{\n  a = 1,\n  b = ,\n}").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NoObject));
    assert_eq!(err.position(), Some((3, 7)));
    assert_eq!(err.to_string(), "not an object at 3:7");
}

#[test]
fn test_duplicate_keys_rejected() {
    assert_eq!(
        luon::from_str("{a=1, a=2}").unwrap_err().kind(),
        Some(ErrorKind::DuplicatedKey)
    );
    assert_eq!(
        luon::from_str("{[1]=1, [1]=2}").unwrap_err().kind(),
        Some(ErrorKind::DuplicatedKey)
    );
    assert_eq!(
        luon::from_str("{['a']=1, a=2}").unwrap_err().kind(),
        Some(ErrorKind::DuplicatedKey)
    );
}

#[test]
fn test_encoding_error_handling() {
    // by default isolated surrogates substitute U+FFFD
    assert_eq!(
        luon::from_str(r"'\u{D800}'").unwrap(),
        Value::from("\u{FFFD}")
    );

    // a strict handler promotes the first encoding error
    let strict = ReadOptions::new().with_encoding_handler(|_| true);
    let err = luon::from_str_with_options(r"'\u{D800}'", strict).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::EncodingError));

    // a broken byte sequence is fatal regardless of the handler
    let lenient = ReadOptions::new().with_encoding_handler(|_| false);
    let err = luon::from_str_with_options(r"'\226'", lenient).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::SevereEncodingError));
}

#[test]
fn test_unterminated_comment_fails_the_read() {
    let options = ReadOptions::new().with_remove_comments(true);
    let err = luon::from_str_with_options("1 --[[left open", options).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnclosedLongComment));
}

#[test]
fn test_comments_keep_error_lines() {
    let options = ReadOptions::new().with_remove_comments(true);
    let text = "{ -- header comment\n  a = 1,\n  b = ,\n}";
    let err = luon::from_str_with_options(text, options).unwrap_err();
    assert_eq!(err.position(), Some((3, 7)));
}

#[test]
fn test_number_format_matrix() {
    let value = Value::from(255.5);
    let write = |format| {
        let options = WriteOptions::new().with_number_format(format);
        luon::to_string_with_options(&value, options).unwrap()
    };
    assert_eq!(write(NumberFormat::Hex), "0xff.8");
    assert_eq!(write(NumberFormat::HexUpper), "0XFF.8");
    assert_eq!(write(NumberFormat::Decimal), "255.5");
    assert_eq!(write(NumberFormat::Scientific), "2.555e2");
    assert_eq!(write(NumberFormat::Compress), "255.5");
}

#[test]
fn test_string_format_matrix() {
    let value = Value::from("it's");
    let write = |format| {
        let options = WriteOptions::new().with_string_format(format);
        luon::to_string_with_options(&value, options).unwrap()
    };
    assert_eq!(write(StringFormat::Single), r"'it\'s'");
    assert_eq!(write(StringFormat::Double), "\"it's\"");
    assert_eq!(write(StringFormat::Long), "[[it's]]");
    assert_eq!(write(StringFormat::LongNewline), "[[\nit's]]");
    assert_eq!(write(StringFormat::Compress), "\"it's\"");
}

#[test]
fn test_custom_indent() {
    let value = luon::from_str("{1,{2}}").unwrap();
    let options = WriteOptions::beautified().with_indent("\t");
    assert_eq!(
        luon::to_string_with_options(&value, options).unwrap(),
        "{\n\t1,\n\t{\n\t\t2\n\t}\n}"
    );
}

#[test]
fn test_custom_encoder_hook() {
    let options = WriteOptions::new().with_custom_encoder(|value, out| match value {
        Value::Nil => {
            out.push_str("false");
            true
        }
        _ => false,
    });
    let value = luon::from_str("{1,nil,2}").unwrap();
    assert_eq!(
        luon::to_string_with_options(&value, options).unwrap(),
        "{1,false,2}"
    );
}

#[test]
fn test_unsupported_key_handling() {
    let mut table = Table::new();
    table.insert(Key::Number(f64::INFINITY), "boom");
    let value = Value::Table(table);

    assert!(matches!(
        luon::to_string(&value),
        Err(Error::UnsupportedObject)
    ));

    let options = WriteOptions::new().with_unsupported_handler(|_, out| {
        out.push_str("0");
        Ok(())
    });
    assert_eq!(
        luon::to_string_with_options(&value, options).unwrap(),
        "{[0]=\"boom\"}"
    );
}

#[test]
fn test_streams() {
    let value = luon::from_reader(std::io::Cursor::new(b"{a='b'}" as &[u8])).unwrap();
    let mut buffer = Vec::new();
    luon::to_writer(&mut buffer, &value).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "{a=\"b\"}");
}

#[test]
fn test_pending_integer_keys_merge_with_gap_drop() {
    let value = luon::from_str("{'a', [3]='c', [2]='b', [6]='far'}").unwrap();
    let table = value.as_table().unwrap();
    assert_eq!(
        table.list(),
        &[Value::from("a"), Value::from("b"), Value::from("c")]
    );
    // the entry past the gap is unreachable and dropped
    assert_eq!(table.len(), 3);
}

#[test]
fn test_table_navigation() {
    let value = luon::from_str("{crew={'ada','grace'}, size=2}").unwrap();
    let table = value.as_table().unwrap();
    assert_eq!(table.kind(), TableKind::Dict);

    let crew = table.get(&Key::from("crew")).unwrap().as_table().unwrap();
    assert_eq!(crew.get(&Key::from(1.0)), Some(&Value::from("ada")));

    let entries: Vec<(Key, &Value)> = table.iter().collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_serde_json_interop() {
    let value = luon::from_str("{name='probe', ok=true, ids={1,2}}").unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"name":"probe","ok":true,"ids":[1.0,2.0]}"#);

    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_display_matches_default_writer() {
    let value = luon::from_str("{ 1 , 2 }").unwrap();
    assert_eq!(value.to_string(), "{1,2}");
    assert_eq!(value.to_string(), luon::to_string(&value).unwrap());
}
