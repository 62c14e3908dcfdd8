//! End-to-end notation coverage: one test per syntax area, exercising the
//! reader, the writer profiles and the stripping passes on realistic input.

use luon::{Key, ReadOptions, TableKind, Value};

fn read(input: &str) -> Value {
    luon::from_str(input).unwrap()
}

#[test]
fn test_read_atoms() {
    assert_eq!(read("true"), Value::Bool(true));
    assert_eq!(read("false"), Value::Bool(false));
    assert_eq!(read("nil"), Value::Nil);
}

#[test]
fn test_read_numbers() {
    assert_eq!(read("12345"), Value::from(12345.0));
    assert_eq!(read("-1"), Value::from(-1.0));
    assert_eq!(read("0xFF"), Value::from(255.0));
    assert_eq!(read("0xFFP1"), Value::from(510.0));
    assert_eq!(read("1e10"), Value::from(1e10));
    assert_eq!(read("0.1"), Value::from(0.1));
}

#[test]
fn test_read_strings() {
    assert_eq!(read("'string'"), Value::from("string"));
    assert_eq!(read("\"string\""), Value::from("string"));
    assert_eq!(read("[[string]]"), Value::from("string"));
    assert_eq!(read("[=[string]=]"), Value::from("string"));
}

#[test]
fn test_read_byte_escapes_decode_utf8() {
    assert_eq!(read(r"'\226\130\172'"), Value::from("€"));
    assert_eq!(read(r"'\xF0\x90\x8D\x88'"), Value::from("𐍈"));
}

#[test]
fn test_read_tables() {
    let value = read("{a=1, b=2}");
    let table = value.as_table().unwrap();
    assert_eq!(table.kind(), TableKind::Dict);
    assert_eq!(table.get(&Key::from("a")), Some(&Value::from(1.0)));
    assert_eq!(table.get(&Key::from("b")), Some(&Value::from(2.0)));

    let value = read("{[ [[yay]]]=true}");
    let table = value.as_table().unwrap();
    assert_eq!(table.get(&Key::from("yay")), Some(&Value::from(true)));

    let value = read("{   much    =   'spacing'   }");
    let table = value.as_table().unwrap();
    assert_eq!(table.get(&Key::from("much")), Some(&Value::from("spacing")));

    let value = read("{ 1 , 2 }");
    let table = value.as_table().unwrap();
    assert_eq!(table.kind(), TableKind::List);
    assert_eq!(table.list(), &[Value::from(1.0), Value::from(2.0)]);
}

#[test]
fn test_read_multiline_long_string() {
    assert_eq!(
        read("[[_[_]\n_[_]\n_[_]\n_[]\n]]"),
        Value::from("_[_]\n_[_]\n_[_]\n_[]\n")
    );
}

#[test]
fn test_read_with_comment_removal() {
    let options = || ReadOptions::new().with_remove_comments(true);
    assert_eq!(
        luon::from_str_with_options("10--comment", options()).unwrap(),
        Value::from(10.0)
    );
    assert_eq!(
        luon::from_str_with_options("10--[[comment]]0", options()).unwrap(),
        Value::from(100.0)
    );
}

#[test]
fn test_strip_comments() {
    assert_eq!(luon::strip_comments("some--comment"), "some");
    assert_eq!(luon::strip_comments("some--[[multi-line comment]]"), "some");
    assert_eq!(
        luon::strip_comments("some--[=[comment\n]=]next line"),
        "some\nnext line"
    );
    assert_eq!(luon::strip_comments("'--not a comment'"), "'--not a comment'");
}

#[test]
fn test_strip_whitespace() {
    assert_eq!(luon::strip_whitespace("{ 1 , 2 }"), "{1,2}");
    assert_eq!(luon::strip_whitespace("'some tests'"), "'some tests'");
    assert_eq!(
        luon::strip_whitespace("[===[some tests]===]"),
        "[===[some tests]===]"
    );
}

#[test]
fn test_write_defaults() {
    assert_eq!(luon::to_string(&Value::Number(f64::NAN)).unwrap(), "nil");
    assert_eq!(luon::to_string(&Value::Number(f64::INFINITY)).unwrap(), "nil");
    assert_eq!(
        luon::to_string(&read("{true,false,true,nil}")).unwrap(),
        "{true,false,true,nil}"
    );
    assert_eq!(luon::to_string(&read("{a=1,b=2}")).unwrap(), "{a=1,b=2}");
    assert_eq!(luon::to_string(&Value::from("\u{7}")).unwrap(), "\"\\a\"");
    assert_eq!(luon::to_string(&Value::from(123456.0)).unwrap(), "1.23456e5");
    assert_eq!(luon::to_string(&Value::from(101.0)).unwrap(), "1.01e2");
    assert_eq!(luon::to_string(&Value::from(10.0)).unwrap(), "1e1");
}

#[test]
fn test_write_compressed() {
    assert_eq!(
        luon::to_string_compressed(&Value::from("test'test")).unwrap(),
        "\"test'test\""
    );
    assert_eq!(luon::to_string_compressed(&Value::from(1000000.0)).unwrap(), "1e6");
    assert_eq!(luon::to_string_compressed(&Value::from(0.1)).unwrap(), ".1");
    assert_eq!(
        luon::to_string_compressed(&Value::from(255.99609375)).unwrap(),
        "0xff.ff"
    );
    assert_eq!(luon::to_string_compressed(&Value::from(-1.0)).unwrap(), "-1");
}

#[test]
fn test_write_beautified() {
    assert_eq!(
        luon::to_string_beautified(&read("{true,false,true,nil}")).unwrap(),
        "{\n  true,\n  false,\n  true,\n  nil\n}"
    );
    assert_eq!(
        luon::to_string_beautified(&read("{{1,2},{3,4}}")).unwrap(),
        "{\n  {\n    1,\n    2\n  },\n  {\n    3,\n    4\n  }\n}"
    );
    assert_eq!(luon::to_string_beautified(&Value::from(0.0)).unwrap(), "0");
    assert_eq!(luon::to_string_beautified(&Value::from(0.001)).unwrap(), "1e-3");
    assert_eq!(luon::to_string_beautified(&Value::from(0.69)).unwrap(), "0.69");
}

#[test]
fn test_beautified_long_strings_pick_safe_levels() {
    let newlines = "\n".repeat(10);

    let text = format!("{newlines}]==]");
    assert_eq!(
        luon::to_string_beautified(&Value::from(text.clone())).unwrap(),
        format!("[=[\n{text}]=]")
    );

    let text = format!("{newlines}]==");
    assert_eq!(
        luon::to_string_beautified(&Value::from(text.clone())).unwrap(),
        format!("[[\n{text}]]")
    );

    let text = format!("{newlines}]]=]==]");
    assert_eq!(
        luon::to_string_beautified(&Value::from(text.clone())).unwrap(),
        format!("[===[\n{text}]===]")
    );
}

#[test]
fn test_whole_document_round_trip() {
    let text = "\
{
  mission = 'voyager', -- primary identifier
  launched = 2000,
  active = true,
  flybys = { 'jupiter', 'saturn', 'uranus', 'neptune' },
  notes = [[no escapes
in here]],
  [0.5] = 'fractional key'
}";
    let options = ReadOptions::new().with_remove_comments(true);
    let value = luon::from_str_with_options(text, options).unwrap();

    for rendered in [
        luon::to_string(&value).unwrap(),
        luon::to_string_compressed(&value).unwrap(),
        luon::to_string_beautified(&value).unwrap(),
    ] {
        assert_eq!(luon::from_str(&rendered).unwrap(), value);
    }
}
