use luon::{luon, Key, TableKind, Value};

#[test]
fn test_luon_macro_primitives() {
    assert_eq!(luon!(nil), Value::Nil);
    assert_eq!(luon!(true), Value::Bool(true));
    assert_eq!(luon!(false), Value::Bool(false));
    assert_eq!(luon!(42.0), Value::Number(42.0));
    assert_eq!(luon!(3.5), Value::Number(3.5));
    assert_eq!(luon!("hello"), Value::String("hello".to_string()));
}

#[test]
fn test_luon_macro_lists() {
    assert_eq!(luon!({}), Value::Table(luon::Table::new()));

    let list = luon!({ 1.0, 2.0, 3.0 });
    let table = list.as_table().unwrap();
    assert_eq!(table.kind(), TableKind::List);
    assert_eq!(
        table.list(),
        &[Value::from(1.0), Value::from(2.0), Value::from(3.0)]
    );
}

#[test]
fn test_luon_macro_dicts() {
    let data = luon!({
        name = "Alice",
        age = 30.0,
        tags = { "rust", "lua" },
    });
    let table = data.as_table().unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(&Key::from("name")), Some(&Value::from("Alice")));
    assert_eq!(table.get(&Key::from("age")), Some(&Value::from(30.0)));

    let tags = table.get(&Key::from("tags")).unwrap().as_table().unwrap();
    assert_eq!(tags.list(), &[Value::from("rust"), Value::from("lua")]);
}

#[test]
fn test_luon_macro_bracketed_keys() {
    let data = luon!({ [2.5] = "x", ["not a word"] = "y" });
    let table = data.as_table().unwrap();
    assert_eq!(table.get(&Key::from(2.5)), Some(&Value::from("x")));
    assert_eq!(table.get(&Key::from("not a word")), Some(&Value::from("y")));
}

#[test]
fn test_luon_macro_writes_as_notation() {
    let data = luon!({ on = true, level = 3.0 });
    assert_eq!(luon::to_string(&data).unwrap(), "{on=true,level=3}");
}

#[test]
fn test_luon_macro_agrees_with_reader() {
    let built = luon!({ "first", "second", label = "pair" });
    let parsed = luon::from_str("{'first', 'second', label='pair'}").unwrap();
    assert_eq!(built, parsed);
}
