//! Dynamic value representation for LUON data.
//!
//! This module provides the [`Value`] enum which represents any valid LUON
//! value, and the [`Table`] type backing its composite variant.
//!
//! ## Core Types
//!
//! - [`Value`]: any LUON value (nil, boolean, number, string, table)
//! - [`Table`]: a Lua-style table with a positional list part and an
//!   insertion-ordered dictionary part
//! - [`Key`]: a table key (boolean, number, string, or table)
//! - [`TableKind`]: the content classification of a table
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use luon::{Table, Value};
//!
//! let nil = Value::Nil;
//! let boolean = Value::from(true);
//! let number = Value::from(42.0);
//! let text = Value::from("hello");
//!
//! // Using the luon! macro
//! use luon::luon;
//! let table = luon!({ name = "Alice", age = 30.0 });
//! ```
//!
//! ### Reading and Navigating
//!
//! ```rust
//! use luon::{Key, Value};
//!
//! let value = luon::from_str("{name='mission', crew=6}").unwrap();
//! let table = value.as_table().unwrap();
//! assert_eq!(table.get(&Key::from("crew")), Some(&Value::from(6.0)));
//! ```
//!
//! ### Classification
//!
//! ```rust
//! use luon::{Table, TableKind, Value};
//!
//! let mut table = Table::new();
//! assert_eq!(table.kind(), TableKind::List);
//! table.push(Value::from(1.0));
//! assert_eq!(table.kind(), TableKind::List);
//! table.insert("name", "probe");
//! assert_eq!(table.kind(), TableKind::Mixed);
//! ```

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed representation of any valid LUON value.
///
/// Numbers are IEEE doubles throughout, as in Lua. The reader only ever
/// produces finite numbers; NaN and the infinities can be built
/// programmatically and encode as `nil`.
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// let value = luon::from_str("{1,2,3}").unwrap();
/// assert!(value.is_table());
/// assert_eq!(value.as_table().unwrap().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Table(Table),
}

/// Content classification of a [`Table`].
///
/// Tables are classified by what they hold, not by how they were built: a
/// table whose dictionary part is empty is a `List` (the empty table is an
/// empty list), one whose list part is empty is a `Dict`, and one with both
/// parts populated is `Mixed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    List,
    Dict,
    Mixed,
}

/// A Lua-style table: a positional list part holding the values at keys
/// `1..=len`, and an insertion-ordered dictionary part for everything else.
///
/// # Examples
///
/// ```rust
/// use luon::{Key, Table, Value};
///
/// let mut table = Table::new();
/// table.push(10.0);
/// table.push(20.0);
/// table.insert("label", "pair");
///
/// // Integer keys in range resolve into the list part, Lua-style.
/// assert_eq!(table.get(&Key::from(2.0)), Some(&Value::from(20.0)));
/// assert_eq!(table.get(&Key::from("label")), Some(&Value::from("pair")));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    list: Vec<Value>,
    dict: IndexMap<Key, Value>,
}

/// A table key.
///
/// Keys compare and hash totally: `-0.0` and `0.0` are the same key, NaN is
/// equal to itself bit-for-bit, and table-valued keys compare structurally
/// with entry order ignored.
#[derive(Clone, Debug)]
pub enum Key {
    Bool(bool),
    Number(f64),
    String(String),
    Table(Table),
}

/// Key bits with the two zeros collapsed, so `-0.0` and `0.0` hash alike.
fn normalized_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Nil => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            state.write_u64(normalized_bits(*n));
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Table(t) => {
            state.write_u8(4);
            hash_table(t, state);
        }
    }
}

fn hash_table<H: Hasher>(table: &Table, state: &mut H) {
    state.write_usize(table.list.len());
    for item in &table.list {
        hash_value(item, state);
    }
    // Dictionary entry hashes combine by XOR; equality ignores entry order,
    // so the hash must as well.
    let mut combined = 0u64;
    for (key, value) in &table.dict {
        let mut entry = DefaultHasher::new();
        key.hash(&mut entry);
        hash_value(value, &mut entry);
        combined ^= entry.finish();
    }
    state.write_u64(combined);
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Number(a), Key::Number(b)) => normalized_bits(*a) == normalized_bits(*b),
            (Key::String(a), Key::String(b)) => a == b,
            (Key::Table(a), Key::Table(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Bool(b) => {
                state.write_u8(0);
                b.hash(state);
            }
            Key::Number(n) => {
                state.write_u8(1);
                state.write_u64(normalized_bits(*n));
            }
            Key::String(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            Key::Table(t) => {
                state.write_u8(3);
                hash_table(t, state);
            }
        }
    }
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content classification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::TableKind;
    ///
    /// let dict = luon::from_str("{a=1,b=2}").unwrap();
    /// assert_eq!(dict.as_table().unwrap().kind(), TableKind::Dict);
    /// ```
    #[must_use]
    pub fn kind(&self) -> TableKind {
        if self.dict.is_empty() {
            TableKind::List
        } else if self.list.is_empty() {
            TableKind::Dict
        } else {
            TableKind::Mixed
        }
    }

    /// Appends a value to the list part.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.list.push(value.into());
    }

    /// Inserts a key-value pair, returning the value it replaced.
    ///
    /// Integer keys follow Lua's table semantics: a key already covered by
    /// the list part replaces that slot, the key one past the list end
    /// appends, and everything else lands in the dictionary part.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(index) = self.list_index(&key) {
            return Some(std::mem::replace(&mut self.list[index], value));
        }
        if let Key::Number(n) = key {
            if n == (self.list.len() + 1) as f64 {
                self.list.push(value);
                return None;
            }
        }
        self.dict.insert(key, value)
    }

    /// Looks up a key. Exact integer keys in `1..=len` resolve into the
    /// list part; everything else into the dictionary part.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self.list_index(key) {
            Some(index) => self.list.get(index),
            None => self.dict.get(key),
        }
    }

    /// Mutable variant of [`Table::get`].
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self.list_index(key) {
            Some(index) => self.list.get_mut(index),
            None => self.dict.get_mut(key),
        }
    }

    /// Returns `true` if the key resolves to an entry.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Total number of entries across both parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len() + self.dict.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.dict.is_empty()
    }

    /// The list part: the values stored at keys `1..=len`.
    #[must_use]
    pub fn list(&self) -> &[Value] {
        &self.list
    }

    /// Iterates the dictionary part in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.dict.iter()
    }

    /// Iterates every entry, synthesizing the integer keys of the list part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::Key;
    ///
    /// let value = luon::from_str("{true,x=1}").unwrap();
    /// let keys: Vec<Key> = value.as_table().unwrap().iter().map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec![Key::from(1.0), Key::from("x")]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> + '_ {
        let positional = self
            .list
            .iter()
            .enumerate()
            .map(|(index, value)| (Key::Number((index + 1) as f64), value));
        let named = self.dict.iter().map(|(key, value)| (key.clone(), value));
        positional.chain(named)
    }

    fn list_index(&self, key: &Key) -> Option<usize> {
        if let Key::Number(n) = key {
            if n.fract() == 0.0 && *n >= 1.0 && *n <= self.list.len() as f64 {
                return Some(*n as usize - 1);
            }
        }
        None
    }
}

impl Value {
    /// Returns `true` if the value is nil.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::Value;
    ///
    /// assert_eq!(luon::from_str("0xFF").unwrap().as_f64(), Some(255.0));
    /// assert_eq!(Value::from("text").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a table, returns a mutable reference to it.
    /// Otherwise returns `None`.
    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// Formats the value as compact LUON (the default writer profile).
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// assert_eq!(Value::from(true).to_string(), "true");
/// assert_eq!(Value::from("hi").to_string(), "\"hi\"");
/// assert_eq!(luon::from_str("{ 1 , 2 }").unwrap().to_string(), "{1,2}");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::writer::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Table(value.into_iter().collect())
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(b) => Value::Bool(b),
            Key::Number(n) => Value::Number(n),
            Key::String(s) => Value::String(s),
            Key::Table(t) => Value::Table(t),
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Number(value as f64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Number(value as f64)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Number(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<Table> for Key {
    fn from(value: Table) -> Self {
        Key::Table(value)
    }
}

impl FromIterator<Value> for Table {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Table {
            list: iter.into_iter().collect(),
            dict: IndexMap::new(),
        }
    }
}

impl FromIterator<(Key, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

fn serialize_table<S>(table: &Table, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match table.kind() {
        TableKind::List => {
            let mut seq = serializer.serialize_seq(Some(table.list().len()))?;
            for element in table.list() {
                seq.serialize_element(element)?;
            }
            seq.end()
        }
        _ => {
            let mut map = serializer.serialize_map(Some(table.len()))?;
            for (index, element) in table.list().iter().enumerate() {
                map.serialize_entry(&((index + 1) as f64), element)?;
            }
            for (key, value) in table.entries() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Table(t) => serialize_table(t, serializer),
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Bool(b) => serializer.serialize_bool(*b),
            Key::Number(n) => serializer.serialize_f64(*n),
            Key::String(s) => serializer.serialize_str(s),
            Key::Table(t) => serialize_table(t, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid LUON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut table = Table::new();
                while let Some(element) = seq.next_element::<Value>()? {
                    table.push(element);
                }
                Ok(Value::Table(table))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut table = Table::new();
                while let Some((key, value)) = map.next_entry::<Key, Value>()? {
                    table.insert(key, value);
                }
                Ok(Value::Table(table))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, number or string table key")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Key::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Key::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Key::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Key::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Key::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Key::String(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let mut table = Table::new();
        assert_eq!(table.kind(), TableKind::List);

        table.push(1.0);
        table.push(2.0);
        assert_eq!(table.kind(), TableKind::List);

        table.insert("a", true);
        assert_eq!(table.kind(), TableKind::Mixed);

        let mut dict = Table::new();
        dict.insert("only", "entry");
        assert_eq!(dict.kind(), TableKind::Dict);
    }

    #[test]
    fn test_lua_indexing() {
        let mut table = Table::new();
        table.push("first");
        table.push("second");
        table.insert(0.5, "half");

        assert_eq!(table.get(&Key::from(1.0)), Some(&Value::from("first")));
        assert_eq!(table.get(&Key::from(2.0)), Some(&Value::from("second")));
        assert_eq!(table.get(&Key::from(0.5)), Some(&Value::from("half")));
        assert_eq!(table.get(&Key::from(3.0)), None);
        assert_eq!(table.get(&Key::from(1.5)), None);
    }

    #[test]
    fn test_insert_boundary_appends() {
        let mut table = Table::new();
        // Key 1 on an empty table is one past the list end, so it appends.
        table.insert(1.0, "a");
        table.insert(2.0, "b");
        assert_eq!(table.kind(), TableKind::List);
        assert_eq!(table.list().len(), 2);

        // An in-range integer key replaces the slot.
        let old = table.insert(1.0, "A");
        assert_eq!(old, Some(Value::from("a")));
        assert_eq!(table.list()[0], Value::from("A"));

        // Out of range goes to the dictionary part.
        table.insert(9.0, "far");
        assert_eq!(table.kind(), TableKind::Mixed);
    }

    #[test]
    fn test_key_zero_normalization() {
        assert_eq!(Key::from(0.0), Key::from(-0.0));

        let mut table = Table::new();
        table.insert(-0.0, "zero");
        assert_eq!(table.get(&Key::from(0.0)), Some(&Value::from("zero")));
    }

    #[test]
    fn test_table_keys_ignore_entry_order() {
        let mut first = Table::new();
        first.insert("a", 1.0);
        first.insert("b", 2.0);

        let mut second = Table::new();
        second.insert("b", 2.0);
        second.insert("a", 1.0);

        assert_eq!(Key::from(first.clone()), Key::from(second.clone()));

        let mut outer = Table::new();
        outer.insert(first, "hit");
        assert_eq!(outer.get(&Key::from(second)), Some(&Value::from("hit")));
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42u8), Value::Number(42.0));
        assert_eq!(Value::from(3.5f64), Value::Number(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
        assert!(Value::from(Table::new()).is_table());
    }

    #[test]
    fn test_iter_synthesizes_list_keys() {
        let mut table = Table::new();
        table.push(true);
        table.push(false);
        table.insert("x", 1.0);

        let keys: Vec<Key> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![Key::from(1.0), Key::from(2.0), Key::from("x")]
        );
    }

    #[test]
    fn test_serde_json_interop() {
        let value = crate::from_str("{name='x',list={1,2}}").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"name":"x","list":[1.0,2.0]}"#);

        let back: Value = serde_json::from_str(r#"{"n":1,"flag":true,"items":["a"]}"#).unwrap();
        let table = back.as_table().unwrap();
        assert_eq!(table.get(&Key::from("n")), Some(&Value::from(1.0)));
        assert_eq!(table.get(&Key::from("flag")), Some(&Value::from(true)));
        let items = table.get(&Key::from("items")).unwrap().as_table().unwrap();
        assert_eq!(items.list(), &[Value::from("a")]);
    }
}
