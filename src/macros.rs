//! Convenience macros for building LUON values.
//!
//! The [`luon!`](crate::luon) macro builds a [`Value`](crate::Value) tree
//! from notation that mirrors LUON itself: `nil`, booleans, tables with
//! positional entries, `key = value` pairs and `[expr] = value` pairs.
//! Anything else is an expression converted through `Value::from`.
//!
//! ```rust
//! use luon::luon;
//!
//! let probe = luon!({
//!     name = "voyager",
//!     active = true,
//!     flybys = { "jupiter", "saturn" },
//! });
//! assert_eq!(
//!     luon::to_string(&probe).unwrap(),
//!     "{name=\"voyager\",active=true,flybys={\"jupiter\",\"saturn\"}}"
//! );
//! ```
//!
//! Multi-token expressions need parentheses: `luon!({ (-1.0), (2.0 + 3.0) })`.

/// Builds a [`Value`](crate::Value) from LUON-like notation.
///
/// # Examples
///
/// ```rust
/// use luon::{luon, Key, Value};
///
/// assert_eq!(luon!(nil), Value::Nil);
/// assert_eq!(luon!(true), Value::Bool(true));
/// assert_eq!(luon!(42.0), Value::from(42.0));
/// assert_eq!(luon!("text"), Value::from("text"));
///
/// let table = luon!({ 1.0, 2.0, label = "pair" });
/// let table = table.as_table().unwrap();
/// assert_eq!(table.list().len(), 2);
/// assert_eq!(table.get(&Key::from("label")), Some(&Value::from("pair")));
/// ```
#[macro_export]
macro_rules! luon {
    (nil) => {
        $crate::Value::Nil
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };
    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };
    ({ $($entries:tt)* }) => {{
        let mut table = $crate::Table::new();
        $crate::luon_table!(table, $($entries)*);
        $crate::Value::Table(table)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Entry muncher behind [`luon!`]; not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! luon_table {
    ($table:ident) => {};
    ($table:ident,) => {};
    ($table:ident, [$key:expr] = $value:tt $(, $($rest:tt)*)?) => {
        $table.insert($crate::Key::from($key), $crate::luon!($value));
        $crate::luon_table!($table $(, $($rest)*)?);
    };
    ($table:ident, $key:ident = $value:tt $(, $($rest:tt)*)?) => {
        $table.insert($crate::Key::from(stringify!($key)), $crate::luon!($value));
        $crate::luon_table!($table $(, $($rest)*)?);
    };
    ($table:ident, $value:tt $(, $($rest:tt)*)?) => {
        $table.push($crate::luon!($value));
        $crate::luon_table!($table $(, $($rest)*)?);
    };
}
