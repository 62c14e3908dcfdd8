//! # luon
//!
//! A reader and writer for LUON, a data notation using Lua's table literal
//! syntax.
//!
//! ## What is LUON?
//!
//! LUON is to Lua what JSON is to JavaScript: the literal subset of the
//! language, used as a notation for structured data. A LUON document is a
//! single Lua expression built from `nil`, booleans, numbers, strings and
//! tables:
//!
//! ```text
//! {
//!   name = 'voyager',
//!   launched = 1977,
//!   active = true,
//!   flybys = { 'jupiter', 'saturn' },
//!   [0.5] = 'a non-identifier key'
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Full literal syntax**: both quote styles with Lua's complete escape
//!   set, long-bracket strings, hex numbers with binary exponents, tables
//!   mixing positional and keyed entries
//! - **Faithful text handling**: `\xHH` and `\DDD` byte escapes reassemble
//!   into UTF-8 characters; encoding errors are recoverable or fatal the
//!   way a strict decoder would treat them
//! - **Configurable output**: compact, shortest-possible and pretty
//!   profiles, with per-type number and string formats
//! - **Comment stripping**: optional removal of `--` and `--[[ ]]` comments
//!   that preserves line numbers for error reporting
//! - **Serde interop**: [`Value`] implements `Serialize` and `Deserialize`,
//!   so LUON data converts to and from other formats
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! luon = "0.1"
//! ```
//!
//! ### Reading and Writing
//!
//! ```rust
//! use luon::{Key, Value};
//!
//! let value = luon::from_str("{name='voyager', launched=1977}").unwrap();
//! let table = value.as_table().unwrap();
//! assert_eq!(table.get(&Key::from("name")), Some(&Value::from("voyager")));
//!
//! let text = luon::to_string(&value).unwrap();
//! assert_eq!(text, "{name=\"voyager\",launched=1.977e3}");
//! ```
//!
//! ### Output Profiles
//!
//! ```rust
//! let value = luon::from_str("{1000000, 0.1}").unwrap();
//!
//! // Shortest encoding per value
//! assert_eq!(luon::to_string_compressed(&value).unwrap(), "{1e6,.1}");
//!
//! // Indented and line-broken
//! assert_eq!(
//!     luon::to_string_beautified(&value).unwrap(),
//!     "{\n  1e6,\n  0.1\n}"
//! );
//! ```
//!
//! ### Building Values with the luon! Macro
//!
//! ```rust
//! use luon::{luon, Key, Value};
//!
//! let data = luon!({
//!     name = "Alice",
//!     age = 30.0,
//!     tags = { "rust", "lua" },
//! });
//!
//! let table = data.as_table().unwrap();
//! assert_eq!(table.get(&Key::from("age")), Some(&Value::from(30.0)));
//! ```
//!
//! ### Comments
//!
//! ```rust
//! use luon::{ReadOptions, Value};
//!
//! let text = "{\n  crew = 6, -- current complement\n  port = 'dock-2'\n}";
//! let options = ReadOptions::new().with_remove_comments(true);
//! let value = luon::from_str_with_options(text, options).unwrap();
//! assert!(value.is_table());
//! ```
//!
//! ## Notation Reference
//!
//! See [`syntax`] for the complete notation the reader accepts, and
//! [`Value`] for the data model it produces.

pub mod error;
pub mod macros;
pub mod options;
pub mod reader;
pub mod strip;
pub mod syntax;
pub mod transducer;
pub mod value;
pub mod writer;

pub use error::{Error, ErrorKind, Result};
pub use options::{NumberFormat, ReadOptions, StringFormat, WriteOptions};
pub use reader::Reader;
pub use strip::{strip_comments, strip_whitespace};
pub use value::{Key, Table, TableKind, Value};
pub use writer::Writer;

use std::io;

/// Reads one LUON document from a string.
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// assert_eq!(luon::from_str("0xFF").unwrap(), Value::from(255.0));
/// assert_eq!(luon::from_str("'text'").unwrap(), Value::from("text"));
/// ```
///
/// # Errors
///
/// Returns a parse error with 1-based line and column information when the
/// input is not valid LUON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Value> {
    from_str_with_options(input, ReadOptions::default())
}

/// Reads one LUON document from a string under the given options.
///
/// With `remove_comments` set the input goes through comment stripping
/// first; the stripper keeps line numbers intact, so error positions still
/// refer to the original text.
///
/// # Examples
///
/// ```rust
/// use luon::{ReadOptions, Value};
///
/// let options = ReadOptions::new().with_remove_comments(true);
/// let value = luon::from_str_with_options("10--[[comment]]0", options).unwrap();
/// assert_eq!(value, Value::from(100.0));
/// ```
///
/// # Errors
///
/// Returns a parse error when the input is not valid LUON, including an
/// unterminated long comment when comment removal is active.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(input: &str, options: ReadOptions) -> Result<Value> {
    if options.remove_comments {
        let stripped = strip::strip_for_reader(input)?;
        Reader::with_options(&stripped, &options).read()
    } else {
        Reader::with_options(input, &options).read()
    }
}

/// Reads one LUON document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use luon::Value;
/// use std::io::Cursor;
///
/// let value = luon::from_reader(Cursor::new(b"{1,2}")).unwrap();
/// assert_eq!(value.as_table().unwrap().len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the stream fails or the text is not
/// valid LUON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&input)
}

/// Writes a value as compact LUON text.
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// assert_eq!(luon::to_string(&Value::from(true)).unwrap(), "true");
/// ```
///
/// # Errors
///
/// Fails when a table key has no valid encoding; see
/// [`Error::UnsupportedObject`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    writer::to_string(value)
}

/// Writes a value as LUON text under the given options.
///
/// # Examples
///
/// ```rust
/// use luon::{NumberFormat, Value, WriteOptions};
///
/// let options = WriteOptions::new().with_number_format(NumberFormat::Hex);
/// let text = luon::to_string_with_options(&Value::from(255.0), options).unwrap();
/// assert_eq!(text, "0xff");
/// ```
///
/// # Errors
///
/// Fails when a table key has no valid encoding and no unsupported-value
/// handler is installed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: WriteOptions) -> Result<String> {
    writer::to_string_with_options(value, options)
}

/// Writes a value using the shortest encoding per value.
///
/// Shorthand for [`to_string_with_options`] with
/// [`WriteOptions::compressed`].
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// assert_eq!(luon::to_string_compressed(&Value::from(0.1)).unwrap(), ".1");
/// ```
///
/// # Errors
///
/// See [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_compressed(value: &Value) -> Result<String> {
    writer::to_string_with_options(value, WriteOptions::compressed())
}

/// Writes a value with indentation and linebreaks.
///
/// Shorthand for [`to_string_with_options`] with
/// [`WriteOptions::beautified`].
///
/// # Examples
///
/// ```rust
/// let value = luon::from_str("{1,2}").unwrap();
/// assert_eq!(luon::to_string_beautified(&value).unwrap(), "{\n  1,\n  2\n}");
/// ```
///
/// # Errors
///
/// See [`to_string_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_beautified(value: &Value) -> Result<String> {
    writer::to_string_with_options(value, WriteOptions::beautified())
}

/// Writes a value as compact LUON to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use luon::Value;
///
/// let mut buffer = Vec::new();
/// luon::to_writer(&mut buffer, &Value::from(true)).unwrap();
/// assert_eq!(buffer, b"true");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, WriteOptions::default())
}

/// Writes a value as LUON to an I/O stream under the given options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: WriteOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
