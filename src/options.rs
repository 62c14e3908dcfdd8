//! Configuration options for LUON reading and writing.
//!
//! This module provides types to customize both directions of the codec:
//!
//! - [`ReadOptions`]: comment removal and encoding-error handling
//! - [`WriteOptions`]: layout, number and string formats, encoder hooks
//! - [`NumberFormat`] / [`StringFormat`]: per-type output formats
//!
//! ## Examples
//!
//! ```rust
//! use luon::{Value, WriteOptions, NumberFormat, to_string_with_options};
//!
//! // Plain decimal numbers instead of the default scientific form
//! let options = WriteOptions::new().with_number_format(NumberFormat::Decimal);
//! let text = to_string_with_options(&Value::from(255.0), options).unwrap();
//! assert_eq!(text, "255");
//!
//! // The beautified preset: indentation, linebreaks, readable formats
//! let options = WriteOptions::beautified();
//! assert!(options.linebreaks);
//! ```

use crate::error::{Error, Result};
use crate::value::Value;

/// Output format for numbers.
///
/// # Examples
///
/// ```rust
/// use luon::{Value, WriteOptions, NumberFormat, to_string_with_options};
///
/// let n = Value::from(255.0);
/// let write = |format| {
///     to_string_with_options(&n, WriteOptions::new().with_number_format(format)).unwrap()
/// };
/// assert_eq!(write(NumberFormat::Hex), "0xff");
/// assert_eq!(write(NumberFormat::HexUpper), "0XFF");
/// assert_eq!(write(NumberFormat::Decimal), "255");
/// assert_eq!(write(NumberFormat::Scientific), "2.55e2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Lowercase hexadecimal with a `0x` prefix.
    Hex,
    /// Uppercase hexadecimal with a `0X` prefix.
    HexUpper,
    /// Plain decimal digits.
    Decimal,
    /// Mantissa and decimal exponent, e.g. `2.55e2`. Values whose exponent
    /// would be smaller than one digit fall back to plain decimal.
    #[default]
    Scientific,
    /// Whichever of hex, decimal and scientific is shortest, with leading
    /// zeros of pure fractions omitted (`.5`).
    Compress,
    /// Decimal for human-scale values, scientific once the exponent reaches
    /// three digits.
    Beautify,
}

/// Output format for strings.
///
/// # Examples
///
/// ```rust
/// use luon::{Value, WriteOptions, StringFormat, to_string_with_options};
///
/// let s = Value::from("it's");
/// let write = |format| {
///     to_string_with_options(&s, WriteOptions::new().with_string_format(format)).unwrap()
/// };
/// assert_eq!(write(StringFormat::Single), r"'it\'s'");
/// assert_eq!(write(StringFormat::Double), "\"it's\"");
/// assert_eq!(write(StringFormat::Long), "[[it's]]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StringFormat {
    /// Single-quoted with escapes.
    Single,
    /// Double-quoted with escapes.
    #[default]
    Double,
    /// Long-bracket form using the minimal non-colliding level.
    Long,
    /// Long-bracket form that always starts the content on its own line.
    LongNewline,
    /// Whichever of single, double and long is shortest.
    Compress,
    /// Like [`StringFormat::Compress`] but the long candidate keeps its
    /// leading newline.
    Beautify,
}

/// Configuration for [`from_str_with_options`](crate::from_str_with_options).
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
#[derive(Clone, Debug, Default)]
pub struct ReadOptions {
    /// Strip Lua comments before parsing. Line numbering is preserved, and
    /// an unterminated long comment fails the read.
    pub remove_comments: bool,
    /// Observer for recoverable encoding errors. Called with each
    /// [`EncodingError`](crate::ErrorKind::EncodingError) as it is detected;
    /// returning `true` aborts the parse with that error, returning `false`
    /// continues with U+FFFD substituted. When unset the reader continues
    /// silently.
    pub encoding_handler: Option<fn(&Error) -> bool>,
}

impl ReadOptions {
    /// Creates default options (comments kept, encoding errors substituted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether comments are stripped before parsing.
    #[must_use]
    pub fn with_remove_comments(mut self, remove: bool) -> Self {
        self.remove_comments = remove;
        self
    }

    /// Installs an encoding-error handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{Error, ErrorKind, ReadOptions};
    ///
    /// // Promote every encoding error to a failure.
    /// let strict = ReadOptions::new().with_encoding_handler(|_| true);
    /// let err = luon::from_str_with_options(r"'\u{D800}'", strict).unwrap_err();
    /// assert_eq!(err.kind(), Some(ErrorKind::EncodingError));
    /// ```
    #[must_use]
    pub fn with_encoding_handler(mut self, handler: fn(&Error) -> bool) -> Self {
        self.encoding_handler = Some(handler);
        self
    }
}

/// Configuration for [`to_string_with_options`](crate::to_string_with_options).
///
/// Options are built once and passed to the writer; the three constructors
/// cover the common profiles.
///
/// # Examples
///
/// ```rust
/// use luon::{Value, WriteOptions};
///
/// let nested = luon::from_str("{list={1,2},flag=true}").unwrap();
///
/// // Compact (default): no layout, scientific numbers
/// assert_eq!(luon::to_string(&nested).unwrap(), "{list={1,2},flag=true}");
///
/// // Beautified: two-space indent and linebreaks
/// let pretty = luon::to_string_with_options(&nested, WriteOptions::beautified()).unwrap();
/// assert_eq!(pretty, "{\n  list={\n    1,\n    2\n  },\n  flag=true\n}");
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// String repeated once per nesting level in front of each entry.
    /// Empty disables indentation.
    pub indent: String,
    /// Emit a newline after each table entry separator and around braces.
    pub linebreaks: bool,
    pub number_format: NumberFormat,
    /// Fraction digit budget for number output. Default 10.
    pub number_precision: u32,
    pub string_format: StringFormat,
    /// Consulted before default encoding of every value. Returning `true`
    /// means the hook wrote the encoding itself.
    pub custom_encoder: Option<fn(&Value, &mut String) -> bool>,
    /// Invoked instead of failing when a value has no valid LUON encoding.
    /// When unset such values fail with
    /// [`Error::UnsupportedObject`](crate::Error::UnsupportedObject).
    pub unsupported_handler: Option<fn(&Value, &mut String) -> Result<()>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: String::new(),
            linebreaks: false,
            number_format: NumberFormat::default(),
            number_precision: 10,
            string_format: StringFormat::default(),
            custom_encoder: None,
            unsupported_handler: None,
        }
    }
}

impl WriteOptions {
    /// Creates default options (compact output, scientific numbers,
    /// double-quoted strings).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that pick the shortest encoding per value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{Value, WriteOptions};
    ///
    /// let text = luon::to_string_with_options(&Value::from(0.1), WriteOptions::compressed());
    /// assert_eq!(text.unwrap(), ".1");
    /// ```
    #[must_use]
    pub fn compressed() -> Self {
        WriteOptions {
            number_format: NumberFormat::Compress,
            string_format: StringFormat::Compress,
            ..Default::default()
        }
    }

    /// Creates options for indented, line-broken output.
    #[must_use]
    pub fn beautified() -> Self {
        WriteOptions {
            indent: "  ".to_string(),
            linebreaks: true,
            number_format: NumberFormat::Beautify,
            string_format: StringFormat::Beautify,
            ..Default::default()
        }
    }

    /// Sets the per-level indentation string.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets whether table entries are separated by linebreaks.
    #[must_use]
    pub fn with_linebreaks(mut self, linebreaks: bool) -> Self {
        self.linebreaks = linebreaks;
        self
    }

    /// Sets the number output format.
    #[must_use]
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Sets the fraction digit budget for number output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{Value, WriteOptions, NumberFormat};
    ///
    /// let options = WriteOptions::new()
    ///     .with_number_format(NumberFormat::Decimal)
    ///     .with_number_precision(2);
    /// let text = luon::to_string_with_options(&Value::from(3.14159), options).unwrap();
    /// assert_eq!(text, "3.14");
    /// ```
    #[must_use]
    pub fn with_number_precision(mut self, precision: u32) -> Self {
        self.number_precision = precision;
        self
    }

    /// Sets the string output format.
    #[must_use]
    pub fn with_string_format(mut self, format: StringFormat) -> Self {
        self.string_format = format;
        self
    }

    /// Installs a hook consulted before the default encoding of each value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{Value, WriteOptions};
    ///
    /// // Write booleans as numbers.
    /// let options = WriteOptions::new().with_custom_encoder(|value, out| match value {
    ///     Value::Bool(b) => {
    ///         out.push(if *b { '1' } else { '0' });
    ///         true
    ///     }
    ///     _ => false,
    /// });
    /// let text = luon::to_string_with_options(&Value::from(true), options).unwrap();
    /// assert_eq!(text, "1");
    /// ```
    #[must_use]
    pub fn with_custom_encoder(mut self, encoder: fn(&Value, &mut String) -> bool) -> Self {
        self.custom_encoder = Some(encoder);
        self
    }

    /// Installs a fallback for values with no valid LUON encoding.
    #[must_use]
    pub fn with_unsupported_handler(
        mut self,
        handler: fn(&Value, &mut String) -> Result<()>,
    ) -> Self {
        self.unsupported_handler = Some(handler);
        self
    }
}
