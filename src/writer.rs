//! LUON writing.
//!
//! This module provides the [`Writer`], which turns a [`Value`] tree back
//! into LUON text under a [`WriteOptions`] profile.
//!
//! ## Overview
//!
//! Numbers are produced by a base-agnostic digit writer shared by the
//! decimal, hexadecimal and scientific formats, with a configurable
//! fraction digit budget. Strings can be quoted (either quote, full escape
//! set) or written as long brackets at the minimal level that does not
//! collide with the content. The `Compress` formats render every candidate
//! and keep the shortest; `Beautify` trades a little size for readability.
//!
//! NaN and the infinities have no literal form and encode as `nil`.
//! Non-finite *keys* cannot be represented at all; they fail with
//! [`Error::UnsupportedObject`] unless an unsupported-value handler is
//! installed.
//!
//! ## Usage
//!
//! ```rust
//! use luon::{Value, WriteOptions};
//!
//! let value = luon::from_str("{greeting='hi', count=3}").unwrap();
//! assert_eq!(
//!     luon::to_string(&value).unwrap(),
//!     "{greeting=\"hi\",count=3}"
//! );
//! assert_eq!(
//!     luon::to_string_with_options(&value, WriteOptions::compressed()).unwrap(),
//!     "{greeting='hi',count=3}"
//! );
//! ```

use crate::error::{Error, Result};
use crate::options::{NumberFormat, StringFormat, WriteOptions};
use crate::value::{Key, Table, Value};

/// Writes a value as compact LUON with the default profile.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedObject`] when a table key is NaN or
/// infinite and no unsupported-value handler is installed.
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, WriteOptions::default())
}

/// Writes a value as LUON under the given options.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedObject`] when a table key is NaN or
/// infinite and no unsupported-value handler is installed.
pub fn to_string_with_options(value: &Value, options: WriteOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    writer.write(value)?;
    Ok(writer.into_inner())
}

/// The LUON writer.
///
/// Accumulates output across [`Writer::write`] calls; most users should use
/// [`to_string`] or [`to_string_with_options`] instead.
pub struct Writer {
    out: String,
    options: WriteOptions,
}

impl Writer {
    #[must_use]
    pub fn new(options: WriteOptions) -> Self {
        Writer {
            out: String::new(),
            options,
        }
    }

    /// Appends the encoding of `value` to the output.
    ///
    /// # Errors
    ///
    /// See [`to_string_with_options`].
    pub fn write(&mut self, value: &Value) -> Result<()> {
        self.write_value(value, 0)
    }

    /// Consumes the writer, returning the accumulated output.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        if let Some(encode) = self.options.custom_encoder {
            if encode(value, &mut self.out) {
                return Ok(());
            }
        }
        match value {
            Value::Nil => self.out.push_str("nil"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => write_number(
                &mut self.out,
                *n,
                self.options.number_format,
                self.options.number_precision,
            ),
            Value::String(s) => write_string(&mut self.out, s, self.options.string_format),
            Value::Table(t) => self.write_table(t, depth)?,
        }
        Ok(())
    }

    fn write_table(&mut self, table: &Table, depth: usize) -> Result<()> {
        self.out.push('{');
        if table.is_empty() {
            self.out.push('}');
            return Ok(());
        }
        let inner = depth + 1;
        let mut first = true;
        for value in table.list() {
            self.separate(&mut first);
            self.indent(inner);
            self.write_value(value, inner)?;
        }
        for (key, value) in table.entries() {
            self.separate(&mut first);
            self.indent(inner);
            self.write_key(key, inner)?;
            self.write_value(value, inner)?;
        }
        if self.options.linebreaks {
            self.out.push('\n');
        }
        self.indent(depth);
        self.out.push('}');
        Ok(())
    }

    fn separate(&mut self, first: &mut bool) {
        if !*first {
            self.out.push(',');
        }
        *first = false;
        if self.options.linebreaks {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, level: usize) {
        if self.options.indent.is_empty() {
            return;
        }
        for _ in 0..level {
            self.out.push_str(&self.options.indent);
        }
    }

    fn write_key(&mut self, key: &Key, depth: usize) -> Result<()> {
        if let Key::String(s) = key {
            if is_bareword(s) {
                self.out.push_str(s);
                self.out.push('=');
                return Ok(());
            }
        }
        self.out.push('[');
        if let Key::Number(n) = key {
            if !n.is_finite() {
                // "nil" would parse back as a nil key, which no table has
                self.unsupported(&Value::Number(*n))?;
                self.out.push_str("]=");
                return Ok(());
            }
        }
        let value = Value::from(key.clone());
        self.write_value(&value, depth)?;
        self.out.push_str("]=");
        Ok(())
    }

    fn unsupported(&mut self, value: &Value) -> Result<()> {
        match self.options.unsupported_handler {
            Some(handle) => handle(value, &mut self.out),
            None => Err(Error::UnsupportedObject),
        }
    }
}

/// A key that can be written without brackets.
fn is_bareword(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_number(out: &mut String, num: f64, format: NumberFormat, precision: u32) {
    if !num.is_finite() {
        out.push_str("nil");
        return;
    }
    match format {
        NumberFormat::Hex => write_radix(out, num, precision, 16, false, "0x", false),
        NumberFormat::HexUpper => write_radix(out, num, precision, 16, true, "0X", false),
        NumberFormat::Decimal => write_radix(out, num, precision, 10, false, "", false),
        NumberFormat::Scientific => write_scientific(out, num, precision, 1, false),
        NumberFormat::Beautify => write_scientific(out, num, precision, 3, false),
        NumberFormat::Compress => {
            let mut hex = String::new();
            write_radix(&mut hex, num, precision, 16, false, "0x", true);
            let mut decimal = String::new();
            write_radix(&mut decimal, num, precision, 10, false, "", true);
            let mut scientific = String::new();
            write_scientific(&mut scientific, num, precision, 1, true);

            let mut best = &hex;
            if decimal.len() < best.len() {
                best = &decimal;
            }
            if scientific.len() < best.len() {
                best = &scientific;
            }
            out.push_str(best);
        }
    }
}

/// Digit writer shared by every number format.
///
/// Rounds by adding half of the last representable fraction digit up
/// front, then emits integer digits by repeated division and fraction
/// digits until the residue drops below the budget. With `compress`, a
/// pure fraction omits its leading zero (`.5`).
fn write_radix(
    out: &mut String,
    num: f64,
    precision: u32,
    base: u32,
    upper: bool,
    prefix: &str,
    compress: bool,
) {
    let mut num = num;
    if num < 0.0 {
        out.push('-');
        num = -num;
    }
    let b = f64::from(base);
    num += b.powi(-(precision as i32)) / 2.0;
    let after = num.fract();
    let has_fraction = precision > 0 && after >= b.powi(-(precision as i32));
    let omit_zero = compress && has_fraction && num == after;

    out.push_str(prefix);
    if !omit_zero {
        let mut digits = Vec::new();
        let mut n = num;
        loop {
            digits.push(digit_char((n % b).floor() as u32, base, upper));
            n = (n / b).floor();
            if n <= 0.0 {
                break;
            }
        }
        for &c in digits.iter().rev() {
            out.push(c);
        }
    }
    if has_fraction {
        out.push('.');
        let mut frac = after;
        let mut p = precision as i32;
        while p > 0 && frac >= b.powi(-p) {
            frac *= b;
            let digit = frac.floor();
            frac -= digit;
            out.push(digit_char(digit as u32, base, upper));
            p -= 1;
        }
    }
}

/// Mantissa-and-exponent form, e.g. `1.01e2`. Values that are zero,
/// negative, or whose exponent magnitude is below `zeros` digits fall back
/// to plain decimal.
fn write_scientific(out: &mut String, num: f64, precision: u32, zeros: i32, compress: bool) {
    let exp = num.log10().floor();
    if !exp.is_finite() || exp.abs() < f64::from(zeros) {
        write_radix(out, num, precision, 10, false, "", compress);
        return;
    }
    let mantissa = num / 10f64.powf(exp);
    write_radix(out, mantissa, precision, 10, false, "", compress);
    out.push('e');
    write_radix(out, exp, 0, 10, false, "", false);
}

fn digit_char(digit: u32, base: u32, upper: bool) -> char {
    let c = std::char::from_digit(digit, base).unwrap_or('0');
    if upper {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn write_string(out: &mut String, text: &str, format: StringFormat) {
    match format {
        StringFormat::Single => write_quoted(out, text, '\''),
        StringFormat::Double => write_quoted(out, text, '"'),
        StringFormat::Long => write_long(out, text, false),
        StringFormat::LongNewline => write_long(out, text, true),
        StringFormat::Compress => write_shortest(out, text, false),
        StringFormat::Beautify => write_shortest(out, text, true),
    }
}

fn write_shortest(out: &mut String, text: &str, newline: bool) {
    let mut single = String::new();
    write_quoted(&mut single, text, '\'');
    let mut double = String::new();
    write_quoted(&mut double, text, '"');
    let mut long = String::new();
    write_long(&mut long, text, newline);

    let mut best = &single;
    if double.len() < best.len() {
        best = &double;
    }
    if long.len() < best.len() {
        best = &long;
    }
    out.push_str(best);
}

/// Escape character for `c` under the active quote, if it has one. The
/// inactive quote stays literal.
fn named_escape(c: char, quote: char) -> Option<char> {
    match c {
        '\u{7}' => Some('a'),
        '\u{8}' => Some('b'),
        '\u{C}' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '\u{B}' => Some('v'),
        '\\' => Some('\\'),
        c if c == quote => Some(c),
        _ => None,
    }
}

fn write_quoted(out: &mut String, text: &str, quote: char) {
    out.push(quote);
    // A decimal escape is held back one character: if a literal digit
    // follows it must be zero-padded to three digits so the digit is not
    // swallowed on read.
    let mut held: Option<String> = None;
    for c in text.chars() {
        let named = named_escape(c, quote);
        let decimal = named.is_none() && (c as u32) < 32;
        if let Some(mut digits) = held.take() {
            if c.is_ascii_digit() {
                while digits.len() < 3 {
                    digits.insert(0, '0');
                }
            }
            out.push('\\');
            out.push_str(&digits);
        }
        if let Some(escape) = named {
            out.push('\\');
            out.push(escape);
        } else if decimal {
            held = Some((c as u32).to_string());
        } else {
            out.push(c);
        }
    }
    if let Some(digits) = held {
        out.push('\\');
        out.push_str(&digits);
    }
    out.push(quote);
}

fn write_long(out: &mut String, text: &str, newline: bool) {
    let level = long_min_level(text);
    out.push('[');
    for _ in 0..level {
        out.push('=');
    }
    out.push('[');
    // a leading newline in the content would be discarded on read
    if newline || text.starts_with('\n') {
        out.push('\n');
    }
    out.push_str(text);
    out.push(']');
    for _ in 0..level {
        out.push('=');
    }
    out.push(']');
}

/// The smallest bracket level whose closer cannot occur in `text`.
///
/// A level is taken by any `]` `=`* run that is followed by another `]` or
/// that ends the content (the closer itself supplies the final bracket).
fn long_min_level(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut used = [false; 16];
    let mut overflow = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b']' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b'=' {
                j += 1;
            }
            if j >= bytes.len() || bytes[j] == b']' {
                let level = j - i - 1;
                if level < used.len() {
                    used[level] = true;
                } else {
                    overflow.push(level);
                }
            }
            i = j;
        } else {
            i += 1;
        }
    }
    let mut level = 0;
    while (level < used.len() && used[level]) || overflow.contains(&level) {
        level += 1;
    }
    level
}
