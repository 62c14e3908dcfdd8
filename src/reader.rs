//! LUON reading.
//!
//! This module provides the [`Reader`], a recursive-descent parser turning
//! LUON text into a [`Value`] tree.
//!
//! ## Overview
//!
//! The reader reproduces Lua's literal grammar:
//!
//! - **Atoms**: `true`, `false`, `nil`
//! - **Numbers**: decimal and `0x` hexadecimal, fractions, `e`/`E` decimal
//!   exponents and `p`/`P` binary exponents on hex mantissas
//! - **Short strings**: `'...'` and `"..."` with the full escape set,
//!   including `\xHH` and `\DDD` byte escapes that reassemble into UTF-8
//!   sequences, and `\u{...}` code points
//! - **Long strings**: `[[...]]` with `=`-levelled brackets and Lua's
//!   newline normalization
//! - **Tables**: positional entries, bareword keys, bracketed keys
//!
//! Errors carry the failure kind and a 1-based line/column position.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use luon::{Key, Value};
//!
//! let value = luon::from_str("{kind='probe', active=true}").unwrap();
//! let table = value.as_table().unwrap();
//! assert_eq!(table.get(&Key::from("kind")), Some(&Value::from("probe")));
//! ```
//!
//! Comment removal is a separate pass selected through
//! [`ReadOptions`](crate::ReadOptions); the reader itself never sees
//! comments.

use std::collections::BTreeMap;

use crate::error::{Error, ErrorKind, Result};
use crate::options::ReadOptions;
use crate::value::{Key, Table, Value};

/// Integer keys up to this bound are exact in an IEEE double and take part
/// in list merging; larger ones stay dictionary keys.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// A partially assembled UTF-8 sequence fed by `\xHH` and `\DDD` escapes.
struct ByteSequence {
    remaining: usize,
    code: u32,
}

/// The LUON reader.
///
/// Parses LUON text into a [`Value`] tree. Created via [`Reader::from_str`];
/// one reader reads one document.
///
/// # Examples
///
/// ```rust
/// use luon::{Reader, Value};
///
/// let mut reader = Reader::from_str("0xFF");
/// assert_eq!(reader.read().unwrap(), Value::from(255.0));
/// ```
pub struct Reader<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    col: usize,
    encoding_handler: Option<fn(&Error) -> bool>,
}

impl<'a> Reader<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Reader {
            input,
            position: 0,
            line: 1,
            col: 1,
            encoding_handler: None,
        }
    }

    /// Creates a reader carrying the encoding-error handler from `options`.
    ///
    /// Comment removal is a separate pass; see
    /// [`from_str_with_options`](crate::from_str_with_options).
    pub fn with_options(input: &'a str, options: &ReadOptions) -> Self {
        Reader {
            encoding_handler: options.encoding_handler,
            ..Self::from_str(input)
        }
    }

    /// Reads one complete LUON document.
    ///
    /// The value must be followed only by whitespace and end of input.
    ///
    /// # Errors
    ///
    /// Returns a positioned parse error for malformed input; see
    /// [`ErrorKind`].
    pub fn read(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.peek_char().is_some() {
            return Err(self.fail(ErrorKind::EndOfInputExpected));
        }
        Ok(value)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.position..].chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Skips the Lua lexer whitespace set.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            match c {
                ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' => {
                    self.next_char();
                }
                _ => break,
            }
        }
    }

    fn fail(&self, kind: ErrorKind) -> Error {
        Error::parse(kind, self.line, self.col)
    }

    /// Reports a recoverable encoding error through the installed handler.
    /// Returns `Err` when the handler promotes it to a failure.
    fn encoding_error(&mut self) -> Result<()> {
        let error = self.fail(ErrorKind::EncodingError);
        if let Some(handle) = self.encoding_handler {
            if handle(&error) {
                return Err(error);
            }
        }
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.parse_atom(),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => self.parse_number(),
            Some(quote @ ('\'' | '"')) => {
                self.next_char();
                self.parse_short_string(quote)
            }
            Some('[') => {
                self.next_char();
                self.parse_long_string()
            }
            Some('{') => {
                self.next_char();
                self.parse_table()
            }
            _ => Err(self.fail(ErrorKind::NoObject)),
        }
    }

    fn take_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        name
    }

    fn parse_atom(&mut self) -> Result<Value> {
        match self.take_name().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "nil" => Ok(Value::Nil),
            _ => Err(self.fail(ErrorKind::AtomExpected)),
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let mut negative = false;
        if self.peek_char() == Some('-') {
            self.next_char();
            negative = true;
        }
        let mut base = 10;
        let mut any_digits = false;
        if self.peek_char() == Some('0') {
            self.next_char();
            any_digits = true;
            if matches!(self.peek_char(), Some('x' | 'X')) {
                self.next_char();
                base = 16;
                any_digits = false;
                // a bare "0x" is not a number
                if !matches!(self.peek_char(), Some(c) if c.is_digit(16) || c == '.') {
                    return Err(self.fail(ErrorKind::NumberExpected));
                }
            }
        }
        let b = f64::from(base);
        let mut value = 0.0;
        while let Some(digit) = self.peek_char().and_then(|c| c.to_digit(base)) {
            self.next_char();
            value = value * b + f64::from(digit);
            any_digits = true;
        }
        if self.peek_char() == Some('.') {
            self.next_char();
            let mut factor = 1.0;
            while let Some(digit) = self.peek_char().and_then(|c| c.to_digit(base)) {
                self.next_char();
                factor /= b;
                value += factor * f64::from(digit);
                any_digits = true;
            }
        }
        if !any_digits {
            return Err(self.fail(ErrorKind::NumberExpected));
        }
        let marker = matches!(
            (base, self.peek_char()),
            (10, Some('e' | 'E')) | (16, Some('p' | 'P'))
        );
        if marker {
            self.next_char();
            // hex mantissas take a power of two; exponent digits are
            // always decimal
            let exp_base: f64 = if base == 16 { 2.0 } else { 10.0 };
            let mut exp_negative = false;
            match self.peek_char() {
                Some('+') => {
                    self.next_char();
                }
                Some('-') => {
                    self.next_char();
                    exp_negative = true;
                }
                _ => {}
            }
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(self.fail(ErrorKind::ExponentExpected));
            }
            let mut exponent = 0.0;
            while let Some(digit) = self.peek_char().and_then(|c| c.to_digit(10)) {
                self.next_char();
                exponent = exponent * 10.0 + f64::from(digit);
            }
            if exp_negative {
                exponent = -exponent;
            }
            value *= exp_base.powf(exponent);
        }
        if negative {
            value = -value;
        }
        if !value.is_finite() {
            return Err(self.fail(ErrorKind::NumberExpected));
        }
        Ok(Value::Number(value))
    }

    /// Parses a quoted string. The opening quote is already consumed.
    ///
    /// The string is assembled as UTF-16 code units so byte escapes can
    /// build surrogate pairs; isolated surrogates that survive the
    /// recoverable path materialize as U+FFFD.
    fn parse_short_string(&mut self, quote: char) -> Result<Value> {
        let mut units: Vec<u16> = Vec::new();
        let mut pending: Option<ByteSequence> = None;
        loop {
            let c = match self.next_char() {
                Some(c) => c,
                None => return Err(self.fail(ErrorKind::UnfinishedString)),
            };
            if c == quote {
                if pending.is_some() {
                    return Err(self.fail(ErrorKind::SevereEncodingError));
                }
                return Ok(Value::String(String::from_utf16_lossy(&units)));
            }
            if c != '\\' {
                if pending.is_some() {
                    return Err(self.fail(ErrorKind::SevereEncodingError));
                }
                let mut buf = [0u16; 2];
                units.extend_from_slice(c.encode_utf16(&mut buf));
                continue;
            }
            let escape = match self.next_char() {
                Some(e) => e,
                None => return Err(self.fail(ErrorKind::UnfinishedString)),
            };
            if let Some(unit) = basic_unescape(escape) {
                if pending.is_some() {
                    return Err(self.fail(ErrorKind::SevereEncodingError));
                }
                units.push(unit);
                continue;
            }
            match escape {
                'x' => {
                    let mut byte = 0;
                    for _ in 0..2 {
                        let digit = self
                            .next_char()
                            .and_then(|c| c.to_digit(16))
                            .ok_or_else(|| self.fail(ErrorKind::InvalidEscapeSequence))?;
                        byte = byte * 16 + digit;
                    }
                    self.push_byte(byte, &mut units, &mut pending)?;
                }
                'u' => {
                    if pending.is_some() {
                        return Err(self.fail(ErrorKind::SevereEncodingError));
                    }
                    if self.next_char() != Some('{') {
                        return Err(self.fail(ErrorKind::InvalidEscapeSequence));
                    }
                    let mut code: u32 = 0;
                    let mut digits = 0;
                    loop {
                        match self.next_char() {
                            Some('}') => break,
                            Some(c) => {
                                let digit = c
                                    .to_digit(16)
                                    .ok_or_else(|| self.fail(ErrorKind::InvalidEscapeSequence))?;
                                code = code * 16 + digit;
                                if code > 0x10FFFF {
                                    return Err(self.fail(ErrorKind::InvalidEscapeSequence));
                                }
                                digits += 1;
                            }
                            None => return Err(self.fail(ErrorKind::UnfinishedString)),
                        }
                    }
                    if digits == 0 {
                        return Err(self.fail(ErrorKind::InvalidEscapeSequence));
                    }
                    self.push_scalar(code, &mut units)?;
                }
                digit @ '0'..='9' => {
                    let mut byte = digit as u32 - '0' as u32;
                    // greedy, at most three digits
                    for _ in 0..2 {
                        match self.peek_char().and_then(|c| c.to_digit(10)) {
                            Some(more) => {
                                self.next_char();
                                byte = byte * 10 + more;
                            }
                            None => break,
                        }
                    }
                    if byte > 255 {
                        return Err(self.fail(ErrorKind::InvalidEscapeSequence));
                    }
                    self.push_byte(byte, &mut units, &mut pending)?;
                }
                _ => return Err(self.fail(ErrorKind::InvalidEscapeSequence)),
            }
        }
    }

    /// Feeds one raw byte from a `\xHH` or `\DDD` escape into the UTF-8
    /// reassembly state.
    fn push_byte(
        &mut self,
        byte: u32,
        units: &mut Vec<u16>,
        pending: &mut Option<ByteSequence>,
    ) -> Result<()> {
        if let Some(sequence) = pending.as_mut() {
            if !(128..192).contains(&byte) {
                return Err(self.fail(ErrorKind::SevereEncodingError));
            }
            sequence.code = sequence.code * 64 + (byte - 128);
            sequence.remaining -= 1;
            if sequence.remaining == 0 {
                let code = sequence.code;
                *pending = None;
                self.push_scalar(code, units)?;
            }
            return Ok(());
        }
        if byte < 128 {
            units.push(byte as u16);
            return Ok(());
        }
        // count leading one bits: an N-one leader opens an N-byte sequence
        let mut remaining: i32 = -1;
        let mut highest = 128;
        let mut payload = byte;
        while remaining < 4 && highest <= payload {
            payload -= highest;
            highest /= 2;
            remaining += 1;
        }
        if remaining <= 0 {
            // a continuation byte with no sequence open
            return Err(self.fail(ErrorKind::SevereEncodingError));
        }
        *pending = Some(ByteSequence {
            remaining: remaining as usize,
            code: payload,
        });
        Ok(())
    }

    /// Emits one decoded code point as UTF-16 units.
    fn push_scalar(&mut self, code: u32, units: &mut Vec<u16>) -> Result<()> {
        if code <= 0xD7FF || (0xE000..=0xFFFF).contains(&code) {
            units.push(code as u16);
        } else if (0x10000..=0x10FFFF).contains(&code) {
            let v = code - 0x10000;
            units.push((0xD800 + v / 0x400) as u16);
            units.push((0xDC00 + v % 0x400) as u16);
        } else if code > 0x10FFFF {
            self.encoding_error()?;
            units.push(0xFFFD);
        } else {
            // an isolated surrogate half
            self.encoding_error()?;
            let after_high = matches!(units.last(), Some(u) if (0xD800..0xDC00).contains(u));
            if after_high && code >= 0xDC00 {
                return Err(self.fail(ErrorKind::SevereEncodingError));
            }
            units.push(code as u16);
        }
        Ok(())
    }

    /// Parses a long-bracket string. The initial `[` is already consumed.
    fn parse_long_string(&mut self) -> Result<Value> {
        let mut level = 0;
        loop {
            match self.peek_char() {
                Some('=') => {
                    self.next_char();
                    level += 1;
                }
                Some('[') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.fail(ErrorKind::LongNotationExpected)),
            }
        }
        Ok(Value::String(self.long_bracket_content(level)?))
    }

    fn long_bracket_content(&mut self, level: usize) -> Result<String> {
        let mut text = String::new();
        // one newline immediately after the opener is not content
        if matches!(self.peek_char(), Some('\n' | '\r')) {
            if let Some(first) = self.next_char() {
                self.finish_newline(first);
            }
        }
        loop {
            let c = match self.next_char() {
                Some(c) => c,
                None => return Err(self.fail(ErrorKind::UnclosedLongNotation)),
            };
            match c {
                ']' => {
                    let mut run = 0;
                    loop {
                        match self.peek_char() {
                            Some('=') => {
                                self.next_char();
                                run += 1;
                            }
                            Some(']') if run == level => {
                                self.next_char();
                                return Ok(text);
                            }
                            _ => break,
                        }
                    }
                    // wrong level: the run is ordinary content
                    text.push(']');
                    for _ in 0..run {
                        text.push('=');
                    }
                }
                '\n' | '\r' => {
                    self.finish_newline(c);
                    text.push('\n');
                }
                _ => text.push(c),
            }
        }
    }

    /// Consumes the second half of a CRLF or LFCR pair, if present.
    fn finish_newline(&mut self, first: char) {
        match (first, self.peek_char()) {
            ('\r', Some('\n')) | ('\n', Some('\r')) => {
                self.next_char();
            }
            _ => {}
        }
    }

    /// Parses a table. The opening `{` is already consumed.
    fn parse_table(&mut self) -> Result<Value> {
        let mut table = Table::new();
        let mut pending: BTreeMap<u64, Value> = BTreeMap::new();
        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.fail(ErrorKind::UnfinishedTable)),
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some('[') => {
                    self.next_char();
                    if matches!(self.peek_char(), Some('[' | '=')) {
                        // a long string as a positional entry
                        let value = self.parse_long_string()?;
                        table.push(value);
                    } else {
                        let key = self.parse_value()?;
                        self.skip_whitespace();
                        if self.peek_char() != Some(']') {
                            return Err(self.fail(ErrorKind::UnclosedKey));
                        }
                        self.next_char();
                        self.skip_whitespace();
                        if self.peek_char() != Some('=') {
                            return Err(self.fail(ErrorKind::NoValue));
                        }
                        self.next_char();
                        let value = self.parse_value()?;
                        self.insert_entry(&mut table, &mut pending, key, value)?;
                    }
                }
                Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                    let word = self.take_name();
                    self.skip_whitespace();
                    if self.peek_char() == Some('=') {
                        self.next_char();
                        let value = self.parse_value()?;
                        self.insert_entry(&mut table, &mut pending, Value::String(word), value)?;
                    } else {
                        let value = match word.as_str() {
                            "true" => Value::Bool(true),
                            "false" => Value::Bool(false),
                            "nil" => Value::Nil,
                            _ => return Err(self.fail(ErrorKind::AtomExpected)),
                        };
                        table.push(value);
                    }
                }
                _ => {
                    let value = self.parse_value()?;
                    table.push(value);
                }
            }
            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.fail(ErrorKind::UnfinishedTable)),
            }
        }
        // pending integer keys extend the list part while contiguous; the
        // first gap drops the rest
        let mut next = table.list().len() as u64 + 1;
        while let Some(value) = pending.remove(&next) {
            table.push(value);
            next += 1;
        }
        Ok(Value::Table(table))
    }

    fn insert_entry(
        &mut self,
        table: &mut Table,
        pending: &mut BTreeMap<u64, Value>,
        key: Value,
        value: Value,
    ) -> Result<()> {
        let key = match key {
            Value::Nil => return Err(self.fail(ErrorKind::NoObject)),
            Value::Number(n) if n >= 1.0 && n <= MAX_EXACT_INTEGER && n.fract() == 0.0 => {
                if pending.insert(n as u64, value).is_some() {
                    return Err(self.fail(ErrorKind::DuplicatedKey));
                }
                return Ok(());
            }
            Value::Number(n) => Key::Number(n),
            Value::Bool(b) => Key::Bool(b),
            Value::String(s) => Key::String(s),
            Value::Table(t) => Key::Table(t),
        };
        if table.contains_key(&key) {
            return Err(self.fail(ErrorKind::DuplicatedKey));
        }
        table.insert(key, value);
        Ok(())
    }
}

/// The basic escape set shared with the writer, plus both quote characters
/// and an escaped literal newline.
fn basic_unescape(escape: char) -> Option<u16> {
    match escape {
        'a' => Some(0x07),
        'b' => Some(0x08),
        'f' => Some(0x0C),
        'n' | '\n' => Some(0x0A),
        'r' => Some(0x0D),
        't' => Some(0x09),
        'v' => Some(0x0B),
        '\\' => Some(0x5C),
        '\'' => Some(0x27),
        '"' => Some(0x22),
        _ => None,
    }
}
