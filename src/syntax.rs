//! LUON Notation Reference
//!
//! This module documents the notation accepted by the reader and produced
//! by the writer. LUON is the literal subset of Lua: one document is one
//! Lua expression built from the value syntax below, with optional
//! comments and insignificant whitespace between tokens.
//!
//! # Atoms
//!
//! | Value | Syntax |
//! |-------|--------|
//! | nil | `nil` |
//! | true | `true` |
//! | false | `false` |
//!
//! Atoms are case-sensitive and must form the whole word: `True` and
//! `nilly` are errors, not strings.
//!
//! # Numbers
//!
//! All numbers are IEEE double-precision floats, as in Lua.
//!
//! ```text
//! 12345        decimal integer
//! -0.5         sign and fraction
//! 1.5e+2       decimal exponent (e or E, powers of ten)
//! 0xFF         hexadecimal (0x or 0X)
//! 0x.8         hexadecimal fraction (0.5)
//! 0xFFp1       binary exponent on a hex mantissa (p or P, powers of two)
//! ```
//!
//! Exponent digits are always decimal, even after a hex mantissa. A number
//! that overflows to infinity is rejected. `nil`, not a number literal,
//! represents the absence of a value; NaN and the infinities have no
//! literal form and are written as `nil`.
//!
//! # Strings
//!
//! ## Quoted strings
//!
//! Single and double quotes are interchangeable. The escape set is Lua's:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\a` `\b` `\f` `\n` `\r` `\t` `\v` | the usual control characters |
//! | `\\` `\'` `\"` | literal backslash and quotes (either quote, in either string) |
//! | `\` before a real newline | a newline character |
//! | `\xHH` | one byte, two hex digits |
//! | `\DDD` | one byte, one to three decimal digits (greedy), max 255 |
//! | `\u{XXX}` | a code point, one or more hex digits, max 10FFFF |
//!
//! Byte escapes are bytes, not characters: consecutive `\xHH`/`\DDD`
//! escapes are decoded as UTF-8, so `'\226\130\172'` is `€` and
//! `'\xF0\x90\x8D\x88'` is `𐍈`. A sequence that breaks off mid-character
//! is a fatal encoding error. An escape that decodes to an isolated
//! surrogate or an out-of-range code point is recoverable: by default the
//! replacement character U+FFFD stands in, and
//! [`ReadOptions`](crate::ReadOptions) can install a handler to observe or
//! reject such inputs.
//!
//! ## Long-bracket strings
//!
//! `[[ ... ]]` holds raw text with no escape processing. Any number of `=`
//! signs may sit between the brackets, and the closer must match the
//! opener's level, so content containing `]]` nests under a higher level:
//!
//! ```text
//! [[plain text]]
//! [=[contains ]] without ending]=]
//! ```
//!
//! One newline immediately after the opener is discarded, and line endings
//! inside the content (`\n`, `\r`, `\r\n`, `\n\r`) normalize to single
//! newlines, as in Lua. The writer picks the smallest level that does not
//! collide with the content.
//!
//! # Tables
//!
//! A table is a brace-enclosed, comma-separated entry list. A trailing
//! separator is allowed.
//!
//! ```text
//! { 1, 2, 3 }                   positional entries, keys 1..=3
//! { a = 1, b = 2 }              bareword keys
//! { [0.5] = 'x', [true] = 'y' } bracketed keys (any non-nil value)
//! { 'mixed', kind = 'both' }    positional and keyed entries together
//! ```
//!
//! Bareword keys match `[A-Za-z_][A-Za-z0-9_]*`. A bareword not followed
//! by `=` must be an atom. A `[` that opens a long bracket (`[[` or `[=`)
//! is a positional long-string entry, not a key.
//!
//! Bracketed integer keys from 1 upward merge into the positional part
//! when they form a contiguous run; entries beyond the first gap are
//! dropped, as a Lua list constructor would leave them unreachable by
//! length. Duplicate keys and `nil` keys are errors.
//!
//! # Comments
//!
//! Comments are not part of the value syntax; reading them requires the
//! `remove_comments` option, which strips them in a separate pass.
//!
//! ```text
//! -- a line comment, to end of line
//! --[[ a long comment ]]
//! --[==[ levels work like long strings ]==]
//! ```
//!
//! Stripping preserves line numbers: a line comment keeps its terminating
//! newline and a multi-line long comment leaves one newline behind, so
//! error positions in the cleaned text still match the original.
//!
//! # Whitespace
//!
//! Space, tab, newline, carriage return, vertical tab and form feed
//! separate tokens and are otherwise ignored. The writer emits none of
//! them unless linebreaks and indentation are enabled.
