/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::{
    fmt::{Display, Write},
    ops::Deref,
};

use crate::TupsonOffset;

/// JSON token type, without the payload.
/// Numbers are a single lexical class; the integer/float split only exists on
/// the token itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TupsonTokenType {
    ArrayStart,
    ArrayEnd,
    ObjectStart,
    ObjectEnd,
    Null,
    Boolean,
    Number,
    String,
}

/// JSON lexical token with integrated string buffer.
/// Numbers are stored as their values; integers that fit `i64` keep their
/// integer identity so a rewrite of the token stream preserves it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TupsonToken<B: Deref<Target = str>> {
    ArrayStart(TupsonOffset),
    ArrayEnd(TupsonOffset),
    ObjectStart(TupsonOffset),
    ObjectEnd(TupsonOffset),
    Null(TupsonOffset),
    Boolean(TupsonOffset, bool),
    Integer(TupsonOffset, i64),
    Float(TupsonOffset, f64),
    /// Buffer contents are the unescaped string contents.
    /// Object keys arrive as plain string tokens; position tells them apart.
    String(TupsonOffset, B),
}

impl<B: Deref<Target = str>> TupsonToken<B> {
    /// Return the token type of this token.
    pub fn token_type(&self) -> TupsonTokenType {
        match self {
            Self::ArrayStart(_) => TupsonTokenType::ArrayStart,
            Self::ArrayEnd(_) => TupsonTokenType::ArrayEnd,
            Self::ObjectStart(_) => TupsonTokenType::ObjectStart,
            Self::ObjectEnd(_) => TupsonTokenType::ObjectEnd,
            Self::Null(_) => TupsonTokenType::Null,
            Self::Boolean(_, _) => TupsonTokenType::Boolean,
            Self::Integer(_, _) => TupsonTokenType::Number,
            Self::Float(_, _) => TupsonTokenType::Number,
            Self::String(_, _) => TupsonTokenType::String,
        }
    }

    /// Return the buffer of this token, if the type has one.
    pub fn buffer(&self) -> Option<&B> {
        match self {
            Self::String(_, b) => Some(b),
            _ => None,
        }
    }

    /// Return the offset of this token.
    pub fn offset(&self) -> TupsonOffset {
        match self {
            Self::ArrayStart(at) => *at,
            Self::ArrayEnd(at) => *at,
            Self::ObjectStart(at) => *at,
            Self::ObjectEnd(at) => *at,
            Self::Null(at) => *at,
            Self::Boolean(at, _) => *at,
            Self::Integer(at, _) => *at,
            Self::Float(at, _) => *at,
            Self::String(at, _) => *at,
        }
    }

    /// Writes this token as JSON text.
    /// Delimiters write themselves only; commas and colons are the concern of
    /// whoever strings tokens together (see [crate::TupsonValue::write]).
    pub fn write(&self, f: &mut dyn Write) -> core::fmt::Result {
        match self {
            Self::ArrayStart(_) => f.write_char('['),
            Self::ArrayEnd(_) => f.write_char(']'),
            Self::ObjectStart(_) => f.write_char('{'),
            Self::ObjectEnd(_) => f.write_char('}'),
            Self::Null(_) => f.write_str("null"),
            Self::Boolean(_, true) => f.write_str("true"),
            Self::Boolean(_, false) => f.write_str("false"),
            Self::Integer(_, v) => core::fmt::write(f, format_args!("{}", v)),
            Self::Float(_, v) => {
                if !v.is_finite() {
                    // JSON has no spelling for these.
                    f.write_str("null")
                } else {
                    let mut res = JsonFloatObserver(f, false);
                    core::fmt::write(&mut res, format_args!("{}", v))?;
                    if !res.1 {
                        // Nothing marking this as a float, append .0 so the
                        // integer/float split survives a re-read.
                        f.write_str(".0")?;
                    }
                    core::fmt::Result::Ok(())
                }
            }
            Self::String(_, b) => write_json_string(b.deref(), f),
        }
    }
}

impl<B: Deref<Target = str>> Display for TupsonToken<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write(f)
    }
}

/// Writes a string as a quoted, escaped JSON string literal.
pub fn write_json_string(s: &str, f: &mut dyn Write) -> core::fmt::Result {
    f.write_char('"')?;
    for v in s.chars() {
        match v {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            v if (v as u32) < 0x20 => write!(f, "\\u{:04x}", v as u32)?,
            v => f.write_char(v)?,
        }
    }
    f.write_char('"')
}

/// Internal structure to determine if Rust didn't write any indicator this number is intended to be a float.
struct JsonFloatObserver<'a>(&'a mut dyn Write, bool);

impl Write for JsonFloatObserver<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.bytes() {
            if c == b'.' || c == b'e' || c == b'E' {
                // Any of these three characters indicate Rust generated some kind of float.
                self.1 = true;
            }
        }
        self.0.write_str(s)
    }
}
