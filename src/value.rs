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

use alloc::{string::String, vec::Vec};

use crate::{
    tupson_error, write_json_string, TokenCursor, Tuple, TupsonResult, TupsonToken,
};

/// Dynamic JSON value: what a tuple slot holds when nothing more specific is
/// declared about it.
/// Object members keep their source order (a `Vec` of pairs, not a map);
/// duplicate keys are passed through untouched.
#[derive(Clone, PartialEq, Debug)]
pub enum TupsonValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<TupsonValue>),
    Object(Vec<(String, TupsonValue)>),
}

impl Default for TupsonValue {
    fn default() -> Self {
        Self::Null
    }
}

impl TupsonValue {
    /// Reads one complete JSON value from the cursor, consuming any nested
    /// structure.
    pub fn read<B: Deref<Target = str>>(
        cursor: &mut TokenCursor<'_, B>,
    ) -> TupsonResult<TupsonValue> {
        let token = cursor.next_token(tupson_error!(
            Interrupted,
            cursor.last_seen_offset(),
            "value: unexpected EOF, expected value"
        ))?;
        match token {
            TupsonToken::Null(_) => Ok(TupsonValue::Null),
            TupsonToken::Boolean(_, v) => Ok(TupsonValue::Boolean(v)),
            TupsonToken::Integer(_, v) => Ok(TupsonValue::Integer(v)),
            TupsonToken::Float(_, v) => Ok(TupsonValue::Float(v)),
            TupsonToken::String(_, b) => Ok(TupsonValue::String(String::from(b.deref()))),
            TupsonToken::ArrayStart(_) => {
                let mut elements = Vec::new();
                loop {
                    let token = cursor.next_token(tupson_error!(
                        Interrupted,
                        cursor.last_seen_offset(),
                        "value: unexpected EOF, expected element or array end"
                    ))?;
                    if let TupsonToken::ArrayEnd(_) = token {
                        return Ok(TupsonValue::Array(elements));
                    }
                    cursor.unread(token);
                    elements.push(Self::read(cursor)?);
                }
            }
            TupsonToken::ObjectStart(_) => {
                let mut members = Vec::new();
                loop {
                    let token = cursor.next_token(tupson_error!(
                        Interrupted,
                        cursor.last_seen_offset(),
                        "value: unexpected EOF, expected key or object end"
                    ))?;
                    match token {
                        TupsonToken::ObjectEnd(_) => return Ok(TupsonValue::Object(members)),
                        TupsonToken::String(_, key) => {
                            let key = String::from(key.deref());
                            members.push((key, Self::read(cursor)?));
                        }
                        // Can't come out of the bundled lexer, but the cursor
                        // accepts any token source.
                        token => {
                            return Err(tupson_error!(
                                BadData,
                                token.offset(),
                                "value: object key must be a string"
                            )
                            .with_unexpected(token.token_type()))
                        }
                    }
                }
            }
            token => Err(tupson_error!(
                BadData,
                token.offset(),
                "value: expected value, got a structural token"
            )
            .with_unexpected(token.token_type())),
        }
    }

    /// Writes the value as JSON text.
    pub fn write(&self, f: &mut dyn Write) -> core::fmt::Result {
        match self {
            TupsonValue::Null => f.write_str("null"),
            TupsonValue::Boolean(v) => {
                let t: TupsonToken<&'static str> = TupsonToken::Boolean(0, *v);
                t.write(f)
            }
            TupsonValue::Integer(v) => {
                let t: TupsonToken<&'static str> = TupsonToken::Integer(0, *v);
                t.write(f)
            }
            TupsonValue::Float(v) => {
                let t: TupsonToken<&'static str> = TupsonToken::Float(0, *v);
                t.write(f)
            }
            TupsonValue::String(v) => write_json_string(v, f),
            TupsonValue::Array(elements) => {
                f.write_char('[')?;
                for (i, element) in elements.iter().enumerate() {
                    if i != 0 {
                        f.write_char(',')?;
                    }
                    element.write(f)?;
                }
                f.write_char(']')
            }
            TupsonValue::Object(members) => {
                f.write_char('{')?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i != 0 {
                        f.write_char(',')?;
                    }
                    write_json_string(key, f)?;
                    f.write_char(':')?;
                    value.write(f)?;
                }
                f.write_char('}')
            }
        }
    }

    /// Writes the value to a fresh [String].
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write(&mut out);
        out
    }
}

impl Display for TupsonValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write(f)
    }
}

impl Tuple<TupsonValue> {
    /// Writes the tuple in its wire form: a positional JSON array.
    pub fn write(&self, f: &mut dyn Write) -> core::fmt::Result {
        f.write_char('[')?;
        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            element.write(f)?;
        }
        f.write_char(']')
    }

    /// Writes the tuple to a fresh [String].
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write(&mut out);
        out
    }
}
