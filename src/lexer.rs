/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::{iter::Peekable, str::CharIndices};

use alloc::string::String;
use alloc::vec::Vec;

use crate::{tupson_error, TupsonError, TupsonOffset, TupsonResult, TupsonToken};

/// What the open container is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LexFrame {
    Array,
    Object,
}

/// What may legally come next.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LexExpect {
    /// A value: top level, after an array comma, or after a colon.
    Value,
    /// A value or the closing bracket: right after `[`.
    ValueOrEnd,
    /// An object key: after an object comma.
    Key,
    /// An object key or the closing brace: right after `{`.
    KeyOrEnd,
    /// The colon after a key.
    Colon,
    /// A comma or the current container's close: after any contained value.
    SepOrEnd,
}

/// Streaming JSON tokenizer over a `&str`, producing [TupsonToken]s.
/// Structure is validated as the tokens come out: brackets must match and
/// commas/colons must sit where the JSON grammar puts them, so downstream
/// consumers can trust the token order. More than one top-level value is
/// permitted (the input is treated as a stream).
/// After yielding an error the iterator is fused.
/// ```
/// use tupson::{TupsonLexer, TupsonToken};
/// let tokens: Vec<_> = TupsonLexer::new("[1]").map(|t| t.unwrap()).collect();
/// assert_eq!(tokens, vec![
///     TupsonToken::ArrayStart(0),
///     TupsonToken::Integer(1, 1),
///     TupsonToken::ArrayEnd(2),
/// ]);
/// ```
pub struct TupsonLexer<'text> {
    chars: Peekable<CharIndices<'text>>,
    /// Offset reported for end-of-input errors.
    end: TupsonOffset,
    frames: Vec<LexFrame>,
    expect: LexExpect,
    failed: bool,
}

impl<'text> TupsonLexer<'text> {
    pub fn new(text: &'text str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            end: text.len(),
            frames: Vec::new(),
            expect: LexExpect::Value,
            failed: false,
        }
    }

    fn value_allowed(&self) -> bool {
        matches!(self.expect, LexExpect::Value | LexExpect::ValueOrEnd)
    }

    /// State change after a complete value (scalar or closed container).
    fn after_value(&mut self) {
        self.expect = if self.frames.is_empty() {
            LexExpect::Value
        } else {
            LexExpect::SepOrEnd
        };
    }

    /// The "wrong character for this state" errors, one static message each.
    fn wrong_char(&self, at: TupsonOffset) -> TupsonError {
        match self.expect {
            LexExpect::Value | LexExpect::ValueOrEnd => {
                tupson_error!(BadData, at, "lexer: expected a value")
            }
            LexExpect::Key | LexExpect::KeyOrEnd => {
                tupson_error!(BadData, at, "lexer: expected an object key")
            }
            LexExpect::Colon => tupson_error!(BadData, at, "lexer: expected ':'"),
            LexExpect::SepOrEnd => {
                tupson_error!(BadData, at, "lexer: expected ',' or a closing bracket")
            }
        }
    }

    /// Consumes the remaining characters of a keyword literal.
    fn keyword(&mut self, at: TupsonOffset, rest: &str) -> TupsonResult<()> {
        for expected in rest.chars() {
            match self.chars.next() {
                Some((_, c)) if c == expected => {}
                _ => return Err(tupson_error!(BadData, at, "lexer: bad keyword literal")),
            }
        }
        Ok(())
    }

    /// Consumes the next character if `test` accepts it.
    fn eat(&mut self, test: impl Fn(char) -> bool) -> Option<char> {
        match self.chars.peek() {
            Some((_, c)) if test(*c) => {
                let c = *c;
                self.chars.next();
                Some(c)
            }
            _ => None,
        }
    }

    /// Lexes a number starting with `first`, held to the JSON number grammar:
    /// no leading zeros, a digit required after `.` and after the exponent
    /// marker. Integers keep their integer identity unless they overflow
    /// `i64`, in which case they fall over to `f64`.
    fn number(&mut self, at: TupsonOffset, first: char) -> TupsonResult<TupsonToken<String>> {
        let mut buffer = String::new();
        buffer.push(first);
        let int_lead = if first == '-' {
            match self.eat(|c| c.is_ascii_digit()) {
                Some(c) => {
                    buffer.push(c);
                    c
                }
                None => return Err(tupson_error!(BadData, at, "lexer: '-' without digits")),
            }
        } else {
            first
        };
        if int_lead == '0' {
            if matches!(self.chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
                return Err(tupson_error!(BadData, at, "lexer: leading zero in number"));
            }
        } else {
            while let Some(c) = self.eat(|c| c.is_ascii_digit()) {
                buffer.push(c);
            }
        }
        let mut fractional = false;
        if let Some(dot) = self.eat(|c| c == '.') {
            fractional = true;
            buffer.push(dot);
            let mut digits = 0;
            while let Some(c) = self.eat(|c| c.is_ascii_digit()) {
                buffer.push(c);
                digits += 1;
            }
            if digits == 0 {
                return Err(tupson_error!(BadData, at, "lexer: digit required after '.'"));
            }
        }
        if let Some(marker) = self.eat(|c| c == 'e' || c == 'E') {
            fractional = true;
            buffer.push(marker);
            if let Some(sign) = self.eat(|c| c == '+' || c == '-') {
                buffer.push(sign);
            }
            let mut digits = 0;
            while let Some(c) = self.eat(|c| c.is_ascii_digit()) {
                buffer.push(c);
                digits += 1;
            }
            if digits == 0 {
                return Err(tupson_error!(BadData, at, "lexer: digit required in exponent"));
            }
        }
        // A character that could only continue a number means the grammar was
        // violated; "1-2" is not a stream of two numbers.
        if matches!(self.chars.peek(), Some((_, c)) if c.is_ascii_digit() || matches!(*c, '.' | 'e' | 'E' | '+' | '-')) {
            return Err(tupson_error!(BadData, at, "lexer: bad number"));
        }
        if !fractional {
            if let Ok(v) = buffer.parse() {
                return Ok(TupsonToken::Integer(at, v));
            }
        }
        match buffer.parse() {
            Ok(v) => Ok(TupsonToken::Float(at, v)),
            Err(_) => Err(tupson_error!(BadData, at, "lexer: bad number")),
        }
    }

    /// Lexes a string body; the opening quote is already consumed.
    fn string(&mut self, at: TupsonOffset) -> TupsonResult<String> {
        let mut buffer = String::new();
        loop {
            match self.chars.next() {
                None => {
                    return Err(tupson_error!(Interrupted, self.end, "lexer: EOF inside string"))
                }
                Some((_, '"')) => return Ok(buffer),
                Some((escape_at, '\\')) => buffer.push(self.escape(escape_at)?),
                Some((control_at, c)) if (c as u32) < 0x20 => {
                    return Err(tupson_error!(
                        BadData,
                        control_at,
                        "lexer: raw control character inside string"
                    ))
                }
                Some((_, c)) => buffer.push(c),
            }
        }
    }

    /// Lexes one escape sequence; the backslash is already consumed.
    fn escape(&mut self, at: TupsonOffset) -> TupsonResult<char> {
        match self.chars.next() {
            None => Err(tupson_error!(Interrupted, self.end, "lexer: EOF inside escape")),
            Some((_, '"')) => Ok('"'),
            Some((_, '\\')) => Ok('\\'),
            Some((_, '/')) => Ok('/'),
            Some((_, 'b')) => Ok('\u{0008}'),
            Some((_, 'f')) => Ok('\u{000C}'),
            Some((_, 'n')) => Ok('\n'),
            Some((_, 'r')) => Ok('\r'),
            Some((_, 't')) => Ok('\t'),
            Some((_, 'u')) => {
                let first = self.hex_escape(at)?;
                if (0xDC00..=0xDFFF).contains(&first) {
                    return Err(tupson_error!(BadData, at, "lexer: unpaired low surrogate"));
                }
                let combined = if (0xD800..=0xDBFF).contains(&first) {
                    // High surrogate; the low half must follow immediately.
                    match (self.chars.next(), self.chars.next()) {
                        (Some((_, '\\')), Some((_, 'u'))) => {}
                        (None, _) | (_, None) => {
                            return Err(tupson_error!(
                                Interrupted,
                                self.end,
                                "lexer: EOF inside escape"
                            ))
                        }
                        _ => {
                            return Err(tupson_error!(BadData, at, "lexer: unpaired high surrogate"))
                        }
                    }
                    let second = self.hex_escape(at)?;
                    if !(0xDC00..=0xDFFF).contains(&second) {
                        return Err(tupson_error!(BadData, at, "lexer: unpaired high surrogate"));
                    }
                    0x10000 + (((first - 0xD800) << 10) | (second - 0xDC00))
                } else {
                    first
                };
                match core::char::from_u32(combined) {
                    Some(c) => Ok(c),
                    None => Err(tupson_error!(BadData, at, "lexer: bad unicode escape")),
                }
            }
            Some((escape_at, _)) => {
                Err(tupson_error!(BadData, escape_at, "lexer: unknown escape"))
            }
        }
    }

    /// Reads the four hex digits of a `\uXXXX` escape.
    fn hex_escape(&mut self, at: TupsonOffset) -> TupsonResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let c = match self.chars.next() {
                Some((_, c)) => c,
                None => {
                    return Err(tupson_error!(Interrupted, self.end, "lexer: EOF inside escape"))
                }
            };
            match c.to_digit(16) {
                Some(digit) => value = (value << 4) | digit,
                None => return Err(tupson_error!(BadData, at, "lexer: bad unicode escape")),
            }
        }
        Ok(value)
    }

    /// One iteration step; [Iterator::next] wraps this to latch failures.
    fn step(&mut self) -> Option<TupsonResult<TupsonToken<String>>> {
        loop {
            let (at, c) = match self.chars.next() {
                Some(v) => v,
                None => {
                    if !self.frames.is_empty() {
                        return Some(Err(tupson_error!(
                            Interrupted,
                            self.end,
                            "lexer: EOF inside structure"
                        )));
                    }
                    return None;
                }
            };
            match c {
                ' ' | '\t' | '\n' | '\r' => continue,
                '[' | '{' => {
                    if !self.value_allowed() {
                        return Some(Err(self.wrong_char(at)));
                    }
                    return Some(Ok(if c == '[' {
                        self.frames.push(LexFrame::Array);
                        self.expect = LexExpect::ValueOrEnd;
                        TupsonToken::ArrayStart(at)
                    } else {
                        self.frames.push(LexFrame::Object);
                        self.expect = LexExpect::KeyOrEnd;
                        TupsonToken::ObjectStart(at)
                    }));
                }
                ']' => {
                    let closeable =
                        matches!(self.expect, LexExpect::ValueOrEnd | LexExpect::SepOrEnd);
                    if self.frames.last() != Some(&LexFrame::Array) || !closeable {
                        return Some(Err(tupson_error!(BadData, at, "lexer: unexpected ']'")));
                    }
                    self.frames.pop();
                    self.after_value();
                    return Some(Ok(TupsonToken::ArrayEnd(at)));
                }
                '}' => {
                    let closeable =
                        matches!(self.expect, LexExpect::KeyOrEnd | LexExpect::SepOrEnd);
                    if self.frames.last() != Some(&LexFrame::Object) || !closeable {
                        return Some(Err(tupson_error!(BadData, at, "lexer: unexpected '}'")));
                    }
                    self.frames.pop();
                    self.after_value();
                    return Some(Ok(TupsonToken::ObjectEnd(at)));
                }
                ',' => {
                    if self.expect != LexExpect::SepOrEnd {
                        return Some(Err(tupson_error!(BadData, at, "lexer: unexpected ','")));
                    }
                    // Note this forbids trailing commas: after one, a close
                    // is no longer acceptable.
                    self.expect = match self.frames.last() {
                        Some(LexFrame::Object) => LexExpect::Key,
                        _ => LexExpect::Value,
                    };
                }
                ':' => {
                    if self.expect != LexExpect::Colon {
                        return Some(Err(tupson_error!(BadData, at, "lexer: unexpected ':'")));
                    }
                    self.expect = LexExpect::Value;
                }
                '"' => {
                    let key_position =
                        matches!(self.expect, LexExpect::Key | LexExpect::KeyOrEnd);
                    if !key_position && !self.value_allowed() {
                        return Some(Err(self.wrong_char(at)));
                    }
                    return Some(self.string(at).map(|buffer| {
                        if key_position {
                            self.expect = LexExpect::Colon;
                        } else {
                            self.after_value();
                        }
                        TupsonToken::String(at, buffer)
                    }));
                }
                't' | 'f' | 'n' => {
                    if !self.value_allowed() {
                        return Some(Err(self.wrong_char(at)));
                    }
                    let res = match c {
                        't' => self.keyword(at, "rue").map(|_| TupsonToken::Boolean(at, true)),
                        'f' => self.keyword(at, "alse").map(|_| TupsonToken::Boolean(at, false)),
                        _ => self.keyword(at, "ull").map(|_| TupsonToken::Null(at)),
                    };
                    if res.is_ok() {
                        self.after_value();
                    }
                    return Some(res);
                }
                '-' | '0'..='9' => {
                    if !self.value_allowed() {
                        return Some(Err(self.wrong_char(at)));
                    }
                    let res = self.number(at, c);
                    if res.is_ok() {
                        self.after_value();
                    }
                    return Some(res);
                }
                _ => return Some(Err(self.wrong_char(at))),
            }
        }
    }
}

impl<'text> Iterator for TupsonLexer<'text> {
    type Item = TupsonResult<TupsonToken<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.step();
        if let Some(Err(_)) = &res {
            self.failed = true;
        }
        res
    }
}
