/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::ops::Deref;

use crate::{tupson_error, TupsonError, TupsonOffset, TupsonResult, TupsonToken};

/// Forward-only cursor over a JSON token stream.
/// This is the one way decoding consumes input: it wraps any fallible token
/// iterator (usually a [crate::TupsonLexer]) and adds a one-token hold slot so
/// a consumer can look at a token and then hand it to somebody else.
///
/// A cursor represents a single position in a single stream; one decode call
/// owns it for the duration. After a failed decode the position is
/// best-effort only and continuing from it is not meaningful.
pub struct TokenCursor<'iterator, B: Deref<Target = str>> {
    iterator: &'iterator mut dyn Iterator<Item = TupsonResult<TupsonToken<B>>>,
    hold: Option<TupsonToken<B>>,
    last_seen_offset: TupsonOffset,
}

impl<'iterator, B: Deref<Target = str>> TokenCursor<'iterator, B> {
    /// Creates the cursor from an iterator.
    pub fn from_iterator(
        iterator: &'iterator mut dyn Iterator<Item = TupsonResult<TupsonToken<B>>>,
    ) -> Self {
        Self {
            iterator,
            hold: None,
            last_seen_offset: 0,
        }
    }

    /// Checks if a next token exists.
    /// Errors indicate non-EOF errors.
    pub fn has_next_token(&mut self) -> TupsonResult<bool> {
        if self.hold.is_some() {
            Ok(true)
        } else {
            let res = self.iterator.next();
            if let Some(v) = res {
                self.hold = Some(v?);
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    /// Retrieves the next token; `eof_error` is returned if the stream is out
    /// of tokens.
    pub fn next_token(&mut self, eof_error: TupsonError) -> TupsonResult<TupsonToken<B>> {
        if let Some(token) = self.hold.take() {
            self.last_seen_offset = token.offset();
            return Ok(token);
        }
        match self.iterator.next() {
            Some(v) => {
                let token = v?;
                self.last_seen_offset = token.offset();
                Ok(token)
            }
            None => Err(eof_error),
        }
    }

    /// Puts one token back; it will be the next one retrieved.
    /// The hold slot only fits one token, a second unread drops the first.
    pub fn unread(&mut self, token: TupsonToken<B>) {
        self.hold = Some(token);
    }

    /// Offset of the most recently retrieved token.
    pub fn last_seen_offset(&self) -> TupsonOffset {
        self.last_seen_offset
    }

    /// Expects an array start, returning its offset.
    pub fn expect_array_start(&mut self) -> TupsonResult<TupsonOffset> {
        let token = self.next_token(tupson_error!(
            Interrupted,
            self.last_seen_offset,
            "cursor: unexpected EOF, expected array start"
        ))?;
        if let TupsonToken::ArrayStart(at) = token {
            Ok(at)
        } else {
            Err(tupson_error!(
                BadData,
                token.offset(),
                "cursor: expected array start and got something else"
            )
            .with_unexpected(token.token_type()))
        }
    }

    /// Expects an array end, returning its offset.
    pub fn expect_array_end(&mut self) -> TupsonResult<TupsonOffset> {
        let token = self.next_token(tupson_error!(
            Interrupted,
            self.last_seen_offset,
            "cursor: unexpected EOF, expected array end"
        ))?;
        if let TupsonToken::ArrayEnd(at) = token {
            Ok(at)
        } else {
            Err(tupson_error!(
                BadData,
                token.offset(),
                "cursor: expected array end and got something else"
            )
            .with_unexpected(token.token_type()))
        }
    }
}
