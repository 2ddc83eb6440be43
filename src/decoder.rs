/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::ops::Deref;

use alloc::{vec, vec::Vec};

use crate::{
    tupson_error, TokenCursor, Tuple, TupleShape, TupsonLexer, TupsonResult, TupsonToken,
    TupsonValue,
};

/// One tuple slot's deserializer: turns the tokens of one JSON value into a
/// slot value, and supplies the substitute used when the slot is `null`.
/// Deliberately two operations and nothing else.
pub trait SlotReader<B: Deref<Target = str>, V> {
    /// Reads one value, advancing the cursor past it (however deep it goes).
    fn read(&self, cursor: &mut TokenCursor<'_, B>) -> TupsonResult<V>;
    /// The value a JSON `null` stands for in this slot.
    /// [SlotReader::read] is never invoked for a `null` token.
    fn null_value(&self) -> V;
}

/// The dynamic slot reader: any JSON value, `null` included, as a
/// [TupsonValue].
pub struct ValueReader;

impl<B: Deref<Target = str>> SlotReader<B, TupsonValue> for ValueReader {
    fn read(&self, cursor: &mut TokenCursor<'_, B>) -> TupsonResult<TupsonValue> {
        TupsonValue::read(cursor)
    }

    fn null_value(&self) -> TupsonValue {
        TupsonValue::Null
    }
}

/// Decodes one JSON array into a [Tuple], one slot reader per position.
///
/// The slot table is the indexed mapping from slot position to capability;
/// its length is the hard ceiling on how many elements can be stored, so a
/// longer array fails while scanning. The requested [TupleShape] is verified
/// against whatever arity actually got constructed once the array closes.
/// ```
/// use tupson::{decode_values, TokenCursor, Tuple, TupleShape, TupsonLexer, TupsonValue};
/// let mut tokens = TupsonLexer::new("[1,2]");
/// let mut cursor = TokenCursor::from_iterator(&mut tokens);
/// let tuple = decode_values(TupleShape::Exact(2), &mut cursor).unwrap();
/// assert_eq!(tuple, Tuple::Of2(TupsonValue::Integer(1), TupsonValue::Integer(2)));
/// ```
pub struct TupleDecoder<'slots, B: Deref<Target = str>, V> {
    shape: TupleShape,
    slots: &'slots [&'slots dyn SlotReader<B, V>],
}

impl<'slots, B: Deref<Target = str>, V> TupleDecoder<'slots, B, V> {
    pub fn new(shape: TupleShape, slots: &'slots [&'slots dyn SlotReader<B, V>]) -> Self {
        Self { shape, slots }
    }

    /// Runs one decode: scan and accumulate until the array closes, construct
    /// by count, verify the shape. Failures from slot readers pass through
    /// untouched; the cursor is left wherever the failure happened.
    pub fn decode(&self, cursor: &mut TokenCursor<'_, B>) -> TupsonResult<Tuple<V>> {
        let start = cursor.expect_array_start()?;
        let mut accumulator: Vec<V> = Vec::new();
        let mut slot = 0;
        loop {
            let token = cursor.next_token(tupson_error!(
                Interrupted,
                cursor.last_seen_offset(),
                "tuple: unexpected EOF, expected element or array end"
            ))?;
            if let TupsonToken::ArrayEnd(_) = token {
                break;
            }
            if slot >= self.slots.len() {
                return Err(tupson_error!(
                    ArityMismatch,
                    token.offset(),
                    "tuple: more array elements than the target has slots"
                )
                .with_shape(self.shape)
                .with_unexpected(token.token_type()));
            }
            let reader = self.slots[slot];
            slot += 1;
            let value = if let TupsonToken::Null(_) = token {
                reader.null_value()
            } else {
                cursor.unread(token);
                reader.read(cursor)?
            };
            accumulator.push(value);
        }
        match Tuple::from_vec(accumulator) {
            Some(tuple) if self.shape.accepts(tuple.arity()) => Ok(tuple),
            // Covers both too-few-elements and anything from_vec wouldn't
            // construct. No single offending token to point at.
            _ => Err(tupson_error!(
                ShapeMismatch,
                start,
                "tuple: constructed arity does not fit the target shape"
            )
            .with_shape(self.shape)),
        }
    }
}

/// Decodes a tuple of dynamic [TupsonValue] slots: every slot position up to
/// the shape's capacity gets a [ValueReader].
pub fn decode_values<B: Deref<Target = str>>(
    shape: TupleShape,
    cursor: &mut TokenCursor<'_, B>,
) -> TupsonResult<Tuple<TupsonValue>> {
    let slots: Vec<&dyn SlotReader<B, TupsonValue>> =
        vec![&ValueReader as &dyn SlotReader<B, TupsonValue>; shape.capacity()];
    TupleDecoder::new(shape, &slots).decode(cursor)
}

/// Lexes `text` and decodes a single dynamic tuple out of it.
/// Trailing input is not an error; use the cursor API to care about it.
pub fn decode_json_str(shape: TupleShape, text: &str) -> TupsonResult<Tuple<TupsonValue>> {
    let mut tokens = TupsonLexer::new(text);
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    decode_values(shape, &mut cursor)
}
