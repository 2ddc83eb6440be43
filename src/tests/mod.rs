/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

//! Tests! Sent into a separate directory so they can be filtered from cloc results.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::{format, vec};

use crate::{
    decode_json_str, decode_values, tupson_error, SlotReader, TokenCursor, Tuple, TupleDecoder,
    TupleShape, TupsonErrorKind, TupsonLexer, TupsonResult, TupsonToken, TupsonTokenType,
    TupsonValue, MAX_TUPLE_ARITY,
};

fn lex_all(text: &str) -> Vec<TupsonToken<String>> {
    TupsonLexer::new(text)
        .map(|t| t.expect("lexing should succeed"))
        .collect()
}

fn lexer_should_fail(text: &str, kind: TupsonErrorKind) {
    for res in TupsonLexer::new(text) {
        if let Err(e) = res {
            assert_eq!(e.kind, kind, "wrong error kind, tc: {}", text);
            return;
        }
    }
    panic!("lexer was supposed to fail!!! tc: {}", text);
}

fn parse_value(text: &str) -> TupsonResult<TupsonValue> {
    let mut tokens = TupsonLexer::new(text);
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    TupsonValue::read(&mut cursor)
}

/// Canonical-form texts only: read, write back, compare.
fn value_roundtrip(text: &str) {
    assert_eq!(parse_value(text).unwrap().to_json_string(), text);
}

#[test]
fn test_token_write() {
    let s: TupsonToken<&'static str> = TupsonToken::String(0, "Test\\\r\n\t\"");
    assert_eq!(&s.to_string(), "\"Test\\\\\\r\\n\\t\\\"\"");
    let s: TupsonToken<&'static str> = TupsonToken::String(0, "\u{0001}");
    assert_eq!(&s.to_string(), "\"\\u0001\"");
    let flt: TupsonToken<&'static str> = TupsonToken::Float(0, -1.0);
    assert_eq!(&flt.to_string(), "-1.0");
    // make sure above wasn't implemented via rounding or something
    let flt: TupsonToken<&'static str> = TupsonToken::Float(0, -1.07915331907856);
    assert_eq!(&flt.to_string(), "-1.07915331907856");
    let flt: TupsonToken<&'static str> = TupsonToken::Float(0, f64::NAN);
    assert_eq!(&flt.to_string(), "null");
    let int: TupsonToken<&'static str> = TupsonToken::Integer(0, 1);
    assert_eq!(&int.to_string(), "1");
    let b: TupsonToken<&'static str> = TupsonToken::Boolean(0, true);
    assert_eq!(&b.to_string(), "true");
    let n: TupsonToken<&'static str> = TupsonToken::Null(0);
    assert_eq!(&n.to_string(), "null");
    let ls: TupsonToken<&'static str> = TupsonToken::ArrayStart(0);
    assert_eq!(&ls.to_string(), "[");
    let le: TupsonToken<&'static str> = TupsonToken::ArrayEnd(0);
    assert_eq!(&le.to_string(), "]");
    assert_eq!(ls.token_type(), TupsonTokenType::ArrayStart);
    assert_eq!(int.token_type(), TupsonTokenType::Number);
    assert_eq!(flt.token_type(), TupsonTokenType::Number);
}

#[test]
fn lexer_token_stream() {
    assert_eq!(
        lex_all("[1,2.5,\"hi\",true,false,null]"),
        vec![
            TupsonToken::ArrayStart(0),
            TupsonToken::Integer(1, 1),
            TupsonToken::Float(3, 2.5),
            TupsonToken::String(7, String::from("hi")),
            TupsonToken::Boolean(12, true),
            TupsonToken::Boolean(17, false),
            TupsonToken::Null(23),
            TupsonToken::ArrayEnd(27),
        ]
    );
    // whitespace is insignificant
    assert_eq!(lex_all(" [ 1 , 2 ] ").len(), 4);
    // object keys come out as plain string tokens
    assert_eq!(
        lex_all("{\"a\":1}"),
        vec![
            TupsonToken::ObjectStart(0),
            TupsonToken::String(1, String::from("a")),
            TupsonToken::Integer(5, 1),
            TupsonToken::ObjectEnd(6),
        ]
    );
}

#[test]
fn lexer_numbers() {
    assert_eq!(lex_all("-12"), vec![TupsonToken::Integer(0, -12)]);
    assert_eq!(lex_all("0"), vec![TupsonToken::Integer(0, 0)]);
    assert_eq!(lex_all("1e3"), vec![TupsonToken::Float(0, 1000.0)]);
    assert_eq!(lex_all("1E-2"), vec![TupsonToken::Float(0, 0.01)]);
    assert_eq!(
        lex_all("9223372036854775807"),
        vec![TupsonToken::Integer(0, i64::MAX)]
    );
    // one past i64 falls over to float rather than failing
    assert_eq!(
        lex_all("9223372036854775808"),
        vec![TupsonToken::Float(0, 9223372036854775808.0)]
    );
    lexer_should_fail("-", TupsonErrorKind::BadData);
    lexer_should_fail("1-2", TupsonErrorKind::BadData);
    lexer_should_fail("1ee4", TupsonErrorKind::BadData);
}

#[test]
fn lexer_number_grammar() {
    // zero is fine on its own or with a fraction, but not as a prefix
    assert_eq!(lex_all("0.5"), vec![TupsonToken::Float(0, 0.5)]);
    assert_eq!(lex_all("-0"), vec![TupsonToken::Integer(0, 0)]);
    lexer_should_fail("01", TupsonErrorKind::BadData);
    lexer_should_fail("-01", TupsonErrorKind::BadData);
    lexer_should_fail("[01]", TupsonErrorKind::BadData);
    // a dot or exponent marker must be followed by at least one digit
    lexer_should_fail("1.", TupsonErrorKind::BadData);
    lexer_should_fail("[1.]", TupsonErrorKind::BadData);
    lexer_should_fail("1.e3", TupsonErrorKind::BadData);
    lexer_should_fail("1e", TupsonErrorKind::BadData);
    lexer_should_fail("1e+", TupsonErrorKind::BadData);
    lexer_should_fail(".5", TupsonErrorKind::BadData);
}

#[test]
fn lexer_strings() {
    assert_eq!(
        lex_all("\"a\\u0041\\n\\\"\\\\\\/\""),
        vec![TupsonToken::String(0, String::from("aA\n\"\\/"))]
    );
    // astral plane, as a surrogate pair and raw
    assert_eq!(
        lex_all("\"\\uD83D\\uDE00\""),
        vec![TupsonToken::String(0, String::from("\u{1F600}"))]
    );
    assert_eq!(
        lex_all("\"\u{1F600}\""),
        vec![TupsonToken::String(0, String::from("\u{1F600}"))]
    );
    lexer_should_fail("\"abc", TupsonErrorKind::Interrupted);
    lexer_should_fail("\"\\q\"", TupsonErrorKind::BadData);
    // the stream ending mid-escape is an interruption, not bad data
    lexer_should_fail("\"\\uD83D", TupsonErrorKind::Interrupted);
    lexer_should_fail("\"\\uD83D\\u", TupsonErrorKind::Interrupted);
    lexer_should_fail("\"\\uD8", TupsonErrorKind::Interrupted);
    lexer_should_fail("\"\\uD83D\"", TupsonErrorKind::BadData);
    lexer_should_fail("\"\\uDE00\"", TupsonErrorKind::BadData);
    lexer_should_fail("\"\\uZZZZ\"", TupsonErrorKind::BadData);
    lexer_should_fail("\"\n\"", TupsonErrorKind::BadData);
}

#[test]
fn lexer_structure_errors() {
    lexer_should_fail("]", TupsonErrorKind::BadData);
    lexer_should_fail("[1,]", TupsonErrorKind::BadData);
    lexer_should_fail("[,1]", TupsonErrorKind::BadData);
    lexer_should_fail("[1 2]", TupsonErrorKind::BadData);
    lexer_should_fail("[1}", TupsonErrorKind::BadData);
    lexer_should_fail("[1", TupsonErrorKind::Interrupted);
    lexer_should_fail("{", TupsonErrorKind::Interrupted);
    lexer_should_fail("{\"a\" 1}", TupsonErrorKind::BadData);
    lexer_should_fail("{\"a\":1,}", TupsonErrorKind::BadData);
    lexer_should_fail("{1:2}", TupsonErrorKind::BadData);
    lexer_should_fail("{\"a\":}", TupsonErrorKind::BadData);
    lexer_should_fail("tru", TupsonErrorKind::BadData);
    lexer_should_fail("nul", TupsonErrorKind::BadData);
    lexer_should_fail("falze", TupsonErrorKind::BadData);
    lexer_should_fail("@", TupsonErrorKind::BadData);
    // the iterator fuses after an error
    let mut lexer = TupsonLexer::new("] 1");
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn value_roundtrips() {
    value_roundtrip("null");
    value_roundtrip("true");
    value_roundtrip("-42");
    value_roundtrip("2.5");
    value_roundtrip("\"hi\\n\"");
    value_roundtrip("[]");
    value_roundtrip("{}");
    value_roundtrip("[1,[2,[3]],{\"a\":null}]");
    value_roundtrip("{\"a\":[1,{\"b\":null}],\"c\":-2.5}");
    // keys keep their source order
    value_roundtrip("{\"z\":1,\"a\":2}");
    parse_value("[1").unwrap_err();
    parse_value("]").unwrap_err();
}

#[test]
fn tuple_basics() {
    let t: Tuple<i64> = Tuple::default();
    assert_eq!(t, Tuple::Empty);
    for arity in 0..=MAX_TUPLE_ARITY {
        let values: Vec<i64> = (0..arity as i64).collect();
        let tuple = Tuple::from_vec(values.clone()).unwrap();
        assert_eq!(tuple.arity(), arity);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(tuple.get(i), Some(v));
        }
        assert_eq!(tuple.get(arity), None);
        assert_eq!(tuple.iter().count(), arity);
        assert_eq!(tuple.clone().into_vec(), values);
    }
    assert_eq!(Tuple::from_vec(vec![0i64; MAX_TUPLE_ARITY + 1]), None);
}

/// The round-trip law: write a tuple of every arity, re-lex, decode against
/// the matching exact shape, compare.
#[test]
fn decode_roundtrip_all_arities() {
    for arity in 0..=MAX_TUPLE_ARITY {
        let values: Vec<TupsonValue> =
            (0..arity as i64).map(TupsonValue::Integer).collect();
        let tuple = Tuple::from_vec(values).unwrap();
        let text = tuple.to_json_string();
        let exact = decode_json_str(TupleShape::Exact(arity as u8), &text)
            .unwrap_or_else(|e| panic!("arity {}: {}", arity, e));
        assert_eq!(exact, tuple, "text: {}", text);
        let any = decode_json_str(TupleShape::Any, &text).unwrap();
        assert_eq!(any, tuple);
    }
}

#[test]
fn decode_too_many_elements() {
    let err = decode_json_str(TupleShape::Exact(2), "[1,2,3]").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::ArityMismatch);
    assert_eq!(err.shape, Some(TupleShape::Exact(2)));
    assert_eq!(err.unexpected, Some(TupsonTokenType::Number));
    // offset points at the surplus element
    assert_eq!(err.offset, 5);
}

#[test]
fn decode_too_few_elements() {
    let err = decode_json_str(TupleShape::Exact(3), "[1,2]").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::ShapeMismatch);
    assert_eq!(err.shape, Some(TupleShape::Exact(3)));
    assert_eq!(err.unexpected, None);
}

#[test]
fn decode_empty() {
    assert_eq!(
        decode_json_str(TupleShape::Exact(0), "[]").unwrap(),
        Tuple::Empty
    );
    assert_eq!(decode_json_str(TupleShape::Any, "[]").unwrap(), Tuple::Empty);
    // an empty target refuses any element at all
    let err = decode_json_str(TupleShape::Exact(0), "[1]").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::ArityMismatch);
}

#[test]
fn decode_any_caps_at_max() {
    let eight = decode_json_str(TupleShape::Any, "[1,2,3,4,5,6,7,8]").unwrap();
    assert_eq!(eight.arity(), MAX_TUPLE_ARITY);
    let err = decode_json_str(TupleShape::Any, "[1,2,3,4,5,6,7,8,9]").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::ArityMismatch);
    assert_eq!(err.unexpected, Some(TupsonTokenType::Number));
}

#[test]
fn decode_null_slots() {
    assert_eq!(
        decode_json_str(TupleShape::Exact(3), "[null,1,null]").unwrap(),
        Tuple::Of3(
            TupsonValue::Null,
            TupsonValue::Integer(1),
            TupsonValue::Null
        )
    );
}

#[test]
fn decode_nested_elements() {
    assert_eq!(
        decode_json_str(TupleShape::Exact(2), "[[1,2],{\"a\":true}]").unwrap(),
        Tuple::Of2(
            TupsonValue::Array(vec![TupsonValue::Integer(1), TupsonValue::Integer(2)]),
            TupsonValue::Object(vec![(String::from("a"), TupsonValue::Boolean(true))]),
        )
    );
    // nested arrays count as one element each, not their own elements
    let err = decode_json_str(TupleShape::Exact(1), "[[1,2],3]").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::ArityMismatch);
}

#[test]
fn decode_not_an_array() {
    let err = decode_json_str(TupleShape::Any, "5").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::BadData);
    let err = decode_json_str(TupleShape::Any, "{\"a\":1}").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::BadData);
    assert_eq!(err.unexpected, Some(TupsonTokenType::ObjectStart));
    let err = decode_json_str(TupleShape::Any, "").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::Interrupted);
    let err = decode_json_str(TupleShape::Any, "[1,2").unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::Interrupted);
}

/// Reads integers only; anything else is a slot-reader failure, and `null`
/// becomes a caller-chosen sentinel.
struct IntReader {
    on_null: i64,
}

impl SlotReader<String, i64> for IntReader {
    fn read(&self, cursor: &mut TokenCursor<'_, String>) -> TupsonResult<i64> {
        let token = cursor.next_token(tupson_error!(
            Interrupted,
            cursor.last_seen_offset(),
            "int: unexpected EOF"
        ))?;
        if let TupsonToken::Integer(_, v) = token {
            Ok(v)
        } else {
            Err(tupson_error!(BadData, token.offset(), "int: expected an integer")
                .with_unexpected(token.token_type()))
        }
    }

    fn null_value(&self) -> i64 {
        self.on_null
    }
}

fn decode_ints(shape: TupleShape, slots: &[&dyn SlotReader<String, i64>], text: &str) -> TupsonResult<Tuple<i64>> {
    let mut tokens = TupsonLexer::new(text);
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    TupleDecoder::new(shape, slots).decode(&mut cursor)
}

#[test]
fn custom_slot_readers() {
    let first = IntReader { on_null: -1 };
    let second = IntReader { on_null: -2 };
    let slots: [&dyn SlotReader<String, i64>; 2] = [&first, &second];
    assert_eq!(
        decode_ints(TupleShape::Exact(2), &slots, "[5,6]").unwrap(),
        Tuple::Of2(5, 6)
    );
    // null never reaches the reader; each slot's own sentinel comes out
    assert_eq!(
        decode_ints(TupleShape::Exact(2), &slots, "[null,null]").unwrap(),
        Tuple::Of2(-1, -2)
    );
    assert_eq!(
        decode_ints(TupleShape::Exact(2), &slots, "[5,null]").unwrap(),
        Tuple::Of2(5, -2)
    );
}

/// Always fails with a recognizable kind and offset.
struct FailingReader;

impl SlotReader<String, i64> for FailingReader {
    fn read(&self, _cursor: &mut TokenCursor<'_, String>) -> TupsonResult<i64> {
        Err(tupson_error!(Interrupted, 42, "boom"))
    }

    fn null_value(&self) -> i64 {
        0
    }
}

#[test]
fn slot_failures_propagate_unchanged() {
    let failing = FailingReader;
    let slots: [&dyn SlotReader<String, i64>; 1] = [&failing];
    let err = decode_ints(TupleShape::Exact(1), &slots, "[1]").unwrap_err();
    // not rewrapped as an arity or shape problem
    assert_eq!(err.kind, TupsonErrorKind::Interrupted);
    assert_eq!(err.offset, 42);
    assert_eq!(err.shape, None);
}

#[test]
fn cursor_expectations() {
    let mut tokens = TupsonLexer::new("[] 1");
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    assert_eq!(cursor.expect_array_start(), Ok(0));
    assert_eq!(cursor.expect_array_end(), Ok(1));
    // the brackets are gone, so both expectations now see the integer
    let err = cursor.expect_array_start().unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::BadData);
    assert_eq!(err.unexpected, Some(TupsonTokenType::Number));
    let mut tokens = TupsonLexer::new("[1]");
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    assert_eq!(cursor.expect_array_start(), Ok(0));
    let err = cursor.expect_array_end().unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::BadData);
    assert_eq!(err.unexpected, Some(TupsonTokenType::Number));
    assert_eq!(err.offset, 1);
    // EOF while expecting the close
    let mut tokens = TupsonLexer::new("[");
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    assert_eq!(cursor.expect_array_start(), Ok(0));
    let err = cursor.expect_array_end().unwrap_err();
    assert_eq!(err.kind, TupsonErrorKind::Interrupted);
}

#[test]
fn cursor_streams_several_tuples() {
    let mut tokens = TupsonLexer::new("[1] [2,3]");
    let mut cursor = TokenCursor::from_iterator(&mut tokens);
    assert_eq!(
        decode_values(TupleShape::Any, &mut cursor).unwrap(),
        Tuple::Of1(TupsonValue::Integer(1))
    );
    assert!(cursor.has_next_token().unwrap());
    assert_eq!(
        decode_values(TupleShape::Any, &mut cursor).unwrap(),
        Tuple::Of2(TupsonValue::Integer(2), TupsonValue::Integer(3))
    );
    assert!(!cursor.has_next_token().unwrap());
}

#[test]
fn error_display() {
    let err = decode_json_str(TupleShape::Exact(2), "[1,2,3]").unwrap_err();
    let text = format!("{}", err);
    assert!(text.contains("ArityMismatch"), "display: {}", text);
    assert!(text.contains("arity-2 tuple"), "display: {}", text);
}
