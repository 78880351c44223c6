use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    parse_value,
    reader::{BytesReader, JsonReader, StrReader, ValueKind, ValueReader},
    sink::CompactWriter,
    transfer,
    value::Value,
};

/// Walks `{"a": [1, 2.5, true]}` step by step.
fn walk_mixed_array<'de, R: JsonReader<'de>>(reader: &mut R) {
    reader.expect_object().unwrap();
    assert_eq!(reader.next_key().unwrap(), Some(Cow::Borrowed("a")));
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 1);
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_double().unwrap(), 2.5);
    assert!(reader.has_next().unwrap());
    assert!(reader.expect_bool().unwrap());
    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.next_key().unwrap(), None);
}

#[test]
fn mixed_array_walk_all_backends() {
    let doc = r#"{"a": [1, 2.5, true]}"#;
    walk_mixed_array(&mut StrReader::new(doc));
    walk_mixed_array(&mut BytesReader::new(doc.as_bytes()));
    let tree = parse_value(doc).unwrap();
    walk_mixed_array(&mut ValueReader::new(&tree));
}

/// Candidate matching against both keys and string values.
fn probe_candidates<'de, R: JsonReader<'de>>(reader: &mut R) {
    reader.expect_object().unwrap();
    assert_eq!(reader.try_key(&["aac", "bab"]), None);
    assert_eq!(reader.try_key(&["aab"]), Some("aab"));
    assert_eq!(reader.try_str_match(&["aab"]), Some("aab"));
    reader.end_object().unwrap();
}

#[test]
fn candidate_probe_all_backends() {
    let doc = r#"{"aab":"aab"}"#;
    probe_candidates(&mut StrReader::new(doc));
    probe_candidates(&mut BytesReader::new(doc.as_bytes()));
    let tree = parse_value(doc).unwrap();
    probe_candidates(&mut ValueReader::new(&tree));
}

/// Selective extraction with skips over an object inside an array.
fn pick_and_skip<'de, R: JsonReader<'de>>(reader: &mut R) {
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    reader.expect_object().unwrap();
    assert_eq!(reader.try_key(&["a", "c"]), Some("a"));
    reader.skip_value().unwrap();
    assert_eq!(reader.try_key(&["a", "c"]), None);
    assert!(reader.skip_entry().unwrap());
    assert_eq!(reader.try_key(&["a", "c"]), Some("c"));
    reader.skip_value().unwrap();
    assert!(!reader.skip_entry().unwrap());
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 37);
    assert!(!reader.has_next().unwrap());
}

#[test]
fn pick_and_skip_all_backends() {
    let doc = r#"[{"a":["test"],"b":42,"c":"str"},37]"#;
    pick_and_skip(&mut StrReader::new(doc));
    pick_and_skip(&mut BytesReader::new(doc.as_bytes()));
    let tree = parse_value(doc).unwrap();
    pick_and_skip(&mut ValueReader::new(&tree));
}

#[test]
fn escape_heavy_string_decodes() {
    let doc = r#""\b\t\n\r\f\\\"\/\ufffd""#;
    let expected = "\u{8}\t\n\r\u{c}\\\"/\u{fffd}";
    assert_eq!(StrReader::new(doc).expect_str().unwrap(), expected);
    assert_eq!(
        BytesReader::new(doc.as_bytes()).expect_str().unwrap(),
        expected
    );
    let tree = parse_value(doc).unwrap();
    assert_eq!(ValueReader::new(&tree).expect_str().unwrap(), expected);
}

#[test]
fn checks_are_idempotent_and_do_not_advance() {
    let mut reader = StrReader::new("  2.5 ");
    assert_eq!(reader.peek_kind(), Some(ValueKind::Num));
    assert_eq!(reader.peek_kind(), Some(ValueKind::Num));
    assert!(!reader.check_int());
    assert!(!reader.check_int());
    assert!(reader.check_double());
    assert_eq!(reader.expect_double().unwrap(), 2.5);
}

#[test]
fn try_operations_leave_cursor_on_mismatch() {
    let mut reader = StrReader::new("2.5");
    assert!(!reader.try_null());
    assert_eq!(reader.try_bool(), None);
    assert_eq!(reader.try_int(), None);
    assert_eq!(reader.try_str(), None);
    assert!(!reader.try_array());
    assert!(!reader.try_object());
    assert_eq!(reader.try_double(), Some(2.5));
}

#[test]
fn expect_int_rejects_fractions_and_exponents() {
    assert!(StrReader::new("2.5").expect_int().is_err());
    assert!(StrReader::new("1e3").expect_int().is_err());
    assert_eq!(StrReader::new("+42").expect_int().unwrap(), 42);
    assert_eq!(StrReader::new("-17").expect_int().unwrap(), -17);
    assert_eq!(StrReader::new("1e3").expect_double().unwrap(), 1000.0);
    assert_eq!(StrReader::new("+2.5").expect_double().unwrap(), 2.5);
}

#[test]
fn cloned_cursor_advances_independently() {
    let doc = "[1,2,3]";
    let mut reader = StrReader::new(doc);
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 1);

    let mut fork = reader.clone();
    assert!(fork.has_next().unwrap());
    assert_eq!(fork.expect_int().unwrap(), 2);

    // The original still sees element two.
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 2);

    let tree = parse_value(doc).unwrap();
    let mut reader = ValueReader::new(&tree);
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 1);
    let mut fork = reader.clone();
    assert_eq!(
        (fork.has_next().unwrap(), fork.expect_int().unwrap()),
        (true, 2)
    );
    assert_eq!(
        (reader.has_next().unwrap(), reader.expect_int().unwrap()),
        (true, 2)
    );
}

#[test]
fn value_source_covers_exact_extent() {
    let mut reader = StrReader::new(r#" [1, {"a": [2]} , 3] "#);
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    reader.skip_value().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_value_source().unwrap(), r#"{"a": [2]}"#);
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_value_source().unwrap(), "3");
    assert!(!reader.has_next().unwrap());
    assert!(reader.at_end());
}

#[test]
fn value_source_on_tree_returns_the_value() {
    let tree = parse_value(r#"[1,[2]]"#).unwrap();
    let mut reader = ValueReader::new(&tree);
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_value_source().unwrap(), &Value::Number(1.0));
    assert!(reader.has_next().unwrap());
    assert_eq!(
        reader.expect_value_source().unwrap(),
        &Value::Array(alloc::vec![Value::Number(2.0)])
    );
}

#[test]
fn key_source_includes_quotes() {
    let mut reader = StrReader::new(r#"{"a b": 1, "c": 2}"#);
    reader.expect_object().unwrap();
    assert_eq!(reader.next_key_source().unwrap(), Some("\"a b\""));
    assert_eq!(reader.expect_int().unwrap(), 1);
    assert_eq!(reader.next_key_source().unwrap(), Some("\"c\""));
    assert_eq!(reader.expect_int().unwrap(), 2);
    assert_eq!(reader.next_key_source().unwrap(), None);

    let mut reader = BytesReader::new(br#"{"k":null}"#);
    reader.expect_object().unwrap();
    assert_eq!(reader.next_key_source().unwrap(), Some(&b"\"k\""[..]));
    reader.expect_null().unwrap();
    assert_eq!(reader.next_key_source().unwrap(), None);
}

#[test]
fn has_next_key_peeks_and_exits() {
    let mut reader = StrReader::new(r#"{"x": 1}"#);
    reader.expect_object().unwrap();
    assert!(reader.has_next_key().unwrap());
    assert!(reader.has_next_key().unwrap());
    assert_eq!(reader.next_key().unwrap().as_deref(), Some("x"));
    assert_eq!(reader.expect_int().unwrap(), 1);
    assert!(!reader.has_next_key().unwrap());
    assert!(reader.at_end());
}

#[test]
fn end_array_and_end_object_fast_forward() {
    let mut reader = StrReader::new(r#"{"a": [1, [2], "x"], "b": 2}"#);
    reader.expect_object().unwrap();
    assert_eq!(reader.next_key().unwrap().as_deref(), Some("a"));
    reader.expect_array().unwrap();
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.expect_int().unwrap(), 1);
    reader.end_array().unwrap();
    assert_eq!(reader.next_key().unwrap().as_deref(), Some("b"));
    reader.end_object().unwrap();
    assert!(reader.at_end());
}

#[test]
fn expect_reports_positions() {
    let err = StrReader::new("  [").expect_object().unwrap_err();
    assert_eq!(err.offset, 2);
    let err = StrReader::new("\"abc").expect_str().unwrap_err();
    assert_eq!(err.offset, 0);
    let err = StrReader::new("").expect_null().unwrap_err();
    assert_eq!(err.offset, 0);
}

#[test]
fn tree_backend_preserves_source_key_order() {
    let doc = r#"{"b":1,"a":{"z":true,"m":null},"c":[{"y":2,"x":3}]}"#;
    let tree = parse_value(doc).unwrap();

    // Key iteration replays source order, not alphabetical order.
    let mut reader = ValueReader::new(&tree);
    reader.expect_object().unwrap();
    let mut keys = Vec::new();
    while let Some(key) = reader.next_key().unwrap() {
        keys.push(key.into_owned());
        reader.skip_value().unwrap();
    }
    assert_eq!(keys, ["b", "a", "c"]);

    // So text -> tree -> text keeps the document's ordering byte for byte.
    let mut reader = ValueReader::new(&tree);
    let mut writer = CompactWriter::new();
    transfer(&mut reader, &mut writer).unwrap();
    assert_eq!(writer.into_inner(), doc);
    assert_eq!(tree.to_string(), doc);
}

#[test]
fn integer_overflow_is_backend_specific() {
    // The lexing backends accumulate digits with wrapping arithmetic:
    // 10^20 mod 2^64, reinterpreted as i64.
    let lexeme = "100000000000000000000";
    let wrapped = 7_766_279_631_452_241_920_i64;
    assert_eq!(StrReader::new(lexeme).expect_int().unwrap(), wrapped);
    assert_eq!(
        BytesReader::new(lexeme.as_bytes()).expect_int().unwrap(),
        wrapped
    );

    // The tree backend has only the f64 left, so it clamps instead.
    let huge = Value::Number(1e20);
    assert_eq!(ValueReader::new(&huge).expect_int().unwrap(), i64::MAX);
    let tiny = Value::Number(-1e20);
    assert_eq!(ValueReader::new(&tiny).expect_int().unwrap(), i64::MIN);

    // In range, all three agree.
    let lexeme = "9007199254740992";
    let expected = 9_007_199_254_740_992_i64;
    assert_eq!(StrReader::new(lexeme).expect_int().unwrap(), expected);
    assert_eq!(
        BytesReader::new(lexeme.as_bytes()).expect_int().unwrap(),
        expected
    );
    let tree = parse_value(lexeme).unwrap();
    assert_eq!(ValueReader::new(&tree).expect_int().unwrap(), expected);
}

#[test]
fn byte_reader_rejects_invalid_utf8_strings() {
    let mut bad = alloc::vec![b'"', 0xC0, 0xAF, b'"'];
    assert!(BytesReader::new(&bad).expect_str().is_err());
    bad = alloc::vec![b'"', 0xE2, 0x82, b'"'];
    assert!(BytesReader::new(&bad).expect_str().is_err());
}

#[test]
fn byte_reader_accepts_multibyte_utf8() {
    let doc = "\"caf\u{e9} \u{1F680}\"";
    assert_eq!(
        BytesReader::new(doc.as_bytes()).expect_str().unwrap(),
        "caf\u{e9} \u{1F680}"
    );
}
