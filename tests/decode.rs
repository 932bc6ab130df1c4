use rstest::rstest;
use slicejson::{Number, Value};

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Bool(true))]
#[case("false", Value::Bool(false))]
#[case("0", Value::from(0))]
#[case("-12", Value::from(-12))]
#[case("3.5", Value::from(3.5))]
#[case("1e3", Value::from(1000.0))]
#[case(r#""plain""#, Value::from("plain"))]
#[case("[]", Value::Array(Vec::new()))]
#[case("[1,2]", Value::from_iter([Value::from(1), Value::from(2)]))]
fn decodes_scalars_and_flat_containers(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(slicejson::from_str(input).unwrap(), expected);
}

#[rstest]
fn decodes_nested_document() {
    let value = slicejson::from_str(
        r#"{"name": "widget", "tags": ["a", "b"], "meta": {"count": 2, "ok": true}}"#,
    )
    .unwrap();
    assert_eq!(value["name"].as_str(), Some("widget"));
    assert_eq!(value["tags"].as_array().unwrap().len(), 2);
    assert_eq!(value["meta"]["count"].as_i64(), Some(2));
    assert_eq!(value["meta"]["ok"].as_bool(), Some(true));
}

#[rstest]
fn whitespace_tolerance() {
    let compact = slicejson::from_str(r#"{"a":1,"b":[1,2]}"#).unwrap();
    let spaced = slicejson::from_str("{ \"a\" : 1 , \"b\" : [ 1 , 2 ] }").unwrap();
    assert_eq!(compact, spaced);
}

#[rstest]
fn duplicate_keys_last_write_wins() {
    let value = slicejson::from_str(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(value["a"].as_i64(), Some(2));
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[rstest]
fn escape_decoding() {
    let value = slicejson::from_str("\"\\u0041\"").unwrap();
    assert_eq!(value.as_str(), Some("A"));

    let value = slicejson::from_str(r#""\n""#).unwrap();
    assert_eq!(value.as_str(), Some("\n"));

    let value = slicejson::from_str(r#""\101""#).unwrap();
    assert_eq!(value.as_str(), Some("A"));

    let value = slicejson::from_str(r#""tab\there""#).unwrap();
    assert_eq!(value.as_str(), Some("tab\there"));
}

#[rstest]
fn numeric_boundary_falls_back_to_float() {
    // Exceeds the 64-bit integer range; must not crash, must not wrap.
    let value = slicejson::from_str("123456789012345678901").unwrap();
    assert_eq!(
        value,
        Value::Number(Number::Float(123456789012345678901.0))
    );

    let value = slicejson::from_str("9223372036854775807").unwrap();
    assert_eq!(value, Value::Number(Number::Int(i64::MAX)));
}

#[rstest]
fn from_slice_decodes_bytes() {
    let value = slicejson::from_slice(br#"{"a": [true]}"#).unwrap();
    assert_eq!(value["a"][0].as_bool(), Some(true));
}

#[rstest]
fn from_reader_decodes_io() {
    let input: &[u8] = br#"[1, "two", null]"#;
    let value = slicejson::from_reader(input).unwrap();
    assert_eq!(value[1].as_str(), Some("two"));
}

#[rstest]
fn unicode_content_passes_through() {
    let value = slicejson::from_str("\"caf\u{e9} \u{2603}\"").unwrap();
    assert_eq!(value.as_str(), Some("caf\u{e9} \u{2603}"));
}
