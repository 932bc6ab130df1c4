use rstest::rstest;
use slicejson::Error;

fn decode_err(input: &str) -> Error {
    slicejson::from_str(input).unwrap_err()
}

#[rstest]
#[case(r#"{"a": "b"#)]
#[case(r#"["unclosed"#)]
fn unterminated_string(#[case] input: &str) {
    assert_eq!(decode_err(input), Error::UnterminatedString);
}

#[rstest]
fn illegal_newline_in_string() {
    assert_eq!(
        decode_err("\"line\nbreak\""),
        Error::IllegalNewlineInString
    );
}

#[rstest]
fn missing_escape_char() {
    assert_eq!(decode_err("\"abc\\"), Error::MissingEscapeChar);
}

#[rstest]
#[case(r#""\u12""#)]
#[case(r#""\uZZZZ""#)]
fn illegal_unicode_escape(#[case] input: &str) {
    assert_eq!(decode_err(input), Error::IllegalUnicodeEscape);
}

#[rstest]
fn token_before_bracket() {
    assert_eq!(
        decode_err("[1 [2]]"),
        Error::UnexpectedTokenBeforeBracket("1".to_string())
    );
    assert_eq!(
        decode_err("[x {}]"),
        Error::UnexpectedTokenBeforeBracket("x".to_string())
    );
}

#[rstest]
fn token_before_quote() {
    assert_eq!(
        decode_err(r#"[1 "a"]"#),
        Error::UnexpectedTokenBeforeQuote("1".to_string())
    );
}

#[rstest]
fn token_before_colon() {
    assert_eq!(
        decode_err(r#"{"a" 1: 2}"#),
        Error::UnexpectedTokenBeforeColon("1".to_string())
    );
}

#[rstest]
#[case("{: 1}")]
#[case("[1, : 2]")]
fn unexpected_colon(#[case] input: &str) {
    assert_eq!(decode_err(input), Error::UnexpectedColon);
}

#[rstest]
fn unknown_value_names_the_token() {
    assert_eq!(
        decode_err("[nope]"),
        Error::UnknownValue("nope".to_string())
    );
    assert_eq!(
        decode_err("[1.2.3]"),
        Error::UnknownValue("1.2.3".to_string())
    );
}

#[rstest]
fn mismatched_closers() {
    assert_eq!(decode_err("[1,2}"), Error::NonMemberInObject);
    assert_eq!(decode_err(r#"{"a": 1]"#), Error::NonElementInArray);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("[1,2")]
#[case(r#"{"a": 1"#)]
#[case("[1] [2]")]
#[case("}")]
fn incomplete_json(#[case] input: &str) {
    assert_eq!(decode_err(input), Error::IncompleteJson);
}

#[rstest]
fn errors_format_with_offending_token() {
    let message = decode_err("[wat]").to_string();
    assert!(message.contains("wat"), "message was: {message}");
}
