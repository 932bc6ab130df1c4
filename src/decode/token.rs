//! Escape and bare-token decoding: pure functions over borrowed bytes.

use crate::error::Error;
use crate::value::{Number, Value};
use crate::Result;

/// Decode one escape sequence. `pos` indexes the byte after the backslash;
/// the decoded code point is re-encoded into `scratch` as UTF-8 and the
/// position after the sequence is returned.
pub(crate) fn decode_escape(bytes: &[u8], pos: usize, scratch: &mut Vec<u8>) -> Result<usize> {
    let Some(&c) = bytes.get(pos) else {
        return Err(Error::MissingEscapeChar);
    };
    let pos = pos + 1;
    match c {
        b'n' => scratch.push(b'\n'),
        b'b' => scratch.push(0x08),
        b'r' => scratch.push(b'\r'),
        b't' => scratch.push(b'\t'),
        b'f' => scratch.push(0x0c),
        b'\'' | b'"' | b'\\' => scratch.push(c),
        b'u' => return decode_unicode_escape(bytes, pos, scratch),
        b'0'..=b'7' => return Ok(decode_octal_escape(bytes, pos, c, scratch)),
        // Unrecognized escapes are consumed and produce nothing.
        _ => {}
    }
    Ok(pos)
}

/// `\uXXXX`, tolerating stuttered `u`s and one leading `+` (the legacy
/// `\u+XXXX` notation): exactly four hex digits must follow.
fn decode_unicode_escape(bytes: &[u8], mut pos: usize, scratch: &mut Vec<u8>) -> Result<usize> {
    while bytes.get(pos) == Some(&b'u') {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'+') {
        pos += 1;
    }
    let Some(digits) = bytes.get(pos..pos + 4) else {
        return Err(Error::IllegalUnicodeEscape);
    };
    let mut code = 0u32;
    for &d in digits {
        let digit = (d as char).to_digit(16).ok_or(Error::IllegalUnicodeEscape)?;
        code = code * 16 + digit;
    }
    push_code_point(code, scratch);
    Ok(pos + 4)
}

/// Greedy 1-3 digit octal escape. A third digit is taken only when the
/// first is `0`-`3`, keeping the value within one byte.
fn decode_octal_escape(bytes: &[u8], mut pos: usize, first: u8, scratch: &mut Vec<u8>) -> usize {
    let mut code = (first - b'0') as u32;
    let mut two_digits = false;
    if let Some(&d) = bytes.get(pos) {
        if d.is_ascii_digit() && d <= b'7' {
            code = code * 8 + (d - b'0') as u32;
            pos += 1;
            two_digits = true;
        }
    }
    if two_digits && first <= b'3' {
        if let Some(&d) = bytes.get(pos) {
            if d.is_ascii_digit() && d <= b'7' {
                code = code * 8 + (d - b'0') as u32;
                pos += 1;
            }
        }
    }
    push_code_point(code, scratch);
    pos
}

fn push_code_point(code: u32, scratch: &mut Vec<u8>) {
    // Unpaired surrogates have no UTF-8 form; substitute the replacement
    // character the way a replacing encoder would.
    let ch = char::from_u32(code).unwrap_or('\u{FFFD}');
    let mut buf = [0u8; 4];
    scratch.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// Parse a bare (unquoted) token: keyword literal, 64-bit integer, or
/// float. The caller has already trimmed surrounding whitespace.
pub(crate) fn parse_bare(token: &[u8]) -> Result<Value> {
    match token {
        b"true" => return Ok(Value::Bool(true)),
        b"false" => return Ok(Value::Bool(false)),
        b"null" => return Ok(Value::Null),
        _ => {}
    }
    if let Some(number) = parse_int_fast(token) {
        return Ok(Value::Number(number));
    }
    let text = String::from_utf8_lossy(token);
    match text.parse::<f64>() {
        Ok(float) => Ok(Value::Number(Number::Float(float))),
        Err(_) => Err(Error::UnknownValue(text.into_owned())),
    }
}

/// Fast integer path: optional sign, then all decimal digits. Accumulation
/// is checked; a literal outside the 64-bit range falls through to the
/// float path instead of wrapping.
fn parse_int_fast(token: &[u8]) -> Option<Number> {
    let (negative, digits) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut magnitude = 0u64;
    for &d in digits {
        magnitude = magnitude
            .checked_mul(10)?
            .checked_add((d - b'0') as u64)?;
    }
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return None;
        }
        Some(Number::Int(magnitude.wrapping_neg() as i64))
    } else {
        if magnitude > i64::MAX as u64 {
            return None;
        }
        Some(Number::Int(magnitude as i64))
    }
}
