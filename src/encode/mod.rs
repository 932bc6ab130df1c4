//! Value → compact JSON text.
//!
//! A plain single-threaded recursive printer: objects and arrays are
//! comma-joined with no inter-token whitespace, object members appear in
//! the map's insertion order.

pub(crate) mod writer;

use std::io::Write;

use crate::error::Error;
use crate::value::Value;
use crate::Result;

use self::writer::Writer;

/// Serialize a value to compact JSON text.
pub fn to_string(value: &Value) -> String {
    let mut out = Writer::with_capacity(expected_size(value));
    write_value(value, &mut out);
    out.finish()
}

/// Serialize a value to compact JSON bytes.
pub fn to_vec(value: &Value) -> Vec<u8> {
    let mut out = Writer::with_capacity(expected_size(value));
    write_value(value, &mut out);
    out.finish_bytes()
}

/// Serialize a value into a writer.
pub fn to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    writer
        .write_all(&to_vec(value))
        .map_err(|err| Error::Io(err.to_string()))
}

fn write_value(value: &Value, out: &mut Writer) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(number) => out.write_number(number),
        Value::String(text) => out.write_escaped(text),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        Value::Object(members) => {
            out.push(b'{');
            for (i, (name, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                out.write_escaped(name);
                out.push(b':');
                write_value(member, out);
            }
            out.push(b'}');
        }
    }
}

/// Rough output-size guess to seed the buffer; strings dominate real
/// documents.
fn expected_size(value: &Value) -> usize {
    match value {
        Value::Null | Value::Bool(_) => 5,
        Value::Number(_) => 8,
        Value::String(text) => text.len() + 2,
        Value::Array(items) => 2 + items.len() * 8,
        Value::Object(members) => 2 + members.len() * 16,
    }
}
