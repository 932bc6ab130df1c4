//! A JSON codec with a slice-parallel decoder.
//!
//! The decoder cuts the input at top-level commas (never inside a string
//! literal) into slices that are tokenized concurrently, each producing a
//! stack of partial parse results; the stacks are then merged left to
//! right, reconciling brackets that open in one slice and close in
//! another, until exactly one value remains. Encoding is a plain compact
//! printer.
//!
//! ```
//! let value = slicejson::from_str(r#"{"a": [1, 2, 3]}"#)?;
//! assert_eq!(value["a"][2].as_i64(), Some(3));
//! assert_eq!(slicejson::to_string(&value), r#"{"a":[1,2,3]}"#);
//! # Ok::<(), slicejson::Error>(())
//! ```

pub mod codec;
mod decode;
mod encode;
pub mod error;
pub mod options;
pub mod value;

use std::io::Read;

pub use crate::codec::JsonCodec;
pub use crate::error::Error;
pub use crate::options::DecodeOptions;
pub use crate::value::{Number, Object, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Decode a document with default options and a transient worker pool.
pub fn from_str(input: &str) -> Result<Value> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    JsonCodec::with_options(*options)?.decode(input)
}

pub fn from_slice(input: &[u8]) -> Result<Value> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<Value> {
    JsonCodec::with_options(*options)?.decode_slice(input)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Value> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::Io(err.to_string()))?;
    from_str_with_options(&buf, options)
}

/// Encode a value to compact JSON text.
pub fn to_string(value: &Value) -> String {
    encode::to_string(value)
}

/// Encode a value to compact JSON bytes.
pub fn to_vec(value: &Value) -> Vec<u8> {
    encode::to_vec(value)
}

/// Encode a value into a writer.
pub fn to_writer<W: std::io::Write>(writer: W, value: &Value) -> Result<()> {
    encode::to_writer(writer, value)
}
