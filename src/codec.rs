use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Error;
use crate::options::DecodeOptions;
use crate::value::Value;
use crate::{decode, encode, Result};

/// A JSON codec with its own worker pool.
///
/// The pool is built once and reused across decodes; dropping the codec
/// tears the workers down. The free functions in the crate root build a
/// transient codec per call — construct one of these when decoding more
/// than once.
///
/// # Examples
/// ```
/// use slicejson::JsonCodec;
///
/// let codec = JsonCodec::new()?;
/// let value = codec.decode(r#"{"id": 7}"#)?;
/// assert_eq!(value["id"].as_i64(), Some(7));
/// # Ok::<(), slicejson::Error>(())
/// ```
pub struct JsonCodec {
    pool: ThreadPool,
    options: DecodeOptions,
}

impl JsonCodec {
    pub fn new() -> Result<Self> {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Result<Self> {
        let threads = options.threads.unwrap_or_else(default_threads);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| Error::Pool(err.to_string()))?;
        Ok(Self { pool, options })
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a complete JSON document.
    pub fn decode(&self, input: &str) -> Result<Value> {
        decode::decode_bytes(&self.pool, &self.options, input.as_bytes())
    }

    /// Decode a complete JSON document from bytes.
    pub fn decode_slice(&self, input: &[u8]) -> Result<Value> {
        let text = std::str::from_utf8(input).map_err(|err| Error::InvalidUtf8(err.to_string()))?;
        self.decode(text)
    }

    /// Encode a value to compact JSON text.
    pub fn encode(&self, value: &Value) -> String {
        encode::to_string(value)
    }
}

/// Twice the hardware parallelism, the sizing the tokenize/merge mix keeps
/// busy without oversubscribing.
fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_codec_reuse() {
        let codec = JsonCodec::with_options(DecodeOptions::new().with_threads(2)).unwrap();
        let first = codec.decode("[1,2,3]").unwrap();
        let second = codec.decode(r#"{"a": true}"#).unwrap();
        assert_eq!(first[2].as_i64(), Some(3));
        assert_eq!(second["a"].as_bool(), Some(true));
        assert_eq!(codec.encode(&first), "[1,2,3]");
    }

    #[rstest::rstest]
    fn test_decode_slice_rejects_invalid_utf8() {
        let codec = JsonCodec::with_options(DecodeOptions::new().with_threads(1)).unwrap();
        let err = codec.decode_slice(b"\"\xff\"").unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8(_)));
    }
}
