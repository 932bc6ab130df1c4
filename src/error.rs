use thiserror::Error;

/// Decode and codec errors.
///
/// Every syntax error is fatal: a malformed document cannot become
/// well-formed by retrying, so the first error observed by any slice aborts
/// the whole decode and is what the caller sees. Partial trees are never
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A string literal was not closed before the end of the input.
    #[error("unterminated string")]
    UnterminatedString,
    /// A raw line break inside a string literal.
    #[error("illegal new line in a string")]
    IllegalNewlineInString,
    /// A `\` with nothing after it.
    #[error("missing escape char")]
    MissingEscapeChar,
    /// A malformed or truncated `\u` escape.
    #[error("illegal unicode escape")]
    IllegalUnicodeEscape,
    /// Non-whitespace content immediately before `{` or `[`.
    #[error("unknown value `{0}` before a bracket")]
    UnexpectedTokenBeforeBracket(String),
    /// Non-whitespace content immediately before `"`.
    #[error("unknown value `{0}` before a quote")]
    UnexpectedTokenBeforeQuote(String),
    /// Non-whitespace content immediately before `:`.
    #[error("unknown value `{0}` before a colon")]
    UnexpectedTokenBeforeColon(String),
    /// A `:` not preceded by a string key.
    #[error("unexpected colon")]
    UnexpectedColon,
    /// A bare token that is neither a literal keyword nor a number.
    #[error("unknown value `{0}`")]
    UnknownValue(String),
    /// A `}` met something other than members and its opener.
    #[error("non-member part in a json object")]
    NonMemberInObject,
    /// A `]` met something other than elements and its opener.
    #[error("non-element part in a json array")]
    NonElementInArray,
    /// The document did not reduce to exactly one value.
    #[error("incomplete json")]
    IncompleteJson,
    /// Input bytes were not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(String),
    /// Reading or writing through an `io` handle failed.
    #[error("i/o: {0}")]
    Io(String),
    /// The worker pool could not be built.
    #[error("worker pool: {0}")]
    Pool(String),
}
