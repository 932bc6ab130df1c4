//! The parallel decode pipeline: split, tokenize, merge, extract.

pub(crate) mod parts;
pub(crate) mod split;
pub(crate) mod token;
pub(crate) mod tokenizer;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::error::Error;
use crate::options::DecodeOptions;
use crate::value::Value;
use crate::Result;

use self::parts::PartStack;
use self::tokenizer::tokenize_slice;

/// Decode a full document held in memory.
///
/// Slices are tokenized on the pool in any order; their stacks are merged
/// strictly in original left-to-right input order (an out-of-order merge
/// would build a wrong tree silently), then the result must be exactly one
/// completed value.
pub(crate) fn decode_bytes(
    pool: &ThreadPool,
    options: &DecodeOptions,
    bytes: &[u8],
) -> Result<Value> {
    let target = pool.current_num_threads().max(1) * options.slices_per_worker.max(1);
    let ranges = split::split_ranges(pool, bytes, target, options.min_slice_size);

    if ranges.len() == 1 {
        // Degenerate sequential parse on the calling thread.
        return tokenize_slice(bytes)?.into_value();
    }

    // Fail fast: the first tokenizer error aborts the collect. In-flight
    // sibling tasks may run to completion, but their stacks are dropped and
    // never merged.
    let stacks: Vec<PartStack> = pool.install(|| {
        ranges
            .as_slice()
            .par_iter()
            .map(|range| tokenize_slice(&bytes[range.clone()]))
            .collect::<Result<_>>()
    })?;

    let mut stacks = stacks.into_iter();
    let mut merged = match stacks.next() {
        Some(stack) => stack,
        None => return Err(Error::IncompleteJson),
    };
    for stack in stacks {
        merged.merge(stack)?;
    }
    merged.into_value()
}
