//! Safe split-point discovery.
//!
//! A boundary may fall only immediately after a top-level comma — never
//! inside a string literal. Bracket depth is deliberately not tracked:
//! unbalanced `{`/`[` across a boundary is legal input for the merge
//! protocol, which is what keeps the scan state O(1) per byte.

use std::ops::Range;

use memchr::memchr2;
use rayon::prelude::*;
use rayon::ThreadPool;
use smallvec::SmallVec;

pub(crate) type RangeList = SmallVec<[Range<usize>; 16]>;

/// Outcome of speculatively scanning one chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChunkScan {
    /// String state after the chunk, given the assumed entry state.
    pub in_str: bool,
    /// Offset within the chunk of the last comma seen outside a string.
    pub last_comma: Option<usize>,
    /// The chunk's final byte was a backslash inside a string, so the
    /// first byte of the following chunk is escaped content.
    pub ends_in_escape: bool,
}

/// Scan a chunk tracking only string state: `"` toggles it, `\` consumes
/// the following byte so an escaped quote never toggles, and commas are
/// recorded only outside strings. Pure over the borrowed range, so both
/// entry states can be scanned concurrently.
pub(crate) fn scan_chunk(bytes: &[u8], mut in_str: bool) -> ChunkScan {
    let mut last_comma = None;
    let mut pos = 0;
    while pos < bytes.len() {
        if in_str {
            match memchr2(b'"', b'\\', &bytes[pos..]) {
                Some(offset) => {
                    let found = pos + offset;
                    if bytes[found] == b'"' {
                        in_str = false;
                        pos = found + 1;
                    } else if found + 1 < bytes.len() {
                        pos = found + 2;
                    } else {
                        return ChunkScan {
                            in_str,
                            last_comma,
                            ends_in_escape: true,
                        };
                    }
                }
                None => break,
            }
        } else {
            match memchr2(b'"', b',', &bytes[pos..]) {
                Some(offset) => {
                    let found = pos + offset;
                    if bytes[found] == b'"' {
                        in_str = true;
                    } else {
                        last_comma = Some(found);
                    }
                    pos = found + 1;
                }
                None => break,
            }
        }
    }
    ChunkScan {
        in_str,
        last_comma,
        ends_in_escape: false,
    }
}

/// Cut the input into ranges that are each safe to tokenize independently.
///
/// The input is divided into `ceil(len / chunk_size)` fixed-size chunks
/// with `chunk_size = max(len / target_slices, min_slice_size)`. Interior
/// chunks are scanned speculatively under both entry states on the pool;
/// a sequential pass over chunk boundaries then threads the true string
/// state left to right and emits a range boundary after each chunk's last
/// top-level comma. The final chunk is the forced remainder and is never
/// scanned. One chunk means one range: the degenerate sequential parse.
pub(crate) fn split_ranges(
    pool: &ThreadPool,
    bytes: &[u8],
    target_slices: usize,
    min_slice_size: usize,
) -> RangeList {
    let mut ranges = RangeList::new();
    let len = bytes.len();
    let chunk_size = (len / target_slices.max(1)).max(min_slice_size.max(1));
    let chunk_count = len.div_ceil(chunk_size);
    if chunk_count <= 1 {
        ranges.push(0..len);
        return ranges;
    }

    let chunks: Vec<&[u8]> = (0..chunk_count - 1)
        .map(|i| &bytes[i * chunk_size..(i + 1) * chunk_size])
        .collect();
    // Chunk 0 always enters outside a string, so its in-string twin is
    // never needed.
    let scans: Vec<(ChunkScan, ChunkScan)> = pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let outside = scan_chunk(chunk, false);
                let inside = if i == 0 {
                    outside
                } else {
                    scan_chunk(chunk, true)
                };
                (outside, inside)
            })
            .collect()
    });

    let mut cursor = 0;
    let mut in_str = false;
    let mut pending_escape = false;
    for (index, chunk) in chunks.iter().enumerate() {
        let start = index * chunk_size;
        let (scan, comma_base) = if pending_escape {
            // The previous chunk ended mid-escape, so this chunk's first
            // byte is string content, not syntax; neither speculative
            // result is valid. Rescan past it with the known state.
            (scan_chunk(&chunk[1..], true), start + 1)
        } else if in_str {
            (scans[index].1, start)
        } else {
            (scans[index].0, start)
        };
        in_str = scan.in_str;
        pending_escape = scan.ends_in_escape;
        if let Some(offset) = scan.last_comma {
            let boundary = comma_base + offset + 1;
            ranges.push(cursor..boundary);
            cursor = boundary;
        }
    }
    if cursor < len {
        ranges.push(cursor..len);
    }
    if ranges.is_empty() {
        ranges.push(0..len);
    }
    ranges
}
