//! Parallel run-length encoding orchestrator.
//!
//! Splits the input into contiguous, disjoint, equal-size ranges, encodes
//! each range on its own worker thread, and merges the per-range results
//! in range order into one flat run sequence plus a combined per-letter
//! frequency table.
//!
//! **Partitioning:** with `n` workers, each range spans
//! `range = input.len() / n` bytes (integer division). The trailing
//! `input.len() % n` bytes are not processed; callers that need the full
//! buffer encoded must pick a thread count that divides the input length.
//! `Zipped::freq.total` always equals the processed prefix length, so the
//! truncation is observable.
//!
//! **Seams:** workers never look across their range boundary, so a run of
//! identical bytes straddling a boundary is reported as two back-to-back
//! runs of the same byte. This keeps the workers fully independent and is
//! part of the output contract, not an artifact to be normalized away.
//!
//! **Determinism:** the merge is driven by range index, not worker
//! completion order, so repeated calls yield identical output.

mod parallel;

use crate::frequency::{self, FrequencyTable, ALPHABET_SIZE};
use crate::rle::{self, Run};
use crate::{PzipError, PzipResult};

/// Options controlling parallel encoding behavior.
#[derive(Debug, Clone, Default)]
pub struct ZipOptions {
    /// Number of worker threads. 0 = auto (use all available cores),
    /// 1 = single-threaded.
    pub threads: usize,
}

/// Combined output of a parallel encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipped {
    /// Run sequence covering the processed prefix, in range order.
    pub runs: Vec<Run>,
    /// Per-letter occurrence counts over the processed prefix.
    pub freq: FrequencyTable,
}

/// Encode input with default options (one worker per available core).
pub fn encode(input: &[u8]) -> PzipResult<Zipped> {
    encode_with_options(input, &ZipOptions::default())
}

/// Encode input using the configured number of worker threads.
///
/// The thread count is capped at `input.len()` so that every worker gets
/// a non-empty range.
pub fn encode_with_options(input: &[u8], options: &ZipOptions) -> PzipResult<Zipped> {
    if input.is_empty() {
        return Ok(Zipped {
            runs: Vec::new(),
            freq: FrequencyTable::new(),
        });
    }

    let num_threads = resolve_thread_count(options.threads).min(input.len());

    // Single-worker path: encode on the calling thread, no spawn overhead.
    // The lone range covers the whole input, so nothing is truncated.
    if num_threads <= 1 {
        return Ok(Zipped {
            runs: rle::encode(input),
            freq: frequency::count_letters(input),
        });
    }

    parallel::encode_parallel(input, num_threads)
}

/// Encode input into caller-owned output buffers.
///
/// Writes the merged run sequence into `out_runs` and the combined
/// per-letter counts into `out_freq`, returning the number of runs
/// written. `out_freq` is zeroed before accumulation, so the same array
/// can be reused across calls without clearing it first.
///
/// Fails with [`PzipError::BufferTooSmall`] before touching either output
/// if `out_runs` cannot hold the full run sequence (one run per input
/// byte is always sufficient capacity). After any error the outputs are
/// unmodified and must not be read as results.
pub fn encode_into(
    input: &[u8],
    options: &ZipOptions,
    out_runs: &mut [Run],
    out_freq: &mut [u32; ALPHABET_SIZE],
) -> PzipResult<usize> {
    let zipped = encode_with_options(input, options)?;

    if zipped.runs.len() > out_runs.len() {
        return Err(PzipError::BufferTooSmall);
    }

    out_runs[..zipped.runs.len()].copy_from_slice(&zipped.runs);
    *out_freq = zipped.freq.letter;
    Ok(zipped.runs.len())
}

/// Resolve thread count: 0 = auto (available_parallelism), otherwise use the given value.
pub(crate) fn resolve_thread_count(threads: usize) -> usize {
    if threads == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        threads
    }
}
