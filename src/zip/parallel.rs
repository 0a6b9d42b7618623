//! Multi-range parallel encoding.
//!
//! One scoped thread per range, each producing an owned result that is
//! moved back through its join handle. The scope's join barrier is the
//! only synchronization point; the merge runs strictly after it on the
//! calling thread, driven by range index.

use crate::frequency::{self, FrequencyTable};
use crate::rle::{self, Run};
use crate::{PzipError, PzipResult};

use super::Zipped;

/// Result of encoding one range, owned by its worker until join.
struct RangeResult {
    runs: Vec<Run>,
    freq: FrequencyTable,
}

/// Worker body: run detection and letter counting over one range.
fn encode_range(range: &[u8]) -> RangeResult {
    RangeResult {
        runs: rle::encode(range),
        freq: frequency::count_letters(range),
    }
}

/// Multi-range parallel encoding.
///
/// Caller guarantees `num_threads >= 2` and `input.len() >= num_threads`.
/// Each range spans `input.len() / num_threads` bytes; the remainder at
/// the tail of the input is not assigned to any range.
pub(crate) fn encode_parallel(input: &[u8], num_threads: usize) -> PzipResult<Zipped> {
    let range_size = input.len() / num_threads;
    let ranges: Vec<&[u8]> = (0..num_threads)
        .map(|k| &input[k * range_size..(k + 1) * range_size])
        .collect();

    // Encode ranges in parallel using scoped threads
    let results: Vec<PzipResult<RangeResult>> = std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_threads);

        for (index, range) in ranges.iter().enumerate() {
            let builder = std::thread::Builder::new().name(format!("pzip-worker-{index}"));
            let spawned = builder
                .spawn_scoped(scope, move || encode_range(range))
                .map_err(|_| PzipError::SpawnFailed);
            let failed = spawned.is_err();
            handles.push(spawned);
            if failed {
                // Already-running workers are joined below before the
                // error reaches the caller.
                break;
            }
        }

        // Join in launch order; completion order does not matter because
        // results are keyed by range index.
        handles
            .into_iter()
            .map(|spawned| match spawned {
                Ok(handle) => handle.join().map_err(|_| PzipError::WorkerPanicked),
                Err(e) => Err(e),
            })
            .collect()
    });

    // Check for errors
    let mut range_results: Vec<RangeResult> = Vec::with_capacity(num_threads);
    for result in results {
        range_results.push(result?);
    }

    // Merge: concatenate runs in range order, sum the frequency tables.
    let total_runs: usize = range_results.iter().map(|r| r.runs.len()).sum();
    let mut runs = Vec::with_capacity(total_runs);
    let mut freq = FrequencyTable::new();

    for range_result in range_results {
        runs.extend(range_result.runs);
        freq.accumulate(&range_result.freq);
    }

    Ok(Zipped { runs, freq })
}
