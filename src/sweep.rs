//! Runs one strategy over a range of word lengths in parallel.
//!
//! Each word length gets its own dictionary and its own RNG; nothing mutable is
//! shared between runs except the stop flag.

use std::ops::RangeInclusive;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{error, info};

use crate::error::Result;
use crate::report::RunReport;
use crate::search::{SearchConfig, solve_dictionary_until, splitmix64};
use crate::wordlist::WordList;

/// Outcome of one word length in a sweep.
#[derive(Debug)]
pub struct SweepEntry {
    /// Word length of this run.
    pub word_len: usize,
    /// The report, or the configuration error that prevented the run.
    pub report: Result<RunReport>,
}

/// Searches every word length in `lengths`, in parallel on the rayon pool.
///
/// With a base seed, each run is seeded with `splitmix64(seed ^ word_len)`, so the
/// sweep is reproducible regardless of scheduling. Entries come back in length order.
pub fn run_sweep(
    words: &WordList,
    lengths: RangeInclusive<usize>,
    cfg: &SearchConfig,
    stop: &AtomicBool,
) -> Vec<SweepEntry> {
    info!(
        strategy = %cfg.strategy,
        from = lengths.start(),
        to = lengths.end(),
        threads = rayon::current_num_threads(),
        "starting sweep"
    );

    lengths
        .into_par_iter()
        .map(|word_len| SweepEntry {
            word_len,
            report: run_one(words, word_len, cfg, stop),
        })
        .collect()
}

/// Indexes, searches and validates a single word length.
///
/// # Errors
/// Returns the configuration error for this length, if any.
pub fn run_one(
    words: &WordList,
    word_len: usize,
    cfg: &SearchConfig,
    stop: &AtomicBool,
) -> Result<RunReport> {
    let total = Instant::now();
    let run_cfg = SearchConfig {
        seed: cfg.seed.map(|seed| splitmix64(seed ^ word_len as u64)),
        ..cfg.clone()
    };
    run_cfg.validate()?;

    let dict = words.keyed(word_len)?;
    let result = solve_dictionary_until(&dict, &run_cfg, stop)?;
    let report = RunReport::new(result, &run_cfg, total.elapsed());
    if !report.valid {
        error!(word_len, chain = ?report.chain, "search produced an invalid chain");
    }
    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
