//! # Word Chain Search
//!
//! Finds long chains of distinct, equal-length words in which each word's
//! *back key* (the two characters before its last) equals the next word's
//! *front key* (the two characters after its first).
//!
//! This crate provides:
//! - A keyed dictionary that buckets the words of one length by front and back key.
//! - A path state with O(1) insertion and removal at both ends plus O(1) membership.
//! - Five search strategies: exhaustive DFS, greedy, hill climbing, random-restart
//!   greedy and simulated annealing.
//! - An independent chain checker and a parallel sweep over word lengths.
//!
//! ## Quick Start
//!
//! ```
//! use wordchain::prelude::*;
//!
//! let words = WordList::parse("xaabby xbbccy xccddy pqrstu");
//! let cfg = SearchConfig::for_strategy(Strategy::Greedy);
//! let result = solve(&words, 6, &cfg)?;
//!
//! assert_eq!(result.chain, ["xaabby", "xbbccy", "xccddy"]);
//! assert!(is_valid_chain(&result.chain));
//! # Ok::<(), wordchain::error::ChainError>(())
//! ```
//!
//! ## Checking a Chain
//!
//! ```
//! use wordchain::validate::{validate_chain, ChainViolation};
//!
//! assert!(validate_chain(&["abcd", "xbcx"]).is_ok());
//! assert!(matches!(
//!     validate_chain(&["abcd", "xyzw"]),
//!     Err(ChainViolation::KeyMismatch { index: 1, .. })
//! ));
//! ```
//!
//! ## Sweeping Word Lengths
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use wordchain::prelude::*;
//!
//! let words = WordList::from_file("words.txt")?;
//! let cfg = SearchConfig { seed: Some(1), ..SearchConfig::default() };
//! let entries = run_sweep(&words, 4..=15, &cfg, &AtomicBool::new(false));
//! let rows: Vec<RunReport> = entries.into_iter().filter_map(|e| e.report.ok()).collect();
//! print!("{}", render_table(&rows));
//! # Ok::<(), wordchain::error::ChainError>(())
//! ```
//!
//! ## Modules
//!
//! - [`dictionary`]: Key extraction and the keyed dictionary.
//! - [`wordlist`]: Loading dictionary files.
//! - [`path`]: Double-ended path state.
//! - [`generator`]: Random, greedy and regrowth path construction.
//! - [`search`]: Strategy drivers and the single-run entry points.
//! - [`sweep`]: Parallel runs over a range of word lengths.
//! - [`validate`]: Independent chain checking.
//! - [`report`]: Result rows and table rendering.
//!
//! ## Performance Notes
//!
//! - Words are interned as [`dictionary::WordId`] indices; paths never hold strings.
//! - Exhaustive DFS is exponential and only practical for tiny dictionaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod dictionary;
pub mod error;
mod exhaustive;
pub mod generator;
pub mod path;
pub mod report;
pub mod search;
pub mod sweep;
pub mod validate;
pub mod wordlist;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::dictionary::{KeyedDictionary, WordId};
    pub use crate::error::{ChainError, Result};
    pub use crate::generator::RegrowMode;
    pub use crate::report::{RunReport, render_table, write_table};
    pub use crate::search::{SearchConfig, SearchResult, Strategy, solve, solve_dictionary};
    pub use crate::sweep::{SweepEntry, run_sweep};
    pub use crate::validate::{is_valid_chain, validate_chain};
    pub use crate::wordlist::WordList;
}
