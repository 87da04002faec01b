//! Error taxonomy for dictionary loading, configuration and path bookkeeping.

use std::path::PathBuf;

use thiserror::Error;

use crate::dictionary::WordId;

/// Fatal errors surfaced to the caller of a search run.
///
/// Running out of candidate words is never an error; it is the normal end of a
/// growth phase and is reported through `Option`/path length instead.
#[derive(Error, Debug)]
pub enum ChainError {
    /// The dictionary source could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The dictionary source contained no words at all.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// The dictionary has no words of the requested length.
    #[error("dictionary has no words of length {word_len}")]
    NoWordsOfLength {
        /// Requested word length.
        word_len: usize,
    },

    /// Keys need at least three characters per word.
    #[error("word length {word_len} is too short (minimum is 3)")]
    InvalidWordLength {
        /// Requested word length.
        word_len: usize,
    },

    /// Cooling factor must lie strictly between 0 and 1.
    #[error("cooling factor {0} is outside (0, 1)")]
    InvalidCoolingFactor(f64),

    /// Initial temperature must be finite and positive.
    #[error("initial temperature {0} must be finite and positive")]
    InvalidTemperature(f64),

    /// A probability knob fell outside `[0, 1]`.
    #[error("{name} = {value} is not a probability in [0, 1]")]
    InvalidProbability {
        /// Name of the offending parameter.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// The forced-restart period of the random-restart strategy was zero.
    #[error("restart period must be at least 1")]
    InvalidRestartPeriod,

    /// A path operation violated its contract (a generator bookkeeping bug).
    #[error("path bookkeeping error: {0}")]
    Path(#[from] PathError),
}

/// Contract violations on [`crate::path::PathState`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The word is already part of the path.
    #[error("word {0:?} is already in the path")]
    DuplicateWord(WordId),

    /// Attempted to remove a word from an empty path.
    #[error("path is empty")]
    Empty,
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ChainError> = std::result::Result<T, E>;
