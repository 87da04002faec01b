//! Independent end-to-end chain checks.
//!
//! These functions only look at the spelled-out words, never at search internals,
//! so a bookkeeping bug in a generator cannot vouch for itself.

use std::collections::HashSet;

use thiserror::Error;

use crate::dictionary::{back_key, front_key};

// ============================================================================
// Public API
// ============================================================================

/// Why a chain failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainViolation {
    /// A word appears more than once.
    #[error("word {word:?} at position {index} repeats an earlier word")]
    Duplicate {
        /// Position of the repeat.
        index: usize,
        /// The repeated word.
        word: String,
    },
    /// Adjacent words do not share a key.
    #[error("word {word:?} at position {index} does not follow {previous:?}")]
    KeyMismatch {
        /// Position of the word that breaks the chain.
        index: usize,
        /// The word before it.
        previous: String,
        /// The offending word.
        word: String,
    },
    /// A word is too short to have keys.
    #[error("word {word:?} at position {index} is too short to carry keys")]
    TooShort {
        /// Position of the word.
        index: usize,
        /// The offending word.
        word: String,
    },
}

/// Returns `true` if the chain has no repeated word and every adjacent pair
/// `(a, b)` satisfies `back_key(a) == front_key(b)`.
///
/// The empty chain and single-word chains are valid.
pub fn is_valid_chain<S: AsRef<str>>(chain: &[S]) -> bool {
    validate_chain(chain).is_ok()
}

/// Like [`is_valid_chain`] but reports the first violation.
///
/// # Errors
/// Returns the first [`ChainViolation`] found, scanning from the front.
pub fn validate_chain<S: AsRef<str>>(chain: &[S]) -> Result<(), ChainViolation> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(chain.len());
    let mut previous: Option<&str> = None;

    for (index, word) in chain.iter().enumerate() {
        let word = word.as_ref();
        if !seen.insert(word) {
            return Err(ChainViolation::Duplicate {
                index,
                word: word.to_owned(),
            });
        }

        let (Some(front), Some(_)) = (front_key(word), back_key(word)) else {
            return Err(ChainViolation::TooShort {
                index,
                word: word.to_owned(),
            });
        };

        if let Some(prev) = previous
            && back_key(prev) != Some(front)
        {
            return Err(ChainViolation::KeyMismatch {
                index,
                previous: prev.to_owned(),
                word: word.to_owned(),
            });
        }
        previous = Some(word);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
