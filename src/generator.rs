//! Path construction and mutation over a [`KeyedDictionary`].
//!
//! Every operation is single threaded and takes its random source explicitly, so a
//! seeded RNG reproduces the exact same sequence of paths.

use rand::Rng;

use crate::dictionary::{KeyedDictionary, WordId};
use crate::error::PathError;
use crate::path::{Direction, PathState};

/// Resamples allowed after the first draw in [`random_word`] before giving up.
pub const RANDOM_WORD_RESAMPLES: usize = 10;

/// How a path is re-extended after backtracking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegrowMode {
    /// Random walk until a draw fails.
    Random,
    /// One random step, then greedy extension to exhaustion.
    #[default]
    Greedy,
}

/// Draws a random word from `bucket` that is not yet in `visited`.
///
/// Returns `None` for an empty bucket, or when the first draw and
/// [`RANDOM_WORD_RESAMPLES`] resamples all hit visited words. A sparse bucket can
/// therefore report `None` even though an unvisited word exists.
#[inline]
pub fn random_word<R: Rng>(bucket: &[WordId], visited: &PathState, rng: &mut R) -> Option<WordId> {
    if bucket.is_empty() {
        return None;
    }
    for _ in 0..=RANDOM_WORD_RESAMPLES {
        let word = bucket[rng.random_range(0..bucket.len())];
        if !visited.contains(word) {
            return Some(word);
        }
    }
    None
}

/// Builds and mutates [`PathState`]s using dictionary lookups.
#[derive(Clone, Copy, Debug)]
pub struct PathGenerator<'d> {
    dict: &'d KeyedDictionary,
}

impl<'d> PathGenerator<'d> {
    /// Creates a generator over a read-only dictionary.
    pub fn new(dict: &'d KeyedDictionary) -> Self {
        Self { dict }
    }

    /// Words that may be placed next to `word` at the growing end.
    #[inline]
    pub fn candidates(&self, word: WordId, direction: Direction) -> &'d [WordId] {
        match direction {
            Direction::Forward => self.dict.successors(word),
            Direction::Backward => self.dict.predecessors(word),
        }
    }

    /// A uniformly random front bucket, then a uniformly random word inside it.
    ///
    /// Returns `None` only for an empty dictionary.
    pub fn random_start_word<R: Rng>(&self, rng: &mut R) -> Option<WordId> {
        let count = self.dict.front_bucket_count();
        if count == 0 {
            return None;
        }
        let (_, bucket) = self.dict.front_bucket_at(rng.random_range(0..count))?;
        Some(bucket[rng.random_range(0..bucket.len())])
    }

    // ------------------------------------------------------------------------
    // Random growth
    // ------------------------------------------------------------------------

    /// Random walk from a single seed word until [`random_word`] fails.
    ///
    /// # Errors
    /// Only on a bookkeeping bug (see [`PathError`]).
    pub fn grow_random<R: Rng>(
        &self,
        seed: WordId,
        direction: Direction,
        rng: &mut R,
    ) -> Result<PathState, PathError> {
        let mut path = PathState::from_seed(seed);
        self.extend_random(&mut path, direction, rng)?;
        Ok(path)
    }

    /// Continues a random walk from the growing end of an existing path.
    ///
    /// # Errors
    /// Only on a bookkeeping bug (see [`PathError`]).
    pub fn extend_random<R: Rng>(
        &self,
        path: &mut PathState,
        direction: Direction,
        rng: &mut R,
    ) -> Result<(), PathError> {
        while let Some(end) = path.end(direction) {
            let Some(next) = random_word(self.candidates(end, direction), path, rng) else {
                break;
            };
            path.push(direction, next)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Greedy growth
    // ------------------------------------------------------------------------

    /// The unvisited neighbour of `end` with the most onward candidates.
    ///
    /// Ties go to the first candidate in bucket order.
    #[inline]
    pub fn greedy_step(&self, end: WordId, path: &PathState, direction: Direction) -> Option<WordId> {
        let mut best: Option<(WordId, usize)> = None;
        for &candidate in self.candidates(end, direction) {
            if path.contains(candidate) {
                continue;
            }
            let branching = self.candidates(candidate, direction).len();
            if best.is_none_or(|(_, b)| branching > b) {
                best = Some((candidate, branching));
            }
        }
        best.map(|(word, _)| word)
    }

    /// Extends `path` at its growing end with [`Self::greedy_step`] until no
    /// unvisited candidate remains.
    ///
    /// # Errors
    /// Only on a bookkeeping bug (see [`PathError`]).
    pub fn grow_greedy(&self, path: &mut PathState, direction: Direction) -> Result<(), PathError> {
        while let Some(end) = path.end(direction) {
            let Some(next) = self.greedy_step(end, path, direction) else {
                break;
            };
            path.push(direction, next)?;
        }
        Ok(())
    }

    /// Deterministic greedy chain.
    ///
    /// Starts from a word whose back key is the most common front key, then grows
    /// forward greedily. When front and back keys coincide the largest bucket is
    /// returned as-is, since it is already an optimal chain.
    ///
    /// # Errors
    /// Only on a bookkeeping bug (see [`PathError`]).
    pub fn greedy_path(&self) -> Result<PathState, PathError> {
        let Some((key, bucket)) = self.dict.largest_front_bucket() else {
            return Ok(PathState::new());
        };
        if self.dict.keys_coincide() {
            return PathState::from_words(bucket.iter().copied());
        }

        let start = self
            .dict
            .bucket_by_back(key)
            .first()
            .copied()
            .unwrap_or(bucket[0]);
        let mut path = PathState::from_seed(start);
        self.grow_greedy(&mut path, Direction::Forward)?;
        Ok(path)
    }

    // ------------------------------------------------------------------------
    // Backtrack and regrow
    // ------------------------------------------------------------------------

    /// Produces a new candidate from `path` by removing `backtrack` words from the
    /// growing end and regrowing from there.
    ///
    /// A `backtrack` of at least `path.len()` discards the path and starts over from
    /// [`Self::random_start_word`]. `path` itself is never modified.
    ///
    /// # Errors
    /// Only on a bookkeeping bug (see [`PathError`]).
    pub fn regrow<R: Rng>(
        &self,
        path: &PathState,
        backtrack: usize,
        direction: Direction,
        mode: RegrowMode,
        rng: &mut R,
    ) -> Result<PathState, PathError> {
        if backtrack >= path.len() {
            let Some(seed) = self.random_start_word(rng) else {
                return Ok(PathState::new());
            };
            return match mode {
                RegrowMode::Random => self.grow_random(seed, direction, rng),
                RegrowMode::Greedy => {
                    let mut fresh = PathState::from_seed(seed);
                    self.grow_greedy(&mut fresh, direction)?;
                    Ok(fresh)
                }
            };
        }

        let mut next = path.clone();
        next.truncate_end(direction, backtrack)?;
        match mode {
            RegrowMode::Random => self.extend_random(&mut next, direction, rng)?,
            RegrowMode::Greedy => {
                if let Some(end) = next.end(direction)
                    && let Some(word) = random_word(self.candidates(end, direction), &next, rng)
                {
                    next.push(direction, word)?;
                    self.grow_greedy(&mut next, direction)?;
                }
            }
        }
        Ok(next)
    }
}

// ============================================================================
// Tests
// ============================================================================
