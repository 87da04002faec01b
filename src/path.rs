//! A chain under construction: a double-ended word sequence plus a membership set.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::dictionary::WordId;
use crate::error::PathError;

// ============================================================================
// Direction
// ============================================================================

/// The end of a path that grows (and is trimmed when backtracking).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Grow after the last word, following successors.
    Forward,
    /// Grow before the first word, following predecessors.
    Backward,
}

impl Direction {
    /// Fair coin flip between the two directions.
    #[inline]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

// ============================================================================
// PathState
// ============================================================================

/// Ordered, duplicate-free sequence of words.
///
/// Invariant: `members` holds exactly the elements of `words`. Each mutating call
/// updates both or neither.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathState {
    words: VecDeque<WordId>,
    members: HashSet<WordId>,
}

impl PathState {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single seed word.
    pub fn from_seed(word: WordId) -> Self {
        let mut path = Self::new();
        path.words.push_back(word);
        path.members.insert(word);
        path
    }

    /// Builds a path from a sequence of words.
    ///
    /// # Errors
    /// Returns [`PathError::DuplicateWord`] on the first repeated word.
    pub fn from_words<I>(words: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = WordId>,
    {
        let mut path = Self::new();
        for word in words {
            path.push_back(word)?;
        }
        Ok(path)
    }

    /// Number of words in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the path holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// O(1) membership test.
    #[inline]
    pub fn contains(&self, word: WordId) -> bool {
        self.members.contains(&word)
    }

    /// First word, if any.
    #[inline]
    pub fn front(&self) -> Option<WordId> {
        self.words.front().copied()
    }

    /// Last word, if any.
    #[inline]
    pub fn back(&self) -> Option<WordId> {
        self.words.back().copied()
    }

    /// The word at the growing end for `direction`.
    #[inline]
    pub fn end(&self, direction: Direction) -> Option<WordId> {
        match direction {
            Direction::Forward => self.back(),
            Direction::Backward => self.front(),
        }
    }

    /// Words in chain order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = WordId> + ExactSizeIterator + '_ {
        self.words.iter().copied()
    }

    /// Appends a word after the last one.
    ///
    /// # Errors
    /// Returns [`PathError::DuplicateWord`] if the word is already present.
    pub fn push_back(&mut self, word: WordId) -> Result<(), PathError> {
        if !self.members.insert(word) {
            return Err(PathError::DuplicateWord(word));
        }
        self.words.push_back(word);
        Ok(())
    }

    /// Prepends a word before the first one.
    ///
    /// # Errors
    /// Returns [`PathError::DuplicateWord`] if the word is already present.
    pub fn push_front(&mut self, word: WordId) -> Result<(), PathError> {
        if !self.members.insert(word) {
            return Err(PathError::DuplicateWord(word));
        }
        self.words.push_front(word);
        Ok(())
    }

    /// Adds a word at the growing end for `direction`.
    ///
    /// # Errors
    /// Returns [`PathError::DuplicateWord`] if the word is already present.
    #[inline]
    pub fn push(&mut self, direction: Direction, word: WordId) -> Result<(), PathError> {
        match direction {
            Direction::Forward => self.push_back(word),
            Direction::Backward => self.push_front(word),
        }
    }

    /// Removes and returns the first word.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] on an empty path.
    pub fn pop_front(&mut self) -> Result<WordId, PathError> {
        let word = self.words.pop_front().ok_or(PathError::Empty)?;
        self.members.remove(&word);
        Ok(word)
    }

    /// Removes and returns the last word.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] on an empty path.
    pub fn pop_back(&mut self) -> Result<WordId, PathError> {
        let word = self.words.pop_back().ok_or(PathError::Empty)?;
        self.members.remove(&word);
        Ok(word)
    }

    /// Removes the word at the growing end for `direction`.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] on an empty path.
    #[inline]
    pub fn pop(&mut self, direction: Direction) -> Result<WordId, PathError> {
        match direction {
            Direction::Forward => self.pop_back(),
            Direction::Backward => self.pop_front(),
        }
    }

    /// Removes `steps` words from the growing end for `direction`.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] if the path runs out of words first.
    pub fn truncate_end(&mut self, direction: Direction, steps: usize) -> Result<(), PathError> {
        for _ in 0..steps {
            self.pop(direction)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
