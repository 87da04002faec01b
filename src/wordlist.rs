//! Dictionary source: a whitespace-delimited word file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::dictionary::KeyedDictionary;
use crate::error::{ChainError, Result};

/// Words loaded from a dictionary source, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Splits `text` on whitespace.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Reads and parses a dictionary file.
    ///
    /// # Errors
    /// Returns [`ChainError::Io`] if the file cannot be read and
    /// [`ChainError::EmptyDictionary`] if it holds no words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text);
        if list.is_empty() {
            return Err(ChainError::EmptyDictionary);
        }
        Ok(list)
    }

    /// Total number of words, including repeats.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the source held no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words of exactly `word_len` characters, in source order.
    pub fn of_length(&self, word_len: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |w| w.chars().count() == word_len)
    }

    /// Number of words per length.
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }

    /// Indexes the words of `word_len` characters.
    ///
    /// # Errors
    /// Returns [`ChainError::EmptyDictionary`] if the list is empty,
    /// [`ChainError::InvalidWordLength`] for lengths too short to carry keys, and
    /// [`ChainError::NoWordsOfLength`] if nothing matches.
    pub fn keyed(&self, word_len: usize) -> Result<KeyedDictionary> {
        if self.is_empty() {
            return Err(ChainError::EmptyDictionary);
        }
        let dict = KeyedDictionary::build(word_len, self.of_length(word_len));
        check_dictionary(&dict)?;
        Ok(dict)
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rejects dictionaries no strategy can run on.
///
/// # Errors
/// See [`WordList::keyed`].
pub fn check_dictionary(dict: &KeyedDictionary) -> Result<()> {
    if dict.word_len() < crate::dictionary::MIN_WORD_LEN {
        return Err(ChainError::InvalidWordLength {
            word_len: dict.word_len(),
        });
    }
    if dict.is_empty() {
        return Err(ChainError::NoWordsOfLength {
            word_len: dict.word_len(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_splits_on_any_whitespace() {
        let list = WordList::parse("alpha beta\n\tgamma\r\n\n delta ");
        assert_eq!(list.words(), ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn of_length_filters_and_keeps_order() {
        let list = WordList::parse("tree bush oak pine elm");
        assert_eq!(list.of_length(4).collect::<Vec<_>>(), ["tree", "bush", "pine"]);
        assert_eq!(list.length_histogram().get(&3), Some(&2));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abcd\nbcde cdef").unwrap();
        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ChainError::Io { .. }));
    }

    #[test]
    fn blank_file_is_an_empty_dictionary() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = WordList::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ChainError::EmptyDictionary));
    }

    #[test]
    fn keyed_reports_missing_lengths() {
        let list: WordList = ["abcd", "bcde"].into_iter().collect();
        assert!(matches!(
            list.keyed(7),
            Err(ChainError::NoWordsOfLength { word_len: 7 })
        ));
        assert!(matches!(
            list.keyed(2),
            Err(ChainError::InvalidWordLength { word_len: 2 })
        ));
        assert!(matches!(
            WordList::default().keyed(4),
            Err(ChainError::EmptyDictionary)
        ));
        assert_eq!(list.keyed(4).unwrap().len(), 2);
    }
}
