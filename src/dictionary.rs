//! Two-letter keys and the front/back key indices over a fixed-length word list.
//!
//! A word `a` may be followed by a word `b` iff `back_key(a) == front_key(b)`.
//! The dictionary answers both directions of that question in O(1):
//! - the **front index** maps a key to every word whose 2nd and 3rd letters equal it
//!   (the possible successors of any word whose back key is that key);
//! - the **back index** maps a key to every word whose 3rd-last and 2nd-last letters
//!   equal it (the possible predecessors).

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::ops::Range;

// ============================================================================
// Keys
// ============================================================================

/// Shortest word for which both keys are defined.
pub const MIN_WORD_LEN: usize = 3;

/// A two-character key extracted from a fixed position inside a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key([char; 2]);

impl Key {
    /// Creates a key from its two characters.
    pub const fn new(first: char, second: char) -> Self {
        Self([first, second])
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Character positions of the front key for words of `word_len` characters.
pub fn front_key_span(word_len: usize) -> Option<Range<usize>> {
    (word_len >= MIN_WORD_LEN).then_some(1..3)
}

/// Character positions of the back key for words of `word_len` characters.
pub fn back_key_span(word_len: usize) -> Option<Range<usize>> {
    (word_len >= MIN_WORD_LEN).then(|| word_len - 3..word_len - 1)
}

/// Returns `true` when both keys are read from the same positions.
///
/// Every word then chains onto every other word in its own bucket, so the largest
/// bucket is itself an optimal chain.
pub fn keys_coincide(word_len: usize) -> bool {
    match (front_key_span(word_len), back_key_span(word_len)) {
        (Some(front), Some(back)) => front == back,
        _ => false,
    }
}

/// The word's 2nd and 3rd characters, or `None` for words shorter than 3 characters.
#[inline]
pub fn front_key(word: &str) -> Option<Key> {
    let mut chars = word.chars().skip(1);
    Some(Key([chars.next()?, chars.next()?]))
}

/// The word's 3rd-last and 2nd-last characters, or `None` for words shorter than 3
/// characters.
#[inline]
pub fn back_key(word: &str) -> Option<Key> {
    let mut chars = word.chars().rev().skip(1);
    let second = chars.next()?;
    let first = chars.next()?;
    Some(Key([first, second]))
}

// ============================================================================
// Word identifiers
// ============================================================================

/// Index of a word inside a [`KeyedDictionary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    /// Position of the word in dictionary insertion order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

// ============================================================================
// Key index
// ============================================================================

/// Insertion-ordered multimap from key to word ids.
///
/// Buckets are kept in a `Vec` so iteration order (and therefore every tie-break
/// and every random bucket draw) depends only on the order of the source list.
#[derive(Clone, Debug, Default)]
struct KeyIndex {
    buckets: Vec<(Key, Vec<WordId>)>,
    slots: HashMap<Key, usize>,
}

impl KeyIndex {
    fn insert(&mut self, key: Key, id: WordId) {
        match self.slots.entry(key) {
            Entry::Occupied(slot) => self.buckets[*slot.get()].1.push(id),
            Entry::Vacant(slot) => {
                slot.insert(self.buckets.len());
                self.buckets.push((key, vec![id]));
            }
        }
    }

    #[inline]
    fn get(&self, key: Key) -> &[WordId] {
        self.slots
            .get(&key)
            .map_or(&[][..], |&slot| self.buckets[slot].1.as_slice())
    }

    fn iter(&self) -> impl Iterator<Item = (Key, &[WordId])> {
        self.buckets.iter().map(|(key, ids)| (*key, ids.as_slice()))
    }

    /// First bucket of maximal size.
    fn largest(&self) -> Option<(Key, &[WordId])> {
        let mut best: Option<(Key, &[WordId])> = None;
        for (key, ids) in self.iter() {
            if best.is_none_or(|(_, b)| ids.len() > b.len()) {
                best = Some((key, ids));
            }
        }
        best
    }
}

// ============================================================================
// KeyedDictionary
// ============================================================================

/// Read-only front/back key indices over the words of one length.
#[derive(Clone, Debug)]
pub struct KeyedDictionary {
    word_len: usize,
    words: Vec<String>,
    /// `(front_key, back_key)` per word id.
    keys: Vec<(Key, Key)>,
    lookup: HashMap<String, WordId>,
    front: KeyIndex,
    back: KeyIndex,
}

impl KeyedDictionary {
    /// Indexes every word of exactly `word_len` characters.
    ///
    /// Words of other lengths are skipped, as are repeats of a word already indexed.
    /// Bucket contents follow source order.
    pub fn build<I, S>(word_len: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self {
            word_len,
            words: Vec::new(),
            keys: Vec::new(),
            lookup: HashMap::new(),
            front: KeyIndex::default(),
            back: KeyIndex::default(),
        };

        for word in words {
            let word = word.as_ref();
            if word.chars().count() != word_len || dict.lookup.contains_key(word) {
                continue;
            }
            let (Some(front), Some(back)) = (front_key(word), back_key(word)) else {
                continue;
            };

            let id = WordId(dict.words.len());
            dict.words.push(word.to_owned());
            dict.keys.push((front, back));
            dict.lookup.insert(word.to_owned(), id);
            dict.front.insert(front, id);
            dict.back.insert(back, id);
        }
        dict
    }

    /// Length (in characters) of every indexed word.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word was indexed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The text of a word.
    #[inline]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.0]
    }

    /// Looks up the id of a word, if indexed.
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.lookup.get(word).copied()
    }

    /// All word ids in insertion order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = WordId> + ExactSizeIterator + '_ {
        (0..self.words.len()).map(WordId)
    }

    /// Front key of an indexed word.
    #[inline]
    pub fn front_key_of(&self, id: WordId) -> Key {
        self.keys[id.0].0
    }

    /// Back key of an indexed word.
    #[inline]
    pub fn back_key_of(&self, id: WordId) -> Key {
        self.keys[id.0].1
    }

    /// Words whose front key is `key`; empty for an absent key.
    #[inline]
    pub fn bucket_by_front(&self, key: Key) -> &[WordId] {
        self.front.get(key)
    }

    /// Words whose back key is `key`; empty for an absent key.
    #[inline]
    pub fn bucket_by_back(&self, key: Key) -> &[WordId] {
        self.back.get(key)
    }

    /// Words that may directly follow `id`.
    #[inline]
    pub fn successors(&self, id: WordId) -> &[WordId] {
        self.bucket_by_front(self.back_key_of(id))
    }

    /// Words that may directly precede `id`.
    #[inline]
    pub fn predecessors(&self, id: WordId) -> &[WordId] {
        self.bucket_by_back(self.front_key_of(id))
    }

    /// Number of distinct front keys.
    pub fn front_bucket_count(&self) -> usize {
        self.front.buckets.len()
    }

    /// The `index`-th front bucket in first-seen key order.
    #[inline]
    pub fn front_bucket_at(&self, index: usize) -> Option<(Key, &[WordId])> {
        self.front
            .buckets
            .get(index)
            .map(|(key, ids)| (*key, ids.as_slice()))
    }

    /// The first front bucket of maximal size.
    pub fn largest_front_bucket(&self) -> Option<(Key, &[WordId])> {
        self.front.largest()
    }

    /// Whether front and back keys are read from the same positions for this
    /// dictionary's word length (see [`keys_coincide`]).
    pub fn keys_coincide(&self) -> bool {
        keys_coincide(self.word_len)
    }

    /// Spells out a sequence of word ids.
    pub fn spell<I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = WordId>,
    {
        ids.into_iter().map(|id| self.word(id).to_owned()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
