//! Exhaustive depth-first enumeration of chains.
//!
//! Uses an explicit stack instead of recursion: entering a word pushes a
//! [`Frame::Leave`] marker beneath each child, so popping the marker undoes the
//! child once its whole subtree has been explored. Exponential in general; only
//! meant for tiny dictionaries or as ground truth in tests.

use tracing::debug;

use crate::dictionary::{KeyedDictionary, WordId};
use crate::error::Result;
use crate::path::PathState;
use crate::search::{Budget, Outcome};

/// How many expansions pass between budget checks.
const BUDGET_CHECK_EVERY: u64 = 4096;

#[derive(Clone, Copy, Debug)]
enum Frame {
    Enter(WordId),
    Leave,
}

/// Finds a longest chain by trying every start word and every extension.
///
/// Stops early once a chain uses every word, or when the budget runs out (in which
/// case the best chain seen so far is returned).
///
/// # Errors
/// Only on a bookkeeping bug (see [`crate::error::PathError`]).
pub(crate) fn exhaustive_search(dict: &KeyedDictionary, budget: &Budget<'_>) -> Result<Outcome> {
    let mut stack: Vec<Frame> = Vec::with_capacity(dict.len() * 2);
    for id in dict.ids().rev() {
        stack.push(Frame::Leave);
        stack.push(Frame::Enter(id));
    }

    let mut current = PathState::new();
    let mut best = PathState::new();
    let mut expansions = 0u64;
    let mut stopped_early = false;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Leave => {
                current.pop_back()?;
            }
            Frame::Enter(word) => {
                current.push_back(word)?;
                expansions += 1;

                if current.len() > best.len() {
                    best = current.clone();
                    debug!(len = best.len(), expansions, "dfs: new longest chain");
                    if best.len() == dict.len() {
                        break;
                    }
                }

                if expansions.is_multiple_of(BUDGET_CHECK_EVERY) && budget.exhausted() {
                    stopped_early = true;
                    break;
                }

                for &next in dict.successors(word).iter().rev() {
                    if !current.contains(next) {
                        stack.push(Frame::Leave);
                        stack.push(Frame::Enter(next));
                    }
                }
            }
        }
    }

    Ok(Outcome {
        best,
        attempts: expansions,
        stopped_early,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid_chain;
    use std::sync::atomic::AtomicBool;

    fn w(f: &str, b: &str) -> String {
        format!("x{f}{b}y")
    }

    fn run(dict: &KeyedDictionary) -> Outcome {
        let stop = AtomicBool::new(false);
        exhaustive_search(dict, &Budget::new(&stop, None)).unwrap()
    }

    #[test]
    fn finds_the_known_longest_chain() {
        // Key graph: aa->bb->cc->dd plus a short detour bb->zz and a dead end cc->qq.
        // The longest chain is aa-bb, bb-cc, cc-dd, dd-ee (4 words).
        let dict = KeyedDictionary::build(
            6,
            [w("bb", "zz"), w("cc", "qq"), w("aa", "bb"), w("bb", "cc"), w("cc", "dd"), w("dd", "ee")],
        );
        let outcome = run(&dict);
        let chain = dict.spell(outcome.best.iter());
        assert_eq!(chain, [w("aa", "bb"), w("bb", "cc"), w("cc", "dd"), w("dd", "ee")]);
        assert!(!outcome.stopped_early);
    }

    #[test]
    fn backtracking_releases_words_for_other_branches() {
        // A cycle of keys where the best chain must revisit key "bb" via a second word:
        // aa-bb, bb-cc, cc-bb, bb-dd uses both words leaving "bb".
        let dict = KeyedDictionary::build(
            6,
            [w("bb", "dd"), w("aa", "bb"), w("bb", "cc"), w("cc", "bb")],
        );
        let outcome = run(&dict);
        assert_eq!(outcome.best.len(), 4);
        assert!(is_valid_chain(&dict.spell(outcome.best.iter())));
    }

    #[test]
    fn single_word_dictionary_yields_that_word() {
        let dict = KeyedDictionary::build(6, [w("aa", "bb")]);
        assert_eq!(run(&dict).best.len(), 1);
    }

    #[test]
    fn empty_dictionary_yields_empty_chain() {
        let dict = KeyedDictionary::build(6, Vec::<String>::new());
        assert!(run(&dict).best.is_empty());
    }

    #[test]
    fn raised_stop_flag_ends_the_search() {
        // Complete key graph on 6 keys: 36 words. Either the whole graph is chained
        // or the flag is seen at the first budget check.
        let keys = ["aa", "bb", "cc", "dd", "ee", "ff"];
        let words: Vec<String> = keys
            .iter()
            .flat_map(|f| keys.iter().map(move |b| w(f, b)))
            .collect();
        let dict = KeyedDictionary::build(6, &words);
        let stop = AtomicBool::new(true);
        let outcome = exhaustive_search(&dict, &Budget::new(&stop, None)).unwrap();
        assert!(!outcome.best.is_empty());
        assert!(is_valid_chain(&dict.spell(outcome.best.iter())));
    }
}
