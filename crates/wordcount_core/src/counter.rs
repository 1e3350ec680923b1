use std::collections::HashMap;

use crate::tokenizer::{tokens, Token};
use crate::SeparatorSet;

/// Word-count table: each distinct word, case preserved, mapped to its
/// occurrence count. Counts only grow while lines are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `line` and counts every word run; separator runs are dropped.
    pub fn record_line(&mut self, line: &str, separators: &SeparatorSet) {
        for token in tokens(line, separators) {
            if let Token::Word(word) = token {
                self.record(word);
            }
        }
    }

    fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of word runs seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Distinct words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Builds a fresh table from `lines`, consumed in order.
pub fn count_words<I, S>(lines: I, separators: &SeparatorSet) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = WordCounts::new();
    for line in lines {
        counts.record_line(line.as_ref(), separators);
    }
    counts
}
