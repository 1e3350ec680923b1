//! Wordcount core: pure tokenizing, counting and ordering. No I/O lives here.
mod counter;
mod order;
mod separators;
mod tokenizer;

pub use counter::{count_words, WordCounts};
pub use order::{compare_ignore_case, ordered_words};
pub use separators::{SeparatorSet, DEFAULT_SEPARATORS};
pub use tokenizer::{next_word_or_separator, tokens, Token, Tokens};
