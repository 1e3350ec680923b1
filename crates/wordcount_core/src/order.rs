use std::cmp::Ordering;

use crate::WordCounts;

/// Compares two strings char by char after lowercasing.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Distinct words of `counts`, sorted case-insensitively. Words that differ
/// only in case fall back to plain `str` order, so `"Cat"` precedes `"cat"`.
pub fn ordered_words(counts: &WordCounts) -> Vec<&str> {
    let mut words: Vec<&str> = counts.words().collect();
    words.sort_unstable_by(|a, b| compare_ignore_case(a, b).then_with(|| a.cmp(b)));
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_words, SeparatorSet};

    #[test]
    fn ignores_case_when_ordering() {
        assert_eq!(compare_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ignore_case("The", "the"), Ordering::Equal);
        assert_eq!(compare_ignore_case("ab", "AbC"), Ordering::Less);
    }

    #[test]
    fn case_variants_are_adjacent_and_deterministic() {
        let counts = count_words(["The cat sat, the Cat ran."], &SeparatorSet::default());
        assert_eq!(
            ordered_words(&counts),
            vec!["Cat", "cat", "ran", "sat", "The", "the"]
        );
    }

    #[test]
    fn empty_table_orders_to_nothing() {
        assert!(ordered_words(&WordCounts::new()).is_empty());
    }
}
