use std::collections::BTreeSet;

/// Separators used when nothing else is configured.
pub const DEFAULT_SEPARATORS: [char; 4] = [' ', ',', '.', '-'];

/// Immutable set of separator characters, fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// True when `run` starts with a separator. Tokens are homogeneous, so the
    /// first char classifies the whole run.
    pub fn is_separator_run(&self, run: &str) -> bool {
        run.chars().next().is_some_and(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        DEFAULT_SEPARATORS.into_iter().collect()
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
