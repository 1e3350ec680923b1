use crate::SeparatorSet;

/// Returns the maximal run of `text[position..]` that is homogeneous with
/// respect to `separators`: either all word chars or all separator chars.
///
/// `position` is a byte offset. The result is never empty.
///
/// # Panics
///
/// Panics if `position >= text.len()` or `position` is not on a char boundary.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> &'a str {
    assert!(
        position < text.len(),
        "position {position} out of range for text of length {}",
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {position} is not on a char boundary"
    );

    let rest = &text[position..];
    // Non-empty by the range check above.
    let first_is_separator = separators.is_separator_run(rest);
    let end = rest
        .char_indices()
        .skip(1)
        .find(|&(_, c)| separators.contains(c) != first_is_separator)
        .map_or(rest.len(), |(idx, _)| idx);
    &rest[..end]
}

/// One run produced while walking a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Separator(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Walks `text` left to right, one `next_word_or_separator` call per token.
pub fn tokens<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let run = next_word_or_separator(self.text, self.position, self.separators);
        self.position += run.len();
        if self.separators.is_separator_run(run) {
            Some(Token::Separator(run))
        } else {
            Some(Token::Word(run))
        }
    }
}
