use wordcount_core::{next_word_or_separator, tokens, SeparatorSet, Token};

const LINES: &[&str] = &[
    "The cat sat, the Cat ran.",
    "aaa",
    ",,,",
    "x",
    " leading and trailing ",
    "--double--hyphen--",
    "mixed.punct,uation-here",
    "naïve café, déjà-vu",
];

fn separator_sets() -> Vec<SeparatorSet> {
    vec![
        SeparatorSet::default(),
        [' '].into_iter().collect(),
        ['a', 'e', ','].into_iter().collect(),
        std::iter::empty().collect(),
    ]
}

fn char_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    line.char_indices().map(|(idx, _)| idx)
}

#[test]
fn every_token_is_a_nonempty_homogeneous_maximal_prefix() {
    for seps in separator_sets() {
        for line in LINES {
            for position in char_starts(line) {
                let token = next_word_or_separator(line, position, &seps);
                let rest = &line[position..];
                assert!(!token.is_empty());
                assert!(rest.starts_with(token));

                let first = seps.is_separator_run(token);
                assert!(token.chars().all(|c| seps.contains(c) == first));

                if let Some(next) = rest[token.len()..].chars().next() {
                    assert_ne!(seps.contains(next), first, "{line:?} at {position}");
                }
            }
        }
    }
}

#[test]
fn walking_tokens_reconstructs_the_line() {
    for seps in separator_sets() {
        for line in LINES {
            let rebuilt: String = tokens(line, &seps).map(|t| t.as_str()).collect();
            assert_eq!(rebuilt, *line);
        }
    }
}

#[test]
fn tokens_alternate_between_words_and_separators() {
    let seps = SeparatorSet::default();
    for line in LINES {
        let kinds: Vec<bool> = tokens(line, &seps).map(|t: Token<'_>| t.is_word()).collect();
        assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]), "{line:?}");
    }
}
