use crate::span::Span;
use logos::Logos;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")] // Any Unicode whitespace, line breaks included
pub enum Token {
    #[token("|")]
    Bar,

    // Anything up to the next separator is one chord symbol
    #[regex(r"[^\s|]+")]
    Chord,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Bar => write!(f, "|"),
            Token::Chord => write!(f, "chord"),
        }
    }
}

/// One chord symbol as written in the progression text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordToken {
    pub text: String,
    pub span: Span,
    /// Number of bar lines before this chord
    pub bar: usize,
}

impl ChordToken {
    pub fn new(text: impl Into<String>, span: Span, bar: usize) -> Self {
        ChordToken {
            text: text.into(),
            span,
            bar,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Iterates the chord symbols of a progression, tracking bar numbers
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
    bar: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: Token::lexer(source),
            bar: 0,
        }
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = ChordToken;

    fn next(&mut self) -> Option<ChordToken> {
        loop {
            let token = self.inner.next()?;
            let span = Span::from(self.inner.span());

            match token {
                Ok(Token::Bar) => self.bar += 1,
                Ok(Token::Chord) => {
                    return Some(ChordToken::new(self.inner.slice(), span, self.bar));
                }
                // The two patterns cover every character, so this is never hit
                Err(()) => trace!(%span, "unlexable input skipped"),
            }
        }
    }
}

/// Split progression text into chord symbols, in order, repeats included
pub fn tokenize(source: &str) -> Vec<ChordToken> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_lex_bars_and_chords() {
        let mut lexer = Token::lexer("Dm7 G7 | CM7");
        assert_eq!(lexer.next(), Some(Ok(Token::Chord)));
        assert_eq!(lexer.next(), Some(Ok(Token::Chord)));
        assert_eq!(lexer.next(), Some(Ok(Token::Bar)));
        assert_eq!(lexer.next(), Some(Ok(Token::Chord)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_tokenize_satin_doll_opening() {
        assert_eq!(
            texts(" Dm7 G7 | Dm7 G7 | Em7 A7 |\n D7 | Db7 |"),
            vec!["Dm7", "G7", "Dm7", "G7", "Em7", "A7", "D7", "Db7"]
        );
    }

    #[test]
    fn test_bar_line_without_spaces() {
        assert_eq!(texts("Dm7|G7||CM7"), vec!["Dm7", "G7", "CM7"]);
    }

    #[test]
    fn test_consecutive_repeats_kept() {
        assert_eq!(texts("FM7 FM7 FM7 E7#9 | E7#9"), vec!["FM7", "FM7", "FM7", "E7#9", "E7#9"]);
    }

    #[test]
    fn test_separators_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" | |\n|\t ").is_empty());
    }

    #[test]
    fn test_slash_chord_is_one_token() {
        assert_eq!(texts("C6 Em7b5/Bb | A7"), vec!["C6", "Em7b5/Bb", "A7"]);
    }

    #[test]
    fn test_unicode_spaces_separate_chords() {
        assert_eq!(texts("Dm7\u{00A0}G7 |\u{2003}CM7"), vec!["Dm7", "G7", "CM7"]);
        assert_eq!(texts("Bb6\u{3000}Gm7\u{2009}|\u{00A0}Cm7"), vec!["Bb6", "Gm7", "Cm7"]);
    }

    #[test]
    fn test_bar_numbers() {
        let tokens = tokenize("| Bb G7 | Cm7 F7 |\n Bb7 |");
        let bars: Vec<usize> = tokens.iter().map(|t| t.bar).collect();
        assert_eq!(bars, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "Am6 |\r\n Cm6 F7";
        let tokens = tokenize(source);
        for token in &tokens {
            assert_eq!(token.span.slice(source), Some(token.as_str()));
        }
        assert_eq!(tokens[1].span, Span::new(8, 11));
    }

    proptest! {
        #[test]
        fn tokens_are_nonempty_and_separator_free(input in "[A-Gb#m7 |\n\t\u{00A0}\u{2003}\u{3000}]{0,64}") {
            for token in tokenize(&input) {
                prop_assert!(!token.text.is_empty());
                prop_assert!(!token.text.contains('|'));
                prop_assert!(!token.text.chars().any(char::is_whitespace));
            }
        }

        #[test]
        fn tokenize_matches_split(input in "[A-G#bm7 |\r\n\u{00A0}\u{2003}\u{3000}]{0,64}") {
            let expected: Vec<String> = input
                .replace('|', " ")
                .split_whitespace()
                .map(str::to_string)
                .collect();
            prop_assert_eq!(texts(&input), expected);
        }
    }
}
