use crate::error::{ChangesError, Result};
use crate::lexer::ChordToken;
use crate::pitch::PitchClass;
use crate::span::Span;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static ROOT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-G][#b]?").expect("root prefix pattern is valid"));

/// Everything after the root spelling, kept verbatim (`""`, `"m7"`, `"7#5#9"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(String);

impl Quality {
    pub fn new(label: impl Into<String>) -> Self {
        Quality(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Quality {
    fn from(label: &str) -> Self {
        Quality::new(label)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chord symbol split into its root and quality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: Quality,
}

impl Chord {
    /// Decompose a bare chord symbol
    pub fn parse(symbol: &str) -> Result<Self> {
        decompose(symbol, None)
    }

    /// Decompose a lexed token, reporting its position on failure
    pub fn from_token(token: &ChordToken) -> Result<Self> {
        decompose(token.as_str(), Some(token.span))
    }
}

fn decompose(symbol: &str, span: Option<Span>) -> Result<Chord> {
    let unrecognized = || ChangesError::unrecognized_root(symbol, span);

    // `Cb` or `E#` match the prefix but have no table entry, which is still a failure
    let spelling = ROOT_PREFIX.find(symbol).ok_or_else(unrecognized)?;
    let root = PitchClass::from_spelling(spelling.as_str()).ok_or_else(unrecognized)?;

    Ok(Chord {
        root,
        quality: Quality::new(&symbol[spelling.end()..]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(symbol: &str) -> (u8, String) {
        let chord = Chord::parse(symbol).unwrap();
        (chord.root.value(), chord.quality.to_string())
    }

    #[test]
    fn test_natural_roots() {
        assert_eq!(parts("Dm7"), (2, "m7".to_string()));
        assert_eq!(parts("G7"), (7, "7".to_string()));
        assert_eq!(parts("C"), (0, "".to_string()));
        assert_eq!(parts("EM7"), (4, "M7".to_string()));
    }

    #[test]
    fn test_accidentals_take_longest_prefix() {
        assert_eq!(parts("Bb13"), (10, "13".to_string()));
        assert_eq!(parts("F#m7b5"), (6, "m7b5".to_string()));
        assert_eq!(parts("Db7#11"), (1, "7#11".to_string()));
        assert_eq!(parts("Ab"), (8, "".to_string()));
    }

    #[test]
    fn test_quality_is_opaque() {
        assert_eq!(parts("G7#5#9"), (7, "7#5#9".to_string()));
        assert_eq!(parts("E7alt"), (4, "7alt".to_string()));
        assert_eq!(parts("Cm69"), (0, "m69".to_string()));
        assert_eq!(parts("Gm+"), (7, "m+".to_string()));
        // Bass notes stay part of the quality
        assert_eq!(parts("Em7b5/Bb"), (4, "m7b5/Bb".to_string()));
    }

    #[test]
    fn test_flat_quality_after_natural_root() {
        // "b" directly after the letter is always read as an accidental
        assert_eq!(parts("Bbb9"), (10, "b9".to_string()));
        assert_eq!(parts("A13b9"), (9, "13b9".to_string()));
    }

    #[test]
    fn test_unrecognized_letter() {
        let err = Chord::parse("Xm7").unwrap_err();
        assert_eq!(err, ChangesError::unrecognized_root("Xm7", None));
    }

    #[test]
    fn test_lowercase_root_rejected() {
        assert!(Chord::parse("dm7").is_err());
        assert!(Chord::parse("m7").is_err());
    }

    #[test]
    fn test_spelling_missing_from_table() {
        assert!(Chord::parse("Cb").is_err());
        assert!(Chord::parse("E#m7").is_err());
    }

    #[test]
    fn test_from_token_carries_span() {
        let token = ChordToken::new("Hm7", Span::new(6, 9), 2);
        let err = Chord::from_token(&token).unwrap_err();
        assert_eq!(err.span(), Some(Span::new(6, 9)));
    }
}
