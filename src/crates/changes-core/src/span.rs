use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Where a chord symbol sits in the progression text, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// The chord text this span covers, `None` when `source` is not the text it came from
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

// Shown in diagnostics as "at 4..6"
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_recovers_chord() {
        let source = "Dm7 G7 | CM7";
        assert_eq!(Span::new(4, 6).slice(source), Some("G7"));
        assert_eq!(Span::new(9, 12).slice(source), Some("CM7"));
    }

    #[test]
    fn test_slice_from_other_text() {
        assert_eq!(Span::new(9, 40).slice("Dm7 G7 | CM7"), None);
        // Not on a char boundary
        assert_eq!(Span::new(1, 3).slice("\u{00A0}C7"), None);
    }

    #[test]
    fn test_display_as_byte_range() {
        assert_eq!(Span::from(3..8).to_string(), "3..8");
    }
}
