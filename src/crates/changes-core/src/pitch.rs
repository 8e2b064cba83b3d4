use crate::error::{ChangesError, Result};
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve chromatic roots, C = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

/// Sharp spellings in chromatic order, used for display
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every root spelling a chord symbol may start with
pub const ROOT_SPELLINGS: [(&str, PitchClass); 17] = [
    ("C", PitchClass(0)),
    ("C#", PitchClass(1)),
    ("Db", PitchClass(1)),
    ("D", PitchClass(2)),
    ("D#", PitchClass(3)),
    ("Eb", PitchClass(3)),
    ("E", PitchClass(4)),
    ("F", PitchClass(5)),
    ("F#", PitchClass(6)),
    ("Gb", PitchClass(6)),
    ("G", PitchClass(7)),
    ("G#", PitchClass(8)),
    ("Ab", PitchClass(8)),
    ("A", PitchClass(9)),
    ("A#", PitchClass(10)),
    ("Bb", PitchClass(10)),
    ("B", PitchClass(11)),
];

impl PitchClass {
    pub fn new(value: u8) -> Result<Self> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(ChangesError::InvalidPitchClass(value))
        }
    }

    /// Look up a root spelling such as `"Bb"` or `"F#"`
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        ROOT_SPELLINGS
            .iter()
            .find(|(name, _)| *name == spelling)
            .map(|&(_, pitch)| pitch)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Upward distance from `self` to `next`
    pub fn interval_to(self, next: PitchClass) -> Interval {
        Interval::between(self, next)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = ChangesError;

    fn try_from(value: u8) -> Result<Self> {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pitch: PitchClass) -> u8 {
        pitch.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enharmonic_spellings() {
        let pairs = [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")];
        for (sharp, flat) in pairs {
            assert_eq!(PitchClass::from_spelling(sharp), PitchClass::from_spelling(flat));
        }
    }

    #[test]
    fn test_spelling_values() {
        let value = |s: &str| PitchClass::from_spelling(s).map(PitchClass::value);
        assert_eq!(value("C"), Some(0));
        assert_eq!(value("Db"), Some(1));
        assert_eq!(value("E"), Some(4));
        assert_eq!(value("F"), Some(5));
        assert_eq!(value("Gb"), Some(6));
        assert_eq!(value("A"), Some(9));
        assert_eq!(value("Bb"), Some(10));
        assert_eq!(value("B"), Some(11));
    }

    #[test]
    fn test_spellings_outside_table() {
        for spelling in ["Cb", "Fb", "E#", "B#", "H", "c", ""] {
            assert_eq!(PitchClass::from_spelling(spelling), None, "{spelling}");
        }
    }

    #[test]
    fn test_every_class_has_a_spelling() {
        for value in 0..12 {
            let pitch = PitchClass::new(value).unwrap();
            assert_eq!(PitchClass::from_spelling(pitch.name()), Some(pitch));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(PitchClass::new(12), Err(ChangesError::InvalidPitchClass(12)));
        assert!(PitchClass::try_from(11).is_ok());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<PitchClass>("7").unwrap().value(), 7);
        assert!(serde_json::from_str::<PitchClass>("13").is_err());
    }
}
