use crate::error::{ChangesError, Result};
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upward distance between two roots in semitones, always 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Interval(u8);

impl Interval {
    pub const UNISON: Interval = Interval(0);

    pub fn new(semitones: u8) -> Result<Self> {
        if semitones < 12 {
            Ok(Interval(semitones))
        } else {
            Err(ChangesError::IntervalOutOfRange(semitones))
        }
    }

    /// `(to - from) mod 12`, wrapped into 0..=11
    pub fn between(from: PitchClass, to: PitchClass) -> Self {
        let diff = i16::from(to.value()) - i16::from(from.value());
        Interval(diff.rem_euclid(12) as u8)
    }

    pub fn semitones(self) -> u8 {
        self.0
    }

    /// The interval walked in the opposite direction
    pub fn inverse(self) -> Self {
        Interval((12 - self.0) % 12)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Interval {
    type Error = ChangesError;

    fn try_from(semitones: u8) -> Result<Self> {
        Interval::new(semitones)
    }
}

impl From<Interval> for u8 {
    fn from(interval: Interval) -> u8 {
        interval.0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pitch(spelling: &str) -> PitchClass {
        PitchClass::from_spelling(spelling).unwrap()
    }

    #[test]
    fn test_between_upward() {
        assert_eq!(Interval::between(pitch("D"), pitch("G")).semitones(), 5);
        assert_eq!(Interval::between(pitch("C"), pitch("B")).semitones(), 11);
    }

    #[test]
    fn test_between_wraps_negative() {
        assert_eq!(Interval::between(pitch("G"), pitch("D")).semitones(), 7);
        assert_eq!(Interval::between(pitch("B"), pitch("C")).semitones(), 1);
    }

    #[test]
    fn test_same_root_is_unison() {
        assert_eq!(Interval::between(pitch("Eb"), pitch("D#")), Interval::UNISON);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Interval::new(12), Err(ChangesError::IntervalOutOfRange(12)));
        assert!(serde_json::from_str::<Interval>("12").is_err());
        assert_eq!(serde_json::from_str::<Interval>("11").unwrap().semitones(), 11);
    }

    proptest! {
        #[test]
        fn interval_always_in_range(a in 0u8..12, b in 0u8..12) {
            let interval = Interval::between(PitchClass::new(a).unwrap(), PitchClass::new(b).unwrap());
            prop_assert!(interval.semitones() < 12);
        }

        #[test]
        fn reversal_is_complement(a in 0u8..12, b in 0u8..12) {
            let a = PitchClass::new(a).unwrap();
            let b = PitchClass::new(b).unwrap();
            let forward = a.interval_to(b);
            let backward = b.interval_to(a);
            if a == b {
                prop_assert_eq!(forward, Interval::UNISON);
            } else {
                prop_assert_eq!(forward.semitones(), 12 - backward.semitones());
            }
            prop_assert_eq!(forward.inverse(), backward);
        }
    }
}
