//! Jazz chord progressions as interval paths
//!
//! Chord symbols are read from bar-separated text, reduced to a root pitch
//! class and an opaque quality label, and walked: every change of chord
//! records the interval from the previous root, and every interval moves the
//! pen by a fixed vector. The resulting points are what a renderer colors by
//! quality.
//!
//! # Examples
//!
//! ```
//! use changes_core::{accumulate, progression, DecodePolicy, ORIGIN};
//!
//! let walked = progression("Dm7 G7 | CM7", DecodePolicy::Abort).unwrap();
//! assert_eq!(walked.pairs[1].interval.semitones(), 5);
//!
//! let path = accumulate(&walked.pairs, ORIGIN);
//! assert_eq!((path.points[0].x, path.points[0].y), (22, 80));
//! ```
//!
//! # Main Functions
//!
//! - [`tokenize`]: Split progression text into chord tokens
//! - [`Chord::parse`]: Decompose one chord symbol
//! - [`progression`] / [`walk`]: Produce (quality, interval) pairs
//! - [`accumulate`]: Turn pairs into absolute points
//! - [`plot`]: All of the above from the default origin

pub mod chord;
pub mod error;
pub mod interval;
pub mod lexer;
pub mod path;
pub mod pitch;
pub mod span;
pub mod standards;
pub mod walker;


pub use chord::{Chord, Quality};
pub use error::{ChangesError, Result};
pub use interval::Interval;
pub use lexer::{tokenize, ChordToken, Lexer};
pub use path::{accumulate, Bounds, DirectionVector, Path, PathPoint, Point, DIRECTIONS, ORIGIN};
pub use pitch::PitchClass;
pub use span::Span;
pub use standards::{Standard, STANDARDS};
pub use walker::{progression, walk, DecodePolicy, Progression, ProgressionPair, SkippedToken, Walker};

/// Walk `source` and lay the result out from [`ORIGIN`]
pub fn plot(source: &str, policy: DecodePolicy) -> Result<Path> {
    let walked = progression(source, policy)?;
    Ok(accumulate(&walked.pairs, ORIGIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_satin_doll_opening() {
        let path = plot("Dm7 G7 | Dm7 G7", DecodePolicy::Abort).unwrap();
        let xy: Vec<(i32, i32)> = path.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(22, 80), (29, 80), (36, 87), (43, 87)]);
    }

    #[test]
    fn test_plot_propagates_abort() {
        assert!(plot("Dm7 Xm7", DecodePolicy::Abort).is_err());
        assert_eq!(plot("Dm7 Xm7", DecodePolicy::Skip).unwrap().len(), 1);
    }
}
