// Progression walker: chord tokens to (quality, interval) pairs
use crate::chord::{Chord, Quality};
use crate::error::Result;
use crate::interval::Interval;
use crate::lexer::{tokenize, ChordToken};
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with a chord symbol whose root cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Log a warning, record the token and keep walking
    #[default]
    Skip,
    /// Stop at the first malformed chord
    Abort,
}

/// One chord change: its quality and the interval from the previous root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionPair {
    pub quality: Quality,
    pub interval: Interval,
}

/// A token dropped under [`DecodePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedToken {
    pub token: ChordToken,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub pairs: Vec<ProgressionPair>,
    pub skipped: Vec<SkippedToken>,
}

impl Progression {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Walk state for a single progression.
///
/// A chord whose text equals the previous chord's text is a repeat and is
/// dropped. Comparison is on the raw text, so `C#7` followed by `Db7` is two
/// changes. Skipped malformed chords leave the state untouched.
pub struct Walker {
    policy: DecodePolicy,
    previous_root: Option<PitchClass>,
    previous_token: Option<String>,
    progression: Progression,
}

impl Walker {
    pub fn new(policy: DecodePolicy) -> Self {
        Walker {
            policy,
            previous_root: None,
            previous_token: None,
            progression: Progression::default(),
        }
    }

    /// Feed the next token; returns the pair it produced, if any
    pub fn push(&mut self, token: &ChordToken) -> Result<Option<&ProgressionPair>> {
        if self.previous_token.as_deref() == Some(token.as_str()) {
            debug!(chord = token.as_str(), bar = token.bar, "repeat suppressed");
            return Ok(None);
        }

        let chord = match Chord::from_token(token) {
            Ok(chord) => chord,
            Err(err) => match self.policy {
                DecodePolicy::Abort => return Err(err),
                DecodePolicy::Skip => {
                    warn!(bar = token.bar, "skipping chord: {}", err);
                    self.progression.skipped.push(SkippedToken {
                        token: token.clone(),
                        reason: err.to_string(),
                    });
                    return Ok(None);
                }
            },
        };

        let interval = match self.previous_root {
            Some(previous) => previous.interval_to(chord.root),
            None => Interval::UNISON,
        };
        debug!(chord = token.as_str(), %interval, "change");

        self.previous_token = Some(token.text.clone());
        self.previous_root = Some(chord.root);
        self.progression.pairs.push(ProgressionPair {
            quality: chord.quality,
            interval,
        });
        Ok(self.progression.pairs.last())
    }

    pub fn finish(self) -> Progression {
        self.progression
    }
}

/// Walk a token sequence from a fresh state
pub fn walk(tokens: &[ChordToken], policy: DecodePolicy) -> Result<Progression> {
    let mut walker = Walker::new(policy);
    for token in tokens {
        walker.push(token)?;
    }
    Ok(walker.finish())
}

/// Tokenize and walk progression text
pub fn progression(source: &str, policy: DecodePolicy) -> Result<Progression> {
    walk(&tokenize(source), policy)
}
