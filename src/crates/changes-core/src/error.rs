use crate::span::Span;

pub type Result<T> = std::result::Result<T, ChangesError>;

/// Errors raised while turning chord text into a path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangesError {
    /// The chord symbol does not start with a root spelling from the enharmonic table
    #[error("Unrecognized root in chord '{token}'{}", location(.span))]
    UnrecognizedRoot { token: String, span: Option<Span> },

    #[error("Pitch class {0} is outside 0..=11")]
    InvalidPitchClass(u8),

    /// Raw interval values only; an `Interval` is always in range once built
    #[error("Interval {0} is outside 0..=11")]
    IntervalOutOfRange(u8),
}

impl ChangesError {
    pub fn unrecognized_root(token: impl Into<String>, span: Option<Span>) -> Self {
        ChangesError::UnrecognizedRoot {
            token: token.into(),
            span,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ChangesError::UnrecognizedRoot { span, .. } => *span,
            ChangesError::InvalidPitchClass(_) | ChangesError::IntervalOutOfRange(_) => None,
        }
    }
}

fn location(span: &Option<Span>) -> String {
    span.map(|span| format!(" at {}", span)).unwrap_or_default()
}
