use thiserror::Error;

/// Errors for malformed color strings and out of range shade steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: FormatIssue },
    #[error("shade step {0} is outside the ramp")]
    ShadeStepOutOfRange(i8),
}

/// What exactly was wrong with a malformed hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),
    #[error("{0:?} is not a hex digit")]
    Digit(char),
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: FormatIssue) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
            reason,
        }
    }
}
