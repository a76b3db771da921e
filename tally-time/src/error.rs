use thiserror::Error;

/// A rejected duration string.
///
/// Every variant carries the literal input it was raised for. For the
/// text-substitution strategy that can be the rewritten string rather than
/// what the caller passed in, since grammar errors propagate unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid duration \"{input}\"")]
    InvalidDuration { input: String },
    #[error("missing unit in duration \"{input}\"")]
    MissingUnit { input: String },
    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit { unit: String, input: String },
}

/// Error class without the offending text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDuration,
    MissingUnit,
    UnknownUnit,
}

impl ParseError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidDuration {
            input: input.to_owned(),
        }
    }

    pub(crate) fn missing_unit(input: &str) -> Self {
        Self::MissingUnit {
            input: input.to_owned(),
        }
    }

    pub(crate) fn unknown_unit(unit: &str, input: &str) -> Self {
        Self::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDuration { .. } => ErrorKind::InvalidDuration,
            Self::MissingUnit { .. } => ErrorKind::MissingUnit,
            Self::UnknownUnit { .. } => ErrorKind::UnknownUnit,
        }
    }

    /// The duration string named in the message.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidDuration { input }
            | Self::MissingUnit { input }
            | Self::UnknownUnit { input, .. } => input,
        }
    }
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDuration => "invalid_duration",
            Self::MissingUnit => "missing_unit",
            Self::UnknownUnit => "unknown_unit",
        }
    }
}
