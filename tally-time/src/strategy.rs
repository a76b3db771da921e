use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::convert::parse_long_duration;
use crate::duration::Duration;
use crate::error::ParseError;
use crate::parse::parse_duration_with_units;
use crate::units::LONG_UNITS;

/// The two ways of parsing a duration with day and week units.
///
/// They agree on well-formed input and differ on some malformed input,
/// most visibly in which string an error names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Scan terms directly against the long unit table.
    #[default]
    Numeric,
    /// Rewrite days and weeks to hours, then use the standard grammar.
    TextSubstitution,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Numeric, Self::TextSubstitution];

    /// Parse with `h`, `d`, `w` and the standard units. Empty input is zero.
    pub fn parse_long(self, input: &str) -> Result<Duration, ParseError> {
        match self {
            Self::Numeric => parse_duration_with_units(input, &LONG_UNITS),
            Self::TextSubstitution => parse_long_duration(input),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::TextSubstitution => "text",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected `numeric` or `text`)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "numeric" | "scan" => Ok(Self::Numeric),
            "text" | "rewrite" | "text-substitution" => Ok(Self::TextSubstitution),
            other => Err(UnknownStrategy(other.to_owned())),
        }
    }
}
