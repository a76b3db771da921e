/// Text-substitution strategy: rewrite coarse units into hours.
pub mod convert;
/// Signed nanosecond duration value and its standard rendering.
pub mod duration;
/// Parse error classification.
pub mod error;
/// Compact human-readable rendering.
pub mod format;
/// Numeric scanning strategy and the standard grammar.
pub mod parse;
/// Runtime selection between the two parsing strategies.
pub mod strategy;
/// Unit tables for both strategies.
pub mod units;

pub use convert::{convert_long_duration, parse_long_duration};
pub use duration::Duration;
pub use error::{ErrorKind, ParseError};
pub use parse::{parse_duration, parse_duration_with_units, parse_duration_with_units_strict};
pub use strategy::Strategy;
pub use units::{HourMultipliers, UnitTable};
