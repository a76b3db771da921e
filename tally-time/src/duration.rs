use std::fmt;

use thiserror::Error;

/// Signed elapsed time counted in nanoseconds.
///
/// Covers the full `i64` range, roughly ±292 years.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);
    pub const NANOSECOND: Self = Self(1);
    pub const MICROSECOND: Self = Self(1_000);
    pub const MILLISECOND: Self = Self(1_000_000);
    pub const SECOND: Self = Self(1_000_000_000);
    pub const MINUTE: Self = Self(60 * Self::SECOND.0);
    pub const HOUR: Self = Self(60 * Self::MINUTE.0);
    pub const DAY: Self = Self(24 * Self::HOUR.0);
    pub const WEEK: Self = Self(168 * Self::HOUR.0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Magnitude as a std duration. Total for every value, `MIN` included.
    pub const fn unsigned_abs(self) -> std::time::Duration {
        std::time::Duration::from_nanos(self.0.unsigned_abs())
    }

    /// Nanoseconds per unit, for building unit tables.
    pub(crate) const fn scale(self) -> u64 {
        self.0.unsigned_abs()
    }
}

/// Returned when converting a negative [`Duration`] into a std duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("duration {0} is negative")]
pub struct NegativeDuration(pub Duration);

impl TryFrom<Duration> for std::time::Duration {
    type Error = NegativeDuration;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(NegativeDuration(value));
        }

        Ok(value.unsigned_abs())
    }
}

/// Renders in the standard grammar, e.g. `72h3m0.5s`, `1.5ms`, `0s`.
///
/// Below one second the largest of ns/µs/ms that keeps a non-zero integer
/// part is used. Otherwise hours, minutes and seconds are written with any
/// leading zero components omitted. Trailing fractional zeros are dropped.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };

        if nanos == 0 {
            return f.write_str("0s");
        }

        if nanos < Self::SECOND.scale() {
            let (unit, precision) = if nanos < Self::MICROSECOND.scale() {
                ("ns", 0)
            } else if nanos < Self::MILLISECOND.scale() {
                ("µs", 3)
            } else {
                ("ms", 6)
            };
            let (whole, fraction) = split_fraction(nanos, precision);
            return write!(f, "{sign}{whole}{fraction}{unit}");
        }

        let (seconds, fraction) = split_fraction(nanos, 9);
        let minutes = seconds / 60;
        let hours = minutes / 60;

        if hours > 0 {
            write!(
                f,
                "{sign}{hours}h{}m{}{fraction}s",
                minutes % 60,
                seconds % 60
            )
        } else if minutes > 0 {
            write!(f, "{sign}{minutes}m{}{fraction}s", seconds % 60)
        } else {
            write!(f, "{sign}{seconds}{fraction}s")
        }
    }
}

/// Split `value` into its integer part and the `.ddd` text of its lowest
/// `precision` decimal digits, trailing zeros trimmed. The fraction text is
/// empty when those digits are all zero.
fn split_fraction(value: u64, precision: u32) -> (u64, String) {
    let divisor = 10_u64.pow(precision);
    let remainder = value % divisor;
    if remainder == 0 {
        return (value / divisor, String::new());
    }

    let digits = format!("{remainder:0width$}", width = precision as usize);
    (value / divisor, format!(".{}", digits.trim_end_matches('0')))
}
