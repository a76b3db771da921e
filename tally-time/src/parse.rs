use tracing::debug;

use crate::duration::Duration;
use crate::error::ParseError;
use crate::units::{BASE_UNITS, UnitTable};

/// Magnitude cap while accumulating; 2^63 so that `-2^63` stays reachable.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// Parse with the standard grammar: `[-+]?([0-9]*(\.[0-9]*)?[a-z]+)+`
/// over `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m` and `h`.
///
/// An empty string is rejected.
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    scan(input, &BASE_UNITS)
}

/// Parse with a caller-supplied unit table, e.g. to add `d` and `w`.
///
/// Standard units are only recognised if the table contains them. An empty
/// string parses as zero; use [`parse_duration_with_units_strict`] to reject
/// it instead.
pub fn parse_duration_with_units(
    input: &str,
    units: &UnitTable,
) -> Result<Duration, ParseError> {
    if input.is_empty() {
        return Ok(Duration::ZERO);
    }

    scan(input, units)
}

/// Same as [`parse_duration_with_units`] but an empty string is an
/// invalid duration.
pub fn parse_duration_with_units_strict(
    input: &str,
    units: &UnitTable,
) -> Result<Duration, ParseError> {
    scan(input, units)
}

/// One parse call. Holds the unconsumed input and the original text that
/// errors are reported against.
struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
}

/// One number+unit term before scaling.
struct Term<'a> {
    whole: u64,
    fraction: u64,
    fraction_scale: f64,
    unit: &'a str,
}

fn scan(input: &str, units: &UnitTable) -> Result<Duration, ParseError> {
    let result = Scanner::new(input).run(units);
    if let Err(err) = &result {
        debug!(%err, "duration rejected");
    }
    result
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, rest: input }
    }

    fn invalid(&self) -> ParseError {
        ParseError::invalid(self.input)
    }

    fn run(mut self, units: &UnitTable) -> Result<Duration, ParseError> {
        let negative = self.sign();

        // Zero is the only value allowed without a unit.
        if self.rest == "0" {
            return Ok(Duration::ZERO);
        }
        if self.rest.is_empty() {
            return Err(self.invalid());
        }

        let mut total = 0_u64;
        while !self.rest.is_empty() {
            let term = self.term()?;
            let Some(scale) = units.get(term.unit) else {
                return Err(ParseError::unknown_unit(term.unit, self.input));
            };
            let nanos = term.nanos(scale).ok_or_else(|| self.invalid())?;
            total = total
                .checked_add(nanos)
                .filter(|total| *total <= MAGNITUDE_LIMIT)
                .ok_or_else(|| self.invalid())?;
        }

        if negative {
            // 2^63 wraps to i64::MIN, which is its own negation.
            return Ok(Duration::from_nanos((total as i64).wrapping_neg()));
        }

        i64::try_from(total)
            .map(Duration::from_nanos)
            .map_err(|_| self.invalid())
    }

    /// Consume one optional leading sign; true when it was `-`.
    fn sign(&mut self) -> bool {
        match self.rest.as_bytes().first() {
            Some(b'-') => {
                self.rest = &self.rest[1..];
                true
            }
            Some(b'+') => {
                self.rest = &self.rest[1..];
                false
            }
            _ => false,
        }
    }

    fn term(&mut self) -> Result<Term<'a>, ParseError> {
        match self.rest.as_bytes().first() {
            Some(c) if *c == b'.' || c.is_ascii_digit() => {}
            _ => return Err(self.invalid()),
        }

        let before = self.rest.len();
        let whole = self.leading_int().ok_or_else(|| self.invalid())?;
        let saw_whole = before != self.rest.len();

        let mut fraction = 0;
        let mut fraction_scale = 1.0;
        let mut saw_fraction = false;
        if let Some(after_point) = self.rest.strip_prefix('.') {
            self.rest = after_point;
            let before = self.rest.len();
            (fraction, fraction_scale) = self.leading_fraction();
            saw_fraction = before != self.rest.len();
        }

        // No digits at all, e.g. ".s" or "-.s".
        if !saw_whole && !saw_fraction {
            return Err(self.invalid());
        }

        let unit_len = self
            .rest
            .bytes()
            .position(|c| c == b'.' || c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if unit_len == 0 {
            return Err(ParseError::missing_unit(self.input));
        }
        let (unit, rest) = self.rest.split_at(unit_len);
        self.rest = rest;

        Ok(Term {
            whole,
            fraction,
            fraction_scale,
            unit,
        })
    }

    /// Consume `[0-9]*`. `None` when the value passes 2^63.
    fn leading_int(&mut self) -> Option<u64> {
        let digits = self.digit_run();
        let mut value = 0_u64;
        for c in self.rest[..digits].bytes() {
            if value > MAGNITUDE_LIMIT / 10 {
                return None;
            }
            value = value * 10 + u64::from(c - b'0');
            if value > MAGNITUDE_LIMIT {
                return None;
            }
        }
        self.rest = &self.rest[digits..];
        Some(value)
    }

    /// Consume `[0-9]*` after a decimal point as `(numerator, 10^n)`.
    ///
    /// Never fails: once the numerator would overflow, the remaining digits
    /// are consumed without adding precision.
    fn leading_fraction(&mut self) -> (u64, f64) {
        let digits = self.digit_run();
        let mut value = 0_u64;
        let mut scale = 1.0;
        for c in self.rest[..digits].bytes() {
            if value > (MAGNITUDE_LIMIT - 1) / 10 {
                break;
            }
            let next = value * 10 + u64::from(c - b'0');
            if next > MAGNITUDE_LIMIT {
                break;
            }
            value = next;
            scale *= 10.0;
        }
        self.rest = &self.rest[digits..];
        (value, scale)
    }

    fn digit_run(&self) -> usize {
        self.rest
            .bytes()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(self.rest.len())
    }
}

impl Term<'_> {
    /// `whole * scale` plus the scaled fraction, or `None` past 2^63.
    fn nanos(&self, scale: u64) -> Option<u64> {
        let mut nanos = self
            .whole
            .checked_mul(scale)
            .filter(|nanos| *nanos <= MAGNITUDE_LIMIT)?;

        if self.fraction > 0 {
            // f64 keeps fractions of an hour nanosecond-accurate; the cast
            // truncates toward zero.
            let extra = (self.fraction as f64 * (scale as f64 / self.fraction_scale)) as u64;
            nanos = nanos
                .checked_add(extra)
                .filter(|nanos| *nanos <= MAGNITUDE_LIMIT)?;
        }

        Some(nanos)
    }
}
